use crate::{
    abstract_trait::{DynProductRepository, ProductServiceTrait},
    domain::{
        requests::{
            CreateProductRecordRequest, CreateProductRequest, FindAllProducts,
            ProductFilterRecord, UpdateProductRecordRequest, UpdateProductRequest,
        },
        responses::ProductResponse,
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

pub struct ProductService {
    repository: DynProductRepository,
}

impl ProductService {
    pub fn new(repository: DynProductRepository) -> Self {
        Self { repository }
    }
}

fn to_decimal(field: &str, value: f64) -> Result<Decimal, ServiceError> {
    Decimal::from_f64(value)
        .ok_or_else(|| ServiceError::Validation(format!("{field} is not a valid amount")))
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<Vec<ProductResponse>, ServiceError> {
        let filter = ProductFilterRecord {
            category: req.category.clone(),
            min_price: req.min_price.map(|v| to_decimal("min_price", v)).transpose()?,
            max_price: req.max_price.map(|v| to_decimal("max_price", v)).transpose()?,
        };

        let products = self.repository.find_all(&filter).await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(ProductResponse::from)
            .ok_or_else(|| ServiceError::NotFound(format!("Product {id} not found")))
    }

    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let record = CreateProductRecordRequest {
            name: req.name.clone(),
            description: req.description.clone(),
            price: to_decimal("price", req.price)?,
            category: req.category.clone(),
        };

        let product = self.repository.create(&record).await?;
        Ok(ProductResponse::from(product))
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        if req.is_empty() {
            return Err(ServiceError::Validation(
                "no valid fields to update".into(),
            ));
        }

        let record = UpdateProductRecordRequest {
            name: req.name.clone(),
            description: req.description.clone(),
            price: req.price.map(|v| to_decimal("price", v)).transpose()?,
            category: req.category.clone(),
        };

        self.repository
            .update(id, &record)
            .await?
            .map(ProductResponse::from)
            .ok_or_else(|| ServiceError::NotFound(format!("Product {id} not found")))
    }

    async fn delete_product(&self, id: i32) -> Result<(), ServiceError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound(format!("Product {id} not found")))
        }
    }
}
