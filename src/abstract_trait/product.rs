use crate::{
    domain::{
        requests::{
            CreateProductRecordRequest, CreateProductRequest, FindAllProducts,
            ProductFilterRecord, UpdateProductRecordRequest, UpdateProductRequest,
        },
        responses::ProductResponse,
    },
    errors::{RepositoryError, ServiceError},
    model::Product as ProductModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductRepository = Arc<dyn ProductRepositoryTrait + Send + Sync>;
pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductRepositoryTrait {
    async fn find_all(
        &self,
        filter: &ProductFilterRecord,
    ) -> Result<Vec<ProductModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError>;
    async fn create(
        &self,
        req: &CreateProductRecordRequest,
    ) -> Result<ProductModel, RepositoryError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRecordRequest,
    ) -> Result<Option<ProductModel>, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait ProductServiceTrait {
    async fn find_all(&self, req: &FindAllProducts)
    -> Result<Vec<ProductResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError>;
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError>;
    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError>;
    async fn delete_product(&self, id: i32) -> Result<(), ServiceError>;
}
