use crate::{
    abstract_trait::ProductRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{
        CreateProductRecordRequest, ProductFilterRecord, UpdateProductRecordRequest,
    },
    errors::RepositoryError,
    model::Product as ProductModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ProductRepository {
    db: ConnectionPool,
}

impl ProductRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepositoryTrait for ProductRepository {
    async fn find_all(
        &self,
        filter: &ProductFilterRecord,
    ) -> Result<Vec<ProductModel>, RepositoryError> {
        // Filters are optional; a NULL bind disables its predicate. Column
        // names never come from the request.
        let products = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, name, description, price, category
            FROM products
            WHERE ($1::VARCHAR IS NULL OR category = $1)
              AND ($2::NUMERIC IS NULL OR price >= $2)
              AND ($3::NUMERIC IS NULL OR price <= $3)
            ORDER BY id
            "#,
        )
        .bind(filter.category.as_deref())
        .bind(filter.min_price)
        .bind(filter.max_price)
        .fetch_all(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to list products: {:?}", err);
            RepositoryError::from(err)
        })?;

        Ok(products)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, name, description, price, category
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch product {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        Ok(product)
    }

    async fn create(
        &self,
        req: &CreateProductRecordRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (name, description, price, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, price, category
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.price)
        .bind(&req.category)
        .fetch_one(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product '{}': {:?}", req.name, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created product ID {} ('{}')", product.id, product.name);
        Ok(product)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRecordRequest,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        // Sparse update over the fixed column allow-list: a NULL bind keeps
        // the stored value.
        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET name        = COALESCE($2, name),
                description = COALESCE($3, description),
                price       = COALESCE($4, price),
                category    = COALESCE($5, category)
            WHERE id = $1
            RETURNING id, name, description, price, category
            "#,
        )
        .bind(id)
        .bind(req.name.as_deref())
        .bind(req.description.as_deref())
        .bind(req.price)
        .bind(req.category.as_deref())
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if product.is_some() {
            info!("🔄 Updated product {}", id);
        }
        Ok(product)
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        let deleted = sqlx::query_scalar::<_, i32>(
            r#"
            DELETE FROM products WHERE id = $1 RETURNING id
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete product {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if deleted.is_some() {
            info!("🗑️ Deleted product {}", id);
        }
        Ok(deleted.is_some())
    }
}
