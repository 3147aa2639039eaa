use crate::{
    abstract_trait::OrderRepositoryTrait,
    config::ConnectionPool,
    domain::requests::CreateOrderRecordRequest,
    errors::RepositoryError,
    model::{Order as OrderModel, OrderItem as OrderItemModel, OrderStatus},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderRepository {
    db: ConnectionPool,
}

impl OrderRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepositoryTrait for OrderRepository {
    async fn create_order(
        &self,
        req: &CreateOrderRecordRequest,
    ) -> Result<(OrderModel, Vec<OrderItemModel>), RepositoryError> {
        // An uncommitted sqlx transaction rolls back when dropped, so every
        // early return below leaves zero rows behind.
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            INSERT INTO orders (user_id, order_date, status)
            VALUES ($1, NOW(), $2)
            RETURNING id, user_id, order_date, status
            "#,
        )
        .bind(req.user_id)
        .bind(req.status.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create order for user {}: {:?}",
                req.user_id, err
            );
            RepositoryError::from(err)
        })?;

        let mut items = Vec::with_capacity(req.items.len());
        for item in &req.items {
            let row = sqlx::query_as::<_, OrderItemModel>(
                r#"
                INSERT INTO order_items (order_id, product_id, quantity, price)
                VALUES ($1, $2, $3, $4)
                RETURNING id, order_id, product_id, quantity, price
                "#,
            )
            .bind(order.id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.price)
            .fetch_one(&mut *tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to create order item for order {}: {:?}",
                    order.id, err
                );
                RepositoryError::from(err)
            })?;
            items.push(row);
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created order ID {} with {} items for user {}",
            order.id,
            items.len(),
            order.user_id
        );
        Ok((order, items))
    }

    async fn find_by_id(
        &self,
        order_id: i32,
    ) -> Result<Option<(OrderModel, Vec<OrderItemModel>)>, RepositoryError> {
        // Both reads run inside one transaction so a concurrent create_order
        // cannot expose an order without its items.
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT id, user_id, order_date, status
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch order {}: {:?}", order_id, err);
            RepositoryError::from(err)
        })?;

        let Some(order) = order else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, OrderItemModel>(
            r#"
            SELECT id, order_id, product_id, quantity, price
            FROM order_items
            WHERE order_id = $1
            "#,
        )
        .bind(order_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to fetch items for order {}: {:?}",
                order_id, err
            );
            RepositoryError::from(err)
        })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        Ok(Some((order, items)))
    }

    async fn update_status(
        &self,
        order_id: i32,
        status: OrderStatus,
    ) -> Result<Option<OrderModel>, RepositoryError> {
        let result = sqlx::query_as::<_, OrderModel>(
            r#"
            UPDATE orders
            SET status = $2
            WHERE id = $1
            RETURNING id, user_id, order_date, status
            "#,
        )
        .bind(order_id)
        .bind(status.as_str())
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to update status of order {}: {:?}",
                order_id, err
            );
            RepositoryError::from(err)
        })?;

        if result.is_some() {
            info!("🔄 Updated order {} to status '{}'", order_id, status);
        }
        Ok(result)
    }
}
