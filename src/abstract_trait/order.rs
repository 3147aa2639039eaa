use crate::{
    domain::{
        requests::{CreateOrderRecordRequest, CreateOrderRequest},
        responses::{OrderResponse, OrderStatusResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Order as OrderModel, OrderItem as OrderItemModel, OrderStatus},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderRepository = Arc<dyn OrderRepositoryTrait + Send + Sync>;
pub type DynOrderService = Arc<dyn OrderServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderRepositoryTrait {
    /// Inserts the order and all of its items inside one transaction.
    /// Either every row is persisted or none are.
    async fn create_order(
        &self,
        req: &CreateOrderRecordRequest,
    ) -> Result<(OrderModel, Vec<OrderItemModel>), RepositoryError>;

    async fn find_by_id(
        &self,
        order_id: i32,
    ) -> Result<Option<(OrderModel, Vec<OrderItemModel>)>, RepositoryError>;

    async fn update_status(
        &self,
        order_id: i32,
        status: OrderStatus,
    ) -> Result<Option<OrderModel>, RepositoryError>;
}

#[async_trait]
pub trait OrderServiceTrait {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<OrderResponse, ServiceError>;
    async fn get_order(&self, order_id: i32) -> Result<OrderResponse, ServiceError>;
    async fn update_order_status(
        &self,
        order_id: i32,
        status: OrderStatus,
    ) -> Result<OrderStatusResponse, ServiceError>;
}
