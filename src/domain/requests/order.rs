use crate::model::OrderStatus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    pub user_id: i32,

    /// Defaults to `new` when omitted.
    pub status: Option<OrderStatus>,

    #[validate(length(min = 1, message = "order items are required"))]
    pub order_items: Vec<CreateOrderItemRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderItemRequest {
    pub product_id: i32,
    pub quantity: i32,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

/// Repository-level form of an order creation: status resolved and prices
/// already coerced to `Decimal` for the `NUMERIC` columns.
#[derive(Debug, Clone)]
pub struct CreateOrderRecordRequest {
    pub user_id: i32,
    pub status: OrderStatus,
    pub items: Vec<CreateOrderItemRecordRequest>,
}

#[derive(Debug, Clone)]
pub struct CreateOrderItemRecordRequest {
    pub product_id: i32,
    pub quantity: i32,
    pub price: Decimal,
}
