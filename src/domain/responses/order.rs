use crate::model::{Order as OrderModel, OrderItem as OrderItemModel, OrderStatus};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: i32,
    pub user_id: i32,
    pub order_date: String,
    pub status: OrderStatus,
    pub order_items: Vec<OrderItemResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderItemResponse {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderStatusResponse {
    pub id: i32,
    pub status: OrderStatus,
}

impl From<OrderItemModel> for OrderItemResponse {
    fn from(value: OrderItemModel) -> Self {
        OrderItemResponse {
            id: value.id,
            order_id: value.order_id,
            product_id: value.product_id,
            quantity: value.quantity,
            price: value.price.to_f64().unwrap_or_default(),
        }
    }
}

// model to response; items keep the order the repository returned them in
impl From<(OrderModel, Vec<OrderItemModel>)> for OrderResponse {
    fn from((order, items): (OrderModel, Vec<OrderItemModel>)) -> Self {
        OrderResponse {
            id: order.id,
            user_id: order.user_id,
            order_date: order.order_date.to_string(),
            status: order.status.parse().unwrap_or_default(),
            order_items: items.into_iter().map(OrderItemResponse::from).collect(),
        }
    }
}
