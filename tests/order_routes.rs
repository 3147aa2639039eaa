use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use storefront::{
    abstract_trait::{DynOrderService, OrderServiceTrait},
    domain::{
        requests::CreateOrderRequest,
        responses::{OrderItemResponse, OrderResponse, OrderStatusResponse},
    },
    errors::ServiceError,
    handler::order_routes,
    model::OrderStatus,
};
use tower::ServiceExt;

/// Order service double that fabricates server-assigned ids the way the
/// real repository would, without a database.
struct FakeOrderService;

#[async_trait]
impl OrderServiceTrait for FakeOrderService {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<OrderResponse, ServiceError> {
        if req.order_items.is_empty() {
            return Err(ServiceError::Validation("order items are required".into()));
        }
        let order_items = req
            .order_items
            .iter()
            .enumerate()
            .map(|(idx, item)| OrderItemResponse {
                id: idx as i32 + 1,
                order_id: 1,
                product_id: item.product_id,
                quantity: item.quantity,
                price: item.price,
            })
            .collect();
        Ok(OrderResponse {
            id: 1,
            user_id: req.user_id,
            order_date: NaiveDate::from_ymd_opt(2026, 8, 30)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap()
                .to_string(),
            status: req.status.unwrap_or_default(),
            order_items,
        })
    }

    async fn get_order(&self, order_id: i32) -> Result<OrderResponse, ServiceError> {
        Err(ServiceError::NotFound(format!(
            "Order {order_id} not found"
        )))
    }

    async fn update_order_status(
        &self,
        order_id: i32,
        status: OrderStatus,
    ) -> Result<OrderStatusResponse, ServiceError> {
        Ok(OrderStatusResponse {
            id: order_id,
            status,
        })
    }
}

fn app() -> axum::Router {
    let service = Arc::new(FakeOrderService) as DynOrderService;
    order_routes(service).split_for_parts().0
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn post_orders_returns_201_with_items_in_input_order() {
    let body = json!({
        "user_id": 1,
        "order_items": [{"product_id": 5, "quantity": 2, "price": 9.99}]
    });

    let response = app()
        .oneshot(json_request("POST", "/orders", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "new");
    assert!(json["id"].is_number());
    assert_eq!(json["order_items"][0]["product_id"], 5);
    assert_eq!(json["order_items"][0]["quantity"], 2);
    assert_eq!(json["order_items"][0]["price"], 9.99);
}

#[tokio::test]
async fn post_orders_with_empty_items_is_rejected_with_400() {
    let body = json!({"user_id": 1, "order_items": []});

    let response = app()
        .oneshot(json_request("POST", "/orders", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
}

#[tokio::test]
async fn post_orders_with_item_missing_quantity_is_rejected_with_400() {
    let body = json!({
        "user_id": 1,
        "order_items": [
            {"product_id": 5, "quantity": 2, "price": 9.99},
            {"product_id": 3, "price": 19.99}
        ]
    });

    let response = app()
        .oneshot(json_request("POST", "/orders", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_missing_order_returns_404_with_error_body() {
    let request = Request::builder()
        .method("GET")
        .uri("/orders/99")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Order 99 not found");
}

#[tokio::test]
async fn patch_status_with_unknown_status_is_rejected_with_400() {
    let body = json!({"status": "shipped"});

    let response = app()
        .oneshot(json_request("PATCH", "/orders/7/status", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn patch_status_returns_only_id_and_status() {
    let body = json!({"status": "completed"});

    let response = app()
        .oneshot(json_request("PATCH", "/orders/7/status", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, json!({"id": 7, "status": "completed"}));
}
