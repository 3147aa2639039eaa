use crate::{
    abstract_trait::{DynOrderRepository, OrderServiceTrait},
    domain::{
        requests::{CreateOrderItemRecordRequest, CreateOrderRecordRequest, CreateOrderRequest},
        responses::{OrderResponse, OrderStatusResponse},
    },
    errors::ServiceError,
    model::OrderStatus,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use tracing::info;

pub struct OrderService {
    repository: DynOrderRepository,
}

impl OrderService {
    pub fn new(repository: DynOrderRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl OrderServiceTrait for OrderService {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<OrderResponse, ServiceError> {
        if req.order_items.is_empty() {
            return Err(ServiceError::Validation("order items are required".into()));
        }

        let items = req
            .order_items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let price = Decimal::from_f64(item.price).ok_or_else(|| {
                    ServiceError::Validation(format!(
                        "order item {idx}: price is not a valid amount"
                    ))
                })?;
                Ok(CreateOrderItemRecordRequest {
                    product_id: item.product_id,
                    quantity: item.quantity,
                    price,
                })
            })
            .collect::<Result<Vec<_>, ServiceError>>()?;

        let record = CreateOrderRecordRequest {
            user_id: req.user_id,
            status: req.status.unwrap_or_default(),
            items,
        };

        let (order, items) = self.repository.create_order(&record).await?;

        info!(
            "📦 Order {} created for user {} ({} items)",
            order.id,
            order.user_id,
            items.len()
        );
        Ok(OrderResponse::from((order, items)))
    }

    async fn get_order(&self, order_id: i32) -> Result<OrderResponse, ServiceError> {
        self.repository
            .find_by_id(order_id)
            .await?
            .map(OrderResponse::from)
            .ok_or_else(|| ServiceError::NotFound(format!("Order {order_id} not found")))
    }

    async fn update_order_status(
        &self,
        order_id: i32,
        status: OrderStatus,
    ) -> Result<OrderStatusResponse, ServiceError> {
        let updated = self
            .repository
            .update_status(order_id, status)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Order {order_id} not found")))?;

        Ok(OrderStatusResponse {
            id: updated.id,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::OrderRepositoryTrait;
    use crate::domain::requests::CreateOrderItemRequest;
    use crate::errors::RepositoryError;
    use crate::model::{Order as OrderModel, OrderItem as OrderItemModel};
    use chrono::NaiveDate;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn order_row(id: i32, user_id: i32, status: &str) -> OrderModel {
        OrderModel {
            id,
            user_id,
            order_date: NaiveDate::from_ymd_opt(2026, 8, 30)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            status: status.into(),
        }
    }

    /// Echoes the request back with server-assigned ids, tracking whether
    /// the repository was reached at all.
    #[derive(Default)]
    struct MockOrderRepository {
        called: AtomicBool,
        missing: bool,
    }

    #[async_trait]
    impl OrderRepositoryTrait for MockOrderRepository {
        async fn create_order(
            &self,
            req: &CreateOrderRecordRequest,
        ) -> Result<(OrderModel, Vec<OrderItemModel>), RepositoryError> {
            self.called.store(true, Ordering::SeqCst);
            let order = order_row(1, req.user_id, req.status.as_str());
            let items = req
                .items
                .iter()
                .enumerate()
                .map(|(idx, item)| OrderItemModel {
                    id: idx as i32 + 1,
                    order_id: order.id,
                    product_id: item.product_id,
                    quantity: item.quantity,
                    price: item.price,
                })
                .collect();
            Ok((order, items))
        }

        async fn find_by_id(
            &self,
            order_id: i32,
        ) -> Result<Option<(OrderModel, Vec<OrderItemModel>)>, RepositoryError> {
            self.called.store(true, Ordering::SeqCst);
            if self.missing {
                return Ok(None);
            }
            Ok(Some((order_row(order_id, 1, "new"), vec![])))
        }

        async fn update_status(
            &self,
            order_id: i32,
            status: OrderStatus,
        ) -> Result<Option<OrderModel>, RepositoryError> {
            self.called.store(true, Ordering::SeqCst);
            if self.missing {
                return Ok(None);
            }
            Ok(Some(order_row(order_id, 1, status.as_str())))
        }
    }

    fn service_with(repo: MockOrderRepository) -> (OrderService, Arc<MockOrderRepository>) {
        let repo = Arc::new(repo);
        (OrderService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn create_order_returns_items_in_input_order() {
        let (service, _) = service_with(MockOrderRepository::default());
        let req = CreateOrderRequest {
            user_id: 1,
            status: None,
            order_items: vec![
                CreateOrderItemRequest {
                    product_id: 5,
                    quantity: 2,
                    price: 9.99,
                },
                CreateOrderItemRequest {
                    product_id: 3,
                    quantity: 1,
                    price: 19.99,
                },
            ],
        };

        let response = service.create_order(&req).await.unwrap();

        assert_eq!(response.status, OrderStatus::New);
        assert_eq!(response.order_items.len(), 2);
        assert_eq!(response.order_items[0].product_id, 5);
        assert_eq!(response.order_items[0].quantity, 2);
        assert_eq!(response.order_items[0].price, 9.99);
        assert_eq!(response.order_items[1].product_id, 3);
    }

    #[tokio::test]
    async fn create_order_with_empty_items_never_touches_storage() {
        let (service, repo) = service_with(MockOrderRepository::default());
        let req = CreateOrderRequest {
            user_id: 1,
            status: None,
            order_items: vec![],
        };

        let err = service.create_order(&req).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(!repo.called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn create_order_honors_explicit_status() {
        let (service, _) = service_with(MockOrderRepository::default());
        let req = CreateOrderRequest {
            user_id: 1,
            status: Some(OrderStatus::Processing),
            order_items: vec![CreateOrderItemRequest {
                product_id: 5,
                quantity: 2,
                price: 9.99,
            }],
        };

        let response = service.create_order(&req).await.unwrap();
        assert_eq!(response.status, OrderStatus::Processing);
    }

    #[tokio::test]
    async fn get_order_maps_missing_row_to_not_found() {
        let (service, _) = service_with(MockOrderRepository {
            missing: true,
            ..Default::default()
        });

        let err = service.get_order(99).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_status_returns_only_id_and_status() {
        let (service, _) = service_with(MockOrderRepository::default());

        let response = service
            .update_order_status(7, OrderStatus::Completed)
            .await
            .unwrap();

        assert_eq!(response.id, 7);
        assert_eq!(response.status, OrderStatus::Completed);
    }

    #[tokio::test]
    async fn update_status_on_missing_order_is_not_found() {
        let (service, _) = service_with(MockOrderRepository {
            missing: true,
            ..Default::default()
        });

        let err = service
            .update_order_status(99, OrderStatus::Processing)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
