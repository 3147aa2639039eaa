use crate::{
    abstract_trait::{
        DynOrderRepository, DynOrderService, DynProductRepository, DynProductService,
        DynUserRepository, DynUserService,
    },
    config::ConnectionPool,
    repository::{OrderRepository, ProductRepository, UserRepository},
    service::{OrderService, ProductService, UserService},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub user_service: DynUserService,
    pub product_service: DynProductService,
    pub order_service: DynOrderService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("user_service", &"<UserService>")
            .field("product_service", &"<ProductService>")
            .field("order_service", &"<OrderService>")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let user_repository =
            Arc::new(UserRepository::new(pool.clone())) as DynUserRepository;
        let product_repository =
            Arc::new(ProductRepository::new(pool.clone())) as DynProductRepository;
        let order_repository = Arc::new(OrderRepository::new(pool)) as DynOrderRepository;

        let user_service = Arc::new(UserService::new(user_repository)) as DynUserService;
        let product_service =
            Arc::new(ProductService::new(product_repository)) as DynProductService;
        let order_service = Arc::new(OrderService::new(order_repository)) as DynOrderService;

        Self {
            user_service,
            product_service,
            order_service,
        }
    }
}
