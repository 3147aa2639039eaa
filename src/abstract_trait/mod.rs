mod order;
mod product;
mod user;

pub use self::order::{
    DynOrderRepository, DynOrderService, OrderRepositoryTrait, OrderServiceTrait,
};
pub use self::product::{
    DynProductRepository, DynProductService, ProductRepositoryTrait, ProductServiceTrait,
};
pub use self::user::{DynUserRepository, DynUserService, UserRepositoryTrait, UserServiceTrait};
