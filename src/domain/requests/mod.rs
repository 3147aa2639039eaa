mod order;
mod product;
mod user;

pub use self::order::{
    CreateOrderItemRecordRequest, CreateOrderItemRequest, CreateOrderRecordRequest,
    CreateOrderRequest, UpdateOrderStatusRequest,
};
pub use self::product::{
    CreateProductRecordRequest, CreateProductRequest, FindAllProducts, ProductFilterRecord,
    UpdateProductRecordRequest, UpdateProductRequest,
};
pub use self::user::{CreateUserRequest, UpdateUserRequest};
