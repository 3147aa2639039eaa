mod order;
mod product;
mod user;

pub use self::order::{OrderItemResponse, OrderResponse, OrderStatusResponse};
pub use self::product::ProductResponse;
pub use self::user::UserResponse;
