mod order;
mod product;
mod user;

pub use self::order::OrderService;
pub use self::product::ProductService;
pub use self::user::UserService;
