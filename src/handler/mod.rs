mod order;
mod product;
mod user;

use crate::state::AppState;
use crate::utils::shutdown_signal;
use anyhow::Result;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::order::order_routes;
pub use self::product::product_routes;
pub use self::user::user_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        order::create_order,
        order::get_order,
        order::update_order_status,

        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,

        user::get_users,
        user::get_user,
        user::create_user,
        user::update_user,
        user::delete_user,
    ),
    tags(
        (name = "Order", description = "Order endpoints"),
        (name = "Product", description = "Product endpoints"),
        (name = "User", description = "User endpoints"),
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let di = app_state.di_container;

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(order_routes(di.order_service.clone()))
            .merge(product_routes(di.product_service.clone()))
            .merge(user_routes(di.user_service.clone()))
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024));

        let (app_router, api) = api_router.split_for_parts();

        let app =
            app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
