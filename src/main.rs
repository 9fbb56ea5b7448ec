//! Signup Service Server
//!
//! Development server binary: loads configuration from the environment,
//! runs migrations, and serves the signup API.

use std::sync::Arc;

use dotenv::dotenv;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use signup_service::{
    api::{create_routes, AppState},
    config::AppConfig,
    service::SignupService,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv().ok();

    env_logger::init();

    log::info!("starting signup service v{}", signup_service::VERSION);

    let config = AppConfig::from_env()?;
    let database_pool = config.database.create_pool().await?;

    log::info!("running database migrations");
    sqlx::migrate!("./migrations").run(&database_pool).await?;

    let app_state = AppState {
        signup_service: Arc::new(SignupService::new(database_pool)),
    };

    let app = create_routes().with_state(app_state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any) // Permissive CORS for development
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .into_inner(),
    );

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    log::info!("listening on {}", bind_addr);
    log::info!("  POST /signup - register a new account");
    log::info!("  GET  /health - health check");

    axum::serve(listener, app).await?;

    Ok(())
}
