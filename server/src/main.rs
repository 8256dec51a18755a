//! Product API 服务入口

mod error;
mod products;
mod routing;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use prodapi_adapter_postgres::{
    PostgresConfig, PostgresProductRepository, create_pool, run_migrations,
};
use prodapi_config::AppConfig;
use prodapi_telemetry::{init_tracing, init_tracing_json};
use secrecy::ExposeSecret;
use state::AppState;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // 加载配置
    let config = AppConfig::load("config")?;

    // 初始化 tracing
    if config.is_production() {
        init_tracing_json(&config.telemetry.log_level);
    } else {
        init_tracing(&config.telemetry.log_level);
    }

    // 初始化数据库连接池并应用迁移
    let pg_config = PostgresConfig::new(config.database.url.expose_secret().as_str())
        .with_max_connections(config.database.max_connections);
    let pool = create_pool(&pg_config).await?;
    run_migrations(&pool).await?;

    // 组装路由
    let state = AppState::new(Arc::new(PostgresProductRepository::new(pool.clone())));
    let app = products::product_routes()
        .with_state(state)
        .merge(routing::api_routes(pool))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // 启动服务器
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!(%addr, app = %config.app_name, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
