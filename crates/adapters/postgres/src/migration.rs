//! 数据库迁移
//!
//! 迁移脚本内嵌在二进制中，启动时应用未执行的部分。

use prodapi_errors::{AppError, AppResult};
use sqlx::PgPool;
use tracing::info;

/// 应用内嵌的数据库迁移
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to run migrations: {}", e)))?;

    info!("Database migrations applied");
    Ok(())
}
