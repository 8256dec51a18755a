//! 商品路由
//!
//! `/api/products` 下的 CRUD 端点，每个处理器直接委托给 Repository。

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use prodapi_domain::{Product, ProductId};
use prodapi_errors::AppError;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/products",
            get(list_products)
                .post(create_product)
                .delete(delete_all_products),
        )
        .route(
            "/api/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// 创建与更新共用的请求体；请求中多余的 id 字段被忽略
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// 查询所有商品，空表返回 204
async fn list_products(State(state): State<AppState>) -> Result<Response, ApiError> {
    let products = state.products.find_all().await?;

    if products.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok(Json(products).into_response())
}

/// 根据 ID 查询商品
async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, ApiError> {
    let id = ProductId::from(id);

    match state.products.find_by_id(&id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(AppError::not_found(format!("Product {} not found", id)).into()),
    }
}

/// 创建商品，id 由存储层分配
async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = Product::new(payload.name, payload.quantity, payload.price);
    let created = state.products.save(&product).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// 更新商品：仅覆盖 name/quantity/price，id 取自已存在的行
async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>, ApiError> {
    let id = ProductId::from(id);

    let Some(mut existing) = state.products.find_by_id(&id).await? else {
        return Err(AppError::not_found(format!("Product {} not found", id)).into());
    };

    existing.update_details(payload.name, payload.quantity, payload.price);
    let updated = state.products.save(&existing).await?;

    Ok(Json(updated))
}

/// 根据 ID 删除商品，不存在时返回 404
async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let id = ProductId::from(id);

    if !state.products.exists_by_id(&id).await? {
        return Err(AppError::not_found(format!("Product {} not found", id)).into());
    }

    state.products.delete_by_id(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// 清空商品表
async fn delete_all_products(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.products.delete_all().await?;

    Ok(StatusCode::NO_CONTENT)
}
