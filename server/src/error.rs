//! 处理器边界的错误转换

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use prodapi_errors::AppError;
use tracing::error;

/// 处理器返回的错误包装
///
/// 统一折叠为不带响应体的状态码：NotFound 为 404，其余一律 500。
pub struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(err = %self.0, "Request failed");
        }

        status.into_response()
    }
}
