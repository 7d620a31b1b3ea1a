//! HTTP Error Handling
//!
//! 应用层错误到 HTTP 状态码与 `{error, kind}` 响应体的映射

use axum::{
    extract::rejection::QueryRejection,
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;

use super::dto::ErrorBody;
use crate::application::ApplicationError;

/// API 错误
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        let status = match &e {
            ApplicationError::EmptyInput | ApplicationError::UnknownVoice { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApplicationError::SynthesisFailed(_) => StatusCode::BAD_GATEWAY,
            ApplicationError::SynthesisTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApplicationError::NoAudioBackend => StatusCode::SERVICE_UNAVAILABLE,
            ApplicationError::PlaybackFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        Self {
            status,
            kind: e.kind(),
            message: e.to_string(),
        }
    }
}

/// 查询串无法解析（如重复的 `text` 参数）
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            kind: "InvalidRequest",
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status.as_u16(), kind = self.kind, error = %self.message, "Request failed");
        } else {
            tracing::warn!(status = %self.status.as_u16(), kind = self.kind, error = %self.message, "Request rejected");
        }

        let body = ErrorBody {
            error: self.message,
            kind: self.kind.to_string(),
        };
        (self.status, Json(body)).into_response()
    }
}
