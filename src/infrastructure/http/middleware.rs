//! HTTP Middleware
//!
//! 请求日志：4xx 记 warn，5xx 记 error，其余记 debug，附带耗时

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// 请求日志中间件
///
/// 业务错误的详细信息在 `ApiError::into_response()` 中记录，这里只记录状态与耗时
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(%method, %path, status = status.as_u16(), elapsed_ms, "HTTP server error");
    } else if status.is_client_error() {
        tracing::warn!(%method, %path, status = status.as_u16(), elapsed_ms, "HTTP client error");
    } else {
        tracing::debug!(%method, %path, status = status.as_u16(), elapsed_ms, "HTTP request served");
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    fn create_test_router() -> Router {
        Router::new()
            .route("/wav", get(|| async { ([(header::CONTENT_TYPE, "audio/wav")], "RIFF") }))
            .route("/bad", get(|| async { StatusCode::BAD_REQUEST }))
            .route("/gateway", get(|| async { StatusCode::BAD_GATEWAY }))
            .layer(axum::middleware::from_fn(request_logging_middleware))
    }

    async fn call(uri: &str) -> Response {
        create_test_router()
            .oneshot(HttpRequest::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_success_passes_through_unchanged() {
        let response = call("/wav").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "audio/wav");
    }

    #[tokio::test]
    async fn test_error_statuses_are_preserved() {
        assert_eq!(call("/bad").await.status(), StatusCode::BAD_REQUEST);
        assert_eq!(call("/gateway").await.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(call("/missing").await.status(), StatusCode::NOT_FOUND);
    }
}
