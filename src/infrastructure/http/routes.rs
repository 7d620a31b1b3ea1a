//! HTTP Routes
//!
//! API Endpoints:
//! - /                GET   服务状态
//! - /voices          GET   已加载音色列表
//! - /speak           GET   合成并返回 WAV（?text=&voice=）
//! - /play            GET   合成并在服务端本机播放（?text=&voice=）
//! - /backend/reset   POST  清除播放器探测缓存并重新探测

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::status))
        .route("/voices", get(handlers::list_voices))
        .route("/speak", get(handlers::speak))
        .route("/play", get(handlers::play))
        .route("/backend/reset", post(handlers::reset_backend))
}
