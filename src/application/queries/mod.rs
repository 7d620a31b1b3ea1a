//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：服务状态、音色列表

mod status_queries;
mod voice_queries;

pub mod handlers;

pub use status_queries::*;
pub use voice_queries::*;
