//! Status Queries

/// 服务状态查询（GET /）
#[derive(Debug, Clone)]
pub struct GetStatus;
