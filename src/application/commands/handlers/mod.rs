//! Command Handlers 实现

mod backend_handlers;
mod speech_handlers;

pub use backend_handlers::*;
pub use speech_handlers::*;
