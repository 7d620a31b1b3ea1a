//! HTTP Handlers

mod speech;
mod status;

pub use speech::*;
pub use status::*;
