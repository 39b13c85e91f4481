//! LLM Gateway module
//!
//! Serves every inbound request with HTML imagined by the upstream model.

pub mod config;
pub mod handlers;
pub mod server;

pub use config::GatewayConfig;
pub use handlers::GatewayState;
pub use server::{build_router, start_server};
