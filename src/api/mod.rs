//! Upload server module
//!
//! Serves the price-list upload form and a JSON conversion endpoint.
//! Run with `pricelist-server`.

pub mod handlers;
pub mod messages;
pub mod server;

pub use server::{create_router, run_api_server, ApiConfig, AppState};
