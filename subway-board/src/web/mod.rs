//! HTTP surface for display layers.
//!
//! Read-only access to the published board and station search, plus the
//! station-change entry point.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
