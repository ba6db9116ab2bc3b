//! API layer - HTTP endpoints and middleware

pub mod error;
pub mod health;
pub mod json;
pub mod router;
pub mod state;
pub mod users;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
pub use router::{create_router, create_router_with_state};
pub use state::AppState;
