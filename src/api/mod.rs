//! HTTP API module for the roster service.
//!
//! Provides the REST endpoints for creating and listing employees and for
//! downloading the roster as a spreadsheet.

mod auth;
mod handlers;
mod request;
mod response;
mod state;

pub use auth::{CREATE_ROLES, Caller, READ_ROLES, ROLES_HEADER, Role};
pub use handlers::create_router;
pub use request::{DROPPED_DETAILS_HEADER, PRINCIPAL_HEADER, principal_from_headers};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
