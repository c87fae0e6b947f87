//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign x-request-id, request span)
//!     → middleware/ (metrics)
//!     → handlers.rs (decode, call store / uploads)
//!     → error.rs (ApiError → status + JSON body)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod json;
pub mod middleware;
pub mod request;
pub mod server;

pub use error::{ApiError, ReplyBody};
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
