//! Hotel room inventory service library.

pub mod config;
pub mod http;
pub mod inventory;
pub mod lifecycle;
pub mod observability;
pub mod uploads;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use inventory::{Room, RoomStore};
pub use lifecycle::Shutdown;
