//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → consumed once by HttpServer::new
//! ```
//!
//! All fields have defaults, so an absent config file runs the service with
//! the built-in settings.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::ServiceConfig;
pub use schema::{InventoryConfig, ListenerConfig, ObservabilityConfig, UploadConfig};
