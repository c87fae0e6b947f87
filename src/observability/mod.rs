//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers, store, uploads produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! Every request span carries the `x-request-id` assigned by the HTTP layer.

pub mod logging;
pub mod metrics;
