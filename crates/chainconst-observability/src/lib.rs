//! # chainconst-observability
//!
//! Logging and metrics for ChainConst.
//!
//! ## Built-in metrics
//! - `chainconst.migrations`       — counter of changed chain IDs, tagged with network + chain
//! - `chainconst.migration_errors` — counter, tagged with error_type
//!
//! ## Structured logging
//! Text or JSON logs through `tracing-subscriber`, with per-component
//! level overrides.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::RegistryMetrics;
pub use tracing_setup::{init_tracing, LogConfig};
