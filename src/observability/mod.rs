//! Tracing setup for the engine.
//!
//! This module wires the `tracing` macros used throughout the crate to a
//! formatted subscriber. The engine itself only emits spans and events; the
//! embedding host decides whether and where they go by calling
//! [`init_tracing`] (or installing its own subscriber instead).
//!
//! # Configuration
//!
//! The filter directive is resolved from:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` option in the configuration file
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! Initialize tracing early in the host lifecycle:
//!
//! ```
//! use pomolog::observability::init_tracing;
//! use pomolog::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("engine initialized");
//! ```

mod init;

pub use init::init_tracing;
