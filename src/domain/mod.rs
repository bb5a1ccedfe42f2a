//! Domain layer for the pomolog engine.
//!
//! This module contains the core domain types and business rules for the
//! engine, independent of storage or clock concerns. It follows domain-driven
//! design principles by keeping the data model isolated from external
//! dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`category`]: Work category model and id allocation
//! - [`worklog`]: Work log model and today-scoped retention
//! - [`timer`]: Timer mode, countdown state, and nominal durations

pub mod category;
pub mod error;
pub mod timer;
pub mod worklog;

pub use category::{next_category_id, WorkCategory};
pub use error::{PomologError, Result};
pub use timer::{TimerMode, TimerState};
pub use worklog::{retain_today, WorkLog};
