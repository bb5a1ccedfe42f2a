//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides the engine's thin ties to the outside world: the
//! wall-clock abstraction used for countdown targets and log dates, and
//! platform path resolution for the persisted store and configuration file.

pub mod clock;
pub mod paths;

pub use clock::{local_date_string, Clock, FixedClock, SystemClock};
pub use paths::{config_file, data_dir};
