//! Pay policy configuration for the Timesheet Pay Engine.
//!
//! This module provides functionality to load the pay policy from a YAML
//! file, including band thresholds, multipliers, default rates and
//! drive-time constants.
//!
//! # Example
//!
//! ```no_run
//! use timesheet_engine::config::PolicyLoader;
//!
//! let loader = PolicyLoader::load("./config/policy.yaml").unwrap();
//! println!("Regular band: {} hours", loader.policy().regular_daily_hours);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{
    BandMultipliers, DefaultRates, DriveTimeConfig, MissingClockOutPolicy, PayPolicy,
};
