//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading the pay policy
//! from a YAML file and validating it before use.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PayPolicy;

/// Loads and validates the pay policy.
///
/// # Example
///
/// ```no_run
/// use timesheet_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/policy.yaml").unwrap();
/// let policy = loader.policy();
/// println!("Default site rate: ${}", policy.default_rates.site);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: PayPolicy,
}

impl PolicyLoader {
    /// Loads the policy from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PolicyNotFound`] if the file does not exist,
    /// [`EngineError::PolicyParseError`] if it is not valid YAML, and
    /// [`EngineError::InvalidPolicy`] if a value fails validation.
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EngineError::PolicyNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = fs::read_to_string(path).map_err(|e| EngineError::PolicyParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let policy: PayPolicy =
            serde_yaml::from_str(&contents).map_err(|e| EngineError::PolicyParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        validate(&policy)?;

        Ok(Self { policy })
    }

    /// Wraps an already-constructed policy, validating it first.
    pub fn from_policy(policy: PayPolicy) -> EngineResult<Self> {
        validate(&policy)?;
        Ok(Self { policy })
    }

    /// Returns a reference to the loaded policy.
    pub fn policy(&self) -> &PayPolicy {
        &self.policy
    }
}

/// Rejects policies that would make the calculation meaningless.
fn validate(policy: &PayPolicy) -> EngineResult<()> {
    let positive: [(&str, Decimal); 3] = [
        ("regular_daily_hours", policy.regular_daily_hours),
        (
            "drive_time.average_speed_mph",
            policy.drive_time.average_speed_mph,
        ),
        ("drive_time.driving_factor", policy.drive_time.driving_factor),
    ];
    for (field, value) in positive {
        if value <= Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                field: field.to_string(),
                message: "must be positive".to_string(),
            });
        }
    }

    let non_negative: [(&str, Decimal); 4] = [
        ("overtime_daily_cap", policy.overtime_daily_cap),
        ("default_rates.site", policy.default_rates.site),
        ("default_rates.travel_factor", policy.default_rates.travel_factor),
        ("scheduled_day_hours", policy.scheduled_day_hours),
    ];
    for (field, value) in non_negative {
        if value < Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                field: field.to_string(),
                message: "must not be negative".to_string(),
            });
        }
    }

    if policy.multipliers.overtime < Decimal::ONE || policy.multipliers.doubletime < Decimal::ONE {
        return Err(EngineError::InvalidPolicy {
            field: "multipliers".to_string(),
            message: "band multipliers must be at least 1.0".to_string(),
        });
    }

    Ok(())
}
