//! Application state for the Timesheet Pay Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PayPolicy;

/// Shared application state.
///
/// Contains resources shared across all request handlers, currently the
/// loaded pay policy.
#[derive(Clone)]
pub struct AppState {
    /// The loaded pay policy.
    policy: Arc<PayPolicy>,
}

impl AppState {
    /// Creates a new application state with the given pay policy.
    pub fn new(policy: PayPolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// Returns a reference to the pay policy.
    pub fn policy(&self) -> &PayPolicy {
        &self.policy
    }
}
