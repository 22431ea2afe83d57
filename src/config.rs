#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Controls the implementation-defined fields written for a rejection reason.
///
/// Missing fields take their defaults when loaded, so an application can embed
/// it in its own configuration and set only what it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JsonConfig {
    pub include_causes: bool,
    pub max_cause_depth: usize,
}

impl JsonConfig {
    #[must_use]
    pub const fn new(include_causes: bool, max_cause_depth: usize) -> Self {
        Self {
            include_causes,
            max_cause_depth,
        }
    }

    /// Effective number of causes to serialize.
    #[must_use]
    pub const fn cause_limit(&self) -> usize {
        if self.include_causes {
            self.max_cause_depth
        } else {
            0
        }
    }
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self::new(true, 8)
    }
}
