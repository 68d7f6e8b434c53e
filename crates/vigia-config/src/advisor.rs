//! Advisory synthesis settings.

use serde::{Deserialize, Serialize};

const fn default_max_drivers() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdvisorConfig {
    /// Drivers turned into proposals per prediction.
    #[serde(default = "default_max_drivers")]
    pub max_drivers: usize,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            max_drivers: default_max_drivers(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        assert_eq!(AdvisorConfig::default().max_drivers, 5);
    }
}
