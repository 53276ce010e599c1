//! Puzzle configuration types.
//!
//! A puzzle is an ordered set of glass capacities plus the target volume
//! to reach in any one glass. Configurations deserialize directly from
//! JSON documents of the form `{"target": 6, "capacities": [4, 9]}`.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The complete puzzle configuration.
///
/// Immutable for the duration of a solve; glass indices are stable, so
/// `capacities[i]` always refers to the same glass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Volume that must appear in some glass for a state to count as solved
    pub target: u32,
    /// Capacity of each glass, in glass order
    pub capacities: Vec<u32>,
}

impl PuzzleConfig {
    pub fn new(target: u32, capacities: Vec<u32>) -> Self {
        Self { target, capacities }
    }

    /// Number of glasses in the puzzle
    pub fn glass_count(&self) -> usize {
        self.capacities.len()
    }

    /// Check the configuration is well-formed.
    ///
    /// A target larger than every capacity is legal - the search simply
    /// finds zero solutions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacities.is_empty() {
            return Err(ConfigError::NoGlasses);
        }
        for (i, &capacity) in self.capacities.iter().enumerate() {
            if capacity == 0 {
                return Err(ConfigError::ZeroCapacity { glass: i + 1 });
            }
        }
        if self.target == 0 {
            return Err(ConfigError::ZeroTarget);
        }
        Ok(())
    }

    /// Upper bound on distinct fill configurations: product of
    /// (capacity + 1) over all glasses. Also bounds the number of
    /// expansions the search performs before its queue drains.
    pub fn state_space_bound(&self) -> u128 {
        self.capacities.iter().map(|&c| c as u128 + 1).product()
    }
}

/// Rejection reasons for a malformed configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The capacity list is empty
    NoGlasses,
    /// A glass has capacity zero (1-based glass number)
    ZeroCapacity { glass: usize },
    /// The target volume is zero
    ZeroTarget,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoGlasses => write!(f, "puzzle has no glasses"),
            ConfigError::ZeroCapacity { glass } => {
                write!(f, "glass {} has zero capacity", glass)
            }
            ConfigError::ZeroTarget => write!(f, "target volume must be positive"),
        }
    }
}

impl Error for ConfigError {}
