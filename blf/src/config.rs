use serde::{Deserialize, Serialize};

use sheetnest::error::NestingError;
use sheetnest::util::SeparationConfig;

/// Configuration for the BLF optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct BLFConfig {
    /// Kerf compensation and spacing rules between parts
    pub separation: SeparationConfig,
    /// Angular step (degrees) between the rotations tried for parts with a free rotation policy
    pub rotation_step: f64,
    /// Distance between two consecutive positions of the placement grid, on both axes
    #[serde(default = "default_position_step")]
    pub position_step: f64,
    /// Maximum number of positions evaluated when searching a single bin for a single part-unit.
    /// If undefined, the whole grid is scanned.
    #[serde(default)]
    pub max_iterations: Option<usize>,
}

fn default_position_step() -> f64 {
    5.0
}

impl BLFConfig {
    pub fn validate(&self) -> Result<(), NestingError> {
        if !(self.rotation_step > 0.0 && self.rotation_step <= 360.0) {
            return Err(NestingError::InvalidRotationStep(self.rotation_step));
        }
        if !(self.position_step.is_finite() && self.position_step > 0.0) {
            return Err(NestingError::InvalidPositionStep(self.position_step));
        }
        self.separation.validate()
    }
}

impl Default for BLFConfig {
    fn default() -> Self {
        Self {
            separation: SeparationConfig::default(),
            rotation_step: 90.0,
            position_step: default_position_step(),
            max_iterations: None,
        }
    }
}
