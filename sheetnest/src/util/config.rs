use serde::{Deserialize, Serialize};

use crate::error::NestingError;

///Configuration of the spacing rules the placement evaluator enforces
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SeparationConfig {
    ///Width of material removed by the cutting tool, every footprint is inflated by it on each side
    pub kerf_width: f64,
    ///Minimum distance between the footprints of any two parts in the same bin
    pub global_clearance: f64,
    ///Parts may share a cut line: the global clearance is not applied between parts.
    ///Per-part minimum spacing still is.
    #[serde(default)]
    pub common_line_cutting: bool,
}

impl SeparationConfig {
    pub fn none() -> Self {
        Self {
            kerf_width: 0.0,
            global_clearance: 0.0,
            common_line_cutting: false,
        }
    }

    /// The clearance required between two parts with the given minimum spacing overrides.
    pub fn clearance_between(&self, spacing_a: Option<f64>, spacing_b: Option<f64>) -> f64 {
        let global = match self.common_line_cutting {
            true => 0.0,
            false => self.global_clearance,
        };
        global
            .max(spacing_a.unwrap_or(0.0))
            .max(spacing_b.unwrap_or(0.0))
    }

    pub fn validate(&self) -> Result<(), NestingError> {
        if !(self.kerf_width.is_finite() && self.kerf_width >= 0.0) {
            return Err(NestingError::InvalidKerf(self.kerf_width));
        }
        if !(self.global_clearance.is_finite() && self.global_clearance >= 0.0) {
            return Err(NestingError::InvalidClearance(self.global_clearance));
        }
        Ok(())
    }
}

impl Default for SeparationConfig {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearance_takes_the_largest_requirement() {
        let config = SeparationConfig {
            kerf_width: 1.0,
            global_clearance: 10.0,
            common_line_cutting: false,
        };
        assert_eq!(config.clearance_between(None, None), 10.0);
        assert_eq!(config.clearance_between(Some(12.0), Some(3.0)), 12.0);
        assert_eq!(config.clearance_between(None, Some(15.0)), 15.0);
    }

    #[test]
    fn common_line_cutting_drops_global_clearance() {
        let config = SeparationConfig {
            kerf_width: 1.0,
            global_clearance: 10.0,
            common_line_cutting: true,
        };
        assert_eq!(config.clearance_between(None, None), 0.0);
        assert_eq!(config.clearance_between(Some(4.0), None), 4.0);
    }

    #[test]
    fn negative_values_are_rejected() {
        let mut config = SeparationConfig::none();
        config.kerf_width = -0.1;
        assert_eq!(config.validate(), Err(NestingError::InvalidKerf(-0.1)));
        config.kerf_width = 0.0;
        config.global_clearance = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(NestingError::InvalidClearance(_))
        ));
    }
}
