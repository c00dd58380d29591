use serde::{Deserialize, Serialize};

/// The set of rotations a part may be placed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RotationPolicy {
    /// Only the orientation as defined in the input
    #[serde(alias = "none")]
    Fixed,
    /// Quarter turns: 0, 90, 180 and 270 degrees
    FourWay,
    /// Every multiple of the configured rotation step below 360 degrees
    #[default]
    Free,
}

impl RotationPolicy {
    /// Rotation angles (in degrees) to try, in order. 0 always comes first.
    pub fn angles(&self, rotation_step: f64) -> Vec<f64> {
        match self {
            RotationPolicy::Fixed => vec![0.0],
            RotationPolicy::FourWay => vec![0.0, 90.0, 180.0, 270.0],
            RotationPolicy::Free => {
                debug_assert!(rotation_step > 0.0);
                (0..)
                    .map(|k| k as f64 * rotation_step)
                    .take_while(|angle| *angle < 360.0)
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RotationPolicy;

    #[test]
    fn policy_angles() {
        assert_eq!(RotationPolicy::Fixed.angles(15.0), vec![0.0]);
        assert_eq!(
            RotationPolicy::FourWay.angles(15.0),
            vec![0.0, 90.0, 180.0, 270.0]
        );
        assert_eq!(
            RotationPolicy::Free.angles(120.0),
            vec![0.0, 120.0, 240.0]
        );
        assert_eq!(RotationPolicy::Free.angles(360.0), vec![0.0]);
        assert_eq!(RotationPolicy::Free.angles(7.5).len(), 48);
    }
}
