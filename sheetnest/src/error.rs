use thiserror::Error;

/// Broad category of a [`NestingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The instance data (sheet, parts) is malformed
    InvalidInput,
    /// The nesting configuration is out of range, a programmer error rather than a data error
    Configuration,
}

/// Reasons for rejecting a nesting run before any part is placed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NestingError {
    #[error("sheet dimensions must be finite and positive, got {width} x {height}")]
    InvalidSheet { width: f64, height: f64 },

    #[error("sheet grain angle must be finite, got {0}")]
    InvalidSheetGrain(f64),

    #[error("part {part_id:?} has {n_points} points, a polygon needs at least 3")]
    DegeneratePolygon { part_id: String, n_points: usize },

    #[error("part {part_id:?} contains a non-finite coordinate")]
    NonFiniteCoordinate { part_id: String },

    #[error("part {part_id:?} has an invalid area: {area}")]
    InvalidArea { part_id: String, area: f64 },

    #[error("part {part_id:?} requests quantity 0, at least 1 is required")]
    ZeroQuantity { part_id: String },

    #[error("part id {0:?} is used more than once")]
    DuplicatePartId(String),

    #[error("part {part_id:?} has an invalid minimum spacing: {spacing}")]
    InvalidPartSpacing { part_id: String, spacing: f64 },

    #[error("part {part_id:?} has a non-finite grain angle: {angle}")]
    InvalidPartGrain { part_id: String, angle: f64 },

    #[error("rotation step must lie in (0, 360] degrees, got {0}")]
    InvalidRotationStep(f64),

    #[error("position step must be finite and positive, got {0}")]
    InvalidPositionStep(f64),

    #[error("kerf width must be finite and non-negative, got {0}")]
    InvalidKerf(f64),

    #[error("global clearance must be finite and non-negative, got {0}")]
    InvalidClearance(f64),
}

impl NestingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NestingError::InvalidRotationStep(_)
            | NestingError::InvalidPositionStep(_)
            | NestingError::InvalidKerf(_)
            | NestingError::InvalidClearance(_) => ErrorKind::Configuration,
            _ => ErrorKind::InvalidInput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds() {
        assert_eq!(
            NestingError::InvalidSheet {
                width: 0.0,
                height: 10.0
            }
            .kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            NestingError::InvalidRotationStep(-1.0).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(NestingError::InvalidKerf(-0.5).kind(), ErrorKind::Configuration);
    }

    #[test]
    fn error_display() {
        let err = NestingError::DegeneratePolygon {
            part_id: "flange".into(),
            n_points: 2,
        };
        assert!(err.to_string().contains("flange"));
        assert!(err.to_string().contains("at least 3"));
    }
}
