use crate::error::NestingError;
use crate::geometry::primitives::Rect;

/// The stock sheet definition shared by every bin of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sheet {
    pub width: f64,
    pub height: f64,
    /// Grain direction of the material in degrees, if any
    pub grain_angle: Option<f64>,
}

impl Sheet {
    pub fn new(width: f64, height: f64) -> Result<Self, NestingError> {
        let valid = |d: f64| d.is_finite() && d > 0.0;
        if !(valid(width) && valid(height)) {
            return Err(NestingError::InvalidSheet { width, height });
        }
        Ok(Sheet {
            width,
            height,
            grain_angle: None,
        })
    }

    pub fn with_grain(mut self, angle: f64) -> Result<Self, NestingError> {
        if !angle.is_finite() {
            return Err(NestingError::InvalidSheetGrain(angle));
        }
        self.grain_angle = Some(angle);
        Ok(self)
    }

    /// `[0, width] x [0, height]`
    pub fn rect(&self) -> Rect {
        Rect::from_origin(0.0, 0.0, self.width, self.height)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_dimensions_must_be_positive() {
        assert!(Sheet::new(1000.0, 500.0).is_ok());
        assert!(matches!(
            Sheet::new(0.0, 500.0),
            Err(NestingError::InvalidSheet { .. })
        ));
        assert!(Sheet::new(1000.0, -1.0).is_err());
        assert!(Sheet::new(f64::NAN, 10.0).is_err());
        assert!(Sheet::new(10.0, 10.0).unwrap().with_grain(f64::INFINITY).is_err());
    }
}
