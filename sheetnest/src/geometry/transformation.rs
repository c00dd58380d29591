use std::borrow::Borrow;

use ordered_float::NotNan;

use crate::geometry::DTransformation;
use crate::geometry::sin_cos_deg;

#[derive(Clone, Debug, PartialEq)]
///Proper rigid transformation in matrix form.
///Rotations are expressed in degrees and always happen about the origin.
pub struct Transformation {
    matrix: [[NotNan<f64>; 3]; 3],
}

impl Transformation {
    pub fn from_dt(dt: &DTransformation) -> Self {
        Self {
            matrix: rot_transl_m(dt.rotation(), dt.translation()),
        }
    }

    pub fn matrix(&self) -> &[[NotNan<f64>; 3]; 3] {
        &self.matrix
    }
}

impl<T> From<T> for Transformation
where
    T: Borrow<DTransformation>,
{
    fn from(dt: T) -> Self {
        Self::from_dt(dt.borrow())
    }
}

const _0: NotNan<f64> = unsafe { NotNan::new_unchecked(0.0) };
const _1: NotNan<f64> = unsafe { NotNan::new_unchecked(1.0) };

//rotation followed by translation
fn rot_transl_m(angle: f64, (tx, ty): (f64, f64)) -> [[NotNan<f64>; 3]; 3] {
    let (sin, cos) = sin_cos_deg(angle);
    let cos = NotNan::new(cos).expect("cos is NaN");
    let sin = NotNan::new(sin).expect("sin is NaN");
    let h = NotNan::new(tx).expect("tx is NaN");
    let k = NotNan::new(ty).expect("ty is NaN");

    [[cos, -sin, h], [sin, cos, k], [_0, _0, _1]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::geo_traits::Transformable;
    use crate::geometry::primitives::Point;

    #[test]
    fn rotation_then_translation() {
        let dt = DTransformation::new(90.0, (5.0, 1.0));
        let t = dt.compose();
        let mut p = Point(2.0, 0.0);
        p.transform(&t);
        assert_eq!(p, Point(5.0, 3.0));
        assert_eq!(Transformation::from(dt), t);
    }

    #[test]
    fn zero_rotation_only_translates() {
        let t = DTransformation::new(0.0, (3.0, -4.0)).compose();
        assert_eq!(Point(1.0, 1.0).transform_clone(&t), Point(4.0, -3.0));
    }
}
