//! Planar geometry helpers used to position sketch entities relative
//! to one another.
//!
//! All functions here are pure and stateless. A [`Vec2`] doubles as
//! both an absolute position (point) and a displacement (vector);
//! no separate types are needed beyond that distinction.
//!
//! Degenerate inputs (zero-length vectors, coincident points) surface
//! as a [`GeometryError`] instead of an arbitrary fallback vector.
//! Callers are expected to exclude such cases before invoking the
//! helpers that cannot tolerate them.

use bevy_math::Vec2;
use thiserror::Error;

pub mod tangent;

pub mod prelude {
    pub use crate::tangent::{
        line_tangent_translation, outer_tangent_points,
        tangent_translation, Circle,
    };
    pub use crate::{
        angle_between_points, direction, norm, normalize,
        project_onto_line, GeometryError,
    };
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A vector with (near) zero length cannot define a direction.
    #[error("zero-length vector has no direction")]
    ZeroLengthVector,
    /// Two points expected to be distinct occupy the same location.
    #[error("coincident points")]
    CoincidentPoints,
    /// One circle contains the other, no outer tangent line exists.
    #[error("no outer tangent line exists between the circles")]
    NoTangentLine,
}

/// Euclidean length of `v`.
#[inline]
pub fn norm(v: Vec2) -> f32 {
    v.length()
}

/// Returns `v` scaled to unit length.
///
/// Fails on (near) zero-length input, which has no defined direction.
pub fn normalize(v: Vec2) -> Result<Vec2, GeometryError> {
    v.try_normalize().ok_or(GeometryError::ZeroLengthVector)
}

/// The unit vector pointing from `a` to `b`.
///
/// Fails when `a` and `b` (nearly) coincide.
pub fn direction(a: Vec2, b: Vec2) -> Result<Vec2, GeometryError> {
    (b - a)
        .try_normalize()
        .ok_or(GeometryError::CoincidentPoints)
}

/// The signed angle subtended at `center` between `p` and `q`.
///
/// Counter-clockwise angles are positive, matching the sweep
/// direction of arc animations.
///
/// Fails when either point coincides with `center`.
pub fn angle_between_points(
    p: Vec2,
    q: Vec2,
    center: Vec2,
) -> Result<f32, GeometryError> {
    let u = p - center;
    let v = q - center;

    if u.try_normalize().is_none() || v.try_normalize().is_none() {
        return Err(GeometryError::CoincidentPoints);
    }

    Ok(u.angle_to(v))
}

/// Projects `point` onto the infinite line through `a` and `b`.
///
/// Fails when `a` and `b` coincide (the line is undefined).
pub fn project_onto_line(
    point: Vec2,
    a: Vec2,
    b: Vec2,
) -> Result<Vec2, GeometryError> {
    let dir = direction(a, b)?;
    Ok(a + (point - a).dot(dir) * dir)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use core::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn direction_is_unit_length() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(-3.0, 5.5);

        let dir = direction(a, b).unwrap();
        assert_relative_eq!(norm(dir), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn direction_of_coincident_points_fails() {
        let p = Vec2::new(4.2, -1.0);
        assert_eq!(
            direction(p, p),
            Err(GeometryError::CoincidentPoints)
        );
    }

    #[test]
    fn normalize_zero_fails() {
        assert_eq!(
            normalize(Vec2::ZERO),
            Err(GeometryError::ZeroLengthVector)
        );
    }

    #[test]
    fn angle_of_equal_points_is_zero() {
        let p = Vec2::new(3.0, 0.0);
        let angle =
            angle_between_points(p, p, Vec2::ZERO).unwrap();
        assert_relative_eq!(angle, 0.0);
    }

    #[test]
    fn angle_is_ccw_positive() {
        let p = Vec2::new(1.0, 0.0);
        let q = Vec2::new(0.0, 1.0);

        let angle =
            angle_between_points(p, q, Vec2::ZERO).unwrap();
        assert_relative_eq!(angle, FRAC_PI_2, epsilon = 1e-6);

        // Reversing the points flips the sign.
        let angle =
            angle_between_points(q, p, Vec2::ZERO).unwrap();
        assert_relative_eq!(angle, -FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn angle_at_coincident_center_fails() {
        let p = Vec2::new(1.0, 0.0);
        assert_eq!(
            angle_between_points(p, p, p),
            Err(GeometryError::CoincidentPoints)
        );
    }

    #[test]
    fn projection_lands_on_line() {
        let a = Vec2::new(-2.0, 1.0);
        let b = Vec2::new(4.0, 1.0);

        let foot =
            project_onto_line(Vec2::new(1.0, 5.0), a, b).unwrap();
        assert_relative_eq!(foot.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(foot.y, 1.0, epsilon = 1e-6);
    }
}
