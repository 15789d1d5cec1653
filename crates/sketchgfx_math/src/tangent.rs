//! Tangency computations between circles and lines.
//!
//! Only external tangency is covered: two circles touch externally
//! when the distance between their centers equals the sum of their
//! radii, and a line is tangent to a circle when its perpendicular
//! distance to the center equals the radius.

use bevy_math::Vec2;

use crate::{direction, norm, project_onto_line, GeometryError};

/// Center and radius of a circle, consumed by the tangency helpers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// The translation that slides `moving` along the line joining the
/// centers until it externally touches `fixed`.
///
/// After applying the returned vector to `moving.center`, the center
/// distance equals `moving.radius + fixed.radius`.
///
/// Fails when the centers coincide, in which case the slide
/// direction is undefined.
pub fn tangent_translation(
    moving: &Circle,
    fixed: &Circle,
) -> Result<Vec2, GeometryError> {
    let dir = direction(moving.center, fixed.center)?;
    let dist = norm(fixed.center - moving.center);

    Ok(dir * (dist - moving.radius - fixed.radius))
}

/// The translation that moves the line through `start` and `end`
/// perpendicular to itself until it is tangent to `circle`.
///
/// Fails when the line is degenerate (coincident endpoints) or
/// passes through the circle center, where the offset side is
/// undefined.
pub fn line_tangent_translation(
    start: Vec2,
    end: Vec2,
    circle: &Circle,
) -> Result<Vec2, GeometryError> {
    let foot = project_onto_line(circle.center, start, end)?;
    let to_center = circle.center - foot;

    let dist = norm(to_center);
    let dir = to_center
        .try_normalize()
        .ok_or(GeometryError::ZeroLengthVector)?;

    Ok(dir * (dist - circle.radius))
}

/// Tangent points of the outer tangent line on the counter-clockwise
/// side of `a` and `b`.
///
/// Returns `(point_on_a, point_on_b)`. The circles may have
/// different radii. Fails when the centers coincide or when one
/// circle contains the other, where no outer tangent line exists.
pub fn outer_tangent_points(
    a: &Circle,
    b: &Circle,
) -> Result<(Vec2, Vec2), GeometryError> {
    let dir = direction(a.center, b.center)?;
    let dist = norm(b.center - a.center);

    let cos = (a.radius - b.radius) / dist;
    if cos.abs() >= 1.0 {
        return Err(GeometryError::NoTangentLine);
    }

    // Unit normal shared by both tangent points, rotated off the
    // center line by acos((ra - rb) / d).
    let normal = Vec2::from_angle(cos.acos()).rotate(dir);

    Ok((a.center + a.radius * normal, b.center + b.radius * normal))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn circle_translation_reaches_tangency() {
        let moving = Circle::new(Vec2::ZERO, 1.0);
        let fixed = Circle::new(Vec2::new(10.0, 0.0), 2.0);

        let translation =
            tangent_translation(&moving, &fixed).unwrap();
        assert_relative_eq!(norm(translation), 7.0, epsilon = 1e-5);

        let moved = Circle::new(
            moving.center + translation,
            moving.radius,
        );
        assert_relative_eq!(
            norm(fixed.center - moved.center),
            moving.radius + fixed.radius,
            epsilon = 1e-5,
        );
    }

    #[test]
    fn circle_translation_is_a_fixed_point() {
        let moving = Circle::new(Vec2::new(-3.0, 2.0), 1.5);
        let fixed = Circle::new(Vec2::new(4.0, -1.0), 0.5);

        let translation =
            tangent_translation(&moving, &fixed).unwrap();
        let moved = Circle::new(
            moving.center + translation,
            moving.radius,
        );

        // Recomputing from the tangent position yields no further
        // movement.
        let residual = tangent_translation(&moved, &fixed).unwrap();
        assert_relative_eq!(norm(residual), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn circle_translation_coincident_centers_fails() {
        let center = Vec2::new(1.0, 1.0);
        let a = Circle::new(center, 1.0);
        let b = Circle::new(center, 2.0);

        assert_eq!(
            tangent_translation(&a, &b),
            Err(GeometryError::CoincidentPoints)
        );
    }

    #[test]
    fn line_translation_reaches_tangency() {
        let start = Vec2::new(-5.0, 0.0);
        let end = Vec2::new(5.0, 0.0);
        let circle = Circle::new(Vec2::new(0.0, 4.0), 1.0);

        let translation =
            line_tangent_translation(start, end, &circle).unwrap();

        // The line slides straight up by 3 units.
        assert_relative_eq!(translation.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(translation.y, 3.0, epsilon = 1e-6);

        let moved_start = start + translation;
        let moved_end = end + translation;
        let foot = project_onto_line(
            circle.center,
            moved_start,
            moved_end,
        )
        .unwrap();
        assert_relative_eq!(
            norm(circle.center - foot),
            circle.radius,
            epsilon = 1e-5,
        );
    }

    #[test]
    fn line_through_center_fails() {
        let circle = Circle::new(Vec2::ZERO, 1.0);
        assert_eq!(
            line_tangent_translation(
                Vec2::new(-2.0, 0.0),
                Vec2::new(2.0, 0.0),
                &circle,
            ),
            Err(GeometryError::ZeroLengthVector)
        );
    }

    #[test]
    fn outer_tangent_points_touch_both_circles() {
        let a = Circle::new(Vec2::ZERO, 2.0);
        let b = Circle::new(Vec2::new(8.0, 0.0), 1.0);

        let (pa, pb) = outer_tangent_points(&a, &b).unwrap();

        assert_relative_eq!(
            norm(pa - a.center),
            a.radius,
            epsilon = 1e-5,
        );
        assert_relative_eq!(
            norm(pb - b.center),
            b.radius,
            epsilon = 1e-5,
        );

        // The tangent chord is perpendicular to both radii.
        let chord = pb - pa;
        assert_relative_eq!(
            chord.dot(pa - a.center),
            0.0,
            epsilon = 1e-3,
        );
        assert_relative_eq!(
            chord.dot(pb - b.center),
            0.0,
            epsilon = 1e-3,
        );
    }

    #[test]
    fn equal_radii_tangent_is_parallel_to_centers() {
        let a = Circle::new(Vec2::ZERO, 1.0);
        let b = Circle::new(Vec2::new(6.0, 0.0), 1.0);

        let (pa, pb) = outer_tangent_points(&a, &b).unwrap();
        // Both tangent points sit directly above the centers.
        assert_relative_eq!(pa.y, 1.0, epsilon = 1e-5);
        assert_relative_eq!(pb.y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn contained_circle_has_no_tangent() {
        let outer = Circle::new(Vec2::ZERO, 5.0);
        let inner = Circle::new(Vec2::new(1.0, 0.0), 1.0);

        assert_eq!(
            outer_tangent_points(&outer, &inner),
            Err(GeometryError::NoTangentLine)
        );
    }
}
