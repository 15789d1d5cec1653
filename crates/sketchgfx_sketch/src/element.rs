//! Sketch element data.
//!
//! Each entity carries exactly one of the element components
//! ([`PointElement`], [`LineElement`], [`CircleElement`],
//! [`ArcElement`]). The [`Element`] enum is a value-level snapshot of
//! any of them, exposing the small geometric query surface that
//! constraint resolution consumes generically.

use bevy_ecs::prelude::*;
use bevy_math::Vec2;
use sketchgfx_math::{direction, norm, GeometryError};

/// A singular sketch vertex.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PointElement {
    pub position: Vec2,
}

impl PointElement {
    pub const fn new(position: Vec2) -> Self {
        Self { position }
    }
}

/// A sketch line segment with a vertex at each end.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct LineElement {
    pub start: Vec2,
    pub end: Vec2,
}

impl LineElement {
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        norm(self.end - self.start)
    }

    /// Unit vector from start to end.
    ///
    /// Fails for degenerate lines with coincident endpoints.
    pub fn direction(&self) -> Result<Vec2, GeometryError> {
        direction(self.start, self.end)
    }

    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }
}

/// A sketch circle with a vertex at its center.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CircleElement {
    pub center: Vec2,
    pub radius: f32,
}

impl CircleElement {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// A sketch arc with vertices at each end and at its center.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ArcElement {
    pub center: Vec2,
    pub radius: f32,
    /// Angle of the start vertex, in radians.
    pub start_angle: f32,
    /// Swept angle in radians, counter-clockwise positive.
    pub angle: f32,
}

impl ArcElement {
    pub const fn new(
        center: Vec2,
        radius: f32,
        start_angle: f32,
        angle: f32,
    ) -> Self {
        Self {
            center,
            radius,
            start_angle,
            angle,
        }
    }

    pub fn start_point(&self) -> Vec2 {
        self.center + self.radius * Vec2::from_angle(self.start_angle)
    }

    pub fn end_point(&self) -> Vec2 {
        self.center
            + self.radius
                * Vec2::from_angle(self.start_angle + self.angle)
    }
}

/// Discriminant of an [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Point,
    Line,
    Circle,
    Arc,
}

/// A value-level snapshot of any sketch element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element {
    Point(PointElement),
    Line(LineElement),
    Circle(CircleElement),
    Arc(ArcElement),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Point(_) => ElementKind::Point,
            Self::Line(_) => ElementKind::Line,
            Self::Circle(_) => ElementKind::Circle,
            Self::Arc(_) => ElementKind::Arc,
        }
    }

    /// The reference position of the element: the point itself, a
    /// line's midpoint, or a circle/arc center.
    pub fn center(&self) -> Vec2 {
        match self {
            Self::Point(point) => point.position,
            Self::Line(line) => line.midpoint(),
            Self::Circle(circle) => circle.center,
            Self::Arc(arc) => arc.center,
        }
    }

    /// The radius of a circle or arc.
    pub fn radius(&self) -> Option<f32> {
        match self {
            Self::Circle(circle) => Some(circle.radius),
            Self::Arc(arc) => Some(arc.radius),
            _ => None,
        }
    }

    /// The element uniformly displaced by `translation`.
    #[must_use]
    pub fn translated(&self, translation: Vec2) -> Self {
        match *self {
            Self::Point(point) => Self::Point(PointElement::new(
                point.position + translation,
            )),
            Self::Line(line) => Self::Line(LineElement::new(
                line.start + translation,
                line.end + translation,
            )),
            Self::Circle(circle) => Self::Circle(
                CircleElement::new(
                    circle.center + translation,
                    circle.radius,
                ),
            ),
            Self::Arc(arc) => Self::Arc(ArcElement::new(
                arc.center + translation,
                arc.radius,
                arc.start_angle,
                arc.angle,
            )),
        }
    }

    /// The element with its radius replaced, if it has one.
    #[must_use]
    pub fn with_radius(&self, radius: f32) -> Self {
        match *self {
            Self::Circle(circle) => Self::Circle(
                CircleElement::new(circle.center, radius),
            ),
            Self::Arc(arc) => Self::Arc(ArcElement::new(
                arc.center,
                radius,
                arc.start_angle,
                arc.angle,
            )),
            other => other,
        }
    }
}

impl From<PointElement> for Element {
    fn from(point: PointElement) -> Self {
        Self::Point(point)
    }
}

impl From<LineElement> for Element {
    fn from(line: LineElement) -> Self {
        Self::Line(line)
    }
}

impl From<CircleElement> for Element {
    fn from(circle: CircleElement) -> Self {
        Self::Circle(circle)
    }
}

impl From<ArcElement> for Element {
    fn from(arc: ArcElement) -> Self {
        Self::Arc(arc)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use core::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn line_accessors() {
        let line = LineElement::new(
            Vec2::new(-1.0, 0.0),
            Vec2::new(3.0, 0.0),
        );

        assert_relative_eq!(line.length(), 4.0);
        assert_eq!(line.direction().unwrap(), Vec2::X);
        assert_eq!(line.midpoint(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn degenerate_line_has_no_direction() {
        let line =
            LineElement::new(Vec2::new(2.0, 2.0), Vec2::new(2.0, 2.0));
        assert!(line.direction().is_err());
    }

    #[test]
    fn arc_endpoints() {
        let arc = ArcElement::new(
            Vec2::ZERO,
            2.0,
            0.0,
            FRAC_PI_2,
        );

        let start = arc.start_point();
        assert_relative_eq!(start.x, 2.0, epsilon = 1e-6);
        assert_relative_eq!(start.y, 0.0, epsilon = 1e-6);

        let end = arc.end_point();
        assert_relative_eq!(end.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(end.y, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn translated_moves_every_vertex() {
        let offset = Vec2::new(1.0, -2.0);

        let line: Element =
            LineElement::new(Vec2::ZERO, Vec2::X).into();
        let Element::Line(moved) = line.translated(offset) else {
            panic!("translation must preserve the element kind");
        };

        assert_eq!(moved.start, offset);
        assert_eq!(moved.end, Vec2::X + offset);
    }

    #[test]
    fn radius_queries() {
        let circle: Element =
            CircleElement::new(Vec2::ZERO, 3.0).into();
        let arc: Element =
            ArcElement::new(Vec2::ZERO, 1.0, 0.0, PI).into();
        let point: Element =
            PointElement::new(Vec2::ZERO).into();

        assert_eq!(circle.radius(), Some(3.0));
        assert_eq!(arc.radius(), Some(1.0));
        assert_eq!(point.radius(), None);

        assert_eq!(
            circle.with_radius(5.0).radius(),
            Some(5.0)
        );
    }
}
