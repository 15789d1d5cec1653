//! Constraint resolution.
//!
//! A constraint names a geometric relationship between a `base`
//! element (the one being edited) and a `target` element (the one
//! it is related to). Resolution computes the concrete edit that
//! satisfies the relationship without performing it; the scene layer
//! turns the [`Resolution`] into an animation.
//!
//! All (constraint, element-kind) pairings are dispatched from a
//! single place in [`resolve`] / [`resolve_single`]; unsupported
//! pairings are a usage error, not a panic.

use bevy_math::Vec2;
use sketchgfx_math::prelude::*;
use thiserror::Error;

use crate::element::{Element, ElementKind, LineElement};

/// The kinds of relationship a sketch constraint can enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// Two points (or a point and a curve) occupy the same location.
    Coincident,
    /// Two circles touch externally, or a line touches a circle.
    Tangent,
    /// Equal radii, or equal line lengths.
    Equal,
    /// Same `y` coordinate (point pair), or a flat line.
    Horizontal,
    /// Same `x` coordinate (point pair), or an upright line.
    Vertical,
    /// A point sits at the midpoint of a line.
    Midpoint,
    /// Two circles or arcs share a center.
    Concentric,
}

/// The concrete edit that satisfies a constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// Uniform displacement of the whole element.
    Translate(Vec2),
    /// New endpoint positions of a line.
    MoveEndpoints { start: Vec2, end: Vec2 },
    /// New radius of a circle or arc.
    SetRadius(f32),
}

impl Resolution {
    /// The `base` element after the edit.
    ///
    /// Resolutions are only produced for matching element kinds, so
    /// a [`Resolution::MoveEndpoints`] always meets a line and a
    /// [`Resolution::SetRadius`] a circle or arc.
    #[must_use]
    pub fn apply(&self, element: &Element) -> Element {
        match (*self, element) {
            (Self::Translate(translation), _) => {
                element.translated(translation)
            }
            (
                Self::MoveEndpoints { start, end },
                Element::Line(_),
            ) => Element::Line(LineElement::new(start, end)),
            (Self::SetRadius(radius), _) => {
                element.with_radius(radius)
            }
            _ => *element,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConstraintError {
    /// The constraint is not defined for this pairing of element
    /// kinds.
    #[error("{kind:?} is not supported between {base:?} and {target:?}")]
    Unsupported {
        kind: ConstraintKind,
        base: ElementKind,
        target: ElementKind,
    },
    /// The inputs are geometrically degenerate (coincident points,
    /// zero-length lines).
    #[error("degenerate geometry: {0}")]
    Degenerate(#[from] GeometryError),
}

impl ConstraintError {
    fn unsupported(
        kind: ConstraintKind,
        base: &Element,
        target: &Element,
    ) -> Self {
        Self::Unsupported {
            kind,
            base: base.kind(),
            target: target.kind(),
        }
    }
}

/// Resolves a binary constraint, editing `base` to satisfy the
/// relationship against an untouched `target`.
pub fn resolve(
    kind: ConstraintKind,
    base: &Element,
    target: &Element,
) -> Result<Resolution, ConstraintError> {
    use ConstraintKind::*;
    use Element::*;

    match (kind, base, target) {
        (Coincident, Point(b), Point(t)) => {
            Ok(Resolution::Translate(t.position - b.position))
        }
        (Coincident, Point(b), Line(t)) => {
            let foot =
                project_onto_line(b.position, t.start, t.end)?;
            Ok(Resolution::Translate(foot - b.position))
        }
        (Coincident, Point(b), Circle(t)) => {
            let outward = direction(t.center, b.position)?;
            let rim = t.center + t.radius * outward;
            Ok(Resolution::Translate(rim - b.position))
        }
        (Coincident, Point(b), Arc(t)) => {
            let outward = direction(t.center, b.position)?;
            let rim = t.center + t.radius * outward;
            Ok(Resolution::Translate(rim - b.position))
        }

        (Tangent, Circle(b), Circle(t)) => {
            let translation = tangent_translation(
                &sketchgfx_math::tangent::Circle::new(
                    b.center, b.radius,
                ),
                &sketchgfx_math::tangent::Circle::new(
                    t.center, t.radius,
                ),
            )?;
            Ok(Resolution::Translate(translation))
        }
        (Tangent, Line(b), Circle(t)) => {
            let translation = line_tangent_translation(
                b.start,
                b.end,
                &sketchgfx_math::tangent::Circle::new(
                    t.center, t.radius,
                ),
            )?;
            Ok(Resolution::Translate(translation))
        }
        (Tangent, Circle(b), Line(t)) => {
            // Moving the circle instead of the line reverses the
            // offset direction.
            let translation = line_tangent_translation(
                t.start,
                t.end,
                &sketchgfx_math::tangent::Circle::new(
                    b.center, b.radius,
                ),
            )?;
            Ok(Resolution::Translate(-translation))
        }

        (Equal, Circle(_) | Arc(_), Circle(_) | Arc(_)) => {
            // Radius existence is guaranteed by the match arm.
            let radius = target.radius().ok_or_else(|| {
                ConstraintError::unsupported(kind, base, target)
            })?;
            Ok(Resolution::SetRadius(radius))
        }
        (Equal, Line(b), Line(t)) => {
            let dir = b.direction()?;
            let half = t.length() * 0.5;
            let mid = b.midpoint();
            Ok(Resolution::MoveEndpoints {
                start: mid - dir * half,
                end: mid + dir * half,
            })
        }

        (Horizontal, Point(b), Point(t)) => Ok(
            Resolution::Translate(Vec2::new(
                0.0,
                t.position.y - b.position.y,
            )),
        ),
        (Vertical, Point(b), Point(t)) => Ok(
            Resolution::Translate(Vec2::new(
                t.position.x - b.position.x,
                0.0,
            )),
        ),

        (Midpoint, Point(b), Line(t)) => Ok(
            Resolution::Translate(t.midpoint() - b.position),
        ),

        (Concentric, Circle(_) | Arc(_), Circle(_) | Arc(_)) => {
            Ok(Resolution::Translate(
                target.center() - base.center(),
            ))
        }

        _ => Err(ConstraintError::unsupported(kind, base, target)),
    }
}

/// Resolves a unary constraint on a single element.
///
/// Only [`ConstraintKind::Horizontal`] and
/// [`ConstraintKind::Vertical`] on a line are unary: the end vertex
/// pivots to align with the start vertex.
pub fn resolve_single(
    kind: ConstraintKind,
    base: &Element,
) -> Result<Resolution, ConstraintError> {
    use ConstraintKind::*;

    match (kind, base) {
        (Horizontal, Element::Line(line)) => {
            let length = line.length();
            let flip =
                if line.end.x < line.start.x { -1.0 } else { 1.0 };
            Ok(Resolution::MoveEndpoints {
                start: line.start,
                end: line.start + Vec2::new(flip * length, 0.0),
            })
        }
        (Vertical, Element::Line(line)) => {
            let length = line.length();
            let flip =
                if line.end.y < line.start.y { -1.0 } else { 1.0 };
            Ok(Resolution::MoveEndpoints {
                start: line.start,
                end: line.start + Vec2::new(0.0, flip * length),
            })
        }
        _ => Err(ConstraintError::Unsupported {
            kind,
            base: base.kind(),
            target: base.kind(),
        }),
    }
}
