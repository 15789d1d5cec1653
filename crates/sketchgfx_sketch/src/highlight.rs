//! Click-highlight support.
//!
//! Clicked entities flash to the highlight color with a widened
//! stroke and are raised above their neighbors. The stacking order
//! comes from a [`HighlightStack`] owned by the scene context, so
//! two scenes never share ordering state.

use bevy_ecs::prelude::*;

/// Stroke width multiplier while an entity is highlighted.
pub const CLICK_WIDTH_SCALE: f32 = 3.5;

/// Duration of a click highlight, in seconds.
pub const CLICK_DURATION: f32 = 0.75;

/// Base value of the stacking order counter, chosen to sit above
/// every statically placed entity.
pub const HIGHLIGHT_BASE_ORDER: u32 = 500;

/// Render stacking order of a sketch entity. Higher values draw on
/// top.
#[derive(
    Component,
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
pub struct ZOrder(pub u32);

/// Monotonic source of [`ZOrder`] values for highlight effects.
///
/// Each click takes the next order so that later highlights layer
/// over earlier ones.
#[derive(Debug, Clone)]
pub struct HighlightStack {
    next_order: u32,
}

impl HighlightStack {
    pub fn new() -> Self {
        Self {
            next_order: HIGHLIGHT_BASE_ORDER,
        }
    }

    /// Takes the next stacking order.
    pub fn next(&mut self) -> ZOrder {
        let order = ZOrder(self.next_order);
        self.next_order += 1;
        order
    }
}

impl Default for HighlightStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_are_monotonic() {
        let mut stack = HighlightStack::new();

        let first = stack.next();
        let second = stack.next();

        assert_eq!(first, ZOrder(HIGHLIGHT_BASE_ORDER));
        assert!(second > first);
    }

    #[test]
    fn stacks_are_independent() {
        let mut a = HighlightStack::new();
        let mut b = HighlightStack::new();

        a.next();
        a.next();

        // A fresh scene restarts from the base order.
        assert_eq!(b.next(), ZOrder(HIGHLIGHT_BASE_ORDER));
    }
}
