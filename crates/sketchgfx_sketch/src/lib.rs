//! Sketch entities which look like CAD sketch entities (points,
//! lines, circles, arcs) and the constraints between them
//! (coincident, tangent, equal, horizontal/vertical, midpoint,
//! concentric), animated declaratively through `sketchgfx_core`.

use bevy_app::prelude::*;
use bevy_color::Color;
use bevy_ecs::prelude::*;
use bevy_math::Vec2;
use sketchgfx_core::prelude::*;

use crate::element::{
    ArcElement, CircleElement, LineElement, PointElement,
};
use crate::style::{ColorKey, DrawProgress, StrokeStyle};

pub mod constraint;
pub mod element;
pub mod highlight;
pub mod scene;
pub mod style;

pub mod prelude {
    pub use crate::constraint::{
        ConstraintError, ConstraintKind, Resolution,
    };
    pub use crate::element::{
        ArcElement, CircleElement, Element, ElementKind,
        LineElement, PointElement,
    };
    pub use crate::highlight::{HighlightStack, ZOrder};
    pub use crate::scene::{Scene, SceneContext, SketchHandle};
    pub use crate::style::{
        ColorKey, ColorPalette, DrawProgress, StrokeStyle,
    };
    pub use crate::{SketchPlugin, SketchState};
}

pub struct SketchPlugin;

impl Plugin for SketchPlugin {
    fn build(&self, app: &mut App) {
        app.animate_component::<PointElement, Vec2>()
            .animate_component::<LineElement, Vec2>()
            .animate_component::<CircleElement, Vec2>()
            .animate_component::<CircleElement, f32>()
            .animate_component::<ArcElement, Vec2>()
            .animate_component::<ArcElement, f32>()
            .animate_component::<StrokeStyle, f32>()
            .animate_component::<StrokeStyle, Color>()
            .animate_component::<DrawProgress, f32>();
    }
}

/// The constraint state of a sketch entity, reflected in its stroke
/// color.
#[derive(
    Component, Debug, Default, Clone, Copy, PartialEq, Eq, Hash,
)]
pub enum SketchState {
    #[default]
    Normal,
    Constrained,
    Error,
}

impl SketchState {
    /// The palette color that renders this state.
    pub fn color_key(self) -> ColorKey {
        match self {
            Self::Normal => ColorKey::Blue,
            Self::Constrained => ColorKey::Base0,
            Self::Error => ColorKey::Red,
        }
    }
}
