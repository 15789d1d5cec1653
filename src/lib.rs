//! [Bevy]: https://bevyengine.org/
//! [`Action`]: sketchgfx_core::action::Action
//! [`Sequence`]: sketchgfx_core::sequence::Sequence
//! [`Scene`]: sketchgfx_sketch::scene::Scene
//!
//! SketchGfx renders CAD-style sketch animations (points, lines,
//! circles, arcs and the constraints between them: coincident,
//! tangent, equal, horizontal/vertical, midpoint, concentric) on
//! top of the [Bevy] ECS.
//!
//! The animation core is made up of [`Action`] and [`Sequence`].
//!
//! # Action
//! [`Action`] is the building block of this crate. It stores the
//! smallest unit of work that can be done in an animation: the
//! target entity, the begin and end state of one of its fields, and
//! the interpolation to use between them.
//!
//! # Sequence
//! A [`Sequence`] is made up of multiple [`Action`]s. You can think
//! of it as a group of actions. A [`Sequence`] also defines the
//! order of [`Action`]s through the use of
//! [action ordering functions](sketchgfx_core::sequence).
//!
//! # Scene
//! A [`Scene`] composes sketch entities and constraint animations
//! into a single named sequence, which the build tool can discover
//! and dispatch to a renderer.

use bevy_app::prelude::*;

pub use sketchgfx_core;
pub use sketchgfx_math;

#[cfg(feature = "sketch")]
pub use sketchgfx_sketch as sketch;

pub mod prelude {
    pub use sketchgfx_core::prelude::*;
    pub use sketchgfx_math::prelude::*;

    #[cfg(feature = "sketch")]
    pub use sketchgfx_sketch::prelude::*;
}

pub struct SketchGfxPlugin;

impl Plugin for SketchGfxPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(sketchgfx_core::SketchGfxCorePlugin);
        #[cfg(feature = "sketch")]
        app.add_plugins(sketchgfx_sketch::SketchPlugin);
    }
}
