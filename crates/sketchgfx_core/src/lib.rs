//! The core of this crate is made up of [`Action`] and [`Sequence`].
//!
//! # Action
//! [`Action`] is the building block of every animation. It stores the
//! smallest unit of work that can be done in an animation:
//! - The target entity.
//! - The begin and end state of a field in one of its components.
//! - The interpolation function to use for interpolating between the
//!   begin and end state.
//!
//! # Sequence
//! A [`Sequence`] is made up of multiple [`Action`]s. It defines the
//! order of [`Action`]s through the use of
//! [action ordering functions](crate::sequence).
//!
//! [`Action`]: crate::action::Action
//! [`Sequence`]: crate::sequence::Sequence

use bevy_app::prelude::*;
use bevy_ecs::component::Mutable;
use bevy_ecs::prelude::*;

use crate::sequence::{
    animate_component, update_curr_time, update_target_time,
};

pub mod action;
pub mod ease;
pub mod f32lerp;
pub mod sequence;

pub mod prelude {
    pub use crate::action::{Action, Motion, SequenceBuilderExt};
    pub use crate::f32lerp::F32Lerp;
    pub use crate::sequence::{
        all, any, chain, delay, flow, MultiSeqOrd, Sequence,
        SequenceBundle, SequenceController, SequencePlayer,
        SequencePlayerBundle, SingleSeqOrd,
    };
    pub use crate::{ease, AnimateAppExt, SketchGfxSet};
}

pub struct SketchGfxCorePlugin;

impl Plugin for SketchGfxCorePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            PostUpdate,
            (
                SketchGfxSet::TargetTime,
                SketchGfxSet::Animate,
                SketchGfxSet::CurrentTime,
            )
                .chain(),
        );

        app.add_systems(
            PostUpdate,
            (
                update_target_time
                    .in_set(SketchGfxSet::TargetTime),
                update_curr_time.in_set(SketchGfxSet::CurrentTime),
            ),
        );
    }
}

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SketchGfxSet {
    /// Advance the target time in the
    /// [`SequenceController`](sequence::SequenceController).
    TargetTime,
    /// Sample actions and apply the interpolated values.
    Animate,
    /// Advance the current time in the
    /// [`SequenceController`](sequence::SequenceController).
    CurrentTime,
}

/// Utility trait for registering animatable components.
pub trait AnimateAppExt {
    fn animate_component<Comp, Target>(&mut self) -> &mut Self
    where
        Comp: Component<Mutability = Mutable>,
        Target: ThreadSafe;
}

impl AnimateAppExt for App {
    fn animate_component<Comp, Target>(&mut self) -> &mut Self
    where
        Comp: Component<Mutability = Mutable>,
        Target: ThreadSafe,
    {
        self.add_systems(
            PostUpdate,
            animate_component::<Comp, Target>
                .in_set(SketchGfxSet::Animate),
        )
    }
}

/// Auto trait for types that implements [`Send`] + [`Sync`] + `'static`.
pub trait ThreadSafe: Send + Sync + 'static {}

impl<T> ThreadSafe for T where T: Send + Sync + 'static {}
