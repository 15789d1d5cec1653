use bevy_ecs::prelude::*;

use crate::ease::{cubic, EaseFn};
use crate::f32lerp::F32Lerp;
use crate::sequence::Sequence;
use crate::ThreadSafe;

/// Function for interpolating a type based on a [`f32`] time.
pub type InterpFn<F> = fn(start: &F, end: &F, t: f32) -> F;

/// Function for getting a mutable reference of a field of type `F`
/// in type `T`. Type `F` can be similar to `T` as well.
pub type GetFieldMut<T, F> = fn(source: &mut T) -> &mut F;

/// Basic data structure to describe an animation action.
#[derive(Component, Clone, Copy)]
pub struct Action<T, F>
where
    T: ThreadSafe,
    F: ThreadSafe,
{
    /// Target [`Entity`] for [`Component`] manipulation.
    pub(crate) entity: Entity,
    /// Initial value of the action.
    pub(crate) start: F,
    /// Final value of the action.
    pub(crate) end: F,
    /// Function for getting a mutable reference of a field
    /// (or itself) from the component.
    pub(crate) get_field_fn: GetFieldMut<T, F>,
    /// Function for interpolating the field value based on a [`f32`]
    /// time.
    pub(crate) interp_fn: InterpFn<F>,
    /// Function for easing the [`f32`] time value for the action.
    pub(crate) ease_fn: EaseFn,
}

impl<T, F> Action<T, F>
where
    T: ThreadSafe,
    F: ThreadSafe,
{
    /// Creates a new [`Action`].
    pub fn new(
        entity: Entity,
        start: F,
        end: F,
        get_field_fn: GetFieldMut<T, F>,
        interp_fn: InterpFn<F>,
    ) -> Self {
        Self {
            entity,
            start,
            end,
            get_field_fn,
            interp_fn,
            ease_fn: cubic::ease_in_out,
        }
    }

    /// Overwrite the existing [easing function](EaseFn).
    pub fn with_ease(mut self, ease_fn: EaseFn) -> Self {
        self.ease_fn = ease_fn;
        self
    }

    /// Overwrite the existing [interpolation function](InterpFn).
    pub fn with_interp(mut self, interp_fn: InterpFn<F>) -> Self {
        self.interp_fn = interp_fn;
        self
    }

    /// Convert an [`Action`] into a [`Motion`] by adding a duration.
    pub fn animate(self, duration: f32) -> Motion<T, F> {
        Motion {
            action: self,
            duration,
        }
    }
}

impl<T, F> Action<T, F>
where
    T: ThreadSafe,
    F: F32Lerp + ThreadSafe,
{
    /// Creates a new [`Action`] with [`F32Lerp`] as the default
    /// [interpolation function](InterpFn).
    pub fn new_f32lerp(
        entity: Entity,
        start: F,
        end: F,
        get_field_fn: GetFieldMut<T, F>,
    ) -> Self {
        Self {
            entity,
            start,
            end,
            get_field_fn,
            interp_fn: F::f32lerp,
            ease_fn: cubic::ease_in_out,
        }
    }
}

/// Timing metadata of a single [`Action`] inside a [`Sequence`].
#[derive(Clone, Copy)]
pub(crate) struct ActionSpan {
    /// Target [`Entity`] holding the [`Action`] component.
    action_id: Entity,
    /// Time at which animation should begin.
    pub(crate) start_time: f32,
    /// Duration of animation in seconds.
    pub(crate) duration: f32,
}

impl ActionSpan {
    pub fn new(action_id: Entity, duration: f32) -> Self {
        Self {
            action_id,
            start_time: 0.0,
            duration,
        }
    }

    pub fn id(&self) -> Entity {
        self.action_id
    }

    #[inline]
    pub fn with_start_time(mut self, start_time: f32) -> Self {
        self.start_time = start_time;
        self
    }

    #[inline]
    pub fn end_time(&self) -> f32 {
        self.start_time + self.duration
    }
}

/// An [`Action`] paired with its play duration, ready to be turned
/// into a [`Sequence`].
#[derive(Clone, Copy)]
pub struct Motion<T, F>
where
    T: ThreadSafe,
    F: ThreadSafe,
{
    pub action: Action<T, F>,
    pub duration: f32,
}

pub trait SequenceBuilderExt {
    /// Converts a [`Motion`] into a [`Sequence`].
    fn play_motion<T, F>(&mut self, motion: Motion<T, F>) -> Sequence
    where
        T: ThreadSafe,
        F: ThreadSafe;

    /// Creates an empty [`Sequence`] which acts as a pause.
    fn sleep(&mut self, duration: f32) -> Sequence;
}

impl SequenceBuilderExt for Commands<'_, '_> {
    fn play_motion<T, F>(&mut self, motion: Motion<T, F>) -> Sequence
    where
        T: ThreadSafe,
        F: ThreadSafe,
    {
        let action_id = self.spawn(motion.action).id();

        Sequence::single(ActionSpan::new(action_id, motion.duration))
    }

    fn sleep(&mut self, duration: f32) -> Sequence {
        Sequence::empty(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::MultiSeqOrd;
    use bevy_math::Vec2;

    #[derive(Component)]
    struct Dot {
        position: Vec2,
    }

    #[test]
    fn play_motion_creates_single_span_sequence() {
        let mut world = World::new();

        let id = world
            .spawn(Dot {
                position: Vec2::ZERO,
            })
            .id();

        let mut queue = bevy_ecs::world::CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);

        let action = Action::new_f32lerp(
            id,
            Vec2::ZERO,
            Vec2::ONE,
            |dot: &mut Dot| &mut dot.position,
        );
        let sequence = commands.play_motion(action.animate(2.0));

        assert_eq!(sequence.duration(), 2.0);

        queue.apply(&mut world);
        // 1 for the action entity, 1 for the original entity.
        assert_eq!(world.entities().len(), 2);
    }

    #[test]
    fn sleep_is_an_empty_pause() {
        let mut world = World::new();
        let id = world.spawn_empty().id();

        let mut queue = bevy_ecs::world::CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);

        let action = Action::new_f32lerp(
            id,
            0.0_f32,
            1.0,
            |x: &mut f32| x,
        );

        let sequence = [
            commands.play_motion(action.animate(1.0)),
            commands.sleep(0.5),
        ]
        .chain();

        assert_eq!(sequence.duration(), 1.5);
    }
}
