use bevy_ecs::component::Mutable;
use bevy_ecs::prelude::*;
use bevy_time::Time;
use smallvec::SmallVec;

use crate::action::{Action, ActionSpan};
use crate::ThreadSafe;

/// Bundle to encapsulate [`Sequence`] and [`SequenceController`].
#[derive(Bundle, Default)]
pub struct SequenceBundle {
    pub sequence: Sequence,
    pub sequence_controller: SequenceController,
}

impl SequenceBundle {
    pub fn from_sequence(sequence: Sequence) -> Self {
        Self {
            sequence,
            ..Default::default()
        }
    }
}

/// Bundle to encapsulate [`Sequence`], [`SequenceController`],
/// and [`SequencePlayer`].
#[derive(Bundle, Default)]
pub struct SequencePlayerBundle {
    pub sequence: Sequence,
    pub sequence_controller: SequenceController,
    pub sequence_player: SequencePlayer,
}

impl SequencePlayerBundle {
    pub fn from_sequence(sequence: Sequence) -> Self {
        Self {
            sequence,
            ..Default::default()
        }
    }
}

/// A group of actions in chronological order.
#[derive(Component, Default, Clone)]
pub struct Sequence {
    duration: f32,
    pub(crate) spans: SmallVec<[ActionSpan; 1]>,
}

impl Sequence {
    pub(crate) fn single(span: ActionSpan) -> Self {
        let duration = span.duration;
        let mut spans = SmallVec::new();
        spans.push(span);

        Self { spans, duration }
    }

    pub(crate) fn empty(duration: f32) -> Self {
        Self {
            duration,
            ..Default::default()
        }
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }
}

/// Plays the [`Sequence`] component attached to this entity through
/// `target_time` manipulation.
#[derive(Component, Default)]
pub struct SequenceController {
    /// The current time.
    curr_time: f32,
    /// Target time to reach (and not exceed).
    pub target_time: f32,
}

impl SequenceController {
    /// Get the current time.
    pub fn curr_time(&self) -> f32 {
        self.curr_time
    }
}

/// Manipulates the `target_time` variable of the
/// [`SequenceController`] component attached to this entity with a
/// `time_scale`.
#[derive(Component, Default)]
pub struct SequencePlayer {
    pub time_scale: f32,
}

// SEQUENCE ORDERING FUNCTIONS

pub trait MultiSeqOrd {
    /// Run one [`Sequence`] after another.
    fn chain(self) -> Sequence;
    /// Run all [`Sequence`]s concurrently and wait for all of them
    /// to finish.
    fn all(self) -> Sequence;
    /// Run all [`Sequence`]s concurrently and wait for any of them
    /// to finish.
    fn any(self) -> Sequence;
    /// Run one [`Sequence`] after another with a fixed delay time.
    fn flow(self, delay: f32) -> Sequence;
}

impl MultiSeqOrd for &[Sequence] {
    fn chain(self) -> Sequence {
        chain(self)
    }

    fn all(self) -> Sequence {
        all(self)
    }

    fn any(self) -> Sequence {
        any(self)
    }

    fn flow(self, t: f32) -> Sequence {
        flow(t, self)
    }
}

pub trait SingleSeqOrd {
    /// Run a [`Sequence`] after a fixed delay time.
    fn delay(self, t: f32) -> Sequence;
}

impl SingleSeqOrd for Sequence {
    fn delay(self, t: f32) -> Sequence {
        delay(t, self)
    }
}

/// Run one [`Sequence`] after another.
pub fn chain(sequences: &[Sequence]) -> Sequence {
    let mut final_sequence = Sequence::default();
    let mut chain_duration = 0.0;

    for sequence in sequences {
        for span in &sequence.spans {
            final_sequence.spans.push(
                span.with_start_time(
                    span.start_time + chain_duration,
                ),
            );
        }

        chain_duration += sequence.duration;
    }

    final_sequence.duration = chain_duration;
    final_sequence
}

/// Run all [`Sequence`]s concurrently and wait for all of them to
/// finish.
pub fn all(sequences: &[Sequence]) -> Sequence {
    let mut final_sequence = Sequence::default();
    let mut max_duration = 0.0;

    for sequence in sequences {
        for span in &sequence.spans {
            final_sequence.spans.push(*span);
        }

        max_duration = f32::max(max_duration, sequence.duration);
    }

    final_sequence.duration = max_duration;
    final_sequence
}

/// Run all [`Sequence`]s concurrently and wait for any of them to
/// finish.
pub fn any(sequences: &[Sequence]) -> Sequence {
    let mut final_sequence = Sequence::default();
    let mut min_duration = f32::MAX;

    for sequence in sequences {
        for span in &sequence.spans {
            final_sequence.spans.push(*span);
        }

        min_duration = f32::min(min_duration, sequence.duration);
    }

    if sequences.is_empty() {
        min_duration = 0.0;
    }

    final_sequence.duration = min_duration;
    final_sequence
}

/// Run one [`Sequence`] after another with a fixed delay time.
pub fn flow(t: f32, sequences: &[Sequence]) -> Sequence {
    let mut final_sequence = Sequence::default();
    let mut flow_duration = 0.0;
    let mut final_duration = 0.0;

    for sequence in sequences {
        for span in &sequence.spans {
            final_sequence.spans.push(
                span.with_start_time(span.start_time + flow_duration),
            );
        }

        flow_duration += t;
        final_duration = f32::max(
            final_duration,
            flow_duration - t + sequence.duration,
        );
    }

    final_sequence.duration = final_duration;
    final_sequence
}

/// Run a [`Sequence`] after a fixed delay time.
pub fn delay(t: f32, sequence: Sequence) -> Sequence {
    let mut final_sequence = Sequence::default();

    for span in &sequence.spans {
        final_sequence
            .spans
            .push(span.with_start_time(span.start_time + t));
    }

    final_sequence.duration = sequence.duration + t;
    final_sequence
}

/// System for animating the [`Component`] related [`Action`]s that
/// are inside the [`Sequence`].
pub fn animate_component<Comp, Target>(
    mut q_components: Query<&mut Comp>,
    q_actions: Query<&'static Action<Comp, Target>>,
    q_sequences: Query<(&Sequence, &SequenceController)>,
) where
    Comp: Component<Mutability = Mutable>,
    Target: ThreadSafe,
{
    for (sequence, controller) in q_sequences.iter() {
        let Some(actions) =
            generate_action_iter(&q_actions, sequence, controller)
        else {
            continue;
        };

        for (action, span) in actions {
            // Get component to mutate based on action id.
            let Ok(mut component) =
                q_components.get_mut(action.entity)
            else {
                continue;
            };

            let mut unit_time = (controller.target_time
                - span.start_time)
                / span.duration;

            // In case of division by 0.0
            if f32::is_nan(unit_time) {
                unit_time = 0.0;
            }

            unit_time = f32::clamp(unit_time, 0.0, 1.0);
            // Calculate unit time using ease function.
            unit_time = (action.ease_fn)(unit_time);

            // Mutate the component using interpolate function.
            let field = (action.get_field_fn)(&mut component);
            *field = (action.interp_fn)(
                &action.start,
                &action.end,
                unit_time,
            );
        }
    }
}

/// Update [`SequenceController::target_time`] based on
/// [`SequencePlayer::time_scale`].
pub(crate) fn update_target_time(
    mut q_sequences: Query<(
        &Sequence,
        &mut SequenceController,
        &SequencePlayer,
    )>,
    time: Res<Time>,
) {
    for (sequence, mut controller, player) in q_sequences.iter_mut()
    {
        controller.target_time = f32::clamp(
            controller.target_time
                + time.delta_secs() * player.time_scale,
            0.0,
            sequence.duration(),
        );
    }
}

/// Safely update [`SequenceController::curr_time`] after performing
/// all the necessary actions.
pub(crate) fn update_curr_time(
    mut q_sequences: Query<(&Sequence, &mut SequenceController)>,
) {
    for (sequence, mut controller) in q_sequences.iter_mut() {
        controller.target_time = f32::clamp(
            controller.target_time,
            0.0,
            sequence.duration(),
        );

        controller.curr_time = controller.target_time;
    }
}

fn generate_action_iter<'a, Comp, Target>(
    q_actions: &'a Query<&'static Action<Comp, Target>>,
    sequence: &'a Sequence,
    controller: &'a SequenceController,
) -> Option<
    impl Iterator<Item = (&'a Action<Comp, Target>, &'a ActionSpan)>,
>
where
    Comp: Component<Mutability = Mutable>,
    Target: ThreadSafe,
{
    // Do not perform any actions if there are no changes to the
    // timeline timings or there are no actions at all.
    if controller.curr_time() == controller.target_time
        || sequence.spans.is_empty()
    {
        return None;
    }

    // Calculate time flow direction based on time difference.
    let direction = f32::signum(
        controller.target_time - controller.curr_time(),
    ) as isize;

    let timeline_start =
        f32::min(controller.curr_time(), controller.target_time);
    let timeline_end =
        f32::max(controller.curr_time(), controller.target_time);

    let mut start_index = 0;
    let mut end_index = sequence.spans.len() - 1;

    // Swap direction if needed.
    if direction == -1 {
        start_index = end_index;
        end_index = 0;
    }

    let mut action_index = start_index;

    Some(core::iter::from_fn(move || {
        // Loop through `Action`s in the direction that the timeline
        // is going towards.
        loop {
            if action_index
                == (end_index as isize + direction) as usize
            {
                return None;
            }

            let span = &sequence.spans[action_index];
            let action_id = span.id();

            action_index =
                (action_index as isize + direction) as usize;

            let is_time_overlap = time_range_overlap(
                span.start_time,
                span.end_time(),
                timeline_start,
                timeline_end,
            );
            // Ignore if `ActionSpan` not in range.
            if is_time_overlap == false {
                continue;
            }

            // Ignore if `Action` does not exists.
            if let Ok(action) = q_actions.get(action_id) {
                return Some((action, span));
            }
        }
    }))
}

/// Calculate if 2 time range (in float) overlaps.
fn time_range_overlap(
    a_begin: f32,
    a_end: f32,
    b_begin: f32,
    b_end: f32,
) -> bool {
    a_begin <= b_end && b_begin <= a_end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionSpan;

    fn span(start_time: f32, duration: f32) -> ActionSpan {
        ActionSpan::new(Entity::PLACEHOLDER, duration)
            .with_start_time(start_time)
    }

    fn single(duration: f32) -> Sequence {
        Sequence::single(span(0.0, duration))
    }

    #[test]
    fn chain_accumulates_durations() {
        let sequence = [single(1.0), single(2.0)].chain();

        assert_eq!(sequence.duration(), 3.0);
        // Second span starts after the first one ends.
        assert_eq!(sequence.spans[1].start_time, 1.0);
    }

    #[test]
    fn all_takes_longest_duration() {
        let sequence = [single(1.0), single(3.0)].all();

        assert_eq!(sequence.duration(), 3.0);
        // Both spans start together.
        assert_eq!(sequence.spans[0].start_time, 0.0);
        assert_eq!(sequence.spans[1].start_time, 0.0);
    }

    #[test]
    fn any_takes_shortest_duration() {
        let sequence = [single(1.0), single(3.0)].any();
        assert_eq!(sequence.duration(), 1.0);
    }

    #[test]
    fn flow_staggers_starts() {
        let sequence =
            [single(1.0), single(1.0), single(1.0)].flow(0.5);

        assert_eq!(sequence.spans[0].start_time, 0.0);
        assert_eq!(sequence.spans[1].start_time, 0.5);
        assert_eq!(sequence.spans[2].start_time, 1.0);
        // Last sequence: starts at 1.0, plays for 1.0.
        assert_eq!(sequence.duration(), 2.0);
    }

    #[test]
    fn delay_shifts_spans_and_duration() {
        let sequence = single(2.0).delay(1.5);

        assert_eq!(sequence.spans[0].start_time, 1.5);
        assert_eq!(sequence.duration(), 3.5);
    }

    #[test]
    fn empty_sequence_is_a_pause() {
        let sequence =
            [single(1.0), Sequence::empty(2.0)].chain();

        assert_eq!(sequence.duration(), 3.0);
        assert_eq!(sequence.spans.len(), 1);
    }
}
