//! Scene construction.
//!
//! A [`Scene`] declaratively builds its animation inside a
//! [`SceneContext`]: spawn sketch entities, then compose creation,
//! click and constraint sequences. The context tracks a value-level
//! snapshot of every spawned element in its [`SketchHandle`] so that
//! later animations can be computed from the state earlier
//! animations will leave behind.

use bevy_ecs::prelude::*;
use bevy_math::Vec2;
use sketchgfx_core::prelude::*;

use crate::constraint::{
    resolve, resolve_single, ConstraintError, ConstraintKind,
    Resolution,
};
use crate::element::{
    ArcElement, CircleElement, Element, LineElement, PointElement,
};
use crate::highlight::{
    HighlightStack, ZOrder, CLICK_DURATION, CLICK_WIDTH_SCALE,
};
use crate::style::{ColorKey, ColorPalette, DrawProgress, StrokeStyle};
use crate::SketchState;

/// Duration of entity creation/removal animations, in seconds.
pub const CREATE_DURATION: f32 = 1.0;

/// Duration of a constraint motion, in seconds.
pub const CONSTRAIN_DURATION: f32 = 1.0;

/// A named, self-contained sketch animation.
///
/// Scene names are the discovery unit of the build tool, so they
/// should be unique CamelCase identifiers.
pub trait Scene {
    fn name(&self) -> &'static str;

    fn construct(&self, ctx: &mut SceneContext<'_, '_>) -> Sequence;
}

/// A spawned sketch entity together with the value-level snapshot of
/// its element and stroke.
///
/// The snapshot reflects the state the entity will have once all
/// previously composed sequences have played.
#[derive(Debug, Clone)]
pub struct SketchHandle {
    pub entity: Entity,
    pub element: Element,
    pub stroke: StrokeStyle,
    pub state: SketchState,
}

/// Per-scene construction state.
pub struct SceneContext<'w, 's> {
    pub commands: Commands<'w, 's>,
    pub palette: ColorPalette,
    highlights: HighlightStack,
}

impl<'w, 's> SceneContext<'w, 's> {
    pub fn new(commands: Commands<'w, 's>) -> Self {
        Self {
            commands,
            palette: ColorPalette::default(),
            highlights: HighlightStack::new(),
        }
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn spawn_point(&mut self, position: Vec2) -> SketchHandle {
        self.spawn_element(PointElement::new(position).into())
    }

    pub fn spawn_line(
        &mut self,
        start: Vec2,
        end: Vec2,
    ) -> SketchHandle {
        self.spawn_element(LineElement::new(start, end).into())
    }

    pub fn spawn_circle(
        &mut self,
        center: Vec2,
        radius: f32,
    ) -> SketchHandle {
        self.spawn_element(
            CircleElement::new(center, radius).into(),
        )
    }

    pub fn spawn_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        angle: f32,
    ) -> SketchHandle {
        self.spawn_element(
            ArcElement::new(center, radius, start_angle, angle)
                .into(),
        )
    }

    fn spawn_element(&mut self, element: Element) -> SketchHandle {
        let state = SketchState::Normal;
        let stroke =
            StrokeStyle::new(self.palette.get(state.color_key()));

        let mut entity_commands = self.commands.spawn((
            stroke,
            state,
            DrawProgress(0.0),
            ZOrder::default(),
        ));

        match element {
            Element::Point(point) => entity_commands.insert(point),
            Element::Line(line) => entity_commands.insert(line),
            Element::Circle(circle) => {
                entity_commands.insert(circle)
            }
            Element::Arc(arc) => entity_commands.insert(arc),
        };

        SketchHandle {
            entity: entity_commands.id(),
            element,
            stroke,
            state,
        }
    }

    /// Draws the entity in by sweeping its [`DrawProgress`] from 0
    /// to 1.
    pub fn create(&mut self, handle: &SketchHandle) -> Sequence {
        self.draw_progress_motion(handle, 0.0, 1.0)
    }

    /// Removes the entity by sweeping its [`DrawProgress`] back to 0.
    pub fn uncreate(&mut self, handle: &SketchHandle) -> Sequence {
        self.draw_progress_motion(handle, 1.0, 0.0)
    }

    fn draw_progress_motion(
        &mut self,
        handle: &SketchHandle,
        start: f32,
        end: f32,
    ) -> Sequence {
        let action = Action::new_f32lerp(
            handle.entity,
            start,
            end,
            |progress: &mut DrawProgress| &mut progress.0,
        );

        self.commands
            .play_motion(action.animate(CREATE_DURATION))
    }

    /// Flashes the entity to the highlight color with a widened
    /// stroke, raising it above its neighbors for the rest of the
    /// scene.
    pub fn click(&mut self, handle: &SketchHandle) -> Sequence {
        let order = self.highlights.next();
        self.commands.entity(handle.entity).insert(order);

        let stroke = handle.stroke;
        let width_action = Action::new_f32lerp(
            handle.entity,
            stroke.width,
            stroke.width * CLICK_WIDTH_SCALE,
            |stroke: &mut StrokeStyle| &mut stroke.width,
        )
        .with_ease(ease::there_and_back);
        let color_action = Action::new_f32lerp(
            handle.entity,
            stroke.color,
            self.palette.get(ColorKey::Yellow),
            |stroke: &mut StrokeStyle| &mut stroke.color,
        )
        .with_ease(ease::there_and_back);

        [
            self.commands
                .play_motion(width_action.animate(CLICK_DURATION)),
            self.commands
                .play_motion(color_action.animate(CLICK_DURATION)),
        ]
        .all()
    }

    /// Performs a binary constraint: click both entities, then edit
    /// `base` to satisfy the relationship against `target`.
    ///
    /// The base entity ends up [`SketchState::Constrained`].
    pub fn constrain(
        &mut self,
        kind: ConstraintKind,
        base: &mut SketchHandle,
        target: &SketchHandle,
    ) -> Result<Sequence, ConstraintError> {
        let resolution =
            resolve(kind, &base.element, &target.element)?;

        let sequence = [
            self.click(base),
            self.click(target),
            self.resolution_motion(base, resolution),
        ]
        .chain();

        Ok(sequence)
    }

    /// Performs a unary constraint on `base` alone.
    pub fn constrain_single(
        &mut self,
        kind: ConstraintKind,
        base: &mut SketchHandle,
    ) -> Result<Sequence, ConstraintError> {
        let resolution = resolve_single(kind, &base.element)?;

        let sequence = [
            self.click(base),
            self.resolution_motion(base, resolution),
        ]
        .chain();

        Ok(sequence)
    }

    /// Animates `base` to the resolved state and marks it
    /// constrained, updating the handle snapshot along the way.
    fn resolution_motion(
        &mut self,
        base: &mut SketchHandle,
        resolution: Resolution,
    ) -> Sequence {
        let edited = resolution.apply(&base.element);
        let mut sequences =
            self.element_motions(base, &edited);

        // Settle into the constrained stroke color.
        let constrained_color = self
            .palette
            .get(SketchState::Constrained.color_key());
        let color_action = Action::new_f32lerp(
            base.entity,
            base.stroke.color,
            constrained_color,
            |stroke: &mut StrokeStyle| &mut stroke.color,
        );
        sequences.push(
            self.commands
                .play_motion(color_action.animate(CONSTRAIN_DURATION)),
        );

        base.element = edited;
        base.state = SketchState::Constrained;
        base.stroke.color = constrained_color;

        sequences.all()
    }

    /// The motions that morph `base` into `edited`, one per changed
    /// field.
    fn element_motions(
        &mut self,
        base: &SketchHandle,
        edited: &Element,
    ) -> Vec<Sequence> {
        let entity = base.entity;
        let mut sequences = Vec::new();

        match (&base.element, edited) {
            (Element::Point(from), Element::Point(to)) => {
                sequences.push(self.commands.play_motion(
                    Action::new_f32lerp(
                        entity,
                        from.position,
                        to.position,
                        |point: &mut PointElement| {
                            &mut point.position
                        },
                    )
                    .animate(CONSTRAIN_DURATION),
                ));
            }
            (Element::Line(from), Element::Line(to)) => {
                sequences.push(self.commands.play_motion(
                    Action::new_f32lerp(
                        entity,
                        from.start,
                        to.start,
                        |line: &mut LineElement| &mut line.start,
                    )
                    .animate(CONSTRAIN_DURATION),
                ));
                sequences.push(self.commands.play_motion(
                    Action::new_f32lerp(
                        entity,
                        from.end,
                        to.end,
                        |line: &mut LineElement| &mut line.end,
                    )
                    .animate(CONSTRAIN_DURATION),
                ));
            }
            (Element::Circle(from), Element::Circle(to)) => {
                sequences.push(self.commands.play_motion(
                    Action::new_f32lerp(
                        entity,
                        from.center,
                        to.center,
                        |circle: &mut CircleElement| {
                            &mut circle.center
                        },
                    )
                    .animate(CONSTRAIN_DURATION),
                ));
                sequences.push(self.commands.play_motion(
                    Action::new_f32lerp(
                        entity,
                        from.radius,
                        to.radius,
                        |circle: &mut CircleElement| {
                            &mut circle.radius
                        },
                    )
                    .animate(CONSTRAIN_DURATION),
                ));
            }
            (Element::Arc(from), Element::Arc(to)) => {
                sequences.push(self.commands.play_motion(
                    Action::new_f32lerp(
                        entity,
                        from.center,
                        to.center,
                        |arc: &mut ArcElement| &mut arc.center,
                    )
                    .animate(CONSTRAIN_DURATION),
                ));
                sequences.push(self.commands.play_motion(
                    Action::new_f32lerp(
                        entity,
                        from.radius,
                        to.radius,
                        |arc: &mut ArcElement| &mut arc.radius,
                    )
                    .animate(CONSTRAIN_DURATION),
                ));
            }
            // Resolutions preserve the element kind.
            _ => {}
        }

        sequences
    }
}

#[cfg(test)]
mod tests {
    use bevy_app::prelude::*;
    use bevy_ecs::world::CommandQueue;
    use sketchgfx_core::SketchGfxCorePlugin;

    use super::*;
    use crate::SketchPlugin;

    struct CoincidentPoints;

    impl Scene for CoincidentPoints {
        fn name(&self) -> &'static str {
            "CoincidentPoints"
        }

        fn construct(
            &self,
            ctx: &mut SceneContext<'_, '_>,
        ) -> Sequence {
            let mut base = ctx.spawn_point(Vec2::ZERO);
            let target = ctx.spawn_point(Vec2::new(3.0, 4.0));

            [
                ctx.create(&base),
                ctx.create(&target),
                ctx.constrain(
                    ConstraintKind::Coincident,
                    &mut base,
                    &target,
                )
                .unwrap(),
            ]
            .chain()
        }
    }

    fn play_to_completion(app: &mut App, duration: f32) {
        let world = app.world_mut();
        let mut q_controllers =
            world.query::<&mut SequenceController>();
        for mut controller in q_controllers.iter_mut(world) {
            controller.target_time = duration;
        }

        app.update();
    }

    #[test]
    fn constrain_updates_the_handle_snapshot() {
        let mut world = World::new();
        let mut queue = CommandQueue::default();
        let mut ctx =
            SceneContext::new(Commands::new(&mut queue, &world));

        let mut base = ctx.spawn_circle(Vec2::ZERO, 1.0);
        let target =
            ctx.spawn_circle(Vec2::new(10.0, 0.0), 2.0);

        ctx.constrain(ConstraintKind::Tangent, &mut base, &target)
            .unwrap();

        assert_eq!(
            base.element.center(),
            Vec2::new(7.0, 0.0)
        );
        assert_eq!(base.state, SketchState::Constrained);

        queue.apply(&mut world);
    }

    #[test]
    fn constrain_sequence_clicks_then_moves() {
        let mut world = World::new();
        let mut queue = CommandQueue::default();
        let mut ctx =
            SceneContext::new(Commands::new(&mut queue, &world));

        let mut base = ctx.spawn_point(Vec2::ZERO);
        let target = ctx.spawn_point(Vec2::ONE);

        let sequence = ctx
            .constrain(
                ConstraintKind::Coincident,
                &mut base,
                &target,
            )
            .unwrap();

        // Two clicks and the constraint motion play back to back.
        assert_eq!(
            sequence.duration(),
            CLICK_DURATION * 2.0 + CONSTRAIN_DURATION
        );

        queue.apply(&mut world);
    }

    #[test]
    fn unsupported_constraint_spawns_no_motion() {
        let mut world = World::new();
        let mut queue = CommandQueue::default();
        let mut ctx =
            SceneContext::new(Commands::new(&mut queue, &world));

        let mut base = ctx.spawn_point(Vec2::ZERO);
        let target = ctx.spawn_point(Vec2::ONE);

        let result = ctx.constrain(
            ConstraintKind::Tangent,
            &mut base,
            &target,
        );
        assert!(result.is_err());
        // The failed constraint leaves the snapshot untouched.
        assert_eq!(base.state, SketchState::Normal);

        queue.apply(&mut world);
    }

    #[test]
    fn scene_playback_moves_the_point() {
        let mut app = App::new();
        app.add_plugins((
            bevy_time::TimePlugin,
            SketchGfxCorePlugin,
            SketchPlugin,
        ));

        let scene = CoincidentPoints;

        let world = app.world_mut();
        let mut queue = CommandQueue::default();
        let mut ctx =
            SceneContext::new(Commands::new(&mut queue, &world));

        let sequence = scene.construct(&mut ctx);
        let duration = sequence.duration();
        ctx.commands
            .spawn(SequenceBundle::from_sequence(sequence));

        drop(ctx);
        queue.apply(world);

        play_to_completion(&mut app, duration);

        let world = app.world_mut();
        let mut q_points = world.query::<&PointElement>();
        let positions = q_points
            .iter(world)
            .map(|point| point.position)
            .collect::<Vec<_>>();

        // Both points now coincide.
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0], Vec2::new(3.0, 4.0));
        assert_eq!(positions[1], Vec2::new(3.0, 4.0));
    }

    #[test]
    fn clicks_raise_the_stacking_order() {
        let mut world = World::new();
        let mut queue = CommandQueue::default();
        let mut ctx =
            SceneContext::new(Commands::new(&mut queue, &world));

        let first = ctx.spawn_point(Vec2::ZERO);
        let second = ctx.spawn_point(Vec2::ONE);

        ctx.click(&first);
        ctx.click(&second);

        drop(ctx);
        queue.apply(&mut world);

        let first_order =
            *world.entity(first.entity).get::<ZOrder>().unwrap();
        let second_order =
            *world.entity(second.entity).get::<ZOrder>().unwrap();

        assert!(second_order > first_order);
    }
}
