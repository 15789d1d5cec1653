//! Circle constraint scenes: tangency, equal radius and
//! concentricity.

use bevy_math::Vec2;
use sketchgfx::prelude::*;
use sketchgfx_demos::{run_scenes, END_DELAY};

struct TangentCircle;

impl Scene for TangentCircle {
    fn name(&self) -> &'static str {
        "TangentCircle"
    }

    fn construct(
        &self,
        ctx: &mut SceneContext<'_, '_>,
    ) -> Sequence {
        let mut moving =
            ctx.spawn_circle(Vec2::new(-4.0, 0.0), 1.0);
        let fixed = ctx.spawn_circle(Vec2::new(3.0, 0.5), 2.0);

        [
            ctx.create(&fixed),
            ctx.create(&moving),
            ctx.constrain(
                ConstraintKind::Tangent,
                &mut moving,
                &fixed,
            )
            .expect("circle/circle tangency is supported"),
            ctx.commands.sleep(END_DELAY),
        ]
        .chain()
    }
}

struct TangentLine;

impl Scene for TangentLine {
    fn name(&self) -> &'static str {
        "TangentLine"
    }

    fn construct(
        &self,
        ctx: &mut SceneContext<'_, '_>,
    ) -> Sequence {
        let mut line = ctx.spawn_line(
            Vec2::new(-5.0, -3.0),
            Vec2::new(5.0, -3.0),
        );
        let circle = ctx.spawn_circle(Vec2::new(0.0, 1.0), 1.5);

        [
            ctx.create(&circle),
            ctx.create(&line),
            ctx.constrain(
                ConstraintKind::Tangent,
                &mut line,
                &circle,
            )
            .expect("line/circle tangency is supported"),
            ctx.commands.sleep(END_DELAY),
        ]
        .chain()
    }
}

struct EqualRadius;

impl Scene for EqualRadius {
    fn name(&self) -> &'static str {
        "EqualRadius"
    }

    fn construct(
        &self,
        ctx: &mut SceneContext<'_, '_>,
    ) -> Sequence {
        let mut arc = ctx.spawn_arc(
            Vec2::new(-3.0, 0.0),
            0.75,
            0.0,
            core::f32::consts::PI,
        );
        let circle = ctx.spawn_circle(Vec2::new(3.0, 0.0), 2.0);

        [
            ctx.create(&arc),
            ctx.create(&circle),
            ctx.constrain(ConstraintKind::Equal, &mut arc, &circle)
                .expect("arc/circle equality is supported"),
            ctx.commands.sleep(END_DELAY),
        ]
        .chain()
    }
}

struct ConcentricCircle;

impl Scene for ConcentricCircle {
    fn name(&self) -> &'static str {
        "ConcentricCircle"
    }

    fn construct(
        &self,
        ctx: &mut SceneContext<'_, '_>,
    ) -> Sequence {
        let mut outer =
            ctx.spawn_circle(Vec2::new(-3.0, 2.0), 2.5);
        let inner = ctx.spawn_circle(Vec2::new(2.0, -1.0), 1.0);

        [
            ctx.create(&inner),
            ctx.create(&outer),
            ctx.constrain(
                ConstraintKind::Concentric,
                &mut outer,
                &inner,
            )
            .expect("circle/circle concentricity is supported"),
            ctx.commands.sleep(END_DELAY),
        ]
        .chain()
    }
}

fn main() {
    run_scenes(&[
        &TangentCircle,
        &TangentLine,
        &EqualRadius,
        &ConcentricCircle,
    ]);
}
