//! Line constraint scenes: coincident, horizontal/vertical, equal
//! and midpoint.

use bevy_math::Vec2;
use sketchgfx::prelude::*;
use sketchgfx_demos::{run_scenes, END_DELAY};

struct CoincidentLine;

impl Scene for CoincidentLine {
    fn name(&self) -> &'static str {
        "CoincidentLine"
    }

    fn construct(
        &self,
        ctx: &mut SceneContext<'_, '_>,
    ) -> Sequence {
        let line = ctx.spawn_line(
            Vec2::new(-4.0, -1.0),
            Vec2::new(3.0, 2.0),
        );
        let mut point = ctx.spawn_point(Vec2::new(1.0, -2.5));

        [
            ctx.create(&line),
            ctx.create(&point),
            ctx.constrain(
                ConstraintKind::Coincident,
                &mut point,
                &line,
            )
            .expect("point/line coincidence is supported"),
            ctx.commands.sleep(END_DELAY),
        ]
        .chain()
    }
}

struct HorizontalLine;

impl Scene for HorizontalLine {
    fn name(&self) -> &'static str {
        "HorizontalLine"
    }

    fn construct(
        &self,
        ctx: &mut SceneContext<'_, '_>,
    ) -> Sequence {
        let mut line = ctx.spawn_line(
            Vec2::new(-3.0, -2.0),
            Vec2::new(2.0, 1.5),
        );

        [
            ctx.create(&line),
            ctx.constrain_single(
                ConstraintKind::Horizontal,
                &mut line,
            )
            .expect("lines can always be made horizontal"),
            ctx.commands.sleep(END_DELAY),
        ]
        .chain()
    }
}

struct VerticalLine;

impl Scene for VerticalLine {
    fn name(&self) -> &'static str {
        "VerticalLine"
    }

    fn construct(
        &self,
        ctx: &mut SceneContext<'_, '_>,
    ) -> Sequence {
        let mut line = ctx.spawn_line(
            Vec2::new(-1.0, -2.0),
            Vec2::new(2.0, 2.0),
        );

        [
            ctx.create(&line),
            ctx.constrain_single(
                ConstraintKind::Vertical,
                &mut line,
            )
            .expect("lines can always be made vertical"),
            ctx.commands.sleep(END_DELAY),
        ]
        .chain()
    }
}

struct EqualLine;

impl Scene for EqualLine {
    fn name(&self) -> &'static str {
        "EqualLine"
    }

    fn construct(
        &self,
        ctx: &mut SceneContext<'_, '_>,
    ) -> Sequence {
        let mut short = ctx.spawn_line(
            Vec2::new(-4.0, 1.0),
            Vec2::new(-1.0, 1.0),
        );
        let long = ctx.spawn_line(
            Vec2::new(-4.0, -1.5),
            Vec2::new(4.0, -1.5),
        );

        [
            ctx.create(&short),
            ctx.create(&long),
            ctx.constrain(
                ConstraintKind::Equal,
                &mut short,
                &long,
            )
            .expect("line/line equality is supported"),
            ctx.commands.sleep(END_DELAY),
        ]
        .chain()
    }
}

struct MidpointLine;

impl Scene for MidpointLine {
    fn name(&self) -> &'static str {
        "MidpointLine"
    }

    fn construct(
        &self,
        ctx: &mut SceneContext<'_, '_>,
    ) -> Sequence {
        let line = ctx.spawn_line(
            Vec2::new(-3.0, 0.0),
            Vec2::new(3.0, 2.0),
        );
        let mut point = ctx.spawn_point(Vec2::new(2.0, -2.0));

        [
            ctx.create(&line),
            ctx.create(&point),
            ctx.constrain(
                ConstraintKind::Midpoint,
                &mut point,
                &line,
            )
            .expect("point/line midpoint is supported"),
            ctx.commands.sleep(END_DELAY),
        ]
        .chain()
    }
}

fn main() {
    run_scenes(&[
        &CoincidentLine,
        &HorizontalLine,
        &VerticalLine,
        &EqualLine,
        &MidpointLine,
    ]);
}
