//! Plate drawing scenes: holes surrounded by boundary circles,
//! connected by outer tangent lines.

use bevy_math::Vec2;
use sketchgfx::prelude::*;
use sketchgfx_demos::{run_scenes, END_DELAY};

/// A plate hole: the inner circle is the hole itself, the outer
/// circle keeps the boundary clear of it.
struct PlateCircle {
    inner: SketchHandle,
    outer: SketchHandle,
}

impl PlateCircle {
    fn spawn(
        ctx: &mut SceneContext<'_, '_>,
        center: Vec2,
        radius: f32,
        offset: f32,
    ) -> Self {
        Self {
            inner: ctx.spawn_circle(center, radius),
            outer: ctx.spawn_circle(center, radius + offset),
        }
    }

    /// The outer circle as a math descriptor for tangency.
    fn boundary_circle(&self) -> Circle {
        Circle::new(
            self.outer.element.center(),
            self.outer
                .element
                .radius()
                .expect("plate circles are circles"),
        )
    }
}

/// Spawns the boundary line running tangent along the outside of
/// two plate circles.
fn boundary_line(
    ctx: &mut SceneContext<'_, '_>,
    from: &PlateCircle,
    to: &PlateCircle,
) -> SketchHandle {
    let (start, end) = outer_tangent_points(
        &from.boundary_circle(),
        &to.boundary_circle(),
    )
    .expect("plate circles are spaced apart");

    ctx.spawn_line(start, end)
}

struct IntakePlate;

impl Scene for IntakePlate {
    fn name(&self) -> &'static str {
        "IntakePlate"
    }

    fn construct(
        &self,
        ctx: &mut SceneContext<'_, '_>,
    ) -> Sequence {
        let front_hole = Vec2::new(-4.0, -3.0);
        let middle_hole = Vec2::new(-1.5, 0.25);
        let back_hole = Vec2::new(2.5, 1.5);

        let holes = [
            PlateCircle::spawn(ctx, front_hole, 0.4, 0.2),
            PlateCircle::spawn(ctx, middle_hole, 0.4, 0.2),
            PlateCircle::spawn(ctx, back_hole, 0.4, 0.2),
            PlateCircle::spawn(
                ctx,
                back_hole + Vec2::new(1.0, -0.2),
                0.15,
                0.2,
            ),
            PlateCircle::spawn(
                ctx,
                (front_hole + middle_hole) / 2.0,
                0.15,
                0.2,
            ),
        ];

        let inner_circles = holes
            .iter()
            .map(|hole| ctx.create(&hole.inner))
            .collect::<Vec<_>>();
        let outer_circles = holes
            .iter()
            .map(|hole| ctx.create(&hole.outer))
            .collect::<Vec<_>>();

        // Walk the boundary through the outermost holes.
        let boundary_order = [0usize, 1, 2, 3, 0];
        let boundary = boundary_order
            .windows(2)
            .map(|pair| {
                let line = boundary_line(
                    ctx,
                    &holes[pair[0]],
                    &holes[pair[1]],
                );
                ctx.create(&line)
            })
            .collect::<Vec<_>>();

        [
            inner_circles.flow(0.5),
            outer_circles.flow(0.5),
            boundary.flow(0.75),
            ctx.commands.sleep(END_DELAY),
        ]
        .chain()
    }
}

struct BoundaryRedraw;

impl Scene for BoundaryRedraw {
    fn name(&self) -> &'static str {
        "BoundaryRedraw"
    }

    fn construct(
        &self,
        ctx: &mut SceneContext<'_, '_>,
    ) -> Sequence {
        let left = PlateCircle::spawn(
            ctx,
            Vec2::new(-6.0, -2.0),
            1.75,
            0.75,
        );
        let right = PlateCircle::spawn(
            ctx,
            Vec2::new(6.0, -2.0),
            1.75,
            0.75,
        );
        let middle = PlateCircle::spawn(
            ctx,
            Vec2::new(0.0, -0.75),
            1.0,
            0.75,
        );

        let old_line = boundary_line(ctx, &left, &right);

        let setup = [
            ctx.create(&left.inner),
            ctx.create(&left.outer),
            ctx.create(&right.inner),
            ctx.create(&right.outer),
            ctx.create(&old_line),
            ctx.create(&middle.inner),
        ]
        .all();

        // The new hole invalidates the straight boundary; redraw it
        // tangent around the middle circle.
        let redraw = [
            ctx.create(&middle.outer),
            ctx.uncreate(&old_line),
            {
                let line = boundary_line(ctx, &left, &middle);
                ctx.create(&line)
            },
            {
                let line = boundary_line(ctx, &middle, &right);
                ctx.create(&line)
            },
        ]
        .chain();

        [setup, redraw, ctx.commands.sleep(END_DELAY)].chain()
    }
}

fn main() {
    run_scenes(&[&IntakePlate, &BoundaryRedraw]);
}
