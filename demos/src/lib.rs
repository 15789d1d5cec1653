//! Shared runner for the demo scenes.
//!
//! Each demo example registers its scenes with [`run_scenes`]; the
//! scene to play is selected by the first command line argument,
//! which is how `sketchgfx-build` dispatches renders. Without an
//! argument, every registered scene plays in order.

use core::time::Duration;

use bevy_app::prelude::*;
use bevy_app::ScheduleRunnerPlugin;
use bevy_ecs::prelude::*;
use bevy_ecs::world::CommandQueue;
use bevy_time::TimePlugin;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use sketchgfx::prelude::*;
use sketchgfx::SketchGfxPlugin;

const FRAME_TIME: Duration = Duration::from_millis(16);

/// Hold time at the end of a scene, in seconds.
pub const END_DELAY: f32 = 2.0;

/// Plays the scene selected by the command line, or all of them.
pub fn run_scenes(scenes: &[&dyn Scene]) {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match std::env::args().nth(1) {
        Some(name) => {
            let Some(scene) = scenes
                .iter()
                .find(|scene| scene.name() == name)
            else {
                let available = scenes
                    .iter()
                    .map(|scene| scene.name())
                    .collect::<Vec<_>>()
                    .join(", ");
                error!(
                    "unknown scene {name}; available: {available}"
                );
                return;
            };

            run_scene(*scene);
        }
        None => {
            for scene in scenes {
                run_scene(*scene);
            }
        }
    }
}

/// Plays a single scene to completion in a headless app.
pub fn run_scene(scene: &dyn Scene) {
    info!("playing {}", scene.name());

    let mut app = App::new();
    app.add_plugins((
        ScheduleRunnerPlugin::run_loop(FRAME_TIME),
        TimePlugin,
        SketchGfxPlugin,
    ));
    app.add_systems(Update, exit_when_finished);

    let world = app.world_mut();
    let mut queue = CommandQueue::default();
    let mut ctx =
        SceneContext::new(Commands::new(&mut queue, world));

    let sequence = scene.construct(&mut ctx);
    ctx.commands.spawn(SequencePlayerBundle {
        sequence,
        sequence_player: SequencePlayer { time_scale: 1.0 },
        ..Default::default()
    });

    drop(ctx);
    queue.apply(world);

    app.run();
}

/// Stops the app once every sequence has played through.
fn exit_when_finished(
    q_sequences: Query<(&Sequence, &SequenceController)>,
    mut exit: EventWriter<AppExit>,
) {
    let finished = q_sequences.iter().all(|(sequence, controller)| {
        controller.curr_time() >= sequence.duration()
    });

    if finished {
        exit.write(AppExit::Success);
    }
}
