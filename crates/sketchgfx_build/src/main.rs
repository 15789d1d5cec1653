//! A build tool which renders sketchgfx demo scenes.
//!
//! Fuzzy matching is used to enable quickly specifying targets in
//! the demo folder: to render a scene like `CoincidentLine`,
//! `-s coinLi` is usually sufficient.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use sketchgfx_build::{
    all_file_paths, all_paths, all_scenes, fuzzy_search, Renderer,
};

/// Builds sketch animations.
///
/// All inputs are parsed using a fuzzy matcher which enables (often
/// aggressive) abbreviations. The matcher works by comparing tokens
/// in the input with target tokens; token splits are determined
/// using capital letters, slashes, and underscores.
#[derive(Parser)]
#[command(name = "sketchgfx-build")]
#[command(about = "Builds sketch animations.")]
struct Cli {
    /// Whether to build production versions of animations.
    #[arg(long)]
    production: bool,

    /// Source folder searched for demo files.
    #[arg(long, default_value = "demos/examples")]
    source: PathBuf,

    /// Demo files to build.
    #[arg(short, long, num_args = 0..)]
    file: Option<Vec<String>>,

    /// Paths relative to the source folder which are recursively
    /// searched for files.
    #[arg(short, long, num_args = 0..)]
    path: Option<Vec<String>>,

    /// A list of scenes to render.
    #[arg(short, long, num_args = 0..)]
    scene: Option<Vec<String>>,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt().with_env_filter(filter).init();

    let mut target_paths = match &cli.path {
        Some(path_queries) => {
            let paths = all_paths(&cli.source)?;
            let path_strs: Vec<String> = paths
                .iter()
                .map(|path| path.display().to_string())
                .collect();

            let results = fuzzy_search(&path_strs, path_queries)
                .context("matching path queries")?;

            let mut files = Vec::new();
            for result in results {
                files.extend(all_file_paths(
                    &cli.source.join(result),
                )?);
            }
            files
        }
        None => all_file_paths(&cli.source)?,
    };

    if let Some(file_queries) = &cli.file {
        let file_names: Vec<String> = target_paths
            .iter()
            .filter_map(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .map(str::to_string)
            })
            .collect();

        let results = fuzzy_search(&file_names, file_queries)
            .context("matching file queries")?;
        let results: Vec<String> =
            results.iter().map(|name| name.to_string()).collect();

        target_paths.retain(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| {
                    results.iter().any(|result| result == name)
                })
        });
    }

    let mut scenes = all_scenes(&target_paths)?;
    if let Some(scene_queries) = &cli.scene {
        let scene_names: Vec<String> = scenes
            .iter()
            .map(|(name, _)| name.clone())
            .collect();

        let results = fuzzy_search(&scene_names, scene_queries)
            .context("matching scene queries")?;
        let results: Vec<String> =
            results.iter().map(|name| name.to_string()).collect();

        scenes.retain(|(name, _)| {
            results.iter().any(|result| result == name)
        });
    }

    let renderer = Renderer::new(cli.production);
    for (scene_name, file_path) in &scenes {
        if let Err(render_error) =
            renderer.render(file_path, scene_name)
        {
            // Invocations are independent; report and move on.
            error!(
                "failed to render {} - {}: {}",
                file_path.display(),
                scene_name,
                render_error
            );
        }
    }

    Ok(())
}
