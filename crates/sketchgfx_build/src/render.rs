//! Render dispatch.
//!
//! Each selected scene is handed to an external render invocation.
//! Invocations are independent, so a failing render is reported to
//! the caller without affecting the remaining ones.

use std::io;
use std::path::Path;
use std::process::Command;

use thiserror::Error;
use tracing::info;

/// The default cargo package whose examples hold the demo scenes.
pub const DEFAULT_DEMO_PACKAGE: &str = "sketchgfx_demos";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to spawn render command: {0}")]
    Spawn(#[from] io::Error),
    #[error("render command exited with {0}")]
    Failed(std::process::ExitStatus),
}

/// Builds and runs render invocations for scenes.
pub struct Renderer {
    /// Build optimized binaries for production renders.
    pub production: bool,
    /// The cargo package containing the scene examples.
    pub package: String,
}

impl Renderer {
    pub fn new(production: bool) -> Self {
        Self {
            production,
            package: DEFAULT_DEMO_PACKAGE.to_string(),
        }
    }

    /// The render invocation for one scene of one demo file.
    pub fn command(
        &self,
        file_path: &Path,
        scene_name: &str,
    ) -> Command {
        let example = file_path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();

        let mut command = Command::new("cargo");
        command.arg("run").arg("-p").arg(&self.package);
        if self.production {
            command.arg("--release");
        }
        command
            .arg("--example")
            .arg(example)
            .arg("--")
            .arg(scene_name);

        command
    }

    /// Renders one scene, waiting for the invocation to finish.
    pub fn render(
        &self,
        file_path: &Path,
        scene_name: &str,
    ) -> Result<(), RenderError> {
        info!(
            "rendering {} - {}",
            file_path.display(),
            scene_name
        );

        let status =
            self.command(file_path, scene_name).status()?;
        if !status.success() {
            return Err(RenderError::Failed(status));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn args(command: &Command) -> Vec<&str> {
        command
            .get_args()
            .map(|arg| arg.to_str().unwrap())
            .collect()
    }

    #[test]
    fn command_targets_the_example_and_scene() {
        let renderer = Renderer::new(false);
        let command = renderer.command(
            &PathBuf::from("demos/examples/plate_boundary.rs"),
            "PlateBoundary",
        );

        assert_eq!(
            command.get_program().to_str().unwrap(),
            "cargo"
        );
        assert_eq!(
            args(&command),
            [
                "run",
                "-p",
                "sketchgfx_demos",
                "--example",
                "plate_boundary",
                "--",
                "PlateBoundary",
            ]
        );
    }

    #[test]
    fn production_renders_use_release_builds() {
        let renderer = Renderer::new(true);
        let command = renderer
            .command(&PathBuf::from("a.rs"), "SceneName");

        assert!(args(&command).contains(&"--release"));
    }
}
