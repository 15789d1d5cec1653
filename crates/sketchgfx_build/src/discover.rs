//! Scene and file discovery.
//!
//! Demo sources are searched recursively for Rust files, and scene
//! names are collected with a static scan for `impl Scene for`
//! blocks. Duplicate scene names across files are not explicitly
//! handled; the last one found wins.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Folder names skipped during traversal.
pub const EXCLUDE_FOLDERS: &[&str] = &["target", "media", ".git"];

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DiscoverError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn is_excluded(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| EXCLUDE_FOLDERS.contains(&name))
}

/// Searches `base` recursively for all Rust files.
pub fn all_file_paths(
    base: &Path,
) -> Result<Vec<PathBuf>, DiscoverError> {
    let mut files = Vec::new();
    collect_files(base, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_files(
    dir: &Path,
    files: &mut Vec<PathBuf>,
) -> Result<(), DiscoverError> {
    let entries = fs::read_dir(dir)
        .map_err(|source| DiscoverError::io(dir, source))?;

    for entry in entries {
        let entry = entry
            .map_err(|source| DiscoverError::io(dir, source))?;
        let path = entry.path();

        if path.is_dir() {
            if !is_excluded(&path) {
                collect_files(&path, files)?;
            }
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }

    Ok(())
}

/// Searches `base` for all possible sub-paths (directories and
/// files), returned relative to `base`.
///
/// These are the candidates for path queries, which select whole
/// directory subtrees at once.
pub fn all_paths(
    base: &Path,
) -> Result<Vec<PathBuf>, DiscoverError> {
    let mut paths = Vec::new();
    collect_paths(base, base, &mut paths)?;
    paths.sort();
    Ok(paths)
}

fn collect_paths(
    base: &Path,
    dir: &Path,
    paths: &mut Vec<PathBuf>,
) -> Result<(), DiscoverError> {
    let entries = fs::read_dir(dir)
        .map_err(|source| DiscoverError::io(dir, source))?;

    for entry in entries {
        let entry = entry
            .map_err(|source| DiscoverError::io(dir, source))?;
        let path = entry.path();

        if path.is_dir() {
            if is_excluded(&path) {
                continue;
            }

            if let Ok(relative) = path.strip_prefix(base) {
                paths.push(relative.to_path_buf());
            }
            collect_paths(base, &path, paths)?;
        } else if let Ok(relative) = path.strip_prefix(base) {
            paths.push(relative.to_path_buf());
        }
    }

    Ok(())
}

/// Scene names declared in `file`, found by scanning for
/// `impl Scene for <Name>` items.
pub fn scene_names(
    file: &Path,
) -> Result<Vec<String>, DiscoverError> {
    let text = fs::read_to_string(file)
        .map_err(|source| DiscoverError::io(file, source))?;

    const MARKER: &str = "impl Scene for ";

    let mut names = Vec::new();
    for line in text.lines() {
        let Some(index) = line.find(MARKER) else {
            continue;
        };

        let rest = &line[index + MARKER.len()..];
        let name: String = rest
            .chars()
            .take_while(|ch| {
                ch.is_ascii_alphanumeric() || *ch == '_'
            })
            .collect();

        if !name.is_empty() {
            names.push(name);
        }
    }

    Ok(names)
}

/// Searches the given files for all declared scenes.
///
/// Returns a mapping of scene names to the file declaring them.
pub fn all_scenes(
    file_paths: &[PathBuf],
) -> Result<Vec<(String, PathBuf)>, DiscoverError> {
    let mut scenes = Vec::new();

    for file_path in file_paths {
        for name in scene_names(file_path)? {
            scenes.push((name, file_path.clone()));
        }
    }

    Ok(scenes)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn finds_rust_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path();

        write(base, "top.rs", "");
        write(base, "nested/inner.rs", "");
        write(base, "nested/readme.md", "");
        write(base, "target/generated.rs", "");

        let files = all_file_paths(base).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|path| {
                path.file_name().unwrap().to_str().unwrap()
            })
            .collect();

        // Markdown is skipped and the target folder is excluded.
        assert_eq!(names, ["inner.rs", "top.rs"]);
    }

    #[test]
    fn paths_are_relative_and_include_directories() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path();

        write(base, "design/plate.rs", "");

        let paths = all_paths(base).unwrap();
        assert!(paths.contains(&PathBuf::from("design")));
        assert!(
            paths.contains(&PathBuf::from("design/plate.rs"))
        );
    }

    #[test]
    fn scene_scan_extracts_type_names() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(
            dir.path(),
            "scenes.rs",
            r#"
struct CoincidentLine;

impl Scene for CoincidentLine {
    fn name(&self) -> &'static str {
        "CoincidentLine"
    }
}

impl Scene for TangentCircle {}

// Not a scene: impl Display for CoincidentLine
"#,
        );

        let names = scene_names(&file).unwrap();
        assert_eq!(names, ["CoincidentLine", "TangentCircle"]);
    }

    #[test]
    fn all_scenes_maps_names_to_files() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path();

        let first = write(
            base,
            "lines.rs",
            "impl Scene for HorizontalLine {}",
        );
        let second = write(
            base,
            "circles.rs",
            "impl Scene for TangentCircle {}",
        );

        let scenes =
            all_scenes(&[first.clone(), second.clone()]).unwrap();

        assert!(scenes.contains(&(
            "HorizontalLine".to_string(),
            first
        )));
        assert!(scenes.contains(&(
            "TangentCircle".to_string(),
            second
        )));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let result =
            all_file_paths(Path::new("/nonexistent/sketchgfx"));
        assert!(matches!(
            result,
            Err(DiscoverError::Io { .. })
        ));
    }
}
