//! Build tool support for sketchgfx animations.
//!
//! Scenes live in demo source files; this crate discovers them,
//! resolves abbreviated scene/file/path references through a
//! token-based fuzzy matcher, and dispatches the selected scenes to
//! an external render invocation.

pub mod discover;
pub mod matcher;
pub mod render;
pub mod token;

pub use discover::{
    all_file_paths, all_paths, all_scenes, DiscoverError,
};
pub use matcher::{fuzzy_search, token_sort_ratio, MatchError};
pub use render::Renderer;
pub use token::split_tokens;
