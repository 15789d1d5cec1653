//! Stroke styling and the shared color palette.

use bevy_color::{Color, Srgba};
use bevy_ecs::prelude::*;
use bevy_platform::collections::HashMap;

/// Default stroke width of sketch entities.
pub const DEFAULT_STROKE_WIDTH: f32 = 4.0;

/// Keys into a [`ColorPalette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKey {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    /// Darkest base tone, used for fully constrained entities.
    Base0,
    /// Lightest base tone.
    Base8,
}

/// A palette mapping [`ColorKey`]s to concrete colors.
///
/// The default palette follows the Monokai Pro color scheme.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    palette: HashMap<ColorKey, Color>,
}

impl ColorPalette {
    /// Get the color of the given key.
    ///
    /// Falls back to white for keys that were removed from the
    /// palette.
    pub fn get(&self, key: ColorKey) -> Color {
        self.palette
            .get(&key)
            .copied()
            .unwrap_or(Color::WHITE)
    }

    /// Insert or replace the color of the given key.
    pub fn insert(
        &mut self,
        key: ColorKey,
        color: impl Into<Color>,
    ) -> &mut Self {
        self.palette.insert(key, color.into());
        self
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        let hex = |hex: &str| -> Color {
            Srgba::hex(hex)
                .expect("palette hex colors are well-formed")
                .into()
        };

        Self {
            palette: HashMap::from_iter([
                (ColorKey::Red, hex("FF6188")),
                (ColorKey::Orange, hex("FC9867")),
                (ColorKey::Yellow, hex("FFD866")),
                (ColorKey::Green, hex("A9DC76")),
                (ColorKey::Blue, hex("78DCE8")),
                (ColorKey::Purple, hex("AB9DF2")),
                (ColorKey::Base0, hex("19181A")),
                (ColorKey::Base8, hex("FCFCFA")),
            ]),
        }
    }
}

/// Stroke styling of a sketch entity.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub color: Color,
}

impl StrokeStyle {
    pub fn new(color: Color) -> Self {
        Self {
            width: DEFAULT_STROKE_WIDTH,
            color,
        }
    }
}

/// Draw completion of a sketch entity in `[0, 1]`.
///
/// Creation animations sweep this from 0 to 1 and removal
/// animations sweep it back. How a partially drawn entity is
/// rasterized is up to the renderer.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct DrawProgress(pub f32);
