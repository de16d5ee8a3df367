//! Vertex color types.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGB color with normalized components.
///
/// Every channel lies in `[0, 1]`. File formats that store 8-bit
/// channels convert at the boundary with [`Color::from_bytes`] and
/// [`Color::to_bytes`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    /// Red component (0.0-1.0).
    pub r: f32,
    /// Green component (0.0-1.0).
    pub g: f32,
    /// Blue component (0.0-1.0).
    pub b: f32,
}

impl Color {
    /// Create a new color from normalized components.
    ///
    /// # Example
    ///
    /// ```
    /// use polymesh::Color;
    ///
    /// let red = Color::new(1.0, 0.0, 0.0);
    /// assert_eq!(red, Color::RED);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channel values.
    ///
    /// Each channel is divided by 255.0 to produce the normalized form.
    ///
    /// # Example
    ///
    /// ```
    /// use polymesh::Color;
    ///
    /// let c = Color::from_bytes(255, 0, 0);
    /// assert_eq!(c, Color::RED);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
        }
    }

    /// Convert to 8-bit channel values.
    ///
    /// Channels are clamped to `[0, 1]`, scaled by 255, and truncated
    /// toward zero (so 0.5 becomes 127, not 128).
    ///
    /// # Example
    ///
    /// ```
    /// use polymesh::Color;
    ///
    /// let (r, g, b) = Color::new(0.5, 0.0, 2.0).to_bytes();
    /// assert_eq!((r, g, b), (127, 0, 255));
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // Truncation and sign loss are safe: values are clamped to [0.0, 1.0] before * 255.0
    pub fn to_bytes(self) -> (u8, u8, u8) {
        (
            (self.r.clamp(0.0, 1.0) * 255.0) as u8,
            (self.g.clamp(0.0, 1.0) * 255.0) as u8,
            (self.b.clamp(0.0, 1.0) * 255.0) as u8,
        )
    }

    /// Black color (0, 0, 0).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White color (1, 1, 1).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Red color (1, 0, 0).
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);

    /// Green color (0, 1, 0).
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);

    /// Blue color (0, 0, 1).
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Color data attached to a mesh.
///
/// Two representations appear at different pipeline stages:
///
/// - [`PerVertex`](Self::PerVertex) is what a file codec produces: one
///   color per vertex index, stored sparsely so a vertex without color
///   data is an explicit absence, not an ambiguous default.
/// - [`PerCorner`](Self::PerCorner) is what a richer host mesh supplies:
///   the same vertex may have a different color on each incident
///   polygon. The outer `Vec` is parallel to `MeshData::faces`; entry
///   `[f][c]` colors corner `c` of face `f`. `None` marks a corner with
///   unknown color.
///
/// A codec that writes per-vertex color reduces the per-corner form by
/// averaging; see the writer in `off-io`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MeshColors {
    /// Sparse mapping from vertex index to color.
    PerVertex(BTreeMap<u32, Color>),

    /// One optional color per polygon corner, parallel to the face list.
    PerCorner(Vec<Vec<Option<Color>>>),
}
