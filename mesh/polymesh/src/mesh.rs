//! Indexed polygon mesh.

use crate::{Color, MeshColors};
use nalgebra::Point3;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors reported by [`MeshData::validate`].
///
/// These are consumer-side consistency failures, deliberately distinct
/// from any codec's parse errors: a file codec reports what the file
/// says, and the layer that turns a mesh into host geometry decides
/// whether the result is usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidateError {
    /// A face references a vertex index outside the vertex list.
    #[error("face {face} corner {corner} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        /// Index of the offending face.
        face: usize,
        /// Corner within the face.
        corner: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A face has fewer than three corners.
    #[error("face {face} has {count} corners, polygons need at least 3")]
    DegenerateFace {
        /// Index of the offending face.
        face: usize,
        /// Number of corners the face has.
        count: usize,
    },
}

/// An indexed polygon mesh.
///
/// This is the exchange type between file codecs and host applications.
/// Vertices and faces are stored separately, with faces referencing
/// vertices by index.
///
/// # Memory Layout
///
/// - `vertices`: `Vec<Point3<f64>>` - Vertex positions; the index of a
///   vertex is its identity, so insertion order is significant.
/// - `faces`: `Vec<Vec<u32>>` - Polygons as ordered vertex index lists.
///   The order within a polygon defines winding and is preserved exactly.
/// - `colors`: optional per-vertex or per-corner color data.
///
/// # Example
///
/// ```
/// use polymesh::{MeshData, Point3};
///
/// let mut mesh = MeshData::new();
/// mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
/// mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));
/// mesh.vertices.push(Point3::new(0.0, 1.0, 0.0));
/// mesh.faces.push(vec![0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshData {
    /// Vertex positions.
    pub vertices: Vec<Point3<f64>>,

    /// Polygon faces as indices into the vertex array.
    pub faces: Vec<Vec<u32>>,

    /// Optional color data.
    pub colors: Option<MeshColors>,
}

impl MeshData {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            colors: None,
        }
    }

    /// Create a mesh with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `vertex_count` - Expected number of vertices
    /// * `face_count` - Expected number of faces
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            colors: None,
        }
    }

    /// Create a mesh from vertices and faces, with no color data.
    ///
    /// # Example
    ///
    /// ```
    /// use polymesh::{MeshData, Point3};
    ///
    /// let vertices = vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    /// ];
    /// let mesh = MeshData::from_parts(vertices, vec![vec![0, 1, 2]]);
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Point3<f64>>, faces: Vec<Vec<u32>>) -> Self {
        Self {
            vertices,
            faces,
            colors: None,
        }
    }

    /// Get the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no vertices or no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Look up the per-vertex color of a vertex, if one is recorded.
    ///
    /// Returns `None` when the mesh carries no colors, when colors are
    /// stored per corner, or when the sparse table has no entry for the
    /// index.
    #[must_use]
    pub fn vertex_color(&self, index: u32) -> Option<Color> {
        match &self.colors {
            Some(MeshColors::PerVertex(map)) => map.get(&index).copied(),
            _ => None,
        }
    }

    /// Check face consistency.
    ///
    /// Codecs in this workspace parse permissively: a face index is
    /// reported exactly as the file states it, without range checking.
    /// Consumers that build host geometry call this before trusting the
    /// indices.
    ///
    /// # Errors
    ///
    /// Returns [`ValidateError::IndexOutOfRange`] if a face references a
    /// vertex index `>= vertex_count()`, or
    /// [`ValidateError::DegenerateFace`] if a face has fewer than three
    /// corners.
    pub fn validate(&self) -> Result<(), ValidateError> {
        for (face, indices) in self.faces.iter().enumerate() {
            if indices.len() < 3 {
                return Err(ValidateError::DegenerateFace {
                    face,
                    count: indices.len(),
                });
            }
            for (corner, &index) in indices.iter().enumerate() {
                if index as usize >= self.vertices.len() {
                    return Err(ValidateError::IndexOutOfRange {
                        face,
                        corner,
                        index,
                        vertex_count: self.vertices.len(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn triangle() -> MeshData {
        MeshData::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![vec![0, 1, 2]],
        )
    }

    #[test]
    fn mesh_is_empty() {
        let mesh = MeshData::new();
        assert!(mesh.is_empty());

        let mut with_vertex = MeshData::new();
        with_vertex.vertices.push(Point3::new(0.0, 0.0, 0.0));
        assert!(with_vertex.is_empty()); // no faces

        assert!(!triangle().is_empty());
    }

    #[test]
    fn validate_accepts_well_formed() {
        assert_eq!(triangle().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_out_of_range_index() {
        let mut mesh = triangle();
        mesh.faces.push(vec![0, 1, 7]);

        assert_eq!(
            mesh.validate(),
            Err(ValidateError::IndexOutOfRange {
                face: 1,
                corner: 2,
                index: 7,
                vertex_count: 3,
            })
        );
    }

    #[test]
    fn validate_rejects_degenerate_face() {
        let mut mesh = triangle();
        mesh.faces.push(vec![0, 1]);

        assert_eq!(
            mesh.validate(),
            Err(ValidateError::DegenerateFace { face: 1, count: 2 })
        );
    }

    #[test]
    fn vertex_color_lookup() {
        let mut mesh = triangle();
        assert_eq!(mesh.vertex_color(0), None);

        let mut map = BTreeMap::new();
        map.insert(1, Color::RED);
        mesh.colors = Some(MeshColors::PerVertex(map));

        assert_eq!(mesh.vertex_color(0), None);
        assert_eq!(mesh.vertex_color(1), Some(Color::RED));
    }

    #[test]
    fn vertex_color_ignores_per_corner_table() {
        let mut mesh = triangle();
        mesh.colors = Some(MeshColors::PerCorner(vec![vec![Some(Color::RED); 3]]));
        assert_eq!(mesh.vertex_color(0), None);
    }
}
