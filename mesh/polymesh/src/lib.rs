//! Polygon mesh data model.
//!
//! This crate provides the exchange types shared by mesh codecs and their
//! host applications:
//!
//! - [`MeshData`] - A polygon mesh with indexed vertices
//! - [`Color`] - A normalized RGB color
//! - [`MeshColors`] - Per-vertex or per-corner color tables
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero engine dependencies**. It can be
//! used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Editor plugins and converters
//!
//! # Faces
//!
//! Unlike a triangle-only mesh, faces here are arbitrary polygons: each
//! face is an ordered list of at least three vertex indices, and the
//! order (winding) is preserved exactly by every operation in this
//! workspace.
//!
//! # Example
//!
//! ```
//! use polymesh::{MeshData, Point3};
//!
//! // Create a single triangle
//! let mut mesh = MeshData::new();
//! mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(0.5, 1.0, 0.0));
//! mesh.faces.push(vec![0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(mesh.validate().is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod color;
mod mesh;

pub use color::{Color, MeshColors};
pub use mesh::{MeshData, ValidateError};

pub use nalgebra::Point3;
