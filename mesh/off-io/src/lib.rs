//! OFF and COFF mesh file I/O.
//!
//! This crate reads and writes 3D polygon meshes in the plain-text OFF
//! ("Object File Format") family:
//!
//! - **OFF** - Vertex positions and polygon vertex-index lists
//! - **COFF** - OFF with a per-vertex RGB color on each vertex record
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
//! # Example
//!
//! ```no_run
//! use off_io::{load_off, save_off};
//!
//! // Load a mesh; colors are picked up if the header says COFF
//! let mesh = load_off("model.off").unwrap();
//!
//! // Save it back with color columns
//! save_off(&mesh, "output.coff", true).unwrap();
//! ```
//!
//! # Header vs. extension
//!
//! On read, the in-file header token alone decides whether color
//! columns are expected; a file named `mesh.off` whose first line is
//! `COFF` is parsed as COFF. The extension is only a hint of caller
//! intent, consulted when choosing a write variant:
//!
//! ```no_run
//! use off_io::{load_off, save_off_auto};
//!
//! let mesh = load_off("input.coff").unwrap();
//! // Writes COFF because of the .coff extension
//! save_off_auto(&mesh, "output.coff").unwrap();
//! ```
//!
//! # String-level codec
//!
//! [`parse_off`] and [`write_off`] work on in-memory text with no file
//! system involved, for hosts that manage their own I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod off;

pub use error::{OffError, OffResult};
pub use off::{load_off, parse_off, save_off, write_off};

pub use polymesh::{Color, MeshColors, MeshData};

use std::path::Path;

/// The two variants of the OFF family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffVariant {
    /// Plain OFF: positions and faces only.
    Off,
    /// COFF: every vertex record carries an RGB color.
    Coff,
}

impl OffVariant {
    /// Detect the intended variant from a file extension.
    ///
    /// This is a hint only: on read the in-file header is authoritative,
    /// and this function is never consulted while parsing.
    ///
    /// # Returns
    ///
    /// The variant suggested by the extension, or `None` if the
    /// extension is not recognized.
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "off" => Some(Self::Off),
            "coff" => Some(Self::Coff),
            _ => None,
        }
    }

    /// Get the canonical file extension for this variant.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Coff => "coff",
        }
    }

    /// Whether this variant carries per-vertex color columns.
    #[must_use]
    pub const fn is_coff(&self) -> bool {
        matches!(self, Self::Coff)
    }
}

/// Save a mesh, choosing the variant from the file extension.
///
/// A `.coff` extension writes COFF; anything else, including an
/// unrecognized extension, writes plain OFF.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
///
/// # Example
///
/// ```no_run
/// use off_io::{load_off, save_off_auto};
///
/// let mesh = load_off("input.off").unwrap();
/// save_off_auto(&mesh, "output.coff").unwrap();
/// ```
pub fn save_off_auto<P: AsRef<Path>>(mesh: &MeshData, path: P) -> OffResult<()> {
    let coff = OffVariant::from_path(&path).is_some_and(|v| v.is_coff());
    save_off(mesh, path, coff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_from_path_off() {
        assert_eq!(OffVariant::from_path("model.off"), Some(OffVariant::Off));
        assert_eq!(OffVariant::from_path("model.OFF"), Some(OffVariant::Off));
        assert_eq!(
            OffVariant::from_path("/path/to/model.off"),
            Some(OffVariant::Off)
        );
    }

    #[test]
    fn variant_from_path_coff() {
        assert_eq!(OffVariant::from_path("model.coff"), Some(OffVariant::Coff));
        assert_eq!(OffVariant::from_path("model.COFF"), Some(OffVariant::Coff));
    }

    #[test]
    fn variant_from_path_unknown() {
        assert_eq!(OffVariant::from_path("model.obj"), None);
        assert_eq!(OffVariant::from_path("model"), None);
        assert_eq!(OffVariant::from_path(""), None);
    }

    #[test]
    fn variant_extension() {
        assert_eq!(OffVariant::Off.extension(), "off");
        assert_eq!(OffVariant::Coff.extension(), "coff");
        assert!(!OffVariant::Off.is_coff());
        assert!(OffVariant::Coff.is_coff());
    }
}
