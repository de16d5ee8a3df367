//! OFF (Object File Format) and COFF (per-vertex color OFF) support.
//!
//! OFF is a line-oriented ASCII format: a header token, a counts line,
//! then a fixed window of vertex records followed by a fixed window of
//! face records. COFF is the same layout with three extra 0-255 color
//! columns on each vertex record.
//!
//! ```text
//! OFF | COFF
//! <V> <F> <E>
//! <x> <y> <z> [<r> <g> <b>]      x V   (r,g,b only in COFF)
//! <n> <i0> <i1> ... <i(n-1)>     x F
//! ```
//!
//! Lines starting with `#` and blank lines are ignored anywhere in the
//! file. The edge count `<E>` is historically redundant and ignored on
//! read; the writer always emits 0.
//!
//! # Header vs. extension
//!
//! Whether color columns are expected is decided by the in-file header
//! token alone. The file extension is only a hint for callers choosing
//! a write variant; see [`OffVariant`](crate::OffVariant).
//!
//! # Example
//!
//! ```no_run
//! use off_io::{load_off, save_off};
//!
//! let mesh = load_off("model.off").unwrap();
//! save_off(&mesh, "output.coff", true).unwrap();
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use nalgebra::Point3;
use polymesh::{Color, MeshColors, MeshData};
use tracing::debug;

use crate::error::{OffError, OffResult};

/// Content lines of an OFF file: blank and `#` comment lines stripped,
/// original 1-based line numbers kept for error reporting.
struct ContentLines<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    last: usize,
}

impl<'a> ContentLines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            last: 0,
        }
    }

    fn next_content(&mut self) -> Option<(usize, &'a str)> {
        for (index, line) in self.lines.by_ref() {
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            self.last = index + 1;
            return Some((index + 1, trimmed));
        }
        None
    }

    /// Line number to report when the stream ends early.
    fn end_line(&self) -> usize {
        self.last + 1
    }
}

/// Parse OFF/COFF text into a mesh.
///
/// The header token decides whether color columns are expected: `COFF`
/// vertex records with six or more fields carry an RGB triple in
/// `[0, 255]`, normalized into `[0, 1]` and recorded per vertex index.
/// A COFF vertex record without color columns simply has no recorded
/// color. Face vertex indices are reported as the file states them and
/// are **not** range checked; call [`MeshData::validate`] before
/// building host geometry from the result.
///
/// Content lines past the declared face count are silently ignored.
///
/// # Errors
///
/// Fails fast on the first structural violation: bad header, short
/// counts line, malformed vertex or face record, a face with fewer than
/// three vertices, or a file that runs out of records early. No partial
/// mesh is ever returned.
///
/// # Example
///
/// ```
/// use off_io::parse_off;
///
/// let mesh = parse_off("OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 2\n").unwrap();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
pub fn parse_off(text: &str) -> OffResult<MeshData> {
    let mut lines = ContentLines::new(text);

    // Header
    let Some((header_line, header)) = lines.next_content() else {
        return Err(OffError::BadHeader {
            line: 1,
            found: String::new(),
        });
    };
    let token = header.split_whitespace().next().unwrap_or("");
    let coff = match token {
        "OFF" => false,
        "COFF" => true,
        other => {
            return Err(OffError::BadHeader {
                line: header_line,
                found: other.to_string(),
            })
        }
    };

    // Counts: vertex and face counts are trusted; the edge count is
    // accepted and ignored, as are any tokens past the third.
    let Some((counts_line, counts)) = lines.next_content() else {
        return Err(OffError::BadCounts {
            line: lines.end_line(),
        });
    };
    let mut tokens = counts.split_whitespace();
    let next_count = |tokens: &mut std::str::SplitWhitespace<'_>| {
        tokens
            .next()
            .and_then(|t| t.parse::<usize>().ok())
            .ok_or(OffError::BadCounts { line: counts_line })
    };
    let vertex_count = next_count(&mut tokens)?;
    let face_count = next_count(&mut tokens)?;
    let _edge_count = next_count(&mut tokens)?;

    let mut mesh = MeshData::with_capacity(vertex_count, face_count);
    let mut colors: BTreeMap<u32, Color> = BTreeMap::new();

    // Vertex block: exactly `vertex_count` content lines.
    for index in 0..vertex_count {
        let Some((line, record)) = lines.next_content() else {
            return Err(OffError::TruncatedFile {
                record: "vertex",
                expected: vertex_count,
                got: index,
            });
        };
        let fields: Vec<&str> = record.split_whitespace().collect();
        if fields.len() < 3 {
            return Err(OffError::BadVertex { line });
        }

        let parse_coord =
            |field: &str| field.parse::<f64>().map_err(|_| OffError::BadVertex { line });
        let x = parse_coord(fields[0])?;
        let y = parse_coord(fields[1])?;
        let z = parse_coord(fields[2])?;
        mesh.vertices.push(Point3::new(x, y, z));

        if coff && fields.len() >= 6 {
            let parse_channel =
                |field: &str| field.parse::<u8>().map_err(|_| OffError::BadVertex { line });
            let r = parse_channel(fields[3])?;
            let g = parse_channel(fields[4])?;
            let b = parse_channel(fields[5])?;
            #[allow(clippy::cast_possible_truncation)]
            // Truncation: vertex indices are u32, meshes with >4B vertices are unsupported
            colors.insert(index as u32, Color::from_bytes(r, g, b));
        }
    }

    // Face block: exactly `face_count` content lines, immediately after.
    for index in 0..face_count {
        let Some((line, record)) = lines.next_content() else {
            return Err(OffError::TruncatedFile {
                record: "face",
                expected: face_count,
                got: index,
            });
        };
        let mut fields = record.split_whitespace();
        let count = fields
            .next()
            .and_then(|t| t.parse::<usize>().ok())
            .ok_or(OffError::BadFace { line })?;
        if count < 3 {
            return Err(OffError::DegenerateFace { line, count });
        }

        let mut face = Vec::with_capacity(count);
        for _ in 0..count {
            let vertex_index = fields
                .next()
                .and_then(|t| t.parse::<u32>().ok())
                .ok_or(OffError::BadFace { line })?;
            face.push(vertex_index);
        }
        // Tokens past the declared count (per-face color in some OFF
        // dialects) are accepted and ignored.
        mesh.faces.push(face);
    }

    if !colors.is_empty() {
        mesh.colors = Some(MeshColors::PerVertex(colors));
    }
    Ok(mesh)
}

/// Serialize a mesh as OFF or COFF text.
///
/// The counts line always carries an edge count of 0; the writer never
/// computes a true edge count. Vertex positions use `f64`'s native
/// shortest round-trip formatting.
///
/// With `coff`, every vertex line carries an RGB triple in `[0, 255]`:
///
/// - A per-corner color source is reduced to one color per vertex by
///   averaging all corners that reference it. Corners with unknown
///   color contribute black but still count. A vertex referenced by no
///   corner at all is written as `0 0 0`.
/// - A per-vertex color source is emitted directly; vertices absent
///   from the sparse table are written as `0 0 0`.
/// - A mesh without color data gets `0 0 0` on every vertex.
///
/// Serialization never fails and never mutates the mesh; the averaged
/// table is built separately in a single pass over all corners.
///
/// # Example
///
/// ```
/// use off_io::write_off;
/// use polymesh::{MeshData, Point3};
///
/// let mesh = MeshData::from_parts(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     vec![vec![0, 1, 2]],
/// );
/// let text = write_off(&mesh, false);
/// assert!(text.starts_with("OFF\n3 1 0\n"));
/// ```
#[must_use]
pub fn write_off(mesh: &MeshData, coff: bool) -> String {
    let mut out = String::new();
    out.push_str(if coff { "COFF\n" } else { "OFF\n" });
    out.push_str(&format!(
        "{} {} 0\n",
        mesh.vertex_count(),
        mesh.face_count()
    ));

    if coff {
        let colors = vertex_color_bytes(mesh);
        for (vertex, (r, g, b)) in mesh.vertices.iter().zip(colors) {
            out.push_str(&format!(
                "{} {} {} {r} {g} {b}\n",
                vertex.x, vertex.y, vertex.z
            ));
        }
    } else {
        for vertex in &mesh.vertices {
            out.push_str(&format!("{} {} {}\n", vertex.x, vertex.y, vertex.z));
        }
    }

    for face in &mesh.faces {
        out.push_str(&face.len().to_string());
        for &index in face {
            out.push(' ');
            out.push_str(&index.to_string());
        }
        out.push('\n');
    }

    out
}

/// One 8-bit RGB triple per vertex, reducing whatever color source the
/// mesh carries.
///
/// The per-corner reduction is a single pass over all corners building
/// a (sum, count) accumulator per vertex index, then a finalize pass,
/// so the cost is O(total corners + vertices) rather than a rescan of
/// every face per vertex.
#[allow(clippy::cast_precision_loss)]
// Precision loss: corner counts are far below f32's exact integer range
fn vertex_color_bytes(mesh: &MeshData) -> Vec<(u8, u8, u8)> {
    match &mesh.colors {
        None => vec![(0, 0, 0); mesh.vertex_count()],
        Some(MeshColors::PerVertex(map)) => (0..mesh.vertex_count())
            .map(|index| {
                #[allow(clippy::cast_possible_truncation)]
                // Truncation: vertex indices are u32 by the data model
                map.get(&(index as u32))
                    .map_or((0, 0, 0), |color| color.to_bytes())
            })
            .collect(),
        Some(MeshColors::PerCorner(table)) => {
            let mut sums = vec![[0.0f32; 3]; mesh.vertex_count()];
            let mut counts = vec![0u32; mesh.vertex_count()];

            for (face_index, face) in mesh.faces.iter().enumerate() {
                let row = table.get(face_index);
                for (corner, &vertex_index) in face.iter().enumerate() {
                    let Some(sum) = sums.get_mut(vertex_index as usize) else {
                        // Index past the vertex list; the writer stays
                        // total and leaves validation to the consumer.
                        continue;
                    };
                    if let Some(Some(color)) = row.and_then(|r| r.get(corner)) {
                        sum[0] += color.r;
                        sum[1] += color.g;
                        sum[2] += color.b;
                    }
                    // Unknown corner colors average as black: they
                    // contribute nothing but still count.
                    counts[vertex_index as usize] += 1;
                }
            }

            sums.iter()
                .zip(&counts)
                .map(|(sum, &count)| {
                    if count == 0 {
                        (0, 0, 0)
                    } else {
                        let scale = count as f32;
                        Color::new(sum[0] / scale, sum[1] / scale, sum[2] / scale).to_bytes()
                    }
                })
                .collect()
        }
    }
}

/// Load a mesh from an OFF/COFF file.
///
/// The header token inside the file decides whether colors are parsed;
/// the extension is only a hint of intent, and a mismatch between the
/// two is logged at debug level.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is not
/// valid OFF/COFF.
///
/// # Example
///
/// ```no_run
/// use off_io::load_off;
///
/// let mesh = load_off("model.coff").unwrap();
/// println!("{} vertices, {} faces", mesh.vertex_count(), mesh.face_count());
/// ```
pub fn load_off<P: AsRef<Path>>(path: P) -> OffResult<MeshData> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            OffError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            OffError::Io(e)
        }
    })?;

    let mesh = parse_off(&text)?;

    if let Some(hint) = crate::OffVariant::from_path(path) {
        let header_coff = header_is_coff(&text);
        if hint.is_coff() != header_coff {
            debug!(
                path = %path.display(),
                extension_hint = hint.extension(),
                header_coff,
                "file extension disagrees with OFF header, header wins"
            );
        }
    }
    debug!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "loaded OFF mesh"
    );

    Ok(mesh)
}

/// Whether the first content line of already-parsed text carries the
/// COFF header token.
fn header_is_coff(text: &str) -> bool {
    ContentLines::new(text)
        .next_content()
        .and_then(|(_, line)| line.split_whitespace().next())
        == Some("COFF")
}

/// Save a mesh to an OFF/COFF file.
///
/// # Arguments
///
/// * `mesh` - The mesh to save
/// * `path` - Output file path
/// * `coff` - If true, write COFF with per-vertex color columns
///
/// # Errors
///
/// Returns an error if the file cannot be written. Serialization itself
/// has no failure modes.
///
/// # Example
///
/// ```no_run
/// use off_io::{load_off, save_off};
///
/// let mesh = load_off("input.off").unwrap();
/// save_off(&mesh, "output.coff", true).unwrap();
/// ```
pub fn save_off<P: AsRef<Path>>(mesh: &MeshData, path: P, coff: bool) -> OffResult<()> {
    let path = path.as_ref();
    std::fs::write(path, write_off(mesh, coff))?;
    debug!(
        path = %path.display(),
        coff,
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "saved OFF mesh"
    );
    Ok(())
}
