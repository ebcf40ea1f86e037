//! Model storage and the OBJ-subset parser.
//!
//! A [`Model`] owns four append-only collections (vertices, normals,
//! texture coordinates, faces) populated by a single parsing pass over a
//! Wavefront-style text file. The model is immutable after load; the
//! rasterizer only ever reads it through the indexed accessors.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::face::Face;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::sequence::{IndexOutOfRange, Sequence};

/// Errors that can occur while loading a model file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record failed to parse. The load is abandoned as a whole; a
    /// model is never built from partially-garbage data.
    #[error("parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// A loaded triangle mesh: positions, normals, texture coordinates, and
/// the faces indexing into them.
///
/// Texture coordinates are parsed and stored but not consumed by the
/// flat-shading pipeline.
#[derive(Debug, Default)]
pub struct Model {
    vertices: Sequence<Vec3>,
    normals: Sequence<Vec3>,
    texcoords: Sequence<Vec2>,
    faces: Sequence<Face>,
}

impl Model {
    /// Load a model from an OBJ file.
    ///
    /// Only `v`, `vn`, `vt`, and triangular `f` records are consumed;
    /// anything else (comments, object names, smoothing groups) is
    /// skipped. Any record that fails to parse aborts the whole load.
    pub fn from_obj(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let model = Self::from_obj_str(&contents)?;
        info!(
            "loaded {}: {} vertices, {} normals, {} texcoords, {} faces",
            path.display(),
            model.vertices.len(),
            model.normals.len(),
            model.texcoords.len(),
            model.faces.len(),
        );
        Ok(model)
    }

    /// Parse OBJ text into a model. Single pass, no cross-line state.
    pub fn from_obj_str(contents: &str) -> Result<Self, LoadError> {
        let mut model = Model::default();

        for (number, line) in contents.lines().enumerate() {
            let line_number = number + 1;
            let mut tokens = line.split_whitespace();
            match tokens.next() {
                Some("v") => {
                    let [x, y, z] = parse_floats(&mut tokens, line_number)?;
                    model.vertices.push(Vec3::new(x, y, z));
                }
                Some("vn") => {
                    let [x, y, z] = parse_floats(&mut tokens, line_number)?;
                    model.normals.push(Vec3::new(x, y, z));
                }
                Some("vt") => {
                    let [u, v] = parse_floats(&mut tokens, line_number)?;
                    model.texcoords.push(Vec2::new(u, v));
                }
                Some("f") => {
                    model.faces.push(parse_face(&mut tokens, line_number)?);
                }
                // Blank lines, comments, and record kinds outside the
                // consumed subset.
                _ => {}
            }
        }

        Ok(model)
    }

    pub fn vertex(&self, index: usize) -> Result<&Vec3, IndexOutOfRange> {
        self.vertices.get(index)
    }

    pub fn normal(&self, index: usize) -> Result<&Vec3, IndexOutOfRange> {
        self.normals.get(index)
    }

    pub fn texcoord(&self, index: usize) -> Result<&Vec2, IndexOutOfRange> {
        self.texcoords.get(index)
    }

    pub fn face(&self, index: usize) -> Result<&Face, IndexOutOfRange> {
        self.faces.get(index)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    pub fn texcoord_count(&self) -> usize {
        self.texcoords.len()
    }

    /// Number of faces; drives the per-frame draw loop.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// Parse the next `N` whitespace-separated floats from a record.
/// Trailing extra fields are ignored, missing or malformed ones fail.
fn parse_floats<'a, const N: usize>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<[f32; N], LoadError> {
    let mut out = [0.0; N];
    for (i, slot) in out.iter_mut().enumerate() {
        let token = tokens.next().ok_or_else(|| LoadError::Parse {
            line,
            reason: format!("expected {N} numeric fields, found {i}"),
        })?;
        *slot = token.parse().map_err(|_| LoadError::Parse {
            line,
            reason: format!("invalid number {token:?}"),
        })?;
    }
    Ok(out)
}

/// Parse a triangular face record: three `a/b/c` index groups.
///
/// The first number of each group indexes the vertices, the second the
/// normals, the third the texture coordinates. Index values are kept as
/// written (1-based); range validation belongs to the draw path.
fn parse_face<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<Face, LoadError> {
    let mut face = Face {
        v: [0; 3],
        vn: [0; 3],
        vt: [0; 3],
    };

    for corner in 0..3 {
        let group = tokens.next().ok_or_else(|| LoadError::Parse {
            line,
            reason: format!("expected 3 index groups, found {corner}"),
        })?;

        let mut parts = group.split('/');
        let mut next_index = |name: &str| -> Result<i32, LoadError> {
            let part = parts.next().ok_or_else(|| LoadError::Parse {
                line,
                reason: format!("group {group:?} is missing its {name} index"),
            })?;
            part.parse().map_err(|_| LoadError::Parse {
                line,
                reason: format!("invalid {name} index {part:?} in group {group:?}"),
            })
        };

        face.v[corner] = next_index("vertex")?;
        face.vn[corner] = next_index("normal")?;
        face.vt[corner] = next_index("texcoord")?;
    }

    if tokens.next().is_some() {
        return Err(LoadError::Parse {
            line,
            reason: "face has more than 3 index groups (only triangles are supported)".into(),
        });
    }

    Ok(face)
}
