//! OFF (Object File Format) mesh loading.
//!
//! The format is whitespace separated:
//!
//! ```text
//! OFF
//! <vertex count> <face count> <edge count>
//! x y z            (vertex count times)
//! n i0 i1 i2       (face count times, n must be 3)
//! ```
//!
//! The edge count is read and ignored. Anything after a `#` on a line is a
//! comment. Faces with a vertex count other than 3 are rejected: the
//! renderer only handles triangles and there is no triangulation step.

use std::path::Path;
use std::str::FromStr;

use lux_math::DVec3;
use thiserror::Error;

use crate::mesh::{Mesh, MeshError};

/// Errors that can occur during OFF loading.
#[derive(Error, Debug)]
pub enum OffError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing OFF header, found {0:?}")]
    MissingHeader(String),

    #[error("Unexpected end of file while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("Invalid number {token:?} while reading {expected}")]
    InvalidNumber {
        token: String,
        expected: &'static str,
    },

    #[error("Face {face} has {vertices} vertices, only triangles are supported")]
    NonTriangularFace { face: usize, vertices: usize },

    #[error("Invalid mesh: {0}")]
    Mesh(#[from] MeshError),
}

/// Result type for OFF loading.
pub type OffResult<T> = Result<T, OffError>;

/// Load an OFF file from disk.
pub fn load_off(path: impl AsRef<Path>) -> OffResult<Mesh> {
    let path = path.as_ref();
    log::info!("Loading OFF mesh: {}", path.display());

    let contents = std::fs::read_to_string(path)?;
    parse_off(&contents)
}

/// Parse OFF text into a mesh.
pub fn parse_off(input: &str) -> OffResult<Mesh> {
    let mut tokens = Tokens::new(input);

    let header = tokens.next_token("header")?;
    if header != "OFF" {
        return Err(OffError::MissingHeader(header.to_string()));
    }

    let vertex_count: usize = tokens.parse("vertex count")?;
    let face_count: usize = tokens.parse("face count")?;
    let _edge_count: usize = tokens.parse("edge count")?;

    let mut positions = Vec::with_capacity(vertex_count);
    for _ in 0..vertex_count {
        let x = tokens.parse("vertex coordinate")?;
        let y = tokens.parse("vertex coordinate")?;
        let z = tokens.parse("vertex coordinate")?;
        positions.push(DVec3::new(x, y, z));
    }

    let mut triangles = Vec::with_capacity(face_count);
    for face in 0..face_count {
        let vertices: usize = tokens.parse("face vertex count")?;
        if vertices != 3 {
            return Err(OffError::NonTriangularFace { face, vertices });
        }
        let i0 = tokens.parse("face index")?;
        let i1 = tokens.parse("face index")?;
        let i2 = tokens.parse("face index")?;
        triangles.push([i0, i1, i2]);
    }

    let mesh = Mesh::new(positions, triangles)?;
    if mesh.is_empty() {
        log::warn!("OFF mesh has no faces");
    }
    log::debug!(
        "Parsed OFF mesh: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(mesh)
}

/// Whitespace tokenizer that skips `#` comments.
struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = &'a str> + 'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        let inner = input
            .lines()
            .map(|line| line.split('#').next().unwrap_or(""))
            .flat_map(str::split_whitespace);
        Self {
            inner: Box::new(inner),
        }
    }

    fn next_token(&mut self, expected: &'static str) -> OffResult<&'a str> {
        self.inner.next().ok_or(OffError::UnexpectedEof { expected })
    }

    fn parse<T: FromStr>(&mut self, expected: &'static str) -> OffResult<T> {
        let token = self.next_token(expected)?;
        token.parse().map_err(|_| OffError::InvalidNumber {
            token: token.to_string(),
            expected,
        })
    }
}
