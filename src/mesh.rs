//! Triangle meshes and the read-only interface the model walker needs.

use std::io::BufReader;
use std::path::Path;

use thiserror::Error;

use crate::math::Vec3;

/// Read-only access to a triangle mesh.
///
/// This is all the model walker relies on, so any indexed geometry source
/// can be rendered by implementing it.
pub trait MeshSource {
    fn face_count(&self) -> usize;

    /// Vertex indices of face `face`, in winding order.
    fn face_vertex_indices(&self, face: usize) -> [usize; 3];

    fn vertex_position(&self, index: usize) -> Vec3;
}

/// Errors produced while loading a mesh.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load OBJ data: {0}")]
    Obj(#[from] tobj::LoadError),
    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
}

// A triangle defined by three zero-based indices into the vertex array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Face {
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }
}

pub const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
];

pub const CUBE_FACES: [Face; 12] = [
    // Front face
    Face::new(0, 1, 2),
    Face::new(0, 2, 3),
    // Right face
    Face::new(3, 2, 4),
    Face::new(3, 4, 5),
    // Back face
    Face::new(5, 4, 6),
    Face::new(5, 6, 7),
    // Left face
    Face::new(7, 6, 1),
    Face::new(7, 1, 0),
    // Top face
    Face::new(1, 6, 4),
    Face::new(1, 4, 2),
    // Bottom face
    Face::new(5, 7, 0),
    Face::new(5, 0, 3),
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Build a mesh from raw data, checking that every face index is valid.
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Face>) -> Result<Self, LoadError> {
        let vertex_count = vertices.len();
        for (face, f) in faces.iter().enumerate() {
            if let Some(&index) = [f.a, f.b, f.c].iter().find(|&&i| i >= vertex_count) {
                return Err(LoadError::IndexOutOfRange {
                    face,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(Self { vertices, faces })
    }

    /// The 2x2x2 cube centered on the origin.
    pub fn cube() -> Self {
        Self {
            vertices: CUBE_VERTICES.to_vec(),
            faces: CUBE_FACES.to_vec(),
        }
    }

    /// Load every object of a Wavefront OBJ file into one mesh.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let (models, _materials) = tobj::load_obj(path.as_ref(), &load_options())?;
        Self::from_models(models)
    }

    /// Parse OBJ source held in memory. Material libraries are ignored.
    pub fn from_obj_str(source: &str) -> Result<Self, LoadError> {
        let mut reader = BufReader::new(source.as_bytes());
        let (models, _materials) = tobj::load_obj_buf(&mut reader, &load_options(), |_| {
            Err(tobj::LoadError::OpenFileFailed)
        })?;
        Self::from_models(models)
    }

    fn from_models(models: Vec<tobj::Model>) -> Result<Self, LoadError> {
        let mut vertices = Vec::new();
        let mut faces = Vec::new();

        for model in models {
            let offset = vertices.len();
            let mesh = model.mesh;
            vertices.extend(
                mesh.positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );
            faces.extend(mesh.indices.chunks_exact(3).map(|i| {
                Face::new(
                    offset + i[0] as usize,
                    offset + i[1] as usize,
                    offset + i[2] as usize,
                )
            }));
        }

        Self::new(vertices, faces)
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}

impl MeshSource for Mesh {
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn face_vertex_indices(&self, face: usize) -> [usize; 3] {
        let f = self.faces[face];
        [f.a, f.b, f.c]
    }

    fn vertex_position(&self, index: usize) -> Vec3 {
        self.vertices[index]
    }
}
