use std::collections::HashMap;

use crate::error::{MeshError, Result};
use crate::math::Point3;

/// Per-face labels attached by the engines that understand a face's
/// origin. Best-effort metadata: operations that restructure topology drop
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceGroup {
    /// A side-wall face stitched between two rings.
    Side,
    /// A face of the cap closing the first section of an open sweep.
    StartCap,
    /// A face of the cap closing the last section of an open sweep.
    EndCap,
}

/// An indexed triangle mesh.
///
/// The vertex arena is exclusively owned by the mesh and faces reference
/// it by index only; appending vertices never invalidates existing faces.
/// Face winding is counter-clockwise seen from outside, so the outward
/// normal follows the right-hand rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Triangle faces, each a triple of indices into `vertices`.
    pub faces: Vec<[u32; 3]>,
    /// Optional per-face group labels, parallel to `faces` when present.
    pub groups: Option<Vec<FaceGroup>>,
}

impl Mesh {
    /// Creates a new, empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated vertex and face storage.
    #[must_use]
    pub fn with_capacity(vertices: usize, faces: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            faces: Vec::with_capacity(faces),
            groups: None,
        }
    }

    /// Appends a vertex and returns its index.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_vertex(&mut self, point: Point3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(point);
        index
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangle faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Checks that every face index addresses an existing vertex and that
    /// group labels, when present, match the face list.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistency found.
    pub fn validate(&self) -> Result<()> {
        let vertices = self.vertices.len();
        for (face, indices) in self.faces.iter().enumerate() {
            for &index in indices {
                if index as usize >= vertices {
                    return Err(MeshError::IndexOutOfRange {
                        face,
                        index,
                        vertices,
                    }
                    .into());
                }
            }
        }
        if let Some(groups) = &self.groups {
            if groups.len() != self.faces.len() {
                return Err(MeshError::GroupCountMismatch {
                    groups: groups.len(),
                    faces: self.faces.len(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Returns whether the mesh is closed (watertight): every directed
    /// edge appears exactly once, paired with its reverse in a neighboring
    /// face. An empty mesh is not considered closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        if self.faces.is_empty() {
            return false;
        }
        let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
        for face in &self.faces {
            for k in 0..3 {
                let edge = (face[k], face[(k + 1) % 3]);
                *directed.entry(edge).or_insert(0) += 1;
            }
        }
        directed
            .iter()
            .all(|(&(a, b), &count)| count == 1 && directed.get(&(b, a)) == Some(&1))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tetrahedron() -> Mesh {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let b = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        let c = mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
        let d = mesh.add_vertex(Point3::new(0.0, 0.0, 1.0));
        mesh.faces.push([a, c, b]);
        mesh.faces.push([a, b, d]);
        mesh.faces.push([b, c, d]);
        mesh.faces.push([a, d, c]);
        mesh
    }

    #[test]
    fn empty_mesh_is_not_closed() {
        assert!(!Mesh::new().is_closed());
    }

    #[test]
    fn tetrahedron_is_closed() {
        let mesh = tetrahedron();
        assert!(mesh.is_closed());
        mesh.validate().unwrap();
    }

    #[test]
    fn open_fan_is_not_closed() {
        let mut mesh = tetrahedron();
        mesh.faces.pop();
        assert!(!mesh.is_closed());
    }

    #[test]
    fn duplicated_face_is_not_closed() {
        let mut mesh = tetrahedron();
        mesh.faces.push(mesh.faces[0]);
        assert!(!mesh.is_closed());
    }

    #[test]
    fn validate_rejects_out_of_range_indices() {
        let mut mesh = tetrahedron();
        mesh.faces.push([0, 1, 9]);
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn validate_rejects_group_count_mismatch() {
        let mut mesh = tetrahedron();
        mesh.groups = Some(vec![FaceGroup::Side]);
        assert!(mesh.validate().is_err());
    }
}
