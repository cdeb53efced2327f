//! Local mesh refinement and deformation against a bounding volume.

mod subdivide;

use tracing::debug;

use crate::error::{Result, WarpError};
use crate::geometry::Volume;
use crate::math::Point3;
use crate::mesh::Mesh;

/// Upper bound on subdivision passes; face growth inside the affected
/// region is exponential.
pub const MAX_SUBDIVISION_PASSES: usize = 16;

/// A pure deformation evaluated in a volume's local frame.
///
/// Implementations map a local `(x, y, depth)` point to its displaced
/// local position; the warp engine handles the world/local mapping on
/// both sides. New deformation families plug in by implementing this
/// trait, no engine changes required.
pub trait Deformation {
    /// Maps a local point to its displaced position.
    fn deform(&self, local: Point3) -> Point3;
}

impl<F> Deformation for F
where
    F: Fn(Point3) -> Point3,
{
    fn deform(&self, local: Point3) -> Point3 {
        self(local)
    }
}

/// Locally refines and deforms a mesh inside a bounding volume.
///
/// Zero or more centroid-subdivision passes raise the resolution of
/// every face touching the volume, then each vertex inside the volume is
/// displaced by the deformation evaluated in the volume's local frame.
/// Faces and vertices outside the volume pass through untouched.
pub struct Warp<'a, D> {
    mesh: &'a Mesh,
    volume: Volume,
    deformation: D,
    passes: usize,
}

impl<'a, D: Deformation> Warp<'a, D> {
    /// Creates a new `Warp` operation.
    #[must_use]
    pub fn new(mesh: &'a Mesh, volume: Volume, deformation: D, passes: usize) -> Self {
        Self {
            mesh,
            volume,
            deformation,
            passes,
        }
    }

    /// Executes the warp, returning a new mesh.
    ///
    /// # Errors
    ///
    /// Returns [`WarpError::SubdivisionBounds`] if the requested pass
    /// count exceeds [`MAX_SUBDIVISION_PASSES`].
    pub fn execute(&self) -> Result<Mesh> {
        if self.passes > MAX_SUBDIVISION_PASSES {
            return Err(WarpError::SubdivisionBounds {
                requested: self.passes,
                max: MAX_SUBDIVISION_PASSES,
            }
            .into());
        }

        let mut vertices = self.mesh.vertices.clone();
        let mut faces = self.mesh.faces.clone();
        // Volume membership is decided once per vertex, when the vertex
        // first exists, and reused for the displacement step.
        let mut inside: Vec<bool> = vertices
            .iter()
            .map(|v| self.volume.contains_world(v))
            .collect();

        for pass in 0..self.passes {
            let before = faces.len();
            faces = subdivide::centroid_pass(&mut vertices, &mut inside, &faces, &self.volume);
            debug!(pass, before, after = faces.len(), "centroid subdivision");
        }

        let frame = self.volume.frame();
        for (vertex, &is_inside) in vertices.iter_mut().zip(&inside) {
            if is_inside {
                let local = frame.unproject(vertex);
                *vertex = frame.reproject(&self.deformation.deform(local));
            }
        }

        // Group labels do not survive restructuring.
        let groups = if self.passes == 0 {
            self.mesh.groups.clone()
        } else {
            None
        };
        Ok(Mesh {
            vertices,
            faces,
            groups,
        })
    }
}
