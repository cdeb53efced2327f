use crate::error::{FrameError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::PlaneFrame;

/// Bounding extents of a [`Volume`], expressed in its local frame.
#[derive(Debug, Clone, Copy)]
pub enum VolumeExtents {
    /// A sphere of the given radius about the frame origin.
    Sphere { radius: f64 },
    /// An axis-aligned box in the local frame: a local point is inside
    /// when each coordinate magnitude stays within the matching half
    /// extent (x → right, y → up, z → heading).
    Cuboid { half_extents: Vector3 },
}

/// A bounded region of space used to scope a warp: a pose plus extents.
///
/// Volumes are constructed per warp invocation and not persisted.
#[derive(Debug, Clone)]
pub struct Volume {
    frame: PlaneFrame,
    extents: VolumeExtents,
}

impl Volume {
    /// Creates a spherical volume.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive.
    pub fn sphere(frame: PlaneFrame, radius: f64) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(FrameError::NonPositiveExtent {
                parameter: "radius",
                value: radius,
            }
            .into());
        }
        Ok(Self {
            frame,
            extents: VolumeExtents::Sphere { radius },
        })
    }

    /// Creates a box volume from half extents.
    ///
    /// # Errors
    ///
    /// Returns an error if any half extent is non-positive.
    pub fn cuboid(frame: PlaneFrame, half_extents: Vector3) -> Result<Self> {
        for (value, parameter) in [
            (half_extents.x, "x half extent"),
            (half_extents.y, "y half extent"),
            (half_extents.z, "z half extent"),
        ] {
            if value < TOLERANCE {
                return Err(FrameError::NonPositiveExtent { parameter, value }.into());
            }
        }
        Ok(Self {
            frame,
            extents: VolumeExtents::Cuboid { half_extents },
        })
    }

    /// Returns the volume's local frame.
    #[must_use]
    pub fn frame(&self) -> &PlaneFrame {
        &self.frame
    }

    /// Returns the volume's extents.
    #[must_use]
    pub fn extents(&self) -> &VolumeExtents {
        &self.extents
    }

    /// Tests a point already expressed in the volume's local frame.
    #[must_use]
    pub fn contains_local(&self, local: &Point3) -> bool {
        match self.extents {
            VolumeExtents::Sphere { radius } => local.coords.norm_squared() <= radius * radius,
            VolumeExtents::Cuboid { half_extents } => {
                local.x.abs() <= half_extents.x
                    && local.y.abs() <= half_extents.y
                    && local.z.abs() <= half_extents.z
            }
        }
    }

    /// Tests a world-space point.
    #[must_use]
    pub fn contains_world(&self, world: &Point3) -> bool {
        self.contains_local(&self.frame.unproject(world))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn frame_at(x: f64, y: f64, z: f64) -> PlaneFrame {
        PlaneFrame::new(
            Point3::new(x, y, z),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 1.0, 0.0),
        )
        .unwrap()
    }

    #[test]
    fn sphere_containment() {
        let volume = Volume::sphere(frame_at(10.0, 0.0, 0.0), 2.0).unwrap();
        assert!(volume.contains_world(&Point3::new(10.0, 0.0, 0.0)));
        assert!(volume.contains_world(&Point3::new(11.5, 0.0, 0.0)));
        assert!(!volume.contains_world(&Point3::new(13.0, 0.0, 0.0)));
    }

    #[test]
    fn cuboid_containment_uses_local_axes() {
        // Frame heading +z, so the local z half extent bounds world z.
        let volume =
            Volume::cuboid(frame_at(0.0, 0.0, 0.0), Vector3::new(1.0, 2.0, 3.0)).unwrap();
        assert!(volume.contains_world(&Point3::new(0.0, 0.0, 2.5)));
        assert!(!volume.contains_world(&Point3::new(0.0, 0.0, 3.5)));
        assert!(volume.contains_world(&Point3::new(0.5, 1.5, 0.0)));
        assert!(!volume.contains_world(&Point3::new(1.5, 0.0, 0.0)));
    }

    #[test]
    fn non_positive_extents_are_rejected() {
        assert!(Volume::sphere(frame_at(0.0, 0.0, 0.0), 0.0).is_err());
        assert!(Volume::cuboid(frame_at(0.0, 0.0, 0.0), Vector3::new(1.0, -1.0, 1.0)).is_err());
    }
}
