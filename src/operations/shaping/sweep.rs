use tracing::debug;

use crate::error::{Result, SweepError};
use crate::geometry::{PlaneFrame, Shape};
use crate::mesh::{FaceGroup, Mesh};
use crate::tessellation::triangulate_section;

/// One station along a sweep: a cross-section and the pose it sits at.
#[derive(Debug, Clone)]
pub struct SweepSection {
    /// The cross-section at this station.
    pub shape: Shape,
    /// The pose the section is projected through.
    pub frame: PlaneFrame,
}

impl SweepSection {
    /// Creates a new section.
    #[must_use]
    pub fn new(shape: Shape, frame: PlaneFrame) -> Self {
        Self { shape, frame }
    }
}

/// Options controlling sweep topology.
#[derive(Debug, Clone, Copy)]
pub struct SweepOptions {
    /// Wrap the last section back to the first, producing a ring solid.
    /// Closed sweeps never carry caps.
    pub closed: bool,
    /// Close the open ends with flat triangulated caps.
    pub capped: bool,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            closed: false,
            capped: true,
        }
    }
}

/// Sweeps an ordered sequence of sections into a triangle mesh.
///
/// Every section's contours are projected into rings, consecutive rings
/// are stitched with side-wall quads, and open capped sweeps close their
/// ends with flat triangulated sections. Hole contours produce interior
/// tunnels: because holes are stored clockwise, the very same stitching
/// path that winds outer walls outward winds tunnel walls towards the
/// tunnel, away from the material.
pub struct Sweep {
    sections: Vec<SweepSection>,
    options: SweepOptions,
}

impl Sweep {
    /// Creates a new `Sweep` operation.
    #[must_use]
    pub fn new(sections: Vec<SweepSection>, options: SweepOptions) -> Self {
        Self { sections, options }
    }

    /// Executes the sweep.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 sections were supplied, if the
    /// sections do not agree on hole structure, or if cap triangulation
    /// fails.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<Mesh> {
        let sections = &self.sections;
        validate_sections(sections)?;

        let layout = contour_layout(&sections[0].shape);
        let points_per_section: usize = layout.iter().map(|&(_, len)| len as usize).sum();

        let mut mesh = Mesh::with_capacity(
            points_per_section * sections.len(),
            points_per_section * sections.len() * 2,
        );
        let mut groups = Vec::new();

        // Project every section into the shared vertex arena. Each section
        // occupies one contiguous block, outer contour first and holes
        // following, so cap triangulations can map their local indices
        // directly onto ring vertices.
        let mut bases = Vec::with_capacity(sections.len());
        for section in sections {
            bases.push(mesh.vertices.len() as u32);
            let rings = section.frame.project_shape(&section.shape);
            mesh.vertices.extend(rings.outer);
            for hole in rings.holes {
                mesh.vertices.extend(hole);
            }
        }

        // Side walls between consecutive ring pairs, wrapping when closed.
        let pair_count = if self.options.closed {
            sections.len()
        } else {
            sections.len() - 1
        };
        for i in 0..pair_count {
            let j = (i + 1) % sections.len();
            for &(offset, len) in &layout {
                let r0 = bases[i] + offset;
                let r1 = bases[j] + offset;
                for k in 0..len {
                    let k1 = (k + 1) % len;
                    // Winding chosen so counter-clockwise contours wall
                    // outward under the right = heading × up basis.
                    mesh.faces.push([r0 + k, r1 + k, r1 + k1]);
                    mesh.faces.push([r0 + k, r1 + k1, r0 + k1]);
                    groups.push(FaceGroup::Side);
                    groups.push(FaceGroup::Side);
                }
            }
        }

        if !self.options.closed && self.options.capped {
            // Counter-clockwise section triangles face against the heading,
            // which is outward at the first section; the end cap reverses
            // each triangle to face along the heading.
            let first = &sections[0].shape;
            for tri in triangulate_section(first.outer(), first.holes())? {
                mesh.faces
                    .push([bases[0] + tri[0], bases[0] + tri[1], bases[0] + tri[2]]);
                groups.push(FaceGroup::StartCap);
            }

            let last = sections.len() - 1;
            let end = &sections[last].shape;
            for tri in triangulate_section(end.outer(), end.holes())? {
                mesh.faces
                    .push([bases[last] + tri[0], bases[last] + tri[2], bases[last] + tri[1]]);
                groups.push(FaceGroup::EndCap);
            }
        }

        debug!(
            sections = sections.len(),
            vertices = mesh.vertices.len(),
            faces = mesh.faces.len(),
            closed = self.options.closed,
            "sweep complete"
        );
        mesh.groups = Some(groups);
        Ok(mesh)
    }
}

/// Checks the section count and the hole structure shared by all sections.
fn validate_sections(sections: &[SweepSection]) -> Result<()> {
    if sections.len() < 2 {
        return Err(SweepError::InsufficientSamples(sections.len()).into());
    }
    let first = &sections[0].shape;
    for (sample, section) in sections.iter().enumerate().skip(1) {
        let shape = &section.shape;
        if shape.hole_count() != first.hole_count() {
            return Err(SweepError::HoleCountMismatch {
                sample,
                expected: first.hole_count(),
                found: shape.hole_count(),
            }
            .into());
        }
        for (contour, (expected, found)) in first.contours().zip(shape.contours()).enumerate() {
            if expected.len() != found.len() {
                return Err(SweepError::PointCountMismatch {
                    sample,
                    contour,
                    expected: expected.len(),
                    found: found.len(),
                }
                .into());
            }
        }
    }
    Ok(())
}

/// Offset and length of every contour within one section's vertex block.
#[allow(clippy::cast_possible_truncation)]
fn contour_layout(shape: &Shape) -> Vec<(u32, u32)> {
    let mut layout = Vec::with_capacity(1 + shape.hole_count());
    let mut at = 0u32;
    for contour in shape.contours() {
        layout.push((at, contour.len() as u32));
        at += contour.len() as u32;
    }
    layout
}
