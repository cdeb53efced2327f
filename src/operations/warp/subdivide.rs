use crate::geometry::Volume;
use crate::math::Point3;

/// Runs one centroid-subdivision pass over the current face set.
///
/// Every face with at least one vertex inside the volume is replaced by
/// three children sharing an appended centroid vertex, in the parent's
/// winding; every other face is copied verbatim. No existing edge is ever
/// split, so neighboring faces outside the region keep valid boundaries
/// and no T-junction can appear.
///
/// `inside` is the per-vertex membership cache, extended in step with the
/// vertex arena as centroids are appended.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn centroid_pass(
    vertices: &mut Vec<Point3>,
    inside: &mut Vec<bool>,
    faces: &[[u32; 3]],
    volume: &Volume,
) -> Vec<[u32; 3]> {
    let mut out = Vec::with_capacity(faces.len());
    for &[i0, i1, i2] in faces {
        let affected =
            inside[i0 as usize] || inside[i1 as usize] || inside[i2 as usize];
        if !affected {
            out.push([i0, i1, i2]);
            continue;
        }

        let centroid = Point3::from(
            (vertices[i0 as usize].coords
                + vertices[i1 as usize].coords
                + vertices[i2 as usize].coords)
                / 3.0,
        );
        let ic = vertices.len() as u32;
        inside.push(volume.contains_world(&centroid));
        vertices.push(centroid);

        out.push([i0, i1, ic]);
        out.push([i1, i2, ic]);
        out.push([i2, i0, ic]);
    }
    out
}
