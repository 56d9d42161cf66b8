//! UV topology extraction from raw mesh attribute data
//!
//! A model may hold several meshes. Each contributes its UV pairs and its
//! index buffer grouped in runs of three; the results are concatenated into
//! one flat topology with indices rebased onto the combined coordinate list.

use crate::domain::{UvCoord, UvTopology, UvTriangle};

/// UV-relevant attributes of one mesh, as supplied by the model loader
#[derive(Clone, Copy, Debug, Default)]
pub struct MeshAttributes<'a> {
    /// Per-vertex UV pairs; `None` when the mesh has no UV attribute
    pub uvs: Option<&'a [[f32; 2]]>,
    /// Triangle-list index buffer; `None` for non-indexed meshes
    pub indices: Option<&'a [u32]>,
}

impl<'a> MeshAttributes<'a> {
    pub fn new(uvs: &'a [[f32; 2]], indices: &'a [u32]) -> Self {
        Self {
            uvs: Some(uvs),
            indices: Some(indices),
        }
    }
}

/// Flatten the UV data of every mesh into a single topology.
///
/// Meshes missing either attribute contribute nothing. Triangles that
/// reference a UV outside their own mesh are dropped with a warning, and a
/// trailing partial run of fewer than three indices is ignored.
pub fn extract_topology<'a>(meshes: impl IntoIterator<Item = MeshAttributes<'a>>) -> UvTopology {
    let mut coordinates: Vec<UvCoord> = Vec::new();
    let mut triangles: Vec<UvTriangle> = Vec::new();

    for (mesh_index, mesh) in meshes.into_iter().enumerate() {
        let (Some(uvs), Some(indices)) = (mesh.uvs, mesh.indices) else {
            log::debug!("Mesh {mesh_index} has no UVs or no index buffer, skipping");
            continue;
        };

        let Ok(offset) = u32::try_from(coordinates.len()) else {
            log::warn!("UV coordinate count exceeds u32 range, stopping at mesh {mesh_index}");
            break;
        };
        let count = uvs.len() as u64;

        coordinates.extend(uvs.iter().map(|&[u, v]| UvCoord::new(u, v)));

        let mut dropped = 0usize;
        for chunk in indices.chunks_exact(3) {
            if chunk.iter().any(|&i| u64::from(i) >= count) {
                dropped += 1;
                continue;
            }
            triangles.push(UvTriangle([
                chunk[0] + offset,
                chunk[1] + offset,
                chunk[2] + offset,
            ]));
        }
        if dropped > 0 {
            log::warn!("Mesh {mesh_index}: dropped {dropped} triangles with out-of-range UV indices");
        }
    }

    log::debug!(
        "Extracted UV topology: {} coordinates, {} triangles",
        coordinates.len(),
        triangles.len()
    );
    UvTopology::from_validated(coordinates, triangles)
}
