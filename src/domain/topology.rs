//! UV topology: flattened surface coordinates plus triangle connectivity

use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};

/// A point on the flattened surface map, nominally in `[0, 1]`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UvCoord {
    pub u: f32,
    pub v: f32,
}

impl UvCoord {
    pub fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }
}

/// Three indices into the owning topology's coordinate list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UvTriangle(pub [u32; 3]);

/// Validated UV topology.
///
/// Every triangle index is guaranteed to be in `0..coordinates.len()`.
/// A topology is built once per model load and replaced wholesale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UvTopology {
    coordinates: Vec<UvCoord>,
    triangles: Vec<UvTriangle>,
}

impl UvTopology {
    /// Build a topology, failing on the first out-of-range triangle index
    pub fn new(coordinates: Vec<UvCoord>, triangles: Vec<UvTriangle>) -> Result<Self> {
        let len = coordinates.len();
        for (triangle, tri) in triangles.iter().enumerate() {
            if let Some(&index) = tri.0.iter().find(|&&i| i as usize >= len) {
                return Err(EditorError::InvalidTriangle {
                    triangle,
                    index,
                    len,
                });
            }
        }
        Ok(Self {
            coordinates,
            triangles,
        })
    }

    /// Build from triangles the caller has already bounds-checked
    pub(crate) fn from_validated(coordinates: Vec<UvCoord>, triangles: Vec<UvTriangle>) -> Self {
        debug_assert!(
            triangles
                .iter()
                .all(|t| t.0.iter().all(|&i| (i as usize) < coordinates.len()))
        );
        Self {
            coordinates,
            triangles,
        }
    }

    /// A topology with no triangles (model without UV data)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn coordinates(&self) -> &[UvCoord] {
        &self.coordinates
    }

    pub fn triangles(&self) -> &[UvTriangle] {
        &self.triangles
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Resolve a triangle into its three corner coordinates
    pub fn corners(&self, triangle: UvTriangle) -> Option<[UvCoord; 3]> {
        let [a, b, c] = triangle.0;
        Some([
            *self.coordinates.get(a as usize)?,
            *self.coordinates.get(b as usize)?,
            *self.coordinates.get(c as usize)?,
        ])
    }
}

/// Wire shape of a UV topology source:
/// `{ "coordinates": [{"u":..,"v":..}], "triangles": [[i,j,k]] }`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TopologySource {
    pub coordinates: Vec<UvCoord>,
    pub triangles: Vec<UvTriangle>,
}

impl TryFrom<TopologySource> for UvTopology {
    type Error = EditorError;

    fn try_from(source: TopologySource) -> Result<Self> {
        UvTopology::new(source.coordinates, source.triangles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range_index() {
        let coords = vec![UvCoord::new(0.0, 0.0), UvCoord::new(1.0, 0.0)];
        let err = UvTopology::new(coords, vec![UvTriangle([0, 1, 2])]).unwrap_err();
        match err {
            EditorError::InvalidTriangle {
                triangle,
                index,
                len,
            } => {
                assert_eq!((triangle, index, len), (0, 2, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_source_json() {
        let json = r#"{
            "coordinates": [{"u": 0.0, "v": 0.0}, {"u": 1.0, "v": 0.0}, {"u": 0.0, "v": 1.0}],
            "triangles": [[0, 1, 2]]
        }"#;
        let source: TopologySource = serde_json::from_str(json).unwrap();
        let topology = UvTopology::try_from(source).unwrap();
        assert_eq!(topology.triangles().len(), 1);
        let corners = topology.corners(topology.triangles()[0]).unwrap();
        assert_eq!(corners[1], UvCoord::new(1.0, 0.0));
    }

    #[test]
    fn test_empty_topology_is_valid() {
        let topology = UvTopology::new(vec![UvCoord::new(0.5, 0.5)], vec![]).unwrap();
        assert!(topology.is_empty());
        assert!(UvTopology::empty().coordinates().is_empty());
    }
}
