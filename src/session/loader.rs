//! Load request tracking and async file reads
//!
//! Model and image loads complete asynchronously. Each request takes a
//! monotonically increasing ticket; a result is applied only if its ticket
//! is still the newest for that kind of resource.

use std::path::Path;

use anyhow::Context;

use crate::domain::{TopologySource, UvTopology};
use crate::error::{EditorError, Result};

/// Kind of resource a load request is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadKind {
    Model,
    Image,
}

/// Token identifying one load request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket {
    kind: LoadKind,
    seq: u64,
}

impl LoadTicket {
    pub fn kind(&self) -> LoadKind {
        self.kind
    }
}

/// What happened to a finished load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The result was applied to the editor
    Applied,
    /// A newer request exists; the result was dropped
    Stale,
    /// The load failed; previous state is kept
    Failed(String),
}

/// Issues tickets and remembers the newest one per resource kind
#[derive(Debug, Default)]
pub struct LoadTracker {
    next_seq: u64,
    latest_model: Option<u64>,
    latest_image: Option<u64>,
}

impl LoadTracker {
    /// Start a new request, superseding any in flight for the same kind
    pub fn issue(&mut self, kind: LoadKind) -> LoadTicket {
        self.next_seq += 1;
        let seq = self.next_seq;
        match kind {
            LoadKind::Model => self.latest_model = Some(seq),
            LoadKind::Image => self.latest_image = Some(seq),
        }
        LoadTicket { kind, seq }
    }

    /// Whether a result for `ticket` should still be applied
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        let latest = match ticket.kind {
            LoadKind::Model => self.latest_model,
            LoadKind::Image => self.latest_image,
        };
        latest == Some(ticket.seq)
    }
}

/// Parse a topology source document
pub fn parse_topology(json: &[u8], source_name: &str) -> Result<UvTopology> {
    let source: TopologySource =
        serde_json::from_slice(json).map_err(|e| EditorError::TopologyLoad {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;
    UvTopology::try_from(source)
}

/// Read and parse a topology JSON file
pub async fn read_topology_file(path: &Path) -> anyhow::Result<UvTopology> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read topology file: {}", path.display()))?;
    let topology = parse_topology(&bytes, &path.display().to_string())?;
    Ok(topology)
}

/// Read the raw bytes of an uploaded image file
pub async fn read_image_file(path: &Path) -> anyhow::Result<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read image file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes() {
        let mut tracker = LoadTracker::default();
        let first = tracker.issue(LoadKind::Model);
        let second = tracker.issue(LoadKind::Model);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut tracker = LoadTracker::default();
        let model = tracker.issue(LoadKind::Model);
        let image = tracker.issue(LoadKind::Image);
        assert!(tracker.is_current(model));
        assert!(tracker.is_current(image));
        assert_eq!(model.kind(), LoadKind::Model);
        assert_eq!(image.kind(), LoadKind::Image);
    }

    #[test]
    fn test_parse_topology_errors() {
        let err = parse_topology(b"{ nope", "inline").unwrap_err();
        assert!(matches!(err, EditorError::TopologyLoad { .. }));

        let bad_index = br#"{"coordinates": [{"u": 0, "v": 0}], "triangles": [[0, 0, 1]]}"#;
        let err = parse_topology(bad_index, "inline").unwrap_err();
        assert!(matches!(err, EditorError::InvalidTriangle { index: 1, .. }));
    }

    #[tokio::test]
    async fn test_read_topology_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("uv.json");
        std::fs::write(
            &path,
            r#"{"coordinates": [{"u": 0, "v": 0}, {"u": 1, "v": 0}, {"u": 0, "v": 1}],
                "triangles": [[0, 1, 2]]}"#,
        )
        .unwrap();
        let topology = read_topology_file(&path).await.unwrap();
        assert_eq!(topology.triangles().len(), 1);

        assert!(read_topology_file(&dir.path().join("missing.json")).await.is_err());
    }
}
