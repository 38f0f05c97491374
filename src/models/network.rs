//! Exposure network types: contact events, nodes, edges, and the network DTO
//! consumed by the graph renderer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How a contact was acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    /// Co-presence in the same room with overlapping time
    Direct,
    /// Shared equipment use within the risk window
    Equipment,
}

impl std::fmt::Display for ContactType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactType::Direct => write!(f, "direct"),
            ContactType::Equipment => write!(f, "equipment"),
        }
    }
}

/// Type-specific payload of a contact event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "contactType", rename_all = "lowercase")]
pub enum ContactKind {
    Direct {
        /// The shared room
        location: String,
        /// The matched row's own visit length, in minutes
        #[serde(rename = "duration")]
        duration_minutes: f64,
    },
    Equipment {
        /// The shared equipment id
        #[serde(rename = "equipment")]
        equipment_id: String,
        /// timeIn-to-timeIn distance, rounded to the nearest hour
        #[serde(rename = "timeDiff")]
        time_diff_hours: i64,
    },
}

impl ContactKind {
    pub fn contact_type(&self) -> ContactType {
        match self {
            ContactKind::Direct { .. } => ContactType::Direct,
            ContactKind::Equipment { .. } => ContactType::Equipment,
        }
    }
}

/// A single exposure observation emitted by the contact finders.
///
/// Transient: produced per query, consumed immediately by the network builder
/// and the risk scorer, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactEvent {
    pub person_id: String,
    pub person_name: String,
    /// The matched row's `timeIn`
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: ContactKind,
}

/// A discovered person in the exposure network.
///
/// The source person is level 0 and implicit; it is not emitted as a node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkNode {
    /// Person id
    pub id: String,
    /// Display name
    pub name: String,
    /// BFS distance from the source (>= 1)
    pub level: u32,
    /// Contact type of the discovering edge
    #[serde(rename = "type")]
    pub kind: ContactType,
}

/// A directed exposure edge from the discovering person to the contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkEdge {
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub kind: ContactType,
    /// Informational weight for renderers (direct = 1.0, equipment = 0.5);
    /// not consumed by scoring
    pub weight: f64,
}

/// The exposure network built from one index person.
///
/// Built once per query and immutable after construction; each non-source
/// person appears at most once in `nodes` and carries exactly one inbound
/// edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    /// The index person's id
    pub source: String,
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
}

impl Network {
    /// An empty network for the given source (unknown source ids resolve to
    /// this rather than an error).
    pub fn empty(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Serialize to the JSON shape consumed by the graph renderer.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Summary statistics over the discovered network.
    pub fn stats(&self) -> NetworkStats {
        let direct_count = self
            .edges
            .iter()
            .filter(|e| e.kind == ContactType::Direct)
            .count();

        NetworkStats {
            node_count: self.nodes.len(),
            edge_count: self.edges.len(),
            direct_count,
            equipment_count: self.edges.len() - direct_count,
            max_level: self.nodes.iter().map(|n| n.level).max().unwrap_or(0),
        }
    }
}

/// Network statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkStats {
    /// Number of discovered persons (source excluded)
    pub node_count: usize,
    /// Number of exposure edges
    pub edge_count: usize,
    /// Edges discovered via direct contact
    pub direct_count: usize,
    /// Edges discovered via shared equipment
    pub equipment_count: usize,
    /// Deepest BFS level present (0 for an empty network)
    pub max_level: u32,
}
