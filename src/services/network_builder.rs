//! Breadth-first exposure network construction.
//!
//! Starting from an index person, the builder expands level by level through
//! the direct and equipment contact finders, recording each newly discovered
//! person as a node with its shortest-hop level and exactly one inbound edge.
//! The visited set gates both node and edge creation, so first discovery
//! wins: a person reachable via both channels keeps whichever edge the BFS
//! reaches first (direct contacts are expanded before equipment contacts at
//! every node).

use std::collections::{HashSet, VecDeque};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{ContactLogRow, Network, NetworkEdge, NetworkNode};
use crate::services::contact_finder::{
    direct_contacts, equipment_contacts, ContactIndex, DEFAULT_EQUIPMENT_WINDOW_HOURS,
};

/// Edge weight for direct contacts (informational, for renderers)
pub const DIRECT_EDGE_WEIGHT: f64 = 1.0;
/// Edge weight for equipment contacts
pub const EQUIPMENT_EDGE_WEIGHT: f64 = 0.5;

/// Parameters for network construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkParams {
    /// Maximum BFS hop distance from the source
    #[serde(default = "default_depth")]
    pub depth: u32,

    /// Equipment risk window in hours
    #[serde(default = "default_equipment_window")]
    pub equipment_window_hours: f64,

    /// Optional row cap: datasets larger than this are rejected before any
    /// expansion work (the engine itself has no timeout)
    #[serde(default)]
    pub row_limit: Option<usize>,
}

fn default_depth() -> u32 {
    2
}

fn default_equipment_window() -> f64 {
    DEFAULT_EQUIPMENT_WINDOW_HOURS
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self {
            depth: default_depth(),
            equipment_window_hours: default_equipment_window(),
            row_limit: None,
        }
    }
}

/// Build the bounded-depth exposure network for an index person.
///
/// Runs a breadth-first expansion over persons: each dequeued person whose
/// level is below `params.depth` is expanded through the direct finder, then
/// the equipment finder. Contacts not yet visited become nodes at
/// `level + 1` with one inbound edge, and are enqueued. Nodes at exactly
/// `depth` are still discovered from the last allowed expansion but are not
/// expanded themselves.
///
/// An unknown source id yields an empty network, not an error; the only
/// failure is the caller-imposed row cap.
///
/// # Arguments
///
/// * `rows` - The full contact-log row set (read-only, shareable across
///   concurrent queries)
/// * `source_person_id` - The index person
/// * `params` - Depth, equipment window, and optional row cap
pub fn build_contact_network(
    rows: &[ContactLogRow],
    source_person_id: &str,
    params: &NetworkParams,
) -> Result<Network> {
    if let Some(limit) = params.row_limit {
        if rows.len() > limit {
            return Err(Error::RowLimitExceeded {
                rows: rows.len(),
                limit,
            });
        }
    }

    let index = ContactIndex::build(rows);
    let mut network = Network::empty(source_person_id);

    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(source_person_id.to_string());

    let mut queue: VecDeque<(String, u32)> = VecDeque::new();
    queue.push_back((source_person_id.to_string(), 0));

    while let Some((current_id, level)) = queue.pop_front() {
        // Levels are non-decreasing in BFS order; once the front reaches the
        // depth bound no further expansion can occur
        if level >= params.depth {
            break;
        }

        debug!("expanding '{}' at level {}", current_id, level);

        let mut discovered = direct_contacts(rows, &index, &current_id);
        discovered.extend(equipment_contacts(
            rows,
            &index,
            &current_id,
            params.equipment_window_hours,
        ));

        for contact in discovered {
            if !visited.insert(contact.person_id.clone()) {
                continue;
            }

            let kind = contact.kind.contact_type();
            network.nodes.push(NetworkNode {
                id: contact.person_id.clone(),
                name: contact.person_name.clone(),
                level: level + 1,
                kind,
            });
            network.edges.push(NetworkEdge {
                from: current_id.clone(),
                to: contact.person_id.clone(),
                kind,
                weight: match kind {
                    crate::models::ContactType::Direct => DIRECT_EDGE_WEIGHT,
                    crate::models::ContactType::Equipment => EQUIPMENT_EDGE_WEIGHT,
                },
            });
            queue.push_back((contact.person_id, level + 1));
        }
    }

    debug!(
        "contact network for '{}': {} nodes, {} edges",
        source_person_id,
        network.nodes.len(),
        network.edges.len()
    );

    Ok(network)
}
