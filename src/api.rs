//! Public API surface for the contact tracing engine.
//!
//! This file consolidates the DTO types exchanged with the surrounding
//! application: row ingestion on the way in, the network JSON contract and
//! risk labels on the way out. All types derive Serialize/Deserialize for
//! JSON serialization.

pub use crate::models::contact_log::{ContactLogRow, RawContactRow};
pub use crate::models::network::{
    ContactEvent, ContactKind, ContactType, Network, NetworkEdge, NetworkNode, NetworkStats,
};
pub use crate::models::time::TimeInterval;
pub use crate::services::network_builder::NetworkParams;
pub use crate::services::risk::{RiskAssessment, RiskLevel};
