//! Service layer: contact discovery, risk labeling, and network construction.
//!
//! Services are pure functions over a caller-supplied, read-only row set.
//! Each query builds its own working state (index, visited set, queue), so
//! queries may run concurrently from multiple threads without coordination.

pub mod contact_finder;

pub mod network_builder;

pub mod risk;

pub use contact_finder::{
    find_direct_contacts, find_equipment_contacts, ContactIndex, DEFAULT_EQUIPMENT_WINDOW_HOURS,
};
pub use network_builder::{build_contact_network, NetworkParams};
pub use risk::{assess_risk, calculate_risk_score, risk_level, RiskAssessment, RiskLevel};
