//! # mdr-trace
//!
//! Contact tracing network engine for hospital MDR (multi-drug-resistant
//! organism) surveillance.
//!
//! Given parsed contact-log rows (one row per person-room visit, with the
//! equipment used during the visit), this crate reconstructs who was exposed
//! to whom — directly, by sharing a room with overlapping time, or
//! indirectly, by sharing equipment within a risk window — builds a
//! bounded-depth exposure graph from an index person, and labels exposure
//! severity with a numeric score and a red/yellow/green level.
//!
//! ## Features
//!
//! - **Ingestion**: validate raw rows (string timestamps, comma-separated
//!   equipment lists) into typed [`models::ContactLogRow`] values
//! - **Contact discovery**: direct (room + time overlap) and equipment
//!   (shared item within a time window) finders over an indexed row set
//! - **Risk labeling**: additive scoring and fixed-threshold classification
//! - **Network construction**: breadth-first expansion with cycle avoidance,
//!   bounded by hop depth, serializable to the renderer JSON contract
//!
//! ## Example
//!
//! ```rust,ignore
//! use mdr_trace::{build_contact_network, parse_contact_rows_json, NetworkParams};
//!
//! let rows = parse_contact_rows_json(&uploaded_json)?;
//! let network = build_contact_network(&rows, "P001", &NetworkParams::default())?;
//! let json = network.to_json()?;
//! ```
//!
//! ## Concurrency
//!
//! The engine is synchronous and pure-functional over an in-memory, read-only
//! row slice: no shared mutable state, no I/O. Queries are independent and
//! may run concurrently against the same row set without coordination.

pub mod api;
pub mod error;
pub mod models;
pub mod services;

pub use error::{Error, Result};
pub use models::contact_log::parse_contact_rows_json;
pub use models::{ContactLogRow, Network, NetworkStats};
pub use services::{
    assess_risk, build_contact_network, calculate_risk_score, find_direct_contacts,
    find_equipment_contacts, risk_level, NetworkParams, RiskAssessment, RiskLevel,
};
