//! Contact-log row model and JSON ingestion.
//!
//! The upload collaborator (CSV/Excel parsing lives outside this crate) hands
//! over rows with string timestamps and a comma-separated equipment list.
//! This module validates those rows into typed [`ContactLogRow`] values so
//! that malformed timestamps are rejected up front instead of poisoning
//! overlap comparisons later.

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::models::time::TimeInterval;

/// One observed presence event: a single contiguous occupancy of a room by a
/// person, with the equipment used during that visit.
///
/// `person_id` is not unique across rows; a person has one row per room
/// visit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactLogRow {
    pub person_id: String,
    /// Display name, carried through to network nodes
    pub person_name: String,
    pub room_id: String,
    pub time_in: DateTime<Utc>,
    pub time_out: DateTime<Utc>,
    /// Equipment used during this visit, may be empty
    #[serde(default)]
    pub equipment_ids: Vec<String>,
}

impl ContactLogRow {
    /// The occupancy interval for this visit.
    pub fn interval(&self) -> TimeInterval {
        TimeInterval::new(self.time_in, self.time_out)
    }
}

/// Ingestion-facing row shape as produced by the upload collaborator.
///
/// Timestamps are RFC 3339 strings and `equipmentIds` is one comma-separated
/// string; [`RawContactRow::into_row`] performs the validated conversion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContactRow {
    pub person_id: String,
    #[serde(default)]
    pub person_name: String,
    pub room_id: String,
    pub time_in: String,
    pub time_out: String,
    #[serde(default)]
    pub equipment_ids: String,
}

impl RawContactRow {
    /// Validate and convert into a typed [`ContactLogRow`].
    ///
    /// # Errors
    ///
    /// * [`Error::MalformedTimestamp`] if either timestamp fails to parse
    /// * [`Error::InvalidInterval`] if `timeOut` precedes `timeIn`
    pub fn into_row(self) -> crate::error::Result<ContactLogRow> {
        let time_in = parse_timestamp("timeIn", &self.time_in)?;
        let time_out = parse_timestamp("timeOut", &self.time_out)?;

        if time_out < time_in {
            return Err(Error::InvalidInterval {
                person_id: self.person_id,
                time_in,
                time_out,
            });
        }

        Ok(ContactLogRow {
            person_id: self.person_id,
            person_name: self.person_name,
            room_id: self.room_id,
            time_in,
            time_out,
            equipment_ids: split_equipment_ids(&self.equipment_ids),
        })
    }
}

fn parse_timestamp(field: &'static str, value: &str) -> crate::error::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| Error::MalformedTimestamp {
            field,
            value: value.to_string(),
            source,
        })
}

/// Split a comma-separated equipment list into trimmed, non-empty ids.
///
/// An empty or whitespace-only input yields an empty vector.
pub fn split_equipment_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a JSON array of raw rows into validated contact-log rows.
///
/// This is the library-side half of the ingestion seam: the surrounding
/// application converts uploaded files into the raw JSON row shape, this
/// function takes it the rest of the way.
///
/// # Arguments
///
/// * `json` - JSON array of raw rows (camelCase fields, string timestamps)
///
/// # Returns
///
/// Validated rows in input order, or an error naming the first offending row.
pub fn parse_contact_rows_json(json: &str) -> anyhow::Result<Vec<ContactLogRow>> {
    let raw: Vec<RawContactRow> =
        serde_json::from_str(json).context("Invalid contact log JSON")?;

    raw.into_iter()
        .enumerate()
        .map(|(i, row)| {
            row.into_row()
                .with_context(|| format!("Invalid contact log row at index {}", i))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_row(time_in: &str, time_out: &str, equipment: &str) -> RawContactRow {
        RawContactRow {
            person_id: "P001".to_string(),
            person_name: "Alice".to_string(),
            room_id: "Room-1".to_string(),
            time_in: time_in.to_string(),
            time_out: time_out.to_string(),
            equipment_ids: equipment.to_string(),
        }
    }

    #[test]
    fn test_into_row_valid() {
        let row = raw_row("2024-03-01T08:00:00Z", "2024-03-01T09:00:00Z", "EQ-1, EQ-2")
            .into_row()
            .expect("row should validate");

        assert_eq!(row.person_id, "P001");
        assert_eq!(row.equipment_ids, vec!["EQ-1", "EQ-2"]);
        assert_eq!(row.interval().duration_minutes(), 60.0);
    }

    #[test]
    fn test_into_row_malformed_timestamp() {
        let err = raw_row("not-a-timestamp", "2024-03-01T09:00:00Z", "")
            .into_row()
            .expect_err("malformed timeIn should be rejected");
        assert!(matches!(err, Error::MalformedTimestamp { field: "timeIn", .. }));
    }

    #[test]
    fn test_into_row_inverted_interval() {
        let err = raw_row("2024-03-01T09:00:00Z", "2024-03-01T08:00:00Z", "")
            .into_row()
            .expect_err("timeOut before timeIn should be rejected");
        assert!(matches!(err, Error::InvalidInterval { .. }));
    }

    #[test]
    fn test_into_row_zero_length_interval_allowed() {
        let row = raw_row("2024-03-01T08:00:00Z", "2024-03-01T08:00:00Z", "")
            .into_row()
            .expect("timeOut == timeIn is a valid (instantaneous) visit");
        assert_eq!(row.interval().duration_minutes(), 0.0);
    }

    #[test]
    fn test_split_equipment_ids() {
        assert_eq!(split_equipment_ids(""), Vec::<String>::new());
        assert_eq!(split_equipment_ids("  "), Vec::<String>::new());
        assert_eq!(split_equipment_ids("EQ-1"), vec!["EQ-1"]);
        assert_eq!(
            split_equipment_ids(" EQ-1 ,EQ-2,  ,EQ-3 "),
            vec!["EQ-1", "EQ-2", "EQ-3"]
        );
    }

    #[test]
    fn test_parse_contact_rows_json() {
        let json = r#"[
            {
                "personId": "P001",
                "personName": "Alice",
                "roomId": "Room-1",
                "timeIn": "2024-03-01T08:00:00Z",
                "timeOut": "2024-03-01T09:00:00Z",
                "equipmentIds": "EQ-9"
            },
            {
                "personId": "P002",
                "personName": "Bob",
                "roomId": "Room-1",
                "timeIn": "2024-03-01T08:10:00Z",
                "timeOut": "2024-03-01T08:30:00Z",
                "equipmentIds": ""
            }
        ]"#;

        let rows = parse_contact_rows_json(json).expect("fixture should parse");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].equipment_ids, vec!["EQ-9"]);
        assert!(rows[1].equipment_ids.is_empty());
    }

    #[test]
    fn test_parse_contact_rows_json_reports_row_index() {
        let json = r#"[
            {
                "personId": "P001",
                "personName": "Alice",
                "roomId": "Room-1",
                "timeIn": "2024-03-01T08:00:00Z",
                "timeOut": "2024-03-01T09:00:00Z"
            },
            {
                "personId": "P002",
                "personName": "Bob",
                "roomId": "Room-1",
                "timeIn": "garbage",
                "timeOut": "2024-03-01T08:30:00Z"
            }
        ]"#;

        let err = parse_contact_rows_json(json).expect_err("second row is malformed");
        assert!(format!("{:#}", err).contains("index 1"));
    }

    #[test]
    fn test_parse_contact_rows_json_invalid_json() {
        assert!(parse_contact_rows_json("not valid json {").is_err());
    }
}
