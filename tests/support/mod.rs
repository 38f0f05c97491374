use chrono::{DateTime, Duration, Utc};
use mdr_trace::ContactLogRow;

/// Common reference instant for fixtures: 2024-03-01 08:00 UTC.
pub fn t0() -> DateTime<Utc> {
    "2024-03-01T08:00:00Z".parse().expect("valid fixture time")
}

/// Build a contact-log row offset from [`t0`] by whole minutes.
pub fn visit(
    person_id: &str,
    room_id: &str,
    offset_min: i64,
    length_min: i64,
    equipment: &[&str],
) -> ContactLogRow {
    ContactLogRow {
        person_id: person_id.to_string(),
        person_name: format!("Person {}", person_id),
        room_id: room_id.to_string(),
        time_in: t0() + Duration::minutes(offset_min),
        time_out: t0() + Duration::minutes(offset_min + length_min),
        equipment_ids: equipment.iter().map(|s| s.to_string()).collect(),
    }
}

/// A small ward outbreak fixture:
///
/// - P001 (index) shares Room-1 with P002 for 20 minutes and uses EQ-9
/// - P003 uses EQ-9 ten hours later on another ward
/// - P004 shares Room-2 with P002 the next morning
/// - P005 is present in Room-1 only after P001 has left (no overlap)
pub fn ward_rows() -> Vec<ContactLogRow> {
    vec![
        visit("P001", "Room-1", 0, 60, &["EQ-9"]),
        visit("P002", "Room-1", 10, 20, &[]),
        visit("P003", "Room-7", 600, 30, &["EQ-9"]),
        visit("P002", "Room-2", 1440, 60, &[]),
        visit("P004", "Room-2", 1450, 30, &[]),
        visit("P005", "Room-1", 70, 30, &[]),
    ]
}
