//! Direct and equipment contact discovery.
//!
//! Two contact channels are recognized:
//!
//! - **Direct**: another person present in the same room with a
//!   time-overlapping visit.
//! - **Equipment**: another person used the same equipment item, with the two
//!   `timeIn` instants at most the risk window apart. This is deliberately a
//!   timeIn-to-timeIn distance rather than true occupancy overlap:
//!   contamination risk decays with time since last known MDR-positive use.
//!
//! Both finders emit one event per matching row; repeated matches of the same
//! person across multiple source rows are not deduplicated here (the network
//! builder's visited set handles that).

use std::collections::HashMap;

use crate::models::{ContactEvent, ContactKind, ContactLogRow};

/// Default equipment risk window, in hours.
pub const DEFAULT_EQUIPMENT_WINDOW_HOURS: f64 = 48.0;

/// Row indices bucketed by person id, room id, and equipment id.
///
/// Built once per query so that BFS expansion does not rescan the full row
/// set per level. Buckets preserve input row order, so discovery order is
/// identical to a linear scan.
#[derive(Debug, Default)]
pub struct ContactIndex {
    by_person: HashMap<String, Vec<usize>>,
    by_room: HashMap<String, Vec<usize>>,
    by_equipment: HashMap<String, Vec<usize>>,
}

impl ContactIndex {
    /// Index a row set. The rows themselves stay owned by the caller.
    pub fn build(rows: &[ContactLogRow]) -> Self {
        let mut index = ContactIndex::default();

        for (i, row) in rows.iter().enumerate() {
            index
                .by_person
                .entry(row.person_id.clone())
                .or_default()
                .push(i);
            index
                .by_room
                .entry(row.room_id.clone())
                .or_default()
                .push(i);
            for equipment_id in &row.equipment_ids {
                let bucket = index.by_equipment.entry(equipment_id.clone()).or_default();
                // A row listing the same id twice still indexes once
                if bucket.last() != Some(&i) {
                    bucket.push(i);
                }
            }
        }

        index
    }

    fn person_rows(&self, person_id: &str) -> &[usize] {
        self.by_person.get(person_id).map_or(&[], Vec::as_slice)
    }

    fn room_rows(&self, room_id: &str) -> &[usize] {
        self.by_room.get(room_id).map_or(&[], Vec::as_slice)
    }

    fn equipment_rows(&self, equipment_id: &str) -> &[usize] {
        self.by_equipment.get(equipment_id).map_or(&[], Vec::as_slice)
    }
}

/// Find all direct contacts of a person.
///
/// For every row of `source_person_id`, every other-person row in the same
/// room with a strictly overlapping interval yields one event carrying the
/// matched row's identity, the shared room, the matched `timeIn` as
/// timestamp, and the matched row's own visit length in minutes.
///
/// A person with no logged rows yields an empty result, not an error.
pub fn find_direct_contacts(rows: &[ContactLogRow], source_person_id: &str) -> Vec<ContactEvent> {
    let index = ContactIndex::build(rows);
    direct_contacts(rows, &index, source_person_id)
}

/// Find all equipment contacts of a person within the risk window.
///
/// For each source row with equipment, every other-person row sharing an
/// equipment id is included iff the timeIn-to-timeIn distance is at most
/// `window_hours`. The inclusion test uses the exact fractional distance;
/// only the value stored on the event is rounded to the nearest hour.
pub fn find_equipment_contacts(
    rows: &[ContactLogRow],
    source_person_id: &str,
    window_hours: f64,
) -> Vec<ContactEvent> {
    let index = ContactIndex::build(rows);
    equipment_contacts(rows, &index, source_person_id, window_hours)
}

pub(crate) fn direct_contacts(
    rows: &[ContactLogRow],
    index: &ContactIndex,
    source_person_id: &str,
) -> Vec<ContactEvent> {
    let mut events = Vec::new();

    for &source_idx in index.person_rows(source_person_id) {
        let source = &rows[source_idx];
        let source_interval = source.interval();

        for &candidate_idx in index.room_rows(&source.room_id) {
            let row = &rows[candidate_idx];
            if row.person_id == source_person_id {
                continue;
            }
            if !source_interval.overlaps(&row.interval()) {
                continue;
            }

            events.push(ContactEvent {
                person_id: row.person_id.clone(),
                person_name: row.person_name.clone(),
                timestamp: row.time_in,
                kind: ContactKind::Direct {
                    location: source.room_id.clone(),
                    duration_minutes: row.interval().duration_minutes(),
                },
            });
        }
    }

    events
}

pub(crate) fn equipment_contacts(
    rows: &[ContactLogRow],
    index: &ContactIndex,
    source_person_id: &str,
    window_hours: f64,
) -> Vec<ContactEvent> {
    let mut events = Vec::new();

    for &source_idx in index.person_rows(source_person_id) {
        let source = &rows[source_idx];

        for equipment_id in &source.equipment_ids {
            for &candidate_idx in index.equipment_rows(equipment_id) {
                let row = &rows[candidate_idx];
                if row.person_id == source_person_id {
                    continue;
                }

                let diff_hours = source.interval().start_distance_hours(&row.interval());
                if diff_hours > window_hours {
                    continue;
                }

                events.push(ContactEvent {
                    person_id: row.person_id.clone(),
                    person_name: row.person_name.clone(),
                    timestamp: row.time_in,
                    kind: ContactKind::Equipment {
                        equipment_id: equipment_id.clone(),
                        time_diff_hours: diff_hours.round() as i64,
                    },
                });
            }
        }
    }

    events
}
