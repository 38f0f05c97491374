//! Exposure risk scoring and classification.
//!
//! Scoring is additive and uncapped: every contact event contributes a base
//! number of points, with bonuses for long direct exposures and for recent
//! equipment reuse. The red/yellow/green thresholds are fixed policy
//! constants; making them tunable is a product decision the current design
//! deliberately defers.

use serde::{Deserialize, Serialize};

use crate::models::{ContactEvent, ContactKind, ContactLogRow};
use crate::services::contact_finder::{find_direct_contacts, find_equipment_contacts};

/// Points per direct contact
pub const DIRECT_CONTACT_POINTS: u32 = 10;
/// Bonus when a direct contact's visit exceeds this many minutes
pub const LONG_EXPOSURE_MINUTES: f64 = 15.0;
pub const LONG_EXPOSURE_BONUS: u32 = 5;
/// Points per equipment contact
pub const EQUIPMENT_CONTACT_POINTS: u32 = 5;
/// Bonus when equipment reuse happened within this many hours
pub const RECENT_REUSE_HOURS: i64 = 24;
pub const RECENT_REUSE_BONUS: u32 = 3;

const RED_THRESHOLD: u32 = 15;
const YELLOW_THRESHOLD: u32 = 5;

/// Categorical exposure severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Red,
    Yellow,
    Green,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Red => write!(f, "red"),
            RiskLevel::Yellow => write!(f, "yellow"),
            RiskLevel::Green => write!(f, "green"),
        }
    }
}

/// Compute the additive risk score for a list of contact events.
///
/// - Direct contact: 10 points, +5 if the visit lasted over 15 minutes
/// - Equipment contact: 5 points, +3 if the reuse gap is under 24 hours
///
/// Pure and deterministic; appending events never decreases the score.
pub fn calculate_risk_score(contacts: &[ContactEvent]) -> u32 {
    contacts
        .iter()
        .map(|event| match &event.kind {
            ContactKind::Direct {
                duration_minutes, ..
            } => {
                if *duration_minutes > LONG_EXPOSURE_MINUTES {
                    DIRECT_CONTACT_POINTS + LONG_EXPOSURE_BONUS
                } else {
                    DIRECT_CONTACT_POINTS
                }
            }
            ContactKind::Equipment {
                time_diff_hours, ..
            } => {
                if *time_diff_hours < RECENT_REUSE_HOURS {
                    EQUIPMENT_CONTACT_POINTS + RECENT_REUSE_BONUS
                } else {
                    EQUIPMENT_CONTACT_POINTS
                }
            }
        })
        .sum()
}

/// Map a risk score to its categorical level.
///
/// Score >= 15 is red, 5..15 is yellow, below 5 is green.
pub fn risk_level(score: u32) -> RiskLevel {
    if score >= RED_THRESHOLD {
        RiskLevel::Red
    } else if score >= YELLOW_THRESHOLD {
        RiskLevel::Yellow
    } else {
        RiskLevel::Green
    }
}

/// Labeled exposure severity for one person.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub person_id: String,
    pub score: u32,
    pub level: RiskLevel,
    /// Number of direct contact events found
    pub direct_contacts: usize,
    /// Number of equipment contact events found
    pub equipment_contacts: usize,
}

/// Run both contact finders for a person and label the exposure severity.
///
/// # Arguments
///
/// * `rows` - The full contact-log row set
/// * `person_id` - The person to assess
/// * `equipment_window_hours` - Equipment risk window (see
///   [`crate::services::contact_finder::find_equipment_contacts`])
pub fn assess_risk(
    rows: &[ContactLogRow],
    person_id: &str,
    equipment_window_hours: f64,
) -> RiskAssessment {
    let mut contacts = find_direct_contacts(rows, person_id);
    let direct_contacts = contacts.len();

    contacts.extend(find_equipment_contacts(
        rows,
        person_id,
        equipment_window_hours,
    ));
    let equipment_contacts = contacts.len() - direct_contacts;

    let score = calculate_risk_score(&contacts);
    RiskAssessment {
        person_id: person_id.to_string(),
        score,
        level: risk_level(score),
        direct_contacts,
        equipment_contacts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn now() -> DateTime<Utc> {
        "2024-03-01T08:00:00Z".parse().unwrap()
    }

    fn direct_event(duration_minutes: f64) -> ContactEvent {
        ContactEvent {
            person_id: "P002".to_string(),
            person_name: "Bob".to_string(),
            timestamp: now(),
            kind: ContactKind::Direct {
                location: "Room-1".to_string(),
                duration_minutes,
            },
        }
    }

    fn equipment_event(time_diff_hours: i64) -> ContactEvent {
        ContactEvent {
            person_id: "P003".to_string(),
            person_name: "Carol".to_string(),
            timestamp: now(),
            kind: ContactKind::Equipment {
                equipment_id: "EQ-9".to_string(),
                time_diff_hours,
            },
        }
    }

    #[test]
    fn test_empty_contact_list_scores_zero() {
        assert_eq!(calculate_risk_score(&[]), 0);
    }

    #[test]
    fn test_direct_contact_scoring() {
        // 15 minutes is not "over 15 minutes": no bonus
        assert_eq!(calculate_risk_score(&[direct_event(15.0)]), 10);
        assert_eq!(calculate_risk_score(&[direct_event(16.0)]), 15);
        assert_eq!(calculate_risk_score(&[direct_event(5.0)]), 10);
    }

    #[test]
    fn test_equipment_contact_scoring() {
        assert_eq!(calculate_risk_score(&[equipment_event(10)]), 8);
        assert_eq!(calculate_risk_score(&[equipment_event(23)]), 8);
        // Exactly 24 hours is not "below 24": no bonus
        assert_eq!(calculate_risk_score(&[equipment_event(24)]), 5);
        assert_eq!(calculate_risk_score(&[equipment_event(40)]), 5);
    }

    #[test]
    fn test_scores_are_additive_and_uncapped() {
        let contacts = vec![
            direct_event(30.0),
            direct_event(10.0),
            equipment_event(2),
            equipment_event(48),
        ];
        assert_eq!(calculate_risk_score(&contacts), 15 + 10 + 8 + 5);
    }

    #[test]
    fn test_score_monotonic_under_appended_events() {
        let mut contacts: Vec<ContactEvent> = Vec::new();
        let additions = vec![
            direct_event(5.0),
            equipment_event(40),
            direct_event(30.0),
            equipment_event(1),
        ];

        let mut previous = calculate_risk_score(&contacts);
        for event in additions {
            contacts.push(event);
            let score = calculate_risk_score(&contacts);
            assert!(score >= previous, "score decreased after appending");
            previous = score;
        }
    }

    #[test]
    fn test_risk_level_boundaries() {
        assert_eq!(risk_level(0), RiskLevel::Green);
        assert_eq!(risk_level(4), RiskLevel::Green);
        assert_eq!(risk_level(5), RiskLevel::Yellow);
        assert_eq!(risk_level(14), RiskLevel::Yellow);
        assert_eq!(risk_level(15), RiskLevel::Red);
        assert_eq!(risk_level(100), RiskLevel::Red);
    }

    #[test]
    fn test_single_long_direct_contact_is_red() {
        // One direct contact lasting 20 minutes: 10 + 5 = 15 -> red
        let score = calculate_risk_score(&[direct_event(20.0)]);
        assert_eq!(score, 15);
        assert_eq!(risk_level(score), RiskLevel::Red);
    }

    #[test]
    fn test_risk_level_serialization() {
        assert_eq!(serde_json::to_string(&RiskLevel::Red).unwrap(), "\"red\"");
        assert_eq!(RiskLevel::Yellow.to_string(), "yellow");
    }
}
