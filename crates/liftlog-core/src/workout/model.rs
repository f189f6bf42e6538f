//! Workout domain model.

use crate::ids::WorkoutId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The remote record behind a workout session.
///
/// The start timestamp is the creation date. `completed_at` stays `None`
/// while the workout is in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: WorkoutId,
    /// Creation date, also used as the start timestamp
    pub date: DateTime<Utc>,
    /// Free-text name of the workout
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Workout {
    pub fn started_at(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// The name to display, empty when the workout is unnamed.
    pub fn name(&self) -> &str {
        self.notes.as_deref().unwrap_or("")
    }
}

/// Body of an update-workout request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutUpdate {
    pub notes: Option<String>,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl WorkoutUpdate {
    /// Builds an update that keeps `workout`'s date and completion state.
    pub fn from_workout(workout: &Workout) -> Self {
        Self {
            notes: workout.notes.clone(),
            date: workout.date,
            completed_at: workout.completed_at,
        }
    }

    /// Replaces the name. Blank names are sent as `null`.
    pub fn with_name(mut self, name: &str) -> Self {
        let trimmed = name.trim();
        self.notes = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn completed_at(mut self, at: DateTime<Utc>) -> Self {
        self.completed_at = Some(at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_server_record() {
        let json = r#"{"id": 7, "date": "2025-03-04T18:00:00.000Z", "notes": null, "completed_at": null}"#;
        let workout: Workout = serde_json::from_str(json).unwrap();
        assert_eq!(workout.id, WorkoutId::from(7));
        assert!(!workout.is_completed());
        assert_eq!(workout.name(), "");
    }

    #[test]
    fn test_update_blank_name_is_null() {
        let workout: Workout =
            serde_json::from_str(r#"{"id": 1, "date": "2025-03-04T18:00:00Z", "notes": "Push"}"#).unwrap();
        let update = WorkoutUpdate::from_workout(&workout).with_name("   ");
        assert_eq!(update.notes, None);

        let body = serde_json::to_value(&update).unwrap();
        assert!(body.get("completed_at").is_none());
        assert!(body["notes"].is_null());
    }
}
