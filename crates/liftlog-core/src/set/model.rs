//! Set domain model.

use super::effort::EffortRating;
use crate::ids::{ExerciseId, SetId, WorkoutId};
use serde::{Deserialize, Deserializer, Serialize};

/// A logged set as the remote store returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    /// Server-assigned id
    pub id: SetId,
    pub workout_id: WorkoutId,
    pub exercise_id: ExerciseId,
    /// 1-based position within (workout, exercise)
    pub set_number: u32,
    /// `null` when the set was logged without reps; read as 0
    #[serde(default, deserialize_with = "deserialize_reps")]
    pub reps: u32,
    /// Decimal columns arrive as strings, so both forms are accepted.
    /// `null` reads as 0.
    #[serde(default, deserialize_with = "deserialize_weight")]
    pub weight: f64,
    #[serde(rename = "rpe")]
    pub effort: EffortRating,
}

impl SetRecord {
    /// reps × weight
    pub fn volume(&self) -> f64 {
        f64::from(self.reps) * self.weight
    }
}

/// Sum of reps × weight over `sets`.
pub fn aggregate_volume<'a>(sets: impl IntoIterator<Item = &'a SetRecord>) -> f64 {
    sets.into_iter().map(SetRecord::volume).sum()
}

/// User-entered values for a set, normalized at the input boundary.
///
/// Empty reps or weight stay `None` and are sent as `null`; the remote store
/// decides whether to accept them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SetDraft {
    pub reps: Option<u32>,
    pub weight: Option<f64>,
    pub effort: EffortRating,
}

impl SetDraft {
    /// Normalizes raw input: negative numbers become 0, a non-finite weight is
    /// treated as empty, effort is clamped to 1..=10.
    pub fn from_input(reps: Option<i64>, weight: Option<f64>, effort: i64) -> Self {
        Self {
            reps: reps.map(|r| r.clamp(0, i64::from(u32::MAX)) as u32),
            weight: weight.filter(|w| w.is_finite()).map(|w| w.max(0.0)),
            effort: EffortRating::clamped(effort),
        }
    }

    /// Draft carrying the values of an existing set.
    pub fn from_record(record: &SetRecord) -> Self {
        Self {
            reps: Some(record.reps),
            weight: Some(record.weight),
            effort: record.effort,
        }
    }

    /// Replaces only the given fields, normalized like [`SetDraft::from_input`].
    pub fn with_overrides(self, reps: Option<i64>, weight: Option<f64>, effort: Option<i64>) -> Self {
        let given = Self::from_input(reps, weight, effort.unwrap_or(1));
        Self {
            reps: if reps.is_some() { given.reps } else { self.reps },
            weight: if weight.is_some() { given.weight } else { self.weight },
            effort: if effort.is_some() { given.effort } else { self.effort },
        }
    }
}

/// Body of a create-set request. The workout id travels in the path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSet {
    #[serde(skip)]
    pub workout_id: WorkoutId,
    pub exercise_id: ExerciseId,
    pub set_number: u32,
    pub reps: Option<u32>,
    pub weight: Option<f64>,
    #[serde(rename = "rpe")]
    pub effort: EffortRating,
}

impl NewSet {
    pub fn new(workout_id: WorkoutId, exercise_id: ExerciseId, set_number: u32, draft: &SetDraft) -> Self {
        Self {
            workout_id,
            exercise_id,
            set_number,
            reps: draft.reps,
            weight: draft.weight,
            effort: draft.effort,
        }
    }
}

/// Body of an update-set request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetUpdate {
    pub exercise_id: ExerciseId,
    pub set_number: u32,
    pub reps: Option<u32>,
    pub weight: Option<f64>,
    #[serde(rename = "rpe")]
    pub effort: EffortRating,
}

impl SetUpdate {
    /// Keeps `existing`'s exercise and number, takes the values from `draft`.
    pub fn new(existing: &SetRecord, draft: &SetDraft) -> Self {
        Self {
            exercise_id: existing.exercise_id.clone(),
            set_number: existing.set_number,
            reps: draft.reps,
            weight: draft.weight,
            effort: draft.effort,
        }
    }
}

pub(crate) fn deserialize_weight<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(NumberOrString::Number(n)) => Ok(n),
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(0.0),
        Some(NumberOrString::Text(s)) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

pub(crate) fn deserialize_reps<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}
