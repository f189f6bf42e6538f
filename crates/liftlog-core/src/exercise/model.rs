//! Exercise domain model.

use crate::error::{LiftlogError, Result};
use crate::ids::ExerciseId;
use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The closed muscle-group vocabulary.
///
/// Wire and display names are the capitalized names below ("Full Body" keeps
/// its space). Parsing from user input is case-insensitive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Biceps,
    Triceps,
    Core,
    Forearms,
    Cardio,
    #[serde(rename = "Full Body")]
    #[strum(serialize = "Full Body", serialize = "fullbody", serialize = "full-body")]
    FullBody,
}

impl MuscleGroup {
    /// Parses user input, rejecting anything outside the vocabulary.
    pub fn parse(input: &str) -> Result<Self> {
        input.trim().parse::<Self>().map_err(|_| {
            LiftlogError::validation(format!("Unknown muscle group '{}'", input.trim()))
        })
    }
}

/// A catalog exercise. Sessions reference exercises but never own them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseId,
    pub name: String,
    /// `None` when the server's group is missing or outside the vocabulary
    #[serde(default, deserialize_with = "deserialize_muscle_group")]
    pub muscle_group: Option<MuscleGroup>,
}

/// Body of a create-exercise request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewExercise {
    pub name: String,
    pub muscle_group: MuscleGroup,
}

impl NewExercise {
    /// Validates the name (trimmed, non-empty).
    pub fn new(name: &str, muscle_group: MuscleGroup) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LiftlogError::validation("Exercise name must not be empty"));
        }
        Ok(Self {
            name: name.to_string(),
            muscle_group,
        })
    }
}

/// Reads a stored group leniently: any casing is accepted and unknown names
/// decode as `None` instead of failing the whole record.
pub(crate) fn deserialize_muscle_group<'de, D>(deserializer: D) -> std::result::Result<Option<MuscleGroup>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(|s| s.trim().parse::<MuscleGroup>().ok()))
}
