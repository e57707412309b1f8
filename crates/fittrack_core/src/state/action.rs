//! Action sum type and its JSON envelope.
//!
//! Actions travel as `{"type": "UPDATE_EXERCISE", "payload": {...}}`.

use crate::model::app_data::AppData;
use crate::model::exercise::{Exercise, ExercisePatch};
use crate::model::id::EntityId;
use crate::model::metrics::{BodyWeightEntry, BodyWeightPatch, StepEntry, StepPatch};
use crate::model::plan::{WorkoutDay, WorkoutDayPatch};
use crate::model::settings::SettingsPatch;
use crate::model::workout::{Workout, WorkoutPatch};
use serde::Deserialize;

/// Every state change the reducer understands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Replaces the whole document. Only used at load time.
    SetData(AppData),
    AddExercise(Exercise),
    UpdateExercise {
        id: EntityId,
        exercise: ExercisePatch,
    },
    DeleteExercise(EntityId),
    AddWorkout(Workout),
    UpdateWorkout {
        id: EntityId,
        workout: WorkoutPatch,
    },
    AddBodyWeight(BodyWeightEntry),
    UpdateBodyWeight {
        id: EntityId,
        weight: BodyWeightPatch,
    },
    AddSteps(StepEntry),
    UpdateSteps {
        id: EntityId,
        steps: StepPatch,
    },
    AddWorkoutDay(WorkoutDay),
    UpdateWorkoutDay {
        id: EntityId,
        day: WorkoutDayPatch,
    },
    DeleteWorkoutDay(EntityId),
    UpdateSettings(SettingsPatch),
    /// Action kind this build does not know. Carries the raw tag.
    #[serde(skip_deserializing)]
    Unknown(String),
}

const ACTION_KINDS: &[&str] = &[
    "SET_DATA",
    "ADD_EXERCISE",
    "UPDATE_EXERCISE",
    "DELETE_EXERCISE",
    "ADD_WORKOUT",
    "UPDATE_WORKOUT",
    "ADD_BODY_WEIGHT",
    "UPDATE_BODY_WEIGHT",
    "ADD_STEPS",
    "UPDATE_STEPS",
    "ADD_WORKOUT_DAY",
    "UPDATE_WORKOUT_DAY",
    "DELETE_WORKOUT_DAY",
    "UPDATE_SETTINGS",
];

#[derive(Deserialize)]
struct ActionTag {
    #[serde(rename = "type")]
    kind: String,
}

impl Action {
    /// Stable tag name, also used as the `action=` log field.
    pub fn kind(&self) -> &str {
        match self {
            Self::SetData(_) => "SET_DATA",
            Self::AddExercise(_) => "ADD_EXERCISE",
            Self::UpdateExercise { .. } => "UPDATE_EXERCISE",
            Self::DeleteExercise(_) => "DELETE_EXERCISE",
            Self::AddWorkout(_) => "ADD_WORKOUT",
            Self::UpdateWorkout { .. } => "UPDATE_WORKOUT",
            Self::AddBodyWeight(_) => "ADD_BODY_WEIGHT",
            Self::UpdateBodyWeight { .. } => "UPDATE_BODY_WEIGHT",
            Self::AddSteps(_) => "ADD_STEPS",
            Self::UpdateSteps { .. } => "UPDATE_STEPS",
            Self::AddWorkoutDay(_) => "ADD_WORKOUT_DAY",
            Self::UpdateWorkoutDay { .. } => "UPDATE_WORKOUT_DAY",
            Self::DeleteWorkoutDay(_) => "DELETE_WORKOUT_DAY",
            Self::UpdateSettings(_) => "UPDATE_SETTINGS",
            Self::Unknown(kind) => kind.as_str(),
        }
    }

    /// Decodes one action envelope.
    ///
    /// An unrecognized `type` yields `Action::Unknown` instead of an error.
    ///
    /// # Errors
    /// - Returns an error when the text is not an object with a string
    ///   `type`, or when a known action carries a malformed payload.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let tag: ActionTag = serde_json::from_str(raw)?;
        if !ACTION_KINDS.contains(&tag.kind.as_str()) {
            return Ok(Self::Unknown(tag.kind));
        }
        serde_json::from_str(raw)
    }
}
