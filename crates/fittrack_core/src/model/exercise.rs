//! Exercise catalog entries.

use super::id::EntityId;
use serde::{Deserialize, Serialize};

/// One catalog exercise with its default prescription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: EntityId,
    pub name: String,
    /// Must be positive.
    pub default_sets: u32,
    /// Must be positive.
    pub default_reps: u32,
    /// Free-text label such as `Chest` or `Legs`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_group: Option<String>,
}

/// Creation input for a catalog exercise (id is assigned by the store).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    pub name: String,
    pub default_sets: u32,
    pub default_reps: u32,
    pub muscle_group: Option<String>,
}

impl NewExercise {
    pub fn into_exercise(self, id: EntityId) -> Exercise {
        Exercise {
            id,
            name: self.name,
            default_sets: self.default_sets,
            default_reps: self.default_reps,
            muscle_group: self.muscle_group,
        }
    }
}

/// Partial update for an exercise. `Some` fields override.
///
/// `muscle_group: Some(None)` clears the label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExercisePatch {
    pub name: Option<String>,
    pub default_sets: Option<u32>,
    pub default_reps: Option<u32>,
    #[serde(deserialize_with = "super::deserialize_some")]
    pub muscle_group: Option<Option<String>>,
}

impl Exercise {
    /// Applies a shallow field merge in place.
    pub fn apply_patch(&mut self, patch: ExercisePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(sets) = patch.default_sets {
            self.default_sets = sets;
        }
        if let Some(reps) = patch.default_reps {
            self.default_reps = reps;
        }
        if let Some(muscle_group) = patch.muscle_group {
            self.muscle_group = muscle_group;
        }
    }
}
