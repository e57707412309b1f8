//! Aggregate root holding the whole persisted document.

use super::exercise::Exercise;
use super::metrics::{BodyWeightEntry, StepEntry, WeightUnit};
use super::plan::{DayOfWeek, PlanEntry, WorkoutDay};
use super::settings::{Theme, UserSettings, DEFAULT_STEP_TARGET};
use super::validation::{ensure_id, ensure_positive, ensure_weight, ModelValidationError};
use super::workout::Workout;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Every collection plus settings. Replaced wholesale on load and written
/// wholesale on every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    pub exercises: Vec<Exercise>,
    pub workouts: Vec<Workout>,
    pub body_weights: Vec<BodyWeightEntry>,
    pub steps: Vec<StepEntry>,
    pub workout_days: Vec<WorkoutDay>,
    pub settings: UserSettings,
}

impl AppData {
    /// Empty collections with default settings.
    pub fn empty() -> Self {
        Self {
            exercises: Vec::new(),
            workouts: Vec::new(),
            body_weights: Vec::new(),
            steps: Vec::new(),
            workout_days: Vec::new(),
            settings: UserSettings::default(),
        }
    }

    /// Sample document used on first launch or when storage is unusable.
    pub fn seeded(today: NaiveDate) -> Self {
        let exercises = vec![
            seed_exercise("1", "Push-ups", 3, 15, "Chest"),
            seed_exercise("2", "Pull-ups", 3, 8, "Back"),
            seed_exercise("3", "Squats", 4, 12, "Legs"),
            seed_exercise("4", "Bench Press", 4, 10, "Chest"),
            seed_exercise("5", "Deadlift", 3, 8, "Back"),
        ];
        let workout_days = vec![
            seed_day(
                "1",
                "Push Day",
                &[("1", 3, 15), ("4", 4, 10)],
                &[DayOfWeek::Monday, DayOfWeek::Thursday],
            ),
            seed_day(
                "2",
                "Pull Day",
                &[("2", 3, 8), ("5", 3, 8)],
                &[DayOfWeek::Tuesday, DayOfWeek::Friday],
            ),
            seed_day(
                "3",
                "Leg Day",
                &[("3", 4, 12)],
                &[DayOfWeek::Wednesday, DayOfWeek::Saturday],
            ),
        ];

        Self {
            exercises,
            workouts: Vec::new(),
            body_weights: vec![BodyWeightEntry {
                id: "1".to_string(),
                date: today,
                weight: 192.0,
                unit: WeightUnit::Lbs,
            }],
            steps: vec![StepEntry {
                id: "1".to_string(),
                date: today,
                steps: 3200,
                target: DEFAULT_STEP_TARGET,
            }],
            workout_days,
            settings: UserSettings {
                weight_unit: WeightUnit::Lbs,
                theme: Theme::Dark,
                step_target: DEFAULT_STEP_TARGET,
                username: Some("Fitness Enthusiast".to_string()),
            },
        }
    }

    /// Checks value-level invariants across all collections.
    ///
    /// # Errors
    /// - Returns the first violation found, in collection order.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        for exercise in &self.exercises {
            ensure_id("exercises", &exercise.id)?;
            ensure_positive("exercises", &exercise.id, "defaultSets", exercise.default_sets)?;
            ensure_positive("exercises", &exercise.id, "defaultReps", exercise.default_reps)?;
        }
        for workout in &self.workouts {
            ensure_id("workouts", &workout.id)?;
            for entry in &workout.exercises {
                ensure_positive("workouts", &workout.id, "sets", entry.sets)?;
                ensure_positive("workouts", &workout.id, "reps", entry.reps)?;
                if let Some(weight) = entry.weight {
                    ensure_weight("workouts", &workout.id, weight)?;
                }
            }
        }
        for entry in &self.body_weights {
            ensure_id("bodyWeights", &entry.id)?;
            ensure_weight("bodyWeights", &entry.id, entry.weight)?;
        }
        for entry in &self.steps {
            ensure_id("steps", &entry.id)?;
            ensure_positive("steps", &entry.id, "target", entry.target)?;
        }
        for day in &self.workout_days {
            ensure_id("workoutDays", &day.id)?;
            for entry in &day.exercises {
                ensure_positive("workoutDays", &day.id, "sets", entry.sets)?;
                ensure_positive("workoutDays", &day.id, "reps", entry.reps)?;
            }
        }
        if self.settings.step_target == 0 {
            return Err(ModelValidationError::NonPositiveStepTarget);
        }
        Ok(())
    }
}

fn seed_exercise(id: &str, name: &str, sets: u32, reps: u32, muscle_group: &str) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        default_sets: sets,
        default_reps: reps,
        muscle_group: Some(muscle_group.to_string()),
    }
}

fn seed_day(
    id: &str,
    name: &str,
    entries: &[(&str, u32, u32)],
    days: &[DayOfWeek],
) -> WorkoutDay {
    WorkoutDay {
        id: id.to_string(),
        name: name.to_string(),
        exercises: entries
            .iter()
            .map(|(exercise_id, sets, reps)| PlanEntry {
                exercise_id: (*exercise_id).to_string(),
                sets: *sets,
                reps: *reps,
            })
            .collect(),
        assigned_days: days.to_vec(),
    }
}
