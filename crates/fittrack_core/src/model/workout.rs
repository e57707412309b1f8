//! Dated workout instances built from templates.
//!
//! # Responsibility
//! - Hold the per-day log of planned exercises and their completion.
//! - Derive completion percentage and status labels.
//!
//! # Invariants
//! - `completed` is true iff the workout has exercises and all are completed.
//! - `exercise` on each entry is a snapshot taken at creation time.
//! - `day_name` and `muscle_groups` are computed once and never re-synced.

use super::exercise::Exercise;
use super::id::EntityId;
use super::plan::WorkoutDay;
use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub exercise_id: EntityId,
    /// Denormalized copy of the catalog entry at creation time.
    pub exercise: Exercise,
    pub sets: u32,
    pub reps: u32,
    pub completed: bool,
    /// Logged lift weight, when the user recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: EntityId,
    pub date: NaiveDate,
    pub day_name: String,
    pub exercises: Vec<WorkoutExercise>,
    pub completed: bool,
    pub muscle_groups: Vec<String>,
}

/// Completion summary used by log views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStatus {
    NoExercises,
    NotStarted,
    InProgress { done: usize, total: usize },
    Completed,
}

impl Workout {
    /// Returns true iff there is at least one exercise and all are completed.
    pub fn is_fully_completed(&self) -> bool {
        all_completed(&self.exercises)
    }

    /// Completed share of exercises as 0-100; 0 for an empty workout.
    pub fn progress_percent(&self) -> f64 {
        if self.exercises.is_empty() {
            return 0.0;
        }
        let done = self.completed_count();
        done as f64 / self.exercises.len() as f64 * 100.0
    }

    pub fn completed_count(&self) -> usize {
        self.exercises.iter().filter(|entry| entry.completed).count()
    }

    pub fn completion_status(&self) -> CompletionStatus {
        let total = self.exercises.len();
        let done = self.completed_count();
        match (done, total) {
            (_, 0) => CompletionStatus::NoExercises,
            (0, _) => CompletionStatus::NotStarted,
            (done, total) if done == total => CompletionStatus::Completed,
            (done, total) => CompletionStatus::InProgress { done, total },
        }
    }

    /// Flips `completed` on every entry for `exercise_id` and re-derives the
    /// workout flag. Returns false when no entry matched.
    pub fn toggle_exercise(&mut self, exercise_id: &str) -> bool {
        let mut matched = false;
        for entry in self
            .exercises
            .iter_mut()
            .filter(|entry| entry.exercise_id == exercise_id)
        {
            entry.completed = !entry.completed;
            matched = true;
        }
        self.completed = self.is_fully_completed();
        matched
    }

    pub fn apply_patch(&mut self, patch: WorkoutPatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(day_name) = patch.day_name {
            self.day_name = day_name;
        }
        if let Some(exercises) = patch.exercises {
            self.exercises = exercises;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(muscle_groups) = patch.muscle_groups {
            self.muscle_groups = muscle_groups;
        }
    }
}

/// Creation input for a dated workout. `completed` is always derived from
/// `exercises`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkout {
    pub date: NaiveDate,
    pub day_name: String,
    pub exercises: Vec<WorkoutExercise>,
    pub muscle_groups: Vec<String>,
}

impl NewWorkout {
    /// Builds a workout for `date` from a template and the live catalog.
    ///
    /// Plan entries whose exercise is missing from `catalog` are skipped.
    pub fn from_plan(date: NaiveDate, plan: &WorkoutDay, catalog: &[Exercise]) -> Self {
        let exercises = plan
            .exercises
            .iter()
            .filter_map(|entry| {
                let Some(exercise) = catalog.iter().find(|item| item.id == entry.exercise_id)
                else {
                    warn!(
                        "event=workout_from_plan module=model status=skip reason=dangling_exercise plan_id={} exercise_id={}",
                        plan.id, entry.exercise_id
                    );
                    return None;
                };
                Some(WorkoutExercise {
                    exercise_id: entry.exercise_id.clone(),
                    exercise: exercise.clone(),
                    sets: entry.sets,
                    reps: entry.reps,
                    completed: false,
                    weight: None,
                })
            })
            .collect::<Vec<_>>();

        Self {
            date,
            day_name: plan.name.clone(),
            muscle_groups: muscle_groups_of(&exercises),
            exercises,
        }
    }

    pub fn into_workout(self, id: EntityId) -> Workout {
        Workout {
            id,
            date: self.date,
            day_name: self.day_name,
            completed: all_completed(&self.exercises),
            exercises: self.exercises,
            muscle_groups: self.muscle_groups,
        }
    }
}

/// Partial update for a workout. `exercises` replaces the whole list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkoutPatch {
    pub date: Option<NaiveDate>,
    pub day_name: Option<String>,
    pub exercises: Option<Vec<WorkoutExercise>>,
    pub completed: Option<bool>,
    pub muscle_groups: Option<Vec<String>>,
}

/// Returns true iff `exercises` is non-empty and every entry is completed.
pub fn all_completed(exercises: &[WorkoutExercise]) -> bool {
    !exercises.is_empty() && exercises.iter().all(|entry| entry.completed)
}

/// Deduplicated, non-empty muscle groups in first-seen order.
pub fn muscle_groups_of(exercises: &[WorkoutExercise]) -> Vec<String> {
    let mut groups: Vec<String> = Vec::new();
    for group in exercises
        .iter()
        .filter_map(|entry| entry.exercise.muscle_group.as_deref())
        .filter(|group| !group.is_empty())
    {
        if !groups.iter().any(|existing| existing == group) {
            groups.push(group.to_string());
        }
    }
    groups
}
