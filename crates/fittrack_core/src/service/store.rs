//! Fitness store: the mutator surface screens call into.
//!
//! # Responsibility
//! - Hold the current `AppData` and apply actions through `reduce`.
//! - Seed state from storage at open and write a full snapshot after every
//!   change.
//! - Enforce one body weight and one step entry per date (upsert by date).
//!
//! # Invariants
//! - Single writer: the store is owned, never shared behind a global.
//! - Storage failures are logged and swallowed; state stays consistent.
//! - State that fails validation is never adopted or written.
//! - Malformed user input is dropped or defaulted, never an error.

use crate::input::{parse_count_or, parse_positive_count, parse_steps, parse_weight};
use crate::model::app_data::AppData;
use crate::model::exercise::{Exercise, ExercisePatch, NewExercise};
use crate::model::id::{generate_id, EntityId};
use crate::model::metrics::{
    BodyWeightEntry, BodyWeightPatch, NewBodyWeight, NewSteps, StepEntry, StepPatch,
};
use crate::model::plan::{DayOfWeek, NewWorkoutDay, PlanEntry, WorkoutDay, WorkoutDayPatch};
use crate::model::settings::SettingsPatch;
use crate::model::workout::{all_completed, NewWorkout, Workout, WorkoutPatch};
use crate::repo::blob_repo::BlobStore;
use crate::repo::document::{load_document, save_document, StoredDocument};
use crate::state::action::Action;
use crate::state::query::{self, TrendWindow, WeightTrend};
use crate::state::reducer::reduce;
use chrono::NaiveDate;
use log::{debug, error, info, warn};

/// Fixed key the document is stored under.
pub const STORAGE_KEY: &str = "fitnessAppData";

/// Explicit, injected app state container backed by a blob store.
pub struct FitnessStore<S: BlobStore> {
    storage: S,
    data: AppData,
}

impl<S: BlobStore> FitnessStore<S> {
    /// Opens the store, seeding sample data dated today when storage holds
    /// nothing usable.
    pub fn open(storage: S) -> Self {
        Self::open_at(storage, query::local_today())
    }

    /// Opens the store with an explicit date for the fallback seed.
    ///
    /// # Contract
    /// - A stored, valid document replaces the seed via `SetData`.
    /// - Absent, malformed or unreadable storage keeps the seed. Nothing is
    ///   written until the first change.
    pub fn open_at(storage: S, today: NaiveDate) -> Self {
        let mut store = Self {
            storage,
            data: AppData::seeded(today),
        };

        let stored = load_document(&store.storage, STORAGE_KEY);
        let status = stored.status();
        match stored {
            StoredDocument::Loaded(document) => {
                info!("event=store_load module=service status=ok result={status}");
                store.data = reduce(AppData::empty(), Action::SetData(document));
            }
            StoredDocument::Absent => {
                info!("event=store_load module=service status=ok result={status} fallback=seed");
            }
            StoredDocument::Malformed(err) => {
                warn!(
                    "event=store_load module=service status=error result={status} fallback=seed error={err}"
                );
            }
            StoredDocument::Unavailable(err) => {
                error!(
                    "event=store_load module=service status=error result={status} fallback=seed error={err}"
                );
            }
        }
        store
    }

    /// Current state snapshot.
    pub fn data(&self) -> &AppData {
        &self.data
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Applies one action and persists the resulting snapshot.
    ///
    /// Unknown actions change nothing and skip the write. An action whose
    /// result fails `AppData::validate` is dropped, so storage only ever
    /// holds documents that load back. Returns `false` only for a dropped
    /// action.
    pub fn dispatch(&mut self, action: Action) -> bool {
        if let Action::Unknown(kind) = &action {
            debug!("event=dispatch module=service status=skip action={kind} reason=unknown_action");
            return true;
        }

        let kind = action.kind().to_string();
        let next = reduce(self.data.clone(), action);
        if let Err(err) = next.validate() {
            warn!(
                "event=dispatch module=service status=skip action={kind} reason=invalid_state error={err}"
            );
            return false;
        }
        self.data = next;
        self.persist(&kind);
        true
    }

    fn persist(&self, action_kind: &str) {
        match save_document(&self.storage, STORAGE_KEY, &self.data) {
            Ok(()) => debug!("event=store_save module=service status=ok action={action_kind}"),
            Err(err) => error!(
                "event=store_save module=service status=error action={action_kind} error={err}"
            ),
        }
    }

    // Exercises

    pub fn add_exercise(&mut self, exercise: NewExercise) -> EntityId {
        let id = generate_id();
        self.dispatch(Action::AddExercise(exercise.into_exercise(id.clone())));
        id
    }

    pub fn update_exercise(&mut self, id: &str, patch: ExercisePatch) {
        self.dispatch(Action::UpdateExercise {
            id: id.to_string(),
            exercise: patch,
        });
    }

    /// Removes a catalog exercise. Plans and workouts keep their references.
    pub fn delete_exercise(&mut self, id: &str) {
        self.dispatch(Action::DeleteExercise(id.to_string()));
    }

    /// Adds an exercise from form text.
    ///
    /// Blank names are rejected; bad set/rep text defaults to 3 x 10; a blank
    /// muscle group is stored as none.
    pub fn add_exercise_input(
        &mut self,
        name: &str,
        raw_sets: &str,
        raw_reps: &str,
        muscle_group: &str,
    ) -> Option<EntityId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let muscle_group = Some(muscle_group.trim())
            .filter(|group| !group.is_empty())
            .map(str::to_string);

        Some(self.add_exercise(NewExercise {
            name: name.to_string(),
            default_sets: parse_count_or(raw_sets, DEFAULT_FORM_SETS),
            default_reps: parse_count_or(raw_reps, DEFAULT_FORM_REPS),
            muscle_group,
        }))
    }

    // Workouts

    pub fn add_workout(&mut self, workout: NewWorkout) -> EntityId {
        let id = generate_id();
        self.dispatch(Action::AddWorkout(workout.into_workout(id.clone())));
        id
    }

    /// Merges a workout patch.
    ///
    /// When the patch replaces `exercises` without an explicit `completed`,
    /// the flag is re-derived from the new list.
    pub fn update_workout(&mut self, id: &str, mut patch: WorkoutPatch) {
        if patch.completed.is_none() {
            if let Some(exercises) = &patch.exercises {
                patch.completed = Some(all_completed(exercises));
            }
        }
        self.dispatch(Action::UpdateWorkout {
            id: id.to_string(),
            workout: patch,
        });
    }

    /// Creates the workout for `date` from the template assigned to `day`.
    ///
    /// Returns the existing workout id when `date` already has one, the new
    /// id when one was created, and `None` when no template covers `day`.
    pub fn start_workout_for(&mut self, date: NaiveDate, day: DayOfWeek) -> Option<EntityId> {
        if let Some(existing) = query::workout_on(&self.data, date) {
            return Some(existing.id.clone());
        }
        let plan = query::workout_day_for(&self.data, day)?;
        let workout = NewWorkout::from_plan(date, plan, &self.data.exercises);
        Some(self.add_workout(workout))
    }

    pub fn start_todays_workout(&mut self) -> Option<EntityId> {
        let today = query::local_today();
        self.start_workout_for(today, query::weekday_of(today))
    }

    /// Flips completion of `exercise_id` inside a workout and re-derives the
    /// workout's `completed` flag. Returns false when nothing matched.
    pub fn toggle_workout_exercise(&mut self, workout_id: &str, exercise_id: &str) -> bool {
        let Some(mut workout) = query::find_workout(&self.data, workout_id).cloned() else {
            return false;
        };
        if !workout.toggle_exercise(exercise_id) {
            return false;
        }
        self.dispatch(Action::UpdateWorkout {
            id: workout.id,
            workout: WorkoutPatch {
                exercises: Some(workout.exercises),
                completed: Some(workout.completed),
                ..WorkoutPatch::default()
            },
        })
    }

    // Body weight

    /// Records a weight, updating the entry already dated `weight.date`.
    pub fn add_body_weight(&mut self, weight: NewBodyWeight) -> EntityId {
        if let Some(existing) = query::body_weight_on(&self.data, weight.date) {
            let id = existing.id.clone();
            self.update_body_weight(&id, BodyWeightPatch::from(weight));
            return id;
        }
        let id = generate_id();
        self.dispatch(Action::AddBodyWeight(weight.into_entry(id.clone())));
        id
    }

    pub fn update_body_weight(&mut self, id: &str, patch: BodyWeightPatch) {
        self.dispatch(Action::UpdateBodyWeight {
            id: id.to_string(),
            weight: patch,
        });
    }

    /// Records weight text for `date` in the configured unit. Bad text is a
    /// silent no-op.
    pub fn record_weight_input(&mut self, date: NaiveDate, raw_weight: &str) -> Option<EntityId> {
        let weight = parse_weight(raw_weight)?;
        let unit = self.data.settings.weight_unit;
        Some(self.add_body_weight(NewBodyWeight { date, weight, unit }))
    }

    // Steps

    /// Records steps, updating the entry already dated `steps.date`.
    pub fn add_steps(&mut self, steps: NewSteps) -> EntityId {
        if let Some(existing) = query::steps_on(&self.data, steps.date) {
            let id = existing.id.clone();
            self.update_steps(&id, StepPatch::from(steps));
            return id;
        }
        let id = generate_id();
        self.dispatch(Action::AddSteps(steps.into_entry(id.clone())));
        id
    }

    pub fn update_steps(&mut self, id: &str, patch: StepPatch) {
        self.dispatch(Action::UpdateSteps {
            id: id.to_string(),
            steps: patch,
        });
    }

    /// Records step text for `date`.
    ///
    /// A missing or invalid target falls back to the settings target. A
    /// target different from the settings target becomes the new default.
    pub fn record_steps_input(
        &mut self,
        date: NaiveDate,
        raw_steps: &str,
        raw_target: &str,
    ) -> Option<EntityId> {
        let steps = parse_steps(raw_steps)?;
        let current_target = self.data.settings.step_target;
        let target = parse_count_or(raw_target, current_target);

        let id = self.add_steps(NewSteps {
            date,
            steps,
            target,
        });
        if target != current_target {
            self.update_settings(SettingsPatch {
                step_target: Some(target),
                ..SettingsPatch::default()
            });
        }
        Some(id)
    }

    // Workout days

    pub fn add_workout_day(&mut self, day: NewWorkoutDay) -> EntityId {
        let id = generate_id();
        self.dispatch(Action::AddWorkoutDay(day.into_workout_day(id.clone())));
        id
    }

    pub fn update_workout_day(&mut self, id: &str, patch: WorkoutDayPatch) {
        self.dispatch(Action::UpdateWorkoutDay {
            id: id.to_string(),
            day: patch,
        });
    }

    pub fn delete_workout_day(&mut self, id: &str) {
        self.dispatch(Action::DeleteWorkoutDay(id.to_string()));
    }

    /// Saves a template form: updates `existing_id` when given, else adds.
    ///
    /// Rejects a blank name or an empty weekday selection.
    pub fn save_workout_day_form(
        &mut self,
        existing_id: Option<&str>,
        form: NewWorkoutDay,
    ) -> Option<EntityId> {
        let name = form.name.trim().to_string();
        if name.is_empty() || form.assigned_days.is_empty() {
            return None;
        }
        match existing_id {
            Some(id) => {
                self.update_workout_day(
                    id,
                    WorkoutDayPatch {
                        name: Some(name),
                        exercises: Some(form.exercises),
                        assigned_days: Some(form.assigned_days),
                    },
                );
                Some(id.to_string())
            }
            None => Some(self.add_workout_day(NewWorkoutDay { name, ..form })),
        }
    }

    /// Builds a plan entry from form text, defaulting to the exercise's own
    /// sets and reps. `None` when the exercise is not in the catalog.
    pub fn plan_entry_input(
        &self,
        exercise_id: &str,
        raw_sets: &str,
        raw_reps: &str,
    ) -> Option<PlanEntry> {
        let exercise = query::find_exercise(&self.data, exercise_id)?;
        Some(PlanEntry {
            exercise_id: exercise.id.clone(),
            sets: parse_positive_count(raw_sets).unwrap_or(exercise.default_sets),
            reps: parse_positive_count(raw_reps).unwrap_or(exercise.default_reps),
        })
    }

    // Settings

    pub fn update_settings(&mut self, patch: SettingsPatch) {
        self.dispatch(Action::UpdateSettings(patch));
    }

    // Queries

    pub fn todays_workout(&self) -> Option<&Workout> {
        query::todays_workout(&self.data)
    }

    pub fn todays_steps(&self) -> Option<&StepEntry> {
        query::todays_steps(&self.data)
    }

    pub fn todays_weight(&self) -> Option<&BodyWeightEntry> {
        query::todays_weight(&self.data)
    }

    pub fn todays_plan(&self) -> Option<&WorkoutDay> {
        query::todays_workout_day(&self.data)
    }

    pub fn previous_workout(&self) -> Option<&Workout> {
        query::previous_workout(&self.data, query::local_today())
    }

    pub fn exercise(&self, id: &str) -> Option<&Exercise> {
        query::find_exercise(&self.data, id)
    }

    pub fn weight_trend(&self, window: TrendWindow) -> Option<WeightTrend> {
        query::weight_trend(&self.data, window, query::local_today())
    }

    /// Consumes the store, returning its storage adapter and final state.
    pub fn into_parts(self) -> (S, AppData) {
        (self.storage, self.data)
    }
}

const DEFAULT_FORM_SETS: u32 = 3;
const DEFAULT_FORM_REPS: u32 = 10;
