//! Pure state transition function.

use super::action::Action;
use crate::model::app_data::AppData;
use crate::model::exercise::{Exercise, ExercisePatch};
use crate::model::metrics::{BodyWeightEntry, BodyWeightPatch, StepEntry, StepPatch};
use crate::model::plan::{WorkoutDay, WorkoutDayPatch};
use crate::model::workout::{Workout, WorkoutPatch};

/// Entity that can be matched by id and shallow-merged with a patch.
trait Mergeable {
    type Patch: Clone;

    fn id(&self) -> &str;
    fn merge(&mut self, patch: Self::Patch);
}

macro_rules! impl_mergeable {
    ($entity:ty, $patch:ty) => {
        impl Mergeable for $entity {
            type Patch = $patch;

            fn id(&self) -> &str {
                &self.id
            }

            fn merge(&mut self, patch: Self::Patch) {
                self.apply_patch(patch);
            }
        }
    };
}

impl_mergeable!(Exercise, ExercisePatch);
impl_mergeable!(Workout, WorkoutPatch);
impl_mergeable!(BodyWeightEntry, BodyWeightPatch);
impl_mergeable!(StepEntry, StepPatch);
impl_mergeable!(WorkoutDay, WorkoutDayPatch);

/// Applies one action and returns the next state.
///
/// # Invariants
/// - Never fails and never performs I/O.
/// - Updates merge into every entry whose id matches exactly.
/// - Updates and deletes of missing ids leave the collection unchanged.
/// - `Action::Unknown` returns the state unchanged.
pub fn reduce(mut state: AppData, action: Action) -> AppData {
    match action {
        Action::SetData(document) => return document,
        Action::AddExercise(exercise) => state.exercises.push(exercise),
        Action::UpdateExercise { id, exercise } => merge_by_id(&mut state.exercises, &id, exercise),
        Action::DeleteExercise(id) => remove_by_id(&mut state.exercises, &id),
        Action::AddWorkout(workout) => state.workouts.push(workout),
        Action::UpdateWorkout { id, workout } => merge_by_id(&mut state.workouts, &id, workout),
        Action::AddBodyWeight(entry) => state.body_weights.push(entry),
        Action::UpdateBodyWeight { id, weight } => {
            merge_by_id(&mut state.body_weights, &id, weight)
        }
        Action::AddSteps(entry) => state.steps.push(entry),
        Action::UpdateSteps { id, steps } => merge_by_id(&mut state.steps, &id, steps),
        Action::AddWorkoutDay(day) => state.workout_days.push(day),
        Action::UpdateWorkoutDay { id, day } => merge_by_id(&mut state.workout_days, &id, day),
        Action::DeleteWorkoutDay(id) => remove_by_id(&mut state.workout_days, &id),
        Action::UpdateSettings(patch) => state.settings.apply_patch(patch),
        Action::Unknown(_) => {}
    }
    state
}

fn merge_by_id<T: Mergeable>(items: &mut [T], id: &str, patch: T::Patch) {
    for item in items.iter_mut().filter(|item| item.id() == id) {
        item.merge(patch.clone());
    }
}

fn remove_by_id<T: Mergeable>(items: &mut Vec<T>, id: &str) {
    items.retain(|item| item.id() != id);
}
