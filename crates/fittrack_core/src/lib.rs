//! Core state and persistence for the FitTrack fitness log.
//! This crate is the single source of truth for data invariants.

pub mod config;
pub mod db;
pub mod input;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod state;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::app_data::AppData;
pub use model::exercise::{Exercise, ExercisePatch, NewExercise};
pub use model::id::{generate_id, EntityId};
pub use model::metrics::{
    BodyWeightEntry, BodyWeightPatch, NewBodyWeight, NewSteps, StepEntry, StepPatch, WeightUnit,
};
pub use model::plan::{DayOfWeek, NewWorkoutDay, PlanEntry, WorkoutDay, WorkoutDayPatch};
pub use model::settings::{SettingsPatch, Theme, UserSettings};
pub use model::validation::ModelValidationError;
pub use model::workout::{CompletionStatus, NewWorkout, Workout, WorkoutExercise, WorkoutPatch};
pub use repo::blob_repo::{BlobStore, MemoryBlobStore, RepoError, RepoResult, SqliteBlobStore};
pub use repo::document::{decode_document, encode_document, DocumentError, StoredDocument};
pub use service::store::{FitnessStore, STORAGE_KEY};
pub use state::action::Action;
pub use state::query::{TrendDirection, TrendWindow, WeightTrend};
pub use state::reducer::reduce;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
