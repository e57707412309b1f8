//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Open storage, build one `FitnessStore`, run one use-case, return.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Bad user input is reported as `ok=false`, never as a crash.

use fittrack_core::db::open_db;
use fittrack_core::{
    core_version as core_version_inner, encode_document, init_logging as init_logging_inner,
    ping as ping_inner, Action, CoreConfig, FitnessStore, SqliteBlobStore, TrendDirection,
    TrendWindow,
};
use log::warn;
use std::path::PathBuf;
use std::sync::OnceLock;

static STORE_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Result envelope for mutating calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreActionResponse {
    pub ok: bool,
    /// Id of the created or updated entity, when the call has one.
    pub entity_id: Option<String>,
    pub message: String,
}

impl StoreActionResponse {
    fn success(message: impl Into<String>, entity_id: Option<String>) -> Self {
        Self {
            ok: true,
            entity_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            entity_id: None,
            message: message.into(),
        }
    }
}

/// Full document for rendering, as the persisted JSON shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotResponse {
    pub ok: bool,
    pub document_json: String,
    pub message: String,
}

/// Home-screen figures for the current local date.
#[derive(Debug, Clone, PartialEq)]
pub struct TodaySummary {
    pub plan_name: Option<String>,
    pub workout_id: Option<String>,
    /// 0-100.
    pub workout_progress: f64,
    pub steps: Option<u32>,
    pub step_target: u32,
    pub weight: Option<f64>,
    pub weight_unit: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeightTrendView {
    pub change: f64,
    /// `up`, `down` or `stable`.
    pub direction: String,
    pub percentage: f64,
}

/// Returns the current document.
#[flutter_rust_bridge::frb(sync)]
pub fn store_snapshot() -> SnapshotResponse {
    let result = with_store(|store| {
        encode_document(store.data()).map_err(|err| format!("snapshot encode failed: {err}"))
    })
    .and_then(|inner| inner);

    match result {
        Ok(document_json) => SnapshotResponse {
            ok: true,
            document_json,
            message: String::new(),
        },
        Err(err) => SnapshotResponse {
            ok: false,
            document_json: String::new(),
            message: format!("store_snapshot failed: {err}"),
        },
    }
}

/// Applies one `{"type": ..., "payload": ...}` action envelope.
///
/// Unknown action types succeed without changing state. Actions that would
/// leave invalid values (zero counts, non-positive weights) are rejected.
#[flutter_rust_bridge::frb(sync)]
pub fn store_dispatch(action_json: String) -> StoreActionResponse {
    let action = match Action::from_json(action_json.as_str()) {
        Ok(action) => action,
        Err(err) => {
            warn!("event=ffi_dispatch module=ffi status=error error_code=bad_action error={err}");
            return StoreActionResponse::failure(format!("store_dispatch rejected action: {err}"));
        }
    };
    let kind = action.kind().to_string();
    match with_store(|store| store.dispatch(action)) {
        Ok(true) => StoreActionResponse::success(format!("{kind} applied."), None),
        Ok(false) => StoreActionResponse::failure(format!("{kind} rejected: invalid values.")),
        Err(err) => StoreActionResponse::failure(format!("store_dispatch failed: {err}")),
    }
}

/// Records today's body weight from text in the configured unit.
#[flutter_rust_bridge::frb(sync)]
pub fn log_weight(raw_weight: String) -> StoreActionResponse {
    let today = fittrack_core::state::query::local_today();
    match with_store(|store| store.record_weight_input(today, raw_weight.as_str())) {
        Ok(Some(id)) => StoreActionResponse::success("Weight saved.", Some(id)),
        Ok(None) => StoreActionResponse::failure("Weight ignored: enter a number above zero."),
        Err(err) => StoreActionResponse::failure(format!("log_weight failed: {err}")),
    }
}

/// Records today's steps; an empty target keeps the configured one.
#[flutter_rust_bridge::frb(sync)]
pub fn log_steps(raw_steps: String, raw_target: String) -> StoreActionResponse {
    let today = fittrack_core::state::query::local_today();
    match with_store(|store| store.record_steps_input(today, &raw_steps, &raw_target)) {
        Ok(Some(id)) => StoreActionResponse::success("Steps saved.", Some(id)),
        Ok(None) => StoreActionResponse::failure("Steps ignored: enter a whole number."),
        Err(err) => StoreActionResponse::failure(format!("log_steps failed: {err}")),
    }
}

/// Creates today's workout from the weekday plan if it does not exist yet.
#[flutter_rust_bridge::frb(sync)]
pub fn start_todays_workout() -> StoreActionResponse {
    match with_store(|store| store.start_todays_workout()) {
        Ok(Some(id)) => StoreActionResponse::success("Workout ready.", Some(id)),
        Ok(None) => StoreActionResponse::failure("No workout planned for today."),
        Err(err) => StoreActionResponse::failure(format!("start_todays_workout failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn toggle_workout_exercise(workout_id: String, exercise_id: String) -> StoreActionResponse {
    match with_store(|store| store.toggle_workout_exercise(&workout_id, &exercise_id)) {
        Ok(true) => StoreActionResponse::success("Exercise toggled.", Some(workout_id)),
        Ok(false) => StoreActionResponse::failure("Workout or exercise not found."),
        Err(err) => StoreActionResponse::failure(format!("toggle_workout_exercise failed: {err}")),
    }
}

/// Returns today's plan, progress, steps and weight. `None` when storage
/// cannot be opened.
#[flutter_rust_bridge::frb(sync)]
pub fn today_summary() -> Option<TodaySummary> {
    with_store(|store| {
        let workout = store.todays_workout();
        let steps = store.todays_steps();
        let weight = store.todays_weight();
        let settings = &store.data().settings;
        TodaySummary {
            plan_name: store.todays_plan().map(|plan| plan.name.clone()),
            workout_id: workout.map(|workout| workout.id.clone()),
            workout_progress: fittrack_core::state::query::workout_progress(workout),
            steps: steps.map(|entry| entry.steps),
            step_target: steps.map_or(settings.step_target, |entry| entry.target),
            weight: weight.map(|entry| entry.weight),
            weight_unit: weight
                .map_or(settings.weight_unit, |entry| entry.unit)
                .as_str()
                .to_string(),
        }
    })
    .map_err(|err| warn!("event=ffi_today module=ffi status=error error={err}"))
    .ok()
}

/// Weight trend over 7, 30 or 90 days. `None` for other windows or fewer
/// than two entries.
#[flutter_rust_bridge::frb(sync)]
pub fn weight_trend(days: u32) -> Option<WeightTrendView> {
    let window = TrendWindow::from_days(u64::from(days))?;
    let trend = with_store(|store| store.weight_trend(window)).ok()??;
    Some(WeightTrendView {
        change: trend.change,
        direction: trend_label(trend.direction).to_string(),
        percentage: trend.percentage,
    })
}

fn trend_label(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Up => "up",
        TrendDirection::Down => "down",
        TrendDirection::Stable => "stable",
    }
}

fn resolve_store_db_path() -> PathBuf {
    STORE_DB_PATH
        .get_or_init(|| CoreConfig::from_env().db_path)
        .clone()
}

fn with_store<T>(
    f: impl FnOnce(&mut FitnessStore<SqliteBlobStore<'_>>) -> T,
) -> Result<T, String> {
    let db_path = resolve_store_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("store DB open failed: {err}"))?;
    let mut store = FitnessStore::open(SqliteBlobStore::new(&conn));
    Ok(f(&mut store))
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, log_steps, log_weight, ping, store_dispatch, store_snapshot,
        today_summary, weight_trend,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_bad_arguments() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "tmp/logs".to_string()).is_empty());
    }

    #[test]
    fn snapshot_returns_decodable_document() {
        let response = store_snapshot();
        assert!(response.ok, "{}", response.message);
        assert!(fittrack_core::decode_document(&response.document_json).is_ok());
    }

    #[test]
    fn dispatch_accepts_unknown_and_rejects_malformed_actions() {
        let unknown = store_dispatch(r#"{"type":"FUTURE_ACTION","payload":{}}"#.to_string());
        assert!(unknown.ok, "{}", unknown.message);

        let malformed = store_dispatch("not json".to_string());
        assert!(!malformed.ok);
    }

    #[test]
    fn dispatch_rejects_zero_step_target() {
        let response = store_dispatch(
            r#"{"type":"UPDATE_SETTINGS","payload":{"stepTarget":0}}"#.to_string(),
        );
        assert!(!response.ok, "{}", response.message);

        let snapshot = store_snapshot();
        assert!(snapshot.ok, "{}", snapshot.message);
    }

    #[test]
    fn bad_weight_and_steps_text_is_ignored() {
        assert!(!log_weight("heavy".to_string()).ok);
        assert!(!log_steps("-20".to_string(), String::new()).ok);
    }

    #[test]
    fn logged_weight_shows_in_today_summary() {
        let saved = log_weight("181.5".to_string());
        assert!(saved.ok, "{}", saved.message);
        assert!(saved.entity_id.is_some());

        let summary = today_summary().expect("summary should load");
        assert!(summary.weight.is_some());
        assert!((0.0..=100.0).contains(&summary.workout_progress));
    }

    #[test]
    fn unsupported_trend_window_returns_none() {
        assert!(weight_trend(14).is_none());
    }
}
