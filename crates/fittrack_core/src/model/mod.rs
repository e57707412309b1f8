//! Fitness domain model persisted as one `AppData` document.
//!
//! # Responsibility
//! - Define the canonical records shown and edited by every screen.
//! - Keep the persisted JSON shape stable (`camelCase` field names).
//!
//! # Invariants
//! - Every entity except settings is identified by a string id.
//! - Workouts embed snapshot copies of exercises, never references.
//! - Deleting a catalog exercise does not touch plans or past workouts.

pub mod app_data;
pub mod exercise;
pub mod id;
pub mod metrics;
pub mod plan;
pub mod settings;
pub mod validation;
pub mod workout;

use serde::{Deserialize, Deserializer};

/// Maps a present field (including `null`) to `Some`, so patches can tell
/// "clear this value" apart from "leave it unchanged".
pub(crate) fn deserialize_some<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
