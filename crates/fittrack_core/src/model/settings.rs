//! Singleton user preferences.

use super::metrics::WeightUnit;
use serde::{Deserialize, Serialize};

pub const DEFAULT_STEP_TARGET: u32 = 10_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub weight_unit: WeightUnit,
    pub theme: Theme,
    /// Default daily step target. Must be positive.
    pub step_target: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            weight_unit: WeightUnit::Lbs,
            theme: Theme::Dark,
            step_target: DEFAULT_STEP_TARGET,
            username: None,
        }
    }
}

impl UserSettings {
    pub fn apply_patch(&mut self, patch: SettingsPatch) {
        if let Some(weight_unit) = patch.weight_unit {
            self.weight_unit = weight_unit;
        }
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(step_target) = patch.step_target {
            self.step_target = step_target;
        }
        if let Some(username) = patch.username {
            self.username = username;
        }
    }

    /// Builds a patch carrying every current value.
    pub fn to_patch(&self) -> SettingsPatch {
        SettingsPatch {
            weight_unit: Some(self.weight_unit),
            theme: Some(self.theme),
            step_target: Some(self.step_target),
            username: Some(self.username.clone()),
        }
    }
}

/// Partial settings update. `username: Some(None)` clears the name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsPatch {
    pub weight_unit: Option<WeightUnit>,
    pub theme: Option<Theme>,
    pub step_target: Option<u32>,
    #[serde(deserialize_with = "super::deserialize_some")]
    pub username: Option<Option<String>>,
}
