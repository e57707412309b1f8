//! Daily body weight and step entries.
//!
//! # Invariants
//! - At most one entry per date for each kind. The store enforces this with
//!   upsert-by-date; the reducer alone does not.

use super::id::EntityId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Body weight unit, persisted as `lbs` or `kg`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Lbs,
    Kg,
}

impl WeightUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lbs => "lbs",
            Self::Kg => "kg",
        }
    }
}

impl Display for WeightUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyWeightEntry {
    pub id: EntityId,
    pub date: NaiveDate,
    /// Positive, finite.
    pub weight: f64,
    pub unit: WeightUnit,
}

impl BodyWeightEntry {
    pub fn apply_patch(&mut self, patch: BodyWeightPatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(weight) = patch.weight {
            self.weight = weight;
        }
        if let Some(unit) = patch.unit {
            self.unit = unit;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBodyWeight {
    pub date: NaiveDate,
    pub weight: f64,
    pub unit: WeightUnit,
}

impl NewBodyWeight {
    pub fn into_entry(self, id: EntityId) -> BodyWeightEntry {
        BodyWeightEntry {
            id,
            date: self.date,
            weight: self.weight,
            unit: self.unit,
        }
    }
}

impl From<NewBodyWeight> for BodyWeightPatch {
    fn from(value: NewBodyWeight) -> Self {
        Self {
            date: Some(value.date),
            weight: Some(value.weight),
            unit: Some(value.unit),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BodyWeightPatch {
    pub date: Option<NaiveDate>,
    pub weight: Option<f64>,
    pub unit: Option<WeightUnit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepEntry {
    pub id: EntityId,
    pub date: NaiveDate,
    pub steps: u32,
    /// Must be positive.
    pub target: u32,
}

impl StepEntry {
    pub fn apply_patch(&mut self, patch: StepPatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(steps) = patch.steps {
            self.steps = steps;
        }
        if let Some(target) = patch.target {
            self.target = target;
        }
    }

    /// Progress toward the target as 0-100, capped at 100.
    pub fn target_percent(&self) -> f64 {
        if self.target == 0 {
            return 0.0;
        }
        (f64::from(self.steps) / f64::from(self.target) * 100.0).min(100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSteps {
    pub date: NaiveDate,
    pub steps: u32,
    pub target: u32,
}

impl NewSteps {
    pub fn into_entry(self, id: EntityId) -> StepEntry {
        StepEntry {
            id,
            date: self.date,
            steps: self.steps,
            target: self.target,
        }
    }
}

impl From<NewSteps> for StepPatch {
    fn from(value: NewSteps) -> Self {
        Self {
            date: Some(value.date),
            steps: Some(value.steps),
            target: Some(value.target),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StepPatch {
    pub date: Option<NaiveDate>,
    pub steps: Option<u32>,
    pub target: Option<u32>,
}
