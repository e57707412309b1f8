//! Recurring weekday workout templates.
//!
//! # Invariants
//! - A `WorkoutDay` is a template, never a dated event.
//! - `exercise_id` is a soft reference; it may dangle after catalog deletes.
//! - Duplicate entries in `assigned_days` are allowed and carry no meaning.

use super::id::EntityId;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Weekday name as persisted in `assignedDays` (`Monday` .. `Sunday`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Parses a full or three-letter weekday name, case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|day| {
            let name = day.as_str().to_ascii_lowercase();
            normalized == name || (normalized.len() == 3 && name.starts_with(&normalized))
        })
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }
}

impl Display for DayOfWeek {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One planned exercise with plan-time set/rep overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    pub exercise_id: EntityId,
    pub sets: u32,
    pub reps: u32,
}

/// Recurring template assigned to zero or more weekdays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    pub id: EntityId,
    pub name: String,
    pub exercises: Vec<PlanEntry>,
    pub assigned_days: Vec<DayOfWeek>,
}

impl WorkoutDay {
    pub fn is_assigned_to(&self, day: DayOfWeek) -> bool {
        self.assigned_days.contains(&day)
    }

    /// Applies a shallow field merge in place.
    pub fn apply_patch(&mut self, patch: WorkoutDayPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(exercises) = patch.exercises {
            self.exercises = exercises;
        }
        if let Some(assigned_days) = patch.assigned_days {
            self.assigned_days = assigned_days;
        }
    }
}

/// Creation input for a workout template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkoutDay {
    pub name: String,
    pub exercises: Vec<PlanEntry>,
    pub assigned_days: Vec<DayOfWeek>,
}

impl NewWorkoutDay {
    pub fn into_workout_day(self, id: EntityId) -> WorkoutDay {
        WorkoutDay {
            id,
            name: self.name,
            exercises: self.exercises,
            assigned_days: self.assigned_days,
        }
    }
}

/// Partial update for a workout template. Lists are replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkoutDayPatch {
    pub name: Option<String>,
    pub exercises: Option<Vec<PlanEntry>>,
    pub assigned_days: Option<Vec<DayOfWeek>>,
}

#[cfg(test)]
mod tests {
    use super::DayOfWeek;
    use chrono::Weekday;

    #[test]
    fn parse_accepts_full_and_short_names() {
        assert_eq!(DayOfWeek::parse("monday"), Some(DayOfWeek::Monday));
        assert_eq!(DayOfWeek::parse(" Thu "), Some(DayOfWeek::Thursday));
        assert_eq!(DayOfWeek::parse("mo"), None);
        assert_eq!(DayOfWeek::parse("someday"), None);
    }

    #[test]
    fn chrono_weekday_maps_to_full_name() {
        assert_eq!(DayOfWeek::from(Weekday::Sun).as_str(), "Sunday");
        assert_eq!(DayOfWeek::from(Weekday::Wed), DayOfWeek::Wednesday);
    }
}
