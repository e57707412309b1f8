//! Read-only derived views over `AppData`.
//!
//! Each query has a form taking an explicit date or weekday and a
//! `todays_*` form that reads the device-local clock at call time. Two
//! `todays_*` calls straddling midnight may disagree.

use crate::model::app_data::AppData;
use crate::model::exercise::Exercise;
use crate::model::metrics::{BodyWeightEntry, StepEntry};
use crate::model::plan::{DayOfWeek, WorkoutDay};
use crate::model::workout::Workout;
use chrono::{Datelike, Days, Local, NaiveDate};
use std::collections::BTreeMap;

/// Current calendar date in the device's local time zone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn weekday_of(date: NaiveDate) -> DayOfWeek {
    DayOfWeek::from(date.weekday())
}

pub fn workout_on(data: &AppData, date: NaiveDate) -> Option<&Workout> {
    data.workouts.iter().find(|workout| workout.date == date)
}

pub fn steps_on(data: &AppData, date: NaiveDate) -> Option<&StepEntry> {
    data.steps.iter().find(|entry| entry.date == date)
}

pub fn body_weight_on(data: &AppData, date: NaiveDate) -> Option<&BodyWeightEntry> {
    data.body_weights.iter().find(|entry| entry.date == date)
}

/// First template (in collection order) assigned to `day`.
pub fn workout_day_for(data: &AppData, day: DayOfWeek) -> Option<&WorkoutDay> {
    data.workout_days
        .iter()
        .find(|template| template.is_assigned_to(day))
}

pub fn todays_workout(data: &AppData) -> Option<&Workout> {
    workout_on(data, local_today())
}

pub fn todays_steps(data: &AppData) -> Option<&StepEntry> {
    steps_on(data, local_today())
}

pub fn todays_weight(data: &AppData) -> Option<&BodyWeightEntry> {
    body_weight_on(data, local_today())
}

pub fn todays_workout_day(data: &AppData) -> Option<&WorkoutDay> {
    workout_day_for(data, weekday_of(local_today()))
}

/// Workout dated the day before `today`.
pub fn previous_workout(data: &AppData, today: NaiveDate) -> Option<&Workout> {
    let yesterday = today.pred_opt()?;
    workout_on(data, yesterday)
}

pub fn find_exercise<'a>(data: &'a AppData, id: &str) -> Option<&'a Exercise> {
    data.exercises.iter().find(|exercise| exercise.id == id)
}

pub fn find_workout<'a>(data: &'a AppData, id: &str) -> Option<&'a Workout> {
    data.workouts.iter().find(|workout| workout.id == id)
}

/// Completion percentage (0-100) of an optional workout; 0 when absent.
pub fn workout_progress(workout: Option<&Workout>) -> f64 {
    workout.map_or(0.0, Workout::progress_percent)
}

/// Date -> completed flag for calendar markers. Later workouts on the same
/// date win.
pub fn workout_calendar(data: &AppData) -> BTreeMap<NaiveDate, bool> {
    data.workouts
        .iter()
        .map(|workout| (workout.date, workout.completed))
        .collect()
}

/// Workouts ordered by date, most recent first. Ties keep insertion order.
pub fn workouts_newest_first(data: &AppData) -> Vec<&Workout> {
    let mut workouts = data.workouts.iter().collect::<Vec<_>>();
    workouts.sort_by(|left, right| right.date.cmp(&left.date));
    workouts
}

/// Lookback window for weight history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendWindow {
    Week,
    Month,
    Quarter,
}

impl TrendWindow {
    pub fn days(self) -> u64 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
        }
    }

    pub fn from_days(days: u64) -> Option<Self> {
        match days {
            7 => Some(Self::Week),
            30 => Some(Self::Month),
            90 => Some(Self::Quarter),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

/// Change between the oldest and newest weight in a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightTrend {
    /// Absolute difference between last and first weight.
    pub change: f64,
    pub direction: TrendDirection,
    /// Absolute change relative to the first weight, in percent.
    pub percentage: f64,
}

/// Entries dated on or after `today - window`, sorted oldest first.
pub fn weights_in_window(
    data: &AppData,
    window: TrendWindow,
    today: NaiveDate,
) -> Vec<&BodyWeightEntry> {
    let cutoff = today
        .checked_sub_days(Days::new(window.days()))
        .unwrap_or(NaiveDate::MIN);
    let mut entries = data
        .body_weights
        .iter()
        .filter(|entry| entry.date >= cutoff)
        .collect::<Vec<_>>();
    entries.sort_by_key(|entry| entry.date);
    entries
}

/// Compares first and last weight in the window. `None` below two points.
pub fn weight_trend(data: &AppData, window: TrendWindow, today: NaiveDate) -> Option<WeightTrend> {
    let entries = weights_in_window(data, window, today);
    if entries.len() < 2 {
        return None;
    }
    let first = entries.first()?.weight;
    let last = entries.last()?.weight;
    let change = last - first;
    let direction = if change > 0.0 {
        TrendDirection::Up
    } else if change < 0.0 {
        TrendDirection::Down
    } else {
        TrendDirection::Stable
    };

    Some(WeightTrend {
        change: change.abs(),
        direction,
        percentage: if first == 0.0 {
            0.0
        } else {
            (change / first * 100.0).abs()
        },
    })
}
