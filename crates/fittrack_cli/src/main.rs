//! Terminal front end for the FitTrack store.
//!
//! # Responsibility
//! - Run one store use-case per invocation against the SQLite document.
//! - Print plain text; exit non-zero only when storage cannot be opened.

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fittrack_core::db::open_db;
use fittrack_core::state::query;
use fittrack_core::{
    init_logging_from_config, CompletionStatus, CoreConfig, DayOfWeek, FitnessStore,
    SqliteBlobStore, TrendDirection, TrendWindow, WeightTrend,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(about = "Log workouts, body weight and steps")]
#[command(version)]
struct Cli {
    /// SQLite file holding the document (overrides FITTRACK_DB_PATH)
    #[arg(long, value_name = "FILE", global = true)]
    db: Option<PathBuf>,

    /// Write rolling logs to this directory (overrides FITTRACK_LOG_DIR)
    #[arg(long, value_name = "DIR", global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show today's plan, progress, steps and weight
    Today,
    /// Show the weekly plan
    Plan,
    /// List the exercise catalog
    Exercises,
    /// List workouts, newest first
    History,
    /// Record body weight in the configured unit
    LogWeight {
        value: String,
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },
    /// Record a step count
    LogSteps {
        steps: String,
        /// New daily target; kept as the default for later days
        #[arg(long, default_value = "")]
        target: String,
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },
    /// Create the day's workout from the weekday plan
    StartWorkout {
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },
    /// Flip one exercise of a workout between done and not done
    Toggle {
        workout_id: String,
        exercise_id: String,
    },
    /// Show the body weight trend over 7, 30 or 90 days
    Trend {
        #[arg(long, default_value_t = 7)]
        days: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = CoreConfig::from_env();
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Some(log_dir) = cli.log_dir {
        config.log_dir = Some(log_dir);
    }
    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("logging disabled: {err}");
    }

    let conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open {}", config.db_path.display()))?;
    let mut store = FitnessStore::open(SqliteBlobStore::new(&conn));
    let today = query::local_today();

    match cli.command {
        Command::Today => print_today(&store, today),
        Command::Plan => print_plan(&store),
        Command::Exercises => {
            for exercise in &store.data().exercises {
                println!(
                    "{}  {}  {}x{}  {}",
                    exercise.id,
                    exercise.name,
                    exercise.default_sets,
                    exercise.default_reps,
                    exercise.muscle_group.as_deref().unwrap_or("-")
                );
            }
        }
        Command::History => {
            for workout in query::workouts_newest_first(store.data()) {
                println!(
                    "{}  {}  {}  {}",
                    workout.date,
                    workout.day_name,
                    status_label(workout.completion_status()),
                    workout.id
                );
            }
        }
        Command::LogWeight { value, date } => {
            let date = date.unwrap_or(today);
            match store.record_weight_input(date, &value) {
                Some(id) => println!("saved weight for {date} ({id})"),
                None => println!("ignored: {value:?} is not a weight above zero"),
            }
        }
        Command::LogSteps {
            steps,
            target,
            date,
        } => {
            let date = date.unwrap_or(today);
            match store.record_steps_input(date, &steps, &target) {
                Some(id) => println!("saved steps for {date} ({id})"),
                None => println!("ignored: {steps:?} is not a step count"),
            }
        }
        Command::StartWorkout { date } => {
            let date = date.unwrap_or(today);
            match store.start_workout_for(date, query::weekday_of(date)) {
                Some(id) => println!("workout for {date}: {id}"),
                None => println!("no workout planned for {}", query::weekday_of(date)),
            }
        }
        Command::Toggle {
            workout_id,
            exercise_id,
        } => {
            if store.toggle_workout_exercise(&workout_id, &exercise_id) {
                let workout = query::find_workout(store.data(), &workout_id);
                let progress = query::workout_progress(workout);
                println!("toggled; workout at {progress:.0}%");
            } else {
                println!("workout or exercise not found");
            }
        }
        Command::Trend { days } => {
            let Some(window) = TrendWindow::from_days(days) else {
                anyhow::bail!("trend window must be 7, 30 or 90 days, got {days}");
            };
            match store.weight_trend(window) {
                Some(trend) => println!("{}", trend_line(&trend, window)),
                None => println!("not enough weight entries in the last {days} days"),
            }
        }
    }

    Ok(())
}

fn print_today(store: &FitnessStore<SqliteBlobStore<'_>>, today: NaiveDate) {
    let settings = &store.data().settings;
    println!("{today} ({})", query::weekday_of(today));

    match store.todays_plan() {
        Some(plan) => println!("plan: {}", plan.name),
        None => println!("plan: rest day"),
    }
    if let Some(workout) = store.todays_workout() {
        println!(
            "workout: {} ({:.0}%)",
            status_label(workout.completion_status()),
            workout.progress_percent()
        );
        for exercise in &workout.exercises {
            let mark = if exercise.completed { "x" } else { " " };
            println!(
                "  [{mark}] {} {}x{}  {}",
                exercise.exercise.name, exercise.sets, exercise.reps, exercise.exercise_id
            );
        }
    }
    match store.todays_steps() {
        Some(entry) => println!(
            "steps: {} / {} ({:.0}%)",
            entry.steps,
            entry.target,
            entry.target_percent()
        ),
        None => println!("steps: - / {}", settings.step_target),
    }
    match store.todays_weight() {
        Some(entry) => println!("weight: {} {}", entry.weight, entry.unit),
        None => println!("weight: -"),
    }
    if let Some(previous) = store.previous_workout() {
        println!("last workout: {} on {}", previous.day_name, previous.date);
    }
}

fn print_plan(store: &FitnessStore<SqliteBlobStore<'_>>) {
    for day in DayOfWeek::ALL {
        let name = query::workout_day_for(store.data(), day)
            .map(|plan| plan.name.as_str())
            .unwrap_or("rest");
        println!("{:<9} {name}", day.as_str());
    }
}

fn status_label(status: CompletionStatus) -> String {
    match status {
        CompletionStatus::NoExercises => "empty".to_string(),
        CompletionStatus::NotStarted => "not started".to_string(),
        CompletionStatus::InProgress { done, total } => format!("{done}/{total}"),
        CompletionStatus::Completed => "completed".to_string(),
    }
}

/// `change` is a magnitude; the sign comes from the direction.
fn trend_line(trend: &WeightTrend, window: TrendWindow) -> String {
    let (label, sign) = match trend.direction {
        TrendDirection::Up => ("up", "+"),
        TrendDirection::Down => ("down", "-"),
        TrendDirection::Stable => ("stable", ""),
    };
    format!(
        "{label} {sign}{:.1} ({:.1}%) over {} days",
        trend.change,
        trend.percentage,
        window.days()
    )
}
