use chrono::NaiveDate;
use fittrack_core::{
    AppData, BodyWeightPatch, DayOfWeek, ExercisePatch, FitnessStore, MemoryBlobStore,
    NewBodyWeight, NewExercise, NewSteps, NewWorkout, NewWorkoutDay, PlanEntry, SettingsPatch,
    WeightUnit, WorkoutPatch,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fresh_store() -> FitnessStore<MemoryBlobStore> {
    FitnessStore::open_at(MemoryBlobStore::new(), date(2024, 1, 8))
}

fn lbs(day: NaiveDate, weight: f64) -> NewBodyWeight {
    NewBodyWeight {
        date: day,
        weight,
        unit: WeightUnit::Lbs,
    }
}

#[test]
fn empty_storage_opens_with_seed_data() {
    let store = fresh_store();
    assert_eq!(store.data(), &AppData::seeded(date(2024, 1, 8)));
    assert!(store.storage().is_empty());
}

#[test]
fn body_weight_on_same_date_is_upserted() {
    let mut store = fresh_store();
    let day = date(2024, 1, 5);

    let first = store.add_body_weight(lbs(day, 180.0));
    let second = store.add_body_weight(lbs(day, 178.0));

    assert_eq!(first, second);
    let entries = store
        .data()
        .body_weights
        .iter()
        .filter(|entry| entry.date == day)
        .collect::<Vec<_>>();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].weight, 178.0);
}

#[test]
fn repeated_weight_entries_leave_exactly_one_per_date_holding_the_last_value() {
    let mut store = fresh_store();
    let day = date(2024, 1, 6);
    for weight in [181.0, 179.5, 183.0, 177.25] {
        store.add_body_weight(lbs(day, weight));
    }
    store.add_body_weight(lbs(date(2024, 1, 7), 176.0));

    let on_day = store
        .data()
        .body_weights
        .iter()
        .filter(|entry| entry.date == day)
        .map(|entry| entry.weight)
        .collect::<Vec<_>>();
    assert_eq!(on_day, vec![177.25]);
    assert_eq!(store.data().body_weights.len(), 3);
}

#[test]
fn steps_on_same_date_are_upserted() {
    let mut store = fresh_store();
    let day = date(2024, 1, 8);

    let seeded_id = store.data().steps[0].id.clone();
    let id = store.add_steps(NewSteps {
        date: day,
        steps: 7_500,
        target: 9_000,
    });

    assert_eq!(id, seeded_id);
    assert_eq!(store.data().steps.len(), 1);
    assert_eq!(store.data().steps[0].steps, 7_500);
    assert_eq!(store.data().steps[0].target, 9_000);
}

#[test]
fn toggling_workout_exercises_derives_progress_and_completion() {
    let mut store = fresh_store();
    let monday = date(2024, 1, 8);
    let workout_id = store.start_workout_for(monday, DayOfWeek::Monday).unwrap();

    let workout = store.data().workouts[0].clone();
    assert_eq!(workout.exercises.len(), 2);
    assert_eq!(workout.day_name, "Push Day");
    assert_eq!(workout.muscle_groups, vec!["Chest".to_string()]);

    assert!(store.toggle_workout_exercise(&workout_id, "1"));
    let workout = &store.data().workouts[0];
    assert_eq!(workout.progress_percent(), 50.0);
    assert!(!workout.completed);

    assert!(store.toggle_workout_exercise(&workout_id, "4"));
    let workout = &store.data().workouts[0];
    assert_eq!(workout.progress_percent(), 100.0);
    assert!(workout.completed);

    assert!(store.toggle_workout_exercise(&workout_id, "4"));
    assert!(!store.data().workouts[0].completed);
}

#[test]
fn toggle_reports_missing_workout_or_exercise() {
    let mut store = fresh_store();
    let workout_id = store
        .start_workout_for(date(2024, 1, 9), DayOfWeek::Tuesday)
        .unwrap();
    assert!(!store.toggle_workout_exercise("nope", "2"));
    assert!(!store.toggle_workout_exercise(&workout_id, "99"));
}

#[test]
fn starting_a_workout_twice_reuses_the_existing_one() {
    let mut store = fresh_store();
    let day = date(2024, 1, 10);
    let first = store.start_workout_for(day, DayOfWeek::Wednesday).unwrap();
    let second = store.start_workout_for(day, DayOfWeek::Wednesday).unwrap();
    assert_eq!(first, second);
    assert_eq!(store.data().workouts.len(), 1);
    assert!(store.start_workout_for(date(2024, 1, 14), DayOfWeek::Sunday).is_none());
}

#[test]
fn workout_snapshot_is_not_resynced_after_catalog_edit() {
    let mut store = fresh_store();
    store.start_workout_for(date(2024, 1, 8), DayOfWeek::Monday);
    store.update_exercise(
        "1",
        ExercisePatch {
            name: Some("Diamond Push-ups".into()),
            ..ExercisePatch::default()
        },
    );

    assert_eq!(store.exercise("1").unwrap().name, "Diamond Push-ups");
    assert_eq!(store.data().workouts[0].exercises[0].exercise.name, "Push-ups");
}

#[test]
fn update_workout_rederives_completed_when_exercises_change() {
    let mut store = fresh_store();
    let id = store.start_workout_for(date(2024, 1, 8), DayOfWeek::Monday).unwrap();
    let mut exercises = store.data().workouts[0].exercises.clone();
    for entry in &mut exercises {
        entry.completed = true;
    }

    store.update_workout(
        &id,
        WorkoutPatch {
            exercises: Some(exercises),
            ..WorkoutPatch::default()
        },
    );
    assert!(store.data().workouts[0].completed);

    store.update_workout(
        &id,
        WorkoutPatch {
            exercises: Some(Vec::new()),
            ..WorkoutPatch::default()
        },
    );
    assert!(!store.data().workouts[0].completed);
}

#[test]
fn deleting_exercise_keeps_plan_reference() {
    let mut store = fresh_store();
    store.delete_exercise("1");

    assert!(store.exercise("1").is_none());
    let push_day = &store.data().workout_days[0];
    assert_eq!(push_day.name, "Push Day");
    assert!(push_day.exercises.iter().any(|entry| entry.exercise_id == "1"));

    let workout_id = store.start_workout_for(date(2024, 1, 8), DayOfWeek::Monday).unwrap();
    let workout = store
        .data()
        .workouts
        .iter()
        .find(|workout| workout.id == workout_id)
        .unwrap();
    assert_eq!(workout.exercises.len(), 1);
    assert_eq!(workout.exercises[0].exercise_id, "4");
}

#[test]
fn weight_input_is_parsed_in_settings_unit() {
    let mut store = fresh_store();
    store.update_settings(SettingsPatch {
        weight_unit: Some(WeightUnit::Kg),
        ..SettingsPatch::default()
    });
    let day = date(2024, 1, 9);

    assert!(store.record_weight_input(day, "abc").is_none());
    assert!(store.record_weight_input(day, "0").is_none());
    assert_eq!(store.data().body_weights.len(), 1);

    store.record_weight_input(day, "82.4 kg").unwrap();
    let entry = store.data().body_weights.last().unwrap();
    assert_eq!(entry.date, day);
    assert_eq!(entry.weight, 82.4);
    assert_eq!(entry.unit, WeightUnit::Kg);
}

#[test]
fn steps_input_falls_back_to_and_updates_step_target() {
    let mut store = fresh_store();
    let day = date(2024, 1, 9);

    assert!(store.record_steps_input(day, "lots", "").is_none());

    store.record_steps_input(day, "4200", "").unwrap();
    let entry = store.data().steps.last().unwrap();
    assert_eq!((entry.steps, entry.target), (4_200, 10_000));
    assert_eq!(store.data().settings.step_target, 10_000);

    store.record_steps_input(day, "6100", "12000").unwrap();
    let entry = store.data().steps.last().unwrap();
    assert_eq!((entry.steps, entry.target), (6_100, 12_000));
    assert_eq!(store.data().settings.step_target, 12_000);
    assert_eq!(store.data().steps.len(), 2);
}

#[test]
fn exercise_form_defaults_and_rejects_blank_name() {
    let mut store = fresh_store();
    assert!(store.add_exercise_input("   ", "4", "8", "Legs").is_none());

    let id = store.add_exercise_input(" Lunges ", "", "x", "  ").unwrap();
    let exercise = store.exercise(&id).unwrap();
    assert_eq!(exercise.name, "Lunges");
    assert_eq!((exercise.default_sets, exercise.default_reps), (3, 10));
    assert_eq!(exercise.muscle_group, None);
}

#[test]
fn plan_entry_defaults_to_exercise_prescription() {
    let store = fresh_store();
    assert_eq!(
        store.plan_entry_input("3", "", "oops"),
        Some(PlanEntry {
            exercise_id: "3".into(),
            sets: 4,
            reps: 12,
        })
    );
    assert_eq!(store.plan_entry_input("3", "2", "5").unwrap().sets, 2);
    assert!(store.plan_entry_input("missing", "1", "1").is_none());
}

#[test]
fn workout_day_form_validates_then_adds_or_updates() {
    let mut store = fresh_store();
    let form = |name: &str, days: Vec<DayOfWeek>| NewWorkoutDay {
        name: name.to_string(),
        exercises: vec![PlanEntry {
            exercise_id: "3".into(),
            sets: 5,
            reps: 5,
        }],
        assigned_days: days,
    };

    assert!(store.save_workout_day_form(None, form("", vec![DayOfWeek::Sunday])).is_none());
    assert!(store.save_workout_day_form(None, form("Heavy Legs", Vec::new())).is_none());

    let id = store
        .save_workout_day_form(None, form(" Heavy Legs ", vec![DayOfWeek::Sunday]))
        .unwrap();
    assert_eq!(store.data().workout_days.len(), 4);
    assert_eq!(store.data().workout_days[3].name, "Heavy Legs");

    store
        .save_workout_day_form(Some(&id), form("Legs II", vec![DayOfWeek::Sunday, DayOfWeek::Friday]))
        .unwrap();
    let day = &store.data().workout_days[3];
    assert_eq!(day.name, "Legs II");
    assert_eq!(day.assigned_days.len(), 2);

    store.delete_workout_day(&id);
    assert_eq!(store.data().workout_days.len(), 3);
}

#[test]
fn added_entities_get_distinct_generated_ids() {
    let mut store = fresh_store();
    let first = store.add_exercise(NewExercise {
        name: "Plank".into(),
        default_sets: 3,
        default_reps: 1,
        muscle_group: Some("Core".into()),
    });
    let second = store.add_exercise(NewExercise {
        name: "Side Plank".into(),
        default_sets: 3,
        default_reps: 1,
        muscle_group: Some("Core".into()),
    });
    assert_ne!(first, second);
    assert_eq!(store.data().exercises.len(), 7);
}

#[test]
fn update_body_weight_merges_unit_only() {
    let mut store = fresh_store();
    let id = store.data().body_weights[0].id.clone();
    store.update_body_weight(
        &id,
        BodyWeightPatch {
            unit: Some(WeightUnit::Kg),
            ..BodyWeightPatch::default()
        },
    );
    let entry = &store.data().body_weights[0];
    assert_eq!(entry.unit, WeightUnit::Kg);
    assert_eq!(entry.weight, 192.0);
}

#[test]
fn added_workout_derives_completed_from_its_exercises() {
    let mut store = fresh_store();
    let plan = store.data().workout_days[0].clone();

    let empty_id = store.add_workout(NewWorkout {
        date: date(2024, 1, 1),
        day_name: "Empty".into(),
        exercises: Vec::new(),
        muscle_groups: Vec::new(),
    });

    let mut done = NewWorkout::from_plan(date(2024, 1, 2), &plan, &store.data().exercises);
    for entry in &mut done.exercises {
        entry.completed = true;
    }
    let done_id = store.add_workout(done);

    let partial = NewWorkout::from_plan(date(2024, 1, 3), &plan, &store.data().exercises);
    let partial_id = store.add_workout(partial);

    let completed_of = |id: &str| {
        store
            .data()
            .workouts
            .iter()
            .find(|workout| workout.id == id)
            .unwrap()
            .completed
    };
    assert!(!completed_of(&empty_id));
    assert!(completed_of(&done_id));
    assert!(!completed_of(&partial_id));
}
