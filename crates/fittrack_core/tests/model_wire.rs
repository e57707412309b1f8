use chrono::NaiveDate;
use fittrack_core::{
    decode_document, encode_document, AppData, CompletionStatus, DayOfWeek, Exercise, NewWorkout,
    PlanEntry, WeightUnit, WorkoutDay,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn seeded_document_uses_camel_case_wire_fields() {
    let data = AppData::seeded(date(2024, 1, 8));
    let json = serde_json::to_value(&data).unwrap();

    assert_eq!(json["exercises"][0]["defaultSets"], 3);
    assert_eq!(json["exercises"][0]["defaultReps"], 15);
    assert_eq!(json["exercises"][0]["muscleGroup"], "Chest");
    assert_eq!(json["workoutDays"][0]["assignedDays"][0], "Monday");
    assert_eq!(json["workoutDays"][0]["exercises"][1]["exerciseId"], "4");
    assert_eq!(json["bodyWeights"][0]["date"], "2024-01-08");
    assert_eq!(json["bodyWeights"][0]["unit"], "lbs");
    assert_eq!(json["steps"][0]["target"], 10_000);
    assert_eq!(json["settings"]["weightUnit"], "lbs");
    assert_eq!(json["settings"]["theme"], "dark");
    assert_eq!(json["settings"]["stepTarget"], 10_000);
    assert_eq!(json["settings"]["username"], "Fitness Enthusiast");
}

#[test]
fn seeded_document_has_expected_fixture_counts() {
    let data = AppData::seeded(date(2024, 1, 8));
    assert_eq!(data.exercises.len(), 5);
    assert_eq!(data.workout_days.len(), 3);
    assert_eq!(data.body_weights.len(), 1);
    assert_eq!(data.steps.len(), 1);
    assert!(data.workouts.is_empty());
    assert!(data.validate().is_ok());
}

#[test]
fn document_with_workouts_survives_encode_and_decode() {
    let today = date(2024, 2, 12);
    let mut data = AppData::seeded(today);
    let plan = data.workout_days[0].clone();
    let mut workout = NewWorkout::from_plan(today, &plan, &data.exercises).into_workout("w1".into());
    workout.exercises[0].weight = Some(42.5);
    workout.toggle_exercise("1");
    data.workouts.push(workout);
    data.settings.username = None;

    let raw = encode_document(&data).unwrap();
    let decoded = decode_document(&raw).unwrap();
    assert_eq!(decoded, data);
}

#[test]
fn document_written_by_mobile_client_decodes() {
    let raw = r#"{
        "exercises": [{"id": "1", "name": "Push-ups", "defaultSets": 3, "defaultReps": 15}],
        "workouts": [{
            "id": "1704700800000abc123xyz",
            "date": "2024-01-08",
            "dayName": "Push Day",
            "exercises": [{
                "exerciseId": "1",
                "exercise": {"id": "1", "name": "Push-ups", "defaultSets": 3, "defaultReps": 15, "muscleGroup": "Chest"},
                "sets": 3,
                "reps": 15,
                "completed": true
            }],
            "completed": true,
            "muscleGroups": ["Chest"]
        }],
        "bodyWeights": [{"id": "1", "date": "2024-01-08", "weight": 81.4, "unit": "kg"}],
        "steps": [],
        "workoutDays": [],
        "settings": {"weightUnit": "kg", "theme": "light", "stepTarget": 8000}
    }"#;

    let data = decode_document(raw).unwrap();
    assert_eq!(data.exercises[0].muscle_group, None);
    assert_eq!(data.workouts[0].exercises[0].exercise.muscle_group.as_deref(), Some("Chest"));
    assert_eq!(data.workouts[0].exercises[0].weight, None);
    assert_eq!(data.body_weights[0].unit, WeightUnit::Kg);
    assert_eq!(data.settings.username, None);
}

#[test]
fn from_plan_snapshots_exercises_and_dedupes_muscle_groups() {
    let catalog = vec![
        Exercise {
            id: "a".into(),
            name: "Bench".into(),
            default_sets: 4,
            default_reps: 8,
            muscle_group: Some("Chest".into()),
        },
        Exercise {
            id: "b".into(),
            name: "Fly".into(),
            default_sets: 3,
            default_reps: 12,
            muscle_group: Some("Chest".into()),
        },
        Exercise {
            id: "c".into(),
            name: "Dips".into(),
            default_sets: 3,
            default_reps: 10,
            muscle_group: Some("Triceps".into()),
        },
    ];
    let plan = WorkoutDay {
        id: "p".into(),
        name: "Chest & Tris".into(),
        exercises: vec![
            PlanEntry { exercise_id: "a".into(), sets: 5, reps: 5 },
            PlanEntry { exercise_id: "gone".into(), sets: 3, reps: 10 },
            PlanEntry { exercise_id: "b".into(), sets: 3, reps: 12 },
            PlanEntry { exercise_id: "c".into(), sets: 2, reps: 15 },
        ],
        assigned_days: vec![DayOfWeek::Tuesday],
    };

    let workout = NewWorkout::from_plan(date(2024, 5, 7), &plan, &catalog);

    assert_eq!(workout.day_name, "Chest & Tris");
    assert_eq!(workout.exercises.len(), 3);
    assert_eq!(workout.exercises[0].sets, 5);
    assert_eq!(workout.exercises[0].exercise, catalog[0]);
    assert_eq!(workout.muscle_groups, vec!["Chest".to_string(), "Triceps".to_string()]);
    assert!(!workout.into_workout("w".into()).completed);
}

#[test]
fn completion_status_covers_every_stage() {
    let today = date(2024, 1, 8);
    let data = AppData::seeded(today);
    let mut workout = NewWorkout::from_plan(today, &data.workout_days[0], &data.exercises)
        .into_workout("w".into());

    assert_eq!(workout.completion_status(), CompletionStatus::NotStarted);
    workout.toggle_exercise("1");
    assert_eq!(
        workout.completion_status(),
        CompletionStatus::InProgress { done: 1, total: 2 }
    );
    workout.toggle_exercise("4");
    assert_eq!(workout.completion_status(), CompletionStatus::Completed);

    workout.exercises.clear();
    assert_eq!(workout.completion_status(), CompletionStatus::NoExercises);
}
