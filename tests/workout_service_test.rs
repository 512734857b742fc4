// ABOUTME: Integration tests for the workout lifecycle service
// ABOUTME: Covers creation, set completion, copy, update, delete and member/trainer queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

//! Workout Service Tests
//!
//! Exercises `WorkoutService` against an in-memory database:
//! - sets are persisted with the workout and returned in order
//! - completion follows the sets, copies are independent
//! - unresolved references leave nothing behind

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]

mod common;

use chrono::{NaiveDate, NaiveDateTime};
use common::{
    create_exercise, create_member, create_muscle_group, seed_club, set_request, workout_request,
    Club,
};
use limitbeyond::dto::WorkoutRequest;
use limitbeyond::errors::ErrorCode;
use limitbeyond::models::Workout;
use limitbeyond::services::WorkoutService;

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .unwrap()
}

async fn create_three_set_workout(club: &Club, service: &WorkoutService) -> Workout {
    let request = workout_request(
        "Full body",
        &club.member,
        Some(&club.trainer),
        vec![
            set_request(&club.bench, 8, Some(60.0)),
            set_request(&club.squat, 5, Some(100.0)),
            set_request(&club.bench, 6, Some(65.0)),
        ],
    );
    service.create(&request).await.unwrap()
}

async fn create_scheduled(club: &Club, service: &WorkoutService, name: &str, when: NaiveDateTime) -> Workout {
    let mut request = workout_request(
        name,
        &club.member,
        Some(&club.trainer),
        vec![set_request(&club.squat, 5, None)],
    );
    request.scheduled_date = Some(when);
    service.create(&request).await.unwrap()
}

// ============================================================================
// Creation
// ============================================================================

#[tokio::test]
async fn test_create_persists_sets_in_order() {
    let club = seed_club().await.unwrap();
    let service = WorkoutService::new(club.database.clone());

    let workout = create_three_set_workout(&club, &service).await;
    assert_eq!(workout.sets.len(), 3);
    assert!(!workout.completed);
    assert!(workout.completed_date.is_none());

    let stored = service.find_by_id(&workout.id).await.unwrap();
    assert_eq!(stored.set_ids(), workout.set_ids());
    assert_eq!(stored.sets[1].exercise_id, club.squat.id);
    assert_eq!(stored.sets[1].reps, 5);
    assert_eq!(stored.sets[2].weight, Some(65.0));
    assert!(stored.sets.iter().all(|s| !s.completed));
    assert_eq!(stored.trainer_id.as_deref(), Some(club.trainer.id.as_str()));

    for set in &workout.sets {
        assert!(club.database.workout_sets().get(&set.id).await.unwrap().is_some());
    }
}

#[tokio::test]
async fn test_create_without_sets() {
    let club = seed_club().await.unwrap();
    let service = WorkoutService::new(club.database.clone());

    let request = WorkoutRequest {
        name: "Rest day walk".to_owned(),
        member_id: club.member.id.clone(),
        ..WorkoutRequest::default()
    };
    let workout = service.create(&request).await.unwrap();

    let stored = service.find_by_id(&workout.id).await.unwrap();
    assert!(stored.sets.is_empty());
    assert!(stored.trainer_id.is_none());
}

#[tokio::test]
async fn test_create_with_unknown_member_stores_nothing() {
    let club = seed_club().await.unwrap();
    let service = WorkoutService::new(club.database.clone());

    let mut request = workout_request(
        "Ghost",
        &club.member,
        None,
        vec![set_request(&club.bench, 10, None)],
    );
    request.member_id = "no-such-member".to_owned();

    let err = service.create(&request).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert!(service.find_by_member(&club.member.id).await.unwrap().is_empty());
    assert_eq!(club.database.workout_sets().count_by_exercise(&club.bench.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_with_unknown_trainer_fails() {
    let club = seed_club().await.unwrap();
    let service = WorkoutService::new(club.database.clone());

    let mut request = workout_request("Coached", &club.member, None, vec![]);
    request.trainer_id = Some("no-such-trainer".to_owned());

    let err = service.create(&request).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert!(service.find_by_member(&club.member.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_with_unknown_exercise_stores_no_sets() {
    let club = seed_club().await.unwrap();
    let service = WorkoutService::new(club.database.clone());

    let mut missing = set_request(&club.bench, 10, None);
    missing.exercise_id = "no-such-exercise".to_owned();
    let request = workout_request(
        "Broken",
        &club.member,
        None,
        vec![set_request(&club.squat, 5, None), missing],
    );

    let err = service.create(&request).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(club.database.workout_sets().count_by_exercise(&club.squat.id).await.unwrap(), 0);
    assert!(service.find_by_member(&club.member.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_rejects_blank_name() {
    let club = seed_club().await.unwrap();
    let service = WorkoutService::new(club.database.clone());

    let request = workout_request("  ", &club.member, None, vec![]);
    let err = service.create(&request).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
}

// ============================================================================
// Completion
// ============================================================================

#[tokio::test]
async fn test_completing_some_sets_keeps_workout_open() {
    let club = seed_club().await.unwrap();
    let service = WorkoutService::new(club.database.clone());
    let workout = create_three_set_workout(&club, &service).await;

    service.complete_set(&workout.id, &workout.sets[0].id).await.unwrap();
    let updated = service.complete_set(&workout.id, &workout.sets[2].id).await.unwrap();
    assert!(!updated.completed);
    assert!(updated.completed_date.is_none());

    let stored = service.find_by_id(&workout.id).await.unwrap();
    let flags: Vec<bool> = stored.sets.iter().map(|s| s.completed).collect();
    assert_eq!(flags, vec![true, false, true]);
    assert!(!stored.completed);
}

#[tokio::test]
async fn test_completing_every_set_completes_workout() {
    let club = seed_club().await.unwrap();
    let service = WorkoutService::new(club.database.clone());
    let workout = create_three_set_workout(&club, &service).await;

    let mut last = None;
    for set in &workout.sets {
        last = Some(service.complete_set(&workout.id, &set.id).await.unwrap());
    }

    let stored = service.find_by_id(&workout.id).await.unwrap();
    assert!(stored.completed);
    assert!(stored.completed_date.is_some());
    assert_eq!(stored.completed_date, last.unwrap().completed_date);
    assert!(stored.sets.iter().all(|s| s.completed));
}

#[tokio::test]
async fn test_complete_set_with_foreign_set_changes_nothing() {
    let club = seed_club().await.unwrap();
    let service = WorkoutService::new(club.database.clone());
    let first = create_three_set_workout(&club, &service).await;
    let second = create_three_set_workout(&club, &service).await;

    let unchanged = service
        .complete_set(&first.id, &second.sets[0].id)
        .await
        .unwrap();
    assert!(!unchanged.completed);
    assert!(unchanged.sets.iter().all(|s| !s.completed));

    let other = service.find_by_id(&second.id).await.unwrap();
    assert!(other.sets.iter().all(|s| !s.completed));

    let err = service.complete_set("no-such-workout", &first.sets[0].id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_complete_set_with_unknown_set_recomputes_completion() {
    let club = seed_club().await.unwrap();
    let service = WorkoutService::new(club.database.clone());
    let workout = service
        .create(&workout_request("Empty", &club.member, None, vec![]))
        .await
        .unwrap();
    assert!(!workout.completed);

    // No sets means every set is done
    let updated = service.complete_set(&workout.id, "no-such-set").await.unwrap();
    assert!(updated.completed);

    let stored = service.find_by_id(&workout.id).await.unwrap();
    assert!(stored.completed);
    assert_eq!(stored.completed_date, updated.completed_date);
}

#[tokio::test]
async fn test_complete_workout_marks_all_sets() {
    let club = seed_club().await.unwrap();
    let service = WorkoutService::new(club.database.clone());
    let workout = create_three_set_workout(&club, &service).await;

    let completed = service.complete_workout(&workout.id).await.unwrap();
    assert!(completed.completed);
    let first_date = completed.completed_date;
    assert!(first_date.is_some());
    assert_eq!(
        service.find_by_id(&workout.id).await.unwrap().completed_date,
        first_date
    );

    let again = service.complete_workout(&workout.id).await.unwrap();
    assert_eq!(again.completed_date, first_date);

    let stored = service.find_by_id(&workout.id).await.unwrap();
    assert!(stored.sets.iter().all(|s| s.completed));
    for set in &stored.sets {
        let persisted = club.database.workout_sets().get(&set.id).await.unwrap().unwrap();
        assert!(persisted.completed);
    }
}

// ============================================================================
// Copy
// ============================================================================

#[tokio::test]
async fn test_copy_creates_independent_workout() {
    let club = seed_club().await.unwrap();
    let service = WorkoutService::new(club.database.clone());
    let original = create_three_set_workout(&club, &service).await;
    service.complete_workout(&original.id).await.unwrap();

    let copy = service.copy_workout(&original.id, Some(at(20, 18))).await.unwrap();
    assert_ne!(copy.id, original.id);
    assert_eq!(copy.name, "Full body (Copy)");
    assert_eq!(copy.member_id, original.member_id);
    assert_eq!(copy.trainer_id, original.trainer_id);
    assert_eq!(copy.scheduled_date, Some(at(20, 18)));
    assert!(!copy.completed);
    assert!(copy.completed_date.is_none());
    assert_eq!(copy.sets.len(), original.sets.len());

    for (copied, source) in copy.sets.iter().zip(&original.sets) {
        assert_ne!(copied.id, source.id);
        assert_eq!(copied.exercise_id, source.exercise_id);
        assert_eq!(copied.reps, source.reps);
        assert_eq!(copied.weight, source.weight);
        assert!(!copied.completed);
    }

    // Completing the copy leaves the original's sets alone
    let fresh = service.find_by_id(&original.id).await.unwrap();
    service.complete_set(&copy.id, &copy.sets[0].id).await.unwrap();
    let original_after = service.find_by_id(&original.id).await.unwrap();
    assert_eq!(original_after.set_ids(), fresh.set_ids());
    assert!(original_after.completed);
    assert_eq!(service.find_by_member(&club.member.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_copy_unknown_workout() {
    let club = seed_club().await.unwrap();
    let service = WorkoutService::new(club.database.clone());

    let err = service.copy_workout("no-such-workout", None).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_replaces_sets() {
    let club = seed_club().await.unwrap();
    let service = WorkoutService::new(club.database.clone());
    let workout = create_three_set_workout(&club, &service).await;
    let old_ids = workout.set_ids();

    let mut request = workout_request(
        "Leg focus",
        &club.member,
        None,
        vec![set_request(&club.squat, 3, Some(120.0))],
    );
    request.notes = Some("Heavy triples".to_owned());
    let updated = service.update(&workout.id, &request).await.unwrap();

    assert_eq!(updated.id, workout.id);
    assert_eq!(updated.name, "Leg focus");
    assert_eq!(updated.sets.len(), 1);
    // No trainer in the request keeps the current one
    assert_eq!(updated.trainer_id.as_deref(), Some(club.trainer.id.as_str()));

    let stored = service.find_by_id(&workout.id).await.unwrap();
    assert_eq!(stored.sets.len(), 1);
    assert_eq!(stored.sets[0].reps, 3);
    assert_eq!(stored.notes.as_deref(), Some("Heavy triples"));
    for id in &old_ids {
        assert!(club.database.workout_sets().get(id).await.unwrap().is_none());
    }
}

#[tokio::test]
async fn test_update_without_sets_keeps_sets() {
    let club = seed_club().await.unwrap();
    let service = WorkoutService::new(club.database.clone());
    let workout = create_three_set_workout(&club, &service).await;

    let request = WorkoutRequest {
        name: "Renamed".to_owned(),
        member_id: club.member.id.clone(),
        ..WorkoutRequest::default()
    };
    service.update(&workout.id, &request).await.unwrap();

    let stored = service.find_by_id(&workout.id).await.unwrap();
    assert_eq!(stored.name, "Renamed");
    assert_eq!(stored.set_ids(), workout.set_ids());
}

#[tokio::test]
async fn test_update_keeps_member() {
    let club = seed_club().await.unwrap();
    let other = create_member(&club.database, "riley").await.unwrap();
    let service = WorkoutService::new(club.database.clone());
    let workout = create_three_set_workout(&club, &service).await;

    let request = workout_request("Moved", &other, None, vec![]);
    let updated = service.update(&workout.id, &request).await.unwrap();
    assert_eq!(updated.member_id, club.member.id);
    assert!(updated.sets.is_empty());
}

#[tokio::test]
async fn test_update_with_unknown_exercise_keeps_old_sets() {
    let club = seed_club().await.unwrap();
    let service = WorkoutService::new(club.database.clone());
    let workout = create_three_set_workout(&club, &service).await;

    let mut missing = set_request(&club.bench, 10, None);
    missing.exercise_id = "no-such-exercise".to_owned();
    let request = workout_request("Broken", &club.member, None, vec![missing]);

    let err = service.update(&workout.id, &request).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    let stored = service.find_by_id(&workout.id).await.unwrap();
    assert_eq!(stored.name, "Full body");
    assert_eq!(stored.set_ids(), workout.set_ids());
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_removes_workout_and_sets() {
    let club = seed_club().await.unwrap();
    let service = WorkoutService::new(club.database.clone());
    let workout = create_three_set_workout(&club, &service).await;

    service.delete(&workout.id).await.unwrap();

    let err = service.find_by_id(&workout.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    for set in &workout.sets {
        assert!(club.database.workout_sets().get(&set.id).await.unwrap().is_none());
    }

    let err = service.delete(&workout.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

// ============================================================================
// Queries
// ============================================================================

#[tokio::test]
async fn test_member_and_trainer_queries() {
    let club = seed_club().await.unwrap();
    let other = create_member(&club.database, "riley").await.unwrap();
    let service = WorkoutService::new(club.database.clone());

    create_scheduled(&club, &service, "Later", at(12, 9)).await;
    create_scheduled(&club, &service, "Sooner", at(10, 9)).await;
    service
        .create(&workout_request("Solo", &other, None, vec![]))
        .await
        .unwrap();

    let mine = service.find_by_member(&club.member.id).await.unwrap();
    let names: Vec<&str> = mine.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["Sooner", "Later"]);

    let coached = service.find_by_trainer(&club.trainer.id).await.unwrap();
    assert_eq!(coached.len(), 2);
    assert!(coached.iter().all(|w| w.member_id == club.member.id));

    let err = service.find_by_member("no-such-member").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_date_range_is_exclusive() {
    let club = seed_club().await.unwrap();
    let service = WorkoutService::new(club.database.clone());

    create_scheduled(&club, &service, "Start", at(10, 10)).await;
    create_scheduled(&club, &service, "Middle", at(11, 10)).await;
    create_scheduled(&club, &service, "End", at(12, 10)).await;

    let found = service
        .find_by_member_and_date_range(&club.member.id, at(10, 10), at(12, 10))
        .await
        .unwrap();
    let names: Vec<&str> = found.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["Middle"]);

    let found = service
        .find_by_trainer_and_date_range(&club.trainer.id, at(9, 0), at(13, 0))
        .await
        .unwrap();
    assert_eq!(found.len(), 3);

    let err = service
        .find_by_member_and_date_range(&club.member.id, at(12, 0), at(10, 0))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_completed_and_incomplete_queries() {
    let club = seed_club().await.unwrap();
    let service = WorkoutService::new(club.database.clone());

    let done = create_scheduled(&club, &service, "Done", at(10, 8)).await;
    let open = create_scheduled(&club, &service, "Open", at(11, 8)).await;
    service.complete_workout(&done.id).await.unwrap();

    let completed = service.find_completed(&club.member.id).await.unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, done.id);

    let incomplete = service.find_incomplete(&club.member.id).await.unwrap();
    assert_eq!(incomplete.len(), 1);
    assert_eq!(incomplete[0].id, open.id);
}

#[tokio::test]
async fn test_find_by_muscle_group_matches_primary_and_secondary() {
    let club = seed_club().await.unwrap();
    let service = WorkoutService::new(club.database.clone());
    let triceps = create_muscle_group(&club.database, "Triceps").await.unwrap();
    let calves = create_muscle_group(&club.database, "Calves").await.unwrap();
    let dips = create_exercise(&club.database, "Dips", &club.chest, Some(&triceps))
        .await
        .unwrap();

    for (name, exercises) in [
        ("Push", vec![&club.bench]),
        ("Legs", vec![&club.squat]),
        ("Full", vec![&club.squat, &club.bench]),
        ("Dips", vec![&dips]),
    ] {
        let sets = exercises.into_iter().map(|e| set_request(e, 8, None)).collect();
        service
            .create(&workout_request(name, &club.member, None, sets))
            .await
            .unwrap();
    }

    let names = |workouts: Vec<Workout>| {
        let mut names: Vec<String> = workouts.into_iter().map(|w| w.name).collect();
        names.sort();
        names
    };

    let chest = service.find_by_muscle_group(&club.chest.id).await.unwrap();
    assert_eq!(names(chest), vec!["Dips", "Full", "Push"]);

    let legs = service.find_by_muscle_group(&club.legs.id).await.unwrap();
    assert_eq!(names(legs), vec!["Full", "Legs"]);

    // Secondary muscle group counts too
    let triceps_work = service.find_by_muscle_group(&triceps.id).await.unwrap();
    assert_eq!(names(triceps_work), vec!["Dips"]);

    assert!(service.find_by_muscle_group(&calves.id).await.unwrap().is_empty());

    let err = service.find_by_muscle_group("no-such-group").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

// ============================================================================
// Projection
// ============================================================================

#[tokio::test]
async fn test_to_response_resolves_people_and_exercises() {
    let club = seed_club().await.unwrap();
    let service = WorkoutService::new(club.database.clone());
    let workout = create_three_set_workout(&club, &service).await;

    let response = service.to_response(&workout).await.unwrap();
    assert_eq!(response.id, workout.id);
    assert_eq!(response.member.as_ref().unwrap().username, "sam");
    assert_eq!(response.trainer.as_ref().unwrap().username, "casey");
    assert_eq!(response.sets.len(), 3);
    assert_eq!(response.sets[0].exercise.name, "Bench Press");
    assert_eq!(
        response.sets[0].exercise.primary_muscle_group.as_ref().unwrap().name,
        "Chest"
    );
    assert_eq!(response.sets[1].exercise.name, "Back Squat");

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["completed"], false);
    assert!(json["completedDate"].is_null());
    assert!(json["sets"][0]["exercise"]["primaryMuscleGroup"].is_object());
}
