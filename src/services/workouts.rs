// ABOUTME: Workout lifecycle: create, update, set completion, copy and delete
// ABOUTME: Resolves members, trainers and exercises, writes sets and workout atomically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

//! # Workout lifecycle
//!
//! Every operation follows the same shape: resolve referenced records by id,
//! build or mutate the [`Workout`] aggregate in memory, then write its sets and
//! the workout row inside one transaction. Lookups happen before the
//! transaction is opened.

use std::collections::HashMap;

use chrono::{Local, NaiveDateTime, SubsecRound, Utc};
use tracing::{debug, info, instrument};

use crate::database::{
    Database, UserManager, WorkoutFilter, WorkoutManager, WorkoutSetManager,
};
use crate::dto::{
    ExerciseTemplateResponse, UserSummary, WorkoutRequest, WorkoutResponse, WorkoutSetRequest,
    WorkoutSetResponse,
};
use crate::errors::{AppError, AppResult};
use crate::models::{User, Workout, WorkoutSet};
use crate::services::ExerciseService;

/// Workout service
#[derive(Clone)]
pub struct WorkoutService {
    database: Database,
    users: UserManager,
    sets: WorkoutSetManager,
    workouts: WorkoutManager,
    exercises: ExerciseService,
}

impl WorkoutService {
    /// Create a new workout service
    #[must_use]
    pub fn new(database: Database) -> Self {
        Self {
            users: database.users(),
            sets: database.workout_sets(),
            workouts: database.workouts(),
            exercises: ExerciseService::new(database.clone()),
            database,
        }
    }

    /// Create a workout with its sets
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown member, trainer or exercise;
    /// nothing is stored in that case
    #[instrument(skip(self, request), fields(member.id = %request.member_id))]
    pub async fn create(&self, request: &WorkoutRequest) -> AppResult<Workout> {
        request.validate()?;
        self.require_user(&request.member_id, "Member").await?;
        if let Some(trainer_id) = &request.trainer_id {
            self.require_user(trainer_id, "Trainer").await?;
        }

        let mut workout = Workout::new(request.name.clone(), request.member_id.clone());
        workout.description.clone_from(&request.description);
        workout.trainer_id.clone_from(&request.trainer_id);
        workout.scheduled_date = request.scheduled_date;
        workout.notes.clone_from(&request.notes);
        for set in self.build_sets(request.sets.as_deref().unwrap_or_default()).await? {
            workout.add_set(set);
        }

        let mut tx = self.database.begin().await?;
        for set in &workout.sets {
            self.sets.insert(tx.executor()?, set).await?;
        }
        self.workouts.insert(tx.executor()?, &workout).await?;
        tx.commit().await?;

        info!(workout.id = %workout.id, sets = workout.sets.len(), "Created workout");
        Ok(workout)
    }

    /// Overwrite a workout's fields, replacing its sets when the request carries any
    ///
    /// Name, description, scheduled date and notes are always overwritten. The
    /// trainer changes only when a trainer id is given. The member and the
    /// completion state are kept.
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown workout, trainer or exercise
    #[instrument(skip(self, request), fields(workout.id = %id))]
    pub async fn update(&self, id: &str, request: &WorkoutRequest) -> AppResult<Workout> {
        request.validate()?;
        let mut workout = self.find_by_id(id).await?;

        workout.name.clone_from(&request.name);
        workout.description.clone_from(&request.description);
        workout.scheduled_date = request.scheduled_date;
        workout.notes.clone_from(&request.notes);
        if let Some(trainer_id) = &request.trainer_id {
            self.require_user(trainer_id, "Trainer").await?;
            workout.trainer_id = Some(trainer_id.clone());
        }

        let replaced = match &request.sets {
            Some(requested) => {
                let new_sets = self.build_sets(requested).await?;
                let old_ids = workout.set_ids();
                workout.sets = new_sets;
                Some(old_ids)
            }
            None => None,
        };
        workout.updated_at = Utc::now();

        let mut tx = self.database.begin().await?;
        if let Some(old_ids) = &replaced {
            let removed = self.sets.delete_many(tx.executor()?, old_ids).await?;
            debug!(removed, "Removed replaced sets");
            for set in &workout.sets {
                self.sets.insert(tx.executor()?, set).await?;
            }
        }
        self.workouts.update(tx.executor()?, &workout).await?;
        tx.commit().await?;

        info!(
            workout.id = %workout.id,
            sets_replaced = replaced.is_some(),
            "Updated workout"
        );
        Ok(workout)
    }

    /// Mark one set completed; the workout completes once every set is
    ///
    /// A set id that does not belong to the workout changes no set, but the
    /// completion flag is still recomputed and saved.
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown workout
    #[instrument(skip(self), fields(workout.id = %workout_id, set.id = %set_id))]
    pub async fn complete_set(&self, workout_id: &str, set_id: &str) -> AppResult<Workout> {
        let mut workout = self.find_by_id(workout_id).await?;
        let set = workout.complete_set(set_id, local_now());
        if set.is_none() {
            debug!("Set not part of workout, recomputing completion only");
        }
        workout.updated_at = Utc::now();

        let mut tx = self.database.begin().await?;
        if let Some(set) = &set {
            self.sets.update(tx.executor()?, set).await?;
        }
        self.workouts.update(tx.executor()?, &workout).await?;
        tx.commit().await?;

        info!(workout.completed = workout.completed, "Completed set");
        Ok(workout)
    }

    /// Mark every set and the workout completed
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown workout
    #[instrument(skip(self), fields(workout.id = %id))]
    pub async fn complete_workout(&self, id: &str) -> AppResult<Workout> {
        let mut workout = self.find_by_id(id).await?;
        workout.complete_all(local_now());
        workout.updated_at = Utc::now();

        let mut tx = self.database.begin().await?;
        for set in &workout.sets {
            self.sets.update(tx.executor()?, set).await?;
        }
        self.workouts.update(tx.executor()?, &workout).await?;
        tx.commit().await?;

        info!(sets = workout.sets.len(), "Completed workout");
        Ok(workout)
    }

    /// Copy a workout and its sets under new ids, scheduled at `scheduled_date`
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown workout
    #[instrument(skip(self), fields(workout.id = %id))]
    pub async fn copy_workout(
        &self,
        id: &str,
        scheduled_date: Option<NaiveDateTime>,
    ) -> AppResult<Workout> {
        let original = self.find_by_id(id).await?;
        let copy = original.copy_for(scheduled_date);

        let mut tx = self.database.begin().await?;
        for set in &copy.sets {
            self.sets.insert(tx.executor()?, set).await?;
        }
        self.workouts.insert(tx.executor()?, &copy).await?;
        tx.commit().await?;

        info!(copy.id = %copy.id, sets = copy.sets.len(), "Copied workout");
        Ok(copy)
    }

    /// Delete a workout and its sets
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown workout
    #[instrument(skip(self), fields(workout.id = %id))]
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let workout = self.find_by_id(id).await?;

        let mut tx = self.database.begin().await?;
        self.sets
            .delete_many(tx.executor()?, &workout.set_ids())
            .await?;
        self.workouts.delete(tx.executor()?, id).await?;
        tx.commit().await?;

        info!(sets = workout.sets.len(), "Deleted workout");
        Ok(())
    }

    /// Get a workout with its sets
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if absent
    pub async fn find_by_id(&self, id: &str) -> AppResult<Workout> {
        self.workouts
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found("Workout").with_resource_id(id))
    }

    /// Workouts of a member
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown member
    pub async fn find_by_member(&self, member_id: &str) -> AppResult<Vec<Workout>> {
        self.require_user(member_id, "Member").await?;
        self.workouts
            .list(&WorkoutFilter {
                member_id: Some(member_id.to_owned()),
                ..WorkoutFilter::default()
            })
            .await
    }

    /// Workouts assigned by a trainer
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown trainer
    pub async fn find_by_trainer(&self, trainer_id: &str) -> AppResult<Vec<Workout>> {
        self.require_user(trainer_id, "Trainer").await?;
        self.workouts
            .list(&WorkoutFilter {
                trainer_id: Some(trainer_id.to_owned()),
                ..WorkoutFilter::default()
            })
            .await
    }

    /// Workouts of a member scheduled strictly between `start` and `end`
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` when `start` is after `end`, or
    /// `RESOURCE_NOT_FOUND` for an unknown member
    pub async fn find_by_member_and_date_range(
        &self,
        member_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<Workout>> {
        check_range(start, end)?;
        self.require_user(member_id, "Member").await?;
        self.workouts
            .list(&WorkoutFilter {
                member_id: Some(member_id.to_owned()),
                scheduled_after: Some(start),
                scheduled_before: Some(end),
                ..WorkoutFilter::default()
            })
            .await
    }

    /// Workouts of a trainer scheduled strictly between `start` and `end`
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` when `start` is after `end`, or
    /// `RESOURCE_NOT_FOUND` for an unknown trainer
    pub async fn find_by_trainer_and_date_range(
        &self,
        trainer_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<Workout>> {
        check_range(start, end)?;
        self.require_user(trainer_id, "Trainer").await?;
        self.workouts
            .list(&WorkoutFilter {
                trainer_id: Some(trainer_id.to_owned()),
                scheduled_after: Some(start),
                scheduled_before: Some(end),
                ..WorkoutFilter::default()
            })
            .await
    }

    /// Workouts containing an exercise that trains a muscle group
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown muscle group
    #[instrument(skip(self))]
    pub async fn find_by_muscle_group(&self, muscle_group_id: &str) -> AppResult<Vec<Workout>> {
        if self
            .database
            .muscle_groups()
            .get(muscle_group_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found("Muscle group").with_resource_id(muscle_group_id));
        }
        self.workouts
            .list(&WorkoutFilter {
                muscle_group_id: Some(muscle_group_id.to_owned()),
                ..WorkoutFilter::default()
            })
            .await
    }

    /// Completed workouts of a member
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown member
    pub async fn find_completed(&self, member_id: &str) -> AppResult<Vec<Workout>> {
        self.find_by_completion(member_id, true).await
    }

    /// Open workouts of a member
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown member
    pub async fn find_incomplete(&self, member_id: &str) -> AppResult<Vec<Workout>> {
        self.find_by_completion(member_id, false).await
    }

    /// Build the response projection, resolving people and exercises
    ///
    /// A member or trainer that no longer resolves is left out of the
    /// projection.
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if a set's exercise no longer exists
    pub async fn to_response(&self, workout: &Workout) -> AppResult<WorkoutResponse> {
        let member = self.users.get(&workout.member_id).await?;
        let trainer = match &workout.trainer_id {
            Some(id) => self.users.get(id).await?,
            None => None,
        };

        let mut exercises: HashMap<String, ExerciseTemplateResponse> = HashMap::new();
        let mut sets = Vec::with_capacity(workout.sets.len());
        for set in &workout.sets {
            let exercise = if let Some(cached) = exercises.get(&set.exercise_id) {
                cached.clone()
            } else {
                let template = self.exercises.get(&set.exercise_id).await?;
                let projected = self.exercises.to_response(&template).await?;
                exercises.insert(set.exercise_id.clone(), projected.clone());
                projected
            };
            sets.push(WorkoutSetResponse {
                id: set.id.clone(),
                exercise,
                reps: set.reps,
                weight: set.weight,
                notes: set.notes.clone(),
                completed: set.completed,
            });
        }

        Ok(WorkoutResponse {
            id: workout.id.clone(),
            name: workout.name.clone(),
            description: workout.description.clone(),
            member: member.as_ref().map(UserSummary::from),
            trainer: trainer.as_ref().map(UserSummary::from),
            sets,
            scheduled_date: workout.scheduled_date,
            completed_date: workout.completed_date,
            completed: workout.completed,
            notes: workout.notes.clone(),
        })
    }

    async fn find_by_completion(&self, member_id: &str, completed: bool) -> AppResult<Vec<Workout>> {
        self.require_user(member_id, "Member").await?;
        self.workouts
            .list(&WorkoutFilter {
                member_id: Some(member_id.to_owned()),
                completed: Some(completed),
                ..WorkoutFilter::default()
            })
            .await
    }

    async fn require_user(&self, id: &str, label: &str) -> AppResult<User> {
        self.users
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(label).with_resource_id(id))
    }

    /// Resolve each requested exercise and build unsaved sets, in request order
    async fn build_sets(&self, requests: &[WorkoutSetRequest]) -> AppResult<Vec<WorkoutSet>> {
        let mut sets = Vec::with_capacity(requests.len());
        for request in requests {
            let exercise = self.exercises.get(&request.exercise_id).await?;
            let mut set = WorkoutSet::new(exercise.id, request.reps);
            set.weight = request.weight;
            set.notes.clone_from(&request.notes);
            sets.push(set);
        }
        Ok(sets)
    }
}

/// Local wall-clock time at the stored precision of whole seconds
fn local_now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

fn check_range(start: NaiveDateTime, end: NaiveDateTime) -> AppResult<()> {
    if start > end {
        return Err(AppError::invalid_input(format!(
            "Range start {start} is after range end {end}"
        )));
    }
    Ok(())
}
