// ABOUTME: Workout aggregate and its owned workout sets
// ABOUTME: Completion bookkeeping and deep copy of a workout with fresh identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

//! # Workout aggregate
//!
//! A [`Workout`] owns an ordered list of [`WorkoutSet`]s. Sets are stored as
//! separate records but never outlive their workout.
//!
//! The completed flag is not a standing constraint: it is recomputed after a
//! set is completed, and it only ever moves from `false` to `true`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::workouts::COPY_SUFFIX;

/// One exercise entry of a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    /// Unique identifier
    pub id: String,
    /// Referenced exercise template
    pub exercise_id: String,
    /// Target repetitions
    pub reps: u32,
    /// Optional load
    pub weight: Option<f64>,
    /// Optional notes
    pub notes: Option<String>,
    /// Whether the set has been performed
    pub completed: bool,
}

impl WorkoutSet {
    /// Create an uncompleted set with a fresh identifier
    #[must_use]
    pub fn new(exercise_id: String, reps: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            exercise_id,
            reps,
            weight: None,
            notes: None,
            completed: false,
        }
    }

    /// Same exercise, reps, weight and notes under a new identifier, not completed
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            weight: self.weight,
            notes: self.notes.clone(),
            ..Self::new(self.exercise_id.clone(), self.reps)
        }
    }
}

/// Named collection of sets assigned to a member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Unique identifier
    pub id: String,
    /// Workout name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Member performing the workout
    pub member_id: String,
    /// Trainer who assigned the workout
    pub trainer_id: Option<String>,
    /// Ordered sets
    pub sets: Vec<WorkoutSet>,
    /// When the workout is planned
    pub scheduled_date: Option<NaiveDateTime>,
    /// When the workout became completed
    pub completed_date: Option<NaiveDateTime>,
    /// Whether every set was completed
    pub completed: bool,
    /// Optional notes
    pub notes: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Workout {
    /// Create an empty workout for a member
    #[must_use]
    pub fn new(name: String, member_id: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description: None,
            member_id,
            trainer_id: None,
            sets: Vec::new(),
            scheduled_date: None,
            completed_date: None,
            completed: false,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a set
    pub fn add_set(&mut self, set: WorkoutSet) {
        self.sets.push(set);
    }

    /// Identifiers of the owned sets, in order
    #[must_use]
    pub fn set_ids(&self) -> Vec<String> {
        self.sets.iter().map(|s| s.id.clone()).collect()
    }

    /// Whether every set is completed (vacuously true with no sets)
    #[must_use]
    pub fn all_sets_completed(&self) -> bool {
        self.sets.iter().all(|s| s.completed)
    }

    /// Mark one set completed and recompute the workout's flag
    ///
    /// Returns the updated set, or `None` if no set has this id. The
    /// completion flag is recomputed either way.
    pub fn complete_set(&mut self, set_id: &str, now: NaiveDateTime) -> Option<WorkoutSet> {
        let updated = self.sets.iter_mut().find(|s| s.id == set_id).map(|set| {
            set.completed = true;
            set.clone()
        });
        self.refresh_completion(now);
        updated
    }

    /// Mark every set and the workout completed
    pub fn complete_all(&mut self, now: NaiveDateTime) {
        for set in &mut self.sets {
            set.completed = true;
        }
        self.mark_completed(now);
    }

    /// Set the completed flag when all sets are done
    pub fn refresh_completion(&mut self, now: NaiveDateTime) {
        if self.all_sets_completed() {
            self.mark_completed(now);
        }
    }

    fn mark_completed(&mut self, now: NaiveDateTime) {
        if !self.completed {
            self.completed = true;
            self.completed_date = Some(now);
        }
    }

    /// Deep copy scheduled at `scheduled_date`; the original is left untouched
    #[must_use]
    pub fn copy_for(&self, scheduled_date: Option<NaiveDateTime>) -> Self {
        let mut copy = Self::new(format!("{}{COPY_SUFFIX}", self.name), self.member_id.clone());
        copy.description.clone_from(&self.description);
        copy.trainer_id.clone_from(&self.trainer_id);
        copy.notes.clone_from(&self.notes);
        copy.scheduled_date = scheduled_date;
        copy.sets = self.sets.iter().map(WorkoutSet::duplicate).collect();
        copy
    }
}
