// ABOUTME: RAII transaction guard for multi-record writes against SQLite
// ABOUTME: Rolls back automatically when dropped without an explicit commit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

//! Transaction guard
//!
//! Workout writes touch two tables (sets and the workout document). They run
//! inside one transaction so a failure halfway leaves no orphaned sets:
//!
//! ```text
//! let mut guard = database.begin().await?;
//! sets.insert(guard.executor()?, &set).await?;
//! workouts.insert(guard.executor()?, &workout).await?;
//! guard.commit().await?;
//! ```
//!
//! All reads an operation needs must happen before the guard is opened: an
//! in-memory database has a single pooled connection, which the guard holds.

use sqlx::{Sqlite, SqliteConnection, Transaction};
use tracing::{debug, warn};

use crate::errors::{AppError, AppResult};

/// Open transaction that rolls back unless [`TransactionGuard::commit`] is called
pub struct TransactionGuard {
    transaction: Option<Transaction<'static, Sqlite>>,
}

impl TransactionGuard {
    /// Wrap a transaction obtained from `pool.begin()`
    #[must_use]
    pub const fn new(transaction: Transaction<'static, Sqlite>) -> Self {
        Self {
            transaction: Some(transaction),
        }
    }

    /// Connection to run statements on inside the transaction
    ///
    /// # Errors
    ///
    /// Returns an internal error if the guard was already committed
    pub fn executor(&mut self) -> AppResult<&mut SqliteConnection> {
        self.transaction.as_deref_mut().ok_or_else(|| {
            AppError::internal("Transaction already consumed - guard used after commit")
        })
    }

    /// Commit and consume the guard
    ///
    /// # Errors
    ///
    /// Returns a database error if the commit fails
    pub async fn commit(mut self) -> AppResult<()> {
        let tx = self
            .transaction
            .take()
            .ok_or_else(|| AppError::internal("Transaction already consumed - cannot commit"))?;
        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Transaction commit failed: {e}")))?;
        debug!("Transaction committed");
        Ok(())
    }
}

impl Drop for TransactionGuard {
    fn drop(&mut self) {
        if self.transaction.is_some() {
            warn!("Transaction dropped without commit - rolling back");
        }
    }
}
