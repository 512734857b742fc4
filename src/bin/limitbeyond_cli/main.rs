// ABOUTME: LimitBeyond CLI - command-line front end for the fitness club backend
// ABOUTME: Manages accounts, muscle groups, exercise templates and workouts over a local database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness
//!
//! Usage:
//! ```bash
//! # Create a trainer and a member
//! limitbeyond-cli user create --username coach --password secret --email coach@club.io \
//!     --first-name Casey --last-name Coach --role trainer
//! limitbeyond-cli user create --username sam --password secret --email sam@club.io \
//!     --first-name Sam --last-name Member
//!
//! # Reference data
//! limitbeyond-cli muscle-group create --name Chest
//! limitbeyond-cli exercise import exercises.json
//!
//! # Workouts (request bodies are camelCase JSON)
//! limitbeyond-cli workout create workout.json
//! limitbeyond-cli workout complete-set <workout-id> <set-id>
//! limitbeyond-cli workout copy <workout-id> --date 2025-06-01T18:00:00
//! limitbeyond-cli workout list --member <member-id> --incomplete
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use limitbeyond::config::AppConfig;
use limitbeyond::database::Database;
use limitbeyond::dto::ExerciseTemplateRequest;
use limitbeyond::errors::{AppResult, ErrorResponse};
use limitbeyond::models::Role;
use tracing::{debug, error};

use commands::user::NewUser;
use commands::workout::ListQuery;
use helpers::display::print_error;
use helpers::input::parse_date;

#[derive(Parser)]
#[command(
    name = "limitbeyond-cli",
    about = "LimitBeyond fitness club CLI",
    long_about = "Command-line front end for managing club accounts, exercise templates and workouts."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override (`sqlite:<path>` or `sqlite::memory:`)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Account management
    User {
        #[command(subcommand)]
        action: UserCommand,
    },

    /// Muscle group management
    MuscleGroup {
        #[command(subcommand)]
        action: MuscleGroupCommand,
    },

    /// Exercise template management
    Exercise {
        #[command(subcommand)]
        action: ExerciseCommand,
    },

    /// Workout lifecycle and queries
    Workout {
        #[command(subcommand)]
        action: WorkoutCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum UserCommand {
    /// Create an account
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        phone: Option<String>,
        /// Role to grant (repeatable; defaults to member)
        #[arg(long = "role")]
        roles: Vec<Role>,
    },

    /// Show an account by id or username
    Show { id: String },

    /// List accounts
    List {
        /// Only accounts holding this role
        #[arg(long)]
        role: Option<Role>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum MuscleGroupCommand {
    /// Create a muscle group
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },

    /// List muscle groups
    List,

    /// Delete a muscle group no exercise uses
    Delete { id: String },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ExerciseCommand {
    /// Create an exercise template
    Create {
        #[arg(long)]
        name: String,
        /// Primary muscle group id
        #[arg(long)]
        primary: String,
        /// Secondary muscle group id
        #[arg(long)]
        secondary: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        instructions: Option<String>,
    },

    /// Import a JSON array of templates, all or nothing
    Import { file: PathBuf },

    /// Replace a template from a JSON request file
    Update { id: String, file: PathBuf },

    /// Show a template
    Show { id: String },

    /// List templates
    List {
        /// Only templates training this muscle group
        #[arg(long)]
        muscle_group: Option<String>,
    },

    /// Delete a template no workout set uses
    Delete { id: String },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WorkoutCommand {
    /// Create a workout from a JSON request file (`-` for stdin)
    Create { file: PathBuf },

    /// Show a workout
    Show { id: String },

    /// Update a workout from a JSON request file
    Update { id: String, file: PathBuf },

    /// Mark one set completed
    CompleteSet { workout_id: String, set_id: String },

    /// Mark the whole workout completed
    Complete { id: String },

    /// Copy a workout with fresh sets
    Copy {
        id: String,
        /// New scheduled date (yyyy-MM-ddTHH:mm:ss)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDateTime>,
    },

    /// Delete a workout and its sets
    Delete { id: String },

    /// List workouts of a member or trainer, or those training a muscle group
    List {
        #[arg(long, conflicts_with = "trainer")]
        member: Option<String>,
        /// Workouts with an exercise training this muscle group
        #[arg(long, conflicts_with_all = ["member", "trainer", "from"])]
        muscle_group: Option<String>,
        #[arg(long)]
        trainer: Option<String>,
        /// Scheduled after (exclusive)
        #[arg(long, value_parser = parse_date, requires = "to")]
        from: Option<NaiveDateTime>,
        /// Scheduled before (exclusive)
        #[arg(long, value_parser = parse_date, requires = "from")]
        to: Option<NaiveDateTime>,
        /// Only completed workouts
        #[arg(long, requires = "member", conflicts_with_all = ["incomplete", "from"])]
        completed: bool,
        /// Only open workouts
        #[arg(long, requires = "member", conflicts_with = "from")]
        incomplete: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{}", e.message);
            print_error(&ErrorResponse::from(e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let mut config = AppConfig::from_env()?;
    if let Some(url) = &cli.database_url {
        config = config.with_database_url(url)?;
    }
    if cli.verbose {
        config = config.with_log_level("debug");
    }
    // A subscriber may already be installed when embedded; logging stays best effort.
    if let Err(e) = config.logging.init() {
        eprintln!("Logging disabled: {e}");
    }

    debug!(database.url = %config.database.url, "Opening database");
    let database = Database::new(&config.database).await?;

    match cli.command {
        Command::User { action } => run_user(&database, action).await,
        Command::MuscleGroup { action } => run_muscle_group(&database, action).await,
        Command::Exercise { action } => run_exercise(&database, action).await,
        Command::Workout { action } => run_workout(&database, action).await,
    }
}

async fn run_user(database: &Database, action: UserCommand) -> AppResult<()> {
    match action {
        UserCommand::Create {
            username,
            password,
            email,
            first_name,
            last_name,
            phone,
            roles,
        } => {
            let user = NewUser {
                username,
                password,
                email,
                first_name,
                last_name,
                phone_number: phone,
                roles,
            };
            commands::user::create(database, user).await
        }
        UserCommand::Show { id } => commands::user::show(database, &id).await,
        UserCommand::List { role } => commands::user::list(database, role).await,
    }
}

async fn run_muscle_group(database: &Database, action: MuscleGroupCommand) -> AppResult<()> {
    match action {
        MuscleGroupCommand::Create { name, description } => {
            commands::muscle_group::create(database, name, description).await
        }
        MuscleGroupCommand::List => commands::muscle_group::list(database).await,
        MuscleGroupCommand::Delete { id } => commands::muscle_group::delete(database, &id).await,
    }
}

async fn run_exercise(database: &Database, action: ExerciseCommand) -> AppResult<()> {
    match action {
        ExerciseCommand::Create {
            name,
            primary,
            secondary,
            description,
            instructions,
        } => {
            let request = ExerciseTemplateRequest {
                name,
                description,
                primary_muscle_group_id: primary,
                secondary_muscle_group_id: secondary,
                instructions,
            };
            commands::exercise::create(database, request).await
        }
        ExerciseCommand::Import { file } => commands::exercise::import(database, &file).await,
        ExerciseCommand::Update { id, file } => {
            commands::exercise::update(database, &id, &file).await
        }
        ExerciseCommand::Show { id } => commands::exercise::show(database, &id).await,
        ExerciseCommand::List { muscle_group } => {
            commands::exercise::list(database, muscle_group.as_deref()).await
        }
        ExerciseCommand::Delete { id } => commands::exercise::delete(database, &id).await,
    }
}

async fn run_workout(database: &Database, action: WorkoutCommand) -> AppResult<()> {
    match action {
        WorkoutCommand::Create { file } => commands::workout::create(database, &file).await,
        WorkoutCommand::Show { id } => commands::workout::show(database, &id).await,
        WorkoutCommand::Update { id, file } => {
            commands::workout::update(database, &id, &file).await
        }
        WorkoutCommand::CompleteSet { workout_id, set_id } => {
            commands::workout::complete_set(database, &workout_id, &set_id).await
        }
        WorkoutCommand::Complete { id } => commands::workout::complete(database, &id).await,
        WorkoutCommand::Copy { id, date } => commands::workout::copy(database, &id, date).await,
        WorkoutCommand::Delete { id } => commands::workout::delete(database, &id).await,
        WorkoutCommand::List {
            member,
            muscle_group,
            trainer,
            from,
            to,
            completed,
            incomplete,
        } => {
            let completion = if completed {
                Some(true)
            } else if incomplete {
                Some(false)
            } else {
                None
            };
            let query = ListQuery {
                member,
                muscle_group,
                trainer,
                from,
                to,
                completed: completion,
            };
            commands::workout::list(database, query).await
        }
    }
}
