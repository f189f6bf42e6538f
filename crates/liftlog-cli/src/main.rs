use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use liftlog_core::ids::{ExerciseId, SetId, WorkoutId};
use liftlog_infrastructure::{ConfigService, LiftlogPaths};
use std::path::PathBuf;

mod commands;
mod context;
mod logging;

use context::AppContext;

#[derive(Parser)]
#[command(name = "liftlog")]
#[command(about = "LIFTLOG - track workouts, exercises and sets", long_about = None)]
struct Cli {
    /// Directory holding config.toml and the stored credential
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the credential
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and store the credential
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored credential
    Logout,
    /// List the exercise catalog
    Exercises {
        /// Only show one muscle group
        #[arg(long)]
        muscle_group: Option<String>,
    },
    /// Work with a workout session
    Workout {
        #[command(subcommand)]
        action: WorkoutAction,
    },
    /// Completed workouts grouped by week
    History,
}

#[derive(Subcommand)]
enum WorkoutAction {
    /// Start a new workout
    Start,
    /// Show a workout and its sets
    Show { workout_id: WorkoutId },
    /// Log a set, attaching (or creating) the exercise by name
    Log {
        workout_id: WorkoutId,
        #[arg(long)]
        exercise: String,
        /// Used when the exercise has to be created
        #[arg(long, default_value = "Full Body")]
        muscle_group: String,
        #[arg(long, allow_negative_numbers = true)]
        reps: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        weight: Option<f64>,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        effort: i64,
    },
    /// Repeat an existing set as the next set of its exercise
    Duplicate { workout_id: WorkoutId, set_id: SetId },
    /// Change the values of a set; omitted flags keep their current value
    Edit {
        workout_id: WorkoutId,
        set_id: SetId,
        #[arg(long, allow_negative_numbers = true)]
        reps: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        weight: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        effort: Option<i64>,
    },
    /// Delete a set and renumber the rest
    DeleteSet { workout_id: WorkoutId, set_id: SetId },
    /// Remove an exercise and all of its sets
    Detach {
        workout_id: WorkoutId,
        exercise_id: ExerciseId,
    },
    /// Rename a workout
    Rename { workout_id: WorkoutId, name: String },
    /// Complete a workout
    End { workout_id: WorkoutId },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{}", format!("Error: {:#}", err).red());
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = LiftlogPaths::new(cli.config_dir.as_deref())?;
    let config = ConfigService::new(paths.config_file()).load_with_env().await?;
    logging::init(&config.log_level);
    tracing::debug!("[liftlog] Using API at {}", config.base_url());

    let ctx = AppContext::new(&paths, &config)?;

    match cli.command {
        Commands::Login { email, password } => commands::auth::login(&ctx, &email, &password).await?,
        Commands::Register { email, password } => commands::auth::register(&ctx, &email, &password).await?,
        Commands::Logout => commands::auth::logout(&ctx).await?,
        Commands::Exercises { muscle_group } => commands::exercises::list(&ctx, muscle_group.as_deref()).await?,
        Commands::Workout { action } => match action {
            WorkoutAction::Start => commands::workout::start(&ctx).await?,
            WorkoutAction::Show { workout_id } => commands::workout::show(&ctx, &workout_id).await?,
            WorkoutAction::Log {
                workout_id,
                exercise,
                muscle_group,
                reps,
                weight,
                effort,
            } => {
                let input = commands::workout::SetInput {
                    reps,
                    weight,
                    effort: Some(effort),
                };
                commands::workout::log(&ctx, &workout_id, &exercise, &muscle_group, input).await?
            }
            WorkoutAction::Duplicate { workout_id, set_id } => {
                commands::workout::duplicate(&ctx, &workout_id, &set_id).await?
            }
            WorkoutAction::Edit {
                workout_id,
                set_id,
                reps,
                weight,
                effort,
            } => {
                let input = commands::workout::SetInput { reps, weight, effort };
                commands::workout::edit(&ctx, &workout_id, &set_id, input).await?
            }
            WorkoutAction::DeleteSet { workout_id, set_id } => {
                commands::workout::delete_set(&ctx, &workout_id, &set_id).await?
            }
            WorkoutAction::Detach {
                workout_id,
                exercise_id,
            } => commands::workout::detach(&ctx, &workout_id, &exercise_id).await?,
            WorkoutAction::Rename { workout_id, name } => {
                commands::workout::rename(&ctx, &workout_id, &name).await?
            }
            WorkoutAction::End { workout_id } => commands::workout::end(&ctx, &workout_id).await?,
        },
        Commands::History => commands::history::show(&ctx).await?,
    }

    Ok(())
}
