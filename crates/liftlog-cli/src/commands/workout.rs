use crate::context::AppContext;
use anyhow::{Context, Result};
use colored::Colorize;
use liftlog_application::{WorkoutSessionController, WorkoutSummary};
use liftlog_core::exercise::MuscleGroup;
use liftlog_core::ids::{ExerciseId, SetId, WorkoutId};
use liftlog_core::set::{SetDraft, SetRecord};
use std::sync::Arc;
use std::time::Duration;

/// Raw set values as typed on the command line.
pub struct SetInput {
    pub reps: Option<i64>,
    pub weight: Option<f64>,
    pub effort: Option<i64>,
}

impl SetInput {
    fn draft(&self) -> SetDraft {
        SetDraft::from_input(self.reps, self.weight, self.effort.unwrap_or(1))
    }

    /// `existing` with only the flags that were passed applied.
    fn edit_of(&self, existing: &SetRecord) -> SetDraft {
        SetDraft::from_record(existing).with_overrides(self.reps, self.weight, self.effort)
    }
}

pub async fn start(ctx: &AppContext) -> Result<()> {
    let controller = WorkoutSessionController::new(Arc::clone(&ctx.gateway), ctx.credential().await?);
    let workout = controller.start().await?;
    println!("{}", format!("Started workout {}", workout.id).green());
    Ok(())
}

pub async fn show(ctx: &AppContext, workout_id: &WorkoutId) -> Result<()> {
    let controller = ctx.open_workout(workout_id).await?;
    let summary = controller.summary().await?;
    print_summary(&summary, &controller.phase().await.to_string());
    Ok(())
}

pub async fn log(
    ctx: &AppContext,
    workout_id: &WorkoutId,
    exercise: &str,
    muscle_group: &str,
    input: SetInput,
) -> Result<()> {
    let muscle_group = MuscleGroup::parse(muscle_group)?;
    let controller = ctx.open_workout(workout_id).await?;

    let exercise = controller.select_exercise(exercise, muscle_group).await?;
    let set = controller.add_set(&exercise.id, &input.draft()).await?;
    println!("{} {}", "Logged".green(), describe_set(&exercise.name, &set));
    Ok(())
}

pub async fn duplicate(ctx: &AppContext, workout_id: &WorkoutId, set_id: &SetId) -> Result<()> {
    let controller = ctx.open_workout(workout_id).await?;
    let set = controller.duplicate_set(set_id).await?;
    println!("{} {}", "Logged".green(), describe_set(&exercise_name(&controller, &set.exercise_id).await, &set));
    Ok(())
}

pub async fn edit(ctx: &AppContext, workout_id: &WorkoutId, set_id: &SetId, input: SetInput) -> Result<()> {
    let controller = ctx.open_workout(workout_id).await?;
    let existing = controller
        .sets()
        .await
        .into_iter()
        .find(|s| s.id == *set_id)
        .with_context(|| format!("Set {} not found in workout {}", set_id, workout_id))?;
    let set = controller.edit_set(set_id, &input.edit_of(&existing)).await?;
    println!("{} {}", "Updated".green(), describe_set(&exercise_name(&controller, &set.exercise_id).await, &set));
    Ok(())
}

pub async fn delete_set(ctx: &AppContext, workout_id: &WorkoutId, set_id: &SetId) -> Result<()> {
    let controller = ctx.open_workout(workout_id).await?;
    controller.delete_set(set_id).await?;
    println!("{}", format!("Deleted set {}", set_id).green());
    Ok(())
}

pub async fn detach(ctx: &AppContext, workout_id: &WorkoutId, exercise_id: &ExerciseId) -> Result<()> {
    let controller = ctx.open_workout(workout_id).await?;
    let report = controller.detach_exercise(exercise_id).await?;

    for (set_id, err) in report.orphaned() {
        eprintln!("{}", format!("Set {} could not be deleted: {}", set_id, err).yellow());
    }
    let name = report.exercise.name.clone();
    report
        .into_result()
        .with_context(|| format!("{} removed, but some of its sets remain", name))?;
    println!("{}", format!("Removed {}", name).green());
    Ok(())
}

pub async fn rename(ctx: &AppContext, workout_id: &WorkoutId, name: &str) -> Result<()> {
    let controller = ctx.open_workout(workout_id).await?;
    let workout = controller.rename(name).await?;
    println!("{}", format!("Renamed workout {} to '{}'", workout.id, workout.name()).green());
    Ok(())
}

pub async fn end(ctx: &AppContext, workout_id: &WorkoutId) -> Result<()> {
    let controller = ctx.open_workout(workout_id).await?;
    let summary = controller.end_session().await?;
    println!("{}", "Workout complete".green().bold());
    print_summary(&summary, &controller.phase().await.to_string());
    Ok(())
}

async fn exercise_name(controller: &WorkoutSessionController, exercise_id: &ExerciseId) -> String {
    controller
        .catalog()
        .await
        .into_iter()
        .find(|e| e.id == *exercise_id)
        .map(|e| e.name)
        .unwrap_or_else(|| format!("Exercise {}", exercise_id))
}

fn describe_set(exercise: &str, set: &SetRecord) -> String {
    format!(
        "{} set {}: {} reps × {} lbs, effort {} (id {})",
        exercise, set.set_number, set.reps, set.weight, set.effort, set.id
    )
}

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

fn print_summary(summary: &WorkoutSummary, phase: &str) {
    let name = match summary.workout.name() {
        "" => "Untitled workout",
        name => name,
    };
    println!(
        "{} {}  [{}]  {}",
        name.bold(),
        format!("#{}", summary.workout.id).dimmed(),
        phase.cyan(),
        format_elapsed(summary.elapsed)
    );

    for exercise in &summary.exercises {
        let group = exercise
            .muscle_group
            .map(|g| g.to_string())
            .unwrap_or_default();
        println!(
            "  {} {} {}",
            exercise.name.bold(),
            group.cyan(),
            format!("(id {}, {} lbs)", exercise.exercise_id, exercise.volume).dimmed()
        );
        for set in &exercise.sets {
            println!(
                "    Set {}  {} reps  {} lbs  effort {}  {}",
                set.set_number,
                set.reps,
                set.weight,
                set.effort,
                format!("id {}", set.id).dimmed()
            );
        }
    }

    println!(
        "{} exercises · {} sets · {} lbs total volume",
        summary.exercise_count(),
        summary.total_sets,
        summary.aggregate_volume
    );
}
