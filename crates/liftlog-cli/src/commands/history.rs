use crate::context::AppContext;
use anyhow::Result;
use chrono::{Local, Utc};
use colored::Colorize;
use liftlog_application::HistoryService;
use std::sync::Arc;

pub async fn show(ctx: &AppContext) -> Result<()> {
    let service = HistoryService::new(Arc::clone(&ctx.gateway), ctx.credential().await?);
    let weeks = service.weekly(Utc::now().date_naive()).await?;

    if weeks.is_empty() {
        println!("No completed workouts yet");
        return Ok(());
    }

    for week in weeks {
        println!(
            "{}  {}",
            week.label.bright_magenta().bold(),
            format!("{} sets · {} lbs", week.total_sets(), week.volume()).dimmed()
        );
        for workout in &week.workouts {
            let name = workout.notes.as_deref().filter(|n| !n.is_empty()).unwrap_or("Workout");
            println!(
                "  {}  {}  {} exercises · {} sets · {} lbs",
                workout.completed_at.with_timezone(&Local).format("%b %-d, %Y · %-I:%M %p"),
                name.bold(),
                workout.exercise_count(),
                workout.total_sets(),
                workout.volume()
            );
            for exercise in &workout.exercises {
                match exercise.muscle_group {
                    Some(group) => println!("    {} ({})", exercise.name, group),
                    None => println!("    {}", exercise.name),
                }
                for set in &exercise.sets {
                    println!(
                        "      Set {}  {} reps  {} lbs  effort {}",
                        set.set_number, set.reps, set.weight, set.effort
                    );
                }
            }
        }
    }
    Ok(())
}
