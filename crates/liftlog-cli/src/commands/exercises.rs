use crate::context::AppContext;
use anyhow::Result;
use colored::Colorize;
use liftlog_core::exercise::MuscleGroup;

pub async fn list(ctx: &AppContext, muscle_group: Option<&str>) -> Result<()> {
    let filter = muscle_group.map(MuscleGroup::parse).transpose()?;
    let credential = ctx.credential().await?;

    let mut exercises = ctx.gateway.list_exercises(&credential).await?;
    if let Some(group) = filter {
        exercises.retain(|e| e.muscle_group == Some(group));
    }

    if exercises.is_empty() {
        println!("No exercises");
        return Ok(());
    }
    for exercise in exercises {
        println!(
            "{:>6}  {}  {}",
            exercise.id.to_string().dimmed(),
            exercise.name.bold(),
            exercise
                .muscle_group
                .map_or_else(|| "Other".to_string(), |g| g.to_string())
                .cyan()
        );
    }
    Ok(())
}
