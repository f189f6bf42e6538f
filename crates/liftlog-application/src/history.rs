//! Completed-workout history grouped by week.

use chrono::{Datelike, Duration as TimeDelta, NaiveDate};
use liftlog_core::WorkoutGateway;
use liftlog_core::auth::Credential;
use liftlog_core::error::Result;
use liftlog_core::history::CompletedWorkout;
use std::sync::Arc;

pub const THIS_WEEK_LABEL: &str = "This Week";

/// Completed workouts sharing one Monday-start week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekGroup {
    pub week_start: NaiveDate,
    pub label: String,
    pub workouts: Vec<CompletedWorkout>,
}

impl WeekGroup {
    pub fn total_sets(&self) -> usize {
        self.workouts.iter().map(|w| w.total_sets()).sum()
    }

    pub fn volume(&self) -> f64 {
        self.workouts.iter().map(|w| w.volume()).sum()
    }
}

/// The Monday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - TimeDelta::days(i64::from(date.weekday().num_days_from_monday()))
}

/// "This Week" for the week containing `today`, otherwise the Monday to
/// Sunday range, e.g. "Mar 3 – Mar 9".
pub fn week_label(week_start: NaiveDate, today: NaiveDate) -> String {
    if week_start == self::week_start(today) {
        return THIS_WEEK_LABEL.to_string();
    }
    let sunday = week_start + TimeDelta::days(6);
    format!("{} – {}", week_start.format("%b %-d"), sunday.format("%b %-d"))
}

/// Groups workouts by the week of their completion date (UTC).
///
/// Groups appear in the order their first workout appears in `workouts`,
/// and workouts keep their relative order inside a group.
pub fn group_by_week(workouts: Vec<CompletedWorkout>, today: NaiveDate) -> Vec<WeekGroup> {
    let mut groups: Vec<WeekGroup> = Vec::new();
    for workout in workouts {
        let start = week_start(workout.completed_at.date_naive());
        match groups.iter_mut().find(|g| g.week_start == start) {
            Some(group) => group.workouts.push(workout),
            None => groups.push(WeekGroup {
                week_start: start,
                label: week_label(start, today),
                workouts: vec![workout],
            }),
        }
    }
    groups
}

pub struct HistoryService {
    gateway: Arc<dyn WorkoutGateway>,
    credential: Credential,
}

impl HistoryService {
    pub fn new(gateway: Arc<dyn WorkoutGateway>, credential: Credential) -> Self {
        Self { gateway, credential }
    }

    /// Completed workouts as returned by the remote store.
    pub async fn completed(&self) -> Result<Vec<CompletedWorkout>> {
        self.gateway.workout_history(&self.credential).await.inspect_err(|e| {
            tracing::warn!("[HistoryService] Failed to fetch history: {}", e);
        })
    }

    /// Completed workouts grouped by week relative to `today`.
    pub async fn weekly(&self, today: NaiveDate) -> Result<Vec<WeekGroup>> {
        let workouts = self.completed().await?;
        tracing::debug!("[HistoryService] Grouping {} completed workouts", workouts.len());
        Ok(group_by_week(workouts, today))
    }
}
