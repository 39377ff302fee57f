use anyhow::Result;
use chrono::{DateTime, NaiveDate, TimeZone};
use serde::Serialize;

use crate::core::sync;
use crate::core::units::{self, LiquidUnit};
use crate::db::Database;
use crate::models::config::Config;
use crate::models::{DailyStats, FoodLog};

const RECENT_LIMIT: usize = 5;

#[derive(Serialize)]
pub struct StatusData {
    pub date: NaiveDate,
    pub stats: DailyStats,
    pub calories: GoalProgress,
    pub water: WaterProgress,
    pub recent: Vec<RecentMeal>,
}

#[derive(Serialize)]
pub struct GoalProgress {
    pub goal: u32,
    pub consumed: f64,
    pub remaining: f64,
    pub percent: f64,
}

#[derive(Serialize)]
pub struct WaterProgress {
    pub goal_ml: u32,
    pub consumed_ml: u32,
    pub percent: f64,
    pub unit: LiquidUnit,
    pub display: String,
    pub goal_display: String,
}

#[derive(Serialize)]
pub struct RecentMeal {
    pub id: String,
    pub timestamp: i64,
    pub name: String,
    pub calories: f64,
    /// Estimated weight in the preferred weight unit.
    pub weight: String,
}

/// Share of `goal` reached, capped at 100.
pub fn percent_of(current: f64, goal: u32) -> f64 {
    if goal == 0 {
        return 0.0;
    }
    let pct = current / f64::from(goal) * 100.0;
    (pct.min(100.0) * 10.0).round() / 10.0
}

/// Compute the dashboard for `date`, with `now` as the wall clock.
/// Only today's view writes to the database.
pub fn compute<Tz: TimeZone>(
    db: &Database,
    config: &Config,
    now: &DateTime<Tz>,
    date: NaiveDate,
) -> Result<StatusData> {
    let snap = sync::snapshot(db, config, now, date)?;
    let prefs = &config.preferences;
    let stats = snap.stats;

    let recent = snap
        .logs
        .iter()
        .take(RECENT_LIMIT)
        .map(|log| recent_meal(log, config))
        .collect();

    Ok(StatusData {
        date: snap.date,
        stats,
        calories: GoalProgress {
            goal: prefs.calorie_goal,
            consumed: stats.calories,
            remaining: (f64::from(prefs.calorie_goal) - stats.calories).max(0.0),
            percent: percent_of(stats.calories, prefs.calorie_goal),
        },
        water: WaterProgress {
            goal_ml: prefs.water_goal,
            consumed_ml: stats.water,
            percent: percent_of(f64::from(stats.water), prefs.water_goal),
            unit: prefs.liquid_unit,
            display: units::format_volume(stats.water, prefs.liquid_unit),
            goal_display: units::format_volume(prefs.water_goal, prefs.liquid_unit),
        },
        recent,
    })
}

fn recent_meal(log: &FoodLog, config: &Config) -> RecentMeal {
    RecentMeal {
        id: log.id.clone(),
        timestamp: log.timestamp,
        name: log.data.name.clone(),
        calories: log.data.calories,
        weight: units::convert_weight(&log.data.estimated_weight, config.preferences.weight_unit),
    }
}
