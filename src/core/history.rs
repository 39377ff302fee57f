use anyhow::Result;
use chrono::{DateTime, NaiveDate, TimeZone};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::aggregate::log_date;
use crate::core::summary::{self, GridCell};
use crate::core::sync;
use crate::db::Database;
use crate::models::config::Config;
use crate::models::{DailySummary, FoodLog};

#[derive(Debug, Serialize)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub entries: Vec<FoodLog>,
}

/// Group logs by calendar date in `tz`. Newest day first, newest log first within a day.
pub fn group_by_day<Tz: TimeZone>(logs: &[FoodLog], tz: &Tz) -> Vec<DayGroup> {
    let mut days: BTreeMap<NaiveDate, Vec<FoodLog>> = BTreeMap::new();
    for log in logs {
        if let Some(date) = log_date(log, tz) {
            days.entry(date).or_default().push(log.clone());
        }
    }
    days.into_iter()
        .rev()
        .map(|(date, mut entries)| {
            entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
            DayGroup { date, entries }
        })
        .collect()
}

#[derive(Serialize)]
pub struct HistoryData {
    pub date: NaiveDate,
    pub days: u32,
    pub calorie_goal: u32,
    pub summaries: Vec<DailySummary>,
    pub meals: Vec<DayGroup>,
}

#[derive(Serialize)]
pub struct GridData {
    pub date: NaiveDate,
    pub calorie_goal: u32,
    pub cells: Vec<GridCell>,
}

/// Recency view: per-day summaries and retained meals for the `days` days ending at `date`.
pub fn overview<Tz: TimeZone>(
    db: &Database,
    config: &Config,
    now: &DateTime<Tz>,
    date: NaiveDate,
    days: u32,
) -> Result<HistoryData> {
    let snap = sync::snapshot(db, config, now, date)?;
    let recent = summary::recent(&snap.summaries, date, days)
        .into_iter()
        .cloned()
        .collect();
    Ok(HistoryData {
        date,
        days,
        calorie_goal: config.preferences.calorie_goal,
        summaries: recent,
        meals: group_by_day(&snap.logs, &now.timezone()),
    })
}

/// Calendar grid view over the `days` days ending at `date`.
pub fn grid<Tz: TimeZone>(
    db: &Database,
    config: &Config,
    now: &DateTime<Tz>,
    date: NaiveDate,
    days: u32,
) -> Result<GridData> {
    let snap = sync::snapshot(db, config, now, date)?;
    let goal = config.preferences.calorie_goal;
    Ok(GridData {
        date,
        calorie_goal: goal,
        cells: summary::calendar_grid(&snap.summaries, date, days, goal),
    })
}
