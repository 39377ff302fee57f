use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{DailyStats, DailySummary, FoodLog};

pub const DAY_MS: i64 = 86_400_000;

pub type Summaries = BTreeMap<NaiveDate, DailySummary>;

/// Return a copy of `summaries` with the entry for `date` replaced by `stats`.
/// Entries for other dates are untouched.
pub fn upsert_summary(summaries: &Summaries, date: NaiveDate, stats: &DailyStats) -> Summaries {
    let mut updated = summaries.clone();
    updated.insert(date, DailySummary::from_stats(date, stats));
    updated
}

/// Keep only logs newer than `window_days` before `now_ms`.
pub fn prune_older_than(logs: &[FoodLog], window_days: u32, now_ms: i64) -> Vec<FoodLog> {
    let cutoff = now_ms - i64::from(window_days) * DAY_MS;
    logs.iter()
        .filter(|log| log.timestamp >= cutoff)
        .cloned()
        .collect()
}

/// All summaries, newest date first.
pub fn sorted_desc(summaries: &Summaries) -> Vec<&DailySummary> {
    summaries.values().rev().collect()
}

/// Summaries within the last `days` calendar days (today included), newest first.
pub fn recent(summaries: &Summaries, today: NaiveDate, days: u32) -> Vec<&DailySummary> {
    if days == 0 {
        return Vec::new();
    }
    let from = today - Duration::days(i64::from(days) - 1);
    summaries.range(from..=today).rev().map(|(_, s)| s).collect()
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GridCell {
    pub date: NaiveDate,
    /// `None` means nothing was recorded that day.
    pub summary: Option<DailySummary>,
    pub over_target: bool,
}

/// One cell per day from `today` back through `days - 1` days ago, newest first.
pub fn calendar_grid(
    summaries: &Summaries,
    today: NaiveDate,
    days: u32,
    calorie_goal: u32,
) -> Vec<GridCell> {
    (0..i64::from(days))
        .map(|offset| {
            let date = today - Duration::days(offset);
            let summary = summaries.get(&date).cloned();
            let over_target = summary
                .as_ref()
                .is_some_and(|s| s.calories > f64::from(calorie_goal));
            GridCell {
                date,
                summary,
                over_target,
            }
        })
        .collect()
}
