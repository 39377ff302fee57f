use anyhow::Result;
use chrono::{DateTime, NaiveDate, TimeZone};
use serde::Serialize;
use std::collections::HashSet;

use crate::core::aggregate::{compute_daily_stats, log_date};
use crate::core::summary::{DAY_MS, Summaries, prune_older_than, upsert_summary};
use crate::db::Database;
use crate::models::config::Config;
use crate::models::{DailyStats, DailySummary, FoodLog};

#[derive(Debug, Serialize)]
pub struct SyncOutcome {
    pub date: NaiveDate,
    pub stats: DailyStats,
    pub summary: DailySummary,
    /// Logs dropped for falling outside the retention window.
    pub pruned: usize,
    #[serde(skip)]
    pub logs: Vec<FoodLog>,
}

/// What the read commands show for one date.
#[derive(Debug)]
pub struct Snapshot {
    pub date: NaiveDate,
    pub stats: DailyStats,
    pub summaries: Summaries,
    /// Retained logs dated on or before `date`, newest first.
    pub logs: Vec<FoodLog>,
}

/// Water in millilitres for `date`, zero if the counter belongs to another day.
pub fn water_on(db: &Database, date: NaiveDate) -> Result<u32> {
    Ok(db.get_water()?.map(|w| w.amount_on(date)).unwrap_or(0))
}

/// True while every log that can fall on `date` is still inside the retention window at `now`.
pub fn is_retained<Tz: TimeZone>(config: &Config, now: &DateTime<Tz>, date: NaiveDate) -> bool {
    let cutoff = now.timestamp_millis() - i64::from(config.retention.log_days) * DAY_MS;
    date.and_hms_opt(0, 0, 0)
        .and_then(|start| now.timezone().from_local_datetime(&start).earliest())
        .is_some_and(|start| start.timestamp_millis() >= cutoff)
}

/// Delete stored logs outside the retention window. Returns the kept logs and the count removed.
fn prune<Tz: TimeZone>(
    db: &Database,
    config: &Config,
    now: &DateTime<Tz>,
) -> Result<(Vec<FoodLog>, usize)> {
    let all = db.list_logs(None)?;
    let logs = prune_older_than(&all, config.retention.log_days, now.timestamp_millis());
    if logs.len() == all.len() {
        return Ok((logs, 0));
    }
    let kept: HashSet<&str> = logs.iter().map(|l| l.id.as_str()).collect();
    let stale: Vec<String> = all
        .iter()
        .filter(|l| !kept.contains(l.id.as_str()))
        .map(|l| l.id.clone())
        .collect();
    let removed = db.delete_logs(&stale)?;
    Ok((logs, removed))
}

/// Bring stored state up to date for the day containing `now`.
///
/// `now` is the wall clock. Drops logs older than the retention window,
/// recomputes today's totals and overwrites today's summary with them.
pub fn sync<Tz: TimeZone>(db: &Database, config: &Config, now: &DateTime<Tz>) -> Result<SyncOutcome> {
    sync_day(db, config, now, now.date_naive())
}

/// Like [`sync`], but recomputes the summary of `date` instead of today's.
///
/// A day other than today is only rewritten while all of its logs are retained.
/// Once some may have been pruned, its stored summary is returned untouched.
pub fn sync_day<Tz: TimeZone>(
    db: &Database,
    config: &Config,
    now: &DateTime<Tz>,
    date: NaiveDate,
) -> Result<SyncOutcome> {
    let (logs, pruned) = prune(db, config, now)?;
    let water = water_on(db, date)?;

    let (stats, summary) = if date == now.date_naive() || is_retained(config, now, date) {
        let stats = compute_daily_stats(&logs, date, &now.timezone(), water);
        let summary = DailySummary::from_stats(date, &stats);
        db.put_summary(&summary)?;
        (stats, summary)
    } else {
        let summary = db
            .load_summaries()?
            .remove(&date)
            .unwrap_or_else(|| DailySummary::from_stats(date, &DailyStats::default()));
        (summary.stats(water), summary)
    };

    tracing::debug!(%date, pruned, calories = stats.calories, water, "daily summary synced");

    Ok(SyncOutcome {
        date,
        stats,
        summary,
        pruned,
        logs,
    })
}

/// Read model for `date`. Today is synced first; any other date is computed
/// from stored state without writing anything.
pub fn snapshot<Tz: TimeZone>(
    db: &Database,
    config: &Config,
    now: &DateTime<Tz>,
    date: NaiveDate,
) -> Result<Snapshot> {
    let tz = now.timezone();
    let (stats, summaries, logs) = if date == now.date_naive() {
        let outcome = sync(db, config, now)?;
        (outcome.stats, db.load_summaries()?, outcome.logs)
    } else {
        let logs = prune_older_than(
            &db.list_logs(None)?,
            config.retention.log_days,
            now.timestamp_millis(),
        );
        let stored = db.load_summaries()?;
        let water = water_on(db, date)?;
        if is_retained(config, now, date) {
            let stats = compute_daily_stats(&logs, date, &tz, water);
            let logged = logs.iter().any(|l| log_date(l, &tz) == Some(date));
            let summaries = if logged || stored.contains_key(&date) {
                upsert_summary(&stored, date, &stats)
            } else {
                stored
            };
            (stats, summaries, logs)
        } else {
            let stats = stored.get(&date).map_or(
                DailyStats {
                    water,
                    ..DailyStats::default()
                },
                |s| s.stats(water),
            );
            (stats, stored, logs)
        }
    };

    let logs = logs
        .into_iter()
        .filter(|l| log_date(l, &tz).is_some_and(|d| d <= date))
        .collect();
    Ok(Snapshot {
        date,
        stats,
        summaries,
        logs,
    })
}
