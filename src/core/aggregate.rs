use chrono::{NaiveDate, TimeZone};

use crate::models::{DailyStats, FoodLog};

/// Calendar date of a log in `tz`. `None` for timestamps chrono cannot represent.
pub fn log_date<Tz: TimeZone>(log: &FoodLog, tz: &Tz) -> Option<NaiveDate> {
    log.datetime_in(tz).map(|dt| dt.date_naive())
}

/// Sum the macros of every log that falls on `reference_date` in `tz`.
///
/// Water is not derived from logs; `water_today` is copied through as-is.
pub fn compute_daily_stats<Tz: TimeZone>(
    logs: &[FoodLog],
    reference_date: NaiveDate,
    tz: &Tz,
    water_today: u32,
) -> DailyStats {
    logs.iter()
        .filter(|log| log_date(log, tz) == Some(reference_date))
        .fold(
            DailyStats {
                water: water_today,
                ..DailyStats::default()
            },
            |acc, log| DailyStats {
                calories: acc.calories + log.data.calories,
                protein: acc.protein + log.data.protein,
                carbs: acc.carbs + log.data.carbs,
                fat: acc.fat + log.data.fat,
                water: acc.water,
            },
        )
}
