#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use nutrilens::db::Database;
use nutrilens::models::{FoodLog, LogKind, NutritionData};
use tempfile::TempDir;

/// Create a temporary database for testing.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, db)
}

/// Epoch milliseconds for a UTC date and time.
pub fn ms(date: NaiveDate, h: u32, m: u32) -> i64 {
    let dt = date.and_time(NaiveTime::from_hms_opt(h, m, 0).unwrap());
    Utc.from_utc_datetime(&dt).timestamp_millis()
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Create a manual log with the given macros at noon UTC on `date`.
pub fn make_log(name: &str, macros: (f64, f64, f64, f64), date: NaiveDate) -> FoodLog {
    let (calories, protein, carbs, fat) = macros;
    let mut log = FoodLog::new(
        NutritionData::new(name, calories, protein, carbs, fat),
        LogKind::Manual,
    );
    log.timestamp = ms(date, 12, 0);
    log
}
