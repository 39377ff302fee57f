pub mod completions;
pub mod config;
pub mod convert;
pub mod history;
pub mod init;
pub mod log;
pub mod reset;
pub mod status;
pub mod water;

use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Noon local time on `date`, the timestamp given to back-dated meals.
pub fn noon_on(date: NaiveDate) -> Result<DateTime<Local>> {
    date.and_hms_opt(12, 0, 0)
        .and_then(|dt| Local.from_local_datetime(&dt).earliest())
        .ok_or_else(|| anyhow::anyhow!("no local noon on {}", date))
}

pub fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}
