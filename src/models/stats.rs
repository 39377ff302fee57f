use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Today's totals. Derived from the log set and the water counter, never stored.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DailyStats {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    /// Millilitres.
    pub water: u32,
}

/// Persisted per-date nutrition totals, kept for trend views after raw logs are pruned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl DailySummary {
    pub fn from_stats(date: NaiveDate, stats: &DailyStats) -> Self {
        Self {
            date,
            calories: stats.calories,
            protein: stats.protein,
            carbs: stats.carbs,
            fat: stats.fat,
        }
    }

    /// Back to day totals, with `water` supplied by the caller.
    pub fn stats(&self, water: u32) -> DailyStats {
        DailyStats {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            water,
        }
    }
}

/// Water counter for the day it was last written. See `core::water`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WaterIntake {
    pub date: NaiveDate,
    pub ml: u32,
}
