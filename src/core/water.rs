use chrono::NaiveDate;
use serde::Serialize;
use std::str::FromStr;

use crate::models::WaterIntake;

/// Quick-add amounts offered by the water tracker, in millilitres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterPreset {
    SmallGlass,
    Glass,
    Bottle,
    Undo,
}

impl WaterPreset {
    pub fn ml(self) -> i64 {
        match self {
            Self::SmallGlass => 150,
            Self::Glass => 250,
            Self::Bottle => 500,
            Self::Undo => -100,
        }
    }
}

impl FromStr for WaterPreset {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "small" | "small_glass" => Ok(Self::SmallGlass),
            "glass" => Ok(Self::Glass),
            "bottle" => Ok(Self::Bottle),
            "undo" => Ok(Self::Undo),
            _ => anyhow::bail!("invalid preset: {} (expected small/glass/bottle/undo)", s),
        }
    }
}

impl WaterIntake {
    pub fn empty(today: NaiveDate) -> Self {
        Self { date: today, ml: 0 }
    }

    /// Amount drunk on `today`. A counter last written on another day reads as zero.
    pub fn amount_on(&self, today: NaiveDate) -> u32 {
        if self.date == today { self.ml } else { 0 }
    }

    /// Apply `delta_ml` to today's amount, clamping at zero.
    /// A counter already written for a later day is returned unchanged.
    pub fn add(&self, delta_ml: i64, today: NaiveDate) -> Self {
        if self.date > today {
            return *self;
        }
        let next = i64::from(self.amount_on(today)) + delta_ml;
        Self {
            date: today,
            ml: next.clamp(0, i64::from(u32::MAX)) as u32,
        }
    }
}
