use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Nutrition facts for a single meal, as estimated by the nutrition source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionData {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default)]
    pub vitamins: Vec<String>,
    #[serde(alias = "estimatedWeight", default)]
    pub estimated_weight: String,
}

impl NutritionData {
    pub fn new(name: impl Into<String>, calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            name: name.into(),
            calories,
            protein,
            carbs,
            fat,
            vitamins: Vec::new(),
            estimated_weight: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    Photo,
    Manual,
    Barcode,
}

impl std::fmt::Display for LogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Photo => write!(f, "photo"),
            Self::Manual => write!(f, "manual"),
            Self::Barcode => write!(f, "barcode"),
        }
    }
}

impl FromStr for LogKind {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "photo" => Ok(Self::Photo),
            "manual" => Ok(Self::Manual),
            "barcode" => Ok(Self::Barcode),
            _ => anyhow::bail!("invalid log type: {} (expected photo/manual/barcode)", s),
        }
    }
}

/// A single logged meal. `timestamp` is epoch milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodLog {
    pub id: String,
    pub timestamp: i64,
    pub data: NutritionData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "type")]
    pub kind: LogKind,
}

impl FoodLog {
    pub fn new(data: NutritionData, kind: LogKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().timestamp_millis(),
            data,
            image_url: None,
            kind,
        }
    }

    /// Timestamp as a date-time in the given zone, if representable.
    pub fn datetime_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        DateTime::from_timestamp_millis(self.timestamp).map(|dt| dt.with_timezone(tz))
    }
}

/// Partial update merged into a log's `data` on edit. Absent fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionPatch {
    pub name: Option<String>,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub vitamins: Option<Vec<String>>,
    #[serde(alias = "estimatedWeight")]
    pub estimated_weight: Option<String>,
}

impl NutritionPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.calories.is_none()
            && self.protein.is_none()
            && self.carbs.is_none()
            && self.fat.is_none()
            && self.vitamins.is_none()
            && self.estimated_weight.is_none()
    }

    /// Return `data` with every present field of the patch applied.
    pub fn merged(&self, data: &NutritionData) -> NutritionData {
        NutritionData {
            name: self.name.clone().unwrap_or_else(|| data.name.clone()),
            calories: self.calories.unwrap_or(data.calories),
            protein: self.protein.unwrap_or(data.protein),
            carbs: self.carbs.unwrap_or(data.carbs),
            fat: self.fat.unwrap_or(data.fat),
            vitamins: self.vitamins.clone().unwrap_or_else(|| data.vitamins.clone()),
            estimated_weight: self
                .estimated_weight
                .clone()
                .unwrap_or_else(|| data.estimated_weight.clone()),
        }
    }
}
