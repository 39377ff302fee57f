pub mod config;
pub mod food;
pub mod stats;

pub use food::{FoodLog, LogKind, NutritionData, NutritionPatch};
pub use stats::{DailyStats, DailySummary, WaterIntake};
