use anyhow::{Context, Result};

use crate::db::Database;
use crate::models::{FoodLog, LogKind, NutritionData, NutritionPatch};

/// Input for logging a meal.
pub struct NewLog<'a> {
    pub data: NutritionData,
    pub kind: LogKind,
    pub image_url: Option<&'a str>,
    /// Epoch milliseconds; `None` means now.
    pub timestamp: Option<i64>,
}

/// Record a confirmed meal. Returns the stored log.
pub fn log_food(db: &Database, entry: NewLog<'_>) -> Result<FoodLog> {
    let mut log = FoodLog::new(entry.data, entry.kind);
    if let Some(ts) = entry.timestamp {
        log.timestamp = ts;
    }
    log.image_url = entry.image_url.map(String::from);
    db.insert_log(&log)?;
    tracing::info!(id = %log.id, kind = %log.kind, calories = log.data.calories, "meal logged");
    Ok(log)
}

/// Parse the JSON object a nutrition source returns for a meal.
pub fn parse_nutrition_json(json: &str) -> Result<NutritionData> {
    serde_json::from_str(json).context("could not parse nutrition data")
}

/// Resolve a full log id from an id or unique id prefix.
pub fn resolve_id(db: &Database, id_or_prefix: &str) -> Result<Option<String>> {
    if id_or_prefix.is_empty() {
        return Ok(None);
    }
    if db.get_log(id_or_prefix)?.is_some() {
        return Ok(Some(id_or_prefix.to_string()));
    }
    let mut ids = db.log_ids_with_prefix(id_or_prefix)?;
    match ids.len() {
        0 => Ok(None),
        1 => Ok(ids.pop()),
        _ => anyhow::bail!("ambiguous log id prefix: {}", id_or_prefix),
    }
}

/// Merge `patch` into the log's nutrition data. `None` if the id is unknown.
pub fn edit_log(db: &Database, id: &str, patch: &NutritionPatch) -> Result<Option<FoodLog>> {
    let Some(mut log) = db.get_log(id)? else {
        return Ok(None);
    };
    log.data = patch.merged(&log.data);
    db.update_log_data(id, &log.data)?;
    tracing::info!(id, "meal edited");
    Ok(Some(log))
}

pub fn delete_log(db: &Database, id: &str) -> Result<bool> {
    let removed = db.delete_log(id)?;
    if removed {
        tracing::info!(id, "meal deleted");
    }
    Ok(removed)
}
