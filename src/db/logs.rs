use anyhow::Result;
use rusqlite::{OptionalExtension, Row, params};

use crate::models::{FoodLog, LogKind, NutritionData};

use super::Database;

const LOG_COLUMNS: &str = "id, timestamp, kind, image_url, name, calories, protein, carbs, fat, vitamins, estimated_weight";

struct LogRow {
    id: String,
    timestamp: i64,
    kind: String,
    image_url: Option<String>,
    name: String,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    vitamins: Option<String>,
    estimated_weight: String,
}

impl LogRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            timestamp: row.get(1)?,
            kind: row.get(2)?,
            image_url: row.get(3)?,
            name: row.get(4)?,
            calories: row.get(5)?,
            protein: row.get(6)?,
            carbs: row.get(7)?,
            fat: row.get(8)?,
            vitamins: row.get(9)?,
            estimated_weight: row.get(10)?,
        })
    }
}

fn row_to_log(r: LogRow) -> Result<FoodLog> {
    let vitamins: Vec<String> = match r.vitamins {
        Some(ref v) => serde_json::from_str(v).unwrap_or_default(),
        None => Vec::new(),
    };
    let kind: LogKind = r.kind.parse().unwrap_or(LogKind::Manual);
    Ok(FoodLog {
        id: r.id,
        timestamp: r.timestamp,
        data: NutritionData {
            name: r.name,
            calories: r.calories,
            protein: r.protein,
            carbs: r.carbs,
            fat: r.fat,
            vitamins,
            estimated_weight: r.estimated_weight,
        },
        image_url: r.image_url,
        kind,
    })
}

fn vitamins_json(data: &NutritionData) -> Result<Option<String>> {
    if data.vitamins.is_empty() {
        Ok(None)
    } else {
        Ok(Some(serde_json::to_string(&data.vitamins)?))
    }
}

impl Database {
    pub fn insert_log(&self, log: &FoodLog) -> Result<()> {
        let d = &log.data;
        self.conn.execute(
            "INSERT INTO food_logs (id, timestamp, kind, image_url, name, calories, protein, carbs, fat, vitamins, estimated_weight)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                log.id,
                log.timestamp,
                log.kind.to_string(),
                log.image_url,
                d.name,
                d.calories,
                d.protein,
                d.carbs,
                d.fat,
                vitamins_json(d)?,
                d.estimated_weight,
            ],
        )?;
        tracing::debug!(id = %log.id, name = %d.name, "food log inserted");
        Ok(())
    }

    pub fn get_log(&self, id: &str) -> Result<Option<FoodLog>> {
        let sql = format!("SELECT {} FROM food_logs WHERE id = ?1", LOG_COLUMNS);
        let row = self
            .conn
            .query_row(&sql, params![id], LogRow::read)
            .optional()?;
        row.map(row_to_log).transpose()
    }

    /// Replace the nutrition data of an existing log. Returns false if no such log.
    pub fn update_log_data(&self, id: &str, data: &NutritionData) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE food_logs SET name = ?2, calories = ?3, protein = ?4, carbs = ?5, fat = ?6,
                 vitamins = ?7, estimated_weight = ?8
             WHERE id = ?1",
            params![
                id,
                data.name,
                data.calories,
                data.protein,
                data.carbs,
                data.fat,
                vitamins_json(data)?,
                data.estimated_weight,
            ],
        )?;
        Ok(changed > 0)
    }

    pub fn delete_log(&self, id: &str) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM food_logs WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }

    /// Delete several logs in one transaction. Returns how many rows went away.
    pub fn delete_logs(&self, ids: &[String]) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let mut removed = 0;
        {
            let mut stmt = tx.prepare("DELETE FROM food_logs WHERE id = ?1")?;
            for id in ids {
                removed += stmt.execute(params![id])?;
            }
        }
        tx.commit()?;
        Ok(removed)
    }

    /// Ids starting with `prefix`, at most two (enough to detect ambiguity).
    pub fn log_ids_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let pattern = format!("{}%", prefix.replace(['%', '_'], ""));
        let mut stmt = self
            .conn
            .prepare("SELECT id FROM food_logs WHERE id LIKE ?1 ORDER BY id LIMIT 2")?;
        let rows = stmt.query_map(params![pattern], |row| row.get::<_, String>(0))?;
        let mut ids = Vec::new();
        for row in rows {
            ids.push(row?);
        }
        Ok(ids)
    }

    /// Logs newest first, optionally capped at `limit`.
    pub fn list_logs(&self, limit: Option<u32>) -> Result<Vec<FoodLog>> {
        let sql = format!(
            "SELECT {} FROM food_logs ORDER BY timestamp DESC LIMIT ?1",
            LOG_COLUMNS
        );
        let limit = limit.map(i64::from).unwrap_or(-1);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![limit], LogRow::read)?;

        let mut logs = Vec::new();
        for row in rows {
            logs.push(row_to_log(row?)?);
        }
        Ok(logs)
    }
}
