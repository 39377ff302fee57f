use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{OptionalExtension, params};

use crate::models::WaterIntake;

use super::Database;

impl Database {
    pub fn get_water(&self) -> Result<Option<WaterIntake>> {
        let row = self
            .conn
            .query_row("SELECT date, ml FROM water_intake WHERE id = 1", [], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
            })
            .optional()?;
        match row {
            Some((date, ml)) => {
                let date: NaiveDate = date.parse()?;
                Ok(Some(WaterIntake {
                    date,
                    ml: u32::try_from(ml.max(0)).unwrap_or(u32::MAX),
                }))
            }
            None => Ok(None),
        }
    }

    pub fn put_water(&self, w: &WaterIntake) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO water_intake (id, date, ml) VALUES (1, ?1, ?2)",
            params![w.date.to_string(), i64::from(w.ml)],
        )?;
        Ok(())
    }
}
