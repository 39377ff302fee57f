use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::params;

use crate::core::summary::Summaries;
use crate::models::DailySummary;

use super::Database;

impl Database {
    /// Write one day's summary, replacing any previous value for that date.
    pub fn put_summary(&self, s: &DailySummary) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO daily_summaries (date, calories, protein, carbs, fat)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![s.date.to_string(), s.calories, s.protein, s.carbs, s.fat],
        )?;
        Ok(())
    }

    pub fn load_summaries(&self) -> Result<Summaries> {
        let mut stmt = self
            .conn
            .prepare("SELECT date, calories, protein, carbs, fat FROM daily_summaries")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, f64>(1)?,
                row.get::<_, f64>(2)?,
                row.get::<_, f64>(3)?,
                row.get::<_, f64>(4)?,
            ))
        })?;

        let mut out = Summaries::new();
        for row in rows {
            let (date, calories, protein, carbs, fat) = row?;
            let date: NaiveDate = date.parse()?;
            out.insert(
                date,
                DailySummary {
                    date,
                    calories,
                    protein,
                    carbs,
                    fat,
                },
            );
        }
        Ok(out)
    }
}
