use anyhow::Result;
use rusqlite::Connection;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS food_logs (
            id               TEXT PRIMARY KEY,
            timestamp        INTEGER NOT NULL,
            kind             TEXT NOT NULL,
            image_url        TEXT,
            name             TEXT NOT NULL,
            calories         REAL NOT NULL,
            protein          REAL NOT NULL,
            carbs            REAL NOT NULL,
            fat              REAL NOT NULL,
            vitamins         TEXT,
            estimated_weight TEXT NOT NULL DEFAULT ''
        );
        CREATE INDEX IF NOT EXISTS idx_food_logs_ts ON food_logs(timestamp);

        CREATE TABLE IF NOT EXISTS daily_summaries (
            date     TEXT PRIMARY KEY,
            calories REAL NOT NULL,
            protein  REAL NOT NULL,
            carbs    REAL NOT NULL,
            fat      REAL NOT NULL
        );

        CREATE TABLE IF NOT EXISTS water_intake (
            id   INTEGER PRIMARY KEY CHECK (id = 1),
            date TEXT NOT NULL,
            ml   INTEGER NOT NULL
        );",
    )?;
    Ok(())
}
