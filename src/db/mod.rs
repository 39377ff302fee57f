mod logs;
mod migrate;
mod summaries;
mod water;

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub struct Database {
    pub(crate) conn: Connection,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
            if !path.exists() {
                OpenOptions::new()
                    .write(true)
                    .create(true)
                    .mode(0o600)
                    .open(path)?;
            } else {
                let mut perms = fs::metadata(path)?.permissions();
                if perms.mode() & 0o777 != 0o600 {
                    perms.set_mode(0o600);
                    fs::set_permissions(path, perms)?;
                }
            }
        }

        let conn = Connection::open(path)?;
        let db = Self { conn };
        migrate::run(&db.conn)?;
        tracing::debug!(path = %path.display(), "database opened");
        Ok(db)
    }

    /// Erase logs, summaries and the water counter.
    pub fn wipe(&self) -> Result<()> {
        self.conn.execute_batch(
            "DELETE FROM food_logs;
             DELETE FROM daily_summaries;
             DELETE FROM water_intake;",
        )?;
        tracing::info!("all stored data wiped");
        Ok(())
    }
}
