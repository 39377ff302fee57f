use anyhow::Result;
use serde_json::json;

use nutrilens::db::Database;
use nutrilens::models::config::Config;
use nutrilens::output;

pub fn run(yes: bool, human_flag: bool) -> Result<()> {
    if !yes {
        anyhow::bail!("reset erases all local journal entries; pass --yes to confirm");
    }
    let db = Database::open(&Config::db_path())?;
    db.wipe()?;

    if human_flag {
        println!("All meals, summaries and water data erased.");
    } else {
        let out = output::success("reset", json!({ "wiped": true }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
