use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate};

use nutrilens::db::Database;
use nutrilens::models::config::Config;
use nutrilens::output;
use nutrilens::output::human;

pub fn run(clock: &DateTime<Local>, date: NaiveDate, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let status = nutrilens::core::status::compute(&db, &config, clock, date)?;

    if human_flag {
        println!("{}", human::format_status(&status));
    } else {
        let out = output::success("status", serde_json::to_value(&status)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
