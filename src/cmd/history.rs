use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate};

use nutrilens::core::history;
use nutrilens::db::Database;
use nutrilens::models::config::Config;
use nutrilens::output;
use nutrilens::output::human;

pub fn run(
    days: u32,
    grid: bool,
    clock: &DateTime<Local>,
    date: NaiveDate,
    human_flag: bool,
) -> Result<()> {
    if days == 0 {
        anyhow::bail!("--days must be at least 1");
    }
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;

    if grid {
        let data = history::grid(&db, &config, clock, date, days)?;
        if human_flag {
            println!("{}", human::format_grid(&data));
        } else {
            let out = output::success("history", serde_json::to_value(&data)?);
            println!("{}", serde_json::to_string(&out)?);
        }
        return Ok(());
    }

    let data = history::overview(&db, &config, clock, date, days)?;
    if human_flag {
        println!(
            "{}",
            human::format_history(&data, config.preferences.weight_unit)
        );
    } else {
        let out = output::success("history", serde_json::to_value(&data)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
