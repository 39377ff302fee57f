use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate};
use serde_json::json;

use nutrilens::core::water::WaterPreset;
use nutrilens::core::{sync, units};
use nutrilens::db::Database;
use nutrilens::models::WaterIntake;
use nutrilens::models::config::Config;
use nutrilens::output;

pub fn run(
    amount: Option<f64>,
    preset: Option<&str>,
    clock: &DateTime<Local>,
    date: NaiveDate,
    human_flag: bool,
) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let today = clock.date_naive();
    let unit = config.preferences.liquid_unit;

    let delta_ml = match (amount, preset) {
        (Some(a), _) => Some(units::from_input_volume(a, unit)),
        (None, Some(p)) => Some(p.parse::<WaterPreset>()?.ml()),
        (None, None) => None,
    };

    if let Some(delta) = delta_ml {
        if date != today {
            anyhow::bail!("water can only be logged for today ({})", today);
        }
        let current = db.get_water()?.unwrap_or_else(|| WaterIntake::empty(today));
        let updated = current.add(delta, today);
        db.put_water(&updated)?;
        tracing::info!(delta, ml = updated.ml, "water updated");
    }

    let snap = sync::snapshot(&db, &config, clock, date)?;
    let ml = snap.stats.water;
    let goal = config.preferences.water_goal;

    if human_flag {
        println!(
            "Water: {} / {}",
            units::format_volume(ml, unit),
            units::format_volume(goal, unit)
        );
    } else {
        let (value, suffix) = units::to_display_volume(ml, unit);
        let out = output::success(
            "water",
            json!({
                "date": snap.date.to_string(),
                "ml": ml,
                "goal_ml": goal,
                "display": { "value": value, "unit": suffix },
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
