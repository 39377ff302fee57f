use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate};
use serde_json::json;

use nutrilens::core::aggregate::log_date;
use nutrilens::core::logging::{self, NewLog};
use nutrilens::core::sync;
use nutrilens::db::Database;
use nutrilens::models::config::Config;
use nutrilens::models::{FoodLog, LogKind, NutritionData, NutritionPatch};
use nutrilens::output;
use nutrilens::output::human;

pub struct LogInput {
    pub name: Option<String>,
    pub calories: Option<f64>,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub weight: Option<String>,
    pub vitamins: Option<String>,
    pub kind: String,
    pub image_url: Option<String>,
    pub json: Option<String>,
}

impl LogInput {
    fn into_data(self) -> Result<(NutritionData, LogKind, Option<String>)> {
        let kind: LogKind = self.kind.parse()?;
        let data = match self.json {
            Some(ref json) => logging::parse_nutrition_json(json)?,
            None => {
                let name = self
                    .name
                    .ok_or_else(|| anyhow::anyhow!("a meal name is required"))?;
                let calories = self
                    .calories
                    .ok_or_else(|| anyhow::anyhow!("--calories is required"))?;
                let mut data = NutritionData::new(name, calories, self.protein, self.carbs, self.fat);
                if let Some(w) = self.weight {
                    data.estimated_weight = w;
                }
                if let Some(v) = self.vitamins.as_deref() {
                    data.vitamins = super::split_list(v);
                }
                data
            }
        };
        Ok((data, kind, self.image_url))
    }
}

/// Re-sync the day `log` falls on.
fn sync_log_day(
    db: &Database,
    config: &Config,
    clock: &DateTime<Local>,
    log: &FoodLog,
) -> Result<sync::SyncOutcome> {
    let date = log_date(log, &Local).unwrap_or_else(|| clock.date_naive());
    sync::sync_day(db, config, clock, date)
}

pub fn run(
    input: LogInput,
    date: Option<NaiveDate>,
    clock: &DateTime<Local>,
    human_flag: bool,
) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let (data, kind, image_url) = input.into_data()?;

    let timestamp = match date {
        Some(d) => {
            if !sync::is_retained(&config, clock, d) {
                anyhow::bail!(
                    "{} is outside the {}-day retention window",
                    d,
                    config.retention.log_days
                );
            }
            Some(super::noon_on(d)?.timestamp_millis())
        }
        None => None,
    };

    let log = logging::log_food(
        &db,
        NewLog {
            data,
            kind,
            image_url: image_url.as_deref(),
            timestamp,
        },
    )?;
    let outcome = sync_log_day(&db, &config, clock, &log)?;

    if human_flag {
        println!(
            "Logged: {}",
            human::format_log(&log, config.preferences.weight_unit)
        );
        println!(
            "{}: {} / {} kcal",
            outcome.date, outcome.stats.calories, config.preferences.calorie_goal
        );
    } else {
        let out = output::success(
            "log",
            json!({ "entry": log, "date": outcome.date, "day": outcome.stats }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_edit(
    id: &str,
    patch: &NutritionPatch,
    clock: &DateTime<Local>,
    human_flag: bool,
) -> Result<()> {
    if patch.is_empty() {
        anyhow::bail!("nothing to edit: pass at least one field");
    }
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let full_id = logging::resolve_id(&db, id)?
        .ok_or_else(|| anyhow::anyhow!("no meal with id: {}", id))?;
    let log = logging::edit_log(&db, &full_id, patch)?
        .ok_or_else(|| anyhow::anyhow!("no meal with id: {}", id))?;
    let outcome = sync_log_day(&db, &config, clock, &log)?;

    if human_flag {
        println!(
            "Updated: {}",
            human::format_log(&log, config.preferences.weight_unit)
        );
    } else {
        let out = output::success(
            "edit",
            json!({ "entry": log, "date": outcome.date, "day": outcome.stats }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_delete(id: &str, clock: &DateTime<Local>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let log = logging::resolve_id(&db, id)?
        .map(|full_id| db.get_log(&full_id))
        .transpose()?
        .flatten()
        .ok_or_else(|| anyhow::anyhow!("no meal with id: {}", id))?;
    let full_id = log.id.clone();
    logging::delete_log(&db, &full_id)?;
    let outcome = sync_log_day(&db, &config, clock, &log)?;

    if human_flag {
        println!("Deleted {}", full_id);
    } else {
        let out = output::success(
            "delete",
            json!({ "id": full_id, "date": outcome.date, "day": outcome.stats }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
