use anyhow::Result;
use std::io::{self, Write};

use nutrilens::db::Database;
use nutrilens::models::config::Config;

pub fn run(skip: bool) -> Result<()> {
    let mut config = Config::load().unwrap_or_default();

    if !skip {
        println!("NutriLens — Initial Setup\n");

        prompt_setting(&mut config, "Daily calorie goal (kcal)", "calorie_goal")?;
        prompt_setting(&mut config, "Daily water goal (ml)", "water_goal")?;
        prompt_setting(&mut config, "Weight unit (g/oz)", "weight_unit")?;
        prompt_setting(&mut config, "Liquid unit (ml/oz)", "liquid_unit")?;

        config.save()?;
        Database::open(&Config::db_path())?;
        println!("\nSetup complete. Data stored in {:?}", Config::data_dir());
    } else {
        config.save()?;
        Database::open(&Config::db_path())?;
        println!("Config initialized with defaults at {:?}", Config::path());
    }

    Ok(())
}

fn prompt_string(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

/// Ask until the value is accepted. Empty input keeps the current value.
fn prompt_setting(config: &mut Config, label: &str, key: &str) -> Result<()> {
    loop {
        let s = prompt_string(label)?;
        if s.is_empty() {
            return Ok(());
        }
        match config.set(key, &s) {
            Ok(()) => return Ok(()),
            Err(e) => println!("{}", e),
        }
    }
}
