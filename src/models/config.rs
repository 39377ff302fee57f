use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::units::{LiquidUnit, WeightUnit};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub retention: Retention,
}

/// Display preferences. Stored values stay in grams and millilitres regardless.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub weight_unit: WeightUnit,
    #[serde(default)]
    pub liquid_unit: LiquidUnit,
    #[serde(default = "default_calorie_goal")]
    pub calorie_goal: u32,
    #[serde(default = "default_water_goal")]
    pub water_goal: u32,
}

fn default_calorie_goal() -> u32 {
    2000
}
fn default_water_goal() -> u32 {
    2500
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            weight_unit: WeightUnit::default(),
            liquid_unit: LiquidUnit::default(),
            calorie_goal: default_calorie_goal(),
            water_goal: default_water_goal(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Retention {
    /// Raw meal logs older than this many days are pruned. Summaries are kept.
    pub log_days: u32,
}

impl Default for Retention {
    fn default() -> Self {
        Self { log_days: 7 }
    }
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&path)?;
            file.write_all(contents.as_bytes())?;

            // Pre-existing files keep their old mode through open()
            let mut perms = file.metadata()?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                fs::set_permissions(&path, perms)?;
            }
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Apply a `key=value` setting. Unknown keys and invalid values are rejected.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "weight_unit" => self.preferences.weight_unit = value.parse()?,
            "liquid_unit" => self.preferences.liquid_unit = value.parse()?,
            "calorie_goal" => self.preferences.calorie_goal = parse_positive(key, value)?,
            "water_goal" => self.preferences.water_goal = parse_positive(key, value)?,
            "retention_days" => self.retention.log_days = parse_positive(key, value)?,
            _ => anyhow::bail!("unknown config key: {}", key),
        }
        Ok(())
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("NUTRILENS_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".nutrilens")
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    pub fn db_path() -> PathBuf {
        Self::data_dir().join("data.db")
    }
}

fn parse_positive(key: &str, value: &str) -> anyhow::Result<u32> {
    let n: u32 = value
        .parse()
        .map_err(|_| anyhow::anyhow!("{} must be a positive integer, got '{}'", key, value))?;
    if n == 0 {
        anyhow::bail!("{} must be greater than zero", key);
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_launch() {
        let c = Config::default();
        assert_eq!(c.preferences.weight_unit, WeightUnit::G);
        assert_eq!(c.preferences.liquid_unit, LiquidUnit::Ml);
        assert_eq!(c.preferences.calorie_goal, 2000);
        assert_eq!(c.preferences.water_goal, 2500);
        assert_eq!(c.retention.log_days, 7);
    }

    #[test]
    fn set_rejects_zero_goal_and_unknown_key() {
        let mut c = Config::default();
        assert!(c.set("calorie_goal", "0").is_err());
        assert!(c.set("calorie_goal", "abc").is_err());
        assert!(c.set("height", "180").is_err());
        c.set("calorie_goal", "1800").unwrap();
        c.set("liquid_unit", "oz").unwrap();
        assert_eq!(c.preferences.calorie_goal, 1800);
        assert_eq!(c.preferences.liquid_unit, LiquidUnit::Oz);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let c: Config = toml::from_str("[preferences]\nweight_unit = \"oz\"\n").unwrap();
        assert_eq!(c.preferences.weight_unit, WeightUnit::Oz);
        assert_eq!(c.preferences.water_goal, 2500);
        assert_eq!(c.retention.log_days, 7);
    }
}
