use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const G_TO_OZ: f64 = 0.035274;
const FLOZ_TO_ML: f64 = 29.574;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    G,
    Oz,
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::G => write!(f, "g"),
            Self::Oz => write!(f, "oz"),
        }
    }
}

impl FromStr for WeightUnit {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "g" => Ok(Self::G),
            "oz" => Ok(Self::Oz),
            _ => anyhow::bail!("invalid weight unit: {} (expected g/oz)", s),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LiquidUnit {
    #[default]
    Ml,
    Oz,
}

impl std::fmt::Display for LiquidUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ml => write!(f, "ml"),
            Self::Oz => write!(f, "oz"),
        }
    }
}

impl FromStr for LiquidUnit {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "ml" => Ok(Self::Ml),
            "oz" => Ok(Self::Oz),
            _ => anyhow::bail!("invalid liquid unit: {} (expected ml/oz)", s),
        }
    }
}

/// Split a weight string like "250g", "8.8 oz" or "120" into its number and
/// lowercase unit. A missing unit means grams.
fn parse_weight(s: &str) -> Option<(f64, String)> {
    let re = Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*([a-zA-Z]+)?").ok()?;
    let caps = re.captures(s)?;
    let value: f64 = caps.get(1)?.as_str().parse().ok()?;
    let unit = caps
        .get(2)
        .map(|m| m.as_str().to_lowercase())
        .unwrap_or_else(|| "g".to_string());
    Some((value, unit))
}

/// Convert a `<number><unit>` weight string to `target` for display.
///
/// Never fails: input without a leading number, or with a unit other than
/// `g`/`oz`, comes back unchanged.
pub fn convert_weight(weight: &str, target: WeightUnit) -> String {
    let Some((value, unit)) = parse_weight(weight) else {
        return weight.to_string();
    };

    match (unit.as_str(), target) {
        ("g", WeightUnit::G) | ("oz", WeightUnit::Oz) => format!("{}{}", value, target),
        ("g", WeightUnit::Oz) => format!("{:.1}oz", round1(value * G_TO_OZ)),
        ("oz", WeightUnit::G) => format!("{}g", (value / G_TO_OZ).round()),
        _ => weight.to_string(),
    }
}

/// Millilitres to fluid ounces, one decimal.
pub fn ml_to_oz(ml: f64) -> f64 {
    round1(ml / FLOZ_TO_ML)
}

/// Fluid ounces to whole millilitres.
pub fn oz_to_ml(oz: f64) -> f64 {
    (oz * FLOZ_TO_ML).round()
}

/// Convert a volume between units, rounding for the target's display precision.
pub fn convert_volume(value: f64, from: LiquidUnit, to: LiquidUnit) -> f64 {
    match (from, to) {
        (LiquidUnit::Ml, LiquidUnit::Oz) => ml_to_oz(value),
        (LiquidUnit::Oz, LiquidUnit::Ml) => oz_to_ml(value),
        _ => value,
    }
}

/// Convert a stored millilitre value to display value + unit string.
pub fn to_display_volume(ml: u32, unit: LiquidUnit) -> (f64, &'static str) {
    match unit {
        LiquidUnit::Ml => (ml as f64, "ml"),
        LiquidUnit::Oz => (ml_to_oz(ml as f64), "oz"),
    }
}

pub fn format_volume(ml: u32, unit: LiquidUnit) -> String {
    let (value, suffix) = to_display_volume(ml, unit);
    format!("{}{}", value, suffix)
}

/// Convert user input in their liquid unit to whole millilitres.
/// Signed, so corrections like `-100` pass through.
pub fn from_input_volume(value: f64, unit: LiquidUnit) -> i64 {
    let ml = match unit {
        LiquidUnit::Ml => value.round(),
        LiquidUnit::Oz => oz_to_ml(value),
    };
    ml as i64
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
