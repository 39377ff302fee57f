use anyhow::Result;
use serde_json::json;

use nutrilens::core::units::{self, LiquidUnit, WeightUnit};
use nutrilens::output;

pub fn run_weight(value: &str, to: &str, human_flag: bool) -> Result<()> {
    let target: WeightUnit = to.parse()?;
    let converted = units::convert_weight(value, target);

    if human_flag {
        println!("{} = {}", value, converted);
    } else {
        let out = output::success(
            "convert",
            json!({ "input": value, "unit": target, "result": converted }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_volume(value: f64, from: &str, to: &str, human_flag: bool) -> Result<()> {
    let from: LiquidUnit = from.parse()?;
    let to: LiquidUnit = to.parse()?;
    let converted = units::convert_volume(value, from, to);

    if human_flag {
        println!("{}{} = {}{}", value, from, converted, to);
    } else {
        let out = output::success(
            "convert",
            json!({ "input": value, "from": from, "unit": to, "result": converted }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
