use chrono::{DateTime, Local};
use colored::Colorize;
use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};

use crate::core::history::{GridData, HistoryData};
use crate::core::status::StatusData;
use crate::core::units::{self, WeightUnit};
use crate::models::FoodLog;

fn local_time(ts: i64) -> String {
    DateTime::from_timestamp_millis(ts)
        .map(|dt| dt.with_timezone(&Local).format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

/// One line per meal: time, name, weight, calories and macros.
pub fn format_log(log: &FoodLog, weight_unit: WeightUnit) -> String {
    let d = &log.data;
    let mut line = format!(
        "{} | {} | {} kcal | P {}g  C {}g  F {}g",
        local_time(log.timestamp),
        d.name,
        d.calories,
        d.protein,
        d.carbs,
        d.fat
    );
    if !d.estimated_weight.is_empty() {
        line.push_str(&format!(
            "  ({})",
            units::convert_weight(&d.estimated_weight, weight_unit)
        ));
    }
    if !d.vitamins.is_empty() {
        line.push_str(&format!("  [{}]", d.vitamins.join(", ")));
    }
    line.push_str(&format!("  #{}", short_id(&log.id)));
    line
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Pretty-print the dashboard.
pub fn format_status(s: &StatusData) -> String {
    let mut out = format!("=== NutriLens — {} ===\n\n", s.date);
    out.push_str(&format!(
        "Calories: {} / {} kcal ({}%), {} left\n",
        s.calories.consumed, s.calories.goal, s.calories.percent, s.calories.remaining
    ));
    out.push_str(&format!(
        "Protein: {}g | Carbs: {}g | Fat: {}g\n",
        s.stats.protein, s.stats.carbs, s.stats.fat
    ));
    out.push_str(&format!(
        "Water: {} / {} ({}%)",
        s.water.display, s.water.goal_display, s.water.percent
    ));

    if s.recent.is_empty() {
        out.push_str("\n\nNo meals logged yet.");
    } else {
        out.push_str("\n\nRecent meals:");
        for m in &s.recent {
            let weight = if m.weight.is_empty() {
                String::new()
            } else {
                format!(" ({})", m.weight)
            };
            out.push_str(&format!(
                "\n  {} | {}{} | {} kcal",
                local_time(m.timestamp),
                m.name,
                weight,
                m.calories
            ));
        }
    }
    out
}

/// Recency view: a summary table followed by meals grouped per day.
pub fn format_history(h: &HistoryData, weight_unit: WeightUnit) -> String {
    let mut out = String::new();
    if h.summaries.is_empty() {
        out.push_str(&format!("No summaries in the last {} day(s).", h.days));
    } else {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .set_header(vec!["Date", "kcal", "Protein", "Carbs", "Fat"]);
        for s in &h.summaries {
            let kcal = if s.calories > f64::from(h.calorie_goal) {
                s.calories.to_string().red().to_string()
            } else {
                s.calories.to_string()
            };
            table.add_row(vec![
                Cell::new(s.date),
                Cell::new(kcal),
                Cell::new(format!("{}g", s.protein)),
                Cell::new(format!("{}g", s.carbs)),
                Cell::new(format!("{}g", s.fat)),
            ]);
        }
        out.push_str(&table.to_string());
    }

    for group in &h.meals {
        out.push_str(&format!("\n\n--- {} ---", group.date.format("%B %-d, %Y")));
        for log in &group.entries {
            out.push_str(&format!("\n{}", format_log(log, weight_unit)));
        }
    }
    out
}

/// Calendar grid: one row per day, empty days left blank, over-target days marked.
pub fn format_grid(g: &GridData) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_header(vec!["Date", "kcal", ""]);
    for cell in &g.cells {
        let (kcal, flag) = match &cell.summary {
            None => (String::new(), String::new()),
            Some(s) if cell.over_target => (
                s.calories.to_string().red().bold().to_string(),
                "over".red().to_string(),
            ),
            Some(s) => (s.calories.to_string().green().to_string(), String::new()),
        };
        table.add_row(vec![
            Cell::new(cell.date.format("%a %m-%d")),
            Cell::new(kcal),
            Cell::new(flag),
        ]);
    }
    format!("Goal: {} kcal\n{}", g.calorie_goal, table)
}
