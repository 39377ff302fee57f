/// CLI integration tests for nutrilens.
///
/// Each test spawns the compiled binary and sets `NUTRILENS_HOME` to a fresh
/// `TempDir` so runs never touch the developer's real `~/.nutrilens` data.
use assert_cmd::cargo_bin_cmd;
use chrono::{Duration, Local};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

// ── helpers ──────────────────────────────────────────────────────────────────

fn cmd_in(dir: &TempDir) -> assert_cmd::Command {
    let mut c = cargo_bin_cmd!("nutrilens");
    c.env("NUTRILENS_HOME", dir.path());
    c.env_remove("NUTRILENS_LOG");
    c
}

fn init_dir(dir: &TempDir) {
    cmd_in(dir).args(["init", "--skip"]).assert().success();
}

fn parse_json(output: &assert_cmd::assert::Assert) -> Value {
    let bytes = output.get_output().stdout.clone();
    serde_json::from_slice(&bytes).expect("stdout is not valid JSON")
}

/// Local date `days_ago` days before today, as passed to `--date`.
fn date_ago(days_ago: i64) -> String {
    (Local::now().date_naive() - Duration::days(days_ago)).to_string()
}

fn parse_stderr_json(output: &assert_cmd::assert::Assert) -> Value {
    let bytes = output.get_output().stderr.clone();
    serde_json::from_slice(&bytes).expect("stderr is not valid JSON")
}

// ── init / config ────────────────────────────────────────────────────────────

#[test]
fn test_init_skip_creates_config_and_db() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["init", "--skip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config initialized"));

    assert!(dir.path().join("config.toml").exists());
    assert!(dir.path().join("data.db").exists());
}

#[test]
fn test_config_set_and_show() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    cmd_in(&dir)
        .args(["config", "set", "calorie_goal", "1800"])
        .assert()
        .success();

    let assert = cmd_in(&dir).args(["config", "show"]).assert().success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["config"]["preferences"]["calorie_goal"], 1800);
    assert_eq!(json["data"]["config"]["preferences"]["weight_unit"], "g");
}

#[test]
fn test_config_set_rejects_zero_goal() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    let assert = cmd_in(&dir)
        .args(["config", "set", "water_goal", "0"])
        .assert()
        .failure();
    let json = parse_stderr_json(&assert);
    assert_eq!(json["status"], "error");
}

// ── log / edit / delete ──────────────────────────────────────────────────────

#[test]
fn test_log_meal_updates_today() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    let assert = cmd_in(&dir)
        .args([
            "log", "oatmeal", "--calories", "300", "--protein", "10", "--carbs", "54", "--fat",
            "5", "--weight", "250g",
        ])
        .assert()
        .success();

    let json = parse_json(&assert);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["command"], "log");
    assert_eq!(json["data"]["entry"]["data"]["name"], "oatmeal");
    assert_eq!(json["data"]["entry"]["type"], "manual");
    assert_eq!(json["data"]["date"], date_ago(0));
    assert_eq!(json["data"]["day"]["calories"], 300.0);
}

#[test]
fn test_log_from_nutrition_json() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    let payload = r#"{"name":"sushi","calories":520,"protein":24,"carbs":80,"fat":9,"vitamins":["B12"],"estimatedWeight":"300g"}"#;
    let assert = cmd_in(&dir)
        .args(["log", "--json", payload, "--kind", "photo"])
        .assert()
        .success();

    let json = parse_json(&assert);
    assert_eq!(json["data"]["entry"]["type"], "photo");
    assert_eq!(json["data"]["entry"]["data"]["estimated_weight"], "300g");
}

#[test]
fn test_log_bad_json_fails() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    let assert = cmd_in(&dir)
        .args(["log", "--json", "not-json"])
        .assert()
        .failure();
    let json = parse_stderr_json(&assert);
    assert_eq!(json["command"], "log");
}

#[test]
fn test_log_without_calories_fails() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    cmd_in(&dir).args(["log", "apple"]).assert().failure();
}

#[test]
fn test_edit_and_delete_by_prefix() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    let assert = cmd_in(&dir)
        .args(["log", "toast", "--calories", "150"])
        .assert()
        .success();
    let id = parse_json(&assert)["data"]["entry"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let assert = cmd_in(&dir)
        .args(["edit", &id[..8], "--calories", "220"])
        .assert()
        .success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["entry"]["data"]["calories"], 220.0);
    assert_eq!(json["data"]["day"]["calories"], 220.0);

    let assert = cmd_in(&dir).args(["delete", &id]).assert().success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["day"]["calories"], 0.0);

    cmd_in(&dir).args(["delete", &id]).assert().failure();
}

// ── water ────────────────────────────────────────────────────────────────────

#[test]
fn test_water_add_preset_and_undo() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    cmd_in(&dir).args(["water", "250"]).assert().success();
    cmd_in(&dir).args(["water", "--preset", "bottle"]).assert().success();
    let assert = cmd_in(&dir).args(["water", "-100"]).assert().success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["ml"], 650);

    let assert = cmd_in(&dir).args(["water", "-5000"]).assert().success();
    assert_eq!(parse_json(&assert)["data"]["ml"], 0);
}

#[test]
fn test_water_in_ounces() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    cmd_in(&dir)
        .args(["config", "set", "liquid_unit", "oz"])
        .assert()
        .success();

    let assert = cmd_in(&dir).args(["water", "8"]).assert().success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["ml"], 237);
    assert_eq!(json["data"]["display"]["unit"], "oz");
    assert_eq!(json["data"]["display"]["value"], 8.0);
}

#[test]
fn test_back_dated_water_is_rejected() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    cmd_in(&dir).args(["water", "500"]).assert().success();

    let yesterday = date_ago(1);
    cmd_in(&dir)
        .args(["--date", &yesterday, "water", "250"])
        .assert()
        .failure();
    let assert = cmd_in(&dir)
        .args(["--date", &yesterday, "water"])
        .assert()
        .success();
    assert_eq!(parse_json(&assert)["data"]["ml"], 0);

    let assert = cmd_in(&dir).arg("water").assert().success();
    assert_eq!(parse_json(&assert)["data"]["ml"], 500);
}

// ── status / history ─────────────────────────────────────────────────────────

#[test]
fn test_status_json() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    cmd_in(&dir)
        .args(["log", "burger", "--calories", "800", "--protein", "40"])
        .assert()
        .success();
    cmd_in(&dir).args(["water", "500"]).assert().success();

    let assert = cmd_in(&dir).arg("status").assert().success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["stats"]["calories"], 800.0);
    assert_eq!(json["data"]["calories"]["percent"], 40.0);
    assert_eq!(json["data"]["water"]["consumed_ml"], 500);
    assert_eq!(json["data"]["recent"].as_array().unwrap().len(), 1);
}

#[test]
fn test_status_human() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    cmd_in(&dir)
        .args(["--human", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Calories: 0 / 2000 kcal"))
        .stdout(predicate::str::contains("No meals logged yet."));
}

#[test]
fn test_history_grid_flags_over_target() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    let feast_day = date_ago(2);
    cmd_in(&dir)
        .args(["--date", &feast_day, "log", "feast", "--calories", "2600"])
        .assert()
        .success();

    let assert = cmd_in(&dir)
        .args(["history", "--grid", "--days", "30"])
        .assert()
        .success();
    let json = parse_json(&assert);
    let cells = json["data"]["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 30);
    assert_eq!(cells[0]["date"], date_ago(0));
    assert!(cells[1]["summary"].is_null());
    assert_eq!(cells[2]["date"], feast_day);
    assert_eq!(cells[2]["over_target"], true);
}

#[test]
fn test_history_recent_summaries() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    for (date, kcal) in [(date_ago(1), "1500"), (date_ago(0), "1700")] {
        cmd_in(&dir)
            .args(["--date", &date, "log", "meal", "--calories", kcal])
            .assert()
            .success();
    }

    let assert = cmd_in(&dir).arg("history").assert().success();
    let json = parse_json(&assert);
    let summaries = json["data"]["summaries"].as_array().unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0]["date"], date_ago(0));
    assert_eq!(summaries[0]["calories"], 1700.0);
    assert_eq!(json["data"]["meals"].as_array().unwrap().len(), 2);
}

#[test]
fn test_viewing_other_dates_leaves_data_alone() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    cmd_in(&dir)
        .args(["log", "curry", "--calories", "800"])
        .assert()
        .success();

    let assert = cmd_in(&dir)
        .args(["--date", "2099-01-01", "status"])
        .assert()
        .success();
    assert_eq!(parse_json(&assert)["data"]["stats"]["calories"], 0.0);
    cmd_in(&dir)
        .args(["--date", "2000-01-01", "history", "--grid"])
        .assert()
        .success();
    cmd_in(&dir)
        .args(["--date", "2000-01-01", "status"])
        .assert()
        .success();

    let assert = cmd_in(&dir).arg("status").assert().success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["stats"]["calories"], 800.0);
    assert_eq!(json["data"]["recent"].as_array().unwrap().len(), 1);

    let assert = cmd_in(&dir).args(["history", "--days", "30"]).assert().success();
    let summaries = parse_json(&assert)["data"]["summaries"].clone();
    assert_eq!(summaries.as_array().unwrap().len(), 1);
    assert_eq!(summaries[0]["calories"], 800.0);
}

#[test]
fn test_log_outside_retention_is_rejected() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);

    let assert = cmd_in(&dir)
        .args(["--date", "2000-01-01", "log", "relic", "--calories", "100"])
        .assert()
        .failure();
    let json = parse_stderr_json(&assert);
    assert!(json["error"]["message"]
        .as_str()
        .unwrap_or_default()
        .contains("retention"));
}

// ── convert / reset / completions ────────────────────────────────────────────

#[test]
fn test_convert_weight() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir)
        .args(["convert", "weight", "250g", "--to", "oz"])
        .assert()
        .success();
    assert_eq!(parse_json(&assert)["data"]["result"], "8.8oz");

    cmd_in(&dir)
        .args(["--human", "convert", "weight", "a handful", "--to", "g"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a handful = a handful"));
}

#[test]
fn test_convert_volume() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir)
        .args(["convert", "volume", "2500", "--to", "oz"])
        .assert()
        .success();
    assert_eq!(parse_json(&assert)["data"]["result"], 84.5);
}

#[test]
fn test_reset_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    cmd_in(&dir)
        .args(["log", "pie", "--calories", "400"])
        .assert()
        .success();

    cmd_in(&dir).arg("reset").assert().failure();
    cmd_in(&dir).args(["reset", "--yes"]).assert().success();

    let assert = cmd_in(&dir).arg("status").assert().success();
    assert_eq!(parse_json(&assert)["data"]["stats"]["calories"], 0.0);
}

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nutrilens"));
}
