mod cli;
mod cmd;

use chrono::Local;
use clap::Parser;
use cli::{Cli, Commands, ConfigAction, ConvertAction};
use nutrilens::output;
use std::process;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("NUTRILENS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let clock = Local::now();
    let date = cli.date.unwrap_or_else(|| clock.date_naive());

    let (name, result) = match cli.command {
        Commands::Init { skip } => ("init", cmd::init::run(skip)),
        Commands::Log {
            name,
            calories,
            protein,
            carbs,
            fat,
            weight,
            vitamins,
            kind,
            image_url,
            json,
        } => {
            let input = cmd::log::LogInput {
                name,
                calories,
                protein,
                carbs,
                fat,
                weight,
                vitamins,
                kind,
                image_url,
                json,
            };
            ("log", cmd::log::run(input, cli.date, &clock, cli.human))
        }
        Commands::Edit {
            id,
            name,
            calories,
            protein,
            carbs,
            fat,
            weight,
            vitamins,
        } => {
            let patch = nutrilens::models::NutritionPatch {
                name,
                calories,
                protein,
                carbs,
                fat,
                vitamins: vitamins.as_deref().map(cmd::split_list),
                estimated_weight: weight,
            };
            ("edit", cmd::log::run_edit(&id, &patch, &clock, cli.human))
        }
        Commands::Delete { id } => ("delete", cmd::log::run_delete(&id, &clock, cli.human)),
        Commands::Water { amount, preset } => (
            "water",
            cmd::water::run(amount, preset.as_deref(), &clock, date, cli.human),
        ),
        Commands::Status => ("status", cmd::status::run(&clock, date, cli.human)),
        Commands::History { days, grid } => {
            ("history", cmd::history::run(days, grid, &clock, date, cli.human))
        }
        Commands::Convert { action } => match action {
            ConvertAction::Weight { value, to } => {
                ("convert", cmd::convert::run_weight(&value, &to, cli.human))
            }
            ConvertAction::Volume { value, from, to } => (
                "convert",
                cmd::convert::run_volume(value, &from, &to, cli.human),
            ),
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => ("config", cmd::config::run_show(cli.human)),
            ConfigAction::Set { key, value } => ("config", cmd::config::run_set(&key, &value)),
        },
        Commands::Reset { yes } => ("reset", cmd::reset::run(yes, cli.human)),
        Commands::Completions { shell } => ("completions", cmd::completions::run(shell)),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        let err = output::error(name, "general_error", &format!("{:#}", e));
        eprintln!("{}", err);
        process::exit(1);
    }
}
