use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "nutrilens", version, about = "Meal logging and daily nutrition tracking")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Date to view, or to log a meal on (YYYY-MM-DD). Defaults to today
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directory, config and database
    Init {
        /// Skip interactive setup, use defaults
        #[arg(long)]
        skip: bool,
    },

    /// Log a meal
    Log {
        /// Name of the food or dish
        #[arg(required_unless_present = "json")]
        name: Option<String>,

        /// Total calories (kcal)
        #[arg(long, required_unless_present = "json")]
        calories: Option<f64>,

        /// Protein in grams
        #[arg(long, default_value_t = 0.0)]
        protein: f64,

        /// Carbohydrates in grams
        #[arg(long, default_value_t = 0.0)]
        carbs: f64,

        /// Fat in grams
        #[arg(long, default_value_t = 0.0)]
        fat: f64,

        /// Estimated portion weight, e.g. 250g or 8.8oz
        #[arg(long)]
        weight: Option<String>,

        /// Comma-separated vitamins and minerals
        #[arg(long)]
        vitamins: Option<String>,

        /// How the meal was captured: photo, manual or barcode
        #[arg(long, default_value = "manual")]
        kind: String,

        /// Image reference for photo logs
        #[arg(long)]
        image_url: Option<String>,

        /// Nutrition JSON object as returned by the analysis service
        #[arg(long, conflicts_with_all = ["name", "calories"])]
        json: Option<String>,
    },

    /// Edit a logged meal; only the given fields change
    Edit {
        /// Log id (or unique prefix)
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        calories: Option<f64>,
        #[arg(long)]
        protein: Option<f64>,
        #[arg(long)]
        carbs: Option<f64>,
        #[arg(long)]
        fat: Option<f64>,
        #[arg(long)]
        weight: Option<String>,
        #[arg(long)]
        vitamins: Option<String>,
    },

    /// Delete a logged meal
    Delete {
        /// Log id (or unique prefix)
        id: String,
    },

    /// Show or change today's water intake
    Water {
        /// Amount to add in the preferred liquid unit (negative to remove)
        #[arg(allow_negative_numbers = true, conflicts_with = "preset")]
        amount: Option<f64>,

        /// Quick add: small (150ml), glass (250ml), bottle (500ml), undo (-100ml)
        #[arg(long)]
        preset: Option<String>,
    },

    /// Today's dashboard
    Status,

    /// Daily summaries and recent meals
    History {
        /// Number of days to cover
        #[arg(long, default_value_t = 7)]
        days: u32,

        /// Show a calendar grid flagging days over the calorie goal
        #[arg(long)]
        grid: bool,
    },

    /// Convert weights and volumes between metric and imperial
    Convert {
        #[command(subcommand)]
        action: ConvertAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Erase all logs, summaries and water data
    Reset {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
    },

    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConvertAction {
    /// Convert a weight string such as 250g or 8.8oz
    Weight {
        value: String,
        /// Target unit: g or oz
        #[arg(long)]
        to: String,
    },
    /// Convert a volume
    Volume {
        value: f64,
        /// Source unit: ml or oz
        #[arg(long, default_value = "ml")]
        from: String,
        /// Target unit: ml or oz
        #[arg(long)]
        to: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (weight_unit, liquid_unit, calorie_goal, water_goal, retention_days)
        key: String,
        /// Config value
        value: String,
    },
}
