//! People List Viewer - Entry Point

use clap::Parser;
use pplv::model::AppError;
use pplv::state::{SexFilter, SortField, ViewState};
use std::path::PathBuf;
use tracing::info;

/// People List Viewer - TUI for filtering, sorting, and selecting people
#[derive(Parser, Debug)]
#[command(name = "pplv")]
#[command(version)]
#[command(about = "TUI for browsing a static dataset of people")]
pub struct Args {
    /// Path to a JSON dataset (uses the embedded dataset if not provided)
    pub file: Option<PathBuf>,

    /// Start with a search query active
    #[arg(short, long)]
    pub query: Option<String>,

    /// Initial sex filter
    #[arg(long, value_parser = ["all", "m", "f"])]
    pub sex: Option<String>,

    /// Initial sort column
    #[arg(long, value_parser = ["name", "sex", "born"])]
    pub sort: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Propagate --no-color so every color check sees the same answer
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Precedence: defaults, then config file, then env vars, then CLI
    let config = {
        let config_file = pplv::config::load_config_with_precedence(args.config.clone())?;
        let merged = pplv::config::merge_config(config_file);
        let with_env = pplv::config::apply_env_overrides(merged);

        let sort_override = args.sort.as_deref().map(SortField::parse_lossy);
        pplv::config::apply_cli_overrides(with_env, args.file.clone(), sort_override)
    };

    pplv::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let store = pplv::source::load_dataset(config.dataset.as_deref())?;

    let view = ViewState {
        query: args.query.unwrap_or_default(),
        sex_filter: match args.sex.as_deref() {
            Some("m") => SexFilter::Male,
            Some("f") => SexFilter::Female,
            _ => SexFilter::All,
        },
        sort_field: config.sort_field,
        sort_order: config.sort_order,
    };

    let colors = pplv::view::ColorConfig::from_env_and_args(args.no_color);
    pplv::view::run(store, view, colors)?;

    Ok(())
}
