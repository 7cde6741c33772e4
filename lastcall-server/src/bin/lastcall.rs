use std::process::ExitCode;

use chrono::{DateTime, Local};
use clap::Parser;
use lastcall_server::config::{AppConfig, parse_reference_time};
use lastcall_server::display::{DEFAULT_ROWS, render_options};
use lastcall_server::logging::init_logging;
use lastcall_server::maps::DirectionsBackend;
use lastcall_server::planner::{OptionSelector, PlannerConfig};

#[derive(Parser)]
#[command(name = "lastcall")]
#[command(about = "Show when to leave to catch transit toward a destination")]
struct Args {
    /// Destination (defaults to the first configured one)
    destination: Option<String>,

    /// Plan as of this time, HH:MM or "YYYY-MM-DD HH:MM" (repeatable)
    #[arg(long, value_name = "TIME")]
    at: Vec<String>,

    /// Show every configured destination
    #[arg(long, conflicts_with = "destination")]
    all: bool,

    /// Options to show per destination
    #[arg(long, default_value_t = DEFAULT_ROWS as u16, value_parser = clap::value_parser!(u16).range(1..))]
    rows: u16,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Render every requested display. Returns `false` if any lookup failed.
async fn run(args: &Args) -> Result<bool, Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    let destinations: Vec<String> = if args.all {
        config.destinations.clone()
    } else {
        let destination = args
            .destination
            .clone()
            .or_else(|| config.destinations.first().cloned())
            .ok_or("no destination given and none configured")?;
        vec![destination]
    };

    let today = Local::now().date_naive();
    let times: Vec<DateTime<Local>> = if args.at.is_empty() {
        vec![Local::now()]
    } else {
        args.at
            .iter()
            .map(|text| parse_reference_time(text, today))
            .collect::<Result<_, _>>()?
    };

    let directions = DirectionsBackend::from_settings(
        config.mock_dir.as_deref(),
        config.api_key.as_deref(),
        config.timeout_secs,
    )?;
    let planner = PlannerConfig::default().with_locale(config.locale.clone());
    let selector = OptionSelector::new(&directions, &planner, &config.origin);

    let mut all_ok = true;
    for now in &times {
        for destination in &destinations {
            match selector.select_options(destination, *now).await {
                Ok(options) => {
                    println!("Displayed at {} for {}:", now.format("%H:%M"), destination);
                    print!("{}", render_options(&options, usize::from(args.rows)));
                }
                Err(e) => {
                    eprintln!("error: {destination}: {e}");
                    all_ok = false;
                }
            }
        }
    }

    Ok(all_ok)
}
