//! CLI entry point for the bikeshare explorer.
//!
//! Provides an interactive session (single-keystroke filter menus, six
//! statistics sections, an optional trips-over-time chart) and a
//! scriptable `analyze` subcommand for one-shot runs.

mod prompt;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use bikeshare_explorer::chart;
use bikeshare_explorer::loader;
use bikeshare_explorer::model::{City, Dataset, DayFilter, MonthFilter};
use bikeshare_explorer::output::{self, Report};
use bikeshare_explorer::stats::series::ChartDimension;
use bikeshare_explorer::stats::{demographics, duration, series, station, time, users};

#[derive(Parser)]
#[command(name = "bikeshare_explorer")]
#[command(about = "A tool to explore US bikeshare trip data", long_about = None)]
struct Cli {
    /// Directory containing the per-city CSV files
    #[arg(short, long, default_value = "data", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Explore the data through single-keystroke menus (the default)
    Interactive,
    /// Run one analysis pass without prompts
    Analyze {
        /// City to analyze
        #[arg(short, long, value_enum)]
        city: City,

        /// Month filter
        #[arg(short, long, value_enum, default_value = "all")]
        month: MonthFilter,

        /// Day-of-week filter
        #[arg(short = 'w', long, value_enum, default_value = "all")]
        day: DayFilter,

        /// Render the trips-over-time chart for this dimension
        #[arg(long, value_enum)]
        chart: Option<ChartDimension>,

        /// SVG path for the chart (default: trips_by_<dimension>.svg)
        #[arg(long)]
        chart_output: Option<PathBuf>,

        /// Print the report as JSON instead of text sections
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bikeshare_explorer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_explorer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Interactive) => run_interactive(&cli.data_dir),
        Some(Commands::Analyze {
            city,
            month,
            day,
            chart,
            chart_output,
            json,
        }) => run_analyze(&cli.data_dir, city, month, day, chart, chart_output, json),
    }
}

/// One full interactive session:
/// `SelectFilters → Load → ComputeStats → (OptionalChart) → {Restart | Exit}`.
/// Restart carries no state over; each pass builds a fresh dataset.
fn run_interactive(data_dir: &Path) -> Result<()> {
    loop {
        let (city, month, day) = prompt::get_filters()?;
        let dataset = loader::load(data_dir, city, month, day)?;

        print_stats_sections(&dataset);

        if city.has_demographics() {
            let demo = demographics::demographic_stats(&dataset)?;
            output::print_section("Calculating Gender and Birth Year Stats...", || {
                output::format_demographic_stats(&demo)
            });

            while let Some(dimension) = prompt::chart_choice()? {
                let lines = series::trip_series(&dataset, dimension)?;
                let path = default_chart_path(dimension);
                match chart::render(&path, dimension, &lines) {
                    Ok(()) => println!("\nChart written to {}.", path.display()),
                    Err(error) => warn!(%error, "Chart rendering failed"),
                }
            }
        } else {
            println!(
                "\nUnfortunately, Gender and Birth Year data are not available for {}.",
                city.display_name()
            );
        }

        if !prompt::confirm_restart()? {
            break;
        }
    }

    Ok(())
}

/// One non-interactive pass over the chosen city and filters.
fn run_analyze(
    data_dir: &Path,
    city: City,
    month: MonthFilter,
    day: DayFilter,
    chart_dimension: Option<ChartDimension>,
    chart_output: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let dataset = loader::load(data_dir, city, month, day)?;

    let demo = if city.has_demographics() {
        Some(demographics::demographic_stats(&dataset)?)
    } else {
        None
    };

    if json {
        let report = Report {
            city: city.display_name().to_string(),
            month: month.label().to_string(),
            day: day.label().to_string(),
            record_count: dataset.len(),
            time: time::time_stats(&dataset),
            stations: station::station_stats(&dataset),
            durations: duration::duration_stats(&dataset),
            user_types: users::user_type_stats(&dataset),
            demographics: demo,
        };
        output::print_json(&report)?;
    } else {
        print_stats_sections(&dataset);
        if let Some(demo) = &demo {
            output::print_section("Calculating Gender and Birth Year Stats...", || {
                output::format_demographic_stats(demo)
            });
        }
    }

    if let Some(dimension) = chart_dimension {
        if city.has_demographics() {
            let lines = series::trip_series(&dataset, dimension)?;
            let path = chart_output.unwrap_or_else(|| default_chart_path(dimension));
            chart::render(&path, dimension, &lines)?;
            info!(path = %path.display(), "Chart written");
        } else {
            warn!(
                city = city.display_name(),
                "Chart skipped: no demographic columns in this city's data"
            );
        }
    }

    Ok(())
}

/// The four sections available for every city.
fn print_stats_sections(dataset: &Dataset) {
    output::print_section("Calculating The Most Frequent Times of Travel...", || {
        output::format_time_stats(&time::time_stats(dataset))
    });
    output::print_section("Calculating The Most Popular Stations and Trip...", || {
        output::format_station_stats(&station::station_stats(dataset))
    });
    output::print_section("Calculating Trip Duration...", || {
        output::format_duration_stats(&duration::duration_stats(dataset))
    });
    output::print_section("Calculating User Stats...", || {
        output::format_user_type_stats(&users::user_type_stats(dataset))
    });
}

fn default_chart_path(dimension: ChartDimension) -> PathBuf {
    PathBuf::from(format!("trips_by_{}.svg", dimension.file_stem()))
}
