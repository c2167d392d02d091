//! Staylens CLI - run the booking analytics pipeline from the terminal
//!
//! Usage:
//!   staylens report --hotel <name> [--start <date>] [--end <date>]
//!   staylens hotels
//!   staylens dump
//!
//! Examples:
//!   staylens report --hotel "Hotel A"
//!   staylens report --hotel "Hotel C" --start 2024-01-05 --end 2024-01-20 --output json
//!   staylens dump --config staylens.toml

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use staylens::dashboard::{Dashboard, DashboardFrame};
use staylens::model::DateRange;
use staylens::pipeline::filter::BookingFilter;
use staylens::sample::{generate, GeneratorConfig};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "staylens")]
#[command(about = "Staylens - revenue insights for hotel bookings")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pipeline for one hotel and date range, print KPIs and trends
    Report {
        /// Hotel to report on (must exist in the hotel dimension)
        #[arg(long)]
        hotel: String,

        /// First day of the range (defaults to the calendar start)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Last day of the range (defaults to the calendar end)
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Path to a generator config file (defaults used if not given)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "table")]
        output: OutputFormat,
    },

    /// List the hotels available for selection
    Hotels {
        /// Path to a generator config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Emit the four generated tables as JSON
    Dump {
        /// Path to a generator config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable tables
    Table,
    /// The full dashboard frame as JSON
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            hotel,
            start,
            end,
            config,
            output,
        } => cmd_report(hotel, start, end, config, output),
        Commands::Hotels { config } => cmd_hotels(config),
        Commands::Dump { config } => cmd_dump(config),
    }
}

fn load_config(path: Option<PathBuf>) -> Result<GeneratorConfig, ExitCode> {
    match path {
        Some(path) => GeneratorConfig::load(&path).map_err(|e| {
            eprintln!("Config error: {}", e);
            ExitCode::FAILURE
        }),
        None => Ok(GeneratorConfig::default()),
    }
}

fn cmd_report(
    hotel: String,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    config: Option<PathBuf>,
    output: OutputFormat,
) -> ExitCode {
    let config = match load_config(config) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let dashboard = Dashboard::from_config(&config);

    let span = match dashboard.date_span() {
        Some(span) => span,
        None => {
            eprintln!("Pipeline error: the date dimension is empty");
            return ExitCode::FAILURE;
        }
    };
    let selection = match BookingFilter::try_new(
        hotel.clone(),
        start.unwrap_or(span.start),
        end.unwrap_or(span.end),
    ) {
        Ok(selection) => selection,
        Err(e) => {
            eprintln!("Pipeline error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let frame = match dashboard.query(&selection) {
        Ok(frame) => frame,
        Err(e) => {
            eprintln!("Pipeline error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match output {
        OutputFormat::Table => {
            print_frame(&hotel, selection.range, &frame);
            ExitCode::SUCCESS
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&frame) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Serialization error: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

fn print_frame(hotel: &str, range: DateRange, frame: &DashboardFrame) {
    println!("Revenue Insights - {hotel} ({range})");
    println!();
    println!("Key Performance Indicators");
    println!("  Total Revenue:            ${:.2}", frame.kpis.total_revenue);
    println!("  Total Bookings:           {}", frame.kpis.total_bookings);
    println!(
        "  Avg Revenue per Booking:  ${:.2}",
        frame.kpis.avg_revenue_per_booking
    );
    println!("  Occupancy Rate:           {:.2}%", frame.kpis.avg_occupancy);
    println!();
    println!("Revenue by Hotel Category (all hotels)");
    for entry in &frame.categories {
        println!("  {:<10} ${:.2}", entry.category.to_string(), entry.total_revenue);
    }
    println!();
    println!("Booking Trends Over Time");
    println!("  {:<12} {:>12} {:>10}", "Date", "Revenue", "Bookings");
    for point in &frame.trend {
        println!(
            "  {:<12} {:>12.2} {:>10}",
            point.date.to_string(),
            point.total_revenue,
            point.total_bookings
        );
    }
}

fn cmd_hotels(config: Option<PathBuf>) -> ExitCode {
    let config = match load_config(config) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let data = generate(&config);
    for hotel in &data.hotels.rows {
        println!("{:<12} {}", hotel.name, hotel.category);
    }
    ExitCode::SUCCESS
}

fn cmd_dump(config: Option<PathBuf>) -> ExitCode {
    let config = match load_config(config) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let data = generate(&config);
    match serde_json::to_string_pretty(&data) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Serialization error: {}", e);
            ExitCode::FAILURE
        }
    }
}
