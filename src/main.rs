use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use lottery_lib::config;
use lottery_lib::database;
use lottery_lib::fetcher::{DocumentSource, FileDocumentSource, SanookFetcher};
use lottery_lib::reports::{format_check_message, format_draw_summary};
use lottery_lib::service::LotteryService;
use lottery_lib::utils::{current_draw_date, generate_lottery_dates};
use lottery_lib::validation::{parse_check_message, parse_draw_date, validate_ticket};

#[derive(Parser)]
#[command(
    name = "lotto-checker",
    about = "Check Thai Government Lottery tickets against scraped draw results",
    version
)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Read saved pages (<DDMM><BE year>.html) from this directory instead of the network
    #[arg(long, global = true)]
    offline_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a ticket number
    Check {
        /// Six-digit ticket number
        number: String,
        /// Draw date (YYYY-MM-DD); defaults to the current draw
        #[arg(long)]
        date: Option<String>,
    },
    /// Check a ticket from a free-text chat message, e.g. "ตรวจ 123456 16/10/68"
    Message { text: String },
    /// Scrape one draw and store it
    Scrape {
        /// Draw date (YYYY-MM-DD)
        date: String,
        /// Re-scrape even if a complete copy is stored
        #[arg(long)]
        force: bool,
    },
    /// Show a stored draw
    Show { date: String },
    /// Scrape every past draw of a year
    Sync {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        force: bool,
    },
    /// List the most recent stored draws
    Latest {
        #[arg(long, default_value = "10")]
        limit: u32,
    },
    /// Find stored prize numbers containing these digits
    Search { digits: String },
    /// Remove a stored draw
    Delete { date: String },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(config::log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let conn = database::open_database(&config.database_url)?;
    let source: Arc<dyn DocumentSource> = match &cli.offline_dir {
        Some(dir) => Arc::new(FileDocumentSource::new(dir)),
        None => Arc::new(SanookFetcher::new(&config)?),
    };
    let service = LotteryService::new(Arc::new(conn), source)
        .with_batch_delay(Duration::from_millis(config.batch_delay_ms));
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Check { number, date } => {
            let number = validate_ticket(&number)?;
            let draw_date = match date {
                Some(date) => parse_draw_date(&date)?,
                None => current_draw_date(today),
            };
            let report = service.check_ticket(&number, draw_date).await?;
            if cli.json {
                print_json(&report)?;
            } else {
                println!("{}", format_check_message(&report, today));
            }
        }
        Commands::Message { text } => {
            let request = parse_check_message(&text, today)?;
            let report = service.check_ticket(&request.number, request.draw_date).await?;
            if cli.json {
                print_json(&report)?;
            } else {
                println!("{}", format_check_message(&report, today));
            }
        }
        Commands::Scrape { date, force } => {
            let draw_date = parse_draw_date(&date)?;
            let outcome = service.sync_draw(draw_date, force).await?;
            let record = database::get_draw(service.connection(), draw_date)?;
            if cli.json {
                print_json(&serde_json::json!({ "outcome": outcome, "draw": record }))?;
            } else {
                println!("{:?}", outcome);
                if let Some(record) = record {
                    print!("{}", format_draw_summary(&record));
                }
            }
        }
        Commands::Show { date } => {
            let draw_date = parse_draw_date(&date)?;
            match database::get_draw(service.connection(), draw_date)? {
                Some(record) if cli.json => print_json(&record)?,
                Some(record) => print!("{}", format_draw_summary(&record)),
                None => println!("ไม่พบข้อมูลงวด {}", draw_date),
            }
        }
        Commands::Sync { year, force } => {
            let dates: Vec<NaiveDate> = generate_lottery_dates(year)
                .into_iter()
                .filter(|date| *date <= today)
                .collect();
            println!("🎲 Syncing {} draws of {}...", dates.len(), year);
            let outcomes = service.sync_dates(&dates, force).await?;
            if cli.json {
                print_json(&outcomes)?;
            } else {
                for (date, outcome) in outcomes {
                    println!("{}  {:?}", date, outcome);
                }
            }
        }
        Commands::Latest { limit } => {
            let draws = database::get_latest_draws(service.connection(), limit)?;
            if cli.json {
                print_json(&draws)?;
            } else {
                for draw in draws {
                    println!("{}  {}  {}", draw.draw_date, draw.draw_number, draw.status);
                }
            }
        }
        Commands::Search { digits } => {
            let hits = database::search_number(service.connection(), digits.trim())?;
            if cli.json {
                print_json(&hits)?;
            } else if hits.is_empty() {
                println!("ไม่พบเลข {}", digits);
            } else {
                for (draw, prize) in hits {
                    println!(
                        "{}  {}  {}  #{}",
                        draw.draw_date, prize.prize_type, prize.prize_number, prize.position
                    );
                }
            }
        }
        Commands::Delete { date } => {
            let draw_date = parse_draw_date(&date)?;
            if database::delete_draw(service.connection(), draw_date)? {
                println!("🗑️ Deleted draw {}", draw_date);
            } else {
                println!("ไม่พบข้อมูลงวด {}", draw_date);
            }
        }
    }

    Ok(())
}
