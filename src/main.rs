mod app;

use app::{App, OutputFormat};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use recall::{Clock, Locale, Scheduler, SchedulerConfig, SimulatedClock, SystemClock};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "recall",
    about = "Spaced repetition practice for interview questions",
    version
)]
struct Cli {
    /// Question set snapshot (JSON)
    #[arg(long, global = true, default_value = "questions.json")]
    file: PathBuf,

    /// Scheduler config (JSON); built-in SM-2 defaults when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Language of status texts, e.g. en or pl-PL
    #[arg(long, global = true, default_value = "en")]
    locale: String,

    /// Pretend the current time is this RFC 3339 timestamp
    #[arg(long, global = true, value_parser = parse_timestamp)]
    now: Option<DateTime<Utc>>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show status and due date of every question
    Status,

    /// List questions due for review, most overdue first
    Due,

    /// Show new / learning / mastered totals
    Summary,

    /// Show the interval each rating would give a question
    Preview {
        /// Question id
        id: i64,
    },

    /// Record a self rating for a question
    Rate {
        /// Question id
        id: i64,
        /// poor, fair, good or great (or 1-4)
        rating: String,
    },

    /// Practice due questions interactively
    Practice,
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let scheduler = match &cli.config {
        Some(path) => Scheduler::new(SchedulerConfig::load(path)?)?,
        None => Scheduler::default(),
    };
    let locale: Locale = cli.locale.parse()?;
    let clock: Box<dyn Clock> = match cli.now {
        Some(now) => Box::new(SimulatedClock::new(now)),
        None => Box::new(SystemClock),
    };

    let mut app = App::open(&cli.file, scheduler, locale, clock, cli.format)?;

    match cli.command {
        Command::Status => app.status()?,
        Command::Due => app.due()?,
        Command::Summary => app.summary()?,
        Command::Preview { id } => app.preview(id)?,
        Command::Rate { id, rating } => app.rate(id, &rating)?,
        Command::Practice => {
            let stdin = std::io::stdin();
            app.practice(&mut stdin.lock(), &mut std::io::stdout())?
        }
    }

    Ok(())
}
