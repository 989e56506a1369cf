//! Command-line front end for fuzzy due dates.
//!
//! Parses task due dates the way a task manager would and prints their
//! machine, localized, and readable forms.

use std::cmp::Ordering;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{FixedOffset, NaiveDate};
use clap::{Parser, Subcommand};
use duedate::{
    Accuracy, Clock, Date, FixedClock, FuzzyKind, LocaleTable, Localizer, SystemClock,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "duedate")]
#[command(about = "Parse, compare, and display fuzzy task due dates")]
#[command(version)]
struct Cli {
    /// JSON locale table with translations and date formats
    #[arg(long, value_name = "FILE", global = true)]
    locale: Option<PathBuf>,

    /// Pretend today is this day (clock fixed at noon)
    #[arg(long, value_name = "YYYY-MM-DD", global = true)]
    today: Option<NaiveDate>,

    /// Local UTC offset to use instead of the system's
    #[arg(long, value_name = "±HH:MM", global = true, allow_hyphen_values = true)]
    utc_offset: Option<FixedOffset>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (debug logging)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a due date such as "friday", "soon", "15", or "2026-03-01"
    Parse {
        /// Text to parse
        text: String,
    },
    /// Compute the next due date of a recurring task
    Recur {
        /// Recurrence: "day", "other-day", "week", "month", "year", a weekday, ...
        text: String,
        /// The task's current due date
        #[arg(long)]
        from: String,
        /// The task is being created, so `from` itself may be the due date
        #[arg(long)]
        new_task: bool,
    },
    /// Convert a due date to another accuracy
    Cast {
        /// Date to convert
        text: String,
        /// Target accuracy: fuzzy, date, datetime, timezone
        #[arg(long)]
        to: Accuracy,
    },
    /// Compare two due dates
    Compare {
        left: String,
        right: String,
    },
}

#[derive(Serialize)]
struct DateReport {
    input: String,
    machine: String,
    localized: String,
    readable: String,
    accuracy: Accuracy,
    /// Set for fuzzy values only.
    fuzzy: Option<FuzzyKind>,
    days_left: Option<i64>,
}

#[derive(Serialize)]
struct CompareReport {
    left: DateReport,
    right: DateReport,
    ordering: &'static str,
    /// Whole days from right to left; absent when both are fuzzy.
    days_between: Option<i64>,
}

struct Session {
    clock: Box<dyn Clock>,
    locale: LocaleTable,
}

impl Session {
    fn from_cli(cli: &Cli) -> Result<Self> {
        let locale = match &cli.locale {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("reading locale table {}", path.display()))?;
                LocaleTable::from_json_str(&json)
                    .with_context(|| format!("loading locale table {}", path.display()))?
            }
            None => LocaleTable::default(),
        };

        let clock: Box<dyn Clock> = match (cli.today, cli.utc_offset) {
            (Some(today), offset) => {
                let clock = FixedClock::at_noon(today);
                Box::new(match offset {
                    Some(offset) => clock.with_offset(offset),
                    None => clock,
                })
            }
            (None, Some(offset)) => Box::new(FixedClock::new(SystemClock.now(), offset)),
            (None, None) => Box::new(SystemClock),
        };
        log::debug!(
            "clock at {} with offset {}",
            clock.now(),
            clock.local_offset()
        );

        Ok(Self { clock, locale })
    }

    fn parse(&self, text: &str) -> Result<Date> {
        Date::parse(text, self.clock.as_ref(), &self.locale)
            .with_context(|| format!("parsing '{text}'"))
    }

    fn report(&self, input: &str, date: Date) -> Result<DateReport> {
        let clock = self.clock.as_ref();
        let locale: &dyn Localizer = &self.locale;
        Ok(DateReport {
            input: input.to_string(),
            machine: date.to_string(),
            localized: date.localized_str(clock, locale)?,
            readable: date.to_readable_string(clock, locale)?,
            accuracy: date.accuracy(),
            fuzzy: date.as_fuzzy(),
            days_left: date.days_left(clock)?,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let session = Session::from_cli(&cli)?;

    match &cli.command {
        Commands::Parse { text } => {
            let date = session.parse(text)?;
            print_report(&session.report(text, date)?, cli.json)
        }
        Commands::Recur {
            text,
            from,
            new_task,
        } => {
            let anchor = session.parse(from)?;
            let date = anchor
                .parse_from_date(text, *new_task, session.clock.as_ref(), &session.locale)
                .with_context(|| format!("computing '{text}' from {anchor}"))?;
            print_report(&session.report(text, date)?, cli.json)
        }
        Commands::Cast { text, to } => {
            let date = session.parse(text)?;
            if !to.is_concrete() && !date.is_fuzzy() {
                bail!("'{text}' is a concrete date and can't be made fuzzy");
            }
            let date = date
                .cast_to(*to, session.clock.as_ref())
                .with_context(|| format!("casting '{text}' to {to}"))?;
            print_report(&session.report(text, date)?, cli.json)
        }
        Commands::Compare { left, right } => {
            let a = session.parse(left)?;
            let b = session.parse(right)?;
            let clock = session.clock.as_ref();
            let ordering = a.compare(b, clock)?;
            let days_between = if a.is_fuzzy() && b.is_fuzzy() {
                None
            } else {
                Some(a.duration_since(b, clock)?.num_days())
            };
            let report = CompareReport {
                left: session.report(left, a)?,
                right: session.report(right, b)?,
                ordering: ordering_name(ordering),
                days_between,
            };
            print_compare(&report, cli.json)
        }
    }
}

fn ordering_name(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}

fn print_report(report: &DateReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    println!("machine:   {}", report.machine);
    println!("localized: {}", report.localized);
    println!("readable:  {}", report.readable);
    println!("accuracy:  {}", report.accuracy);
    match report.days_left {
        Some(days) => println!("days left: {days}"),
        None => println!("days left: -"),
    }
    Ok(())
}

fn print_compare(report: &CompareReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    let symbol = match report.ordering {
        "less" => "<",
        "greater" => ">",
        _ => "=",
    };
    println!(
        "{} {symbol} {}",
        display_machine(&report.left),
        display_machine(&report.right)
    );
    if let Some(days) = report.days_between {
        println!("days between: {days}");
    }
    Ok(())
}

fn display_machine(report: &DateReport) -> &str {
    if report.machine.is_empty() {
        "(no date)"
    } else {
        &report.machine
    }
}
