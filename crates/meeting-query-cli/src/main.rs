//! `find-meeting` CLI — compute free meeting windows from a JSON query document.
//!
//! ## Usage
//!
//! ```sh
//! # Free windows as JSON (stdin → stdout)
//! cat day.json | find-meeting query
//!
//! # Human-readable windows from a file
//! find-meeting query -i day.json --format text
//!
//! # Only the earliest window, written to a file
//! find-meeting query -i day.json --first -o slot.json
//!
//! # Busy ranges blocking the mandatory attendees
//! find-meeting busy -i day.json --format text
//!
//! # Show how the query was evaluated
//! RUST_LOG=meeting_query=trace find-meeting query -i day.json
//! ```
//!
//! The input document looks like:
//!
//! ```json
//! {
//!   "events": [{"title": "Standup", "when": {"start": 540, "duration": 15}, "attendees": ["A"]}],
//!   "request": {"attendees": ["A"], "optional_attendees": ["B"], "duration": 30}
//! }
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meeting_query::{Attendance, QueryDocument, TimeRange, WindowView};
use serde::Serialize;
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "find-meeting",
    version,
    about = "Find free meeting windows within a single day"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log evaluation details to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the windows that can hold the requested meeting
    Query {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Only report the earliest window
        #[arg(long)]
        first: bool,
    },
    /// List the busy ranges that block the request's attendees
    Busy {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Also count events of optional attendees
        #[arg(long)]
        optional: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Serialize)]
struct QueryOutput {
    attendance: Attendance,
    windows: Vec<WindowView>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Query {
            input,
            output,
            format,
            first,
        } => {
            let doc = read_document(input.as_deref())?;
            let mut plan = meeting_query::plan_meeting(&doc.events, &doc.request);
            if first {
                plan.windows.truncate(1);
            }
            debug!(windows = plan.windows.len(), attendance = ?plan.attendance, "query done");

            let rendered = match format {
                OutputFormat::Json => {
                    let out = QueryOutput {
                        attendance: plan.attendance,
                        windows: plan.windows.iter().map(WindowView::from).collect(),
                    };
                    serde_json::to_string_pretty(&out)? + "\n"
                }
                OutputFormat::Text => {
                    if plan.attendance == Attendance::MandatoryOnly {
                        eprintln!("note: optional attendees dropped; no window fits everyone");
                    }
                    if plan.windows.is_empty() {
                        eprintln!("No window fits the request.");
                    }
                    render_text(&plan.windows)
                }
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Busy {
            input,
            format,
            optional,
        } => {
            let doc = read_document(input.as_deref())?;
            let attendees = doc.request.attendees_under_test(optional);
            let busy = meeting_query::busy_ranges(&doc.events, &attendees);

            let rendered = match format {
                OutputFormat::Json => {
                    let views: Vec<WindowView> = busy.iter().map(WindowView::from).collect();
                    serde_json::to_string_pretty(&views)? + "\n"
                }
                OutputFormat::Text => render_text(&busy),
            };
            write_output(None, &rendered)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn render_text(ranges: &[TimeRange]) -> String {
    ranges
        .iter()
        .map(|r| format!("{} ({} min)\n", r, r.duration()))
        .collect()
}

fn read_document(path: Option<&str>) -> Result<QueryDocument> {
    let json = read_input(path)?;
    QueryDocument::from_json(&json).context("Failed to parse query document")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
