use anyhow::{Context, anyhow};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::Read;

use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::extract::{Extraction, extract};
use crate::render::{RenderOptions, render_table};
use crate::table::{Table, Tabular, column_names, parse_column};

/// rotaview - Rotables simulation results viewer
#[derive(Parser, Debug)]
#[command(name = "rotaview")]
#[command(version)]
#[command(about = "Extract and browse rotables simulation results")]
#[command(long_about = "rotaview reads the transcript printed by a rotables simulation run
(stock levels, load decisions, landings, round costs) and shows it as searchable,
sortable, paginated tables.

Quick start:
  1. Run 'rotaview init' to write a .rotaview.toml with defaults
  2. Run 'rotaview run' to trigger a simulation and view stocks
  3. Or 'rotaview show transcript.log --table loads --sort EC --desc'")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, global = true)]
    pub config: String,

    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print every record found in a transcript as JSON
    Extract {
        /// Transcript or structured JSON file (`-` for stdin)
        input: String,
    },
    /// Show one page of a table from a transcript
    Show {
        /// Transcript or structured JSON file (`-` for stdin)
        input: String,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Trigger a simulation run and show its results
    Run {
        /// Run endpoint (overrides config)
        #[arg(long)]
        endpoint: Option<String>,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Write a default config file if none exists
    Init,
}

/// Which record list to show
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Stocks,
    Loads,
    Landings,
    Rounds,
    Daily,
}

#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    /// Table to display
    #[arg(short, long, value_enum, default_value_t = TableKind::Stocks)]
    pub table: TableKind,

    /// Keep rows whose code / flight id contains this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Sort by this column (header name, case-insensitive)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Page to show; out-of-range pages are clamped
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (overrides config)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Disable stock level coloring
    #[arg(long)]
    pub no_color: bool,
}

/// Read a path, or stdin for `-`.
pub fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(input).with_context(|| format!("Failed to read '{}'", input))
}

pub fn parse_input(text: &str) -> anyhow::Result<Extraction> {
    Extraction::parse(text).context("Input looks like JSON but is not valid structured output")
}

/// A fetched run always carries a raw transcript, so it is scanned directly.
pub fn extract_run_output(transcript: &str) -> Extraction {
    let extraction = extract(transcript);
    if extraction.is_empty() {
        tracing::warn!("run finished but the transcript contained no records");
    }
    extraction
}

/// Render the page of the selected table that `args` describes.
pub fn show_table(
    extraction: &Extraction,
    args: &ViewArgs,
    config: &Config,
    options: &RenderOptions,
) -> anyhow::Result<String> {
    let page_size = args.page_size.unwrap_or_else(|| config.page_size());
    match args.table {
        TableKind::Stocks => show(extraction.stocks.clone(), args, page_size, options),
        TableKind::Loads => show(extraction.loads.clone(), args, page_size, options),
        TableKind::Landings => show(extraction.landings.clone(), args, page_size, options),
        TableKind::Rounds => show(extraction.rounds.clone(), args, page_size, options),
        TableKind::Daily => show(extraction.daily_costs(), args, page_size, options),
    }
}

fn show<R: Tabular>(
    records: Vec<R>,
    args: &ViewArgs,
    page_size: usize,
    options: &RenderOptions,
) -> anyhow::Result<String> {
    let mut table = Table::new(records, page_size)?;
    table.set_search_text(args.search.as_str());

    if let Some(name) = &args.sort {
        let column = parse_column::<R>(name).ok_or_else(|| {
            anyhow!(
                "Unknown column '{}' (expected one of: {})",
                name,
                column_names::<R>()
            )
        })?;
        table.toggle_sort(column);
        if args.desc {
            table.toggle_sort(column);
        }
    }

    table.set_page(args.page);
    if table.query().page() != args.page {
        tracing::warn!(
            requested = args.page,
            shown = table.query().page(),
            "page out of range, clamped"
        );
    }

    Ok(render_table(&table.view(), table.query(), options))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
