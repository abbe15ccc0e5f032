mod report;

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use report::{ResolveReport, render_routes};
use route_types::{Page, RouteTable, app_routes};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "shell-router",
    about = "Inspect the app's route table and what each location renders"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve locations against the route table
    Resolve {
        /// Locations such as "/", "/nope", "/docs?tab=2"
        #[arg(required = true)]
        locations: Vec<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the route table as a tree
    Routes {
        /// Print JSON instead of a tree
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = app_routes()
        .context("built-in route table is invalid")
        .and_then(|table| match cli.command {
            Some(Command::Resolve { locations, json }) => run_resolve(&table, &locations, json),
            Some(Command::Routes { json }) => run_routes(&table, json),
            // Default: show the table
            None => run_routes(&table, false),
        });

    match result {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  RESOLVE MODE: match each location, print chain and render tree
// ═══════════════════════════════════════════════════════════════════════

fn run_resolve(
    table: &RouteTable<Page>,
    locations: &[String],
    json: bool,
) -> anyhow::Result<ExitCode> {
    let mut reports = Vec::with_capacity(locations.len());
    let mut failed = false;

    for location in locations {
        match table.resolve(location) {
            Ok(resolution) => reports.push(ResolveReport::new(location, &resolution)),
            Err(err) => {
                tracing::error!(location = %location, "{err}");
                failed = true;
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}", report.to_text());
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

// ═══════════════════════════════════════════════════════════════════════
//  ROUTES MODE: dump the table
// ═══════════════════════════════════════════════════════════════════════

fn run_routes(table: &RouteTable<Page>, json: bool) -> anyhow::Result<ExitCode> {
    if json {
        println!("{}", serde_json::to_string_pretty(table)?);
    } else {
        print!("{}", render_routes(table.records()));
    }
    tracing::debug!(records = table.records().len(), "printed route table");
    Ok(ExitCode::SUCCESS)
}
