// src/main.rs

use chrono::Local;
use clap::Parser;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;
use std::process;

// Module declarations
mod catalog;
mod cli;
mod config;
mod content_item;
mod error;
mod sample_library;
mod ui;
mod view_simulator;

// Crate imports for convenience
use crate::catalog::Catalog;
use crate::cli::Cli;
use crate::config::{HEADER_DATE_FORMAT, SEED_ENV_VAR, SEPARATOR_LENGTH};
use crate::sample_library::fill_library;
use crate::view_simulator::{ViewBurst, ViewSimulator};

fn main() {
    env_logger::init();
    if let Err(err) = run_app() {
        eprintln!("\nApplication Error: {}", err);
        process::exit(1);
    }
}

/// Seed from the command line, else from the environment. Unparseable values are ignored.
fn resolve_seed(cli_seed: Option<u64>) -> Option<u64> {
    cli_seed.or_else(|| {
        let raw = env::var(SEED_ENV_VAR).ok()?;
        match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                warn!(
                    "Ignoring {}='{}': not a valid seed ({}).",
                    SEED_ENV_VAR, raw, e
                );
                None
            }
        }
    })
}

fn run_simulation<R: Rng>(
    catalog: &mut Catalog,
    rng: R,
    cli_args: &Cli,
) -> Result<Vec<ViewBurst>, Box<dyn std::error::Error>> {
    let mut simulator =
        ViewSimulator::new(rng).with_burst_range(cli_args.min_plays, cli_args.max_plays);
    info!(
        "Running {} view burst(s) of {}..={} plays.",
        cli_args.rounds,
        simulator.burst_range().start(),
        simulator.burst_range().end()
    );
    Ok(simulator.run(catalog, cli_args.rounds)?)
}

fn run_app() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli_args = Cli::parse();
    let now = Local::now();

    let mut catalog = Catalog::new();
    fill_library(&mut catalog);

    if !cli_args.json {
        println!("{}", ui::format_header(now, HEADER_DATE_FORMAT));
        ui::display_separator(SEPARATOR_LENGTH);
        ui::display_items(catalog.items(), false);
    }

    let bursts = match resolve_seed(cli_args.seed) {
        Some(seed) => {
            info!("Simulating views with seed {}.", seed);
            run_simulation(&mut catalog, StdRng::seed_from_u64(seed), &cli_args)?
        }
        None => run_simulation(&mut catalog, rand::rng(), &cli_args)?,
    };

    let ranking_filter = cli_args.ranking_filter();
    let sorted_library = catalog.sort_by_views();
    let top_titles = catalog.top_titles(cli_args.top, &ranking_filter);
    info!(
        "Ranking top {} of [{}].",
        cli_args.top,
        ranking_filter
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    if cli_args.json {
        ui::display_json(now, &sorted_library, &top_titles)?;
        return Ok(());
    }

    if log::log_enabled!(log::Level::Debug) {
        ui::display_separator(SEPARATOR_LENGTH);
        ui::display_bursts(&bursts);
    }

    ui::display_separator(SEPARATOR_LENGTH);
    println!("Sorted by views:");
    ui::display_items(&sorted_library, !cli_args.no_views);
    ui::display_separator(SEPARATOR_LENGTH);

    println!("Most popular movies and series:");
    ui::display_ranking(&top_titles);

    if cli_args.list {
        ui::display_separator(SEPARATOR_LENGTH);
        println!("Movies:");
        ui::display_items(&catalog.get_movies(), false);
        ui::display_separator(SEPARATOR_LENGTH);
        println!("Series:");
        ui::display_items(&catalog.get_series(), false);
    }

    if let Some(query) = &cli_args.search {
        ui::display_separator(SEPARATOR_LENGTH);
        match catalog.search(query) {
            Some(item) => println!("Found: {} [{}] {} plays", item, item.genre, item.plays()),
            None => println!("No title matching '{}'.", query),
        }
    }

    Ok(())
}
