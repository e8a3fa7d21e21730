// src/cli.rs

use crate::config::{DEFAULT_SIMULATION_ROUNDS, DEFAULT_TOP_COUNT, MAX_BURST_PLAYS, MIN_BURST_PLAYS};
use crate::content_item::Variant;
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Shows a small movie and series library with simulated view counts.",
    long_about = None
)]
pub struct Cli {
    /// Number of random view bursts to simulate.
    #[clap(short, long, default_value_t = DEFAULT_SIMULATION_ROUNDS)]
    pub rounds: usize,

    /// Fewest plays a single view burst adds.
    #[clap(long, default_value_t = MIN_BURST_PLAYS)]
    pub min_plays: u32,

    /// Most plays a single view burst adds.
    #[clap(long, default_value_t = MAX_BURST_PLAYS)]
    pub max_plays: u32,

    /// How many titles the popularity ranking shows.
    #[clap(short, long, default_value_t = DEFAULT_TOP_COUNT, allow_negative_numbers = true)]
    pub top: i64,

    /// Restrict the ranking to a variant (movie or episode). Repeatable.
    #[clap(long = "only", value_name = "VARIANT")]
    pub only: Vec<Variant>,

    /// Seed for the view simulation. Falls back to VIDEO_CATALOG_SEED.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Look up a title (case-insensitive) and print it.
    #[clap(short, long)]
    pub search: Option<String>,

    /// Also list movies and series alphabetically.
    #[clap(long, action = clap::ArgAction::SetTrue)]
    pub list: bool,

    /// Hide play counts in the views listing.
    #[clap(long, action = clap::ArgAction::SetTrue)]
    pub no_views: bool,

    /// Print the ranked catalog as JSON instead of text.
    #[clap(long, action = clap::ArgAction::SetTrue)]
    pub json: bool,
}

impl Cli {
    /// Variants accepted by the ranking; every variant when none was given.
    pub fn ranking_filter(&self) -> Vec<Variant> {
        if self.only.is_empty() {
            Variant::ALL.to_vec()
        } else {
            self.only.clone()
        }
    }
}
