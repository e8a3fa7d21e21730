// src/config.rs

/// How many view bursts a default simulation performs.
pub const DEFAULT_SIMULATION_ROUNDS: usize = 10;
/// Smallest number of plays a single view burst can add (inclusive).
pub const MIN_BURST_PLAYS: u32 = 1;
/// Largest number of plays a single view burst can add (inclusive).
pub const MAX_BURST_PLAYS: u32 = 100;
/// How many titles the "most popular" listing shows by default.
pub const DEFAULT_TOP_COUNT: i64 = 3;
/// Width of the dashed separator printed between sections.
pub const SEPARATOR_LENGTH: usize = 20;
/// Date format used in the library header (e.g. "14.10.2026").
pub const HEADER_DATE_FORMAT: &str = "%d.%m.%Y";
/// Environment variable consulted for a simulation seed when `--seed` is absent.
pub const SEED_ENV_VAR: &str = "VIDEO_CATALOG_SEED";
