// src/view_simulator.rs

use crate::catalog::Catalog;
use crate::config::{MAX_BURST_PLAYS, MIN_BURST_PLAYS};
use crate::error::CatalogError;
use log::{debug, info};
use rand::prelude::*;
use rand::Rng;
use std::ops::RangeInclusive;

/// Outcome of a single view burst.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewBurst {
    /// Position of the chosen item in the catalog's insertion order.
    pub index: usize,
    pub title: String,
    /// Plays added by this burst.
    pub plays_added: u64,
}

/// Emulates usage by adding random play counts to random catalog items.
///
/// The random source is injected, so a seeded generator gives reproducible runs.
/// Only the catalog's public API is used to mutate play counts.
#[derive(Debug)]
pub struct ViewSimulator<R> {
    rng: R,
    burst_range: RangeInclusive<u32>,
}

impl<R: Rng> ViewSimulator<R> {
    /// Creates a simulator whose bursts add between 1 and 100 plays.
    pub fn new(rng: R) -> Self {
        ViewSimulator {
            rng,
            burst_range: MIN_BURST_PLAYS..=MAX_BURST_PLAYS,
        }
    }

    /// Overrides the inclusive range of plays a burst may add.
    /// Bounds given in the wrong order are swapped, and the lower bound is at least 1.
    pub fn with_burst_range(mut self, min: u32, max: u32) -> Self {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        self.burst_range = low.max(1)..=high.max(1);
        self
    }

    pub fn burst_range(&self) -> &RangeInclusive<u32> {
        &self.burst_range
    }

    /// Picks one item uniformly at random and records a random number of plays on it.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyCatalog` if the catalog has no items.
    pub fn burst(&mut self, catalog: &mut Catalog) -> Result<ViewBurst, CatalogError> {
        if catalog.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        let index = self.rng.random_range(0..catalog.len());
        let plays_added = u64::from(self.rng.random_range(self.burst_range.clone()));

        let total = catalog
            .record_plays_at(index, plays_added)
            .ok_or(CatalogError::EmptyCatalog)?;
        let title = catalog.items()[index].title.clone();
        debug!(
            "View burst: '{}' +{} plays (total {}).",
            title, plays_added, total
        );

        Ok(ViewBurst {
            index,
            title,
            plays_added,
        })
    }

    /// Performs `rounds` independent bursts and returns them in order.
    /// Zero rounds is a no-op, even for an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyCatalog` if a burst is attempted on an empty catalog.
    pub fn run(&mut self, catalog: &mut Catalog, rounds: usize) -> Result<Vec<ViewBurst>, CatalogError> {
        let bursts = (0..rounds)
            .map(|_| self.burst(catalog))
            .collect::<Result<Vec<_>, _>>()?;
        info!(
            "Simulated {} view burst(s), {} plays in total.",
            bursts.len(),
            bursts.iter().map(|b| b.plays_added).sum::<u64>()
        );
        Ok(bursts)
    }
}

impl Catalog {
    /// One view burst using the caller's random source.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyCatalog` if the catalog has no items.
    pub fn random_view_burst<R: Rng>(&mut self, rng: &mut R) -> Result<ViewBurst, CatalogError> {
        ViewSimulator::new(rng).burst(self)
    }

    /// `rounds` view bursts using the caller's random source.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyCatalog` if `rounds > 0` and the catalog has no items.
    pub fn simulate_usage<R: Rng>(
        &mut self,
        rounds: usize,
        rng: &mut R,
    ) -> Result<Vec<ViewBurst>, CatalogError> {
        ViewSimulator::new(rng).run(self, rounds)
    }
}
