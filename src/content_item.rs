// src/content_item.rs

use crate::error::ParseVariantError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Tag identifying which kind of content an item was constructed as.
/// Catalog filters compare these tags, never the presence of fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Movie,
    Episode,
}

impl Variant {
    /// Every variant, in declaration order. The default filter for rankings.
    pub const ALL: [Variant; 2] = [Variant::Movie, Variant::Episode];
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Movie => write!(f, "movie"),
            Variant::Episode => write!(f, "episode"),
        }
    }
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "movie" | "movies" | "film" => Ok(Variant::Movie),
            "episode" | "episodes" | "series" | "serial" => Ok(Variant::Episode),
            _ => Err(ParseVariantError::new(s)),
        }
    }
}

/// The variant-specific part of a content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentKind {
    Movie,
    Episode { episode: u32, season: u32 },
}

/// One watchable title in the catalog, together with its play counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentItem {
    /// Natural key for searching (compared case-insensitively).
    pub title: String,
    pub year: i32,
    /// Free-text category label, e.g. "fiction" or "drama".
    pub genre: String,
    /// How many times this item has been played.
    plays: u64,
    #[serde(flatten)]
    kind: ContentKind,
}

impl ContentItem {
    /// Creates a movie with zero plays.
    pub fn movie(title: impl Into<String>, year: i32, genre: impl Into<String>) -> Self {
        ContentItem {
            title: title.into(),
            year,
            genre: genre.into(),
            plays: 0,
            kind: ContentKind::Movie,
        }
    }

    /// Creates a single episode of a series with zero plays.
    ///
    /// `episode` and `season` are fixed for the lifetime of the item.
    pub fn episode(
        title: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        episode: u32,
        season: u32,
    ) -> Self {
        ContentItem {
            title: title.into(),
            year,
            genre: genre.into(),
            plays: 0,
            kind: ContentKind::Episode { episode, season },
        }
    }

    /// Starts the play counter at `plays` instead of zero.
    pub fn with_plays(mut self, plays: u64) -> Self {
        self.plays = plays;
        self
    }

    pub fn plays(&self) -> u64 {
        self.plays
    }

    pub fn variant(&self) -> Variant {
        match self.kind {
            ContentKind::Movie => Variant::Movie,
            ContentKind::Episode { .. } => Variant::Episode,
        }
    }

    /// Records one play.
    pub fn record_play(&mut self) {
        self.plays = self.plays.saturating_add(1);
    }

    /// Human-readable label.
    ///
    /// Movies render as `Title (Year)`. Episodes append `S{episode:02}E{season:02}`;
    /// the stored episode number follows `S` and the stored season follows `E`.
    /// Existing consumers depend on that order, so it must not be swapped.
    pub fn display_label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ContentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.year)?;
        if let ContentKind::Episode { episode, season } = self.kind {
            write!(f, "S{:02}E{:02}", episode, season)?;
        }
        Ok(())
    }
}
