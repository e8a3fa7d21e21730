// src/error.rs

use std::fmt;

/// Failures raised by catalog operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A random pick was requested from a catalog with no items.
    EmptyCatalog,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::EmptyCatalog => {
                write!(f, "catalog error: cannot pick a random item from an empty catalog")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Returned when a string does not name a known content variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVariantError {
    input: String,
}

impl ParseVariantError {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl fmt::Display for ParseVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown content variant '{}' (expected 'movie' or 'episode')",
            self.input
        )
    }
}

impl std::error::Error for ParseVariantError {}
