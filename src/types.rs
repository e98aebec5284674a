//! Public types for the paperfetch crate.
//!
//! These types are self-contained with no dependencies beyond serde, so the
//! matching and planning logic that consumes them stays testable offline.

use serde::{Deserialize, Serialize};

/// One reading-list entry to resolve and download.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citation {
    /// Family name of the first author.
    pub first_author: String,
    /// Publication year (4 digits).
    pub year: u16,
    /// Full paper title as it appears in the syllabus.
    pub title: String,
    /// Optional manual override: a known direct PDF URL tried before search.
    pub url: Option<String>,
}

impl Citation {
    /// Create a citation with no manual URL.
    pub fn new(first_author: impl Into<String>, year: u16, title: impl Into<String>) -> Self {
        Self {
            first_author: first_author.into(),
            year,
            title: title.into(),
            url: None,
        }
    }

    /// Create a citation with a manual override URL.
    pub fn with_url(
        first_author: impl Into<String>,
        year: u16,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::new(first_author, year, title)
        }
    }
}

/// A candidate work returned by the OpenAlex search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Work {
    /// Title, if the record carries one. Candidates without a title are
    /// skipped during matching.
    pub title: Option<String>,
    /// Publication year as reported by OpenAlex.
    pub publication_year: Option<i32>,
    /// Author display names, in listed order.
    pub authors: Vec<String>,
    /// Best open-access location, if any.
    pub best_oa_location: Option<Location>,
    /// Top-level open-access URL field.
    pub oa_url: Option<String>,
    /// Primary (usually publisher) location, if any.
    pub primary_location: Option<Location>,
}

/// A location record pointing at a copy of a work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    /// Direct PDF URL when the source exposes one.
    pub url_for_pdf: Option<String>,
    /// General URL; may be a landing page rather than a PDF.
    pub url: Option<String>,
}

/// One failed or partially-failed record, serialized to `FAILED.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureRecord {
    /// Target filename the record would have been saved under.
    pub file: String,
    /// First author family name.
    pub first_author: String,
    /// Publication year.
    pub year: u16,
    /// Paper title.
    pub title: String,
    /// Human-readable failure reason.
    pub reason: String,
    /// Semicolon-joined list of URLs attempted before this failure.
    pub tried: String,
}
