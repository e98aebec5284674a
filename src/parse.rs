//! OpenAlex API response parsing.

use crate::error::{FetchError, Result};
use crate::types::{Location, Work};
use serde::Deserialize;

/// OpenAlex works search response wrapper.
#[derive(Debug, Deserialize)]
pub(crate) struct WorksResponse {
    #[serde(default)]
    pub results: Vec<RawWork>,
}

/// A single work from OpenAlex search results.
#[derive(Debug, Deserialize)]
pub(crate) struct RawWork {
    pub title: Option<String>,
    pub publication_year: Option<i32>,
    #[serde(default)]
    pub authorships: Vec<RawAuthorship>,
    pub best_oa_location: Option<RawLocation>,
    pub open_access: Option<RawOpenAccess>,
    pub primary_location: Option<RawLocation>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawAuthorship {
    pub author: Option<RawAuthor>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawAuthor {
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawLocation {
    pub url_for_pdf: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawOpenAccess {
    pub oa_url: Option<String>,
}

/// Parse an OpenAlex works search JSON response into [`Work`] candidates.
pub fn parse_works_response(json: &str) -> Result<Vec<Work>> {
    let response: WorksResponse = serde_json::from_str(json)
        .map_err(|e| FetchError::Parse(format!("invalid OpenAlex JSON: {}", e)))?;

    Ok(response.results.into_iter().map(raw_to_work).collect())
}

/// Convert a raw OpenAlex document to the public [`Work`] model.
fn raw_to_work(raw: RawWork) -> Work {
    let authors = raw
        .authorships
        .into_iter()
        .filter_map(|a| a.author.and_then(|author| author.display_name))
        .collect();

    Work {
        title: raw.title,
        publication_year: raw.publication_year,
        authors,
        best_oa_location: raw.best_oa_location.map(raw_to_location),
        oa_url: raw.open_access.and_then(|oa| oa.oa_url),
        primary_location: raw.primary_location.map(raw_to_location),
    }
}

fn raw_to_location(raw: RawLocation) -> Location {
    Location {
        url_for_pdf: raw.url_for_pdf,
        url: raw.url,
    }
}
