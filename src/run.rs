//! Batch run orchestration.
//!
//! Drives every citation through the same per-record chain: skip if already
//! downloaded, try the manual URL, fall back to search + link picking, and
//! record anything that failed along the way. Failures never abort the run.

use crate::client::OpenAlexClient;
use crate::error::{FetchError, Result};
use crate::fetch::{head_bytes, is_pdf_bytes, Fetcher};
use crate::links::pick_pdf_url;
use crate::matching::best_match;
use crate::plan;
use crate::rate_limit::Pacer;
use crate::types::{Citation, FailureRecord};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Number of candidates requested per search query.
pub const RESULTS_PER_QUERY: u32 = 5;

/// Name of the failure report written into the output directory.
pub const FAILURE_REPORT: &str = "FAILED.json";

/// Immutable configuration for one batch run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory downloaded PDFs are written to (created if absent).
    pub output_dir: PathBuf,
    /// Minimum interval between successful downloads.
    pub pause: Duration,
}

impl RunConfig {
    /// Configuration with the default 250 ms pacing interval.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            pause: Duration::from_millis(250),
        }
    }

    /// Override the pacing interval.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Records downloaded this run.
    pub downloaded: usize,
    /// Records skipped because a valid PDF was already present.
    pub skipped: usize,
    /// Records that ended the run unresolved.
    pub failed: usize,
    /// Every failure recorded, including manual-URL attempts for records
    /// that were later resolved through search.
    pub failures: Vec<FailureRecord>,
}

/// Process every citation in order, downloading what can be resolved.
///
/// Each record ends Skipped, Downloaded, or Failed; per-record errors are
/// converted to [`FailureRecord`]s and processing continues. When any
/// failures were accumulated the full list is serialized to
/// `<output_dir>/FAILED.json`. Only output-directory creation can fail the
/// run as a whole.
pub async fn run_batch(
    citations: &[Citation],
    client: &OpenAlexClient,
    fetcher: &Fetcher,
    config: &RunConfig,
) -> Result<RunReport> {
    tokio::fs::create_dir_all(&config.output_dir).await?;

    let filenames = plan::filenames(citations);
    let mut report = RunReport::default();
    let mut pacer = Pacer::new(config.pause);

    for (citation, filename) in citations.iter().zip(&filenames) {
        let dest = config.output_dir.join(filename);

        // Skip records already satisfied by a previous run.
        if is_pdf_bytes(&head_bytes(&dest, 8).await) {
            info!(file = %filename, "valid PDF already present, skipping");
            report.skipped += 1;
            continue;
        }

        let mut tried: Vec<String> = Vec::new();

        // Manual override URL first; its failure is recorded but does not
        // stop the search fallback.
        if let Some(manual) = &citation.url {
            tried.push(manual.clone());
            match fetcher.fetch(manual, &dest).await {
                Ok(()) => {
                    report.downloaded += 1;
                    pacer.pace().await;
                    continue;
                }
                Err(e) => {
                    warn!(file = %filename, url = %manual, error = %e, "manual URL failed");
                    report
                        .failures
                        .push(failure(filename, citation, e.to_string(), &tried));
                }
            }
        }

        let works = match client.search_works(&citation.title, RESULTS_PER_QUERY).await {
            Ok(works) => works,
            Err(e) => {
                warn!(file = %filename, error = %e, "search failed");
                report.failures.push(failure(
                    filename,
                    citation,
                    format!("search failed: {}", e),
                    &tried,
                ));
                report.failed += 1;
                continue;
            }
        };

        let Some(matched) = best_match(citation, &works) else {
            warn!(file = %filename, "no acceptable search candidate");
            report
                .failures
                .push(failure(filename, citation, FetchError::NoMatch.to_string(), &tried));
            report.failed += 1;
            continue;
        };

        let Some(url) = pick_pdf_url(matched) else {
            warn!(file = %filename, "matched work has no usable URL");
            report
                .failures
                .push(failure(filename, citation, FetchError::NoUrl.to_string(), &tried));
            report.failed += 1;
            continue;
        };
        let url = url.to_string();
        tried.push(url.clone());

        match fetcher.fetch(&url, &dest).await {
            Ok(()) => {
                report.downloaded += 1;
                pacer.pace().await;
            }
            Err(e) => {
                warn!(file = %filename, url = %url, error = %e, "download failed");
                report
                    .failures
                    .push(failure(filename, citation, e.to_string(), &tried));
                report.failed += 1;
            }
        }
    }

    if !report.failures.is_empty() {
        let path = config.output_dir.join(FAILURE_REPORT);
        let json = serde_json::to_vec_pretty(&report.failures)?;
        tokio::fs::write(&path, json).await?;
        info!(path = %path.display(), count = report.failures.len(), "wrote failure report");
    }

    Ok(report)
}

fn failure(file: &str, citation: &Citation, reason: String, tried: &[String]) -> FailureRecord {
    FailureRecord {
        file: file.to_string(),
        first_author: citation.first_author.clone(),
        year: citation.year,
        title: citation.title.clone(),
        reason,
        tried: tried.join(";"),
    }
}
