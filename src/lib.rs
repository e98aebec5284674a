//! # paperfetch
//!
//! Resolves a fixed reading list of academic citations to open-access PDFs
//! and downloads them into a local directory.
//!
//! Provides:
//! - **Library**: filename planning, OpenAlex candidate search and scoring,
//!   PDF link selection, guarded atomic downloads, and the batch orchestrator
//! - **CLI**: `paperfetch` binary that runs the embedded syllabus in one
//!   invocation
//!
//! ## Quick Start
//!
//! ```no_run
//! # async fn example() -> paperfetch::error::Result<()> {
//! use paperfetch::run::{run_batch, RunConfig};
//! use paperfetch::{Fetcher, OpenAlexClient};
//!
//! let papers = paperfetch::syllabus::papers();
//! let client = OpenAlexClient::new();
//! let fetcher = Fetcher::new();
//!
//! let report = run_batch(&papers, &client, &fetcher, &RunConfig::new("papers")).await?;
//! println!(
//!     "downloaded {}, skipped {}, failed {}",
//!     report.downloaded, report.skipped, report.failed
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Reruns are idempotent: records whose destination already holds a valid
//! PDF are skipped, so a partial run can be repeated until the failure
//! report is empty.

pub mod client;
pub mod error;
pub mod fetch;
pub mod links;
pub mod matching;
pub mod parse;
pub mod plan;
pub mod rate_limit;
pub mod run;
pub mod syllabus;
pub mod types;

// Re-export key types at the crate root.
pub use client::OpenAlexClient;
pub use error::FetchError;
pub use fetch::Fetcher;
pub use types::*;
