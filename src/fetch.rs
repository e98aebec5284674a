//! Guarded single-attempt PDF download.

use crate::client::USER_AGENT;
use crate::error::{FetchError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Leading byte sequence identifying a PDF file.
const PDF_MAGIC: &[u8] = b"%PDF-";

/// True if the bytes start with the PDF signature.
pub fn is_pdf_bytes(bytes: &[u8]) -> bool {
    bytes.starts_with(PDF_MAGIC)
}

/// Read up to `n` leading bytes of a file; empty if the file is unreadable.
pub(crate) async fn head_bytes(path: &Path, n: usize) -> Vec<u8> {
    use tokio::io::AsyncReadExt;

    match tokio::fs::File::open(path).await {
        Ok(mut file) => {
            let mut buf = vec![0u8; n];
            let read = file.read(&mut buf).await.unwrap_or(0);
            buf.truncate(read);
            buf
        }
        Err(_) => Vec::new(),
    }
}

/// Guess a Referer for NBER document-server URLs.
///
/// NBER's file server rejects some direct fetches unless the request carries
/// the paper's landing page as referer. The working-paper id is recovered
/// from the URL path (`/w2737/` or `/t0055/` segments).
pub(crate) fn nber_referer(url: &str) -> Option<String> {
    lazy_static! {
        static ref PAPER_ID: Regex = Regex::new(r"/(w\d{4,5}|t\d{4})/").unwrap();
    }

    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    if !(host == "nber.org" || host.ends_with(".nber.org")) {
        return None;
    }
    if !parsed.path().contains("/system/files") {
        return None;
    }

    PAPER_ID
        .captures(parsed.path())
        .and_then(|cap| cap.get(1))
        .map(|id| format!("https://www.nber.org/papers/{}", id.as_str()))
}

/// Downloads single documents, validating and committing them atomically.
#[derive(Debug, Clone)]
pub struct Fetcher {
    http: Client,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    /// Create a fetcher with the default 60-second request timeout.
    pub fn new() -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self { http }
    }

    /// Attempt exactly one download of `url` into `dest`.
    ///
    /// On success `dest` contains the full response body, which is guaranteed
    /// to start with the PDF signature. On any failure `dest` is left
    /// untouched: the body is validated in memory and written to a `.part`
    /// sibling that is renamed onto `dest` only once complete.
    pub async fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        let referer = nber_referer(url);
        self.fetch_with_referer(url, dest, referer.as_deref()).await
    }

    async fn fetch_with_referer(
        &self,
        url: &str,
        dest: &Path,
        referer: Option<&str>,
    ) -> Result<()> {
        debug!(url, ?referer, "downloading");

        let mut request = self
            .http
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT);
        if let Some(referer) = referer {
            request = request.header(reqwest::header::REFERER, referer);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        if !is_pdf_bytes(&bytes) {
            let header = String::from_utf8_lossy(&bytes[..bytes.len().min(32)]).into_owned();
            return Err(FetchError::NotPdf {
                url: url.to_string(),
                header,
            });
        }

        let tmp = dest.with_extension("pdf.part");
        tokio::fs::write(&tmp, &bytes).await?;
        if let Err(e) = tokio::fs::rename(&tmp, dest).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        info!(url, path = %dest.display(), bytes = bytes.len(), "downloaded");
        Ok(())
    }
}
