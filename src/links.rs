//! Best-guess PDF link selection for a matched work.

use crate::types::Work;

/// Treat empty strings as absent.
fn non_empty(url: Option<&String>) -> Option<&str> {
    url.map(String::as_str).filter(|u| !u.is_empty())
}

/// Pick the most likely direct PDF URL from a matched work, or `None`.
///
/// Strict fallback chain, first non-empty field wins:
/// 1. explicit PDF URL of the best open-access location
/// 2. general URL of the best open-access location (landing pages are
///    attempted speculatively; some still serve a PDF)
/// 3. top-level open-access URL
/// 4. explicit PDF URL of the primary location
/// 5. general URL of the primary location
pub fn pick_pdf_url(work: &Work) -> Option<&str> {
    if let Some(best_oa) = &work.best_oa_location {
        if let Some(url) = non_empty(best_oa.url_for_pdf.as_ref()) {
            return Some(url);
        }
        if let Some(url) = non_empty(best_oa.url.as_ref()) {
            return Some(url);
        }
    }

    if let Some(url) = non_empty(work.oa_url.as_ref()) {
        return Some(url);
    }

    if let Some(primary) = &work.primary_location {
        if let Some(url) = non_empty(primary.url_for_pdf.as_ref()) {
            return Some(url);
        }
        if let Some(url) = non_empty(primary.url.as_ref()) {
            return Some(url);
        }
    }

    None
}
