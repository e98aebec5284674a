//! Candidate scoring and selection.
//!
//! All functions here are pure: normalization, similarity, and scoring are
//! decoupled from network I/O so matching can be exercised offline against
//! recorded fixtures.

use crate::types::{Citation, Work};
use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

/// Strip diacritics and drop everything that is not an ASCII alphanumeric.
///
/// "Gürkaynak" becomes "Gurkaynak", "Fernandez-Villaverde" becomes
/// "FernandezVillaverde". Used both for filename base keys and for author
/// containment checks.
pub fn ascii_simplify(s: &str) -> String {
    s.nfkd().filter(char::is_ascii_alphanumeric).collect()
}

/// Normalize a title for comparison: lowercase, collapse every run of
/// characters outside `[a-z0-9 ]` to a single space, trim.
pub fn normalize_title(s: &str) -> String {
    let lowered = s.to_lowercase();
    let spaced: String = lowered
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Similarity between two strings as the longest-matching-blocks ratio:
/// 2·M / (len(a) + len(b)), where M is the total length of the recursively
/// found longest common blocks. Range 0–1; two empty strings compare as 1.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        b2j.entry(c).or_default().push(j);
    }

    let mut matched = 0usize;
    let mut regions = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = regions.pop() {
        let (i, j, size) = longest_match(&a, alo, ahi, blo, bhi, &b2j);
        if size > 0 {
            matched += size;
            regions.push((alo, i, blo, j));
            regions.push((i + size, ahi, j + size, bhi));
        }
    }

    2.0 * matched as f64 / total as f64
}

/// Find the longest block common to `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(i, j, size)` with the earliest `i` (then earliest `j`) among
/// maximal blocks, so repeated calls are deterministic.
fn longest_match(
    a: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
    b2j: &HashMap<char, Vec<usize>>,
) -> (usize, usize, usize) {
    let mut best_i = alo;
    let mut best_j = blo;
    let mut best_size = 0usize;

    // j2len[j] = length of the common block ending at a[i], b[j].
    let mut j2len: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut next_j2len: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b2j.get(&a[i]) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let size = if j == blo {
                    1
                } else {
                    j2len.get(&(j - 1)).copied().unwrap_or(0) + 1
                };
                next_j2len.insert(j, size);
                if size > best_size {
                    best_i = i + 1 - size;
                    best_j = j + 1 - size;
                    best_size = size;
                }
            }
        }
        j2len = next_j2len;
    }

    (best_i, best_j, best_size)
}

/// Score one candidate against normalized citation fields.
///
/// Base score is title similarity × 10, +5 for an exact year match, +3 if any
/// candidate author's simplified display name contains the wanted family name
/// (the author scan stops at the first hit). Returns `None` for candidates
/// whose normalized title is empty; they never participate in selection.
pub fn score_candidate(
    want_title: &str,
    want_year: u16,
    want_family: &str,
    work: &Work,
) -> Option<f64> {
    let title = normalize_title(work.title.as_deref().unwrap_or(""));
    if title.is_empty() {
        return None;
    }

    let mut score = similarity_ratio(want_title, &title) * 10.0;

    if work.publication_year == Some(i32::from(want_year)) {
        score += 5.0;
    }

    if !want_family.is_empty() {
        for author in &work.authors {
            if ascii_simplify(author).to_lowercase().contains(want_family) {
                score += 3.0;
                break;
            }
        }
    }

    Some(score)
}

/// Pick the best candidate for a citation, or `None` when the list is empty
/// or no candidate has a usable title.
///
/// Comparison uses strict `>`, so candidates tying exactly on score keep the
/// first-seen (input order) winner.
pub fn best_match<'a>(citation: &Citation, works: &'a [Work]) -> Option<&'a Work> {
    let want_title = normalize_title(&citation.title);
    let want_family = ascii_simplify(&citation.first_author).to_lowercase();

    let mut best_score = -1.0f64;
    let mut best: Option<&Work> = None;
    for work in works {
        let Some(score) = score_candidate(&want_title, citation.year, &want_family, work) else {
            continue;
        };
        if score > best_score {
            best_score = score;
            best = Some(work);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work(title: &str, year: i32, authors: &[&str]) -> Work {
        Work {
            title: Some(title.to_string()),
            publication_year: Some(year),
            authors: authors.iter().map(|a| a.to_string()).collect(),
            ..Work::default()
        }
    }

    #[test]
    fn test_ascii_simplify_strips_diacritics() {
        assert_eq!(ascii_simplify("Gürkaynak"), "Gurkaynak");
        assert_eq!(ascii_simplify("Jarociński"), "Jarocinski");
    }

    #[test]
    fn test_ascii_simplify_drops_punctuation() {
        assert_eq!(ascii_simplify("Fernandez-Villaverde"), "FernandezVillaverde");
        assert_eq!(ascii_simplify("O'Brien, Jr."), "OBrienJr");
    }

    #[test]
    fn test_normalize_title() {
        assert_eq!(
            normalize_title("Time to Build and Aggregate Fluctuations."),
            "time to build and aggregate fluctuations"
        );
        assert_eq!(
            normalize_title("ABCs (and Ds) of understanding VARs."),
            "abcs and ds of understanding vars"
        );
        assert_eq!(normalize_title("   "), "");
    }

    #[test]
    fn test_similarity_ratio_identical() {
        assert_eq!(similarity_ratio("monetary policy", "monetary policy"), 1.0);
    }

    #[test]
    fn test_similarity_ratio_known_value() {
        // longest block "bcd" (3 chars), 2*3/8 = 0.75
        assert_eq!(similarity_ratio("abcd", "bcde"), 0.75);
    }

    #[test]
    fn test_similarity_ratio_disjoint() {
        assert_eq!(similarity_ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_similarity_ratio_empty() {
        assert_eq!(similarity_ratio("", ""), 1.0);
        assert_eq!(similarity_ratio("abc", ""), 0.0);
    }

    #[test]
    fn test_score_year_bonus() {
        let want = normalize_title("Time to Build");
        let base = score_candidate(&want, 1982, "", &work("Time to Build", 1990, &[])).unwrap();
        let bonus = score_candidate(&want, 1982, "", &work("Time to Build", 1982, &[])).unwrap();
        assert!((bonus - base - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_author_bonus() {
        let want = normalize_title("Time to Build");
        let candidate = work("Time to Build", 1982, &["Finn E. Kydland", "Edward C. Prescott"]);
        let without = score_candidate(&want, 1982, "nobody", &candidate).unwrap();
        let with = score_candidate(&want, 1982, "kydland", &candidate).unwrap();
        assert!((with - without - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_author_bonus_applied_once() {
        let want = normalize_title("Paper");
        // Both authors contain the family name; bonus must still be +3, not +6.
        let candidate = work("Paper", 2000, &["Ana Romer", "David Romer"]);
        let baseline = score_candidate(&want, 2000, "nobody", &candidate).unwrap();
        let scored = score_candidate(&want, 2000, "romer", &candidate).unwrap();
        assert!((scored - baseline - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_untitled_candidate_skipped() {
        let candidate = Work {
            title: None,
            publication_year: Some(1982),
            ..Work::default()
        };
        assert!(score_candidate("anything", 1982, "", &candidate).is_none());

        let punctuation_only = Work {
            title: Some("???".to_string()),
            ..Work::default()
        };
        assert!(score_candidate("anything", 1982, "", &punctuation_only).is_none());
    }

    #[test]
    fn test_best_match_empty_list() {
        let citation = Citation::new("Kydland", 1982, "Time to Build and Aggregate Fluctuations.");
        assert!(best_match(&citation, &[]).is_none());
    }

    #[test]
    fn test_best_match_prefers_exact_year_and_author() {
        let citation = Citation::new("Kydland", 1982, "Time to Build and Aggregate Fluctuations.");
        let candidates = vec![
            work("Time to Build and Aggregate Fluctuations", 1990, &["Someone Else"]),
            work(
                "Time to Build and Aggregate Fluctuations",
                1982,
                &["Finn E. Kydland", "Edward C. Prescott"],
            ),
        ];

        let best = best_match(&citation, &candidates).unwrap();
        assert_eq!(best.publication_year, Some(1982));
    }

    #[test]
    fn test_best_match_tie_keeps_first() {
        let citation = Citation::new("Kydland", 1982, "Time to Build and Aggregate Fluctuations.");
        let mut first = work(
            "Time to Build and Aggregate Fluctuations",
            1982,
            &["Finn E. Kydland"],
        );
        first.oa_url = Some("https://example.org/first".to_string());
        let mut second = first.clone();
        second.oa_url = Some("https://example.org/second".to_string());

        let candidates = [first, second];
        let best = best_match(&citation, &candidates).unwrap();
        assert_eq!(best.oa_url.as_deref(), Some("https://example.org/first"));
    }

    #[test]
    fn test_best_match_deterministic() {
        let citation = Citation::new("Romer", 2004, "A New Measure of Monetary Shocks");
        let candidates = vec![
            work("A New Measure of Monetary Shocks", 2004, &["Christina D. Romer"]),
            work("Monetary Shocks Revisited", 2004, &["Christina D. Romer"]),
        ];

        let a = best_match(&citation, &candidates).map(|w| w.title.clone());
        let b = best_match(&citation, &candidates).map(|w| w.title.clone());
        assert_eq!(a, b);
    }
}
