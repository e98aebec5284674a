//! Deterministic output filename planning.

use crate::matching::ascii_simplify;
use crate::types::Citation;
use std::collections::HashMap;

/// Base key used for collision detection: simplified family name + year.
fn base_key(citation: &Citation) -> String {
    format!("{}{}", ascii_simplify(&citation.first_author), citation.year)
}

/// Assign one unique filename per citation, parallel to the input order.
///
/// Records whose base key occurs exactly once get `<base>.pdf`. Records
/// sharing a base key get `<base>a.pdf`, `<base>b.pdf`, … in input order.
/// Pure function of the input list, so reruns are filename-stable.
pub fn filenames(citations: &[Citation]) -> Vec<String> {
    let bases: Vec<String> = citations.iter().map(base_key).collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for base in &bases {
        *counts.entry(base).or_insert(0) += 1;
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    bases
        .iter()
        .map(|base| {
            if counts[base.as_str()] == 1 {
                format!("{}.pdf", base)
            } else {
                let idx = seen.entry(base).or_insert(0);
                let suffix = char::from(b'a' + *idx as u8);
                *idx += 1;
                format!("{}{}.pdf", base, suffix)
            }
        })
        .collect()
}
