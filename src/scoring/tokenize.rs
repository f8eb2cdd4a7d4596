//! Free-text normalization into token sets.

use std::collections::BTreeSet;

use super::synonyms::synonyms_for;

/// Normalize text into a set of lowercase alphanumeric tokens.
///
/// Every character outside `[a-z0-9]` (after lowercasing) that is not
/// whitespace becomes a separator. Single-character tokens are kept so short
/// identifiers still match.
pub fn normalize(text: &str) -> BTreeSet<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Union each token with its synonyms from the static table.
///
/// Single pass over the input: synonyms that were added are not expanded
/// again.
pub fn expand_with_synonyms(tokens: &BTreeSet<String>) -> BTreeSet<String> {
    let mut expanded = tokens.clone();
    for token in tokens {
        if let Some(synonyms) = synonyms_for(token) {
            expanded.extend(synonyms.iter().map(|s| s.to_string()));
        }
    }
    expanded
}
