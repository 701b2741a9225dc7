//! Place-name extraction via a capitalization heuristic.
//!
//! Scans for a preposition followed by a capitalized span, optionally
//! skipping an article and continuing through connector words
//! ("Rio de Janeiro"). Cheap and deterministic; lowercase place names
//! are missed and sentence-initial capitals can over-match. Both are
//! part of the contract.

use crate::lexicon::{ARTICLES, LOCATION_CONNECTORS, LOCATION_PREPOSITIONS};

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Extract the first plausible place name from original-case text.
///
/// Returns `None` when no preposition precedes a capitalized span.
pub fn extract_location(original_text: &str) -> Option<String> {
    let words: Vec<&str> = original_text.split(' ').collect();

    for (i, word) in words.iter().enumerate() {
        if !LOCATION_PREPOSITIONS.contains(&word.to_lowercase().as_str()) {
            continue;
        }

        let mut candidate_index = i.saturating_add(1);
        if words
            .get(candidate_index)
            .is_some_and(|w| ARTICLES.contains(&w.to_lowercase().as_str()))
        {
            candidate_index = candidate_index.saturating_add(1);
        }

        let Some(first_word) = words.get(candidate_index) else {
            continue;
        };
        if first_word.trim().is_empty() || !starts_uppercase(first_word) {
            continue;
        }

        let mut parts: Vec<&str> = vec![first_word];
        let mut next_index = candidate_index.saturating_add(1);
        while let Some(next_word) = words.get(next_index) {
            let continues = !next_word.trim().is_empty()
                && (starts_uppercase(next_word)
                    || LOCATION_CONNECTORS.contains(&next_word.to_lowercase().as_str()));
            if !continues {
                break;
            }
            parts.push(next_word);
            next_index = next_index.saturating_add(1);
        }

        return Some(
            parts
                .join(" ")
                .trim_end_matches(['.', ',', '?', '!'])
                .to_owned(),
        );
    }
    None
}
