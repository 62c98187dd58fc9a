//! Guess-name normalization and roster name matching.

use tracing::instrument;

/// Normalizes a typed name: whitespace-separated tokens, each with its first
/// letter upper-cased and the rest lower-cased, joined by single spaces.
///
/// `"jon   smith"` becomes `"Jon Smith"`. Applying it twice changes nothing.
#[instrument]
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Case-insensitive comparison with surrounding whitespace trimmed.
pub fn names_match(roster_name: &str, guess: &str) -> bool {
    roster_name.trim().to_lowercase() == guess.trim().to_lowercase()
}
