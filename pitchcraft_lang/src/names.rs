// Startup name generator.
//
// A name is built around a keyword lifted from the idea text: the first
// whitespace-separated word longer than four characters, lowercased, with its
// first letter capitalized. Tone decides where the random affix goes:
//
// - fun:    keyword + suffix   ("Marketplace" + "Hub"  -> "MarketplaceHub")
// - formal: prefix + keyword   ("Smart" + "Marketplace" -> "SmartMarketplace")
//
// When the idea has no qualifying word the name is prefix + suffix, both drawn
// independently. Each call makes one draw (keyword found) or two (fallback).

use crate::PhraseBanks;
use crate::types::Tone;
use pitchcraft_prng::RandomSource;

/// Words must be strictly longer than this (in chars) to count as a keyword.
pub const MIN_KEYWORD_CHARS: usize = 4;

/// The capitalized keyword of an idea, if any word qualifies.
pub fn extract_keyword(idea: &str) -> Option<String> {
    idea.to_lowercase()
        .split_whitespace()
        .find(|w| w.chars().count() > MIN_KEYWORD_CHARS)
        .map(capitalize)
}

/// Generate a startup name for the idea.
pub fn generate_startup_name(
    banks: &PhraseBanks,
    idea: &str,
    tone: Tone,
    rng: &mut impl RandomSource,
) -> String {
    match extract_keyword(idea) {
        Some(keyword) => match tone {
            Tone::Fun => format!("{keyword}{}", rng.choose(&banks.name_suffixes)),
            Tone::Formal => format!("{}{keyword}", rng.choose(&banks.name_prefixes)),
        },
        None => {
            let prefix = rng.choose(&banks.name_prefixes);
            let suffix = rng.choose(&banks.name_suffixes);
            format!("{prefix}{suffix}")
        }
    }
}

/// Capitalize the first character of a string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => {
            let upper: String = c.to_uppercase().collect();
            format!("{}{}", upper, chars.as_str())
        }
    }
}
