// Pitchcraft copy-writing crate.
//
// Turns a free-text startup idea, an industry and a tone into the six text
// fields of a pitch (name, tagline, elevator pitch, problem, solution,
// target audience) by drawing from fixed phrase banks.
//
// Architecture:
// - `types.rs`: `Tone`, `ToneBanks`, `PitchCopy`, and the placeholder filler
// - `names.rs`: startup-name generation (keyword + prefix/suffix banks)
// - `copy.rs`: tagline, elevator, problem, solution, target, and the
//   `write_copy` entry point that assembles all six fields
// - `lib.rs` (this file): `PhraseBanks`, which loads and validates the JSON banks
//
// The banks are loaded from `data/phrase_banks.json` via
// `PhraseBanks::from_json()`. `default_phrase_banks()` embeds that file at
// compile time with `include_str!`; `PhraseBanks::load()` reads an override
// from disk.
//
// All randomness goes through `pitchcraft_prng::RandomSource`. Each draw is
// independent and uniform over its bank; there is no hidden seeding, so two
// calls with the same input usually produce different copy.

pub mod copy;
pub mod names;
pub mod types;

pub use copy::write_copy;
pub use names::{extract_keyword, generate_startup_name};
pub use types::{PitchCopy, Tone, ToneBanks, UnknownTone, fill_template};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Errors from loading a phrase-bank file.
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("failed to read phrase banks: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed phrase banks: {0}")]
    Parse(#[from] serde_json::Error),
    /// A bank that generation draws from is empty.
    #[error("phrase bank '{0}' is empty")]
    EmptyBank(&'static str),
}

/// The complete set of word lists and sentence templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseBanks {
    pub name_prefixes: Vec<String>,
    pub name_suffixes: Vec<String>,
    pub tagline_qualifiers: Vec<String>,
    /// Generic problem phrases shared by both tones.
    pub issues: Vec<String>,
    /// Generic solution phrases shared by both tones.
    pub solution_mechanisms: Vec<String>,
    /// Audience phrase per lowercased industry.
    pub audiences: BTreeMap<String, String>,
    pub default_audience: String,
    pub formal: ToneBanks,
    pub fun: ToneBanks,
}

impl PhraseBanks {
    /// Parse and validate banks from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, BankError> {
        let banks: PhraseBanks = serde_json::from_str(json)?;
        banks.validate()?;
        Ok(banks)
    }

    /// Read banks from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self, BankError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The banks for one tone.
    pub fn tone(&self, tone: Tone) -> &ToneBanks {
        match tone {
            Tone::Formal => &self.formal,
            Tone::Fun => &self.fun,
        }
    }

    /// Audience phrase for an industry, falling back to `default_audience`.
    pub fn audience(&self, industry: &str) -> &str {
        let key = industry.trim().to_lowercase();
        match self.audiences.get(&key) {
            Some(a) => a,
            None => {
                log::debug!("no audience phrase for industry '{industry}', using default");
                &self.default_audience
            }
        }
    }

    /// Every bank that is sampled must have at least one entry.
    fn validate(&self) -> Result<(), BankError> {
        let shared: [(&'static str, usize); 5] = [
            ("name_prefixes", self.name_prefixes.len()),
            ("name_suffixes", self.name_suffixes.len()),
            ("tagline_qualifiers", self.tagline_qualifiers.len()),
            ("issues", self.issues.len()),
            ("solution_mechanisms", self.solution_mechanisms.len()),
        ];
        for (label, len) in shared {
            if len == 0 {
                return Err(BankError::EmptyBank(label));
            }
        }
        for (prefix, banks) in [("formal", &self.formal), ("fun", &self.fun)] {
            let per_tone: [(&'static str, usize); 3] = [
                ("tagline_actions", banks.tagline_actions.len()),
                ("tagline_nouns", banks.tagline_nouns.len()),
                ("problem_intros", banks.problem_intros.len()),
            ];
            for (label, len) in per_tone {
                if len == 0 {
                    log::warn!("{prefix} tone bank '{label}' is empty");
                    return Err(BankError::EmptyBank(label));
                }
            }
        }
        Ok(())
    }
}

/// Load the phrase banks embedded at compile time.
///
/// Panics if the embedded JSON is malformed, which a test below rules out.
pub fn default_phrase_banks() -> PhraseBanks {
    let json = include_str!("../../data/phrase_banks.json");
    PhraseBanks::from_json(json).expect("embedded phrase_banks.json is malformed")
}
