// Core copy-writing types: tone, per-tone phrase banks, and the generated
// copy record.
//
// `Tone` selects which half of the phrase banks feeds each text field.
// `ToneBanks` is the JSON shape of one tone's banks (see
// `data/phrase_banks.json`); `PitchCopy` is the six text fields the
// synthesizer produces.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Voice of the generated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Corporate, measured phrasing.
    Formal,
    /// Casual, exclamation-friendly phrasing.
    Fun,
}

impl Tone {
    pub const ALL: [Tone; 2] = [Tone::Formal, Tone::Fun];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Fun => "fun",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names neither tone.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tone '{0}' (expected 'formal' or 'fun')")]
pub struct UnknownTone(pub String);

impl FromStr for Tone {
    type Err = UnknownTone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "formal" => Ok(Tone::Formal),
            "fun" => Ok(Tone::Fun),
            _ => Err(UnknownTone(s.to_string())),
        }
    }
}

/// Phrase banks for one tone.
///
/// Templates may contain `{name}`, `{industry}` and `{audience}`
/// placeholders, filled by `fill_template`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneBanks {
    /// Opening verb of the tagline.
    pub tagline_actions: Vec<String>,
    /// Closing noun of the tagline.
    pub tagline_nouns: Vec<String>,
    /// Elevator opener; takes `{name}`.
    pub elevator_intro: String,
    /// Fixed value-proposition clause; takes `{industry}`.
    pub elevator_value: String,
    /// Problem openers; take `{industry}`.
    pub problem_intros: Vec<String>,
    pub problem_consequence: String,
    /// Solution opener; takes `{name}`.
    pub solution_intro: String,
    pub solution_benefit: String,
    /// Target-audience paragraph; takes `{audience}`.
    pub target_template: String,
}

/// The six generated text fields of a pitch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchCopy {
    pub name: String,
    pub tagline: String,
    pub elevator: String,
    pub problem: String,
    pub solution: String,
    pub target: String,
}

/// Substitute `{key}` placeholders in a single left-to-right pass.
///
/// Substituted values are never rescanned, so text that itself contains
/// `{industry}` (user ideas are free text) passes through literally.
/// Unknown placeholders are left as written.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let key = &after[..close];
                match vars.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
