// Core types shared across Pitchcraft.
//
// Defines the generated identifiers (`PitchId`, `LayoutId`), the brand color
// records (`BrandColors`, `LogoColors`), and the list of industries the
// creation form offers. Everything derives `Serialize`/`Deserialize` so a
// pitch round-trips through the JSON store unchanged.
//
// Ids are "<prefix>-<unix millis>-<9 base36 chars>". The random part is drawn
// from the caller's `RandomSource`; uniqueness is best effort, not
// collision-proof.

use pitchcraft_prng::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Industries offered at creation time, already lowercased.
///
/// Generation accepts any string; these are the ones every lookup table has
/// a dedicated entry for.
pub const KNOWN_INDUSTRIES: [&str; 10] = [
    "technology",
    "healthcare",
    "education",
    "finance",
    "e-commerce",
    "food & beverage",
    "sustainability",
    "entertainment",
    "travel",
    "real estate",
];

/// Lookup key for an industry string: trimmed and lowercased.
pub fn industry_key(industry: &str) -> String {
    industry.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// Generated ids
// ---------------------------------------------------------------------------

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random tail of a generated id.
pub const ID_SUFFIX_LEN: usize = 9;

fn random_suffix(rng: &mut impl RandomSource) -> String {
    (0..ID_SUFFIX_LEN)
        .map(|_| *rng.choose(BASE36) as char)
        .collect()
}

macro_rules! generated_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub const PREFIX: &'static str = $prefix;

            /// Build a fresh id from a timestamp and a random tail.
            pub fn generate(now_millis: i64, rng: &mut impl RandomSource) -> Self {
                Self(format!("{}-{}-{}", $prefix, now_millis, random_suffix(rng)))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

generated_id!(/// Identifier of a persisted pitch. Immutable once stamped.
PitchId, "pitch");
generated_id!(/// Identifier of one landing-page layout draw, used only as a render key.
LayoutId, "layout");

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// The five-slot brand palette stored on a pitch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl BrandColors {
    /// The three colors a logo is drawn with.
    pub fn logo_colors(&self) -> LogoColors {
        LogoColors {
            primary: self.primary.clone(),
            secondary: self.secondary.clone(),
            accent: self.accent.clone(),
        }
    }
}

/// Colors a logo template is parameterized by.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}
