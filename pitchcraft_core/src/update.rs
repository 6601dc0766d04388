// Field-level edits to a persisted pitch.
//
// `PitchUpdate` enumerates every user-editable field. Identity and
// provenance (`id`, `industry`, `tone`, `createdAt`) have no variant and so
// cannot be changed through an update. Editing the name does not redraw the
// logo; only regeneration does that.

use crate::pitch::Pitch;
use crate::types::BrandColors;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One field overwrite.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "lowercase")]
pub enum PitchUpdate {
    Name(String),
    Tagline(String),
    Elevator(String),
    Problem(String),
    Solution(String),
    Target(String),
    Colors(BrandColors),
    /// Replacement SVG document.
    Logo(String),
}

impl PitchUpdate {
    /// Name of the field this update overwrites.
    pub fn field(&self) -> PitchField {
        match self {
            PitchUpdate::Name(_) => PitchField::Name,
            PitchUpdate::Tagline(_) => PitchField::Tagline,
            PitchUpdate::Elevator(_) => PitchField::Elevator,
            PitchUpdate::Problem(_) => PitchField::Problem,
            PitchUpdate::Solution(_) => PitchField::Solution,
            PitchUpdate::Target(_) => PitchField::Target,
            PitchUpdate::Colors(_) => PitchField::Colors,
            PitchUpdate::Logo(_) => PitchField::Logo,
        }
    }
}

/// An editable field, named the way the CLI and JSON spell it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PitchField {
    Name,
    Tagline,
    Elevator,
    Problem,
    Solution,
    Target,
    Colors,
    Logo,
}

impl PitchField {
    pub fn as_str(self) -> &'static str {
        match self {
            PitchField::Name => "name",
            PitchField::Tagline => "tagline",
            PitchField::Elevator => "elevator",
            PitchField::Problem => "problem",
            PitchField::Solution => "solution",
            PitchField::Target => "target",
            PitchField::Colors => "colors",
            PitchField::Logo => "logo",
        }
    }

    /// Build the update for a plain-text field. `Colors` has no text form.
    pub fn with_text(self, value: impl Into<String>) -> Option<PitchUpdate> {
        let value = value.into();
        Some(match self {
            PitchField::Name => PitchUpdate::Name(value),
            PitchField::Tagline => PitchUpdate::Tagline(value),
            PitchField::Elevator => PitchUpdate::Elevator(value),
            PitchField::Problem => PitchUpdate::Problem(value),
            PitchField::Solution => PitchUpdate::Solution(value),
            PitchField::Target => PitchUpdate::Target(value),
            PitchField::Logo => PitchUpdate::Logo(value),
            PitchField::Colors => return None,
        })
    }
}

impl fmt::Display for PitchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no editable field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not an editable pitch field")]
pub struct UnknownField(pub String);

impl FromStr for PitchField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(PitchField::Name),
            "tagline" => Ok(PitchField::Tagline),
            "elevator" => Ok(PitchField::Elevator),
            "problem" => Ok(PitchField::Problem),
            "solution" => Ok(PitchField::Solution),
            "target" => Ok(PitchField::Target),
            "colors" => Ok(PitchField::Colors),
            "logo" => Ok(PitchField::Logo),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

impl Pitch {
    /// Overwrite one field.
    pub fn apply(&mut self, update: PitchUpdate) {
        match update {
            PitchUpdate::Name(v) => self.name = v,
            PitchUpdate::Tagline(v) => self.tagline = v,
            PitchUpdate::Elevator(v) => self.elevator = v,
            PitchUpdate::Problem(v) => self.problem = v,
            PitchUpdate::Solution(v) => self.solution = v,
            PitchUpdate::Target(v) => self.target = v,
            PitchUpdate::Colors(v) => self.colors = v,
            PitchUpdate::Logo(v) => self.logo = v,
        }
    }
}
