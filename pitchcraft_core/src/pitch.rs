// Pitch assembly.
//
// `generate_pitch` runs the copy writer (`pitchcraft_lang::write_copy`),
// looks up the industry's brand palette and draws the industry's logo. The
// result is a `GeneratedPitch`: every field of a `Pitch` except the id and
// creation time, which the caller stamps with `into_pitch`.
//
// `create_pitch` and `regenerate_pitch` are the two entry points the CLI
// uses. Regeneration keeps the id and replaces everything else, including
// `createdAt`. Industry and tone carry over from the existing pitch.
//
// Inputs are assumed validated (non-empty idea and industry). Generation
// itself never fails; unseen industries fall back to default tables.

use crate::logo::generate_logo;
use crate::palette::brand_colors;
use crate::types::{BrandColors, PitchId};
use chrono::{DateTime, Utc};
use pitchcraft_lang::{PhraseBanks, PitchCopy, Tone, write_copy};
use pitchcraft_prng::RandomSource;
use serde::{Deserialize, Serialize};

/// A persisted startup concept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pitch {
    pub id: PitchId,
    pub name: String,
    pub tagline: String,
    pub elevator: String,
    pub problem: String,
    pub solution: String,
    pub target: String,
    pub industry: String,
    pub tone: Tone,
    pub created_at: DateTime<Utc>,
    /// SVG document.
    pub logo: String,
    pub colors: BrandColors,
}

/// Output of the generators before an id and timestamp are stamped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratedPitch {
    pub copy: PitchCopy,
    pub industry: String,
    pub tone: Tone,
    pub logo: String,
    pub colors: BrandColors,
}

impl GeneratedPitch {
    pub fn into_pitch(self, id: PitchId, created_at: DateTime<Utc>) -> Pitch {
        let PitchCopy {
            name,
            tagline,
            elevator,
            problem,
            solution,
            target,
        } = self.copy;
        Pitch {
            id,
            name,
            tagline,
            elevator,
            problem,
            solution,
            target,
            industry: self.industry,
            tone: self.tone,
            created_at,
            logo: self.logo,
            colors: self.colors,
        }
    }
}

/// Generate every field of a pitch from an idea, industry and tone.
///
/// Draw order: copy (see `write_copy`), then the logo's single draw if its
/// style is abstract.
pub fn generate_pitch(
    banks: &PhraseBanks,
    idea: &str,
    industry: &str,
    tone: Tone,
    rng: &mut impl RandomSource,
) -> GeneratedPitch {
    let copy = write_copy(banks, idea, industry, tone, rng);
    let colors = brand_colors(industry);
    let logo = generate_logo(&copy.name, industry, &colors.logo_colors(), rng);
    GeneratedPitch {
        copy,
        industry: industry.to_string(),
        tone,
        logo,
        colors,
    }
}

/// Generate a new pitch stamped with a fresh id and the current time.
pub fn create_pitch(
    banks: &PhraseBanks,
    idea: &str,
    industry: &str,
    tone: Tone,
    rng: &mut impl RandomSource,
) -> Pitch {
    let now = Utc::now();
    let id = PitchId::generate(now.timestamp_millis(), rng);
    let pitch = generate_pitch(banks, idea, industry, tone, rng).into_pitch(id, now);
    log::debug!("created pitch {} '{}' ({}, {})", pitch.id, pitch.name, pitch.industry, pitch.tone);
    pitch
}

/// Re-run generation for an existing pitch from a (possibly new) idea.
///
/// Keeps `id`, industry and tone; replaces every other field and restamps
/// `createdAt`. Callers without a fresh idea pass the old elevator pitch.
pub fn regenerate_pitch(
    existing: &Pitch,
    banks: &PhraseBanks,
    idea: &str,
    rng: &mut impl RandomSource,
) -> Pitch {
    let pitch = generate_pitch(banks, idea, &existing.industry, existing.tone, rng)
        .into_pitch(existing.id.clone(), Utc::now());
    log::debug!("regenerated pitch {}: '{}' -> '{}'", pitch.id, existing.name, pitch.name);
    pitch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::is_brand_palette;
    use crate::types::KNOWN_INDUSTRIES;
    use pitchcraft_lang::default_phrase_banks;
    use pitchcraft_prng::PitchRng;

    const FARM_IDEA: &str = "A marketplace connecting local farmers with restaurants";

    #[test]
    fn every_known_industry_yields_complete_pitch() {
        let banks = default_phrase_banks();
        let mut rng = PitchRng::new(10);
        for industry in KNOWN_INDUSTRIES {
            for tone in Tone::ALL {
                let p = generate_pitch(&banks, FARM_IDEA, industry, tone, &mut rng);
                let c = &p.copy;
                for field in [&c.name, &c.tagline, &c.elevator, &c.problem, &c.solution, &c.target] {
                    assert!(!field.is_empty(), "{industry}/{tone}");
                }
                assert_eq!(p.colors, brand_colors(industry));
                assert!(p.logo.contains(&p.colors.primary));
                assert!(p.logo.contains(&p.colors.secondary));
                assert!(p.logo.contains(&p.colors.accent));
            }
        }
    }

    #[test]
    fn farm_scenario() {
        let banks = default_phrase_banks();
        let mut rng = PitchRng::new(2025);
        let p = generate_pitch(&banks, FARM_IDEA, "food & beverage", Tone::Fun, &mut rng);
        assert_eq!(p.colors.primary, "#EF4444");
        let suffix = p.copy.name.strip_prefix("Marketplace").expect("keyword first");
        assert!(banks.name_suffixes.iter().any(|s| s == suffix));
        // Abstract template: gradient 3, no text.
        assert!(p.logo.contains("id=\"grad3\""));
        assert!(!p.logo.contains("<text"));
        assert!(p.copy.elevator.contains("make"));
    }

    #[test]
    fn stamping_keeps_generated_fields() {
        let banks = default_phrase_banks();
        let mut rng = PitchRng::new(3);
        let generated = generate_pitch(&banks, FARM_IDEA, "travel", Tone::Formal, &mut rng);
        let when = Utc::now();
        let pitch = generated.clone().into_pitch(PitchId::from("pitch-1-x"), when);
        assert_eq!(pitch.name, generated.copy.name);
        assert_eq!(pitch.target, generated.copy.target);
        assert_eq!(pitch.created_at, when);
        assert!(is_brand_palette(&pitch.colors));
    }

    #[test]
    fn regenerate_keeps_id_industry_and_tone() {
        let banks = default_phrase_banks();
        let mut rng = PitchRng::new(44);
        let original = create_pitch(&banks, FARM_IDEA, "finance", Tone::Fun, &mut rng);
        let again = regenerate_pitch(&original, &banks, &original.elevator, &mut rng);
        assert_eq!(again.id, original.id);
        assert_eq!(again.industry, "finance");
        assert_eq!(again.tone, Tone::Fun);
        assert!(again.created_at >= original.created_at);
    }

    #[test]
    fn repeated_generation_diverges_in_text_not_style() {
        let banks = default_phrase_banks();
        let mut rng = PitchRng::new(99);
        let runs: Vec<GeneratedPitch> = (0..6)
            .map(|_| generate_pitch(&banks, FARM_IDEA, "technology", Tone::Formal, &mut rng))
            .collect();
        assert!(runs.iter().all(|r| r.colors == runs[0].colors));
        assert!(runs.iter().all(|r| r.logo.contains("id=\"grad4\"")));
        let texts: std::collections::BTreeSet<String> = runs
            .iter()
            .map(|r| format!("{}|{}|{}|{}", r.copy.name, r.copy.tagline, r.copy.problem, r.copy.solution))
            .collect();
        assert!(texts.len() > 1);
    }

    #[test]
    fn pitch_json_uses_camel_case() {
        let banks = default_phrase_banks();
        let mut rng = PitchRng::new(5);
        let pitch = create_pitch(&banks, FARM_IDEA, "travel", Tone::Fun, &mut rng);
        let json = serde_json::to_value(&pitch).unwrap();
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["tone"], "fun");
        let back: Pitch = serde_json::from_value(json).unwrap();
        assert_eq!(back, pitch);
    }
}
