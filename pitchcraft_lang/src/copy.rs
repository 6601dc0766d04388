// Marketing-copy fields: tagline, elevator pitch, problem, solution, target.
//
// Each field follows a fixed recipe over the phrase banks:
//
// - tagline:  "{action} {qualifier} {noun}", three independent draws
// - elevator: "{intro} {idea, cut to 100 chars} {value clause}", no draws
// - problem:  "{intro} {issue}, {consequence}", two draws
// - solution: "{intro} {mechanism}. {benefit}", one draw
// - target:   tone template around the industry's audience phrase, no draws
//
// `write_copy` runs the recipes in a fixed order (name, tagline, problem,
// solution) so a scripted `RandomSource` maps predictably onto the draws.
//
// See also: `names.rs` for the name recipe, `types.rs::fill_template` for
// placeholder substitution.

use crate::PhraseBanks;
use crate::names::generate_startup_name;
use crate::types::{PitchCopy, Tone, fill_template};
use pitchcraft_prng::RandomSource;

/// Ideas longer than this many chars are cut in the elevator pitch.
pub const ELEVATOR_IDEA_MAX_CHARS: usize = 100;

/// Generate every text field of a pitch.
///
/// Inputs are assumed validated by the caller (non-empty idea and industry).
/// An industry missing from the audience table falls back silently.
pub fn write_copy(
    banks: &PhraseBanks,
    idea: &str,
    industry: &str,
    tone: Tone,
    rng: &mut impl RandomSource,
) -> PitchCopy {
    let name = generate_startup_name(banks, idea, tone, rng);
    let tagline = tagline(banks, tone, rng);
    let elevator = elevator(banks, &name, idea, industry, tone);
    let problem = problem(banks, industry, tone, rng);
    let solution = solution(banks, &name, tone, rng);
    let target = target(banks, industry, tone);

    log::debug!("wrote {tone} copy for '{name}' ({industry})");

    PitchCopy {
        name,
        tagline,
        elevator,
        problem,
        solution,
        target,
    }
}

/// Three-word tagline: action verb, qualifier, noun.
pub fn tagline(banks: &PhraseBanks, tone: Tone, rng: &mut impl RandomSource) -> String {
    let t = banks.tone(tone);
    let action = rng.choose(&t.tagline_actions);
    let qualifier = rng.choose(&banks.tagline_qualifiers);
    let noun = rng.choose(&t.tagline_nouns);
    format!("{action} {qualifier} {noun}")
}

/// Elevator pitch. Deterministic given its inputs.
pub fn elevator(banks: &PhraseBanks, name: &str, idea: &str, industry: &str, tone: Tone) -> String {
    let t = banks.tone(tone);
    let intro = fill_template(&t.elevator_intro, &[("name", name)]);
    let value = fill_template(&t.elevator_value, &[("industry", industry)]);
    format!("{intro} {} {value}", summarize_idea(idea))
}

/// Cut an idea to `ELEVATOR_IDEA_MAX_CHARS` chars, marking the cut with `...`.
pub fn summarize_idea(idea: &str) -> String {
    if idea.chars().count() > ELEVATOR_IDEA_MAX_CHARS {
        let cut: String = idea.chars().take(ELEVATOR_IDEA_MAX_CHARS).collect();
        format!("{cut}...")
    } else {
        idea.to_string()
    }
}

/// Problem statement: tone intro, shared issue, fixed consequence.
pub fn problem(banks: &PhraseBanks, industry: &str, tone: Tone, rng: &mut impl RandomSource) -> String {
    let t = banks.tone(tone);
    let intro = fill_template(rng.choose::<String>(&t.problem_intros), &[("industry", industry)]);
    let issue = rng.choose(&banks.issues);
    format!("{intro} {issue}, {}", t.problem_consequence)
}

/// Solution statement: tone intro naming the startup, shared mechanism,
/// fixed benefit.
pub fn solution(banks: &PhraseBanks, name: &str, tone: Tone, rng: &mut impl RandomSource) -> String {
    let t = banks.tone(tone);
    let intro = fill_template(&t.solution_intro, &[("name", name)]);
    let mechanism = rng.choose(&banks.solution_mechanisms);
    format!("{intro} {mechanism}. {}", t.solution_benefit)
}

/// Target-audience paragraph.
pub fn target(banks: &PhraseBanks, industry: &str, tone: Tone) -> String {
    let audience = banks.audience(industry);
    fill_template(&banks.tone(tone).target_template, &[("audience", audience)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_phrase_banks;
    use pitchcraft_prng::{PitchRng, SequenceRng};

    const FARM_IDEA: &str = "A marketplace connecting local farmers with restaurants";

    #[test]
    fn tagline_draws_action_qualifier_noun() {
        let banks = default_phrase_banks();
        let mut rng = SequenceRng::new(vec![0, 2, 5]);
        assert_eq!(tagline(&banks, Tone::Formal, &mut rng), "Transform modern productivity");
        let mut rng = SequenceRng::new(vec![5, 4, 3]);
        assert_eq!(tagline(&banks, Tone::Fun, &mut rng), "Rock digital vibe");
    }

    #[test]
    fn elevator_fun_uses_make_intro() {
        let banks = default_phrase_banks();
        let e = elevator(&banks, "MarketplaceHub", FARM_IDEA, "food & beverage", Tone::Fun);
        assert_eq!(
            e,
            "MarketplaceHub is here to make A marketplace connecting local farmers with restaurants \
             We're all about making things easier, faster, and way more awesome for everyone in food & beverage!"
        );
    }

    #[test]
    fn elevator_formal_mentions_sector() {
        let banks = default_phrase_banks();
        let e = elevator(&banks, "SmartTrip", "trips", "travel", Tone::Formal);
        assert!(e.starts_with("SmartTrip is an innovative platform that trips "));
        assert!(e.ends_with("sustainable growth in the travel sector."));
    }

    #[test]
    fn idea_truncates_at_one_hundred_chars() {
        let long = "x".repeat(150);
        let s = summarize_idea(&long);
        assert_eq!(s.len(), 103);
        assert!(s.ends_with("..."));

        let exact = "y".repeat(100);
        assert_eq!(summarize_idea(&exact), exact);
    }

    #[test]
    fn idea_truncation_counts_chars_not_bytes() {
        let long = "é".repeat(120);
        let s = summarize_idea(&long);
        assert_eq!(s.chars().count(), 103);
    }

    #[test]
    fn problem_fills_industry_and_consequence() {
        let banks = default_phrase_banks();
        let mut rng = SequenceRng::new(vec![0, 1]);
        assert_eq!(
            problem(&banks, "travel", Tone::Formal, &mut rng),
            "Organizations in the travel industry face significant challenges in \
             maintaining efficiency while scaling operations, leading to increased costs, \
             reduced productivity, and missed opportunities for growth."
        );
    }

    #[test]
    fn solution_names_the_startup() {
        let banks = default_phrase_banks();
        let mut rng = SequenceRng::new(vec![3]);
        assert_eq!(
            solution(&banks, "FlowCo", Tone::Fun, &mut rng),
            "FlowCo solves this with smart automation and predictive analytics. \
             The result? You save time, cut costs, and actually enjoy the process. Win-win-win!"
        );
    }

    #[test]
    fn target_is_deterministic_with_default_audience() {
        let banks = default_phrase_banks();
        let a = target(&banks, "space mining", Tone::Formal);
        assert_eq!(a, target(&banks, "space mining", Tone::Formal));
        assert!(a.contains("forward-thinking businesses and entrepreneurs"));
    }

    #[test]
    fn write_copy_fields_nonempty_for_every_tone() {
        let banks = default_phrase_banks();
        let mut rng = PitchRng::new(11);
        for tone in Tone::ALL {
            let copy = write_copy(&banks, FARM_IDEA, "food & beverage", tone, &mut rng);
            for field in [&copy.name, &copy.tagline, &copy.elevator, &copy.problem, &copy.solution, &copy.target] {
                assert!(!field.is_empty());
            }
            assert!(copy.solution.starts_with(&copy.name));
            assert!(copy.elevator.starts_with(&copy.name));
        }
    }

    #[test]
    fn write_copy_draw_order_is_name_tagline_problem_solution() {
        let banks = default_phrase_banks();
        // name suffix, tagline x3, problem intro + issue, solution mechanism
        let mut rng = SequenceRng::new(vec![2, 1, 0, 1, 3, 2, 0]);
        let copy = write_copy(&banks, FARM_IDEA, "food & beverage", Tone::Fun, &mut rng);
        assert_eq!(copy.name, "MarketplaceLink");
        assert_eq!(copy.tagline, "Unlock your experience");
        assert!(copy.problem.starts_with("Nobody enjoys the hassle of coordinating between"));
        assert!(copy.solution.contains("an intuitive, AI-powered platform"));
        assert_eq!(rng.draws(), 7);
    }

    #[test]
    fn repeated_runs_diverge() {
        let banks = default_phrase_banks();
        let mut rng = PitchRng::new(2024);
        let runs: Vec<PitchCopy> = (0..5)
            .map(|_| write_copy(&banks, FARM_IDEA, "food & beverage", Tone::Fun, &mut rng))
            .collect();
        let distinct: std::collections::BTreeSet<String> = runs
            .iter()
            .map(|c| format!("{}|{}|{}|{}", c.name, c.tagline, c.problem, c.solution))
            .collect();
        assert!(distinct.len() > 1, "five runs produced identical copy");
    }
}
