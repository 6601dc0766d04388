// End-to-end checks over the public core API: generate, persist, edit,
// regenerate, delete, plus the distribution smoke test for layouts.

use pitchcraft_core::palette::{IndustryCategory, category_palettes};
use pitchcraft_core::{
    CtaStyle, HeroStyle, JsonFileStore, MemoryStore, PitchStore, PitchUpdate, create_pitch,
    generate_layout_variation, regenerate_pitch,
};
use pitchcraft_lang::{Tone, default_phrase_banks};
use pitchcraft_prng::PitchRng;
use std::collections::HashSet;

const FARM_IDEA: &str = "A marketplace connecting local farmers with restaurants";

#[test]
fn save_then_get_returns_equal_pitch() {
    let banks = default_phrase_banks();
    let mut rng = PitchRng::new(1);
    let pitch = create_pitch(&banks, FARM_IDEA, "food & beverage", Tone::Fun, &mut rng);

    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("pitches.json"));
    store.save(pitch.clone()).unwrap();

    // A second handle on the same file sees the same data.
    let reopened = JsonFileStore::new(store.path());
    assert_eq!(reopened.get_by_id(&pitch.id).unwrap(), Some(pitch));
}

#[test]
fn update_changes_only_that_field() {
    let banks = default_phrase_banks();
    let mut rng = PitchRng::new(2);
    let pitch = create_pitch(&banks, FARM_IDEA, "travel", Tone::Formal, &mut rng);
    let mut store = MemoryStore::new();
    store.save(pitch.clone()).unwrap();

    assert!(store.update(&pitch.id, vec![PitchUpdate::Problem("Too many tabs.".into())]).unwrap());
    let stored = store.get_by_id(&pitch.id).unwrap().unwrap();

    let mut expected = pitch;
    expected.problem = "Too many tabs.".into();
    assert_eq!(stored, expected);
}

#[test]
fn delete_then_get_is_none() {
    let banks = default_phrase_banks();
    let mut rng = PitchRng::new(3);
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("pitches.json"));
    let a = create_pitch(&banks, FARM_IDEA, "finance", Tone::Fun, &mut rng);
    let b = create_pitch(&banks, "Tutoring for adult learners", "education", Tone::Formal, &mut rng);
    store.save(a.clone()).unwrap();
    store.save(b.clone()).unwrap();

    assert!(store.delete(&a.id).unwrap());
    assert_eq!(store.get_by_id(&a.id).unwrap(), None);
    assert_eq!(store.get_all().unwrap(), vec![b]);

    store.clear().unwrap();
    assert!(store.get_all().unwrap().is_empty());
}

#[test]
fn regenerated_pitch_replaces_stored_one_in_place() {
    let banks = default_phrase_banks();
    let mut rng = PitchRng::new(4);
    let mut store = MemoryStore::new();
    let first = create_pitch(&banks, FARM_IDEA, "technology", Tone::Fun, &mut rng);
    let second = create_pitch(&banks, "Carbon tracking for fleets", "sustainability", Tone::Formal, &mut rng);
    store.save(first.clone()).unwrap();
    store.save(second.clone()).unwrap();

    let again = regenerate_pitch(&first, &banks, &first.elevator, &mut rng);
    store.save(again.clone()).unwrap();

    let all = store.get_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, second.id);
    assert_eq!(all[1], again);
}

#[test]
fn technology_layouts_cover_axes_and_stay_in_bucket() {
    let banks = default_phrase_banks();
    let mut rng = PitchRng::new(50);
    let pitch = create_pitch(&banks, "An AI copilot for accountants", "technology", Tone::Formal, &mut rng);
    let tech = category_palettes(IndustryCategory::Tech);

    let mut heroes = HashSet::new();
    let mut ctas = HashSet::new();
    for i in 0..50 {
        let v = generate_layout_variation(&pitch, i, &mut rng);
        assert!(tech.contains(&v.color_palette));
        heroes.insert(v.hero_style);
        ctas.insert(v.cta_style);
    }
    assert_eq!(heroes.len(), HeroStyle::ALL.len());
    assert_eq!(ctas.len(), CtaStyle::ALL.len());
}
