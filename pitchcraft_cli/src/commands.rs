// Command bodies for the `pitchcraft` binary.
//
// Every command opens the JSON store named by `--store`. User input is
// validated here, before any generation runs: an empty idea or industry, an
// unknown tone and an unknown field are rejected with a message and nothing
// is written.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail, ensure};
use pitchcraft_core::logo::LogoStyle;
use pitchcraft_core::{
    JsonFileStore, Pitch, PitchField, PitchId, PitchStore, create_pitch,
    generate_layout_variation, generate_logo_variations, regenerate_pitch, shareable_link,
};
use pitchcraft_lang::{PhraseBanks, Tone, default_phrase_banks};
use pitchcraft_prng::PitchRng;
use pitchcraft_render::{generate_landing_page_code, render_preview};

use crate::{Cli, Cmd};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

pub fn run(cli: Cli) -> Result<()> {
    log::debug!("using store {}", cli.store.display());
    let mut store = JsonFileStore::new(&cli.store);
    let mut rng = match cli.seed {
        Some(seed) => PitchRng::new(seed),
        None => PitchRng::from_entropy(),
    };

    match cli.command {
        Cmd::New { idea, industry, tone } => {
            let idea = non_empty("idea", &idea)?;
            let industry = non_empty("industry", &industry)?;
            let tone: Tone = tone.parse()?;
            let banks = load_banks(cli.banks.as_deref())?;
            let pitch = create_pitch(&banks, idea, industry, tone, &mut rng);
            store.save(pitch.clone()).context("failed to save pitch")?;
            print_summary(&pitch);
        }
        Cmd::List => {
            let pitches = store.get_all().context("failed to read pitches")?;
            if pitches.is_empty() {
                println!("No pitches yet. Create one with `pitchcraft new`.");
            }
            for pitch in &pitches {
                println!(
                    "{}  {}  [{}, {}]  {}",
                    pitch.id,
                    pitch.name,
                    pitch.industry,
                    pitch.tone,
                    pitch.created_at.format("%Y-%m-%d %H:%M")
                );
            }
        }
        Cmd::Show { id } => {
            let pitch = find(&store, &id)?;
            println!("{}", serde_json::to_string_pretty(&pitch)?);
        }
        Cmd::Edit { id, field, value } => {
            let field: PitchField = field.parse()?;
            let update = field
                .with_text(value)
                .ok_or_else(|| anyhow!("field '{field}' cannot be set from text"))?;
            let id = PitchId::from(id);
            let found = store.update(&id, vec![update]).context("failed to save pitch")?;
            ensure!(found, "no pitch with id '{id}'");
            println!("Updated {field} of {id}");
        }
        Cmd::Regenerate { id, idea } => {
            let existing = find(&store, &id)?;
            let idea = match idea {
                Some(idea) => non_empty("idea", &idea)?.to_string(),
                None => existing.elevator.clone(),
            };
            let banks = load_banks(cli.banks.as_deref())?;
            let pitch = regenerate_pitch(&existing, &banks, &idea, &mut rng);
            store.save(pitch.clone()).context("failed to save pitch")?;
            print_summary(&pitch);
        }
        Cmd::Landing { id, out, html } => {
            let pitch = find(&store, &id)?;
            let now = chrono::Utc::now().timestamp_millis();
            let layout = generate_layout_variation(&pitch, now, &mut rng);
            let text = if html {
                render_preview(&pitch, &layout).to_html()
            } else {
                generate_landing_page_code(&pitch, &layout)
            };
            match out {
                Some(path) => {
                    fs::write(&path, text)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!(
                        "Wrote {} (hero {}, features {}, cta {})",
                        path.display(),
                        layout.hero_style.as_str(),
                        layout.feature_layout.as_str(),
                        layout.cta_style.as_str()
                    );
                }
                None => print!("{text}"),
            }
        }
        Cmd::Logos { id, out_dir } => {
            let pitch = find(&store, &id)?;
            let logos =
                generate_logo_variations(&pitch.name, &pitch.industry, &pitch.colors.logo_colors(), &mut rng);
            fs::create_dir_all(&out_dir)
                .with_context(|| format!("failed to create {}", out_dir.display()))?;
            for (style, svg) in LogoStyle::ALL.iter().zip(logos) {
                let path = out_dir.join(format!("{}-{}.svg", pitch.id, style.as_str()));
                fs::write(&path, svg).with_context(|| format!("failed to write {}", path.display()))?;
                println!("{}", path.display());
            }
        }
        Cmd::Share { id, base_url } => {
            let pitch = find(&store, &id)?;
            println!("{}", shareable_link(&base_url, &pitch.id));
        }
        Cmd::Delete { id } => {
            let id = PitchId::from(id);
            let found = store.delete(&id).context("failed to delete pitch")?;
            ensure!(found, "no pitch with id '{id}'");
            println!("Deleted {id}");
        }
        Cmd::Clear => {
            store.clear().context("failed to clear pitches")?;
            println!("Cleared {}", store.path().display());
        }
    }
    Ok(())
}

fn non_empty<'a>(what: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        bail!("{what} must not be empty");
    }
    Ok(trimmed)
}

fn load_banks(path: Option<&Path>) -> Result<PhraseBanks> {
    match path {
        Some(path) => PhraseBanks::load(path)
            .with_context(|| format!("failed to load phrase banks from {}", path.display())),
        None => Ok(default_phrase_banks()),
    }
}

fn find(store: &JsonFileStore, id: &str) -> Result<Pitch> {
    store
        .get_by_id(&PitchId::from(id))
        .context("failed to read pitches")?
        .ok_or_else(|| anyhow!("no pitch with id '{id}'"))
}

fn print_summary(pitch: &Pitch) {
    println!("{}  {}", pitch.id, pitch.name);
    println!("  {}", pitch.tagline);
    println!("  {}", pitch.elevator);
}
