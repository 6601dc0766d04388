// Pitch persistence.
//
// `PitchStore` is the storage port: the generators never touch it, they only
// hand back values for a caller to persist. Two adapters:
//
// - `MemoryStore`: a `Vec<Pitch>` in process memory, for tests and one-shot
//   runs.
// - `JsonFileStore`: one JSON array file, the same shape the browser app kept
//   under its `pitchcraft_pitches` key. The file is read on every call and
//   replaced whole (temp file + rename) on every mutation. A missing or blank file reads as an
//   empty list.
//
// Ordering: the list is most-recent-first. `save` on a new id prepends; on
// an existing id it replaces in place. `update` and `delete` on an unknown id
// are silent no-ops.

use crate::pitch::Pitch;
use crate::types::PitchId;
use crate::update::PitchUpdate;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Default file name of the JSON store.
pub const DEFAULT_STORE_FILE: &str = "pitchcraft_pitches.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("pitch store is corrupt: {0}")]
    Corrupt(serde_json::Error),
    #[error("failed to serialize pitches: {0}")]
    Serialize(serde_json::Error),
}

/// CRUD over a flat, most-recent-first list of pitches.
pub trait PitchStore {
    fn get_all(&self) -> Result<Vec<Pitch>, StoreError>;

    fn get_by_id(&self, id: &PitchId) -> Result<Option<Pitch>, StoreError> {
        Ok(self.get_all()?.into_iter().find(|p| p.id == *id))
    }

    /// Insert or replace by id.
    fn save(&mut self, pitch: Pitch) -> Result<(), StoreError>;

    /// Apply field updates to a stored pitch. Returns whether the id existed.
    fn update(&mut self, id: &PitchId, updates: Vec<PitchUpdate>) -> Result<bool, StoreError>;

    /// Returns whether the id existed.
    fn delete(&mut self, id: &PitchId) -> Result<bool, StoreError>;

    fn clear(&mut self) -> Result<(), StoreError>;
}

// Shared list operations. Both adapters funnel through these so the
// ordering rules live in one place.

fn upsert(pitches: &mut Vec<Pitch>, pitch: Pitch) {
    match pitches.iter_mut().find(|p| p.id == pitch.id) {
        Some(slot) => {
            log::info!("replaced pitch {}", pitch.id);
            *slot = pitch;
        }
        None => {
            log::info!("saved new pitch {}", pitch.id);
            pitches.insert(0, pitch);
        }
    }
}

fn apply_updates(pitches: &mut [Pitch], id: &PitchId, updates: Vec<PitchUpdate>) -> bool {
    let Some(pitch) = pitches.iter_mut().find(|p| p.id == *id) else {
        log::debug!("update of unknown pitch {id} ignored");
        return false;
    };
    for update in updates {
        log::info!("updated {} of pitch {id}", update.field());
        pitch.apply(update);
    }
    true
}

fn remove(pitches: &mut Vec<Pitch>, id: &PitchId) -> bool {
    let before = pitches.len();
    pitches.retain(|p| p.id != *id);
    let removed = pitches.len() != before;
    if removed {
        log::info!("deleted pitch {id}");
    }
    removed
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pitches: Vec<Pitch>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PitchStore for MemoryStore {
    fn get_all(&self) -> Result<Vec<Pitch>, StoreError> {
        Ok(self.pitches.clone())
    }

    fn save(&mut self, pitch: Pitch) -> Result<(), StoreError> {
        upsert(&mut self.pitches, pitch);
        Ok(())
    }

    fn update(&mut self, id: &PitchId, updates: Vec<PitchUpdate>) -> Result<bool, StoreError> {
        Ok(apply_updates(&mut self.pitches, id, updates))
    }

    fn delete(&mut self, id: &PitchId) -> Result<bool, StoreError> {
        Ok(remove(&mut self.pitches, id))
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        log::info!("cleared {} pitches", self.pitches.len());
        self.pitches.clear();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// JsonFileStore
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// A store backed by `path`. The file is created on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<Pitch>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&contents).map_err(StoreError::Corrupt)
    }

    /// Write to a sibling temp file, then rename over the store, so a crash
    /// mid-write leaves the previous contents intact.
    fn write(&self, pitches: &[Pitch]) -> Result<(), StoreError> {
        let dir = match self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                dir
            }
            None => Path::new("."),
        };
        let contents = serde_json::to_string_pretty(pitches).map_err(StoreError::Serialize)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    /// Read, mutate, and write back only if `f` reports a change.
    fn modify<T>(&self, f: impl FnOnce(&mut Vec<Pitch>) -> (T, bool)) -> Result<T, StoreError> {
        let mut pitches = self.read()?;
        let (result, changed) = f(&mut pitches);
        if changed {
            self.write(&pitches)?;
        }
        Ok(result)
    }
}

impl PitchStore for JsonFileStore {
    fn get_all(&self) -> Result<Vec<Pitch>, StoreError> {
        self.read()
    }

    fn save(&mut self, pitch: Pitch) -> Result<(), StoreError> {
        self.modify(|pitches| {
            upsert(pitches, pitch);
            ((), true)
        })
    }

    fn update(&mut self, id: &PitchId, updates: Vec<PitchUpdate>) -> Result<bool, StoreError> {
        self.modify(|pitches| {
            let found = apply_updates(pitches, id, updates);
            (found, found)
        })
    }

    fn delete(&mut self, id: &PitchId) -> Result<bool, StoreError> {
        self.modify(|pitches| {
            let removed = remove(pitches, id);
            (removed, removed)
        })
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        log::info!("cleared pitch store {}", self.path.display());
        self.write(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::generate_pitch;
    use chrono::Utc;
    use pitchcraft_lang::{Tone, default_phrase_banks};
    use pitchcraft_prng::PitchRng;

    fn pitch(id: &str) -> Pitch {
        let mut rng = PitchRng::new(id.len() as u64);
        generate_pitch(&default_phrase_banks(), "weekly meal planning", "healthcare", Tone::Fun, &mut rng)
            .into_pitch(id.into(), Utc::now())
    }

    fn ids(store: &impl PitchStore) -> Vec<String> {
        store
            .get_all()
            .unwrap()
            .into_iter()
            .map(|p| p.id.as_str().to_string())
            .collect()
    }

    #[test]
    fn save_prepends_new_and_replaces_existing() {
        let mut store = MemoryStore::new();
        store.save(pitch("a")).unwrap();
        store.save(pitch("b")).unwrap();
        store.save(pitch("c")).unwrap();
        assert_eq!(ids(&store), ["c", "b", "a"]);

        let mut edited = pitch("b");
        edited.name = "Edited".into();
        store.save(edited).unwrap();
        assert_eq!(ids(&store), ["c", "b", "a"]);
        assert_eq!(store.get_by_id(&"b".into()).unwrap().unwrap().name, "Edited");
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let mut store = MemoryStore::new();
        store.save(pitch("a")).unwrap();
        let missing = PitchId::from("zzz");
        assert!(!store.update(&missing, vec![PitchUpdate::Name("x".into())]).unwrap());
        assert!(!store.delete(&missing).unwrap());
        assert_eq!(ids(&store), ["a"]);
        assert!(store.get_by_id(&missing).unwrap().is_none());
    }

    #[test]
    fn clear_empties_the_store() {
        let mut store = MemoryStore::new();
        store.save(pitch("a")).unwrap();
        store.clear().unwrap();
        assert!(store.get_all().unwrap().is_empty());
    }

    #[test]
    fn file_store_missing_and_blank_files_are_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("none.json"));
        assert!(store.get_all().unwrap().is_empty());

        let blank = dir.path().join("blank.json");
        std::fs::write(&blank, "  \n").unwrap();
        assert!(JsonFileStore::new(blank).get_all().unwrap().is_empty());
    }

    #[test]
    fn file_store_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ nope").unwrap();
        let err = JsonFileStore::new(path).get_all().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)), "got {err}");
    }

    #[test]
    fn file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested/deeper/pitches.json"));
        store.save(pitch("a")).unwrap();
        assert!(store.path().exists());
        assert_eq!(ids(&store), ["a"]);
    }

    #[test]
    fn file_store_rewrite_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("p.json"));
        store.save(pitch("a")).unwrap();
        store.save(pitch("b")).unwrap();
        store.delete(&PitchId::from("a")).unwrap();
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(ids(&store), ["b"]);
    }

    #[test]
    fn file_store_writes_a_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("p.json"));
        store.save(pitch("a")).unwrap();
        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["id"], "a");
        assert!(value[0].get("createdAt").is_some());
    }
}
