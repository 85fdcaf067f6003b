use std::path::PathBuf;

use uuid::Uuid;

use crate::{
    core::{
        AppSettings,
        Deck,
    },
    persistence::{
        get_app_data_dir,
        load_json_or_default,
        save_json,
    },
};

const DECKS_FILE: &str = "decks.json";
const SETTINGS_FILE: &str = "settings.json";

/// Owns the two on-disk records: the ordered deck list and the settings
/// singleton. Writes are full overwrites; reads degrade to empty/defaults.
pub struct DeckStore {
    dir: PathBuf,
}

impl DeckStore {
    pub fn open_default() -> Self {
        Self { dir: get_app_data_dir() }
    }

    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Most recently created decks first (new decks are prepended on upsert).
    pub fn list(&self) -> Vec<Deck> {
        load_json_or_default(&self.dir.join(DECKS_FILE))
    }

    /// Replaces the deck with the same id in place, or prepends a new one.
    pub fn upsert(&self, deck: Deck) {
        let mut decks = self.list();
        match decks.iter().position(|d| d.id == deck.id) {
            Some(existing) => decks[existing] = deck,
            None => decks.insert(0, deck),
        }
        self.write_decks(&decks);
    }

    /// Removes the matching deck; no-op when the id is absent.
    pub fn remove(&self, id: Uuid) {
        let mut decks = self.list();
        decks.retain(|d| d.id != id);
        self.write_decks(&decks);
    }

    pub fn load_settings(&self) -> AppSettings {
        load_json_or_default(&self.dir.join(SETTINGS_FILE))
    }

    pub fn save_settings(&self, settings: &AppSettings) {
        if let Err(e) = save_json(settings, &self.dir.join(SETTINGS_FILE)) {
            eprintln!("Failed to save settings: {}", e);
        }
    }

    fn write_decks(&self, decks: &[Deck]) {
        if let Err(e) = save_json(&decks, &self.dir.join(DECKS_FILE)) {
            eprintln!("Failed to save decks: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::core::{
        JapaneseWord,
        ThemeMode,
        Word,
    };

    fn deck(title: &str) -> Deck {
        let word = Word::new(
            "Cat".to_string(),
            "বিড়াল".to_string(),
            JapaneseWord { kanji: "猫".to_string(), kana: "ねこ".to_string() },
        );
        Deck::new(title.to_string(), vec![word])
    }

    #[test]
    fn new_decks_are_prepended() {
        let dir = tempfile::tempdir().unwrap();
        let store = DeckStore::with_dir(dir.path().to_path_buf());

        store.upsert(deck("First"));
        store.upsert(deck("Second"));

        let decks = store.list();
        assert_eq!(decks.len(), 2);
        assert_eq!(decks[0].title, "Second");
        assert_eq!(decks[1].title, "First");
    }

    #[test]
    fn upsert_replaces_existing_deck_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let store = DeckStore::with_dir(dir.path().to_path_buf());

        store.upsert(deck("Bottom"));
        let mut updated = deck("Original");
        store.upsert(updated.clone());
        store.upsert(deck("Top"));

        updated.title = "Renamed".to_string();
        store.upsert(updated.clone());

        let decks = store.list();
        assert_eq!(decks.len(), 3);
        assert_eq!(decks[0].title, "Top");
        assert_eq!(decks[1].title, "Renamed");
        assert_eq!(decks[1].id, updated.id);
        assert_eq!(decks[2].title, "Bottom");
    }

    #[test]
    fn remove_deletes_by_id_and_ignores_absent_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = DeckStore::with_dir(dir.path().to_path_buf());

        let keep = deck("Keep");
        let gone = deck("Gone");
        store.upsert(keep.clone());
        store.upsert(gone.clone());

        store.remove(gone.id);
        let decks = store.list();
        assert_eq!(decks.len(), 1);
        assert_eq!(decks[0].id, keep.id);

        // Absent id: no-op.
        store.remove(Uuid::new_v4());
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn corrupt_records_load_as_empty_or_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = DeckStore::with_dir(dir.path().to_path_buf());

        fs::write(dir.path().join(DECKS_FILE), "not json at all").unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "{broken").unwrap();

        assert!(store.list().is_empty());
        assert_eq!(store.load_settings(), AppSettings::default());
    }

    #[test]
    fn settings_round_trip_through_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = DeckStore::with_dir(dir.path().to_path_buf());

        let mut settings = AppSettings::default();
        settings.theme = ThemeMode::Light;
        settings.interval = 9;
        settings.sound_enabled = false;

        store.save_settings(&settings);
        assert_eq!(store.load_settings(), settings);
    }

    #[test]
    fn missing_files_load_as_empty_and_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = DeckStore::with_dir(dir.path().to_path_buf());

        assert!(store.list().is_empty());
        assert_eq!(store.load_settings(), AppSettings::default());
    }
}
