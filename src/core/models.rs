use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};
use uuid::Uuid;

/// One Japanese form: the written form and its kana reading. `kanji` may be
/// empty for words normally written in kana alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JapaneseWord {
    pub kanji: String,
    pub kana: String,
}

/// A single vocabulary entry. Immutable once created; identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: Uuid,
    pub en: String,       // English
    pub bn: String,       // Bengali
    pub jp: JapaneseWord, // Japanese
}

impl Word {
    pub fn new(en: String, bn: String, jp: JapaneseWord) -> Self {
        Word { id: Uuid::new_v4(), en, bn, jp }
    }
}

/// A named, ordered collection of words. Created on import, replaced whole
/// on update, deleted by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub words: Vec<Word>,
}

impl Deck {
    pub fn new(title: String, words: Vec<Word>) -> Self {
        Deck { id: Uuid::new_v4(), title, description: None, created_at: Utc::now(), words }
    }
}
