use serde_json::Value;

use super::{
    errors::FlashifyError,
    models::{
        Deck,
        JapaneseWord,
        Word,
    },
};

/// A validated import payload, not yet a deck: ids are only assigned once
/// the user confirms a title and the deck is actually created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPayload {
    pub title: Option<String>,
    pub words: Vec<ImportWord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportWord {
    pub en: String,
    pub bn: String,
    pub kanji: String,
    pub kana: String,
}

impl ImportPayload {
    pub fn into_deck(self, title: String) -> Deck {
        let words = self
            .words
            .into_iter()
            .map(|w| Word::new(w.en, w.bn, JapaneseWord { kanji: w.kanji, kana: w.kana }))
            .collect();

        Deck::new(title, words)
    }
}

/// Parses a pasted import blob in two stages so the user sees the right
/// message: a JSON parse failure is `InvalidSyntax`, anything that parses
/// but does not match the schema is `InvalidFormat`. No partial result is
/// ever produced.
///
/// The schema: a `words` array whose every entry has string `en`, string
/// `bn` and an object `jp` with string `kanji` and `kana`. Empty strings
/// are permitted, unknown extra fields are ignored.
pub fn parse_import(input: &str) -> Result<ImportPayload, FlashifyError> {
    let json: Value =
        serde_json::from_str(input).map_err(|e| FlashifyError::InvalidSyntax(e.to_string()))?;

    let entries = json
        .get("words")
        .and_then(Value::as_array)
        .ok_or_else(|| FlashifyError::InvalidFormat("'words' must be an array".to_string()))?;

    let mut words = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let word = parse_entry(entry).ok_or_else(|| {
            FlashifyError::InvalidFormat(format!("word {} does not match the schema", i + 1))
        })?;
        words.push(word);
    }

    let title = json.get("title").and_then(Value::as_str).map(str::to_string);

    Ok(ImportPayload { title, words })
}

fn parse_entry(entry: &Value) -> Option<ImportWord> {
    let en = entry.get("en")?.as_str()?;
    let bn = entry.get("bn")?.as_str()?;
    let jp = entry.get("jp")?;
    let kanji = jp.get("kanji")?.as_str()?;
    let kana = jp.get("kana")?.as_str()?;

    Some(ImportWord {
        en: en.to_string(),
        bn: bn.to_string(),
        kanji: kanji.to_string(),
        kana: kana.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_payload() {
        let payload = parse_import(
            r#"{"words":[{"en":"Cat","bn":"বিড়াল","jp":{"kanji":"猫","kana":"ねこ"}}]}"#,
        )
        .unwrap();

        assert_eq!(payload.title, None);
        assert_eq!(payload.words.len(), 1);
        assert_eq!(payload.words[0].en, "Cat");
        assert_eq!(payload.words[0].bn, "বিড়াল");
        assert_eq!(payload.words[0].kanji, "猫");
        assert_eq!(payload.words[0].kana, "ねこ");
    }

    #[test]
    fn title_is_carried_through_when_present() {
        let payload = parse_import(
            r#"{"title":"Animals","words":[{"en":"Dog","bn":"কুকুর","jp":{"kanji":"犬","kana":"いぬ"}}]}"#,
        )
        .unwrap();

        assert_eq!(payload.title.as_deref(), Some("Animals"));
    }

    #[test]
    fn unparseable_input_is_a_syntax_error() {
        let err = parse_import(r#"{"words": [}"#).unwrap_err();
        assert!(matches!(err, FlashifyError::InvalidSyntax(_)));
    }

    #[test]
    fn words_must_be_an_array() {
        let err = parse_import(r#"{"words":"Cat"}"#).unwrap_err();
        assert!(matches!(err, FlashifyError::InvalidFormat(_)));

        let err = parse_import(r#"{"title":"Animals"}"#).unwrap_err();
        assert!(matches!(err, FlashifyError::InvalidFormat(_)));
    }

    #[test]
    fn entry_missing_a_field_is_a_format_error() {
        let err = parse_import(r#"{"words":[{"en":"Cat","jp":{"kanji":"猫","kana":"ねこ"}}]}"#)
            .unwrap_err();
        assert!(matches!(err, FlashifyError::InvalidFormat(_)));
    }

    #[test]
    fn jp_must_be_an_object_with_string_forms() {
        let err =
            parse_import(r#"{"words":[{"en":"Cat","bn":"বিড়াল","jp":"ねこ"}]}"#).unwrap_err();
        assert!(matches!(err, FlashifyError::InvalidFormat(_)));

        let err = parse_import(
            r#"{"words":[{"en":"Cat","bn":"বিড়াল","jp":{"kanji":1,"kana":"ねこ"}}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, FlashifyError::InvalidFormat(_)));
    }

    #[test]
    fn empty_strings_are_permitted() {
        let payload = parse_import(
            r#"{"words":[{"en":"","bn":"","jp":{"kanji":"","kana":""}}]}"#,
        )
        .unwrap();

        assert_eq!(payload.words.len(), 1);
        assert!(payload.words[0].kanji.is_empty());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let payload = parse_import(
            r#"{"words":[{"en":"Cat","bn":"বিড়াল","jp":{"kanji":"猫","kana":"ねこ"},"note":"x"}],"source":"llm"}"#,
        )
        .unwrap();

        assert_eq!(payload.words.len(), 1);
    }

    #[test]
    fn into_deck_assigns_fresh_ids_and_keeps_order() {
        let payload = parse_import(
            r#"{"words":[
                {"en":"Cat","bn":"বিড়াল","jp":{"kanji":"猫","kana":"ねこ"}},
                {"en":"Dog","bn":"কুকুর","jp":{"kanji":"犬","kana":"いぬ"}}
            ]}"#,
        )
        .unwrap();

        let deck = payload.into_deck("Animals".to_string());

        assert_eq!(deck.title, "Animals");
        assert_eq!(deck.words.len(), 2);
        assert_eq!(deck.words[0].en, "Cat");
        assert_eq!(deck.words[1].en, "Dog");
        assert_ne!(deck.words[0].id, deck.words[1].id);
    }
}
