//! # JSON Vocabulary Document

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{HTResult, HybridTokError},
    types::{TokenType, token_index},
    vocab::{CharVocab, HybridVocab, SpecialToken, WordVocab},
};

/// The persisted form of a [`HybridVocab`].
///
/// Inverse tables are keyed by the decimal id string, since JSON object keys
/// must be strings. Every field is required on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabDocument {
    /// Word (and special placeholder) to id.
    pub word_to_id: BTreeMap<String, u64>,

    /// Decimal id to word.
    pub id_to_word: BTreeMap<String, String>,

    /// Single-character string to local char id.
    pub char_to_id: BTreeMap<String, u64>,

    /// Decimal local char id to single-character string.
    pub id_to_char: BTreeMap<String, String>,

    /// The configured word cap.
    pub vocab_size: usize,

    /// Special placeholder to id.
    pub special_tokens: BTreeMap<String, u64>,
}

impl VocabDocument {
    /// Snapshot a vocabulary.
    pub fn from_vocab<T: TokenType>(vocab: &HybridVocab<T>) -> Self {
        let id = |token: T| token_index(token) as u64;

        Self {
            word_to_id: vocab
                .words()
                .iter()
                .map(|(t, w)| (w.to_string(), id(t)))
                .collect(),
            id_to_word: vocab
                .words()
                .iter()
                .map(|(t, w)| (id(t).to_string(), w.to_string()))
                .collect(),
            char_to_id: vocab
                .chars()
                .iter()
                .map(|(t, c)| (c.to_string(), id(t)))
                .collect(),
            id_to_char: vocab
                .chars()
                .iter()
                .map(|(t, c)| (id(t).to_string(), c.to_string()))
                .collect(),
            vocab_size: vocab.max_word_vocab(),
            special_tokens: vocab
                .specials()
                .iter()
                .map(|(s, t)| (s.to_string(), id(t)))
                .collect(),
        }
    }

    /// Validate the document and convert it to a [`HybridVocab`].
    ///
    /// Fails with [`HybridTokError::MalformedPersistence`] unless:
    /// * `special_tokens` is exactly the six fixed specials;
    /// * each forward table and its inverse agree entry for entry;
    /// * ids in each table are contiguous from zero;
    /// * every char key is a single character.
    pub fn try_into_vocab<T: TokenType>(&self) -> HTResult<HybridVocab<T>> {
        self.check_special_tokens()?;

        let words = ordered_entries(&self.word_to_id, &self.id_to_word, "word")?;
        let chars = ordered_entries(&self.char_to_id, &self.id_to_char, "char")?
            .into_iter()
            .map(|s| single_char(&s))
            .collect::<HTResult<Vec<char>>>()?;

        HybridVocab::try_new(
            WordVocab::try_from_words(words)?,
            CharVocab::try_from_chars(chars)?,
            self.vocab_size,
        )
    }

    fn check_special_tokens(&self) -> HTResult<()> {
        let expected: BTreeMap<String, u64> = SpecialToken::ALL
            .iter()
            .map(|s| (s.as_str().to_string(), s.id() as u64))
            .collect();

        if self.special_tokens != expected {
            return Err(HybridTokError::malformed(format!(
                "special_tokens must be {expected:?}, found {:?}",
                self.special_tokens
            )));
        }
        Ok(())
    }
}

/// Cross-check a forward table against its inverse; return keys in id order.
fn ordered_entries(
    forward: &BTreeMap<String, u64>,
    inverse: &BTreeMap<String, String>,
    table: &str,
) -> HTResult<Vec<String>> {
    if forward.len() != inverse.len() {
        return Err(HybridTokError::malformed(format!(
            "{table} table has {} entries but its inverse has {}",
            forward.len(),
            inverse.len()
        )));
    }

    let mut slots: Vec<Option<String>> = vec![None; forward.len()];
    for (key, &id) in forward {
        let idx = usize::try_from(id)
            .ok()
            .filter(|&idx| idx < slots.len())
            .ok_or_else(|| {
                HybridTokError::malformed(format!(
                    "{table} id {id} for {key:?} is outside 0..{}",
                    slots.len()
                ))
            })?;

        match inverse.get(&id.to_string()) {
            Some(value) if value == key => {}
            other => {
                return Err(HybridTokError::malformed(format!(
                    "{table} {key:?} maps to {id}, but the inverse maps {id} to {other:?}"
                )));
            }
        }

        if slots[idx].replace(key.clone()).is_some() {
            return Err(HybridTokError::malformed(format!(
                "{table} id {id} is assigned twice"
            )));
        }
    }

    for key in inverse.keys() {
        if key.parse::<u64>().is_err() {
            return Err(HybridTokError::malformed(format!(
                "{table} inverse key {key:?} is not a decimal id"
            )));
        }
    }

    // Every slot is filled: ids are in range, unique, and there are `len` of them.
    Ok(slots.into_iter().flatten().collect())
}

fn single_char(s: &str) -> HTResult<char> {
    let mut it = s.chars();
    match (it.next(), it.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(HybridTokError::malformed(format!(
            "char table key {s:?} is not a single character"
        ))),
    }
}

fn malformed_json(err: serde_json::Error) -> HybridTokError {
    if err.is_io() {
        HybridTokError::Io(err.into())
    } else {
        HybridTokError::malformed(err.to_string())
    }
}

/// Write a vocabulary as pretty-printed JSON.
pub fn write_vocab<T, W>(
    vocab: &HybridVocab<T>,
    writer: W,
) -> HTResult<()>
where
    T: TokenType,
    W: Write,
{
    serde_json::to_writer_pretty(writer, &VocabDocument::from_vocab(vocab))?;
    Ok(())
}

/// Read and validate a JSON vocabulary.
pub fn read_vocab<T, R>(reader: R) -> HTResult<HybridVocab<T>>
where
    T: TokenType,
    R: Read,
{
    let doc: VocabDocument = serde_json::from_reader(reader).map_err(malformed_json)?;
    doc.try_into_vocab()
}

/// Render a vocabulary as a pretty-printed JSON string.
pub fn vocab_to_json<T: TokenType>(vocab: &HybridVocab<T>) -> HTResult<String> {
    Ok(serde_json::to_string_pretty(&VocabDocument::from_vocab(
        vocab,
    ))?)
}

/// Parse and validate a JSON vocabulary string.
pub fn vocab_from_json<T: TokenType>(json: &str) -> HTResult<HybridVocab<T>> {
    let doc: VocabDocument = serde_json::from_str(json).map_err(malformed_json)?;
    doc.try_into_vocab()
}

/// Save a vocabulary to a JSON file.
pub fn save_vocab_path<T, P>(
    vocab: &HybridVocab<T>,
    path: P,
) -> HTResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_vocab(vocab, &mut writer)?;
    writer.flush()?;

    log::info!("Vocabulary saved to {}", path.display());
    Ok(())
}

/// Load a vocabulary from a JSON file.
pub fn load_vocab_path<T, P>(path: P) -> HTResult<HybridVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let vocab = read_vocab(BufReader::new(File::open(path)?))?;

    log::info!("Vocabulary loaded from {}", path.display());
    Ok(vocab)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::training::HybridVocabBuilderOptions;

    fn test_vocab() -> HybridVocab<u32> {
        HybridVocabBuilderOptions::default()
            .with_max_word_vocab(10)
            .build_from_samples(["the cat sat.", "the dog sat.", "Ünïcödé ok"])
            .unwrap()
    }

    #[test]
    fn test_document_fields() {
        let vocab = test_vocab();
        let doc = VocabDocument::from_vocab(&vocab);

        assert_eq!(doc.vocab_size, 10);
        assert_eq!(doc.special_tokens.len(), 6);
        assert_eq!(doc.special_tokens["<CHAR_END>"], 5);
        assert_eq!(doc.word_to_id["<PAD>"], 0);
        assert_eq!(doc.word_to_id["the"], 6);
        assert_eq!(doc.id_to_word["6"], "the");
        assert_eq!(doc.char_to_id.len(), vocab.char_count());
        assert_eq!(doc.id_to_char["0"], ".");
    }

    #[test]
    fn test_json_round_trip() {
        let vocab = test_vocab();
        let json = vocab_to_json(&vocab).unwrap();

        // non-ascii stays literal.
        assert!(json.contains("\"ü\""));

        let loaded: HybridVocab<u32> = vocab_from_json(&json).unwrap();
        assert_eq!(loaded, vocab);
    }

    #[test]
    fn test_round_trip_other_token_type() {
        let vocab = test_vocab();
        let json = vocab_to_json(&vocab).unwrap();
        let loaded: HybridVocab<u16> = vocab_from_json(&json).unwrap();
        assert_eq!(loaded.vocab_size(), vocab.vocab_size());
        assert_eq!(loaded.word_token("sat"), Some(7));
    }

    #[test]
    fn test_save_load_path() {
        let vocab = test_vocab();

        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("vocab.json");

                save_vocab_path(&vocab, &path).expect("failed to save vocab");
                let loaded: HybridVocab<u32> =
                    load_vocab_path(&path).expect("failed to load vocab");
                assert_eq!(&loaded, &vocab);

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_vocab_path::<u32, _>("/nonexistent/hybridtok/vocab.json").unwrap_err();
        assert!(matches!(err, HybridTokError::Io(_)));
    }

    fn doc_value() -> Value {
        serde_json::to_value(VocabDocument::from_vocab(&test_vocab())).unwrap()
    }

    fn load_value(value: Value) -> HTResult<HybridVocab<u32>> {
        vocab_from_json(&value.to_string())
    }

    #[test]
    fn test_missing_fields() {
        for field in [
            "word_to_id",
            "id_to_word",
            "char_to_id",
            "id_to_char",
            "vocab_size",
            "special_tokens",
        ] {
            let mut value = doc_value();
            value.as_object_mut().unwrap().remove(field);

            let err = load_value(value).unwrap_err();
            assert!(
                matches!(&err, HybridTokError::MalformedPersistence(msg) if msg.contains(field)),
                "{field}: {err}"
            );
        }
    }

    #[test]
    fn test_wrong_types() {
        let mut value = doc_value();
        value["vocab_size"] = json!("many");
        assert!(matches!(
            load_value(value),
            Err(HybridTokError::MalformedPersistence(_))
        ));

        let mut value = doc_value();
        value["word_to_id"]["the"] = json!(-4);
        assert!(matches!(
            load_value(value),
            Err(HybridTokError::MalformedPersistence(_))
        ));

        assert!(matches!(
            vocab_from_json::<u32>("not json"),
            Err(HybridTokError::MalformedPersistence(_))
        ));
    }

    #[test]
    fn test_inconsistent_inverse() {
        let mut value = doc_value();
        value["id_to_word"]["6"] = json!("cat");
        assert!(matches!(
            load_value(value),
            Err(HybridTokError::MalformedPersistence(_))
        ));

        let mut value = doc_value();
        value["id_to_char"].as_object_mut().unwrap().remove("0");
        assert!(matches!(
            load_value(value),
            Err(HybridTokError::MalformedPersistence(_))
        ));
    }

    #[test]
    fn test_non_contiguous_ids() {
        let mut value = doc_value();
        let n = value["word_to_id"].as_object().unwrap().len() as u64;
        value["word_to_id"]["the"] = json!(n + 5);
        value["id_to_word"].as_object_mut().unwrap().remove("6");
        value["id_to_word"][(n + 5).to_string()] = json!("the");
        assert!(matches!(
            load_value(value),
            Err(HybridTokError::MalformedPersistence(_))
        ));
    }

    #[test]
    fn test_bad_char_key() {
        let mut value = doc_value();
        value["char_to_id"]["ab"] = value["char_to_id"]["."].clone();
        value["char_to_id"].as_object_mut().unwrap().remove(".");
        value["id_to_char"]["0"] = json!("ab");
        assert!(matches!(
            load_value(value),
            Err(HybridTokError::MalformedPersistence(msg)) if msg.contains("single character")
        ));
    }

    #[test]
    fn test_bad_special_tokens() {
        let mut value = doc_value();
        value["special_tokens"]["<PAD>"] = json!(9);
        assert!(matches!(
            load_value(value),
            Err(HybridTokError::MalformedPersistence(_))
        ));

        let mut value = doc_value();
        value["special_tokens"]["<MASK>"] = json!(6);
        assert!(matches!(
            load_value(value),
            Err(HybridTokError::MalformedPersistence(_))
        ));
    }
}
