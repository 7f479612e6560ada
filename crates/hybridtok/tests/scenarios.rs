#![allow(missing_docs)]

use std::{fs, sync::Arc};

use hybridtok::{
    BatchOptions,
    HybridTokError,
    HybridVocab,
    SpecialToken,
    Tokenizer,
    TokenizerOptions,
    TruncationPolicy,
    training::HybridVocabBuilderOptions,
    vocab::io::{load_vocab_path, save_vocab_path},
};
use tempdir::TempDir;

type T = u32;

const CORPUS: &[&str] = &["the cat sat.", "the dog sat."];

fn build(corpus: &[&str]) -> Arc<HybridVocab<T>> {
    HybridVocabBuilderOptions::new(10)
        .build_from_samples(corpus)
        .unwrap()
        .into()
}

#[test]
fn test_concrete_scenario() {
    let vocab = build(CORPUS);

    let the = vocab.word_token("the").unwrap();
    let sat = vocab.word_token("sat").unwrap();
    let dot = vocab.word_token(".").unwrap();
    for word in ["cat", "dog"] {
        let id = vocab.word_token(word).unwrap();
        assert!(the < id && sat < id && dot < id);
    }

    // 'z' never occurs in the corpus, so it is unknown inside the span.
    let tokenizer = Tokenizer::from_vocab(vocab.clone());
    assert_eq!(
        tokenizer.try_encode("the zzz.").unwrap(),
        vec![2, the, 4, 1, 1, 1, 5, dot, 3]
    );
}

#[test]
fn test_concrete_scenario_with_known_chars() {
    let vocab = build(&["the cat sat.", "the dog sat.", "zoo"]);
    let z = vocab.char_token('z').unwrap();
    assert_eq!(z, vocab.char_offset() + 10);

    let tokenizer = Tokenizer::from_vocab(vocab.clone());
    let tokens = tokenizer.try_encode("the zzz.").unwrap();
    assert_eq!(tokens, vec![2, 6, 4, z, z, z, 5, 8, 3]);
    assert_eq!(tokenizer.try_decode(&tokens).unwrap(), "the zzz .");
}

#[test]
fn test_end_of_text_marker() {
    let vocab = build(&["one doc.<|endoftext|> two doc. <|ENDOFTEXT|>"]);
    assert_eq!(vocab.word_token("<EOS>"), Some(3));
    assert!(vocab.words().words()[SpecialToken::COUNT..].iter().all(|w| w != "<EOS>"));

    let tokenizer = Tokenizer::from_vocab(vocab);
    assert_eq!(
        tokenizer
            .try_encode_with("doc <|endoftext|> doc", false)
            .unwrap(),
        vec![6, 3, 6]
    );
}

#[test]
fn test_file_persistence() {
    let vocab = build(CORPUS);

    let tmp_dir = TempDir::new("hybridtok_scenarios").unwrap();
    let path = tmp_dir.path().join("vocab.json");
    save_vocab_path(vocab.as_ref(), &path).unwrap();

    let loaded: HybridVocab<T> = load_vocab_path(&path).unwrap();
    assert_eq!(&loaded, vocab.as_ref());

    let missing = tmp_dir.path().join("missing.json");
    assert!(matches!(
        load_vocab_path::<T, _>(&missing),
        Err(HybridTokError::Io(_))
    ));

    let truncated = tmp_dir.path().join("truncated.json");
    fs::write(&truncated, r#"{"word_to_id": {}}"#).unwrap();
    assert!(matches!(
        load_vocab_path::<T, _>(&truncated),
        Err(HybridTokError::MalformedPersistence(_))
    ));
}

#[test]
fn test_batch_truncation_policies() {
    let tokenizer = TokenizerOptions::default()
        .with_parallel(true)
        .build(build(CORPUS));
    let texts = vec!["the toast sat.".to_string(), "the cat".to_string()];

    let tokens = tokenizer
        .try_encode_batch(&texts, &BatchOptions::default().with_max_length(5))
        .unwrap();
    assert_eq!(tokens.ids[0], vec![2, 6, 4, 20, 18]);
    assert_eq!(tokens.real_lengths(), vec![5, 4]);
    // A cut span still decodes.
    assert_eq!(
        tokenizer.try_decode_batch(&tokens.ids).unwrap(),
        vec!["the to".to_string(), "the cat".to_string()]
    );

    let fragments = tokenizer
        .try_encode_batch(
            &texts,
            &BatchOptions::default()
                .with_max_length(5)
                .with_truncation(TruncationPolicy::Fragments),
        )
        .unwrap();
    assert_eq!(fragments.ids[0], vec![2, 6, 0, 0, 0]);
    assert_eq!(fragments.real_lengths(), vec![2, 4]);
}
