use std::fs;

use answer_core::{AnswerEngine, CorpusLoader, LoadError, TextNormalizer};
use tempfile::tempdir;

const ANATOMY: &str = "The liver is the largest internal organ.\n\
It is located in the right upper quadrant of the abdomen, below the\n\
diaphragm. Dr. Smith described its blood supply in detail.\n\
\n\
The hepatic artery and the portal vein carry blood to the liver.";

#[test]
fn loads_sentences_in_order() {
    let normalizer = TextNormalizer::english().unwrap();
    let corpus = CorpusLoader::new(&normalizer).load_str(ANATOMY).unwrap();

    let raws: Vec<&str> = corpus.iter().map(|s| s.raw()).collect();
    assert_eq!(
        raws,
        vec![
            "The liver is the largest internal organ.",
            "It is located in the right upper quadrant of the abdomen, below the diaphragm.",
            "Dr. Smith described its blood supply in detail.",
            "The hepatic artery and the portal vein carry blood to the liver.",
        ]
    );

    for (i, sentence) in corpus.iter().enumerate() {
        assert_eq!(sentence.index(), i);
    }
}

#[test]
fn sentence_tokens_are_cached_lemmas() {
    let normalizer = TextNormalizer::english().unwrap();
    let corpus = CorpusLoader::new(&normalizer).load_str(ANATOMY).unwrap();

    let tokens: Vec<&str> = corpus.get(3).unwrap().tokens().iter().map(String::as_str).collect();
    assert_eq!(tokens, vec!["artery", "blood", "carry", "hepatic", "liver", "portal", "vein"]);
}

#[test]
fn loads_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("surgical_anatomy.txt");
    fs::write(&path, ANATOMY).unwrap();

    let engine = AnswerEngine::from_path(&path, TextNormalizer::english().unwrap()).unwrap();
    assert_eq!(engine.corpus().len(), 4);
    assert_eq!(
        engine.answer("Which vessels carry blood to the liver?"),
        "The hepatic artery and the portal vein carry blood to the liver."
    );
    assert_eq!(
        engine.answer("Where is it located?"),
        "It is located in the right upper quadrant of the abdomen, below the diaphragm."
    );
}

#[test]
fn missing_file_is_unreadable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let result = AnswerEngine::from_path(&path, TextNormalizer::english().unwrap());
    match result {
        Err(LoadError::Unreadable { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Unreadable, got {other:?}"),
    }
}

#[test]
fn empty_and_whitespace_sources_are_rejected() {
    let normalizer = TextNormalizer::english().unwrap();
    let loader = CorpusLoader::new(&normalizer);

    for text in ["", "   ", "\n\n", " \r\n\t "] {
        assert!(
            matches!(loader.load_str(text), Err(LoadError::EmptyCorpus)),
            "{text:?} should be rejected"
        );
    }
}

#[test]
fn manifest_summarizes_corpus() {
    let normalizer = TextNormalizer::english().unwrap();
    let corpus = CorpusLoader::new(&normalizer)
        .load_str("The heart pumps blood. The liver filters blood.")
        .unwrap();

    let manifest = corpus.manifest();
    assert_eq!(manifest.sentence_count, 2);
    assert_eq!(manifest.language, "english");
    // blood, filter, heart, liver, pump
    assert_eq!(manifest.vocabulary_size, 5);
    assert_eq!(&manifest.version, corpus.version());

    let json = serde_json::to_string(&manifest).unwrap();
    let version_pos = json.find("\"version\":").unwrap();
    let loaded_pos = json.find("\"loaded_at\":").unwrap();
    assert!(version_pos < loaded_pos);
}

#[test]
fn line_breaks_do_not_change_version() {
    let normalizer = TextNormalizer::english().unwrap();
    let loader = CorpusLoader::new(&normalizer);

    let wrapped = loader.load_str("The heart\npumps blood.").unwrap();
    let flat = loader.load_str("The heart pumps blood.").unwrap();

    assert_eq!(wrapped.version(), flat.version());
    assert_eq!(wrapped.get(0).unwrap().raw(), "The heart pumps blood.");
}

#[test]
fn single_letter_names_do_not_swallow_the_next_sentence() {
    let normalizer = TextNormalizer::english().unwrap();
    let corpus = CorpusLoader::new(&normalizer)
        .load_str("The patient received vitamin K. The bleeding stopped. It was J. Hunter who wrote it.")
        .unwrap();

    let raws: Vec<&str> = corpus.iter().map(|s| s.raw()).collect();
    assert_eq!(
        raws,
        vec![
            "The patient received vitamin K.",
            "The bleeding stopped.",
            "It was J. Hunter who wrote it.",
        ]
    );
    assert_eq!(corpus.get(1).unwrap().index(), 1);
}
