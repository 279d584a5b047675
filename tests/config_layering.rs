use std::fs;
use std::path::PathBuf;

use answer_core::{AnswerEngine, ConfigError, EngineConfig, LoadError, RecognitionLanguage};
use tempfile::tempdir;

#[test]
fn defaults_are_sensible() {
    let config = EngineConfig::default();
    assert_eq!(config.corpus.path, None);
    assert_eq!(config.language.name, "english");
    assert_eq!(config.speech.language, RecognitionLanguage::English);
    assert!(config.logging.color);
}

#[test]
fn yaml_overrides_defaults_partially() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("answer-core.yaml");
    fs::write(
        &path,
        r#"
corpus:
  path: /data/surgical_anatomy.txt
speech:
  language: Français
messages:
  no_match: "Désolé, je n'ai pas trouvé de réponse pertinente."
logging:
  level: debug
"#,
    )
    .unwrap();

    let config = EngineConfig::from_yaml_file(&path).unwrap();
    assert_eq!(config.corpus.path, Some(PathBuf::from("/data/surgical_anatomy.txt")));
    assert_eq!(config.speech.language, RecognitionLanguage::French);
    assert_eq!(config.messages.no_match, "Désolé, je n'ai pas trouvé de réponse pertinente.");
    // Untouched sections keep their defaults
    assert_eq!(config.messages.invalid_input, "Please enter a valid question.");
    assert_eq!(config.language.name, "english");
    assert_eq!(config.logging.level.as_deref(), Some("debug"));
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "corpus: [unterminated").unwrap();

    assert!(matches!(
        EngineConfig::from_yaml_file(&path),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn missing_explicit_config_is_a_read_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.yaml");

    assert!(matches!(
        EngineConfig::load(Some(path.as_path())),
        Err(ConfigError::Read { .. })
    ));
}

#[test]
fn cli_overrides_win() {
    let config = EngineConfig::default().with_overrides(
        Some(PathBuf::from("corpus.txt")),
        Some(PathBuf::from("resources/english")),
        None,
        true,
        true,
    );

    assert_eq!(config.corpus.path, Some(PathBuf::from("corpus.txt")));
    assert_eq!(config.language.resources, Some(PathBuf::from("resources/english")));
    assert_eq!(config.logging.level.as_deref(), Some("debug"));
    assert!(!config.logging.color);

    let explicit = EngineConfig::default().with_overrides(None, None, Some("trace".into()), true, false);
    assert_eq!(explicit.logging.level.as_deref(), Some("trace"));
}

#[test]
fn engine_from_config_end_to_end() {
    let dir = tempdir().unwrap();
    let corpus_path = dir.path().join("corpus.txt");
    fs::write(&corpus_path, "The heart pumps blood.\nThe liver filters blood.\n").unwrap();

    let mut config = EngineConfig::default();
    config.corpus.path = Some(corpus_path);
    config.messages.no_match = "nothing relevant".to_string();

    let engine = AnswerEngine::from_config(&config).unwrap();
    assert_eq!(engine.answer("What pumps blood?"), "The heart pumps blood.");
    assert_eq!(engine.answer("kidney"), "nothing relevant");
}

#[test]
fn engine_without_corpus_fails_fast() {
    let config = EngineConfig::default();
    assert!(matches!(
        AnswerEngine::from_config(&config),
        Err(LoadError::NoCorpusSource)
    ));
}

#[test]
fn engine_with_unknown_language_fails_fast() {
    let dir = tempdir().unwrap();
    let corpus_path = dir.path().join("corpus.txt");
    fs::write(&corpus_path, "Le foie est un organe.").unwrap();

    let mut config = EngineConfig::default();
    config.corpus.path = Some(corpus_path);
    config.language.name = "french".to_string();

    assert!(matches!(
        AnswerEngine::from_config(&config),
        Err(LoadError::UnknownLanguage(_))
    ));
}
