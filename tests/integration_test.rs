use doctools::{AnalysisError, Config, DocumentAnalyzer};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const ESSAY: &str = "\
The quick brown fox jumps over the lazy dog. The dog sleeps!
Foxes are quick; dogs are lazy. Why does the fox jump?
";

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn end_to_end_metrics() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "essay.txt", ESSAY);
    let analyzer = DocumentAnalyzer::with_defaults(&path);

    assert_eq!(analyzer.load_document().unwrap().len(), 2);
    assert_eq!(analyzer.word_count().unwrap(), 23);
    assert_eq!(analyzer.sentence_count().unwrap(), 4);
    assert_eq!(
        analyzer.character_count().unwrap(),
        ESSAY.lines().map(|l| l.chars().count()).sum::<usize>()
    );
    assert_eq!(analyzer.average_sentence_length().unwrap(), 5.75);

    let top = analyzer.most_frequent_words(2).unwrap();
    assert_eq!(top, vec!["quick", "fox"]);

    let fingerprint = analyzer.character_fingerprint().unwrap();
    let letters = ESSAY.chars().filter(|c| c.is_ascii_alphabetic()).count();
    assert_eq!(fingerprint.values().sum::<usize>(), letters);
    assert!(fingerprint.keys().all(|c| c.is_ascii_lowercase()));
}

#[test]
fn find_then_replace() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "essay.txt", ESSAY);
    let analyzer = DocumentAnalyzer::with_defaults(&path);

    let positions = analyzer.find_word("fox").unwrap();
    assert_eq!(positions, vec![4, 22]);
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let out = dir.path().join("edited.txt");
    let count = analyzer.write_document(&out, "fox", "cat").unwrap();
    assert_eq!(count, 2);

    let edited = DocumentAnalyzer::with_defaults(&out);
    assert!(edited.find_word("fox").unwrap().is_empty());
    assert_eq!(edited.find_word("cat").unwrap(), vec![4, 22]);
    // the source document is left alone
    assert_eq!(fs::read_to_string(&path).unwrap(), ESSAY);
}

#[test]
fn spell_check_against_dictionary_file() {
    let dir = tempdir().unwrap();
    let doc = write(dir.path(), "essay.txt", "the cat sat. a dgo barked\n");
    let dict = write(dir.path(), "dictionary.txt", "cat\nsat\n\ndog\nbarked\n");

    let result = DocumentAnalyzer::with_defaults(&doc).spell_check(&dict).unwrap();
    assert_eq!(result.count(), 1);
    assert_eq!(result.indices(), vec![4]);
    assert_eq!(result.misspellings[0].word, "dgo");

    let clean = write(dir.path(), "clean.txt", "cat sat, dog barked.\n");
    let result = DocumentAnalyzer::with_defaults(&clean).spell_check(&dict).unwrap();
    assert_eq!((result.count(), result.indices()), (0, vec![]));
}

#[test]
fn spell_check_missing_dictionary() {
    let dir = tempdir().unwrap();
    let doc = write(dir.path(), "essay.txt", "words\n");
    let analyzer = DocumentAnalyzer::with_defaults(&doc);
    assert!(analyzer.spell_check(dir.path().join("missing.txt")).is_err());
}

#[test]
fn custom_config_changes_analysis() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "essay.txt", "cat cat cat dog dog bird\n");
    let config = Config {
        stop_words: vec!["cat".to_string()],
        autocomplete_limit: 1,
        chart_path: dir.path().join("letters.png"),
        ..Config::default()
    };
    let analyzer = DocumentAnalyzer::new(&path, config);

    assert_eq!(analyzer.most_frequent_words(1).unwrap(), vec!["dog"]);
    assert_eq!(analyzer.auto_complete("").unwrap().words, vec!["cat"]);

    let chart = analyzer.letters_bar_chart().unwrap();
    assert_eq!(chart, dir.path().join("letters.png"));
    assert!(chart.exists());
}

#[test]
fn empty_document_errors_are_typed() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "empty.txt", "\n");
    let analyzer = DocumentAnalyzer::with_defaults(&path);

    assert_eq!(analyzer.word_count().unwrap(), 0);
    let err = analyzer.average_word_length().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AnalysisError>(),
        Some(AnalysisError::EmptyDocument { unit: "words", .. })
    ));
}
