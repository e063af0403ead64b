// Corpus loading and tokenization tests

use std::fs;

use dramvec::processing::{tokenize, Corpus};

#[test]
fn tokenize_lowercases_and_splits_on_non_alphanumeric() {
    assert_eq!(
        tokenize("Peaty, smoky -- VANILLA! (and brine)"),
        vec!["peaty", "smoky", "vanilla", "and", "brine"]
    );
    assert_eq!(tokenize(""), Vec::<String>::new());
    assert_eq!(tokenize("  ,,;;  "), Vec::<String>::new());
    assert_eq!(tokenize("12yo cask-strength"), vec!["12yo", "cask", "strength"]);
}

#[test]
fn load_dir_reads_txt_files_line_per_document() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("islay.txt"),
        "peaty smoky brine\n\niodine and smoke\n",
    )
    .unwrap();
    fs::write(dir.path().join("speyside.txt"), "vanilla honey oak\n").unwrap();
    fs::write(dir.path().join("notes.json"), "{\"ignored\": true}").unwrap();

    let corpus = Corpus::load_dir(dir.path()).unwrap();

    // Blank lines dropped, non-txt files ignored
    assert_eq!(corpus.len(), 3);
    assert!(corpus
        .documents()
        .iter()
        .any(|doc| doc == &["vanilla", "honey", "oak"]));
}

#[test]
fn corpus_id_tracks_content() {
    let a = Corpus::from_documents(vec![vec!["peaty".into(), "smoky".into()]]);
    let same = Corpus::from_documents(vec![vec!["peaty".into(), "smoky".into()]]);
    let different = Corpus::from_documents(vec![vec!["vanilla".into()]]);

    assert_eq!(a.id(), same.id());
    assert_ne!(a.id(), different.id());

    // Document boundaries matter
    let split = Corpus::from_documents(vec![vec!["peaty".into()], vec!["smoky".into()]]);
    assert_ne!(a.id(), split.id());
}

#[test]
fn load_dir_fails_without_corpus_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("readme.md"), "no corpus here").unwrap();

    assert!(Corpus::load_dir(dir.path()).is_err());
}
