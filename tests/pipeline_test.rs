// Training pipeline tests: vocabulary, trainer, reducer

use ndarray::Array2;

use dramvec::core::{train, PipelineError, Projection, RawVectorTable, TrainerConfig, Vocabulary};
use dramvec::processing::tokenize;

fn docs(raw: &[&str]) -> Vec<Vec<String>> {
    raw.iter().map(|line| tokenize(line)).collect()
}

fn whisky_corpus() -> Vec<Vec<String>> {
    docs(&[
        "peaty smoky dram with iodine and brine",
        "smoky peaty islay dram, heavy peat smoke",
        "vanilla honey sweet speyside dram",
        "sweet vanilla and honey, gentle oak",
        "peaty smoke and brine, coastal iodine",
        "honey sweet dram with vanilla oak finish",
    ])
}

#[test]
fn vocabulary_orders_by_frequency_then_first_appearance() {
    let corpus = docs(&["b a a c", "c b a"]);
    let vocab = Vocabulary::build(&corpus, 1).unwrap();

    // a appears 3 times; b and c tie at 2, b appeared first
    assert_eq!(vocab.token(0), Some("a"));
    assert_eq!(vocab.token(1), Some("b"));
    assert_eq!(vocab.token(2), Some("c"));
    assert_eq!(vocab.len(), 3);
    assert_eq!(vocab.oov_id(), 3);
    assert_eq!(vocab.rows(), 4);
}

#[test]
fn vocabulary_filters_below_min_count() {
    let corpus = docs(&["peaty peaty smoky", "peaty rare"]);
    let vocab = Vocabulary::build(&corpus, 2).unwrap();

    assert_eq!(vocab.get("peaty"), Some(0));
    assert_eq!(vocab.get("smoky"), None);
    assert_eq!(vocab.get("rare"), None);

    // Dropped tokens resolve to the OOV sentinel
    assert_eq!(vocab.id_of("smoky"), vocab.oov_id());
    assert_eq!(vocab.id_of("never-seen"), vocab.oov_id());
}

#[test]
fn vocabulary_build_is_reproducible() {
    let corpus = whisky_corpus();
    let a = Vocabulary::build(&corpus, 2).unwrap();
    let b = Vocabulary::build(&corpus, 2).unwrap();

    assert_eq!(a.len(), b.len());
    for id in 0..a.len() as u32 {
        assert_eq!(a.token(id), b.token(id));
    }
    assert_eq!(a.counts(), b.counts());
}

#[test]
fn empty_corpus_is_an_error() {
    let err = Vocabulary::build(&[], 1).unwrap_err();
    assert!(matches!(err, PipelineError::EmptyCorpus { .. }));

    // Nonempty corpus where nothing clears the threshold
    let corpus = docs(&["one of each token only"]);
    let err = Vocabulary::build(&corpus, 5).unwrap_err();
    assert!(matches!(err, PipelineError::EmptyCorpus { min_count: 5 }));
}

#[test]
fn training_same_seed_is_bit_identical() {
    let corpus = whisky_corpus();
    let vocab = Vocabulary::build(&corpus, 2).unwrap();
    let config = TrainerConfig {
        dim: 16,
        window: 2,
        epochs: 3,
        ..TrainerConfig::default()
    };

    let a = train(&corpus, &vocab, &config, None);
    let b = train(&corpus, &vocab, &config, None);

    assert_eq!(a.matrix(), b.matrix());
}

#[test]
fn trained_table_has_expected_shape_and_zero_oov_row() {
    let corpus = whisky_corpus();
    let vocab = Vocabulary::build(&corpus, 2).unwrap();
    let config = TrainerConfig {
        dim: 12,
        epochs: 2,
        ..TrainerConfig::default()
    };

    let table = train(&corpus, &vocab, &config, None);

    assert_eq!(table.rows(), vocab.rows());
    assert_eq!(table.dim(), 12);
    assert!(table.row(vocab.oov_id()).iter().all(|&x| x == 0.0));
}

#[test]
fn training_moves_vectors_from_init() {
    let corpus = whisky_corpus();
    let vocab = Vocabulary::build(&corpus, 2).unwrap();
    let config = TrainerConfig {
        dim: 16,
        epochs: 3,
        ..TrainerConfig::default()
    };

    let trained = train(&corpus, &vocab, &config, None);
    let init_only = train(&corpus, &vocab, &TrainerConfig { epochs: 0, ..config }, None);

    assert_ne!(trained.matrix(), init_only.matrix());
}

#[test]
fn stop_flag_ends_training_at_epoch_boundary() {
    use std::sync::atomic::{AtomicBool, Ordering};

    let corpus = whisky_corpus();
    let vocab = Vocabulary::build(&corpus, 2).unwrap();
    let config = TrainerConfig {
        dim: 16,
        epochs: 4,
        ..TrainerConfig::default()
    };

    let stop = AtomicBool::new(false);
    stop.store(true, Ordering::Relaxed);
    let stopped = train(&corpus, &vocab, &config, Some(&stop));

    // Raised before the first epoch: only the seeded init survives
    let init_only = train(&corpus, &vocab, &TrainerConfig { epochs: 0, ..config }, None);
    assert_eq!(stopped.matrix(), init_only.matrix());
}

#[test]
fn pca_rejects_k_out_of_range() {
    let table = RawVectorTable::new(Array2::<f32>::zeros((5, 50)));

    let err = Projection::fit(&table, 50).unwrap_err();
    assert!(matches!(err, PipelineError::Dimension { k: 50, dim: 50 }));

    let err = Projection::fit(&table, 0).unwrap_err();
    assert!(matches!(err, PipelineError::Dimension { k: 0, dim: 50 }));

    assert!(Projection::fit(&table, 49).is_ok());
}

#[test]
fn pca_finds_dominant_variance_direction() {
    // Variance concentrated on axis 0, a little on axis 1, none on axis 2
    let rows = vec![
        [5.0, 1.0, 0.0],
        [-5.0, -1.0, 0.0],
        [5.0, -1.0, 0.0],
        [-5.0, 1.0, 0.0],
    ];
    let mut data = Array2::<f32>::zeros((4, 3));
    for (i, row) in rows.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            data[[i, j]] = v;
        }
    }
    let table = RawVectorTable::new(data);

    let projection = Projection::fit(&table, 2).unwrap();
    assert_eq!(projection.dim(), 3);
    assert_eq!(projection.k(), 2);

    // First component is the x axis (sign-fixed positive), second the y axis
    let projected = projection.project(ndarray::arr1(&[2.0, 3.0, 4.0]).view());
    assert!((projected[0] - 2.0).abs() < 1e-4, "got {}", projected[0]);
    assert!((projected[1] - 3.0).abs() < 1e-4, "got {}", projected[1]);
}

#[test]
fn pca_is_stable_for_a_fixed_input() {
    let corpus = whisky_corpus();
    let vocab = Vocabulary::build(&corpus, 2).unwrap();
    let config = TrainerConfig {
        dim: 10,
        epochs: 2,
        ..TrainerConfig::default()
    };
    let table = train(&corpus, &vocab, &config, None);

    let a = Projection::fit(&table, 4).unwrap();
    let b = Projection::fit(&table, 4).unwrap();

    let probe = ndarray::Array1::from_elem(10, 0.5);
    assert_eq!(a.project(probe.view()), b.project(probe.view()));
}
