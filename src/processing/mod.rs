//! Corpus loading and tokenization

pub mod corpus;

pub use corpus::{tokenize, Corpus};
