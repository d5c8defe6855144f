//! Text sentiment classification.
//!
//! The scorer only depends on [`SentimentClassifier`]. The bundled
//! implementation is a naive Bayes model that can be bootstrapped from an
//! embedded seed lexicon or trained from labelled corpora with
//! `lyricmood train`.

mod bayes;
mod seed;
mod tokenize;

pub use bayes::NaiveBayes;
pub use tokenize::tokenize;

use crate::error::ClassifierError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

/// Anything that can estimate how positive a piece of text reads.
pub trait SentimentClassifier {
    /// Probability in `[0, 1]` that `text` is positive.
    fn positive_probability(&self, text: &str) -> Result<f64, ClassifierError>;
}
