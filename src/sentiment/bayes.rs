use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Polarity, SentimentClassifier, seed, tokenize::tokenize};
use crate::error::ClassifierError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct ClassCounts {
    /// Token mass including one smoothing unit per distinct token.
    total: u64,
    counts: HashMap<String, u64>,
}

impl ClassCounts {
    fn add(&mut self, token: String) {
        match self.counts.get_mut(&token) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token, 2);
                self.total += 1;
            }
        }
        self.total += 1;
    }

    /// Unseen tokens count as one smoothing unit.
    fn log_freq(&self, token: &str) -> f64 {
        let count = self.counts.get(token).copied().unwrap_or(1);
        (count as f64).ln() - (self.total as f64).ln()
    }
}

/// Two-class multinomial naive Bayes over [`tokenize`] features.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayes {
    positive: ClassCounts,
    negative: ClassCounts,
}

impl NaiveBayes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default model built from the embedded seed lexicon.
    pub fn seeded() -> Self {
        let mut model = Self::new();
        for word in seed::POSITIVE {
            model.train(Polarity::Positive, word);
        }
        for word in seed::NEGATIVE {
            model.train(Polarity::Negative, word);
        }
        model
    }

    /// Trains from two corpora holding one document per line.
    pub fn train_from_lines(positive: &str, negative: &str) -> Self {
        let mut model = Self::new();
        for line in positive.lines().filter(|l| !l.trim().is_empty()) {
            model.train(Polarity::Positive, line);
        }
        for line in negative.lines().filter(|l| !l.trim().is_empty()) {
            model.train(Polarity::Negative, line);
        }
        model
    }

    pub fn train(&mut self, polarity: Polarity, document: &str) {
        let class = match polarity {
            Polarity::Positive => &mut self.positive,
            Polarity::Negative => &mut self.negative,
        };
        for token in tokenize(document) {
            class.add(token);
        }
    }

    pub fn is_trained(&self) -> bool {
        self.positive.total > 0 && self.negative.total > 0
    }

    pub fn vocabulary_size(&self) -> usize {
        let mut size = self.positive.counts.len();
        size += self
            .negative
            .counts
            .keys()
            .filter(|k| !self.positive.counts.contains_key(*k))
            .count();
        size
    }

    fn log_score(&self, class: &ClassCounts, tokens: &[String]) -> f64 {
        let total = (self.positive.total + self.negative.total) as f64;
        let prior = (class.total as f64).ln() - total.ln();
        tokens
            .iter()
            .fold(prior, |acc, token| acc + class.log_freq(token))
    }
}

impl SentimentClassifier for NaiveBayes {
    fn positive_probability(&self, text: &str) -> Result<f64, ClassifierError> {
        if !self.is_trained() {
            return Err(ClassifierError::Untrained);
        }
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Err(ClassifierError::EmptyInput);
        }

        let diff = self.log_score(&self.negative, &tokens) - self.log_score(&self.positive, &tokens);
        // logistic(-diff), split by sign so exp never overflows
        let p = if diff > 0.0 {
            let e = (-diff).exp();
            e / (1.0 + e)
        } else {
            1.0 / (1.0 + diff.exp())
        };
        Ok(p)
    }
}
