use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::{PipelineError, Result};
use crate::tokenizer::{normalize, stems};

pub type TermId = u32;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerConfig {
    /// Inclusive range of word n-gram lengths.
    pub ngram_range: (usize, usize),
    /// Drop English stop words before building n-grams.
    pub stop_words: bool,
    /// Use idf = ln((1 + N) / (1 + df)) + 1 instead of ln(N / df) + 1.
    pub smooth_idf: bool,
    /// Use tf = 1 + ln(count) instead of the raw count.
    pub sublinear_tf: bool,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self { ngram_range: (1, 3), stop_words: true, smooth_idf: true, sublinear_tf: false }
    }
}

/// N-gram terms mapped to column indices, with their document frequencies and idf weights.
///
/// Columns are assigned in lexicographic term order, so identical input yields identical columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    pub dictionary: HashMap<String, TermId>,
    pub df: Vec<u32>,
    pub idf: Vec<f64>,
    pub num_docs: u32,
}

impl Vocabulary {
    pub fn len(&self) -> usize { self.df.len() }

    pub fn is_empty(&self) -> bool { self.df.is_empty() }

    pub fn term_id(&self, term: &str) -> Option<TermId> { self.dictionary.get(term).copied() }
}

/// Sparse, L2-normalized TF-IDF weights of one document, sorted by term id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentVector {
    dim: usize,
    entries: Vec<(TermId, f64)>,
}

impl DocumentVector {
    /// Builds a vector from unsorted entries; zero weights are dropped.
    pub fn from_entries(dim: usize, mut entries: Vec<(TermId, f64)>) -> Self {
        entries.retain(|(_, w)| *w != 0.0);
        entries.sort_by_key(|(tid, _)| *tid);
        Self { dim, entries }
    }

    /// Vocabulary size this vector is expressed over.
    pub fn dim(&self) -> usize { self.dim }

    pub fn nnz(&self) -> usize { self.entries.len() }

    pub fn is_zero(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (TermId, f64)> + '_ { self.entries.iter().copied() }

    pub fn get(&self, term: TermId) -> f64 {
        self.entries
            .binary_search_by_key(&term, |(tid, _)| *tid)
            .map(|i| self.entries[i].1)
            .unwrap_or(0.0)
    }

    pub fn norm(&self) -> f64 {
        // ascending-magnitude summation keeps equal weight multisets bit-identical
        let mut squares: Vec<f64> = self.entries.iter().map(|(_, w)| w * w).collect();
        squares.sort_by(|a, b| a.total_cmp(b));
        squares.iter().sum::<f64>().sqrt()
    }

    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm == 0.0 { return; }
        for (_, w) in self.entries.iter_mut() { *w /= norm; }
    }

    /// Dot product, walking only the shared term ids of both sorted entry lists.
    pub fn dot(&self, other: &DocumentVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a, wa) = self.entries[i];
            let (b, wb) = other.entries[j];
            match a.cmp(&b) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Contiguous n-grams of `tokens` for every length in `min..=max`, joined by a single space.
pub fn ngrams(tokens: &[String], (min, max): (usize, usize)) -> Vec<String> {
    let mut out = Vec::new();
    for n in min.max(1)..=max {
        if n > tokens.len() { break; }
        out.extend(tokens.windows(n).map(|w| w.join(" ")));
    }
    out
}

/// Learn the vocabulary and idf over all titles, then weight and normalize each title.
pub fn fit_transform<S: AsRef<str>>(titles: &[S], config: &VectorizerConfig) -> Result<(Vocabulary, Vec<DocumentVector>)> {
    if titles.is_empty() {
        return Err(PipelineError::EmptyCorpus);
    }

    let counts: Vec<HashMap<String, u32>> = titles
        .iter()
        .map(|title| {
            let normalized = normalize(title.as_ref());
            let tokens: Vec<String> = stems(&normalized, config.stop_words).collect();
            let mut tf: HashMap<String, u32> = HashMap::new();
            for gram in ngrams(&tokens, config.ngram_range) {
                *tf.entry(gram).or_insert(0) += 1;
            }
            tf
        })
        .collect();

    let mut df_by_term: BTreeMap<&str, u32> = BTreeMap::new();
    for tf in &counts {
        let unique: HashSet<&str> = tf.keys().map(|t| t.as_str()).collect();
        for term in unique {
            *df_by_term.entry(term).or_insert(0) += 1;
        }
    }

    let n = titles.len() as f64;
    let mut dictionary = HashMap::with_capacity(df_by_term.len());
    let mut df = Vec::with_capacity(df_by_term.len());
    let mut idf = Vec::with_capacity(df_by_term.len());
    for (tid, (term, df_t)) in df_by_term.into_iter().enumerate() {
        dictionary.insert(term.to_string(), tid as TermId);
        df.push(df_t);
        let df_t = df_t as f64;
        idf.push(if config.smooth_idf { ((1.0 + n) / (1.0 + df_t)).ln() + 1.0 } else { (n / df_t).ln() + 1.0 });
    }

    let dim = df.len();
    let vectors = counts
        .iter()
        .map(|tf| {
            let entries = tf
                .iter()
                .map(|(term, &count)| {
                    let tid = dictionary[term.as_str()];
                    let tf = if config.sublinear_tf { 1.0 + (count as f64).ln() } else { count as f64 };
                    (tid, tf * idf[tid as usize])
                })
                .collect();
            let mut v = DocumentVector::from_entries(dim, entries);
            v.normalize();
            v
        })
        .collect();

    let vocab = Vocabulary { dictionary, df, idf, num_docs: titles.len() as u32 };
    Ok((vocab, vectors))
}
