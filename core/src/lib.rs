//! Lexical document recommendation: stem titles, weight n-grams by TF-IDF, score every pair by
//! cosine similarity and return the documents closest to a free-text query.

pub mod assembler;
pub mod corpus;
pub mod error;
pub mod query;
pub mod ranker;
pub mod similarity;
pub mod source;
pub mod tokenizer;
pub mod vectorizer;

pub use assembler::{Recommendation, DEFAULT_RESULTS, MAX_RESULTS};
pub use corpus::{CorpusView, DocId, Document};
pub use error::{PipelineError, Result};
pub use query::{effective_query, DEFAULT_QUERY};
pub use ranker::Scored;
pub use vectorizer::{DocumentVector, TermId, VectorizerConfig, Vocabulary};

/// Recommend the `num` corpus documents whose titles are closest to `query`.
pub fn recommend(corpus: &[Document], query: &str, num: usize) -> Result<Vec<Recommendation>> {
    recommend_with(&VectorizerConfig::default(), corpus, query, num)
}

/// [`recommend`] with explicit vectorizer settings.
///
/// Runs load, stem, vectorize, score, rank and assemble in one pass over a fresh view of the
/// corpus plus the query; nothing is retained between calls.
pub fn recommend_with(config: &VectorizerConfig, corpus: &[Document], query: &str, num: usize) -> Result<Vec<Recommendation>> {
    assembler::check_result_count(num)?;
    let view = CorpusView::with_query(corpus, query)?;
    let titles: Vec<&str> = view.titles().collect();
    let (_vocab, vectors) = vectorizer::fit_transform(&titles, config)?;
    let matrix = similarity::compute(&vectors);
    let ranked = ranker::rank_position(&matrix, &view, view.query_position());
    // a corpus of n documents yields at most n - 1 recommendations
    let available = num.min(corpus.len() - 1);
    let mut out = assembler::assemble(&ranked, &view, num)?;
    out.truncate(available);
    Ok(out)
}
