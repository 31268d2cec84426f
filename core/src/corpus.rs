use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{PipelineError, Result};

pub type DocId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub link: String,
}

impl Document {
    pub fn new(id: DocId, title: impl Into<String>, text: impl Into<String>, link: impl Into<String>) -> Self {
        Self { id, title: title.into(), text: text.into(), link: link.into() }
    }
}

/// The caller's corpus with the query appended as one synthetic trailing document.
///
/// Positions `0..corpus.len()` are the corpus in insertion order; the query sits at
/// `corpus.len()` and carries an id one greater than the largest corpus id. The
/// borrowed corpus is never modified.
#[derive(Debug)]
pub struct CorpusView<'a> {
    docs: &'a [Document],
    query: Document,
    positions: HashMap<DocId, usize>,
}

impl<'a> CorpusView<'a> {
    pub fn with_query(docs: &'a [Document], query: &str) -> Result<Self> {
        if docs.is_empty() {
            return Err(PipelineError::EmptyCorpus);
        }
        let mut positions = HashMap::with_capacity(docs.len() + 1);
        for (position, doc) in docs.iter().enumerate() {
            if doc.title.trim().is_empty() {
                return Err(PipelineError::MalformedDocument { position, reason: "missing title".into() });
            }
            if positions.insert(doc.id, position).is_some() {
                return Err(PipelineError::MalformedDocument { position, reason: format!("duplicate id {}", doc.id) });
            }
        }
        let max_id = docs.iter().map(|d| d.id).max().unwrap_or(0);
        let query_id = max_id.checked_add(1).ok_or_else(|| PipelineError::MalformedDocument {
            position: positions[&max_id],
            reason: "id leaves no room for the query document".into(),
        })?;
        positions.insert(query_id, docs.len());
        let query = Document::new(query_id, query, "", "");
        Ok(Self { docs, query, positions })
    }

    /// Number of positions, query included.
    pub fn len(&self) -> usize { self.docs.len() + 1 }

    pub fn is_empty(&self) -> bool { false }

    pub fn get(&self, position: usize) -> Option<&Document> {
        match position.cmp(&self.docs.len()) {
            std::cmp::Ordering::Less => self.docs.get(position),
            std::cmp::Ordering::Equal => Some(&self.query),
            std::cmp::Ordering::Greater => None,
        }
    }

    pub fn id_at(&self, position: usize) -> Option<DocId> { self.get(position).map(|d| d.id) }

    pub fn position_of(&self, id: DocId) -> Option<usize> { self.positions.get(&id).copied() }

    pub fn query(&self) -> &Document { &self.query }

    pub fn query_position(&self) -> usize { self.docs.len() }

    /// The caller-owned documents, without the query.
    pub fn corpus(&self) -> &'a [Document] { self.docs }

    pub fn titles(&self) -> impl Iterator<Item = &str> + '_ {
        self.docs.iter().chain(std::iter::once(&self.query)).map(|d| d.title.as_str())
    }
}
