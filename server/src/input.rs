use anyhow::{Context, Result};
use recommender_core::{source::Format, Document};
use std::fs::File;
use std::path::Path;

/// Load a corpus file, choosing the reader by extension.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let f = File::open(path).with_context(|| format!("opening corpus {}", path.display()))?;
    let docs = format.read(f)?;
    tracing::info!(num_docs = docs.len(), path = %path.display(), "loaded corpus");
    Ok(docs)
}
