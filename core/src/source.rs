//! Readers that turn tabular or JSON document dumps into [`Document`]s.
//!
//! Callers own the transport; these only decode bytes already in hand.

use serde::Deserialize;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::corpus::{DocId, Document};
use crate::error::{PipelineError, Result};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Num(DocId),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct InputDoc {
    #[serde(default, alias = "ID", alias = "Id")]
    id: Option<RawId>,
    #[serde(default, alias = "Title")]
    title: Option<String>,
    #[serde(default, alias = "Text")]
    text: Option<String>,
    #[serde(default, alias = "Link")]
    link: Option<String>,
}

impl InputDoc {
    fn into_document(self, position: usize) -> Result<Document> {
        let malformed = |reason: &str| PipelineError::MalformedDocument { position, reason: reason.to_string() };
        let id = match self.id {
            Some(RawId::Num(id)) => id,
            Some(RawId::Text(s)) if !s.trim().is_empty() => s.trim().parse().map_err(|_| malformed("id is not a non-negative integer"))?,
            _ => return Err(malformed("missing id")),
        };
        let title = match self.title {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(malformed("missing title")),
        };
        Ok(Document { id, title, text: self.text.unwrap_or_default(), link: self.link.unwrap_or_default() })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Json,
    JsonLines,
}

impl Format {
    /// Pick a format from a file extension (`csv`, `json`, `jsonl`).
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("csv") => Ok(Format::Csv),
            Some("json") => Ok(Format::Json),
            Some("jsonl") => Ok(Format::JsonLines),
            _ => Err(PipelineError::UnsupportedSource(path.display().to_string())),
        }
    }

    pub fn read<R: Read>(self, reader: R) -> Result<Vec<Document>> {
        match self {
            Format::Csv => read_csv(reader),
            Format::Json => read_json(reader),
            Format::JsonLines => read_jsonl(reader),
        }
    }
}

/// CSV with a header row naming `ID`, `title`, `text` and `link` in any order.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Document>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).trim(csv::Trim::Headers).from_reader(reader);
    let mut docs = Vec::new();
    for (position, record) in rdr.deserialize::<InputDoc>().enumerate() {
        docs.push(record?.into_document(position)?);
    }
    Ok(docs)
}

/// A JSON array of documents, or a single document object.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<Document>> {
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(reader))?;
    match json {
        serde_json::Value::Array(arr) => arr
            .into_iter()
            .enumerate()
            .map(|(position, v)| serde_json::from_value::<InputDoc>(v)?.into_document(position))
            .collect(),
        serde_json::Value::Object(_) => Ok(vec![serde_json::from_value::<InputDoc>(json)?.into_document(0)?]),
        _ => Err(PipelineError::UnsupportedSource("expected a JSON array or object".into())),
    }
}

/// One JSON document per line; blank lines are skipped.
pub fn read_jsonl<R: Read>(reader: R) -> Result<Vec<Document>> {
    let mut docs = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let doc: InputDoc = serde_json::from_str(&line)?;
        docs.push(doc.into_document(docs.len())?);
    }
    Ok(docs)
}
