#[cfg(feature = "multithreaded")]
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::corpus::{CorpusView, DocId};
use crate::similarity::SimilarityMatrix;

/// Top scores examined per row, self included; at most `RANK_WINDOW - 1` survive self-exclusion.
pub const RANK_WINDOW: usize = 21;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scored {
    pub score: f64,
    pub id: DocId,
}

/// Descending score, then ascending id.
fn by_score_then_id(a: &Scored, b: &Scored) -> Ordering {
    b.score.total_cmp(&a.score).then(a.id.cmp(&b.id))
}

/// Ranked neighbours of the document at `position`, excluding itself.
pub fn rank_position(matrix: &SimilarityMatrix, view: &CorpusView<'_>, position: usize) -> Vec<Scored> {
    let mut scored: Vec<Scored> = matrix
        .row(position)
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != position)
        .filter_map(|(j, &score)| view.id_at(j).map(|id| Scored { score, id }))
        .collect();
    let keep = RANK_WINDOW - 1;
    if scored.len() > keep {
        scored.select_nth_unstable_by(keep - 1, by_score_then_id);
        scored.truncate(keep);
    }
    scored.sort_by(by_score_then_id);
    scored
}

/// Ranked neighbours for every document, keyed by document id.
pub fn rank(matrix: &SimilarityMatrix, view: &CorpusView<'_>) -> HashMap<DocId, Vec<Scored>> {
    let per_row = |i: usize| (view.id_at(i), rank_position(matrix, view, i));

    #[cfg(feature = "multithreaded")]
    let rows: Vec<_> = (0..matrix.len()).into_par_iter().map(per_row).collect();
    #[cfg(not(feature = "multithreaded"))]
    let rows: Vec<_> = (0..matrix.len()).map(per_row).collect();

    rows.into_iter().filter_map(|(id, list)| id.map(|id| (id, list))).collect()
}
