use serde::{Deserialize, Serialize};

use crate::corpus::CorpusView;
use crate::error::{PipelineError, Result};
use crate::ranker::Scored;

/// Largest number of recommendations a caller may ask for.
pub const MAX_RESULTS: usize = crate::ranker::RANK_WINDOW - 1;

pub const DEFAULT_RESULTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub rank: usize,
    pub title: String,
    pub link: String,
    pub score: f64,
}

pub fn check_result_count(num: usize) -> Result<()> {
    if (1..=MAX_RESULTS).contains(&num) {
        Ok(())
    } else {
        Err(PipelineError::InvalidResultCount { num })
    }
}

/// Map the first `num` ranked entries back to corpus titles and links, ranked from 1.
pub fn assemble(ranked: &[Scored], view: &CorpusView<'_>, num: usize) -> Result<Vec<Recommendation>> {
    check_result_count(num)?;
    let corpus = view.corpus();
    ranked
        .iter()
        .take(num)
        .enumerate()
        .map(|(i, scored)| {
            let doc = view
                .position_of(scored.id)
                .and_then(|pos| corpus.get(pos))
                .filter(|doc| doc.id == scored.id)
                .ok_or(PipelineError::DanglingReference { id: scored.id })?;
            Ok(Recommendation { rank: i + 1, title: doc.title.clone(), link: doc.link.clone(), score: scored.score })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Document;

    fn docs() -> Vec<Document> {
        vec![
            Document::new(1, "Auto Insurance Basics", "", "https://x/1"),
            Document::new(2, "Health Insurance Plans", "", "https://x/2"),
        ]
    }

    #[test]
    fn assigns_sequential_ranks() {
        let docs = docs();
        let view = CorpusView::with_query(&docs, "q").unwrap();
        let ranked = [Scored { score: 0.9, id: 2 }, Scored { score: 0.4, id: 1 }];
        let out = assemble(&ranked, &view, 2).unwrap();
        assert_eq!(out[0], Recommendation { rank: 1, title: "Health Insurance Plans".into(), link: "https://x/2".into(), score: 0.9 });
        assert_eq!(out[1].rank, 2);
        assert_eq!(out[1].title, "Auto Insurance Basics");
        assert_eq!(assemble(&ranked, &view, 1).unwrap().len(), 1);
    }

    #[test]
    fn rejects_out_of_range_counts() {
        let docs = docs();
        let view = CorpusView::with_query(&docs, "q").unwrap();
        for num in [0, 21, 25] {
            assert!(matches!(assemble(&[], &view, num), Err(PipelineError::InvalidResultCount { num: n }) if n == num));
        }
        assert!(assemble(&[], &view, 20).unwrap().is_empty());
    }

    #[test]
    fn unknown_and_query_ids_are_dangling() {
        let docs = docs();
        let view = CorpusView::with_query(&docs, "q").unwrap();
        let missing = [Scored { score: 0.5, id: 99 }];
        assert!(matches!(assemble(&missing, &view, 1), Err(PipelineError::DanglingReference { id: 99 })));
        let query = [Scored { score: 0.5, id: view.query().id }];
        assert!(matches!(assemble(&query, &view, 1), Err(PipelineError::DanglingReference { id: 3 })));
    }
}
