// Cross-candidate ordering and narrative labels.

pub mod handlers;
pub mod narrative;

use serde::{Deserialize, Serialize};

use crate::scoring::competency::ScoringResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateScore {
    pub id: String,
    pub result: ScoringResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub id: String,
    pub rank: usize, // 1-based
    pub result: ScoringResult,
}

/// Orders candidates by ranking score, highest first. Equal scores keep input order.
pub fn rank_candidates(mut batch: Vec<CandidateScore>) -> Vec<RankedCandidate> {
    batch.sort_by(|a, b| b.result.ranking_score.cmp(&a.result.ranking_score));
    batch
        .into_iter()
        .enumerate()
        .map(|(i, c)| RankedCandidate {
            id: c.id,
            rank: i + 1,
            result: c.result,
        })
        .collect()
}
