//! Swipe-quiz scoring: an ordered sequence of liked/disliked answers is
//! folded through a static question-to-path weight table into a ranked,
//! capped list of career matches.

mod session;
mod weights;

pub use session::QuizSession;

use crate::catalog::{self, CareerPathId};
use serde::{Deserialize, Serialize};

/// A single swipe response, in the order the user gave it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    pub liked: bool,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, liked: bool) -> Self {
        Self {
            question_id: question_id.into(),
            liked,
        }
    }
}

/// Scoring knobs. A liked answer counts double a disliked one of equal
/// magnitude; results are capped and each match carries a short list of
/// reasons.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub liked_weight: f32,
    pub disliked_weight: f32,
    pub max_matches: usize,
    pub max_reasons: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            liked_weight: 1.0,
            disliked_weight: -0.5,
            max_matches: 5,
            max_reasons: 3,
        }
    }
}

/// A ranked career-path match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerMatch {
    pub path: CareerPathId,
    pub score: f32,
    pub reasons: Vec<&'static str>,
}

/// Stateless engine applying the weight table to an answer sequence.
/// A pure function of (config, answers): same input, same output.
pub struct MatchEngine {
    config: ScoringConfig,
}

struct PathAccumulator {
    path: CareerPathId,
    score: f32,
    reasons: Vec<&'static str>,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl MatchEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Rank career paths against the given answers. Any prefix of the
    /// quiz is valid input; answers referencing unknown questions are
    /// skipped rather than failing the batch.
    pub fn compute_matches(&self, answers: &[Answer]) -> Vec<CareerMatch> {
        let mut accumulators: Vec<PathAccumulator> = CareerPathId::ordered()
            .into_iter()
            .map(|path| PathAccumulator {
                path,
                score: 0.0,
                reasons: Vec::new(),
            })
            .collect();

        for answer in answers {
            if catalog::find_question(&answer.question_id).is_none() {
                continue;
            }

            let weight = if answer.liked {
                self.config.liked_weight
            } else {
                self.config.disliked_weight
            };

            for target in weights::weights_for(&answer.question_id) {
                // Accumulators sit in declared order, so the id doubles
                // as the index.
                let entry = &mut accumulators[target.path as usize];
                entry.score += weight * f32::from(target.multiplier);

                // Disliked answers drag the score down but never
                // contribute a reason.
                if answer.liked {
                    if let Some(reason) = target.reason {
                        entry.reasons.push(reason);
                    }
                }
            }
        }

        for entry in &mut accumulators {
            entry.score = entry.score.max(0.0);
            entry.reasons.truncate(self.config.max_reasons);
        }

        // Stable sort: declared path order wins ties.
        accumulators.sort_by(|a, b| b.score.total_cmp(&a.score));
        accumulators.truncate(self.config.max_matches);

        accumulators
            .into_iter()
            .map(|entry| CareerMatch {
                path: entry.path,
                score: entry.score,
                reasons: entry.reasons,
            })
            .collect()
    }
}
