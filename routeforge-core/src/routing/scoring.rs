//! Weighted time/cost trade-off between candidate paths

use rust_decimal::Decimal;

use super::PathResult;

/// Per-axis normalisation baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Baseline {
    pub duration_seconds: Decimal,
    pub cost: Decimal,
}

impl Baseline {
    /// Per-axis maximum over the candidates
    pub fn from_candidates(candidates: &[PathResult]) -> Self {
        candidates.iter().fold(
            Baseline {
                duration_seconds: Decimal::ZERO,
                cost: Decimal::ZERO,
            },
            |acc, candidate| Baseline {
                duration_seconds: acc.duration_seconds.max(duration_seconds(candidate)),
                cost: acc.cost.max(candidate.cost.amount()),
            },
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeScorer {
    pub time_weight: Decimal,
    pub cost_weight: Decimal,
}

impl Default for CompositeScorer {
    fn default() -> Self {
        Self {
            time_weight: Decimal::new(6, 1),
            cost_weight: Decimal::new(4, 1),
        }
    }
}

impl CompositeScorer {
    pub fn new(time_weight: Decimal, cost_weight: Decimal) -> Self {
        Self {
            time_weight,
            cost_weight,
        }
    }

    /// Lower is better. A zero baseline axis contributes nothing.
    pub fn score(&self, candidate: &PathResult, baseline: &Baseline) -> Decimal {
        let time = if baseline.duration_seconds.is_zero() {
            Decimal::ZERO
        } else {
            duration_seconds(candidate) / baseline.duration_seconds * self.time_weight
        };
        let cost = if baseline.cost.is_zero() {
            Decimal::ZERO
        } else {
            candidate.cost.amount() / baseline.cost * self.cost_weight
        };
        time + cost
    }

    /// Index of the lowest scoring candidate; the earliest one wins ties
    pub fn select_index(&self, candidates: &[PathResult]) -> Option<usize> {
        let baseline = Baseline::from_candidates(candidates);
        let mut best: Option<(usize, Decimal)> = None;
        for (idx, candidate) in candidates.iter().enumerate() {
            let score = self.score(candidate, &baseline);
            match best {
                Some((_, best_score)) if score >= best_score => {}
                _ => best = Some((idx, score)),
            }
        }
        best.map(|(idx, _)| idx)
    }

    pub fn select<'a>(&self, candidates: &'a [PathResult]) -> Option<&'a PathResult> {
        self.select_index(candidates).map(|idx| &candidates[idx])
    }
}

fn duration_seconds(path: &PathResult) -> Decimal {
    Decimal::from(path.duration.num_seconds())
}
