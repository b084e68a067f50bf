// Rank and quartile math for a single metric.
use serde::{Serialize, Serializer};
use std::cmp::Ordering;

/// Quartile bucket of a state's rank percentile; `Top` is the best 25%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quartile {
    Top = 1,
    UpperMiddle = 2,
    LowerMiddle = 3,
    Bottom = 4,
}

impl Quartile {
    /// Bucket for a 1-based `rank` out of `total` (percentile thresholds
    /// 0.25 / 0.5 / 0.75, inclusive).
    pub fn from_rank(rank: usize, total: usize) -> Quartile {
        let percentile = rank as f64 / total as f64;
        if percentile <= 0.25 {
            Quartile::Top
        } else if percentile <= 0.5 {
            Quartile::UpperMiddle
        } else if percentile <= 0.75 {
            Quartile::LowerMiddle
        } else {
            Quartile::Bottom
        }
    }

    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quartile::Top => "Top 25%",
            Quartile::UpperMiddle => "Above Avg",
            Quartile::LowerMiddle => "Below Avg",
            Quartile::Bottom => "Bottom 25%",
        }
    }
}

impl Serialize for Quartile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

/// Comparative standing of one value within a metric's population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    pub rank: usize,
    pub total: usize,
    pub quartile: Quartile,
}

/// Keeps only finite values; nulls and NaN/inf never reach averaging or
/// ranking.
pub fn valid_population(population: &[Option<f64>]) -> Vec<f64> {
    population
        .iter()
        .filter_map(|v| *v)
        .filter(|v| v.is_finite())
        .collect()
}

/// Arithmetic mean, `None` for an empty slice.
pub fn national_average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().copied().sum();
    Some(sum / values.len() as f64)
}

/// Rank `value` within `population` (already filtered to finite numbers).
///
/// The population is sorted best-first according to `higher_is_better` and
/// the rank is the 1-based position of the first element equal to `value`.
/// Tied states therefore all share the rank of the first tie, so ranks are
/// neither unique nor contiguous when ties exist.
///
/// Returns `None` for an empty population. A value that is not a member of
/// the population is placed after every strictly better entry, capped at
/// the population size.
pub fn compute_rank(value: f64, population: &[f64], higher_is_better: bool) -> Option<Standing> {
    if population.is_empty() {
        return None;
    }
    let mut sorted = population.to_vec();
    sorted.sort_by(|a, b| {
        let ord = a.partial_cmp(b).unwrap_or(Ordering::Equal);
        if higher_is_better {
            ord.reverse()
        } else {
            ord
        }
    });

    let total = sorted.len();
    let rank = match sorted.iter().position(|v| *v == value) {
        Some(idx) => idx + 1,
        None => {
            let better = sorted
                .iter()
                .take_while(|v| {
                    if higher_is_better {
                        **v > value
                    } else {
                        **v < value
                    }
                })
                .count();
            (better + 1).min(total)
        }
    };

    Some(Standing { rank, total, quartile: Quartile::from_rank(rank, total) })
}
