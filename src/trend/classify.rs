use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::SprintDataPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Rising,
    Falling,
    Flat,
}

impl TrendDirection {
    pub fn between(prev: &SprintDataPoint, next: &SprintDataPoint) -> Self {
        match next.remaining.cmp(&prev.remaining) {
            std::cmp::Ordering::Greater => Self::Rising,
            std::cmp::Ordering::Less => Self::Falling,
            std::cmp::Ordering::Equal => Self::Flat,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Rising => '↑',
            Self::Falling => '↓',
            Self::Flat => '→',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub from_index: usize,
    pub to_index: usize,
    pub direction: TrendDirection,
}

/// Classifies every adjacent pair of points by how remaining work moved.
///
/// Returns `points.len() - 1` segments, or none for fewer than two points.
pub fn classify(points: &[SprintDataPoint]) -> Vec<Segment> {
    points
        .windows(2)
        .enumerate()
        .map(|(i, pair)| Segment {
            from_index: i,
            to_index: i + 1,
            direction: TrendDirection::between(&pair[0], &pair[1]),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendSummary {
    pub segments: usize,
    pub by_direction: IndexMap<TrendDirection, usize>,
}

pub fn summarize(segments: &[Segment]) -> TrendSummary {
    let mut by_direction: IndexMap<TrendDirection, usize> = [
        TrendDirection::Falling,
        TrendDirection::Flat,
        TrendDirection::Rising,
    ]
    .into_iter()
    .map(|direction| (direction, 0))
    .collect();

    for segment in segments {
        *by_direction.entry(segment.direction).or_insert(0) += 1;
    }

    TrendSummary {
        segments: segments.len(),
        by_direction,
    }
}
