use serde::Serialize;

use crate::models::BoardHealth;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeVariant {
    Added,
    Removed,
    Modified,
}

impl ScopeVariant {
    pub fn label(self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Removed => "Removed",
            Self::Modified => "Modified",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeTile {
    pub variant: ScopeVariant,
    pub label: &'static str,
    pub value: i64,
    pub display: String,
    pub work_items: i64,
}

impl ScopeTile {
    fn new(variant: ScopeVariant, value: i64, work_items: i64) -> Self {
        Self {
            variant,
            label: variant.label(),
            value,
            display: format!("{} pts", signed_points(value)),
            work_items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeSummary {
    pub net: i64,
    /// Absent when the sprint scope did not change overall.
    pub message: Option<String>,
    pub tiles: Vec<ScopeTile>,
}

/// Net scope change counts modifications as growth.
pub fn net_change(health: &BoardHealth) -> i64 {
    health
        .scope_added
        .saturating_add(health.scope_modified)
        .saturating_sub(health.scope_removed)
}

pub fn summarize(health: &BoardHealth) -> ScopeSummary {
    let net = net_change(health);

    let message = match net.cmp(&0) {
        std::cmp::Ordering::Greater => Some(format!("Sprint scope has increased by {net} points")),
        std::cmp::Ordering::Less => Some(format!(
            "Sprint scope has decreased by {} points",
            net.unsigned_abs()
        )),
        std::cmp::Ordering::Equal => None,
    };

    ScopeSummary {
        net,
        message,
        tiles: vec![
            ScopeTile::new(ScopeVariant::Added, health.scope_added, health.scope_added),
            ScopeTile::new(
                ScopeVariant::Removed,
                health.scope_removed.saturating_neg(),
                health.scope_removed,
            ),
            ScopeTile::new(
                ScopeVariant::Modified,
                health.scope_modified,
                health.scope_modified,
            ),
        ],
    }
}

/// Formats `+5`, `−2` (minus sign, not hyphen) or `±0`.
pub fn signed_points(value: i64) -> String {
    let sign = match value.cmp(&0) {
        std::cmp::Ordering::Greater => '+',
        std::cmp::Ordering::Less => '\u{2212}',
        std::cmp::Ordering::Equal => '±',
    };
    format!("{sign}{}", value.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::seed::sample_managers;

    fn health(added: i64, removed: i64, modified: i64) -> BoardHealth {
        let mut health = sample_managers()[0].boards[0].health.clone();
        health.scope_added = added;
        health.scope_removed = removed;
        health.scope_modified = modified;
        health
    }

    #[test]
    fn test_signed_points() {
        assert_eq!(signed_points(5), "+5");
        assert_eq!(signed_points(-2), "\u{2212}2");
        assert_eq!(signed_points(0), "±0");
    }

    #[test]
    fn test_net_change_counts_modified_as_growth() {
        assert_eq!(net_change(&health(5, 2, 3)), 6);
        assert_eq!(net_change(&health(1, 8, 2)), -5);
    }

    #[test]
    fn test_increase_message() {
        let summary = summarize(&health(5, 2, 3));

        assert_eq!(summary.net, 6);
        assert_eq!(
            summary.message.as_deref(),
            Some("Sprint scope has increased by 6 points")
        );
    }

    #[test]
    fn test_decrease_message_uses_magnitude() {
        let summary = summarize(&health(1, 8, 2));
        assert_eq!(
            summary.message.as_deref(),
            Some("Sprint scope has decreased by 5 points")
        );
    }

    #[test]
    fn test_balanced_scope_has_no_message() {
        let summary = summarize(&health(2, 4, 2));

        assert_eq!(summary.net, 0);
        assert!(summary.message.is_none());
    }

    #[test]
    fn test_summarize_saturates_extreme_values() {
        let summary = summarize(&health(i64::MAX, 0, 1));
        assert_eq!(summary.net, i64::MAX);
        assert_eq!(
            summary.message,
            Some(format!("Sprint scope has increased by {} points", i64::MAX))
        );

        let summary = summarize(&health(i64::MIN, i64::MAX, 0));
        assert_eq!(summary.net, i64::MIN);
        assert_eq!(summary.tiles[1].value, -i64::MAX);

        let summary = summarize(&health(0, i64::MIN, 0));
        assert_eq!(summary.net, i64::MAX);
        assert_eq!(summary.tiles[1].value, i64::MAX);
        assert_eq!(summary.tiles[1].display, format!("+{} pts", i64::MAX));
    }

    #[test]
    fn test_tiles_show_removed_as_negative() {
        let summary = summarize(&health(5, 2, 0));

        let displays: Vec<_> = summary.tiles.iter().map(|t| t.display.as_str()).collect();
        assert_eq!(displays, vec!["+5 pts", "\u{2212}2 pts", "±0 pts"]);
        assert_eq!(summary.tiles[1].work_items, 2);
        assert_eq!(summary.tiles[1].label, "Removed");
    }
}
