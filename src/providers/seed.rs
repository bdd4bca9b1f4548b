use async_trait::async_trait;
use log::debug;

use crate::error::Result;
use crate::models::ManagerRecord;
use crate::providers::ManagerSource;

const SEED_JSON: &str = include_str!("seed.json");

/// Built-in sample managers, used when no other source is configured.
pub struct SeedSource;

impl SeedSource {
    pub fn parse() -> Result<Vec<ManagerRecord>> {
        let managers: Vec<ManagerRecord> = serde_json::from_str(SEED_JSON)?;
        debug!("Parsed {} seed managers", managers.len());
        Ok(managers)
    }
}

#[async_trait]
impl ManagerSource for SeedSource {
    fn name(&self) -> &str {
        "seed"
    }

    async fn load_managers(&self) -> Result<Vec<ManagerRecord>> {
        Self::parse()
    }
}

#[cfg(test)]
pub fn sample_managers() -> Vec<ManagerRecord> {
    SeedSource::parse().expect("seed data must parse")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BoardStatus, UnderstandingLevel};

    #[test]
    fn test_seed_has_three_managers_and_five_boards() {
        let managers = sample_managers();

        assert_eq!(managers.len(), 3);
        let boards: usize = managers.iter().map(|m| m.boards.len()).sum();
        assert_eq!(boards, 5);
    }

    #[test]
    fn test_seed_board_fields() {
        let managers = sample_managers();
        let gateway = &managers[0].boards[1];

        assert_eq!(gateway.name, "API Gateway");
        assert_eq!(gateway.project, "API");
        assert_eq!(gateway.health.status, BoardStatus::Warning);
        assert_eq!(gateway.health.sprint_understanding, UnderstandingLevel::B);
        assert_eq!(gateway.burndown.len(), 15);
        assert!(gateway.burndown[5].is_weekend);
    }

    #[test]
    fn test_seed_manager_dates_parse() {
        let managers = sample_managers();

        assert_eq!(
            managers[2].understanding_target_date.to_string(),
            "2024-03-20"
        );
        assert_eq!(managers[1].teams_count, 2);
    }

    #[tokio::test]
    async fn test_seed_source_loads() {
        let managers = SeedSource.load_managers().await.unwrap();

        assert_eq!(managers, sample_managers());
        assert_eq!(SeedSource.name(), "seed");
    }
}
