use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintDataPoint {
    pub date: String,
    pub guideline: i64,
    pub remaining: i64,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_weekend: bool,
}

#[cfg(test)]
impl SprintDataPoint {
    pub fn new(date: &str, guideline: i64, remaining: i64) -> Self {
        Self {
            date: date.to_string(),
            guideline,
            remaining,
            is_weekend: false,
        }
    }

    pub fn weekend(date: &str, guideline: i64, remaining: i64) -> Self {
        Self {
            is_weekend: true,
            ..Self::new(date, guideline, remaining)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnderstandingLevel {
    A,
    B,
    C,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardStatus {
    Healthy,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardHealth {
    pub velocity: u32,
    pub blockers: u32,
    pub overdue: u32,
    pub completed: u32,
    pub status: BoardStatus,
    pub sprint_goal: String,
    pub sprint_understanding: UnderstandingLevel,
    pub estimation_accuracy: f64,
    pub documentation: u32,
    pub uml_diagrams: u32,
    pub defect_removal_rate: u32,
    pub defect_removal_sprint: u32,
    pub defect_removal_future: u32,
    pub dev_count: u32,
    pub sprint_dates: String,
    pub backlog_items: u32,
    pub done_ratio: u32,
    pub done_goals: u32,
    pub pending_deployment: u32,
    pub production_live: u32,
    pub scope_added: i64,
    pub scope_removed: i64,
    pub scope_modified: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardRecord {
    pub id: String,
    pub name: String,
    pub project: String,
    pub sprint: String,
    pub project_manager: String,
    pub total_issues: u32,
    pub remaining_issues: u32,
    pub health: BoardHealth,
    #[serde(rename = "burndownData")]
    pub burndown: Vec<SprintDataPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerRecord {
    pub id: String,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub avatar: String,
    pub experience: String,
    pub understanding_level: UnderstandingLevel,
    pub understanding_target_date: NaiveDate,
    pub department: String,
    pub teams_count: u32,
    pub boards: Vec<BoardRecord>,
}
