use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use serde::Serialize;

use crate::filter::filter;
use crate::models::{BoardHealth, BoardRecord, ManagerRecord, UnderstandingLevel};
use crate::scope::{self, ScopeSummary};
use crate::trend::{self, Palette, RenderPlan, TrendSummary};

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub query: String,
    pub rendered_at: DateTime<Utc>,
    pub palette: &'static str,
    pub total_managers: usize,
    pub matched_managers: usize,
    pub empty_state: Option<EmptyState>,
    pub managers: Vec<ManagerView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: String,
    pub hint: String,
}

impl EmptyState {
    pub fn for_query(query: &str) -> Self {
        Self {
            message: format!("No results found for \"{query}\""),
            hint: "Try adjusting your search criteria".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ManagerView {
    pub id: String,
    pub name: String,
    pub title: String,
    pub avatar: String,
    pub department: String,
    pub experience: String,
    pub understanding_level: UnderstandingLevel,
    pub understanding_target: String,
    pub teams_count: u32,
    pub boards_count: usize,
    pub boards: Vec<BoardView>,
}

#[derive(Debug, Serialize)]
pub struct BoardView {
    pub id: String,
    pub name: String,
    pub project: String,
    pub sprint: String,
    pub project_manager: String,
    pub total_issues: u32,
    pub remaining_issues: u32,
    pub health: BoardHealth,
    pub scope: ScopeSummary,
    pub trend: TrendSummary,
    pub chart: RenderPlan,
}

/// Formats a calendar date the way the dashboard shows it, e.g. `Jun 15, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn board_view(board: &BoardRecord, palette: &Palette) -> BoardView {
    let chart = trend::render_with_palette(&board.burndown, palette);
    let trend = trend::summarize(&chart.segments);

    BoardView {
        id: board.id.clone(),
        name: board.name.clone(),
        project: board.project.clone(),
        sprint: board.sprint.clone(),
        project_manager: board.project_manager.clone(),
        total_issues: board.total_issues,
        remaining_issues: board.remaining_issues,
        health: board.health.clone(),
        scope: scope::summarize(&board.health),
        trend,
        chart,
    }
}

pub fn manager_view(manager: &ManagerRecord, palette: &Palette) -> ManagerView {
    ManagerView {
        id: manager.id.clone(),
        name: manager.name.clone(),
        title: manager.title.clone(),
        avatar: manager.avatar.clone(),
        department: manager.department.clone(),
        experience: manager.experience.clone(),
        understanding_level: manager.understanding_level,
        understanding_target: format_date(manager.understanding_target_date),
        teams_count: manager.teams_count,
        boards_count: manager.boards.len(),
        boards: manager
            .boards
            .iter()
            .map(|board| board_view(board, palette))
            .collect(),
    }
}

pub fn build(
    query: &str,
    managers: &[ManagerRecord],
    palette: &Palette,
    rendered_at: DateTime<Utc>,
) -> DashboardView {
    let matched = filter(query, managers);
    debug!(
        "Query {:?} matched {} of {} managers",
        query,
        matched.len(),
        managers.len()
    );

    let empty_state = matched.is_empty().then(|| EmptyState::for_query(query));

    DashboardView {
        query: query.to_string(),
        rendered_at,
        palette: palette.name,
        total_managers: managers.len(),
        matched_managers: matched.len(),
        empty_state,
        managers: matched.iter().map(|m| manager_view(m, palette)).collect(),
    }
}

/// Finds a board by id or project code, ignoring case.
pub fn find_board<'a>(managers: &'a [ManagerRecord], key: &str) -> Option<&'a BoardRecord> {
    managers
        .iter()
        .flat_map(|m| m.boards.iter())
        .find(|b| b.id.eq_ignore_ascii_case(key) || b.project.eq_ignore_ascii_case(key))
}

/// Finds a board by id or project code among the managers matching `query`.
pub fn find_matching_board(
    query: &str,
    managers: &[ManagerRecord],
    key: &str,
) -> Option<BoardRecord> {
    let matched = filter(query, managers);
    find_board(&matched, key).cloned()
}
