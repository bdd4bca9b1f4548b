use crate::models::ManagerRecord;

/// Keeps the managers whose name, title, department, or any owned board's
/// name or project code contains `query`, ignoring case.
///
/// An empty query keeps everything. The query is matched literally, so
/// surrounding whitespace is significant.
pub fn filter(query: &str, managers: &[ManagerRecord]) -> Vec<ManagerRecord> {
    if query.is_empty() {
        return managers.to_vec();
    }

    managers
        .iter()
        .filter(|manager| matches(query, manager))
        .cloned()
        .collect()
}

pub fn matches(query: &str, manager: &ManagerRecord) -> bool {
    query.is_empty() || matches_lowercase(&query.to_lowercase(), manager)
}

fn matches_lowercase(needle: &str, manager: &ManagerRecord) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(&manager.name)
        || contains(&manager.title)
        || contains(&manager.department)
        || manager
            .boards
            .iter()
            .any(|board| contains(&board.name) || contains(&board.project))
}
