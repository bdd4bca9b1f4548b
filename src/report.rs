use std::fmt::Write;

use crate::dashboard::{BoardView, DashboardView, ManagerView};
use crate::trend::RenderPlan;

/// One glyph per segment: `↓` falling, `→` flat, `↑` rising.
pub fn trend_strip(plan: &RenderPlan) -> String {
    plan.segments.iter().map(|s| s.direction.glyph()).collect()
}

pub fn build_report(view: &DashboardView) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Engineering Dashboard");
    let _ = writeln!(
        output,
        "Board of Boards Overview ({} of {} managers, rendered {})",
        view.matched_managers,
        view.total_managers,
        view.rendered_at.format("%Y-%m-%d %H:%M UTC")
    );

    if let Some(empty) = &view.empty_state {
        let _ = writeln!(output);
        let _ = writeln!(output, "{}", empty.message);
        let _ = writeln!(output, "{}", empty.hint);
        return output;
    }

    for manager in &view.managers {
        write_manager(&mut output, manager);
    }

    output
}

fn write_manager(output: &mut String, manager: &ManagerView) {
    let _ = writeln!(output);
    let _ = writeln!(output, "## {} ({})", manager.name, manager.title);
    let _ = writeln!(
        output,
        "{} | {} | Level {:?}, target {} | {} teams, {} boards",
        manager.department,
        manager.experience,
        manager.understanding_level,
        manager.understanding_target,
        manager.teams_count,
        manager.boards_count
    );

    for board in &manager.boards {
        write_board(output, board);
    }
}

fn write_board(output: &mut String, board: &BoardView) {
    let health = &board.health;

    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "### {} [{}] {} ({:?})",
        board.name, board.project, board.sprint, health.status
    );
    let _ = writeln!(
        output,
        "- PM {} | level {:?} | {} issues, {} remaining | {}",
        board.project_manager,
        health.sprint_understanding,
        board.total_issues,
        board.remaining_issues,
        health.sprint_dates
    );

    if let Some(message) = &board.scope.message {
        let _ = writeln!(output, "- {message}");
    }

    let tiles: Vec<String> = board
        .scope
        .tiles
        .iter()
        .map(|tile| format!("{} {} ({} items)", tile.label, tile.display, tile.work_items))
        .collect();
    let _ = writeln!(output, "- Scope: {}", tiles.join(", "));

    let counts: Vec<String> = board
        .trend
        .by_direction
        .iter()
        .map(|(direction, count)| format!("{count} {direction:?}").to_lowercase())
        .collect();
    let _ = writeln!(
        output,
        "- Burndown: {} [{}]",
        trend_strip(&board.chart),
        counts.join(", ")
    );
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::dashboard::build;
    use crate::models::SprintDataPoint;
    use crate::providers::seed::sample_managers;
    use crate::trend::{render_with_palette, Palette};

    #[test]
    fn test_trend_strip() {
        let points = vec![
            SprintDataPoint::new("a", 0, 45),
            SprintDataPoint::new("b", 0, 40),
            SprintDataPoint::new("c", 0, 40),
            SprintDataPoint::new("d", 0, 42),
        ];
        let plan = render_with_palette(&points, &Palette::RISK);

        assert_eq!(trend_strip(&plan), "↓→↑");
    }

    #[test]
    fn test_report_lists_matching_boards() {
        let managers = sample_managers();
        let view = build("mobile", &managers, &Palette::RISK, Utc::now());
        let report = build_report(&view);

        assert!(report.starts_with("# Engineering Dashboard\n"));
        assert!(report.contains("1 of 3 managers"));
        assert!(report.contains("## Marcus Chen (Engineering Manager)"));
        assert!(report.contains("### Mobile App [MOB] Sprint 31 (Healthy)"));
        assert!(report.contains("### User Experience [UX] Sprint 12 (Critical)"));
        assert!(report.contains("Sprint scope has increased by 19 points"));
        assert!(!report.contains("Sarah Johnson"));
    }

    #[test]
    fn test_report_shows_empty_state() {
        let managers = sample_managers();
        let view = build("zzz-no-match", &managers, &Palette::RISK, Utc::now());
        let report = build_report(&view);

        assert!(report.contains("No results found for \"zzz-no-match\""));
        assert!(report.contains("Try adjusting your search criteria"));
        assert!(!report.contains("##"));
    }

    #[test]
    fn test_report_burndown_line() {
        let managers = sample_managers();
        let view = build("PLAT", &managers, &Palette::RISK, Utc::now());
        let report = build_report(&view);

        assert!(report.contains("- Burndown: ↓↓↓↓↓→↓↓↓↓↓↓→→ [11 falling, 3 flat, 0 rising]"));
        assert!(report.contains("- Scope: Added +5 pts (5 items), Removed \u{2212}2 pts (2 items), Modified +3 pts (3 items)"));
    }
}
