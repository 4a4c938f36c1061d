//! Plain-text rendering of the projected plan.

use std::fmt::Write as _;

use client_core::PlanView;

pub const LOADING_MESSAGE: &str = "Loading assignments...";

/// Renders the whole screen. Developers, weeks and tasks appear exactly in
/// the order the projection produced them.
pub fn render_plan(view: &PlanView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Weekly Assignments ===");

    for panel in &view.developers {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} (Productivity: {:.2})",
            panel.developer_name, panel.productivity
        );
        for week in &panel.weeks {
            let _ = writeln!(out, "  Week {}", week.week_number);
            for entry in &week.entries {
                let _ = writeln!(
                    out,
                    "    {} (Difficulty: {:.2}, Duration: {:.2}h) - {}",
                    entry.task_name, entry.difficulty, entry.estimated_duration, entry.hours_label
                );
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Total Time: {}", view.total_time);
    let _ = writeln!(out, "Total Weeks: {}", view.total_weeks);
    out
}
