//! Pure projection from the wire payload to a render tree.

use indexmap::IndexMap;
use shared::protocol::{Assignment, WeeklyPlanResponse};
use tracing::warn;

use crate::format::format_hours;

/// Everything one plan screen renders, grouping and labels resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanView {
    pub developers: Vec<DeveloperPanel>,
    pub total_time: String,
    pub total_weeks: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeveloperPanel {
    pub developer_name: String,
    pub productivity: f64,
    pub weeks: Vec<WeekSection>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekSection {
    pub week_number: i64,
    pub entries: Vec<AssignmentLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentLine {
    pub task_name: String,
    pub difficulty: f64,
    pub estimated_duration: f64,
    pub hours_label: String,
}

/// Derives the developer, week, task nesting the screen shows.
///
/// Weeks keep the order in which they first appear in a developer's
/// assignment list; they are never sorted numerically. Within a week,
/// assignments keep list order. Group identity comes from the first
/// assignment's developer.
pub fn project(response: &WeeklyPlanResponse) -> PlanView {
    let developers = response
        .assignments
        .iter()
        .filter_map(|group| project_group(group))
        .collect();

    PlanView {
        developers,
        total_time: format_hours(response.total_hours),
        total_weeks: response.total_weeks,
    }
}

fn project_group(group: &[Assignment]) -> Option<DeveloperPanel> {
    let Some(first) = group.first() else {
        warn!("skipping empty assignment group in weekly plan");
        return None;
    };

    for assignment in &group[1..] {
        if assignment.developer.name != first.developer.name {
            warn!(
                expected = %first.developer.name,
                found = %assignment.developer.name,
                "assignment group mixes developers, keeping the first"
            );
        }
    }

    let mut weeks: IndexMap<i64, Vec<AssignmentLine>> = IndexMap::new();
    for assignment in group {
        weeks
            .entry(assignment.week_number)
            .or_default()
            .push(AssignmentLine {
                task_name: assignment.task_name.clone(),
                difficulty: assignment.task.difficulty,
                estimated_duration: assignment.task.estimated_duration,
                hours_label: format_hours(assignment.calculated_hours),
            });
    }

    Some(DeveloperPanel {
        developer_name: first.developer.name.clone(),
        productivity: first.developer.productivity,
        weeks: weeks
            .into_iter()
            .map(|(week_number, entries)| WeekSection {
                week_number,
                entries,
            })
            .collect(),
    })
}
