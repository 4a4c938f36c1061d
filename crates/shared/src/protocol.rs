use serde::{Deserialize, Serialize};

use crate::domain::{Developer, Task};

/// One scheduled unit of work: a task placed in a week for a developer.
///
/// `task_name` is the display name the planner resolved for the task, so
/// consumers never have to deal with the nullable `task.name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub developer: Developer,
    pub week_number: i64,
    pub task_name: String,
    pub task: Task,
    pub calculated_hours: f64,
}

/// Body of `GET /api/weekly-plan`.
///
/// `assignments` arrives pre-grouped, one inner list per developer, in the
/// order the planner emitted them. The empty-plan response carries no
/// `totalWeeks` key at all, so that field decodes with a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlanResponse {
    pub assignments: Vec<Vec<Assignment>>,
    #[serde(rename = "totalHours")]
    pub total_hours: f64,
    #[serde(rename = "totalWeeks", default)]
    pub total_weeks: i64,
}
