use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(DeveloperId);
id_newtype!(TaskId);

/// A developer tasks can be scheduled for.
///
/// `productivity` is a multiplier relative to a baseline developer; the
/// planner divides estimated effort by it when it computes hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Developer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DeveloperId>,
    pub name: String,
    pub productivity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A unit of work imported from an external tracker.
///
/// `name` can be null upstream; display code falls back to `task_name` on
/// the assignment, which the planner always fills in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub difficulty: f64,
    pub estimated_duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
