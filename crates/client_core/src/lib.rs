//! Client-side load pipeline for the weekly assignment plan.
//!
//! [`PlanController`] owns the fetch lifecycle of one view: mount, observe,
//! unmount. [`WeeklyPlanClient`] talks to the planning API over HTTP, and
//! [`project`] turns a decoded response into the nested render tree the
//! screen displays.

pub mod cancel;
pub mod client;
pub mod controller;
pub mod error;
pub mod format;
pub mod projection;

pub use cancel::{cancellation, CancelHandle, CancelToken};
pub use client::{PlanSource, WeeklyPlanClient, WEEKLY_PLAN_PATH};
pub use controller::{PlanController, PlanState};
pub use error::{FetchError, LOAD_FAILURE_MESSAGE};
pub use format::format_hours;
pub use projection::{project, AssignmentLine, DeveloperPanel, PlanView, WeekSection};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
