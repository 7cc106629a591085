//! Mark completion aggregation.
//!
//! Computes, from the nested per-student review structure, how completely
//! each team, panel, and the whole dashboard has been evaluated against
//! the panel-administered reviews of the applicable marking schema.
//!
//! # Metrics
//!
//! | Level | Record | Derivation |
//! |-------|--------|-----------|
//! | Team | `TeamStatusReport` | Students fully / partially covered by panel reviews |
//! | Panel | `PanelStatusReport` | Assigned teams fully / partially / not marked |
//! | Dashboard | `DashboardSummary` | Totals by status across panels and teams |
//!
//! The whole path is read-only and holds no cache: callers recompute
//! whenever review data or panel/team membership changes, against a
//! consistent snapshot.

mod panel;
mod project;

pub use panel::{DashboardSummary, MarkStatusReport, PanelMarkStatus, PanelStatusReport};
pub use project::{TeamMarkStatus, TeamStatusReport};
