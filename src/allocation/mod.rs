//! Panel construction and team assignment.
//!
//! Provides the three structural operations of the engine:
//!
//! - [`PanelBuilder`]: partitions an eligible faculty pool into new panels
//! - [`AutoAssigner`]: distributes unassigned teams across existing panels
//! - [`check_assignment`]: the single conflict gate shared by automatic
//!   and manual assignment
//!
//! plus the panel lifecycle helpers in [`roster`]: the eligible pool and
//! panel removal.
//!
//! All operations are pure functions of an input snapshot plus explicit
//! parameters. Validation failures are surfaced before any result is
//! produced; per-team placement failures are collected as
//! [`ConflictSkip`] records alongside a successful partial result.

mod assigner;
mod builder;
mod conflict;
pub mod roster;

pub use assigner::{AssignmentOutcome, AutoAssigner, TeamAssignment};
pub use builder::{BuildOutcome, BuildScope, DepartmentSkip, PanelBuilder};
pub use conflict::{check_assignment, AssignmentDecision, GuideIndex};

use serde::{Deserialize, Serialize};

/// A fatal allocation error, surfaced before any mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationError {
    /// Error category.
    pub kind: AllocationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of fatal allocation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationErrorKind {
    /// Panel size below the minimum of two.
    PanelSizeTooSmall,
    /// Requested panel count exceeds what the pool supports.
    PanelCountExceedsCapacity,
    /// No eligible faculty to build from.
    EmptyFacultyPool,
    /// No department had enough faculty for a single panel.
    NoPanelCapacity,
    /// Buffer would exclude every panel in scope.
    BufferExceedsPanels,
    /// No panels exist in the requested scope.
    EmptyPanelSet,
}

impl AllocationError {
    pub(crate) fn new(kind: AllocationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for AllocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AllocationError {}

/// Why a specific team could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Every candidate panel seats the team's guide.
    GuideConflict,
    /// Every candidate panel is at its team capacity.
    PanelFull,
    /// A mix of guide conflicts and full panels left no eligible panel.
    NoEligiblePanel,
}

/// A non-fatal per-team placement failure.
///
/// Collected and reported alongside a successful partial result; never
/// escalated to a whole-operation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictSkip {
    /// The team that could not be placed.
    pub team_id: String,
    /// Skip category.
    pub reason: SkipReason,
    /// Human-readable description.
    pub message: String,
}

impl ConflictSkip {
    /// Creates a guide-conflict skip.
    pub fn guide_conflict(team_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            reason: SkipReason::GuideConflict,
            message: message.into(),
        }
    }

    /// Creates a capacity skip.
    pub fn panel_full(team_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            reason: SkipReason::PanelFull,
            message: message.into(),
        }
    }

    /// Creates a mixed-cause skip.
    pub fn no_eligible_panel(team_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            reason: SkipReason::NoEligiblePanel,
            message: message.into(),
        }
    }
}
