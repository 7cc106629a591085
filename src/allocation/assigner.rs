//! Automatic team-to-panel assignment.
//!
//! # Algorithm
//!
//! 1. Select candidate panels: all panels in scope minus the last
//!    `buffer` panels in listing order. Buffer panels are skipped for
//!    the whole run and keep any teams they already hold.
//! 2. For each unassigned team in scope, visit candidates by ascending
//!    current team count (listing order breaks ties) and take the first
//!    panel that passes the conflict gate and has capacity.
//! 3. A team no panel admits is recorded as a skip, not an error; each
//!    placement is independent and leaves no partial state on failure.
//!
//! Successful placements update the working load immediately, so later
//! teams see the new counts and load stays balanced. Re-running over a
//! snapshot with no unassigned teams returns the mapping unchanged.
//!
//! # Complexity
//! O(t * p) where t = unassigned teams, p = candidate panels.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{check_assignment, AllocationError, AllocationErrorKind, ConflictSkip, GuideIndex};
use crate::models::{Panel, Team};
use crate::normalize::normalize_fields;

/// One successful team placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAssignment {
    /// Assigned team.
    pub team_id: String,
    /// Receiving panel.
    pub panel_id: String,
}

/// Result of an assignment run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentOutcome {
    /// Updated panel→team mapping for every panel in scope, including
    /// pre-existing assignments and untouched buffer panels.
    pub panel_teams: BTreeMap<String, Vec<String>>,
    /// Placements made by this run, in team listing order.
    pub assigned: Vec<TeamAssignment>,
    /// Teams left unassigned.
    pub unassigned: Vec<String>,
    /// Per-team skip reasons for the unassigned.
    pub skips: Vec<ConflictSkip>,
}

/// Distributes unassigned teams across existing panels.
///
/// # Example
///
/// ```
/// use panel_alloc::allocation::{AutoAssigner, GuideIndex};
/// use panel_alloc::models::{Faculty, Panel, Team};
///
/// let panels = vec![
///     Panel::new("P1").with_department("CSE").with_members(
///         vec![Faculty::new("F1"), Faculty::new("F2")],
///     ),
///     Panel::new("P2").with_department("CSE").with_members(
///         vec![Faculty::new("F3"), Faculty::new("F4")],
///     ),
/// ];
/// let teams = vec![Team::new("T1").with_department("CSE").with_guide("F1")];
/// let guides = GuideIndex::from_teams(&teams);
///
/// let outcome = AutoAssigner::new().assign(&panels, &teams, &guides).unwrap();
/// // F1 guides T1, so T1 lands on P2
/// assert_eq!(outcome.panel_teams["P2"], vec!["T1".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AutoAssigner {
    buffer: usize,
    department: Option<String>,
    max_teams_per_panel: Option<usize>,
}

impl AutoAssigner {
    /// Creates an assigner with no buffer, no department filter, and no
    /// per-panel team cap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves the last `buffer` panels in listing order, leaving them
    /// without new assignments for this run.
    pub fn with_buffer(mut self, buffer: usize) -> Self {
        self.buffer = buffer;
        self
    }

    /// Restricts the run to panels and teams of one department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Caps the number of teams a panel may hold.
    pub fn with_max_teams_per_panel(mut self, max: usize) -> Self {
        self.max_teams_per_panel = Some(max);
        self
    }

    /// Assigns all unassigned teams in scope to candidate panels.
    ///
    /// Inputs are read-only; the returned mapping is the new state for
    /// the caller to persist.
    ///
    /// # Errors
    /// - `EmptyPanelSet` when no panels exist in scope
    /// - `BufferExceedsPanels` when the buffer leaves no candidates
    pub fn assign(
        &self,
        panels: &[Panel],
        teams: &[Team],
        guides: &GuideIndex,
    ) -> Result<AssignmentOutcome, AllocationError> {
        let in_scope: Vec<&Panel> = panels
            .iter()
            .filter(|p| match &self.department {
                Some(dept) => p.department == *dept,
                None => true,
            })
            .collect();

        if in_scope.is_empty() {
            return Err(AllocationError::new(
                AllocationErrorKind::EmptyPanelSet,
                match &self.department {
                    Some(dept) => format!("No panels exist for department '{dept}'"),
                    None => "No panels exist".to_string(),
                },
            ));
        }
        if self.buffer >= in_scope.len() {
            return Err(AllocationError::new(
                AllocationErrorKind::BufferExceedsPanels,
                format!(
                    "Buffer of {} leaves no candidates among {} panel(s)",
                    self.buffer,
                    in_scope.len()
                ),
            ));
        }

        // Working mapping covers every panel in scope; buffer panels keep
        // their teams but receive none.
        let mut panel_teams: BTreeMap<String, Vec<String>> = in_scope
            .iter()
            .map(|p| (p.panel_id.clone(), p.team_ids.clone()))
            .collect();

        let candidates = &in_scope[..in_scope.len() - self.buffer];

        let mut assigned = Vec::new();
        let mut unassigned = Vec::new();
        let mut skips = Vec::new();

        for team in teams.iter().filter(|t| self.team_in_scope(t)) {
            // Ascending load, listing order as tie-break
            let mut order: Vec<usize> = (0..candidates.len()).collect();
            order.sort_by_key(|&i| (panel_teams[&candidates[i].panel_id].len(), i));

            let mut guide_conflicts = 0usize;
            let mut full = 0usize;
            let mut placed = None;

            for &i in &order {
                let panel = candidates[i];
                let load = panel_teams[&panel.panel_id].len();
                if self.max_teams_per_panel.is_some_and(|max| load >= max) {
                    full += 1;
                    continue;
                }
                if !check_assignment(team, panel, guides).allowed {
                    guide_conflicts += 1;
                    continue;
                }
                placed = Some(panel.panel_id.clone());
                break;
            }

            match placed {
                Some(panel_id) => {
                    debug!("team {} assigned to panel {}", team.id, panel_id);
                    panel_teams
                        .entry(panel_id.clone())
                        .or_default()
                        .push(team.id.clone());
                    assigned.push(TeamAssignment {
                        team_id: team.id.clone(),
                        panel_id,
                    });
                }
                None => {
                    let message = format!(
                        "No panel admits team '{}': {} guide conflict(s), {} panel(s) full",
                        team.id, guide_conflicts, full
                    );
                    warn!("{message}");
                    skips.push(if full == 0 {
                        ConflictSkip::guide_conflict(&team.id, message)
                    } else if guide_conflicts == 0 {
                        ConflictSkip::panel_full(&team.id, message)
                    } else {
                        ConflictSkip::no_eligible_panel(&team.id, message)
                    });
                    unassigned.push(team.id.clone());
                }
            }
        }

        Ok(AssignmentOutcome {
            panel_teams,
            assigned,
            unassigned,
            skips,
        })
    }

    /// Whether a team participates in this run: currently unassigned and,
    /// when a department filter is set, listing that department.
    fn team_in_scope(&self, team: &Team) -> bool {
        if team.is_assigned() {
            return false;
        }
        match &self.department {
            Some(dept) => normalize_fields(team).matches_department(dept),
            None => true,
        }
    }
}
