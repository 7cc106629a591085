//! Guide conflict gate.
//!
//! A team's supervising guide may never sit on the panel evaluating that
//! team. This module holds the guide relationship index and the single
//! assignability check used by both manual and automatic assignment.
//! The check is evaluated fresh at every assignment attempt; panel
//! membership can change between evaluations, so the result is never
//! cached.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Panel, Team};

/// The guide→project relationship index.
///
/// Maps each team to the employee id of its supervising guide. Built by
/// the intake workflow or derived from loaded team records via
/// [`GuideIndex::from_teams`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuideIndex {
    guides: HashMap<String, String>,
}

impl GuideIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the guide for a team.
    pub fn with_guide(mut self, team_id: impl Into<String>, faculty_id: impl Into<String>) -> Self {
        self.guides.insert(team_id.into(), faculty_id.into());
        self
    }

    /// Builds the index from the guide links on loaded team records.
    pub fn from_teams(teams: &[Team]) -> Self {
        let guides = teams
            .iter()
            .filter_map(|t| {
                t.guide_faculty_id
                    .as_ref()
                    .map(|g| (t.id.clone(), g.clone()))
            })
            .collect();
        Self { guides }
    }

    /// The guide's employee id for a team, if linked.
    pub fn guide_for(&self, team_id: &str) -> Option<&str> {
        self.guides.get(team_id).map(String::as_str)
    }
}

/// Outcome of an assignability check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentDecision {
    /// Whether the team may be assigned to the panel.
    pub allowed: bool,
    /// Denial reason when `allowed` is false.
    pub reason: Option<String>,
}

impl AssignmentDecision {
    fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    fn deny(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
        }
    }
}

/// Decides whether `team` may be assigned to `panel`.
///
/// Denied exactly when the team's guide (per `guides`) sits on the
/// panel; a team with no linked guide has no conflict. Used for both
/// automatic and single manual assignment actions.
pub fn check_assignment(team: &Team, panel: &Panel, guides: &GuideIndex) -> AssignmentDecision {
    match guides.guide_for(&team.id) {
        Some(guide) if panel.has_member(guide) => {
            debug!(
                "assignment denied: guide {} of team {} sits on panel {}",
                guide, team.id, panel.panel_id
            );
            AssignmentDecision::deny(format!(
                "Guide '{}' of team '{}' is a member of panel '{}'",
                guide, team.id, panel.panel_id
            ))
        }
        _ => AssignmentDecision::allow(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Faculty;

    fn panel_with(members: &[&str]) -> Panel {
        let mut panel = Panel::new("P1");
        for m in members {
            panel = panel.with_member(Faculty::new(*m));
        }
        panel
    }

    #[test]
    fn test_guide_on_panel_rejected() {
        let team = Team::new("T1").with_guide("F1");
        let panel = panel_with(&["F1", "F2", "F3"]);
        let guides = GuideIndex::from_teams(std::slice::from_ref(&team));

        let decision = check_assignment(&team, &panel, &guides);
        assert!(!decision.allowed);
        assert!(decision.reason.unwrap().contains("F1"));
    }

    #[test]
    fn test_guide_elsewhere_allowed() {
        let team = Team::new("T1").with_guide("F9");
        let panel = panel_with(&["F1", "F2", "F3"]);
        let guides = GuideIndex::from_teams(std::slice::from_ref(&team));

        let decision = check_assignment(&team, &panel, &guides);
        assert!(decision.allowed);
        assert!(decision.reason.is_none());
    }

    #[test]
    fn test_unlinked_team_allowed() {
        let team = Team::new("T1"); // no guide yet
        let panel = panel_with(&["F1", "F2"]);
        let guides = GuideIndex::new();

        assert!(check_assignment(&team, &panel, &guides).allowed);
    }

    #[test]
    fn test_index_overrides_record() {
        // The index is the source of truth, not the team record.
        let team = Team::new("T1").with_guide("F1");
        let panel = panel_with(&["F1", "F2"]);
        let guides = GuideIndex::new().with_guide("T1", "F7");

        assert!(check_assignment(&team, &panel, &guides).allowed);
    }

    #[test]
    fn test_fresh_evaluation_after_membership_change() {
        let team = Team::new("T1").with_guide("F1");
        let guides = GuideIndex::from_teams(std::slice::from_ref(&team));

        let conflicted = panel_with(&["F1", "F2"]);
        assert!(!check_assignment(&team, &conflicted, &guides).allowed);

        // Same panel id, guide replaced: the gate must re-evaluate.
        let rebuilt = panel_with(&["F4", "F2"]);
        assert!(check_assignment(&team, &rebuilt, &guides).allowed);
    }
}
