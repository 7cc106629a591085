//! Panel lifecycle over a roster snapshot.
//!
//! Panels are created by the builder and destroyed explicitly here.
//! Destroying a panel releases its members back to the eligible pool and
//! returns its teams to the unassigned state; teams are never deleted.

use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{check_assignment, ConflictSkip, GuideIndex};
use crate::models::{Faculty, Panel, Team};

/// Faculty not currently seated on any panel.
///
/// The source of truth for build eligibility: whatever the builder
/// receives from here cannot collide with an existing membership.
pub fn eligible_faculty<'a>(all_faculty: &'a [Faculty], panels: &[Panel]) -> Vec<&'a Faculty> {
    let seated: HashSet<&str> = panels
        .iter()
        .flat_map(|p| p.members.iter().map(|m| m.employee_id.as_str()))
        .collect();

    all_faculty
        .iter()
        .filter(|f| !seated.contains(f.employee_id.as_str()))
        .collect()
}

/// What a panel removal released.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalOutcome {
    /// The removed panel.
    pub panel_id: String,
    /// Members returned to the eligible pool, in seating order.
    pub released_faculty: Vec<String>,
    /// Teams returned to the unassigned state.
    pub unassigned_teams: Vec<String>,
}

/// Destroys a panel, releasing its members and unassigning its teams.
///
/// Returns `None` when no panel has the given id; nothing is touched in
/// that case.
pub fn remove_panel(
    panels: &mut Vec<Panel>,
    teams: &mut [Team],
    panel_id: &str,
) -> Option<RemovalOutcome> {
    let index = panels.iter().position(|p| p.panel_id == panel_id)?;
    let panel = panels.remove(index);

    let released_faculty: Vec<String> =
        panel.members.iter().map(|m| m.employee_id.clone()).collect();

    let mut unassigned_teams = Vec::new();
    for team in teams.iter_mut() {
        if team.panel_id.as_deref() == Some(panel_id) {
            team.clear_assignment();
            unassigned_teams.push(team.id.clone());
        }
    }

    info!(
        "panel {} removed: {} member(s) released, {} team(s) unassigned",
        panel_id,
        released_faculty.len(),
        unassigned_teams.len()
    );

    Some(RemovalOutcome {
        panel_id: panel.panel_id,
        released_faculty,
        unassigned_teams,
    })
}

/// Manually assigns one team to one panel.
///
/// Applies the same conflict gate and capacity rule as the automatic
/// assigner. On refusal nothing is mutated and the skip record explains
/// why.
pub fn assign_team_to_panel(
    panel: &mut Panel,
    team: &mut Team,
    guides: &GuideIndex,
    max_teams_per_panel: Option<usize>,
) -> Result<(), ConflictSkip> {
    if max_teams_per_panel.is_some_and(|max| panel.team_count() >= max) {
        return Err(ConflictSkip::panel_full(
            &team.id,
            format!(
                "Panel '{}' already holds {} team(s)",
                panel.panel_id,
                panel.team_count()
            ),
        ));
    }

    let decision = check_assignment(team, panel, guides);
    if !decision.allowed {
        return Err(ConflictSkip::guide_conflict(
            &team.id,
            decision
                .reason
                .unwrap_or_else(|| "Guide conflict".to_string()),
        ));
    }

    team.assign_to(panel.panel_id.clone());
    panel.add_team(team.id.clone());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::SkipReason;

    fn faculty_roster() -> Vec<Faculty> {
        (1..=6)
            .map(|n| Faculty::new(format!("F{n}")).with_department("CSE"))
            .collect()
    }

    fn panel_seating(id: &str, members: &[&str]) -> Panel {
        let mut p = Panel::new(id).with_department("CSE");
        for m in members {
            p = p.with_member(Faculty::new(*m).with_department("CSE"));
        }
        p
    }

    #[test]
    fn test_eligible_excludes_seated() {
        let roster = faculty_roster();
        let panels = vec![panel_seating("P1", &["F1", "F2"])];

        let eligible = eligible_faculty(&roster, &panels);
        let ids: Vec<&str> = eligible.iter().map(|f| f.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["F3", "F4", "F5", "F6"]);
    }

    #[test]
    fn test_removal_round_trip() {
        let roster = faculty_roster();
        let before: Vec<String> = eligible_faculty(&roster, &[])
            .iter()
            .map(|f| f.employee_id.clone())
            .collect();

        let mut panels = vec![panel_seating("P1", &["F1", "F2"])];
        let mut teams = vec![Team::new("T1"), Team::new("T2")];
        teams[0].assign_to("P1");
        panels[0].add_team("T1");

        let outcome = remove_panel(&mut panels, &mut teams, "P1").unwrap();
        assert_eq!(outcome.released_faculty, vec!["F1", "F2"]);
        assert_eq!(outcome.unassigned_teams, vec!["T1".to_string()]);

        // Pool and assignment state match the pre-creation snapshot
        let after: Vec<String> = eligible_faculty(&roster, &panels)
            .iter()
            .map(|f| f.employee_id.clone())
            .collect();
        assert_eq!(before, after);
        assert!(teams.iter().all(|t| !t.is_assigned()));
        assert!(panels.is_empty());
    }

    #[test]
    fn test_remove_unknown_panel() {
        let mut panels = vec![panel_seating("P1", &["F1", "F2"])];
        let mut teams = vec![];

        assert!(remove_panel(&mut panels, &mut teams, "P9").is_none());
        assert_eq!(panels.len(), 1);
    }

    #[test]
    fn test_manual_assignment_gate() {
        let mut panel = panel_seating("P1", &["F1", "F2"]);
        let mut team = Team::new("T1").with_guide("F1");
        let guides = GuideIndex::from_teams(std::slice::from_ref(&team));

        let err = assign_team_to_panel(&mut panel, &mut team, &guides, None).unwrap_err();
        assert_eq!(err.reason, SkipReason::GuideConflict);
        // Refusal leaves no partial state
        assert!(!team.is_assigned());
        assert_eq!(panel.team_count(), 0);
    }

    #[test]
    fn test_manual_assignment_success() {
        let mut panel = panel_seating("P1", &["F1", "F2"]);
        let mut team = Team::new("T1").with_guide("F9");
        let guides = GuideIndex::from_teams(std::slice::from_ref(&team));

        assign_team_to_panel(&mut panel, &mut team, &guides, Some(5)).unwrap();
        assert_eq!(team.panel_id.as_deref(), Some("P1"));
        assert!(panel.has_team("T1"));
    }

    #[test]
    fn test_manual_assignment_capacity() {
        let mut panel = panel_seating("P1", &["F1", "F2"]);
        panel.add_team("T0");
        let mut team = Team::new("T1");
        let guides = GuideIndex::new();

        let err = assign_team_to_panel(&mut panel, &mut team, &guides, Some(1)).unwrap_err();
        assert_eq!(err.reason, SkipReason::PanelFull);
        assert!(!panel.has_team("T1"));
    }
}
