//! Per-panel and dashboard mark completion.
//!
//! Rolls team completion records up to panel level, then to a single
//! aggregate summary. Holds no cache; recompute whenever review data or
//! panel membership changes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{TeamMarkStatus, TeamStatusReport};
use crate::models::{MarkingSchemaSet, Panel, Team};

/// Completion status of one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelMarkStatus {
    /// No teams assigned.
    NoProjects,
    /// Every assigned team is fully marked.
    All,
    /// Some assigned teams have marks.
    Partial,
    /// No assigned team has any marks.
    None,
}

/// Mark completion record for one panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelStatusReport {
    /// Panel id.
    pub panel_id: String,
    /// Derived status.
    pub status: PanelMarkStatus,
    /// Teams assigned to the panel.
    pub total_teams: usize,
    /// Teams fully marked.
    pub fully_marked_projects: usize,
    /// Teams with some but not all marks.
    pub partial_projects: usize,
    /// Teams with no marks at all.
    pub unmarked_projects: usize,
}

impl PanelStatusReport {
    /// Rolls the panel's team reports up into one record.
    ///
    /// `team_reports` maps team id to its completion record; a team the
    /// panel lists but the map lacks counts as unmarked.
    pub fn calculate(panel: &Panel, team_reports: &HashMap<&str, &TeamStatusReport>) -> Self {
        let total_teams = panel.team_count();
        let mut fully_marked = 0usize;
        let mut with_any = 0usize;

        for team_id in &panel.team_ids {
            if let Some(report) = team_reports.get(team_id.as_str()) {
                if report.status == TeamMarkStatus::Full {
                    fully_marked += 1;
                }
                if report.has_any_marks() {
                    with_any += 1;
                }
            }
        }

        let status = if total_teams == 0 {
            PanelMarkStatus::NoProjects
        } else if fully_marked == total_teams {
            PanelMarkStatus::All
        } else if with_any == 0 {
            PanelMarkStatus::None
        } else {
            PanelMarkStatus::Partial
        };

        Self {
            panel_id: panel.panel_id.clone(),
            status,
            total_teams,
            fully_marked_projects: fully_marked,
            partial_projects: with_any.saturating_sub(fully_marked),
            unmarked_projects: total_teams.saturating_sub(with_any),
        }
    }
}

/// Aggregate dashboard totals across all panels and teams.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Panels considered.
    pub total_panels: usize,
    /// Panels with every team fully marked.
    pub panels_complete: usize,
    /// Panels with partial completion.
    pub panels_partial: usize,
    /// Panels with no marks at all.
    pub panels_unmarked: usize,
    /// Panels with no teams assigned.
    pub panels_without_projects: usize,
    /// Teams considered.
    pub total_teams: usize,
    /// Teams fully marked.
    pub teams_full: usize,
    /// Teams partially marked.
    pub teams_partial: usize,
    /// Teams with no marks.
    pub teams_unmarked: usize,
    /// Teams with no applicable schema.
    pub teams_without_schema: usize,
}

/// Complete mark-status view: per team, per panel, and in aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkStatusReport {
    /// One record per team, in team listing order.
    pub teams: Vec<TeamStatusReport>,
    /// One record per panel, in panel listing order.
    pub panels: Vec<PanelStatusReport>,
    /// Aggregate totals.
    pub summary: DashboardSummary,
}

impl MarkStatusReport {
    /// Computes mark status for every team and panel in the snapshot.
    ///
    /// Pure read path: no review data is mutated and nothing is cached.
    pub fn calculate(panels: &[Panel], teams: &[Team], schemas: &MarkingSchemaSet) -> Self {
        let team_reports: Vec<TeamStatusReport> = teams
            .iter()
            .map(|t| TeamStatusReport::calculate(t, schemas))
            .collect();

        let by_id: HashMap<&str, &TeamStatusReport> = team_reports
            .iter()
            .map(|r| (r.team_id.as_str(), r))
            .collect();

        let panel_reports: Vec<PanelStatusReport> = panels
            .iter()
            .map(|p| PanelStatusReport::calculate(p, &by_id))
            .collect();

        let mut summary = DashboardSummary {
            total_panels: panel_reports.len(),
            total_teams: team_reports.len(),
            ..Default::default()
        };
        for report in &panel_reports {
            match report.status {
                PanelMarkStatus::All => summary.panels_complete += 1,
                PanelMarkStatus::Partial => summary.panels_partial += 1,
                PanelMarkStatus::None => summary.panels_unmarked += 1,
                PanelMarkStatus::NoProjects => summary.panels_without_projects += 1,
            }
        }
        for report in &team_reports {
            match report.status {
                TeamMarkStatus::Full => summary.teams_full += 1,
                TeamMarkStatus::Partial => summary.teams_partial += 1,
                TeamMarkStatus::None => summary.teams_unmarked += 1,
                TeamMarkStatus::NoSchema => summary.teams_without_schema += 1,
            }
        }

        Self {
            teams: team_reports,
            panels: panel_reports,
            summary,
        }
    }

    /// The completion record for a given team.
    pub fn team(&self, team_id: &str) -> Option<&TeamStatusReport> {
        self.teams.iter().find(|r| r.team_id == team_id)
    }

    /// The completion record for a given panel.
    pub fn panel(&self, panel_id: &str) -> Option<&PanelStatusReport> {
        self.panels.iter().find(|r| r.panel_id == panel_id)
    }
}
