//! Input validation for roster snapshots.
//!
//! Checks structural integrity of faculty, panels, and teams before
//! allocation. Detects:
//! - Duplicate IDs
//! - Faculty seated on more than one panel
//! - A team's guide sitting on the panel evaluating it
//! - Undersized panels
//! - Dangling faculty/panel references
//! - Teams whose panel pointer disagrees with panel team lists

use crate::models::{Faculty, Panel, Team};
use std::collections::{HashMap, HashSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A faculty member is seated on more than one panel.
    OverlappingMembership,
    /// An assigned team's guide sits on that team's panel.
    GuideOnOwnPanel,
    /// A panel has fewer than two members.
    UndersizedPanel,
    /// A panel seats a faculty member missing from the roster.
    UnknownFacultyReference,
    /// A team points at a panel that doesn't exist.
    UnknownPanelReference,
    /// A team appears in more than one panel's team list.
    MultipleAssignment,
    /// A team's panel pointer disagrees with the panel's team list.
    AssignmentMismatch,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster snapshot.
///
/// Checks:
/// 1. No duplicate faculty, panel, or team IDs
/// 2. All panels have at least two members
/// 3. All panel members exist in the faculty roster
/// 4. No faculty member sits on two panels
/// 5. All team panel pointers reference existing panels
/// 6. No team appears in two panels' team lists
/// 7. Panel team lists and team panel pointers agree
/// 8. No assigned team's guide sits on its panel
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(faculty: &[Faculty], panels: &[Panel], teams: &[Team]) -> ValidationResult {
    let mut errors = Vec::new();

    // Collect faculty IDs
    let mut faculty_ids = HashSet::new();
    for f in faculty {
        if !faculty_ids.insert(f.employee_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate faculty ID: {}", f.employee_id),
            ));
        }
    }

    // Collect panel IDs, check sizes and membership
    let mut panel_ids = HashSet::new();
    let mut seated: HashMap<&str, &str> = HashMap::new();

    for panel in panels {
        if !panel_ids.insert(panel.panel_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate panel ID: {}", panel.panel_id),
            ));
        }

        if panel.member_count() < 2 {
            errors.push(ValidationError::new(
                ValidationErrorKind::UndersizedPanel,
                format!(
                    "Panel '{}' has {} member(s); minimum is 2",
                    panel.panel_id,
                    panel.member_count()
                ),
            ));
        }

        for member in &panel.members {
            let id = member.employee_id.as_str();
            if !faculty_ids.contains(id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownFacultyReference,
                    format!("Panel '{}' seats unknown faculty '{}'", panel.panel_id, id),
                ));
            }
            if let Some(other) = seated.insert(id, panel.panel_id.as_str()) {
                if other != panel.panel_id {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::OverlappingMembership,
                        format!(
                            "Faculty '{}' sits on both panel '{}' and panel '{}'",
                            id, other, panel.panel_id
                        ),
                    ));
                }
            }
        }
    }

    // Collect team IDs and check panel pointers
    let mut team_ids = HashSet::new();
    let team_by_id: HashMap<&str, &Team> = teams.iter().map(|t| (t.id.as_str(), t)).collect();

    for team in teams {
        if !team_ids.insert(team.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate team ID: {}", team.id),
            ));
        }

        if let Some(panel_id) = &team.panel_id {
            if !panel_ids.contains(panel_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPanelReference,
                    format!("Team '{}' points at unknown panel '{}'", team.id, panel_id),
                ));
            }
        }
    }

    // Cross-check panel team lists against team pointers and the guide rule
    let mut team_home: HashMap<&str, &str> = HashMap::new();
    for panel in panels {
        for team_id in &panel.team_ids {
            if let Some(other) = team_home.insert(team_id.as_str(), panel.panel_id.as_str()) {
                if other != panel.panel_id {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::MultipleAssignment,
                        format!(
                            "Team '{}' is assigned to both panel '{}' and panel '{}'",
                            team_id, other, panel.panel_id
                        ),
                    ));
                }
            }

            match team_by_id.get(team_id.as_str()) {
                None => {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::AssignmentMismatch,
                        format!("Panel '{}' lists unknown team '{}'", panel.panel_id, team_id),
                    ));
                }
                Some(team) => {
                    if team.panel_id.as_deref() != Some(panel.panel_id.as_str()) {
                        errors.push(ValidationError::new(
                            ValidationErrorKind::AssignmentMismatch,
                            format!(
                                "Panel '{}' lists team '{}' but the team points at {:?}",
                                panel.panel_id, team_id, team.panel_id
                            ),
                        ));
                    }

                    if let Some(guide) = &team.guide_faculty_id {
                        if panel.has_member(guide) {
                            errors.push(ValidationError::new(
                                ValidationErrorKind::GuideOnOwnPanel,
                                format!(
                                    "Guide '{}' of team '{}' sits on its evaluating panel '{}'",
                                    guide, team_id, panel.panel_id
                                ),
                            ));
                        }
                    }
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
