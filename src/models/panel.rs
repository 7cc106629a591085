//! Panel model.
//!
//! A panel is an evaluation committee: an ordered list of member faculty
//! plus the set of teams currently assigned to it. Panel size is fixed at
//! creation; assignment operations only change the team set. A faculty
//! member belongs to at most one panel at a time, and an assigned team's
//! guide must never sit on the panel evaluating it.

use serde::{Deserialize, Serialize};

use super::Faculty;

/// An explicit `(school, department)` scope threaded through builder and
/// assigner calls in place of ambient session state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScopeContext {
    /// School name.
    pub school: String,
    /// Department name.
    pub department: String,
}

impl ScopeContext {
    /// Creates a scope.
    pub fn new(school: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            school: school.into(),
            department: department.into(),
        }
    }
}

/// An evaluation committee of faculty members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Panel {
    /// Unique panel identifier.
    pub panel_id: String,
    /// Member faculty, in seating order. Size is fixed at creation.
    pub members: Vec<Faculty>,
    /// School this panel serves.
    pub school: String,
    /// Department this panel serves.
    pub department: String,
    /// Venue, once allotted.
    pub venue: Option<String>,
    /// Teams currently assigned to this panel.
    pub team_ids: Vec<String>,
}

impl Panel {
    /// Creates an empty panel with the given id.
    pub fn new(panel_id: impl Into<String>) -> Self {
        Self {
            panel_id: panel_id.into(),
            members: Vec::new(),
            school: String::new(),
            department: String::new(),
            venue: None,
            team_ids: Vec::new(),
        }
    }

    /// Sets the school.
    pub fn with_school(mut self, school: impl Into<String>) -> Self {
        self.school = school.into();
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the venue.
    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }

    /// Adds a member.
    pub fn with_member(mut self, member: Faculty) -> Self {
        self.members.push(member);
        self
    }

    /// Adds all members from an iterator.
    pub fn with_members<I>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = Faculty>,
    {
        self.members.extend(members);
        self
    }

    /// Member employee ids, in seating order.
    pub fn faculty_ids(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.employee_id.as_str()).collect()
    }

    /// Whether the given faculty member sits on this panel.
    pub fn has_member(&self, employee_id: &str) -> bool {
        self.members.iter().any(|m| m.employee_id == employee_id)
    }

    /// Number of members.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Number of assigned teams.
    pub fn team_count(&self) -> usize {
        self.team_ids.len()
    }

    /// Whether the given team is assigned to this panel.
    pub fn has_team(&self, team_id: &str) -> bool {
        self.team_ids.iter().any(|t| t == team_id)
    }

    /// Records a team assignment. Duplicate ids are ignored.
    pub fn add_team(&mut self, team_id: impl Into<String>) {
        let team_id = team_id.into();
        if !self.has_team(&team_id) {
            self.team_ids.push(team_id);
        }
    }

    /// Removes a team assignment. Returns whether the team was present.
    pub fn remove_team(&mut self, team_id: &str) -> bool {
        let before = self.team_ids.len();
        self.team_ids.retain(|t| t != team_id);
        self.team_ids.len() != before
    }
}
