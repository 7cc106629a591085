//! Team (project) model.
//!
//! A team is a student group with a supervising guide and a nested
//! per-student review structure. Teams move between three assignment
//! states: guide-only (no panel yet), unassigned (eligible for panel
//! assignment), and assigned (bound to exactly one panel). Only the
//! panel pointer is mutated by this crate; students and reviews are
//! owned by the intake and marking workflows.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::normalize::{FieldValue, ScopedRecord};

/// A student project team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Unique team identifier.
    pub id: String,
    /// Project name.
    pub name: String,
    /// School, upstream shape.
    #[serde(default)]
    pub school: FieldValue,
    /// Department, upstream shape.
    #[serde(default)]
    pub department: FieldValue,
    /// Specialization track.
    pub specialization: String,
    /// Project type (e.g. internal, external).
    #[serde(rename = "type")]
    pub team_type: String,
    /// Employee id of the supervising guide, once linked.
    pub guide_faculty_id: Option<String>,
    /// Students, in roster order.
    pub students: Vec<Student>,
    /// Panel this team is currently assigned to, if any.
    pub panel_id: Option<String>,
}

impl Team {
    /// Creates a new team with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            school: FieldValue::Missing,
            department: FieldValue::Missing,
            specialization: String::new(),
            team_type: String::new(),
            guide_faculty_id: None,
            students: Vec::new(),
            panel_id: None,
        }
    }

    /// Sets the project name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the school.
    pub fn with_school(mut self, school: impl Into<String>) -> Self {
        self.school = FieldValue::One(school.into());
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = FieldValue::One(department.into());
        self
    }

    /// Sets the specialization.
    pub fn with_specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = specialization.into();
        self
    }

    /// Sets the project type.
    pub fn with_team_type(mut self, team_type: impl Into<String>) -> Self {
        self.team_type = team_type.into();
        self
    }

    /// Links the supervising guide.
    pub fn with_guide(mut self, faculty_id: impl Into<String>) -> Self {
        self.guide_faculty_id = Some(faculty_id.into());
        self
    }

    /// Adds a student.
    pub fn with_student(mut self, student: Student) -> Self {
        self.students.push(student);
        self
    }

    /// Whether the team is currently bound to a panel.
    pub fn is_assigned(&self) -> bool {
        self.panel_id.is_some()
    }

    /// Binds the team to a panel.
    pub fn assign_to(&mut self, panel_id: impl Into<String>) {
        self.panel_id = Some(panel_id.into());
    }

    /// Returns the team to the unassigned state.
    pub fn clear_assignment(&mut self) {
        self.panel_id = None;
    }

    /// Number of students.
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// First listed school, used as the schema lookup key.
    pub fn primary_school(&self) -> Option<&str> {
        self.school.first()
    }

    /// First listed department, used as the schema lookup key.
    pub fn primary_department(&self) -> Option<&str> {
        self.department.first()
    }
}

impl ScopedRecord for Team {
    fn school_field(&self) -> &FieldValue {
        &self.school
    }

    fn department_field(&self) -> &FieldValue {
        &self.department
    }
}

/// A student within a team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Student name.
    pub name: String,
    /// Registration number, unique within the team.
    pub reg_no: String,
    /// Contact email.
    pub email_id: String,
    /// Reviews keyed by review name.
    #[serde(default)]
    pub reviews: BTreeMap<String, Review>,
}

impl Student {
    /// Creates a new student with the given registration number.
    pub fn new(reg_no: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            reg_no: reg_no.into(),
            email_id: String::new(),
            reviews: BTreeMap::new(),
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email_id = email.into();
        self
    }

    /// Adds a review under the given review name.
    pub fn with_review(mut self, review_name: impl Into<String>, review: Review) -> Self {
        self.reviews.insert(review_name.into(), review);
        self
    }

    /// The review recorded under `review_name`, if any.
    pub fn review(&self, review_name: &str) -> Option<&Review> {
        self.reviews.get(review_name)
    }
}

/// A single review record for one student.
///
/// Once `locked` is set the record is immutable upstream; this crate
/// never writes review data in any case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Review {
    /// Whether the review has been finalized.
    pub locked: bool,
    /// Whether the student was explicitly marked present.
    pub attendance: bool,
    /// Free-text evaluator comments.
    pub comments: String,
    /// Marks keyed by rubric criterion name.
    #[serde(default)]
    pub marks: BTreeMap<String, Mark>,
}

impl Review {
    /// Creates an empty review.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the review as locked.
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Sets attendance.
    pub fn with_attendance(mut self, present: bool) -> Self {
        self.attendance = present;
        self
    }

    /// Sets the comments.
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = comments.into();
        self
    }

    /// Records a mark for a criterion.
    pub fn with_mark(mut self, criterion: impl Into<String>, mark: Mark) -> Self {
        self.marks.insert(criterion.into(), mark);
        self
    }

    /// Whether this review counts toward completion.
    ///
    /// True when the review is locked, attendance is explicitly true,
    /// comments are non-blank, or any mark is a non-zero score or the
    /// `"PAT"` sentinel.
    pub fn has_meaningful_data(&self) -> bool {
        self.locked
            || self.attendance
            || !self.comments.trim().is_empty()
            || self.marks.values().any(Mark::is_meaningful)
    }
}

/// A mark for one rubric criterion: a numeric score or the `"PAT"` sentinel.
///
/// Deserializes from a bare number or the string `"PAT"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Mark {
    /// Numeric score awarded for the criterion.
    Score(f64),
    /// Sentinel value: pending, absent, or transferred.
    Sentinel(MarkSentinel),
}

/// The `"PAT"` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkSentinel {
    #[serde(rename = "PAT")]
    Pat,
}

impl Mark {
    /// Creates a numeric mark.
    pub fn score(value: f64) -> Self {
        Self::Score(value)
    }

    /// Creates the `"PAT"` sentinel mark.
    pub fn pat() -> Self {
        Self::Sentinel(MarkSentinel::Pat)
    }

    /// Whether the mark counts as meaningful data.
    ///
    /// Non-zero scores and the sentinel count; an explicit zero does not.
    pub fn is_meaningful(&self) -> bool {
        match self {
            Self::Score(v) => *v != 0.0,
            Self::Sentinel(_) => true,
        }
    }
}
