//! Faculty model.
//!
//! Faculty are the members evaluation panels are built from. Each record
//! carries a unique employee id and the school/department fields used for
//! scoping, in whatever shape the upstream roster provides them.

use serde::{Deserialize, Serialize};

use crate::normalize::{FieldValue, ScopedRecord};

/// A faculty member available for panel membership.
///
/// Immutable once loaded for a session; panel construction only reads
/// these records. The employee id doubles as the deterministic ordering
/// key when slicing a department pool into panels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faculty {
    /// Unique employee identifier.
    pub employee_id: String,
    /// Human-readable name.
    pub name: String,
    /// School affiliation(s), upstream shape.
    #[serde(default)]
    pub school: FieldValue,
    /// Department affiliation(s), upstream shape.
    #[serde(default)]
    pub department: FieldValue,
}

impl Faculty {
    /// Creates a new faculty record with the given employee id.
    pub fn new(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            name: String::new(),
            school: FieldValue::Missing,
            department: FieldValue::Missing,
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets a single school affiliation.
    pub fn with_school(mut self, school: impl Into<String>) -> Self {
        self.school = FieldValue::One(school.into());
        self
    }

    /// Sets a single department affiliation.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = FieldValue::One(department.into());
        self
    }

    /// Sets multiple department affiliations, listing order preserved.
    pub fn with_departments<I, S>(mut self, departments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.department = FieldValue::many(departments);
        self
    }

    /// First listed department, if any.
    ///
    /// A faculty member listed under several departments is bucketed into
    /// this one when panels are built across all departments.
    pub fn primary_department(&self) -> Option<&str> {
        self.department.first()
    }
}

impl ScopedRecord for Faculty {
    fn school_field(&self) -> &FieldValue {
        &self.school
    }

    fn department_field(&self) -> &FieldValue {
        &self.department
    }
}
