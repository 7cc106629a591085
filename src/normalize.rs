//! Field normalization for roster records.
//!
//! Upstream rosters represent school and department fields inconsistently:
//! a single string, an array of strings, or nothing at all. This module
//! canonicalizes all three shapes into deterministic sets at the boundary,
//! so every downstream filter evaluates membership against one shape only.
//!
//! Listing order of multi-valued fields is preserved in [`FieldValue`];
//! the builder uses the first listed department when a faculty record
//! names several.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A school or department field as it arrives from upstream.
///
/// Deserializes from a bare string, an array of strings, or `null`.
/// Entries keep their upstream listing order; [`FieldValue::as_set`]
/// produces the canonical deduplicated form used for matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Field absent or null.
    #[default]
    Missing,
    /// Single scalar value.
    One(String),
    /// Array of values, upstream order preserved.
    Many(Vec<String>),
}

impl FieldValue {
    /// Builds a field from any list of values.
    pub fn many<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Many(values.into_iter().map(Into::into).collect())
    }

    /// Canonical set form: trimmed, blanks dropped, deterministic order.
    pub fn as_set(&self) -> BTreeSet<String> {
        self.entries().map(str::to_string).collect()
    }

    /// First non-blank entry in upstream listing order.
    pub fn first(&self) -> Option<&str> {
        self.entries().next()
    }

    /// Whether the canonical set contains `value` (exact match on trimmed entries).
    pub fn contains(&self, value: &str) -> bool {
        self.entries().any(|e| e == value)
    }

    /// Whether the field has no usable entries.
    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }

    fn entries(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Self::Missing => &[],
            Self::One(v) => std::slice::from_ref(v),
            Self::Many(vs) => vs.as_slice(),
        };
        slice.iter().map(|v| v.trim()).filter(|v| !v.is_empty())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

/// A record carrying school and department fields in upstream shape.
///
/// Implemented by `Faculty` and `Team` so both normalize through the
/// same code path.
pub trait ScopedRecord {
    /// Raw school field.
    fn school_field(&self) -> &FieldValue;
    /// Raw department field.
    fn department_field(&self) -> &FieldValue;
}

/// Canonicalized school/department sets for a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedFields {
    /// Schools the record belongs to (possibly empty).
    pub schools: BTreeSet<String>,
    /// Departments the record belongs to (possibly empty).
    pub departments: BTreeSet<String>,
}

impl NormalizedFields {
    /// Whether the record lists the given school.
    pub fn matches_school(&self, school: &str) -> bool {
        self.schools.contains(school)
    }

    /// Whether the record lists the given department.
    pub fn matches_department(&self, department: &str) -> bool {
        self.departments.contains(department)
    }

    /// Whether the record lists both the school and the department.
    pub fn matches_scope(&self, school: &str, department: &str) -> bool {
        self.matches_school(school) && self.matches_department(department)
    }
}

/// Normalizes a record's school/department fields into canonical sets.
///
/// Pure function; the single matching semantics used everywhere a
/// school/department filter is evaluated.
pub fn normalize_fields<R: ScopedRecord>(record: &R) -> NormalizedFields {
    NormalizedFields {
        schools: record.school_field().as_set(),
        departments: record.department_field().as_set(),
    }
}
