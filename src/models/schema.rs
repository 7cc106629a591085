//! Marking schema model.
//!
//! A marking schema is the rubric for one `(school, department)` scope:
//! an ordered list of reviews, each administered either by the team's
//! guide or by its panel. Only panel-administered reviews participate in
//! panel mark-completion.

use serde::{Deserialize, Serialize};

/// Who administers a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacultyType {
    /// Administered by the team's supervising guide.
    Guide,
    /// Administered by the evaluation panel.
    Panel,
}

/// One review slot in a marking schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSpec {
    /// Review name, the key under which student review data is stored.
    pub name: String,
    /// Administering faculty type.
    pub faculty_type: FacultyType,
}

impl ReviewSpec {
    /// Creates a guide-administered review slot.
    pub fn guide(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            faculty_type: FacultyType::Guide,
        }
    }

    /// Creates a panel-administered review slot.
    pub fn panel(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            faculty_type: FacultyType::Panel,
        }
    }
}

/// The marking rubric for one school/department scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkingSchema {
    /// School this schema applies to.
    pub school: String,
    /// Department this schema applies to.
    pub department: String,
    /// Required reviews, in rubric order.
    pub reviews: Vec<ReviewSpec>,
}

impl MarkingSchema {
    /// Creates an empty schema for the given scope.
    pub fn new(school: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            school: school.into(),
            department: department.into(),
            reviews: Vec::new(),
        }
    }

    /// Adds a review slot.
    pub fn with_review(mut self, review: ReviewSpec) -> Self {
        self.reviews.push(review);
        self
    }

    /// Panel-administered reviews, in rubric order.
    pub fn panel_reviews(&self) -> Vec<&ReviewSpec> {
        self.reviews
            .iter()
            .filter(|r| r.faculty_type == FacultyType::Panel)
            .collect()
    }
}

/// All marking schemas known to a session, keyed by scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkingSchemaSet {
    schemas: Vec<MarkingSchema>,
}

impl MarkingSchemaSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a schema.
    pub fn with_schema(mut self, schema: MarkingSchema) -> Self {
        self.schemas.push(schema);
        self
    }

    /// The schema for a `(school, department)` scope, if one exists.
    pub fn for_scope(&self, school: &str, department: &str) -> Option<&MarkingSchema> {
        self.schemas
            .iter()
            .find(|s| s.school == school && s.department == department)
    }

    /// Number of schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_review_filter() {
        let schema = MarkingSchema::new("SOC", "CSE")
            .with_review(ReviewSpec::guide("review0"))
            .with_review(ReviewSpec::panel("review1"))
            .with_review(ReviewSpec::panel("review2"));

        let panel = schema.panel_reviews();
        assert_eq!(panel.len(), 2);
        assert_eq!(panel[0].name, "review1");
        assert_eq!(panel[1].name, "review2");
    }

    #[test]
    fn test_scope_lookup() {
        let set = MarkingSchemaSet::new()
            .with_schema(MarkingSchema::new("SOC", "CSE").with_review(ReviewSpec::panel("r1")))
            .with_schema(MarkingSchema::new("SOC", "ECE").with_review(ReviewSpec::panel("r1")));

        assert!(set.for_scope("SOC", "CSE").is_some());
        assert!(set.for_scope("SOC", "MECH").is_none());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_faculty_type_serde() {
        let json = serde_json::to_string(&ReviewSpec::panel("r1")).unwrap();
        assert!(json.contains("\"panel\""));

        let spec: ReviewSpec =
            serde_json::from_str("{\"name\":\"r0\",\"faculty_type\":\"guide\"}").unwrap();
        assert_eq!(spec.faculty_type, FacultyType::Guide);
    }
}
