//! Per-team mark completion.
//!
//! Derives how completely a team has been evaluated against the
//! panel-administered reviews of its scope's marking schema. Read-only
//! over review data.

use serde::{Deserialize, Serialize};

use crate::models::{MarkingSchemaSet, Student, Team};

/// Completion status of one team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeamMarkStatus {
    /// Every student has meaningful data in every panel review.
    Full,
    /// At least one student has meaningful data somewhere, but not full.
    Partial,
    /// No student has any meaningful panel review data.
    None,
    /// No schema, or no panel-tagged reviews, for the team's scope.
    NoSchema,
}

/// Mark completion record for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStatusReport {
    /// Team id.
    pub team_id: String,
    /// Derived status.
    pub status: TeamMarkStatus,
    /// Students on the team.
    pub total_students: usize,
    /// Students with meaningful data in every panel review.
    pub students_fully_marked: usize,
    /// Students with meaningful data in at least one panel review.
    pub students_with_any_marks: usize,
}

impl TeamStatusReport {
    /// Computes the completion record for a team.
    ///
    /// The schema is looked up by the team's first listed school and
    /// department. A missing schema, or one with no panel-tagged
    /// reviews, yields `NoSchema` with zero counts.
    pub fn calculate(team: &Team, schemas: &MarkingSchemaSet) -> Self {
        let schema = team
            .primary_school()
            .zip(team.primary_department())
            .and_then(|(school, dept)| schemas.for_scope(school, dept));

        let panel_reviews: Vec<&str> = match schema {
            Some(s) => s.panel_reviews().iter().map(|r| r.name.as_str()).collect(),
            None => Vec::new(),
        };

        let total_students = team.student_count();

        if panel_reviews.is_empty() {
            return Self {
                team_id: team.id.clone(),
                status: TeamMarkStatus::NoSchema,
                total_students,
                students_fully_marked: 0,
                students_with_any_marks: 0,
            };
        }

        let mut students_fully_marked = 0;
        let mut students_with_any_marks = 0;

        for student in &team.students {
            let meaningful = meaningful_review_count(student, &panel_reviews);
            if meaningful == panel_reviews.len() {
                students_fully_marked += 1;
            }
            if meaningful > 0 {
                students_with_any_marks += 1;
            }
        }

        let status = if total_students == 0 {
            TeamMarkStatus::None
        } else if students_fully_marked == total_students {
            TeamMarkStatus::Full
        } else if students_with_any_marks > 0 {
            TeamMarkStatus::Partial
        } else {
            TeamMarkStatus::None
        };

        Self {
            team_id: team.id.clone(),
            status,
            total_students,
            students_fully_marked,
            students_with_any_marks,
        }
    }

    /// Whether at least one student has any meaningful panel review data.
    pub fn has_any_marks(&self) -> bool {
        self.students_with_any_marks > 0
    }
}

/// Number of required panel reviews in which the student has meaningful
/// data. A review absent from the student's records counts as empty.
fn meaningful_review_count(student: &Student, panel_reviews: &[&str]) -> usize {
    panel_reviews
        .iter()
        .filter(|name| {
            student
                .review(name)
                .is_some_and(|r| r.has_meaningful_data())
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Mark, MarkingSchema, Review, ReviewSpec};

    fn schemas() -> MarkingSchemaSet {
        MarkingSchemaSet::new().with_schema(
            MarkingSchema::new("SOC", "CSE")
                .with_review(ReviewSpec::guide("review0"))
                .with_review(ReviewSpec::panel("review1"))
                .with_review(ReviewSpec::panel("review2")),
        )
    }

    fn scoped_team(id: &str) -> Team {
        Team::new(id).with_school("SOC").with_department("CSE")
    }

    fn marked_review() -> Review {
        Review::new().with_mark("design", Mark::score(8.0))
    }

    #[test]
    fn test_fully_marked_team() {
        let team = scoped_team("T1")
            .with_student(
                Student::new("S1")
                    .with_review("review1", marked_review())
                    .with_review("review2", marked_review()),
            )
            .with_student(
                Student::new("S2")
                    .with_review("review1", Review::new().locked())
                    .with_review("review2", Review::new().with_attendance(true)),
            );

        let report = TeamStatusReport::calculate(&team, &schemas());
        assert_eq!(report.status, TeamMarkStatus::Full);
        assert_eq!(report.students_fully_marked, 2);
        assert_eq!(report.students_with_any_marks, 2);
    }

    #[test]
    fn test_partial_team_with_comment_only_review() {
        // One student fully marked; the other has a comment-only review
        // on one of the two required panel reviews.
        let team = scoped_team("T1")
            .with_student(
                Student::new("S1")
                    .with_review("review1", marked_review())
                    .with_review("review2", marked_review()),
            )
            .with_student(
                Student::new("S2")
                    .with_review("review1", Review::new().with_comments("needs a demo")),
            );

        let report = TeamStatusReport::calculate(&team, &schemas());
        assert_eq!(report.status, TeamMarkStatus::Partial);
        assert_eq!(report.students_fully_marked, 1);
        assert_eq!(report.students_with_any_marks, 2);
        assert_eq!(report.total_students, 2);
    }

    #[test]
    fn test_unmarked_team() {
        let team = scoped_team("T1")
            .with_student(Student::new("S1"))
            .with_student(Student::new("S2").with_review("review1", Review::new()));

        let report = TeamStatusReport::calculate(&team, &schemas());
        assert_eq!(report.status, TeamMarkStatus::None);
        assert!(!report.has_any_marks());
    }

    #[test]
    fn test_guide_reviews_ignored() {
        // Data only in the guide-administered review0 does not count
        let team = scoped_team("T1")
            .with_student(Student::new("S1").with_review("review0", marked_review()));

        let report = TeamStatusReport::calculate(&team, &schemas());
        assert_eq!(report.status, TeamMarkStatus::None);
    }

    #[test]
    fn test_no_schema_for_scope() {
        let team = Team::new("T1")
            .with_school("SOC")
            .with_department("MECH")
            .with_student(Student::new("S1").with_review("review1", marked_review()));

        let report = TeamStatusReport::calculate(&team, &schemas());
        assert_eq!(report.status, TeamMarkStatus::NoSchema);
        assert_eq!(report.students_fully_marked, 0);
    }

    #[test]
    fn test_schema_without_panel_reviews() {
        let guide_only = MarkingSchemaSet::new()
            .with_schema(MarkingSchema::new("SOC", "CSE").with_review(ReviewSpec::guide("r0")));
        let team = scoped_team("T1").with_student(Student::new("S1"));

        let report = TeamStatusReport::calculate(&team, &guide_only);
        assert_eq!(report.status, TeamMarkStatus::NoSchema);
    }

    #[test]
    fn test_empty_team_is_unmarked() {
        let report = TeamStatusReport::calculate(&scoped_team("T1"), &schemas());
        assert_eq!(report.status, TeamMarkStatus::None);
        assert_eq!(report.total_students, 0);
    }

    #[test]
    fn test_pat_sentinel_counts() {
        let team = scoped_team("T1").with_student(
            Student::new("S1")
                .with_review("review1", Review::new().with_mark("design", Mark::pat()))
                .with_review("review2", Review::new().with_mark("design", Mark::pat())),
        );

        let report = TeamStatusReport::calculate(&team, &schemas());
        assert_eq!(report.status, TeamMarkStatus::Full);
    }

    #[test]
    fn test_zero_marks_do_not_count() {
        let team = scoped_team("T1").with_student(
            Student::new("S1").with_review("review1", Review::new().with_mark("design", Mark::score(0.0))),
        );

        let report = TeamStatusReport::calculate(&team, &schemas());
        assert_eq!(report.status, TeamMarkStatus::None);
    }
}
