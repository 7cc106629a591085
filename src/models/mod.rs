//! Panel allocation domain models.
//!
//! Provides the core data types for representing faculty rosters, project
//! teams, evaluation panels, and marking rubrics.
//!
//! # Domain Mappings
//!
//! | panel-alloc | Academic department |
//! |-------------|--------------------|
//! | Faculty | Roster member eligible for panel duty |
//! | Team | Student project group with a supervising guide |
//! | Panel | Evaluation committee assessing assigned teams |
//! | MarkingSchema | Rubric of required reviews per school/department |

mod faculty;
mod panel;
mod schema;
mod team;

pub use faculty::Faculty;
pub use panel::{Panel, ScopeContext};
pub use schema::{FacultyType, MarkingSchema, MarkingSchemaSet, ReviewSpec};
pub use team::{Mark, MarkSentinel, Review, Student, Team};
