//! Panel allocation and mark-status engine.
//!
//! Coordinates assignment of faculty evaluation committees ("panels") to
//! student project teams and tracks how completely each team has been
//! evaluated against a configurable marking rubric. The crate is a pure
//! transformation layer: it consumes plain faculty/team/panel records
//! from its collaborators and returns allocation results and status
//! summaries, with no persistence, transport, or rendering of its own.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Faculty`, `Team`, `Student`, `Review`,
//!   `Panel`, `MarkingSchema`, `ScopeContext`
//! - **`normalize`**: Canonicalization of scalar-or-array school and
//!   department fields into deterministic sets
//! - **`validation`**: Roster integrity checks (duplicate IDs, overlapping
//!   panel membership, guide conflicts, dangling references)
//! - **`allocation`**: Panel construction, conflict-checked team
//!   assignment, and panel lifecycle
//! - **`status`**: Per-team, per-panel, and dashboard mark completion
//!
//! # Operations
//!
//! The four entry points collaborators call:
//!
//! - [`allocation::PanelBuilder::build`]: partition an eligible faculty
//!   pool into new panels
//! - [`allocation::AutoAssigner::assign`]: distribute unassigned teams
//!   across existing panels
//! - [`allocation::check_assignment`]: decide a single team/panel pairing
//! - [`status::MarkStatusReport::calculate`]: derive completion status
//!
//! # Invariants
//!
//! - A faculty member sits on at most one panel at a time
//! - An assigned team's guide never sits on the panel evaluating it
//! - Panel size is fixed at creation; assignment only changes team sets
//! - A team is assigned to at most one panel at a time
//!
//! # Concurrency
//!
//! Every operation is a synchronous, pure function of an input snapshot
//! plus explicit parameters; nothing blocks on I/O and nothing is cached.
//! Callers serialize structural mutations per school/department scope and
//! re-run the pipeline idempotently on retry.

pub mod allocation;
pub mod models;
pub mod normalize;
pub mod status;
pub mod validation;
