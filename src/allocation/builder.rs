//! Panel construction from an eligible faculty pool.
//!
//! # Algorithm
//!
//! 1. Filter the pool to the target scope and group it by department.
//! 2. Per department, `max_panels = floor(group_size / panel_size)`.
//! 3. Order each group by ascending employee id, then slice consecutive
//!    groups of `panel_size`; the remainder stays unassigned.
//! 4. Departments smaller than `panel_size` are skipped and reported.
//!
//! A faculty member listed under several departments is bucketed into its
//! first listed department only, so one build can never seat the same
//! person on two panels.
//!
//! # Complexity
//! O(n log n) in pool size, dominated by the per-department sort.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{AllocationError, AllocationErrorKind};
use crate::models::{Faculty, Panel, ScopeContext};
use crate::normalize::normalize_fields;

/// Target scope for a build run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildScope {
    /// One school/department pair, with an optional desired panel count.
    ///
    /// When `panel_count` is `None`, as many panels as the pool supports
    /// are built. A count above the pool's capacity is rejected.
    Department {
        scope: ScopeContext,
        panel_count: Option<usize>,
    },
    /// Every department present in the eligible pool for one school,
    /// maximizing panel count per department.
    AllDepartments { school: String },
}

/// A department left out of a build for lack of faculty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSkip {
    /// Department name.
    pub department: String,
    /// Eligible faculty available in the department.
    pub available: usize,
    /// Faculty needed for one panel.
    pub required: usize,
}

/// Result of a successful build run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildOutcome {
    /// New panel drafts, no teams assigned yet.
    pub panels: Vec<Panel>,
    /// Employee ids left unconsumed, available for a future panel.
    pub leftover_faculty: Vec<String>,
    /// Departments skipped for lack of faculty.
    pub skipped: Vec<DepartmentSkip>,
}

/// Partitions an eligible faculty pool into new panels.
///
/// The pool must contain only faculty not already seated on a panel;
/// [`roster::eligible_faculty`](super::roster::eligible_faculty) computes
/// it from a full roster.
///
/// # Example
///
/// ```
/// use panel_alloc::allocation::{BuildScope, PanelBuilder};
/// use panel_alloc::models::{Faculty, ScopeContext};
///
/// let pool: Vec<Faculty> = (1..=7)
///     .map(|n| {
///         Faculty::new(format!("F{n:02}"))
///             .with_school("SOC")
///             .with_department("CSE")
///     })
///     .collect();
///
/// let builder = PanelBuilder::new(3);
/// let scope = BuildScope::Department {
///     scope: ScopeContext::new("SOC", "CSE"),
///     panel_count: None,
/// };
/// let outcome = builder.build(&pool, &scope).unwrap();
/// assert_eq!(outcome.panels.len(), 2);
/// assert_eq!(outcome.leftover_faculty, vec!["F07".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct PanelBuilder {
    panel_size: usize,
    id_prefix: String,
}

impl PanelBuilder {
    /// Creates a builder for panels of the given size.
    pub fn new(panel_size: usize) -> Self {
        Self {
            panel_size,
            id_prefix: "panel".to_string(),
        }
    }

    /// Sets the prefix used for draft panel ids.
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Builds panel drafts from the eligible pool.
    ///
    /// # Errors
    /// - `PanelSizeTooSmall` when the configured size is below 2
    /// - `EmptyFacultyPool` when the pool is empty
    /// - `PanelCountExceedsCapacity` when a requested count exceeds
    ///   `floor(group_size / panel_size)` in single-department mode
    /// - `NoPanelCapacity` when no department yields a single panel
    pub fn build(
        &self,
        eligible: &[Faculty],
        scope: &BuildScope,
    ) -> Result<BuildOutcome, AllocationError> {
        if self.panel_size < 2 {
            return Err(AllocationError::new(
                AllocationErrorKind::PanelSizeTooSmall,
                format!("Panel size must be at least 2, got {}", self.panel_size),
            ));
        }
        if eligible.is_empty() {
            return Err(AllocationError::new(
                AllocationErrorKind::EmptyFacultyPool,
                "No eligible faculty to build panels from",
            ));
        }

        let (school, groups, leftover_unscoped) = self.group_pool(eligible, scope);

        let mut panels = Vec::new();
        let mut leftover_faculty = leftover_unscoped;
        let mut skipped = Vec::new();

        for (department, mut group) in groups {
            group.sort_by(|a, b| a.employee_id.cmp(&b.employee_id));
            let max_panels = group.len() / self.panel_size;
            debug!(
                "department {}: {} eligible, capacity {} panel(s) of {}",
                department,
                group.len(),
                max_panels,
                self.panel_size
            );

            let wanted = match scope {
                BuildScope::Department { panel_count, .. } => {
                    let wanted = panel_count.unwrap_or(max_panels);
                    if wanted > max_panels {
                        return Err(AllocationError::new(
                            AllocationErrorKind::PanelCountExceedsCapacity,
                            format!(
                                "Requested {} panel(s) for department '{}' but only {} eligible faculty support {}",
                                wanted,
                                department,
                                group.len(),
                                max_panels
                            ),
                        ));
                    }
                    wanted
                }
                BuildScope::AllDepartments { .. } => max_panels,
            };

            if group.len() < self.panel_size {
                warn!(
                    "department {} skipped: {} eligible, {} needed per panel",
                    department,
                    group.len(),
                    self.panel_size
                );
                skipped.push(DepartmentSkip {
                    department: department.clone(),
                    available: group.len(),
                    required: self.panel_size,
                });
                leftover_faculty.extend(group.iter().map(|f| f.employee_id.clone()));
                continue;
            }

            let consumed = wanted * self.panel_size;
            for (seq, chunk) in group[..consumed].chunks(self.panel_size).enumerate() {
                let panel = Panel::new(format!("{}-{}-{}", self.id_prefix, department, seq + 1))
                    .with_school(school.clone())
                    .with_department(department.clone())
                    .with_members(chunk.iter().map(|f| (*f).clone()));
                panels.push(panel);
            }
            leftover_faculty.extend(group[consumed..].iter().map(|f| f.employee_id.clone()));
        }

        if panels.is_empty() {
            return Err(AllocationError::new(
                AllocationErrorKind::NoPanelCapacity,
                format!(
                    "No department had enough eligible faculty for a panel of {} ({} department(s) skipped)",
                    self.panel_size,
                    skipped.len()
                ),
            ));
        }

        Ok(BuildOutcome {
            panels,
            leftover_faculty,
            skipped,
        })
    }

    /// Filters the pool to the scope and buckets it by department.
    ///
    /// Multi-department faculty land in their first listed department.
    /// Faculty outside the scope, or with no department at all, go
    /// straight to the leftover list.
    fn group_pool<'a>(
        &self,
        eligible: &'a [Faculty],
        scope: &BuildScope,
    ) -> (String, BTreeMap<String, Vec<&'a Faculty>>, Vec<String>) {
        let mut groups: BTreeMap<String, Vec<&Faculty>> = BTreeMap::new();
        let mut leftover = Vec::new();

        let school = match scope {
            BuildScope::Department { scope, .. } => scope.school.clone(),
            BuildScope::AllDepartments { school } => school.clone(),
        };

        for faculty in eligible {
            let normalized = normalize_fields(faculty);
            match scope {
                BuildScope::Department { scope, .. } => {
                    if normalized.matches_scope(&scope.school, &scope.department) {
                        groups
                            .entry(scope.department.clone())
                            .or_default()
                            .push(faculty);
                    }
                }
                BuildScope::AllDepartments { school } => {
                    if !normalized.matches_school(school) {
                        continue;
                    }
                    match faculty.primary_department() {
                        Some(dept) => groups.entry(dept.to_string()).or_default().push(faculty),
                        None => leftover.push(faculty.employee_id.clone()),
                    }
                }
            }
        }

        (school, groups, leftover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(dept: &str, count: usize) -> Vec<Faculty> {
        (1..=count)
            .map(|n| {
                Faculty::new(format!("{dept}-F{n:02}"))
                    .with_school("SOC")
                    .with_department(dept)
            })
            .collect()
    }

    fn dept_scope(department: &str, panel_count: Option<usize>) -> BuildScope {
        BuildScope::Department {
            scope: ScopeContext::new("SOC", department),
            panel_count,
        }
    }

    #[test]
    fn test_seven_faculty_panel_size_three() {
        let eligible = pool("CSE", 7);
        let outcome = PanelBuilder::new(3)
            .build(&eligible, &dept_scope("CSE", None))
            .unwrap();

        assert_eq!(outcome.panels.len(), 2);
        // The six lowest employee ids are consumed in order
        assert_eq!(
            outcome.panels[0].faculty_ids(),
            vec!["CSE-F01", "CSE-F02", "CSE-F03"]
        );
        assert_eq!(
            outcome.panels[1].faculty_ids(),
            vec!["CSE-F04", "CSE-F05", "CSE-F06"]
        );
        assert_eq!(outcome.leftover_faculty, vec!["CSE-F07".to_string()]);
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_panel_drafts_carry_scope_and_no_teams() {
        let eligible = pool("CSE", 4);
        let outcome = PanelBuilder::new(2)
            .build(&eligible, &dept_scope("CSE", None))
            .unwrap();

        for panel in &outcome.panels {
            assert_eq!(panel.school, "SOC");
            assert_eq!(panel.department, "CSE");
            assert_eq!(panel.team_count(), 0);
            assert_eq!(panel.member_count(), 2);
        }
    }

    #[test]
    fn test_requested_count_respected() {
        let eligible = pool("CSE", 9);
        let outcome = PanelBuilder::new(3)
            .build(&eligible, &dept_scope("CSE", Some(2)))
            .unwrap();

        assert_eq!(outcome.panels.len(), 2);
        assert_eq!(outcome.leftover_faculty.len(), 3);
    }

    #[test]
    fn test_requested_count_exceeds_capacity() {
        let eligible = pool("CSE", 7);
        let err = PanelBuilder::new(3)
            .build(&eligible, &dept_scope("CSE", Some(3)))
            .unwrap_err();

        assert_eq!(err.kind, AllocationErrorKind::PanelCountExceedsCapacity);
    }

    #[test]
    fn test_panel_size_too_small() {
        let eligible = pool("CSE", 5);
        let err = PanelBuilder::new(1)
            .build(&eligible, &dept_scope("CSE", None))
            .unwrap_err();

        assert_eq!(err.kind, AllocationErrorKind::PanelSizeTooSmall);
    }

    #[test]
    fn test_empty_pool() {
        let err = PanelBuilder::new(3)
            .build(&[], &dept_scope("CSE", None))
            .unwrap_err();

        assert_eq!(err.kind, AllocationErrorKind::EmptyFacultyPool);
    }

    #[test]
    fn test_all_departments_fan_out() {
        let mut eligible = pool("CSE", 6);
        eligible.extend(pool("ECE", 4));
        eligible.extend(pool("MECH", 2)); // below panel size, skipped

        let outcome = PanelBuilder::new(3)
            .build(
                &eligible,
                &BuildScope::AllDepartments {
                    school: "SOC".into(),
                },
            )
            .unwrap();

        // CSE: 2 panels, ECE: 1 panel, MECH: skipped
        assert_eq!(outcome.panels.len(), 3);
        assert_eq!(
            outcome.skipped,
            vec![DepartmentSkip {
                department: "MECH".into(),
                available: 2,
                required: 3,
            }]
        );
        // ECE remainder + both MECH faculty are left over
        assert_eq!(outcome.leftover_faculty.len(), 3);
    }

    #[test]
    fn test_all_departments_no_capacity() {
        let eligible = pool("CSE", 2);
        let err = PanelBuilder::new(3)
            .build(
                &eligible,
                &BuildScope::AllDepartments {
                    school: "SOC".into(),
                },
            )
            .unwrap_err();

        assert_eq!(err.kind, AllocationErrorKind::NoPanelCapacity);
    }

    #[test]
    fn test_multi_department_faculty_bucketed_once() {
        // Five CSE + one listed under both ECE (first) and CSE.
        let mut eligible = pool("CSE", 5);
        eligible.push(
            Faculty::new("X-F01")
                .with_school("SOC")
                .with_departments(["ECE", "CSE"]),
        );
        eligible.extend(pool("ECE", 2));

        let outcome = PanelBuilder::new(3)
            .build(
                &eligible,
                &BuildScope::AllDepartments {
                    school: "SOC".into(),
                },
            )
            .unwrap();

        // X-F01 counts only toward ECE, completing its panel of three;
        // CSE builds one panel from its own five.
        assert_eq!(outcome.panels.len(), 2);
        let seated: Vec<_> = outcome
            .panels
            .iter()
            .flat_map(|p| p.faculty_ids())
            .collect();
        assert_eq!(
            seated.iter().filter(|id| **id == "X-F01").count(),
            1,
            "multi-department faculty must be seated at most once"
        );
    }

    #[test]
    fn test_school_filter_applied() {
        let mut eligible = pool("CSE", 3);
        eligible.push(
            Faculty::new("OTHER-F01")
                .with_school("SOE")
                .with_department("CSE"),
        );

        let outcome = PanelBuilder::new(3)
            .build(&eligible, &dept_scope("CSE", None))
            .unwrap();

        assert_eq!(outcome.panels.len(), 1);
        assert!(!outcome.panels[0].has_member("OTHER-F01"));
    }

    #[test]
    fn test_deterministic_ids() {
        let eligible = pool("CSE", 6);
        let outcome = PanelBuilder::new(3)
            .with_id_prefix("p")
            .build(&eligible, &dept_scope("CSE", None))
            .unwrap();

        assert_eq!(outcome.panels[0].panel_id, "p-CSE-1");
        assert_eq!(outcome.panels[1].panel_id, "p-CSE-2");

        // Rebuilding over the same pool reproduces the same drafts
        let again = PanelBuilder::new(3)
            .with_id_prefix("p")
            .build(&eligible, &dept_scope("CSE", None))
            .unwrap();
        assert_eq!(
            outcome.panels[0].faculty_ids(),
            again.panels[0].faculty_ids()
        );
    }

    #[test]
    fn test_memberships_pairwise_disjoint() {
        let mut eligible = pool("CSE", 8);
        eligible.extend(pool("ECE", 5));

        let outcome = PanelBuilder::new(2)
            .build(
                &eligible,
                &BuildScope::AllDepartments {
                    school: "SOC".into(),
                },
            )
            .unwrap();

        let mut seen = std::collections::HashSet::new();
        for panel in &outcome.panels {
            for id in panel.faculty_ids() {
                assert!(seen.insert(id.to_string()), "faculty {id} seated twice");
            }
        }
    }
}
