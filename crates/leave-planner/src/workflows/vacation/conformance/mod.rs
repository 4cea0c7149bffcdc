mod config;

pub(crate) mod coincide;
pub(crate) mod disjoint;
pub(crate) mod staffing;
pub(crate) mod window;

pub use config::{ConformanceConfig, WindowPolicy};

use serde::{Deserialize, Serialize};

use super::domain::{DateSpan, EmployeeId, EmployeePlan, RuleId, RuleKind, RuleScope, VacationRule};

/// Constraint family a warning reports against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    MustCoincide,
    MustNotOverlap,
    MinimumStaffing,
}

impl WarningKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::MustCoincide => "must_coincide",
            Self::MustNotOverlap => "must_not_overlap",
            Self::MinimumStaffing => "minimum_staffing",
        }
    }

    /// Fixed sentence rendered to managers for each violated constraint.
    pub const fn violation_text(self) -> &'static str {
        match self {
            Self::MustCoincide => {
                "the listed employees must take their vacations over the same period"
            }
            Self::MustNotOverlap => "vacations of the listed employees must not overlap",
            Self::MinimumStaffing => {
                "too few holders of the position would remain at work during the rule window"
            }
        }
    }
}

/// One violated rule, ready for the approval UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleWarning {
    pub rule_id: RuleId,
    #[serde(rename = "rule_kind")]
    pub kind: WarningKind,
    pub description: String,
    pub rule_description: String,
    pub employee_ids: Vec<EmployeeId>,
}

/// A submitted part with `end < start`. Reported once per check as a
/// data-quality note, distinct from rule warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MalformedPart {
    pub employee_id: EmployeeId,
    pub span: DateSpan,
}

/// Everything a single conformance run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub warnings: Vec<RuleWarning>,
    pub malformed: Vec<MalformedPart>,
}

/// Outcome of one rule check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CheckOutcome {
    Conforming,
    Violated { offenders: Vec<EmployeeId> },
}

/// Stateless evaluator applying one rule to its resolved target set.
/// Evaluating the same (rule, plans) pair twice yields the same warning;
/// there is no hidden state and no randomness.
pub struct ConformanceEngine {
    config: ConformanceConfig,
}

impl ConformanceEngine {
    pub fn new(config: ConformanceConfig) -> Self {
        Self { config }
    }

    /// Evaluate one rule against the plans of its targets that are part of
    /// the submitted batch. `roster_size` is the full resolved target
    /// count, including employees without a submitted plan; only the
    /// staffing check distinguishes the two.
    pub fn evaluate(
        &self,
        rule: &VacationRule,
        roster_size: usize,
        plans: &[EmployeePlan],
    ) -> Option<RuleWarning> {
        let filtered: Vec<EmployeePlan> = plans
            .iter()
            .map(|plan| window::plan_within_window(plan, &rule.window, self.config.window_policy))
            .collect();

        let (kind, outcome) = match &rule.scope {
            RuleScope::Position { min_present, .. } => (
                WarningKind::MinimumStaffing,
                staffing::check_min_staffing(&filtered, roster_size, *min_present, &rule.window),
            ),
            RuleScope::Employees(_) | RuleScope::Group(_) => match rule.kind {
                RuleKind::MustCoincide => {
                    (WarningKind::MustCoincide, coincide::check_coincide(&filtered))
                }
                RuleKind::MustNotOverlap => (
                    WarningKind::MustNotOverlap,
                    disjoint::check_disjoint(&filtered),
                ),
            },
        };

        match outcome {
            CheckOutcome::Conforming => None,
            CheckOutcome::Violated { offenders } => Some(RuleWarning {
                rule_id: rule.id.clone(),
                kind,
                description: kind.violation_text().to_string(),
                rule_description: rule.description.clone(),
                employee_ids: offenders,
            }),
        }
    }
}

/// Collect data-quality notes for malformed parts in a submitted batch.
pub fn malformed_parts(plans: &[EmployeePlan]) -> Vec<MalformedPart> {
    plans
        .iter()
        .flat_map(|plan| {
            plan.parts
                .iter()
                .filter(|part| !part.span.is_well_formed())
                .map(|part| MalformedPart {
                    employee_id: plan.employee_id.clone(),
                    span: part.span,
                })
        })
        .collect()
}
