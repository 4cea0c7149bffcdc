use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for employees known to the HR directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub String);

/// Identifier wrapper for manager-defined scheduling rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleId(pub String);

/// Identifier wrapper for employee groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub String);

/// Identifier wrapper for positions (job roles) within a department.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionId(pub String);

/// Identifier wrapper for departments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepartmentId(pub String);

/// Identifier wrapper for managers owning scheduling rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManagerId(pub String);

/// Closed date interval, inclusive on both ends.
///
/// Upstream data may hand us spans with `end < start`; the relation methods
/// compare the dates as given and never panic, while [`DateSpan::day_count`]
/// treats such spans as covering zero days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }

    /// Inclusive day count; zero for malformed spans.
    pub fn day_count(&self) -> i64 {
        if !self.is_well_formed() {
            return 0;
        }
        (self.end - self.start).num_days() + 1
    }

    /// True when `other` lies entirely inside this span.
    pub fn contains_span(&self, other: &DateSpan) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Containment in either direction.
    pub fn either_contains(&self, other: &DateSpan) -> bool {
        self.contains_span(other) || other.contains_span(self)
    }

    /// True when the two closed spans share at least one day. Boundary
    /// dates count: a span ending on the day another starts overlaps it.
    pub fn overlaps(&self, other: &DateSpan) -> bool {
        (self.start <= other.start && other.start <= self.end)
            || (other.start <= self.start && self.start <= other.end)
    }

    /// Intersection with `window`, or `None` when the spans share no day.
    pub fn clip_to(&self, window: &DateSpan) -> Option<DateSpan> {
        let start = self.start.max(window.start);
        let end = self.end.min(window.end);
        (start <= end).then_some(DateSpan { start, end })
    }
}

/// One piece of a wished vacation period. A period taken non-contiguously
/// is split into several parts sharing the same plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationPart {
    pub span: DateSpan,
    /// Position among the sibling parts of the same wished period.
    pub ordinal: u8,
}

/// An employee's single highest-priority proposed vacation. Lower-priority
/// alternatives are dropped before the plan reaches the conformance engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePlan {
    pub employee_id: EmployeeId,
    pub parts: Vec<VacationPart>,
}

impl EmployeePlan {
    /// Total vacation days across all parts; malformed parts count as zero.
    pub fn total_days(&self) -> i64 {
        self.parts.iter().map(|part| part.span.day_count()).sum()
    }

    /// An employee with no parts left takes no vacation in the examined
    /// window and is "absent" for the rule under evaluation.
    pub fn is_absent(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Relation a rule imposes on its target employees' vacations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    MustCoincide,
    MustNotOverlap,
}

impl RuleKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::MustCoincide => "must_coincide",
            Self::MustNotOverlap => "must_not_overlap",
        }
    }
}

/// How a rule resolves the set of employees it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleScope {
    /// Explicit employee list attached to the rule.
    Employees(Vec<EmployeeId>),
    /// Current membership of a group, resolved through the directory.
    Group(GroupId),
    /// Holders of a position within the rule's department; at least
    /// `min_present` of them must stay at work during the rule window.
    Position { position: PositionId, min_present: u32 },
}

/// A manager-defined scheduling constraint, active inside its window.
/// The conformance engine reads rules and never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRule {
    pub id: RuleId,
    pub kind: RuleKind,
    pub window: DateSpan,
    pub description: String,
    pub scope: RuleScope,
    pub manager: ManagerId,
    pub department: DepartmentId,
}
