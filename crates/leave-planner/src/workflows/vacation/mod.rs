//! Vacation plan model, manager-defined scheduling rules, and the
//! conformance engine that checks proposed schedules against them.
//!
//! The engine is a pure computation over in-memory snapshots: rule loading
//! and group/position resolution happen at the service boundary through the
//! ports in [`directory`], so tests drive everything with in-memory fakes.

pub mod conformance;
pub mod directory;
pub mod domain;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use conformance::{
    malformed_parts, ConformanceConfig, ConformanceEngine, ConformanceReport, MalformedPart,
    RuleWarning, WarningKind, WindowPolicy,
};
pub use directory::{
    DirectoryError, GroupDirectory, PositionDirectory, RuleStore, RuleStoreError,
};
pub use domain::{
    DateSpan, DepartmentId, EmployeeId, EmployeePlan, GroupId, ManagerId, PositionId, RuleId,
    RuleKind, RuleScope, VacationPart, VacationRule,
};
pub use router::conformance_router;
pub use service::{ConformanceCheckError, ScheduleConformanceService};
