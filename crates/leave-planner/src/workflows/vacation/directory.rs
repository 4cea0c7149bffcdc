use super::domain::{DepartmentId, EmployeeId, GroupId, ManagerId, PositionId, VacationRule};

/// Storage abstraction for manager-defined rules so the conformance
/// service can be exercised in isolation.
pub trait RuleStore: Send + Sync {
    fn rules_for(
        &self,
        manager: &ManagerId,
        department: &DepartmentId,
    ) -> Result<Vec<VacationRule>, RuleStoreError>;
}

/// Error enumeration for rule loading failures. Without rules no
/// conformance statement can be made, so callers abort the whole check.
#[derive(Debug, thiserror::Error)]
pub enum RuleStoreError {
    #[error("rule store unavailable: {0}")]
    Unavailable(String),
}

/// Group membership lookup (group id -> current employee ids).
pub trait GroupDirectory: Send + Sync {
    fn members(&self, group: &GroupId) -> Result<Vec<EmployeeId>, DirectoryError>;
}

/// Position roster lookup (position id + department -> current holders).
pub trait PositionDirectory: Send + Sync {
    fn holders(
        &self,
        position: &PositionId,
        department: &DepartmentId,
    ) -> Result<Vec<EmployeeId>, DirectoryError>;
}

/// Error enumeration for directory lookups. A rule whose targets cannot be
/// resolved is skipped, never fatal for the batch.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("group {0} is not known to the directory")]
    UnknownGroup(String),
    #[error("position {0} is not known to the directory")]
    UnknownPosition(String),
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}
