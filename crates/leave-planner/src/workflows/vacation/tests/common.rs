use std::collections::HashMap;
use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::vacation::conformance::{ConformanceConfig, ConformanceEngine};
use crate::workflows::vacation::directory::{
    DirectoryError, GroupDirectory, PositionDirectory, RuleStore, RuleStoreError,
};
use crate::workflows::vacation::domain::{
    DateSpan, DepartmentId, EmployeeId, EmployeePlan, GroupId, ManagerId, PositionId, RuleId,
    RuleKind, RuleScope, VacationPart, VacationRule,
};
use crate::workflows::vacation::service::ScheduleConformanceService;

pub(super) fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid date literal")
}

pub(super) fn span(start: &str, end: &str) -> DateSpan {
    DateSpan::new(date(start), date(end))
}

pub(super) fn plan(id: &str, spans: &[(&str, &str)]) -> EmployeePlan {
    EmployeePlan {
        employee_id: EmployeeId(id.to_string()),
        parts: spans
            .iter()
            .enumerate()
            .map(|(index, (start, end))| VacationPart {
                span: span(start, end),
                ordinal: index as u8,
            })
            .collect(),
    }
}

pub(super) fn absent(id: &str) -> EmployeePlan {
    plan(id, &[])
}

pub(super) fn whole_year() -> DateSpan {
    span("2024-01-01", "2024-12-31")
}

pub(super) fn manager() -> ManagerId {
    ManagerId("mgr-1".to_string())
}

pub(super) fn department() -> DepartmentId {
    DepartmentId("dept-ops".to_string())
}

pub(super) fn employee_ids(ids: &[&str]) -> Vec<EmployeeId> {
    ids.iter().map(|id| EmployeeId(id.to_string())).collect()
}

pub(super) fn employee_rule(
    id: &str,
    kind: RuleKind,
    window: DateSpan,
    employees: &[&str],
) -> VacationRule {
    VacationRule {
        id: RuleId(id.to_string()),
        kind,
        window,
        description: format!("{id} description"),
        scope: RuleScope::Employees(employee_ids(employees)),
        manager: manager(),
        department: department(),
    }
}

pub(super) fn group_rule(id: &str, kind: RuleKind, window: DateSpan, group: &str) -> VacationRule {
    VacationRule {
        id: RuleId(id.to_string()),
        kind,
        window,
        description: format!("{id} description"),
        scope: RuleScope::Group(GroupId(group.to_string())),
        manager: manager(),
        department: department(),
    }
}

pub(super) fn position_rule(
    id: &str,
    window: DateSpan,
    position: &str,
    min_present: u32,
) -> VacationRule {
    VacationRule {
        id: RuleId(id.to_string()),
        kind: RuleKind::MustNotOverlap,
        window,
        description: format!("{id} description"),
        scope: RuleScope::Position {
            position: PositionId(position.to_string()),
            min_present,
        },
        manager: manager(),
        department: department(),
    }
}

pub(super) fn engine() -> ConformanceEngine {
    ConformanceEngine::new(ConformanceConfig::default())
}

#[derive(Default, Clone)]
pub(super) struct MemoryRuleStore {
    rules: Vec<VacationRule>,
}

impl MemoryRuleStore {
    pub(super) fn with_rules(rules: Vec<VacationRule>) -> Self {
        Self { rules }
    }
}

impl RuleStore for MemoryRuleStore {
    fn rules_for(
        &self,
        manager: &ManagerId,
        department: &DepartmentId,
    ) -> Result<Vec<VacationRule>, RuleStoreError> {
        Ok(self
            .rules
            .iter()
            .filter(|rule| rule.manager == *manager && rule.department == *department)
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableRuleStore;

impl RuleStore for UnavailableRuleStore {
    fn rules_for(
        &self,
        _manager: &ManagerId,
        _department: &DepartmentId,
    ) -> Result<Vec<VacationRule>, RuleStoreError> {
        Err(RuleStoreError::Unavailable("rule database offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryGroups {
    members: HashMap<GroupId, Vec<EmployeeId>>,
}

impl MemoryGroups {
    pub(super) fn with_group(group: &str, members: &[&str]) -> Self {
        let mut map = HashMap::new();
        map.insert(GroupId(group.to_string()), employee_ids(members));
        Self { members: map }
    }
}

impl GroupDirectory for MemoryGroups {
    fn members(&self, group: &GroupId) -> Result<Vec<EmployeeId>, DirectoryError> {
        self.members
            .get(group)
            .cloned()
            .ok_or_else(|| DirectoryError::UnknownGroup(group.0.clone()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryPositions {
    rosters: HashMap<(PositionId, DepartmentId), Vec<EmployeeId>>,
}

impl MemoryPositions {
    pub(super) fn with_roster(position: &str, department: &DepartmentId, holders: &[&str]) -> Self {
        let mut map = HashMap::new();
        map.insert(
            (PositionId(position.to_string()), department.clone()),
            employee_ids(holders),
        );
        Self { rosters: map }
    }
}

impl PositionDirectory for MemoryPositions {
    fn holders(
        &self,
        position: &PositionId,
        department: &DepartmentId,
    ) -> Result<Vec<EmployeeId>, DirectoryError> {
        self.rosters
            .get(&(position.clone(), department.clone()))
            .cloned()
            .ok_or_else(|| DirectoryError::UnknownPosition(position.0.clone()))
    }
}

pub(super) type TestService =
    ScheduleConformanceService<MemoryRuleStore, MemoryGroups, MemoryPositions>;

pub(super) fn build_service(
    rules: Vec<VacationRule>,
    groups: MemoryGroups,
    positions: MemoryPositions,
) -> TestService {
    ScheduleConformanceService::new(
        Arc::new(MemoryRuleStore::with_rules(rules)),
        Arc::new(groups),
        Arc::new(positions),
        ConformanceConfig::default(),
    )
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
