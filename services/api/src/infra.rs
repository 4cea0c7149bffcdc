use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use leave_planner::workflows::vacation::{
    DepartmentId, DirectoryError, EmployeeId, GroupDirectory, GroupId, ManagerId,
    PositionDirectory, PositionId, RuleStore, RuleStoreError, VacationRule,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory rule store backing the service and the rule glue endpoints.
/// Rules staged here live as long as the process; durable storage belongs
/// to the surrounding system.
#[derive(Default, Clone)]
pub(crate) struct InMemoryRuleStore {
    rules: Arc<Mutex<Vec<VacationRule>>>,
}

impl InMemoryRuleStore {
    pub(crate) fn push(&self, rule: VacationRule) {
        let mut guard = self.rules.lock().expect("rule store mutex poisoned");
        guard.push(rule);
    }

    pub(crate) fn all(&self) -> Vec<VacationRule> {
        self.rules.lock().expect("rule store mutex poisoned").clone()
    }
}

impl RuleStore for InMemoryRuleStore {
    fn rules_for(
        &self,
        manager: &ManagerId,
        department: &DepartmentId,
    ) -> Result<Vec<VacationRule>, RuleStoreError> {
        let guard = self.rules.lock().expect("rule store mutex poisoned");
        Ok(guard
            .iter()
            .filter(|rule| rule.manager == *manager && rule.department == *department)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryGroupDirectory {
    groups: Arc<Mutex<HashMap<GroupId, Vec<EmployeeId>>>>,
}

impl InMemoryGroupDirectory {
    pub(crate) fn insert(&self, group: GroupId, members: Vec<EmployeeId>) {
        let mut guard = self.groups.lock().expect("group directory mutex poisoned");
        guard.insert(group, members);
    }
}

impl GroupDirectory for InMemoryGroupDirectory {
    fn members(&self, group: &GroupId) -> Result<Vec<EmployeeId>, DirectoryError> {
        let guard = self.groups.lock().expect("group directory mutex poisoned");
        guard
            .get(group)
            .cloned()
            .ok_or_else(|| DirectoryError::UnknownGroup(group.0.clone()))
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryPositionDirectory {
    rosters: Arc<Mutex<HashMap<(PositionId, DepartmentId), Vec<EmployeeId>>>>,
}

impl InMemoryPositionDirectory {
    pub(crate) fn insert(
        &self,
        position: PositionId,
        department: DepartmentId,
        holders: Vec<EmployeeId>,
    ) {
        let mut guard = self
            .rosters
            .lock()
            .expect("position directory mutex poisoned");
        guard.insert((position, department), holders);
    }
}

impl PositionDirectory for InMemoryPositionDirectory {
    fn holders(
        &self,
        position: &PositionId,
        department: &DepartmentId,
    ) -> Result<Vec<EmployeeId>, DirectoryError> {
        let guard = self
            .rosters
            .lock()
            .expect("position directory mutex poisoned");
        guard
            .get(&(position.clone(), department.clone()))
            .cloned()
            .ok_or_else(|| DirectoryError::UnknownPosition(position.0.clone()))
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}
