use std::sync::Arc;

use tracing::warn;

use super::conformance::{
    malformed_parts, ConformanceConfig, ConformanceEngine, ConformanceReport,
};
use super::directory::{
    DirectoryError, GroupDirectory, PositionDirectory, RuleStore, RuleStoreError,
};
use super::domain::{DepartmentId, EmployeeId, EmployeePlan, ManagerId, RuleScope, VacationRule};

/// Service composing the rule store, the directory lookups, and the
/// conformance engine. The engine itself stays pure; all I/O happens here,
/// before any checking runs.
pub struct ScheduleConformanceService<R, G, P> {
    rules: Arc<R>,
    groups: Arc<G>,
    positions: Arc<P>,
    engine: ConformanceEngine,
}

impl<R, G, P> ScheduleConformanceService<R, G, P>
where
    R: RuleStore + 'static,
    G: GroupDirectory + 'static,
    P: PositionDirectory + 'static,
{
    pub fn new(rules: Arc<R>, groups: Arc<G>, positions: Arc<P>, config: ConformanceConfig) -> Self {
        Self {
            rules,
            groups,
            positions,
            engine: ConformanceEngine::new(config),
        }
    }

    /// Check a batch of proposed plans against every rule scoped to the
    /// manager and department.
    ///
    /// Rule loading failures abort the whole check, since an incomplete
    /// answer would read as a false all-clear. A single rule whose targets
    /// cannot be resolved is skipped so it does not block reporting on the
    /// others.
    pub fn check_schedule(
        &self,
        plans: &[EmployeePlan],
        manager: &ManagerId,
        department: &DepartmentId,
    ) -> Result<ConformanceReport, ConformanceCheckError> {
        let rules = self.rules.rules_for(manager, department)?;
        let malformed = malformed_parts(plans);
        if !malformed.is_empty() {
            warn!(
                count = malformed.len(),
                "submitted plans contain malformed vacation parts"
            );
        }

        if rules.is_empty() {
            return Ok(ConformanceReport {
                warnings: Vec::new(),
                malformed,
            });
        }

        let mut warnings = Vec::new();
        for rule in &rules {
            let targets = match self.resolve_targets(rule) {
                Ok(targets) if targets.is_empty() => {
                    warn!(rule = %rule.id.0, "rule currently has no targets, skipping");
                    continue;
                }
                Ok(targets) => targets,
                Err(error) => {
                    warn!(rule = %rule.id.0, %error, "could not resolve rule targets, skipping");
                    continue;
                }
            };

            // Only employees in the submitted batch are examined; targets
            // without a proposed plan are out of scope for this run.
            let target_plans: Vec<EmployeePlan> = plans
                .iter()
                .filter(|plan| targets.contains(&plan.employee_id))
                .cloned()
                .collect();

            if let Some(warning) = self.engine.evaluate(rule, targets.len(), &target_plans) {
                warnings.push(warning);
            }
        }

        Ok(ConformanceReport {
            warnings,
            malformed,
        })
    }

    fn resolve_targets(&self, rule: &VacationRule) -> Result<Vec<EmployeeId>, DirectoryError> {
        match &rule.scope {
            RuleScope::Employees(ids) => Ok(ids.clone()),
            RuleScope::Group(group) => self.groups.members(group),
            RuleScope::Position { position, .. } => {
                self.positions.holders(position, &rule.department)
            }
        }
    }
}

/// Error raised by the conformance service.
#[derive(Debug, thiserror::Error)]
pub enum ConformanceCheckError {
    #[error("could not load scheduling rules: {0}")]
    Rules(#[from] RuleStoreError),
}
