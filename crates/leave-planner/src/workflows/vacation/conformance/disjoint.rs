use super::super::domain::EmployeePlan;
use super::CheckOutcome;

/// Decide whether no two employees' vacation parts share a day.
///
/// All pairs of employees and all pairs of their parts are examined; the
/// scan stops at the first collision and names that pair. The quadratic
/// cost is acceptable because rule target sets are bounded by a department
/// roster and plans split into a handful of parts at most.
pub(crate) fn check_disjoint(plans: &[EmployeePlan]) -> CheckOutcome {
    let with_plans: Vec<&EmployeePlan> = plans.iter().filter(|plan| !plan.is_absent()).collect();

    // With at most one employee actually away there is nothing to collide.
    if with_plans.len() <= 1 {
        return CheckOutcome::Conforming;
    }

    for (index, left) in with_plans.iter().enumerate() {
        for right in &with_plans[index + 1..] {
            for part in &left.parts {
                for other in &right.parts {
                    if part.span.either_contains(&other.span) || part.span.overlaps(&other.span) {
                        let mut offenders =
                            vec![left.employee_id.clone(), right.employee_id.clone()];
                        offenders.sort();
                        return CheckOutcome::Violated { offenders };
                    }
                }
            }
        }
    }

    CheckOutcome::Conforming
}
