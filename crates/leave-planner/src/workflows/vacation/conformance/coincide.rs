use std::collections::BTreeSet;

use super::super::domain::EmployeePlan;
use super::CheckOutcome;

/// Decide whether every listed employee takes vacation over the same span.
///
/// Plans are expected to be window-filtered already; an empty plan means
/// the employee is absent for the rule under evaluation.
pub(crate) fn check_coincide(plans: &[EmployeePlan]) -> CheckOutcome {
    let total = plans.len();
    let absent: Vec<&EmployeePlan> = plans.iter().filter(|plan| plan.is_absent()).collect();

    // Nobody has an in-window plan: nobody was required to go.
    if absent.len() == total {
        return CheckOutcome::Conforming;
    }

    // Some of the must-go employees did not go.
    if !absent.is_empty() {
        let offenders: BTreeSet<_> = absent
            .iter()
            .map(|plan| plan.employee_id.clone())
            .collect();
        return CheckOutcome::Violated {
            offenders: offenders.into_iter().collect(),
        };
    }

    let mut ordered: Vec<&EmployeePlan> = plans.iter().collect();
    ordered.sort_by(|a, b| {
        a.total_days()
            .cmp(&b.total_days())
            .then_with(|| a.employee_id.cmp(&b.employee_id))
    });

    // "Contained in the next larger" does not imply "contained in all
    // larger" once employees split their vacations differently, so every
    // smaller/larger pairing is checked.
    let mut offenders = BTreeSet::new();
    for (index, smaller) in ordered.iter().enumerate() {
        for larger in &ordered[index + 1..] {
            let covered = smaller.parts.iter().all(|part| {
                larger
                    .parts
                    .iter()
                    .any(|other| other.span.contains_span(&part.span))
            });
            if !covered {
                offenders.insert(smaller.employee_id.clone());
                offenders.insert(larger.employee_id.clone());
            }
        }
    }

    if offenders.is_empty() {
        CheckOutcome::Conforming
    } else {
        CheckOutcome::Violated {
            offenders: offenders.into_iter().collect(),
        }
    }
}
