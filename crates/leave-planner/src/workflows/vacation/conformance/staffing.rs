use std::collections::BTreeSet;

use super::super::domain::{DateSpan, EmployeePlan};
use super::CheckOutcome;

/// Check that at least `min_present` holders of a position stay at work on
/// every day of `window`.
///
/// `roster_size` is the full number of position holders; holders without a
/// submitted plan count as present. The sweep visits each day of the
/// window and stops at the first understaffed one, naming the employees on
/// vacation that day.
pub(crate) fn check_min_staffing(
    plans: &[EmployeePlan],
    roster_size: usize,
    min_present: u32,
    window: &DateSpan,
) -> CheckOutcome {
    if !window.is_well_formed() {
        return CheckOutcome::Conforming;
    }

    for day in window.start.iter_days().take_while(|day| *day <= window.end) {
        let away: Vec<&EmployeePlan> = plans
            .iter()
            .filter(|plan| {
                plan.parts
                    .iter()
                    .any(|part| part.span.start <= day && day <= part.span.end)
            })
            .collect();

        let present = roster_size.saturating_sub(away.len()) as u32;
        if present < min_present {
            let offenders: BTreeSet<_> =
                away.iter().map(|plan| plan.employee_id.clone()).collect();
            return CheckOutcome::Violated {
                offenders: offenders.into_iter().collect(),
            };
        }
    }

    CheckOutcome::Conforming
}
