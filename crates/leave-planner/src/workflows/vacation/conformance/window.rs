use super::super::domain::{DateSpan, EmployeePlan, VacationPart};
use super::config::WindowPolicy;

/// Restrict a plan to the parts relevant inside `window`, returning a fresh
/// plan. The submitted roster entry is never mutated, so the original parts
/// stay available to other rules evaluated in the same batch.
///
/// Malformed parts (`end < start`) never survive filtering; they are
/// reported through the data-quality channel instead.
pub(crate) fn plan_within_window(
    plan: &EmployeePlan,
    window: &DateSpan,
    policy: WindowPolicy,
) -> EmployeePlan {
    let parts = plan
        .parts
        .iter()
        .filter(|part| part.span.is_well_formed())
        .filter_map(|part| match policy {
            WindowPolicy::Truncate => part.span.clip_to(window).map(|span| VacationPart {
                span,
                ordinal: part.ordinal,
            }),
            WindowPolicy::ExcludeStraddling => {
                window.contains_span(&part.span).then(|| part.clone())
            }
        })
        .collect();

    EmployeePlan {
        employee_id: plan.employee_id.clone(),
        parts,
    }
}
