use super::common::*;
use crate::workflows::vacation::conformance::staffing::check_min_staffing;
use crate::workflows::vacation::conformance::CheckOutcome;

#[test]
fn overlapping_holders_drop_below_minimum() {
    // Roster of 3, at least 2 must stay: two away on the same day is one
    // person too many.
    let window = span("2024-07-01", "2024-07-31");
    let plans = vec![
        plan("e-1", &[("2024-07-01", "2024-07-10")]),
        plan("e-2", &[("2024-07-08", "2024-07-15")]),
    ];

    match check_min_staffing(&plans, 3, 2, &window) {
        CheckOutcome::Violated { offenders } => {
            assert_eq!(offenders, employee_ids(&["e-1", "e-2"]));
        }
        other => panic!("expected violation, got {other:?}"),
    }
}

#[test]
fn disjoint_holder_vacations_keep_staffing() {
    let window = span("2024-07-01", "2024-07-31");
    let plans = vec![
        plan("e-1", &[("2024-07-01", "2024-07-10")]),
        plan("e-2", &[("2024-07-11", "2024-07-20")]),
    ];

    assert_eq!(
        check_min_staffing(&plans, 3, 2, &window),
        CheckOutcome::Conforming
    );
}

#[test]
fn holders_without_submitted_plans_count_as_present() {
    // Roster of 4, only one plan submitted: 3 remain at work every day.
    let window = span("2024-07-01", "2024-07-31");
    let plans = vec![plan("e-1", &[("2024-07-01", "2024-07-31")])];

    assert_eq!(
        check_min_staffing(&plans, 4, 3, &window),
        CheckOutcome::Conforming
    );
}

#[test]
fn minimum_equal_to_roster_forbids_any_absence() {
    let window = span("2024-07-01", "2024-07-31");
    let plans = vec![plan("e-1", &[("2024-07-15", "2024-07-15")])];

    match check_min_staffing(&plans, 2, 2, &window) {
        CheckOutcome::Violated { offenders } => {
            assert_eq!(offenders, employee_ids(&["e-1"]));
        }
        other => panic!("expected violation, got {other:?}"),
    }
}

#[test]
fn engine_applies_staffing_check_to_position_rules() {
    let rule = position_rule("rule-desk", span("2024-07-01", "2024-07-31"), "dispatcher", 2);
    let plans = vec![
        plan("e-1", &[("2024-07-01", "2024-07-10")]),
        plan("e-2", &[("2024-07-05", "2024-07-12")]),
    ];

    let warning = engine()
        .evaluate(&rule, 3, &plans)
        .expect("rule is violated");

    assert_eq!(warning.kind.label(), "minimum_staffing");
    assert_eq!(warning.employee_ids, employee_ids(&["e-1", "e-2"]));
}

#[test]
fn engine_filters_parts_outside_the_rule_window_first() {
    // The overlap happens in August, outside the July window: no warning.
    let rule = position_rule("rule-desk", span("2024-07-01", "2024-07-31"), "dispatcher", 2);
    let plans = vec![
        plan("e-1", &[("2024-08-01", "2024-08-10")]),
        plan("e-2", &[("2024-08-05", "2024-08-12")]),
    ];

    assert!(engine().evaluate(&rule, 3, &plans).is_none());
}
