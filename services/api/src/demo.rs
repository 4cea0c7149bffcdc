use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use crate::infra::{InMemoryGroupDirectory, InMemoryPositionDirectory, InMemoryRuleStore};
use leave_planner::error::AppError;
use leave_planner::workflows::roster::RosterImporter;
use leave_planner::workflows::vacation::{
    ConformanceConfig, ConformanceReport, DateSpan, DepartmentId, EmployeeId, EmployeePlan,
    GroupId, ManagerId, PositionId, RuleId, RuleKind, RuleScope, ScheduleConformanceService,
    VacationPart, VacationRule,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Anchor date for the demo window (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) anchor: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Path to the roster CSV export (Employee,Priority,Part,Start,End)
    #[arg(long)]
    pub(crate) roster: PathBuf,
    /// Anchor date for the seeded rule windows (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) anchor: Option<NaiveDate>,
}

pub(crate) fn demo_manager() -> ManagerId {
    ManagerId("mgr-demo".to_string())
}

pub(crate) fn demo_department() -> DepartmentId {
    DepartmentId("dept-demo".to_string())
}

fn employee(id: &str) -> EmployeeId {
    EmployeeId(id.to_string())
}

fn part(start: NaiveDate, days: i64, ordinal: u8) -> VacationPart {
    VacationPart {
        span: DateSpan::new(start, start + Duration::days(days - 1)),
        ordinal,
    }
}

fn plan(id: &str, parts: Vec<VacationPart>) -> EmployeePlan {
    EmployeePlan {
        employee_id: employee(id),
        parts,
    }
}

/// Seed a small department: a handover pair that must coincide, a dispatch
/// group that must not overlap, and a front desk that keeps one person in.
pub(crate) fn seed_demo_directory(
    window: DateSpan,
) -> (
    InMemoryRuleStore,
    InMemoryGroupDirectory,
    InMemoryPositionDirectory,
) {
    let rules = InMemoryRuleStore::default();
    rules.push(VacationRule {
        id: RuleId("rule-handover".to_string()),
        kind: RuleKind::MustCoincide,
        window,
        description: "the warehouse handover pair takes leave together".to_string(),
        scope: RuleScope::Employees(vec![employee("emp-ana"), employee("emp-boris")]),
        manager: demo_manager(),
        department: demo_department(),
    });
    rules.push(VacationRule {
        id: RuleId("rule-dispatch".to_string()),
        kind: RuleKind::MustNotOverlap,
        window,
        description: "dispatch must never be empty-handed".to_string(),
        scope: RuleScope::Group(GroupId("grp-dispatch".to_string())),
        manager: demo_manager(),
        department: demo_department(),
    });
    rules.push(VacationRule {
        id: RuleId("rule-frontdesk".to_string()),
        kind: RuleKind::MustNotOverlap,
        window,
        description: "one front desk agent stays in the office".to_string(),
        scope: RuleScope::Position {
            position: PositionId("pos-frontdesk".to_string()),
            min_present: 1,
        },
        manager: demo_manager(),
        department: demo_department(),
    });

    let groups = InMemoryGroupDirectory::default();
    groups.insert(
        GroupId("grp-dispatch".to_string()),
        vec![employee("emp-clara"), employee("emp-dinah")],
    );

    let positions = InMemoryPositionDirectory::default();
    positions.insert(
        PositionId("pos-frontdesk".to_string()),
        demo_department(),
        vec![employee("emp-elena"), employee("emp-felix")],
    );

    (rules, groups, positions)
}

fn demo_plans(anchor: NaiveDate) -> Vec<EmployeePlan> {
    vec![
        // handover pair books the same two weeks: conforming
        plan("emp-ana", vec![part(anchor + Duration::days(30), 14, 0)]),
        plan("emp-boris", vec![part(anchor + Duration::days(30), 14, 0)]),
        // dispatch group overlaps by three days: violates rule-dispatch
        plan("emp-clara", vec![part(anchor + Duration::days(50), 10, 0)]),
        plan("emp-dinah", vec![part(anchor + Duration::days(57), 10, 0)]),
        // both front desk agents away on the same day: violates rule-frontdesk
        plan("emp-elena", vec![part(anchor + Duration::days(80), 5, 0)]),
        plan("emp-felix", vec![part(anchor + Duration::days(84), 5, 0)]),
    ]
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let anchor = args.anchor.unwrap_or_else(|| Local::now().date_naive());
    let window = DateSpan::new(anchor, anchor + Duration::days(120));
    let (rules, groups, positions) = seed_demo_directory(window);

    let service = ScheduleConformanceService::new(
        Arc::new(rules),
        Arc::new(groups),
        Arc::new(positions),
        ConformanceConfig::default(),
    );

    println!("Vacation conformance demo");
    println!(
        "Department {} / manager {}, rule window {} .. {}",
        demo_department().0,
        demo_manager().0,
        window.start,
        window.end
    );

    let report = service.check_schedule(&demo_plans(anchor), &demo_manager(), &demo_department())?;
    render_report(&report);
    Ok(())
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let anchor = args.anchor.unwrap_or_else(|| Local::now().date_naive());
    let window = DateSpan::new(anchor, anchor + Duration::days(120));
    let (rules, groups, positions) = seed_demo_directory(window);

    let plans = RosterImporter::from_path(&args.roster)?;
    println!(
        "Imported {} plan(s) from {}",
        plans.len(),
        args.roster.display()
    );

    let service = ScheduleConformanceService::new(
        Arc::new(rules),
        Arc::new(groups),
        Arc::new(positions),
        ConformanceConfig::default(),
    );

    let report = service.check_schedule(&plans, &demo_manager(), &demo_department())?;
    render_report(&report);
    Ok(())
}

fn render_report(report: &ConformanceReport) {
    if report.warnings.is_empty() {
        println!("\nNo conflicts: every rule is satisfied.");
    } else {
        println!("\nConflicts found: {}", report.warnings.len());
        for warning in &report.warnings {
            let employees = warning
                .employee_ids
                .iter()
                .map(|id| id.0.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            println!(
                "  [{}] {}: {}",
                warning.kind.label(),
                warning.rule_id.0,
                warning.description
            );
            println!("      rule: {}", warning.rule_description);
            println!("      employees: {}", employees);
        }
    }

    if !report.malformed.is_empty() {
        println!("\nData quality notes:");
        for note in &report.malformed {
            println!(
                "  {} has a part ending before it starts ({} .. {})",
                note.employee_id.0, note.span.start, note.span.end
            );
        }
    }
}
