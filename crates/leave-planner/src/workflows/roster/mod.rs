//! Import of the HR directory's wished-vacation export.
//!
//! The export carries every alternative period an employee proposed; only
//! the top-priority one per employee survives the import, which is what
//! makes the conformance engine see a single plan per employee.

mod parser;

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::workflows::vacation::domain::{EmployeeId, EmployeePlan};

use parser::RosterRecord;

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidDate { value: String },
    MissingEmployee { line: u64 },
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster export: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
            RosterImportError::InvalidDate { value } => {
                write!(f, "could not parse '{}' as a YYYY-MM-DD date", value)
            }
            RosterImportError::MissingEmployee { line } => {
                write!(f, "roster row at line {} has no employee id", line)
            }
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
            RosterImportError::InvalidDate { .. } | RosterImportError::MissingEmployee { .. } => {
                None
            }
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<EmployeePlan>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<EmployeePlan>, RosterImportError> {
        let records = parser::parse_records(reader)?;
        Ok(collect_top_priority_plans(records))
    }
}

/// Keep each employee's highest-priority (lowest number) period, ordering
/// its parts by ordinal. Employees keep their first-seen order so repeated
/// imports of the same export stay comparable.
fn collect_top_priority_plans(records: Vec<RosterRecord>) -> Vec<EmployeePlan> {
    let mut order: Vec<EmployeeId> = Vec::new();
    let mut best: HashMap<EmployeeId, (u8, Vec<parser::RosterRecord>)> = HashMap::new();

    for record in records {
        match best.get_mut(&record.employee_id) {
            None => {
                order.push(record.employee_id.clone());
                best.insert(record.employee_id.clone(), (record.priority, vec![record]));
            }
            Some((priority, parts)) => {
                if record.priority < *priority {
                    *priority = record.priority;
                    parts.clear();
                    parts.push(record);
                } else if record.priority == *priority {
                    parts.push(record);
                }
            }
        }
    }

    order
        .into_iter()
        .filter_map(|id| {
            best.remove(&id).map(|(_, mut records)| {
                records.sort_by_key(|record| record.part.ordinal);
                EmployeePlan {
                    employee_id: id,
                    parts: records.into_iter().map(|record| record.part).collect(),
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    const HEADER: &str = "Employee,Priority,Part,Start,End\n";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn parse_date_accepts_iso_dates_only() {
        assert_eq!(
            parser::parse_date_for_tests("2024-07-01").expect("parse"),
            date(2024, 7, 1)
        );
        assert!(parser::parse_date_for_tests("07/01/2024").is_err());
        assert!(parser::parse_date_for_tests("  ").is_err());
    }

    #[test]
    fn normalize_strips_bom_and_whitespace() {
        assert_eq!(parser::normalize_for_tests("\u{feff} e-17  "), "e-17");
    }

    #[test]
    fn importer_keeps_only_top_priority_period() {
        let csv = format!(
            "{HEADER}\
             e-1,2,0,2024-09-01,2024-09-14\n\
             e-1,1,0,2024-07-01,2024-07-07\n\
             e-1,1,1,2024-07-20,2024-07-25\n"
        );

        let plans = RosterImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(plans.len(), 1);
        let plan = &plans[0];
        assert_eq!(plan.employee_id.0, "e-1");
        assert_eq!(plan.parts.len(), 2);
        assert_eq!(plan.parts[0].span.start, date(2024, 7, 1));
        assert_eq!(plan.parts[1].span.start, date(2024, 7, 20));
    }

    #[test]
    fn importer_orders_parts_by_ordinal() {
        let csv = format!(
            "{HEADER}\
             e-2,1,1,2024-08-10,2024-08-14\n\
             e-2,1,0,2024-08-01,2024-08-05\n"
        );

        let plans = RosterImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(plans[0].parts[0].ordinal, 0);
        assert_eq!(plans[0].parts[1].ordinal, 1);
    }

    #[test]
    fn importer_preserves_first_seen_employee_order() {
        let csv = format!(
            "{HEADER}\
             e-b,1,0,2024-07-01,2024-07-05\n\
             e-a,1,0,2024-07-10,2024-07-12\n"
        );

        let plans = RosterImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(plans[0].employee_id.0, "e-b");
        assert_eq!(plans[1].employee_id.0, "e-a");
    }

    #[test]
    fn importer_rejects_rows_without_employee() {
        let csv = format!("{HEADER},1,0,2024-07-01,2024-07-05\n");

        let error = RosterImporter::from_reader(Cursor::new(csv)).expect_err("expected error");

        match error {
            RosterImportError::MissingEmployee { line } => assert_eq!(line, 2),
            other => panic!("expected missing employee error, got {other:?}"),
        }
    }

    #[test]
    fn importer_rejects_unparseable_dates() {
        let csv = format!("{HEADER}e-1,1,0,July 1st,2024-07-05\n");

        let error = RosterImporter::from_reader(Cursor::new(csv)).expect_err("expected error");

        match error {
            RosterImportError::InvalidDate { value } => assert_eq!(value, "July 1st"),
            other => panic!("expected invalid date error, got {other:?}"),
        }
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        let error = RosterImporter::from_path("./does-not-exist.csv").expect_err("expected error");

        match error {
            RosterImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
