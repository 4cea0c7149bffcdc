use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::RosterImportError;
use crate::workflows::vacation::domain::{DateSpan, EmployeeId, VacationPart};

/// One CSV row of the HR directory export: a single part of one wished
/// vacation period.
#[derive(Debug)]
pub(crate) struct RosterRecord {
    pub(crate) employee_id: EmployeeId,
    pub(crate) priority: u8,
    pub(crate) part: VacationPart,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<RosterRecord>, RosterImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    // line 1 is the header
    for (index, row) in csv_reader.deserialize::<RosterRow>().enumerate() {
        let row = row?;
        let line = (index + 2) as u64;

        let employee = normalize_id(&row.employee);
        if employee.is_empty() {
            return Err(RosterImportError::MissingEmployee { line });
        }

        records.push(RosterRecord {
            employee_id: EmployeeId(employee),
            priority: row.priority,
            part: VacationPart {
                span: DateSpan::new(parse_date(&row.start)?, parse_date(&row.end)?),
                ordinal: row.part,
            },
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Employee")]
    employee: String,
    #[serde(rename = "Priority", default = "default_priority")]
    priority: u8,
    #[serde(rename = "Part", default)]
    part: u8,
    #[serde(rename = "Start", deserialize_with = "trimmed_string")]
    start: String,
    #[serde(rename = "End", deserialize_with = "trimmed_string")]
    end: String,
}

fn default_priority() -> u8 {
    1
}

fn trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

/// Exports occasionally arrive with a BOM glued to the first cell.
fn normalize_id(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}

fn parse_date(value: &str) -> Result<NaiveDate, RosterImportError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        RosterImportError::InvalidDate {
            value: value.to_string(),
        }
    })
}

#[cfg(test)]
pub(crate) fn parse_date_for_tests(value: &str) -> Result<NaiveDate, RosterImportError> {
    parse_date(value)
}

#[cfg(test)]
pub(crate) fn normalize_for_tests(raw: &str) -> String {
    normalize_id(raw)
}
