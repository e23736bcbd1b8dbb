//! I/O handling for the ledger CLI
//!
//! CSV input parsing, report output, and the file-to-report pipeline.

pub mod csv_format;
pub mod reader;

pub use csv_format::{write_balances_csv, write_plan_csv};
pub use reader::{CsvReader, ExpenseReader, MemberReader, SettlementReader};

use crate::cli::ReportKind;
use crate::core::LedgerEngine;
use crate::types::{Group, GroupId, Member};
use std::io::Write;
use std::path::Path;

/// Run the full file-to-report pipeline
///
/// Loads the roster, replays every expense and settlement through a fresh
/// ledger engine, and writes the requested report. Bad input rows and
/// records the engine rejects are logged to stderr and skipped; processing
/// continues with the remaining records.
///
/// # Arguments
///
/// * `members_path` - Path to the members CSV file
/// * `expenses_path` - Path to the expenses CSV file
/// * `settlements_path` - Optional path to the settlements CSV file
/// * `report` - Which report to write
/// * `output` - Mutable reference to a writer for the report
///
/// # Errors
///
/// Returns `Err(String)` on fatal errors: a file that cannot be opened, a
/// members file yielding no usable roster, or a write failure.
pub fn run_report(
    members_path: &Path,
    expenses_path: &Path,
    settlements_path: Option<&Path>,
    report: ReportKind,
    output: &mut dyn Write,
) -> Result<(), String> {
    let members = load_members(members_path)?;
    let mut engine = LedgerEngine::new(Group::new(GroupId(1), members));

    for result in ExpenseReader::expenses(expenses_path)? {
        match result {
            Ok(draft) => {
                if let Err(e) = engine.add_expense(draft) {
                    eprintln!("Skipping expense: {}", e);
                }
            }
            Err(e) => eprintln!("Skipping expense row: {}", e),
        }
    }

    if let Some(path) = settlements_path {
        for result in SettlementReader::settlements(path)? {
            match result {
                Ok(draft) => {
                    if let Err(e) = engine.record_settlement(draft) {
                        eprintln!("Skipping settlement: {}", e);
                    }
                }
                Err(e) => eprintln!("Skipping settlement row: {}", e),
            }
        }
    }

    match report {
        ReportKind::Balances => write_balances_csv(&engine.balances(), output),
        ReportKind::Plan => write_plan_csv(&engine.settlement_plan(), output),
    }
}

/// Load the group roster, skipping unusable rows
fn load_members(path: &Path) -> Result<Vec<Member>, String> {
    let mut members = Vec::new();
    for result in MemberReader::members(path)? {
        match result {
            Ok(member) => members.push(member),
            Err(e) => eprintln!("Skipping member row: {}", e),
        }
    }

    if members.is_empty() {
        return Err(format!(
            "Members file '{}' contains no usable members",
            path.display()
        ));
    }
    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file
    }

    fn members_file() -> NamedTempFile {
        create_temp_csv("id,name,contact,admin\n1,Ana,,true\n2,Ben,,\n3,Cleo,,\n")
    }

    #[test]
    fn test_run_report_balances() {
        let members = members_file();
        let expenses = create_temp_csv(
            "date,payer,amount,category,description,split,participants\n\
             2026-08-01,1,300.00,dinner,,equal,1;2;3\n",
        );

        let mut output = Vec::new();
        run_report(
            members.path(),
            expenses.path(),
            None,
            ReportKind::Balances,
            &mut output,
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "member,balance\n1,200.00\n2,-100.00\n3,-100.00\n"
        );
    }

    #[test]
    fn test_run_report_plan_with_settlements() {
        let members = members_file();
        let expenses = create_temp_csv(
            "date,payer,amount,category,description,split,participants\n\
             2026-08-01,1,300.00,dinner,,equal,1;2;3\n",
        );
        let settlements =
            create_temp_csv("date,from,to,amount,notes\n2026-08-10,2,1,100.00,paid back\n");

        let mut output = Vec::new();
        run_report(
            members.path(),
            expenses.path(),
            Some(settlements.path()),
            ReportKind::Plan,
            &mut output,
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "from,to,amount\n3,1,100.00\n"
        );
    }

    #[test]
    fn test_run_report_skips_bad_rows() {
        let members = members_file();
        let expenses = create_temp_csv(
            "date,payer,amount,category,description,split,participants\n\
             2026-08-01,1,bad,dinner,,equal,1;2\n\
             2026-08-01,9,10.00,dinner,,equal,1;2\n\
             2026-08-02,1,50.00,taxi,,equal,1;2\n",
        );

        let mut output = Vec::new();
        run_report(
            members.path(),
            expenses.path(),
            None,
            ReportKind::Balances,
            &mut output,
        )
        .unwrap();

        // Only the last expense survives: 50.00 split between 1 and 2
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "member,balance\n1,25.00\n2,-25.00\n3,0.00\n"
        );
    }

    #[test]
    fn test_run_report_empty_roster_is_fatal() {
        let members = create_temp_csv("id,name,contact,admin\n");
        let expenses = create_temp_csv("date,payer,amount,category,description,split,participants\n");

        let mut output = Vec::new();
        let result = run_report(
            members.path(),
            expenses.path(),
            None,
            ReportKind::Balances,
            &mut output,
        );

        assert!(result.unwrap_err().contains("no usable members"));
    }
}
