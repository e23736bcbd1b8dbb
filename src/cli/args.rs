use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Split shared expenses and compute settlement reports
#[derive(Parser, Debug)]
#[command(name = "split-ledger")]
#[command(about = "Split shared expenses and compute settlement reports", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing expense records
    #[arg(value_name = "EXPENSES", help = "Path to the expenses CSV file")]
    pub expenses_file: PathBuf,

    /// Group roster file
    #[arg(
        long = "members",
        value_name = "FILE",
        help = "Path to the members CSV file (id,name,contact,admin)"
    )]
    pub members_file: PathBuf,

    /// Recorded settlements file
    #[arg(
        long = "settlements",
        value_name = "FILE",
        help = "Optional path to the settlements CSV file (date,from,to,amount,notes)"
    )]
    pub settlements_file: Option<PathBuf>,

    /// Which report to write to stdout
    #[arg(
        long = "report",
        value_name = "REPORT",
        default_value = "balances",
        help = "Report to produce: 'balances' for net balances or 'plan' for the payment plan"
    )]
    pub report: ReportKind,
}

/// Available reports
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Net balance per member
    Balances,
    /// Simplified payment plan
    Plan,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_report(
        &["program", "--members", "members.csv", "expenses.csv"],
        ReportKind::Balances
    )]
    #[case::explicit_balances(
        &["program", "--members", "members.csv", "--report", "balances", "expenses.csv"],
        ReportKind::Balances
    )]
    #[case::explicit_plan(
        &["program", "--members", "members.csv", "--report", "plan", "expenses.csv"],
        ReportKind::Plan
    )]
    fn test_report_parsing(#[case] args: &[&str], #[case] expected: ReportKind) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.report, expected);
    }

    #[test]
    fn test_settlements_file_is_optional() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "--members",
            "members.csv",
            "expenses.csv",
        ])
        .unwrap();
        assert_eq!(parsed.settlements_file, None);

        let parsed = CliArgs::try_parse_from([
            "program",
            "--members",
            "members.csv",
            "--settlements",
            "settlements.csv",
            "expenses.csv",
        ])
        .unwrap();
        assert_eq!(
            parsed.settlements_file,
            Some(PathBuf::from("settlements.csv"))
        );
    }

    #[rstest]
    #[case::missing_expenses(&["program", "--members", "members.csv"])]
    #[case::missing_members(&["program", "expenses.csv"])]
    #[case::invalid_report(&["program", "--members", "m.csv", "--report", "invalid", "expenses.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
