//! CSV format handling for ledger input files and report output
//!
//! This module centralizes all CSV format concerns, providing:
//! - Row structures for deserializing the member, expense, and settlement files
//! - Conversion from rows to domain types
//! - Report serialization (balances and the payment plan)
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Participant encoding
//!
//! The expense file carries the split in two columns: `split` names the
//! strategy (`equal`, `percentage`, `custom`) and `participants` encodes the
//! shares as a `;`-separated list. Equal splits list bare member ids
//! (`2;3;4`); percentage and custom splits pair each id with its share
//! (`2:50;3:25;4:25` or `2:40.00;3:60.01`).

use crate::core::BalanceMap;
use crate::types::{
    CustomShare, ExpenseDraft, Member, MemberId, Money, PercentageShare, SettlementDraft,
    SimplifiedTransaction, SplitStrategy,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Row structure of the members file
///
/// Matches the input CSV format with columns: id, name, contact, admin.
/// The contact and admin fields are optional.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MemberRow {
    pub id: u32,
    pub name: String,
    pub contact: Option<String>,
    pub admin: Option<String>,
}

/// Row structure of the expenses file
///
/// Matches the input CSV format with columns: date, payer, amount, category,
/// description, split, participants. Amounts stay as strings here so parse
/// failures carry the offending text into the error message.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExpenseRow {
    pub date: String,
    pub payer: u32,
    pub amount: String,
    pub category: String,
    pub description: Option<String>,
    pub split: String,
    pub participants: String,
}

/// Row structure of the settlements file
///
/// Matches the input CSV format with columns: date, from, to, amount, notes.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SettlementRow {
    pub date: String,
    pub from: u32,
    pub to: u32,
    pub amount: String,
    pub notes: Option<String>,
}

/// Convert a MemberRow to a Member
///
/// # Arguments
///
/// * `row` - The deserialized member row
///
/// # Returns
///
/// Result containing either:
/// - Ok(Member) - Successfully converted roster entry
/// - Err(String) - Error message describing the conversion failure
pub fn convert_member_row(row: MemberRow) -> Result<Member, String> {
    if row.name.trim().is_empty() {
        return Err(format!("Member {} has an empty name", row.id));
    }

    let admin = match row.admin.as_deref().map(str::trim) {
        None | Some("") => false,
        Some(flag) => match flag.to_lowercase().as_str() {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" => false,
            other => {
                return Err(format!(
                    "Invalid admin flag '{}' for member {}",
                    other, row.id
                ))
            }
        },
    };

    Ok(Member {
        id: MemberId(row.id),
        name: row.name.trim().to_string(),
        contact: row.contact.filter(|contact| !contact.trim().is_empty()),
        admin,
    })
}

/// Convert an ExpenseRow to an ExpenseDraft
///
/// Parses the date, the amount, and the encoded split. The draft is not yet
/// validated against any group roster; that happens when it reaches the
/// ledger engine.
///
/// # Arguments
///
/// * `row` - The deserialized expense row
///
/// # Returns
///
/// Result containing either:
/// - Ok(ExpenseDraft) - Successfully converted input record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_expense_row(row: ExpenseRow) -> Result<ExpenseDraft, String> {
    let date = parse_date(&row.date)?;
    let amount = parse_money(&row.amount)?;
    let strategy = parse_split(&row.split, &row.participants)?;

    Ok(ExpenseDraft {
        amount,
        category: row.category.trim().to_string(),
        description: row
            .description
            .map(|description| description.trim().to_string())
            .unwrap_or_default(),
        date,
        payer: MemberId(row.payer),
        strategy,
    })
}

/// Convert a SettlementRow to a SettlementDraft
///
/// # Arguments
///
/// * `row` - The deserialized settlement row
///
/// # Returns
///
/// Result containing either:
/// - Ok(SettlementDraft) - Successfully converted input record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_settlement_row(row: SettlementRow) -> Result<SettlementDraft, String> {
    let date = parse_date(&row.date)?;
    let amount = parse_money(&row.amount)?;

    Ok(SettlementDraft {
        from: MemberId(row.from),
        to: MemberId(row.to),
        amount,
        date,
        notes: row.notes.filter(|notes| !notes.trim().is_empty()),
    })
}

/// Parse an ISO `YYYY-MM-DD` date field
fn parse_date(field: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(field.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}': expected YYYY-MM-DD", field))
}

/// Parse a money field, rejecting sub-cent precision
fn parse_money(field: &str) -> Result<Money, String> {
    let decimal = Decimal::from_str(field.trim())
        .map_err(|_| format!("Invalid amount '{}'", field))?;
    Money::from_decimal(decimal)
        .ok_or_else(|| format!("Invalid amount '{}': at most two decimal places", field))
}

/// Parse the split and participants columns into a strategy
fn parse_split(split: &str, participants: &str) -> Result<SplitStrategy, String> {
    let tokens: Vec<&str> = participants
        .split(';')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();

    match split.trim().to_lowercase().as_str() {
        "equal" => {
            let participants = tokens
                .iter()
                .map(|token| parse_member_id(token))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(SplitStrategy::Equal { participants })
        }
        "percentage" => {
            let shares = tokens
                .iter()
                .map(|token| {
                    let (member, value) = split_share_token(token)?;
                    let percent = Decimal::from_str(value)
                        .map_err(|_| format!("Invalid percentage '{}' in '{}'", value, token))?;
                    Ok(PercentageShare { member, percent })
                })
                .collect::<Result<Vec<_>, String>>()?;
            Ok(SplitStrategy::Percentage { shares })
        }
        "custom" => {
            let shares = tokens
                .iter()
                .map(|token| {
                    let (member, value) = split_share_token(token)?;
                    let amount = parse_money(value)?;
                    Ok(CustomShare { member, amount })
                })
                .collect::<Result<Vec<_>, String>>()?;
            Ok(SplitStrategy::Custom { shares })
        }
        other => Err(format!("Invalid split type: '{}'", other)),
    }
}

/// Split a `member:value` share token
fn split_share_token(token: &str) -> Result<(MemberId, &str), String> {
    let (member, value) = token
        .split_once(':')
        .ok_or_else(|| format!("Invalid share '{}': expected member:value", token))?;
    Ok((parse_member_id(member)?, value.trim()))
}

fn parse_member_id(token: &str) -> Result<MemberId, String> {
    token
        .trim()
        .parse::<u32>()
        .map(MemberId)
        .map_err(|_| format!("Invalid member id '{}'", token))
}

/// Write net balances to CSV format
///
/// Writes balances with columns: member, balance. The balance map is already
/// id-ordered, so the output is deterministic.
///
/// # Arguments
///
/// * `balances` - Net balance per member
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_balances_csv(balances: &BalanceMap, output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["member", "balance"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for (member, balance) in balances {
        writer
            .write_record(&[
                member.to_string(),
                format!("{:.2}", balance.to_decimal()),
            ])
            .map_err(|e| format!("Failed to write balance record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

/// Write a simplified payment plan to CSV format
///
/// Writes payments with columns: from, to, amount, in emission order.
///
/// # Arguments
///
/// * `plan` - The payments to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_plan_csv(
    plan: &[SimplifiedTransaction],
    output: &mut dyn Write,
) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["from", "to", "amount"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for payment in plan {
        writer
            .write_record(&[
                payment.from.to_string(),
                payment.to.to_string(),
                format!("{:.2}", payment.amount.to_decimal()),
            ])
            .map_err(|e| format!("Failed to write payment record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
