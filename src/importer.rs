use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::db;
use crate::error::{PassbookError, Result};
use crate::models::{StatementRecord, TxnKind};

/// Fixed statement layout: six summary lines, then the column header, then
/// data rows [date, description, amount, running balance].
const PREAMBLE_LINES: usize = 6;
const HEADER_LINES: usize = 1;

// ---------------------------------------------------------------------------
// Scalar parsers
// ---------------------------------------------------------------------------

/// Missing, empty, and the literal token "nan" all mean a zero amount.
/// Thousands separators and stray quote characters are stripped; `(...)`
/// is accounting notation for a negative value.
pub fn parse_amount(raw: Option<&str>) -> Result<Decimal> {
    let Some(raw) = raw else {
        return Ok(Decimal::new(0, 2));
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "nan" {
        return Ok(Decimal::new(0, 2));
    }
    let cleaned: String = trimmed.chars().filter(|c| *c != ',' && *c != '"').collect();
    let cleaned = cleaned.trim();
    let parsed = if let Some(inner) = cleaned.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
        Decimal::from_str(inner.trim()).map(|d| -d)
    } else {
        Decimal::from_str(cleaned)
    };
    let mut value = parsed.map_err(|_| PassbookError::AmountFormat(raw.to_string()))?;
    value.rescale(2);
    Ok(value)
}

/// `MM/DD/YYYY` (zero-padding optional) or ISO `YYYY-MM-DD`, both strict.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    let parsed = if trimmed.contains('/') {
        NaiveDate::parse_from_str(trimmed, "%m/%d/%Y")
    } else {
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
    };
    parsed.map_err(|_| PassbookError::DateFormat(raw.to_string()))
}

// ---------------------------------------------------------------------------
// Row classification
// ---------------------------------------------------------------------------

/// One raw statement row: up to four trimmed text cells resolved once from
/// the csv record. Cells beyond the record's length are None.
#[derive(Debug, Clone)]
pub struct RawRow {
    pub date: Option<String>,
    pub description: Option<String>,
    pub amount: Option<String>,
    pub balance: Option<String>,
}

impl RawRow {
    fn from_record(record: &csv::StringRecord) -> Self {
        let cell = |i: usize| record.get(i).map(|s| s.trim().to_string());
        Self {
            date: cell(0),
            description: cell(1),
            amount: cell(2),
            balance: cell(3),
        }
    }
}

const SUMMARY_MARKERS: &[&str] = &["Total", "Beginning", "Ending", "Summary"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Empty or missing first cell.
    Blank,
    /// Summary/noise row leaking out of the preamble.
    Summary,
    /// The column header repeated inside the data region.
    Header,
    /// A row carrying no amount, e.g. a beginning-balance marker.
    Informational,
    Data,
}

/// Decision order matters: noise classification always precedes any attempt
/// at numeric or date parsing, so malformed noise rows never surface as
/// parse errors.
pub fn classify(row: &RawRow) -> RowKind {
    if row.date.as_deref().map_or(true, str::is_empty) {
        return RowKind::Blank;
    }
    let description = row.description.as_deref().unwrap_or("");
    if SUMMARY_MARKERS.iter().any(|marker| description.contains(marker)) {
        return RowKind::Summary;
    }
    if row.date.as_deref() == Some("Date") || description == "Description" {
        return RowKind::Header;
    }
    if row.amount.as_deref().map_or(true, |s| s.is_empty() || s == "nan") {
        return RowKind::Informational;
    }
    RowKind::Data
}

// ---------------------------------------------------------------------------
// Row normalizer
// ---------------------------------------------------------------------------

/// Turn a row classified as data into a canonical record. The balance cell
/// is left unset (never zero) when missing, empty, or "nan".
pub fn normalize(row: &RawRow) -> Result<StatementRecord> {
    let date = parse_date(row.date.as_deref().unwrap_or(""))?;
    let amount = parse_amount(row.amount.as_deref())?;
    let balance_after = match row.balance.as_deref() {
        None | Some("") | Some("nan") => None,
        cell => Some(parse_amount(cell)?),
    };
    Ok(StatementRecord {
        date,
        description: row.description.clone().unwrap_or_default(),
        amount,
        kind: TxnKind::from_amount(amount),
        balance_after,
    })
}

// ---------------------------------------------------------------------------
// Import orchestrator
// ---------------------------------------------------------------------------

/// A recoverable failure to normalize one input row, tagged with the row's
/// position in the original source file.
#[derive(Debug, Clone)]
pub struct RowError {
    pub row: usize,
    pub message: String,
}

pub struct ImportOutcome {
    pub imported: usize,
    pub errors: Vec<RowError>,
    pub bank_id: i64,
    pub account_id: i64,
}

/// Tabularize the source, skipping the fixed preamble and letting the csv
/// reader consume the column header. Row positions count from the top of
/// the file, so the first data row is at preamble + header.
fn read_statement_rows(file_path: &Path) -> Result<Vec<(usize, RawRow)>> {
    let content = std::fs::read_to_string(file_path)?;
    let data_region = content
        .lines()
        .skip(PREAMBLE_LINES)
        .collect::<Vec<_>>()
        .join("\n");
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data_region.as_bytes());
    let mut rows = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        rows.push((i + PREAMBLE_LINES + HEADER_LINES, RawRow::from_record(&record)));
    }
    Ok(rows)
}

/// Run one statement through the pipeline. Opening or tabularizing the
/// source fails structurally before any write; everything else — identity
/// resolution, the transaction batch, and the current-balance recompute —
/// commits or rolls back as one unit. Row-level errors are collected and
/// never abort the batch.
pub fn import_statement(
    conn: &mut Connection,
    file_path: &Path,
    bank_name: &str,
    account_number: &str,
    account_name: Option<&str>,
) -> Result<ImportOutcome> {
    let rows = read_statement_rows(file_path)?;

    let tx = conn.transaction()?;
    let bank_id = db::get_or_create_bank(&tx, bank_name)?;
    let account_id = db::get_or_create_account(&tx, bank_id, account_number, account_name)?;

    let mut imported = 0usize;
    let mut errors = Vec::new();
    for (position, raw) in &rows {
        match classify(raw) {
            RowKind::Data => match normalize(raw) {
                Ok(record) => {
                    db::insert_transaction(&tx, account_id, &record)?;
                    imported += 1;
                }
                Err(e) => {
                    log::warn!("row {position}: {e}");
                    errors.push(RowError {
                        row: *position,
                        message: e.to_string(),
                    });
                }
            },
            kind => log::debug!("row {position}: skipped ({kind:?})"),
        }
    }

    if imported > 0 {
        if let Some(cents) = db::latest_balance_after(&tx, account_id)? {
            db::set_current_balance(&tx, account_id, cents)?;
        }
    }

    tx.commit()?;
    log::info!(
        "imported {imported} transactions into account {account_id} ({} row errors)",
        errors.len()
    );
    Ok(ImportOutcome {
        imported,
        errors,
        bank_id,
        account_id,
    })
}
