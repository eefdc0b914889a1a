use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::error::Result;
use crate::models::from_cents;

// ---------------------------------------------------------------------------
// Transaction listing
// ---------------------------------------------------------------------------

pub struct LedgerEntry {
    pub bank_name: String,
    pub account_name: String,
    pub date: String,
    pub description: String,
    pub amount: Decimal,
    pub kind: String,
    pub balance_after: Option<Decimal>,
}

pub fn all_transactions(conn: &Connection, limit: Option<usize>) -> Result<Vec<LedgerEntry>> {
    let mut sql = String::from(
        "SELECT b.name, COALESCE(a.account_name, a.account_number), t.date, t.description, \
         t.amount_cents, t.kind, t.balance_after_cents \
         FROM transactions t \
         JOIN accounts a ON t.account_id = a.id \
         JOIN banks b ON a.bank_id = b.id \
         ORDER BY t.date DESC",
    );
    if let Some(n) = limit {
        sql.push_str(&format!(" LIMIT {n}"));
    }
    let mut stmt = conn.prepare(&sql)?;
    let rows: Vec<LedgerEntry> = stmt
        .query_map([], |row| {
            Ok(LedgerEntry {
                bank_name: row.get(0)?,
                account_name: row.get(1)?,
                date: row.get(2)?,
                description: row.get(3)?,
                amount: from_cents(row.get(4)?),
                kind: row.get(5)?,
                balance_after: row.get::<_, Option<i64>>(6)?.map(from_cents),
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Monthly summary
// ---------------------------------------------------------------------------

pub struct MonthlySummary {
    pub month: String,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_amount: Decimal,
}

/// Sums run over integer cents, so the aggregation is exact.
pub fn monthly_summary(conn: &Connection) -> Result<Vec<MonthlySummary>> {
    let mut stmt = conn.prepare(
        "SELECT substr(t.date, 1, 7) as month, \
         SUM(CASE WHEN t.kind = 'credit' THEN t.amount_cents ELSE 0 END) as total_income, \
         SUM(CASE WHEN t.kind = 'debit' THEN ABS(t.amount_cents) ELSE 0 END) as total_expenses, \
         SUM(t.amount_cents) as net_amount \
         FROM transactions t \
         GROUP BY substr(t.date, 1, 7) ORDER BY month DESC",
    )?;
    let rows: Vec<MonthlySummary> = stmt
        .query_map([], |row| {
            Ok(MonthlySummary {
                month: row.get(0)?,
                total_income: from_cents(row.get(1)?),
                total_expenses: from_cents(row.get(2)?),
                net_amount: from_cents(row.get(3)?),
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Balance history
// ---------------------------------------------------------------------------

pub struct BalanceEntry {
    pub account_name: String,
    pub date: String,
    pub balance_after: Option<Decimal>,
    pub description: String,
}

pub fn balance_history(conn: &Connection, account_id: Option<i64>) -> Result<Vec<BalanceEntry>> {
    let filter = if account_id.is_some() { "WHERE t.account_id = ?1 " } else { "" };
    let sql = format!(
        "SELECT COALESCE(a.account_name, a.account_number), t.date, t.balance_after_cents, t.description \
         FROM transactions t \
         JOIN accounts a ON t.account_id = a.id \
         {filter}ORDER BY t.date DESC"
    );
    let mut stmt = conn.prepare(&sql)?;
    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<BalanceEntry> {
        Ok(BalanceEntry {
            account_name: row.get(0)?,
            date: row.get(1)?,
            balance_after: row.get::<_, Option<i64>>(2)?.map(from_cents),
            description: row.get(3)?,
        })
    }
    let rows: Vec<BalanceEntry> = match account_id {
        Some(id) => stmt
            .query_map([id], map_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?,
        None => stmt
            .query_map([], map_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?,
    };
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

pub struct AccountRow {
    pub id: i64,
    pub bank_name: String,
    pub account_number: String,
    pub account_name: Option<String>,
    pub account_type: String,
    pub current_balance: Option<Decimal>,
}

pub fn accounts(conn: &Connection) -> Result<Vec<AccountRow>> {
    let mut stmt = conn.prepare(
        "SELECT a.id, b.name, a.account_number, a.account_name, a.account_type, a.current_balance_cents \
         FROM accounts a JOIN banks b ON a.bank_id = b.id ORDER BY b.name, a.account_number",
    )?;
    let rows: Vec<AccountRow> = stmt
        .query_map([], |row| {
            Ok(AccountRow {
                id: row.get(0)?,
                bank_name: row.get(1)?,
                account_number: row.get(2)?,
                account_name: row.get(3)?,
                account_type: row.get(4)?,
                current_balance: row.get::<_, Option<i64>>(5)?.map(from_cents),
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}
