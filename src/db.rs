use std::path::Path;

use rusqlite::{Connection, OptionalExtension};

use crate::error::Result;
use crate::models::{to_cents, StatementRecord};

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS banks (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    created_at TEXT DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS accounts (
    id INTEGER PRIMARY KEY,
    bank_id INTEGER NOT NULL,
    account_number TEXT NOT NULL,
    account_name TEXT,
    account_type TEXT NOT NULL DEFAULT 'checking',
    opening_balance_cents INTEGER NOT NULL DEFAULT 0,
    current_balance_cents INTEGER,
    is_active INTEGER DEFAULT 1,
    created_at TEXT DEFAULT (datetime('now')),
    updated_at TEXT DEFAULT (datetime('now')),
    UNIQUE (bank_id, account_number),
    FOREIGN KEY (bank_id) REFERENCES banks(id)
);

CREATE TABLE IF NOT EXISTS transactions (
    id INTEGER PRIMARY KEY,
    account_id INTEGER NOT NULL,
    date TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    amount_cents INTEGER NOT NULL,
    kind TEXT NOT NULL,
    reference TEXT,
    balance_after_cents INTEGER,
    created_at TEXT DEFAULT (datetime('now')),
    updated_at TEXT DEFAULT (datetime('now')),
    FOREIGN KEY (account_id) REFERENCES accounts(id)
);

CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
CREATE INDEX IF NOT EXISTS idx_transactions_account_date ON transactions(account_id, date);
";

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Open (creating if needed) the ledger database under `data_dir`.
pub fn open_ledger(data_dir: &Path) -> Result<Connection> {
    std::fs::create_dir_all(data_dir)?;
    let conn = get_connection(&data_dir.join("passbook.db"))?;
    init_db(&conn)?;
    Ok(conn)
}

pub fn get_or_create_bank(conn: &Connection, name: &str) -> Result<i64> {
    let existing: Option<i64> = conn
        .query_row("SELECT id FROM banks WHERE name = ?1", [name], |row| row.get(0))
        .optional()?;
    if let Some(id) = existing {
        return Ok(id);
    }
    conn.execute("INSERT INTO banks (name) VALUES (?1)", [name])?;
    Ok(conn.last_insert_rowid())
}

/// Account display name is stored only at creation; later calls with a
/// different name still resolve to the existing row.
pub fn get_or_create_account(
    conn: &Connection,
    bank_id: i64,
    account_number: &str,
    account_name: Option<&str>,
) -> Result<i64> {
    let existing: Option<i64> = conn
        .query_row(
            "SELECT id FROM accounts WHERE bank_id = ?1 AND account_number = ?2",
            rusqlite::params![bank_id, account_number],
            |row| row.get(0),
        )
        .optional()?;
    if let Some(id) = existing {
        return Ok(id);
    }
    conn.execute(
        "INSERT INTO accounts (bank_id, account_number, account_name) VALUES (?1, ?2, ?3)",
        rusqlite::params![bank_id, account_number, account_name],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_transaction(conn: &Connection, account_id: i64, record: &StatementRecord) -> Result<()> {
    conn.execute(
        "INSERT INTO transactions (account_id, date, description, amount_cents, kind, balance_after_cents) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        rusqlite::params![
            account_id,
            record.date.to_string(),
            record.description,
            to_cents(record.amount),
            record.kind.as_str(),
            record.balance_after.map(to_cents),
        ],
    )?;
    Ok(())
}

/// Balance snapshot of the chronologically latest transaction for the
/// account, ties broken by highest id. None when the account has no
/// transactions or the latest one carries no balance.
pub fn latest_balance_after(conn: &Connection, account_id: i64) -> Result<Option<i64>> {
    let row: Option<Option<i64>> = conn
        .query_row(
            "SELECT balance_after_cents FROM transactions WHERE account_id = ?1 \
             ORDER BY date DESC, id DESC LIMIT 1",
            [account_id],
            |row| row.get(0),
        )
        .optional()?;
    Ok(row.flatten())
}

pub fn set_current_balance(conn: &Connection, account_id: i64, cents: i64) -> Result<()> {
    conn.execute(
        "UPDATE accounts SET current_balance_cents = ?1, updated_at = datetime('now') WHERE id = ?2",
        rusqlite::params![cents, account_id],
    )?;
    Ok(())
}
