use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Table};
use rust_decimal::Decimal;

use crate::db::open_ledger;
use crate::error::Result;
use crate::fmt::money;
use crate::reports;

fn money_or_na(val: Option<Decimal>) -> String {
    val.map(money).unwrap_or_else(|| "N/A".to_string())
}

pub fn list(data_dir: &Path, limit: Option<usize>) -> Result<()> {
    let conn = open_ledger(data_dir)?;
    let rows = reports::all_transactions(&conn, limit)?;
    if rows.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec!["Date", "Bank", "Account", "Type", "Amount", "Balance", "Description"]);
    for entry in &rows {
        table.add_row(vec![
            Cell::new(&entry.date),
            Cell::new(&entry.bank_name),
            Cell::new(&entry.account_name),
            Cell::new(&entry.kind),
            Cell::new(money(entry.amount)),
            Cell::new(money_or_na(entry.balance_after)),
            Cell::new(&entry.description),
        ]);
    }
    println!("{} ({} total)\n{table}", "Transactions".bold(), rows.len());
    Ok(())
}

pub fn summary(data_dir: &Path) -> Result<()> {
    let conn = open_ledger(data_dir)?;
    let months = reports::monthly_summary(&conn)?;
    if months.is_empty() {
        println!("No monthly data found.");
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec!["Month", "Income", "Expenses", "Net"]);
    for month in &months {
        table.add_row(vec![
            Cell::new(&month.month),
            Cell::new(money(month.total_income)),
            Cell::new(money(month.total_expenses)),
            Cell::new(money(month.net_amount)),
        ]);
    }
    println!("{}\n{table}", "Monthly Summary".bold());
    Ok(())
}

pub fn balance(data_dir: &Path, account_id: Option<i64>) -> Result<()> {
    let conn = open_ledger(data_dir)?;
    let entries = reports::balance_history(&conn, account_id)?;
    if entries.is_empty() {
        println!("No balance history found.");
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec!["Date", "Account", "Balance", "Description"]);
    for entry in &entries {
        table.add_row(vec![
            Cell::new(&entry.date),
            Cell::new(&entry.account_name),
            Cell::new(money_or_na(entry.balance_after)),
            Cell::new(&entry.description),
        ]);
    }
    println!("{}\n{table}", "Balance History".bold());
    Ok(())
}
