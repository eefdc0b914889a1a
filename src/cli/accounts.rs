use std::path::Path;

use comfy_table::{Cell, Table};

use crate::db::open_ledger;
use crate::error::Result;
use crate::fmt::money;
use crate::reports;

pub fn list(data_dir: &Path) -> Result<()> {
    let conn = open_ledger(data_dir)?;
    let rows = reports::accounts(&conn)?;
    if rows.is_empty() {
        println!("No accounts found.");
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec!["ID", "Bank", "Number", "Name", "Type", "Current Balance"]);
    for account in &rows {
        table.add_row(vec![
            Cell::new(account.id),
            Cell::new(&account.bank_name),
            Cell::new(&account.account_number),
            Cell::new(account.account_name.clone().unwrap_or_default()),
            Cell::new(&account.account_type),
            Cell::new(
                account
                    .current_balance
                    .map(money)
                    .unwrap_or_else(|| "N/A".to_string()),
            ),
        ]);
    }
    println!("Accounts\n{table}");
    Ok(())
}
