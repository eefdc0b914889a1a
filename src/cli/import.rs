use std::path::Path;

use colored::Colorize;

use crate::db::open_ledger;
use crate::error::Result;
use crate::importer::import_statement;

/// How many row errors to print before collapsing the rest into a count.
const ERROR_PREVIEW: usize = 5;

pub fn run(
    data_dir: &Path,
    file: &str,
    bank: &str,
    account_number: &str,
    account_name: Option<&str>,
) -> Result<()> {
    let mut conn = open_ledger(data_dir)?;
    let outcome = import_statement(&mut conn, Path::new(file), bank, account_number, account_name)?;

    println!("{}", "Import successful".green().bold());
    println!("  Transactions imported: {}", outcome.imported);
    if !outcome.errors.is_empty() {
        println!("  Row errors: {}", outcome.errors.len());
        for error in outcome.errors.iter().take(ERROR_PREVIEW) {
            println!("    - Row {}: {}", error.row, error.message);
        }
        if outcome.errors.len() > ERROR_PREVIEW {
            println!("    ... and {} more errors", outcome.errors.len() - ERROR_PREVIEW);
        }
    }
    Ok(())
}
