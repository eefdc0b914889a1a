pub mod accounts;
pub mod import;
pub mod init;
pub mod report;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "passbook", about = "Bank statement import and reporting CLI.")]
pub struct Cli {
    /// Data directory holding passbook.db (overrides settings)
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set the default data directory and initialize the database.
    Init {
        /// Path for passbook data (default: ~/Documents/passbook)
        dir: Option<String>,
    },
    /// Import a bank statement export into an account.
    Import {
        /// Path to the statement file
        file: String,
        /// Bank display name
        bank: String,
        /// Account number
        account_number: String,
        /// Account display name, stored at first import
        #[arg(long = "account-name")]
        account_name: Option<String>,
    },
    /// List all transactions.
    List {
        /// Limit the number of transactions shown
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show monthly income and expenses.
    Summary,
    /// Show account balance history.
    Balance {
        /// Restrict to a single account ID
        #[arg(long = "account-id")]
        account_id: Option<i64>,
    },
    /// List accounts with current balances.
    Accounts,
}
