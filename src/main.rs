mod cli;
mod db;
mod error;
mod fmt;
mod importer;
mod models;
mod reports;
mod settings;

use std::path::PathBuf;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let data_dir = cli
        .data_dir
        .as_deref()
        .map(|dir| PathBuf::from(settings::shellexpand_path(dir)))
        .unwrap_or_else(settings::get_data_dir);

    let result = match cli.command {
        Commands::Init { dir } => cli::init::run(dir.or(cli.data_dir)),
        Commands::Import {
            file,
            bank,
            account_number,
            account_name,
        } => cli::import::run(&data_dir, &file, &bank, &account_number, account_name.as_deref()),
        Commands::List { limit } => cli::report::list(&data_dir, limit),
        Commands::Summary => cli::report::summary(&data_dir),
        Commands::Balance { account_id } => cli::report::balance(&data_dir, account_id),
        Commands::Accounts => cli::accounts::list(&data_dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
