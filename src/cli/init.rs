use std::path::PathBuf;

use crate::db::open_ledger;
use crate::error::Result;
use crate::settings::{load_settings, save_settings, shellexpand_path};

pub fn run(dir: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    if let Some(dir) = dir {
        settings.data_dir = shellexpand_path(&dir);
    }
    save_settings(&settings)?;

    let resolved = PathBuf::from(&settings.data_dir);
    open_ledger(&resolved)?;

    println!("Initialized passbook at {}", resolved.display());
    Ok(())
}
