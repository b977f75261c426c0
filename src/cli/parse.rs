use std::path::Path;

use crate::error::{CocoError, Result};
use crate::session::{SessionStore, Workspace};
use crate::settings::get_data_dir;
use crate::statement::parse_statement_file;

pub fn run(file: &str, allow_empty: bool) -> Result<()> {
    let records = parse_statement_file(Path::new(file))?;
    if records.is_empty() && !allow_empty {
        return Err(CocoError::EmptyInput);
    }

    let workspace = Workspace {
        records,
        source: Some(file.to_string()),
        ..Workspace::default()
    };
    let store = SessionStore::new(&get_data_dir());
    store.save(&workspace)?;

    println!("Parsed {} transactions from {file}", workspace.records.len());
    if !workspace.records.is_empty() {
        super::show::print_ledger(&workspace.records);
    }
    Ok(())
}
