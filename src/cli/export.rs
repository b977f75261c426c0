use std::path::PathBuf;

use crate::error::Result;
use crate::ledger::{apply_assignments, render_csv, DateStyle};
use crate::models::Transaction;
use crate::session::SessionStore;
use crate::settings::{get_data_dir, load_settings};
use crate::workbook::render_workbook;

/// Default export filename from the first record's date: the ledger is
/// kept per statement month, so MARCH_2024.csv and so on.
fn default_path(records: &[Transaction], ext: &str) -> PathBuf {
    let name = match records.first() {
        Some(rec) => format!(
            "{}_{}",
            rec.date.format("%B").to_string().to_uppercase(),
            rec.date.format("%Y")
        ),
        None => "TRANSACTIONS".to_string(),
    };
    get_data_dir().join("exports").join(format!("{name}.{ext}"))
}

/// The selected records with category assignments applied and validated.
fn finalized_working_set() -> Result<Vec<Transaction>> {
    let store = SessionStore::new(&get_data_dir());
    let workspace = store.load()?;
    let mut records = workspace.working_set();
    apply_assignments(&mut records, &workspace.assignments)?;
    Ok(records)
}

fn write_output(bytes: &[u8], path: &PathBuf) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    println!("Wrote {}", path.display());
    Ok(())
}

pub fn csv(output: Option<String>, full_dates: bool) -> Result<()> {
    let records = finalized_working_set()?;
    let style = if full_dates {
        DateStyle::DayMonthYear
    } else {
        DateStyle::DayMonth
    };
    let content = render_csv(&records, style)?;
    let path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| default_path(&records, "csv"));
    write_output(content.as_bytes(), &path)
}

pub fn xlsx(output: Option<String>) -> Result<()> {
    let records = finalized_working_set()?;
    let settings = load_settings();
    let bytes = render_workbook(&records, &settings.company_name, &settings.account_label)?;
    let path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| default_path(&records, "xlsx"));
    write_output(&bytes, &path)
}
