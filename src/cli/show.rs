use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::money;
use crate::ledger::Totals;
use crate::models::Transaction;
use crate::session::SessionStore;
use crate::settings::get_data_dir;

pub fn run() -> Result<()> {
    let store = SessionStore::new(&get_data_dir());
    let workspace = store.load()?;
    if workspace.records.is_empty() {
        println!("Workspace is empty. Run `coco parse <file>` first.");
        return Ok(());
    }

    // Preview with any pending assignments applied; export validates
    // coverage, the preview just reflects what has been set so far.
    let mut records = workspace.working_set();
    for rec in records.iter_mut() {
        if let Some(cat) = workspace.assignments.get(&rec.id) {
            rec.category = *cat;
        }
    }

    print_ledger(&records);
    if workspace.selection.is_some() {
        println!(
            "{} of {} records selected",
            records.len(),
            workspace.records.len()
        );
    }
    Ok(())
}

/// Table of records plus the running totals line underneath, shared with
/// the parse preview.
pub fn print_ledger(records: &[Transaction]) {
    let totals = Totals::compute(records);

    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Description", "Amount", "Type"]);
    for rec in records {
        let amount = if rec.amount < 0.0 {
            money(rec.amount).red().to_string()
        } else {
            money(rec.amount).green().to_string()
        };
        table.add_row(vec![
            Cell::new(rec.id),
            Cell::new(rec.date.format("%d/%m/%Y")),
            Cell::new(&rec.description),
            Cell::new(amount),
            Cell::new(rec.category.as_str()),
        ]);
    }
    println!("Transactions\n{table}");
    println!(
        "Income: {}   Expenditure: {}   Balance: {}",
        money(totals.income).green(),
        money(totals.expenditure).red(),
        money(totals.balance).bold(),
    );
}
