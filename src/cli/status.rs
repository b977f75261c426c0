use crate::error::Result;
use crate::ledger::Totals;
use crate::session::SessionStore;
use crate::settings::load_settings;

pub fn run() -> Result<()> {
    let settings = load_settings();
    let data_dir = std::path::PathBuf::from(&settings.data_dir);

    println!(
        "Company:    {}",
        if settings.company_name.is_empty() {
            "(not set)"
        } else {
            &settings.company_name
        }
    );
    println!("Account:    {}", settings.account_label);
    println!("Data dir:   {}", data_dir.display());

    let store = SessionStore::new(&data_dir);
    if !store.exists() {
        println!();
        println!("No workspace. Run `coco parse <file>` to get started.");
        return Ok(());
    }

    let workspace = store.load()?;
    let totals = Totals::compute(&workspace.records);
    println!();
    if let Some(source) = &workspace.source {
        println!("Statement:     {source}");
    }
    println!("Records:       {}", workspace.records.len());
    println!("Assigned:      {}", workspace.assignments.len());
    match &workspace.selection {
        Some(ids) => println!("Selected:      {}", ids.len()),
        None => println!("Selected:      all"),
    }
    println!("Balance:       {}", crate::fmt::money(totals.balance));
    Ok(())
}
