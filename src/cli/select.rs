use crate::error::{CocoError, Result};
use crate::session::SessionStore;
use crate::settings::get_data_dir;

pub fn run(ids: Vec<u32>, all: bool) -> Result<()> {
    let store = SessionStore::new(&get_data_dir());
    let mut workspace = store.load()?;

    if all || ids.is_empty() {
        workspace.selection = None;
        store.save(&workspace)?;
        println!(
            "Selection cleared ({} records in working set)",
            workspace.records.len()
        );
        return Ok(());
    }

    for id in &ids {
        if workspace.find(*id).is_none() {
            return Err(CocoError::UnknownRecord(*id));
        }
    }

    let count = ids.len();
    workspace.selection = Some(ids);
    store.save(&workspace)?;
    println!("Selected {count} of {} records", workspace.records.len());
    Ok(())
}
