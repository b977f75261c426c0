use crate::error::Result;
use crate::session::SessionStore;
use crate::settings::get_data_dir;

pub fn run() -> Result<()> {
    let store = SessionStore::new(&get_data_dir());
    store.clear()?;
    println!("Workspace cleared");
    Ok(())
}
