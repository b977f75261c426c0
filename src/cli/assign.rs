use crate::error::{CocoError, Result};
use crate::models::Category;
use crate::session::SessionStore;
use crate::settings::get_data_dir;

pub fn run(id: u32, category: &str) -> Result<()> {
    let Ok(category) = category.parse::<Category>() else {
        let valid: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        println!("Valid categories: {}", valid.join(", "));
        return Err(CocoError::UnknownCategory(category.to_string()));
    };

    let store = SessionStore::new(&get_data_dir());
    let mut workspace = store.load()?;
    let Some(rec) = workspace.find(id) else {
        return Err(CocoError::UnknownRecord(id));
    };
    let description = rec.description.clone();

    workspace.assignments.insert(id, category);
    store.save(&workspace)?;

    println!("Record {id} ({description}) -> {}", category.as_str());
    Ok(())
}
