use crate::error::Result;
use crate::settings::{
    load_settings, save_settings, settings_file_exists, shellexpand_path, Settings,
};

pub fn run(
    data_dir: Option<String>,
    company: Option<String>,
    account_label: Option<String>,
) -> Result<()> {
    let mut settings = if settings_file_exists() {
        load_settings()
    } else {
        Settings::default()
    };

    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(&dir);
    }
    if let Some(name) = company {
        settings.company_name = name;
    }
    if let Some(label) = account_label {
        settings.account_label = label;
    }

    std::fs::create_dir_all(&settings.data_dir)?;
    save_settings(&settings)?;

    println!("Data dir:  {}", settings.data_dir);
    println!(
        "Company:   {}",
        if settings.company_name.is_empty() {
            "(not set)"
        } else {
            &settings.company_name
        }
    );
    println!("Account:   {}", settings.account_label);
    Ok(())
}
