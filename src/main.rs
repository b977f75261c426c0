mod cli;
mod error;
mod fmt;
mod ledger;
mod models;
mod session;
mod settings;
mod statement;
mod workbook;

use clap::Parser;

use cli::{Cli, Commands, ExportCommands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init {
            data_dir,
            company,
            account_label,
        } => cli::init::run(data_dir, company, account_label),
        Commands::Parse { file, allow_empty } => cli::parse::run(&file, allow_empty),
        Commands::Show => cli::show::run(),
        Commands::Select { ids, all } => cli::select::run(ids, all),
        Commands::Assign { id, category } => cli::assign::run(id, &category),
        Commands::Export { command } => match command {
            ExportCommands::Csv { output, full_dates } => cli::export::csv(output, full_dates),
            ExportCommands::Xlsx { output } => cli::export::xlsx(output),
        },
        Commands::Status => cli::status::run(),
        Commands::Clear => cli::clear::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
