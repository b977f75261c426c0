pub mod assign;
pub mod clear;
pub mod export;
pub mod init;
pub mod parse;
pub mod select;
pub mod show;
pub mod status;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "coco", about = "Statement-to-ledger bookkeeping CLI for a small craft shop.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up coco: choose a data directory and ledger labels.
    Init {
        /// Path for coco data (default: ~/Documents/coco)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
        /// Business name printed in the spreadsheet title block
        #[arg(long)]
        company: Option<String>,
        /// Account label printed in the spreadsheet title block
        #[arg(long = "account-label")]
        account_label: Option<String>,
    },
    /// Parse a plaintext statement export into the workspace.
    Parse {
        /// Path to the statement text file
        file: String,
        /// Succeed even when the statement yields no transactions
        #[arg(long = "allow-empty")]
        allow_empty: bool,
    },
    /// Show the workspace transactions and running totals.
    Show,
    /// Restrict the working set to the given record ids.
    Select {
        /// Record ids to keep (from `coco show`)
        ids: Vec<u32>,
        /// Clear the selection so every record is exported again
        #[arg(long)]
        all: bool,
    },
    /// Assign a bookkeeping category to a record.
    Assign {
        /// Record id from `coco show`
        id: u32,
        /// Ingredients, Packaging, Utilities, Advertising, Artwork or Uncategorized
        category: String,
    },
    /// Export the working set as a finalized ledger.
    Export {
        #[command(subcommand)]
        command: ExportCommands,
    },
    /// Show current settings and workspace statistics.
    Status,
    /// Discard the parsed workspace.
    Clear,
}

#[derive(Subcommand)]
pub enum ExportCommands {
    /// Comma-delimited ledger with a £-prefixed totals row.
    Csv {
        /// Output path (default: <data_dir>/exports/MONTH_YYYY.csv)
        #[arg(long)]
        output: Option<String>,
        /// Render full day/month/year dates instead of day-month
        #[arg(long = "full-dates")]
        full_dates: bool,
    },
    /// Formatted workbook with title rows and a totals block.
    Xlsx {
        /// Output path (default: <data_dir>/exports/MONTH_YYYY.xlsx)
        #[arg(long)]
        output: Option<String>,
    },
}
