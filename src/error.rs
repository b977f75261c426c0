use thiserror::Error;

#[derive(Error, Debug)]
pub enum CocoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Record {record}: invalid date '{raw}'")]
    DateParse { record: u32, raw: String },

    #[error("Record {record}: invalid amount '{raw}'")]
    AmountParse { record: u32, raw: String },

    #[error("Statement contained no transactions")]
    EmptyInput,

    #[error("No category assigned for record {0}")]
    MissingCategory(u32),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown record id: {0}")]
    UnknownRecord(u32),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Session error: {0}")]
    Session(String),
}

pub type Result<T> = std::result::Result<T, CocoError>;
