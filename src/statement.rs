use std::io::BufRead;
use std::path::Path;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{CocoError, Result};
use crate::models::{Category, Transaction};

// Statement exports arrive with NBSPs, replacement characters and stray
// tabs/CRs from whatever produced them; all become plain spaces.
fn noise_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\u{00A0}\u{FFFD}\t\r]").unwrap())
}

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

fn trailing_date() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{2}-\d{2}-\d{4})\s*$").unwrap())
}

/// Day-first date as the bank export writes it: 05/03/2024 or 05-03-2024.
fn parse_day_first(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d-%m-%Y"))
        .ok()
}

/// Parse a plaintext statement export into transaction records.
///
/// A record block is a run of `Date:` / `Description:` / `Amount:` lines;
/// a new `Date:` line seals the block before it, and end of input seals
/// the last one. Lines without one of the three prefixes are boilerplate
/// and dropped, as are `Description:`/`Amount:` lines with no open record.
/// A malformed date or amount on a recognized line fails the whole parse,
/// carrying the record ordinal and the offending text.
pub fn parse_statement<R: BufRead>(reader: R) -> Result<Vec<Transaction>> {
    let mut records = Vec::new();
    let mut current: Option<Transaction> = None;
    let mut next_id: u32 = 0;

    for line in reader.lines() {
        let line = line?;
        let line = noise_chars().replace_all(&line, " ");
        let line = whitespace_runs().replace_all(&line, " ");
        let line = line.trim();

        if let Some(rest) = line.strip_prefix("Date:") {
            if let Some(rec) = current.take() {
                records.push(rec);
            }
            let raw = rest.trim();
            let date = parse_day_first(raw).ok_or_else(|| CocoError::DateParse {
                record: next_id,
                raw: raw.to_string(),
            })?;
            current = Some(Transaction {
                id: next_id,
                date,
                description: String::new(),
                amount: 0.0,
                category: Category::Uncategorized,
            });
            next_id += 1;
        } else if let Some(rest) = line.strip_prefix("Description:") {
            if let Some(rec) = current.as_mut() {
                rec.description = rest.trim().to_string();
                // A trailing dd-mm-yyyy in the description is the
                // transaction's own date and supersedes the settlement
                // date from the Date: line. If it doesn't parse as a real
                // date the Date: value stands.
                if let Some(caps) = trailing_date().captures(&rec.description) {
                    if let Ok(date) = NaiveDate::parse_from_str(&caps[1], "%d-%m-%Y") {
                        rec.date = date;
                    }
                }
            }
        } else if let Some(rest) = line.strip_prefix("Amount:") {
            if let Some(rec) = current.as_mut() {
                let stripped = rest.replace("GBP", "");
                let raw = stripped.trim();
                rec.amount = raw.parse().map_err(|_| CocoError::AmountParse {
                    record: rec.id,
                    raw: raw.to_string(),
                })?;
            }
        }
    }

    if let Some(rec) = current.take() {
        records.push(rec);
    }
    Ok(records)
}

pub fn parse_statement_file(path: &Path) -> Result<Vec<Transaction>> {
    let file = std::fs::File::open(path)?;
    parse_statement(std::io::BufReader::new(file))
}
