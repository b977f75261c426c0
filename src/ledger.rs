use std::collections::BTreeMap;

use crate::error::{CocoError, Result};
use crate::fmt::money;
use crate::models::{Category, Transaction};

/// Round to 2 decimal places, half away from zero. Applied to every total
/// in both export formats.
pub fn round2(val: f64) -> f64 {
    (val * 100.0).round() / 100.0
}

/// Income / expenditure / net balance over a record set. Expenditure keeps
/// its sign (it is a sum of negative amounts).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expenditure: f64,
    pub balance: f64,
}

impl Totals {
    pub fn compute(records: &[Transaction]) -> Self {
        let mut income = 0.0;
        let mut expenditure = 0.0;
        let mut balance = 0.0;
        for rec in records {
            if rec.amount > 0.0 {
                income += rec.amount;
            } else if rec.amount < 0.0 {
                expenditure += rec.amount;
            }
            balance += rec.amount;
        }
        Totals {
            income: round2(income),
            expenditure: round2(expenditure),
            balance: round2(balance),
        }
    }
}

/// How per-row dates are rendered in the delimited export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// Day and month only, e.g. `05-03`. The ledger is kept per month.
    DayMonth,
    /// Full day/month/year, e.g. `05/03/2024`.
    DayMonthYear,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            DateStyle::DayMonth => "%d-%m",
            DateStyle::DayMonthYear => "%d/%m/%Y",
        }
    }
}

/// Set each record's category from an id-keyed assignment map.
///
/// An empty map is a no-op: nothing was assigned and every record stays
/// `Uncategorized`. A non-empty map must cover every record in the set:
/// the caller built it against these ids, so a gap is a contract
/// violation rather than something to default.
pub fn apply_assignments(
    records: &mut [Transaction],
    assignments: &BTreeMap<u32, Category>,
) -> Result<()> {
    if assignments.is_empty() {
        return Ok(());
    }
    for rec in records.iter_mut() {
        rec.category = assignments
            .get(&rec.id)
            .copied()
            .ok_or(CocoError::MissingCategory(rec.id))?;
    }
    Ok(())
}

/// Render the ledger as comma-delimited text: the column header, a
/// `£`-prefixed totals row directly beneath it, then one row per record in
/// input order. An empty record set yields just the header and totals row.
pub fn render_csv(records: &[Transaction], style: DateStyle) -> Result<String> {
    let totals = Totals::compute(records);
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(vec![]);

    wtr.write_record([
        "Date",
        "Description",
        "Amount",
        "Type",
        "Total Expenditure",
        "Total Income",
        "Total Balance",
    ])?;
    let expenditure = money(totals.expenditure);
    let income = money(totals.income);
    let balance = money(totals.balance);
    wtr.write_record([
        "",
        "",
        "",
        "",
        expenditure.as_str(),
        income.as_str(),
        balance.as_str(),
    ])?;

    for rec in records {
        let date = rec.date.format(style.pattern()).to_string();
        let amount = rec.amount.to_string();
        wtr.write_record([
            date.as_str(),
            rec.description.as_str(),
            amount.as_str(),
            rec.category.as_str(),
        ])?;
    }

    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: u32, amount: f64, description: &str) -> Transaction {
        Transaction {
            id,
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            description: description.to_string(),
            amount,
            category: Category::Uncategorized,
        }
    }

    #[test]
    fn test_totals() {
        let records = vec![
            record(0, -10.00, "a"),
            record(1, 25.50, "b"),
            record(2, -3.25, "c"),
        ];
        let totals = Totals::compute(&records);
        assert_eq!(totals.expenditure, -13.25);
        assert_eq!(totals.income, 25.50);
        assert_eq!(totals.balance, 12.25);
    }

    #[test]
    fn test_totals_zero_amount_is_neither_income_nor_expenditure() {
        let records = vec![record(0, 0.0, "free")];
        let totals = Totals::compute(&records);
        assert_eq!(totals.income, 0.0);
        assert_eq!(totals.expenditure, 0.0);
        assert_eq!(totals.balance, 0.0);
    }

    #[test]
    fn test_round2_half_away_from_zero() {
        // 0.125 is exact in binary, so this genuinely exercises the tie
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(12.3449), 12.34);
        assert_eq!(round2(12.345001), 12.35);
    }

    #[test]
    fn test_apply_assignments_sets_categories() {
        let mut records = vec![record(0, -1.0, "a"), record(1, 2.0, "b")];
        let mut map = BTreeMap::new();
        map.insert(0, Category::Ingredients);
        map.insert(1, Category::Artwork);
        apply_assignments(&mut records, &map).unwrap();
        assert_eq!(records[0].category, Category::Ingredients);
        assert_eq!(records[1].category, Category::Artwork);
    }

    #[test]
    fn test_apply_assignments_empty_map_is_noop() {
        let mut records = vec![record(0, -1.0, "a")];
        apply_assignments(&mut records, &BTreeMap::new()).unwrap();
        assert_eq!(records[0].category, Category::Uncategorized);
    }

    #[test]
    fn test_apply_assignments_missing_id_is_an_error() {
        let mut records = vec![record(0, -1.0, "a"), record(7, 2.0, "b")];
        let mut map = BTreeMap::new();
        map.insert(0, Category::Ingredients);
        let err = apply_assignments(&mut records, &map).unwrap_err();
        assert!(matches!(err, CocoError::MissingCategory(7)));
    }

    #[test]
    fn test_render_csv_layout() {
        let mut records = vec![
            record(0, -42.10, "CARD PAYMENT FLOUR WHOLESALE"),
            record(1, 95.00, "PAYPAL TRANSFER ETSY SALE"),
        ];
        records[1].category = Category::Artwork;
        let out = render_csv(&records, DateStyle::DayMonth).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            "Date,Description,Amount,Type,Total Expenditure,Total Income,Total Balance"
        );
        assert_eq!(lines[1], ",,,,-£42.10,£95.00,£52.90");
        assert_eq!(lines[2], "05-03,CARD PAYMENT FLOUR WHOLESALE,-42.1,Uncategorized");
        assert_eq!(lines[3], "05-03,PAYPAL TRANSFER ETSY SALE,95,Artwork");
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_render_csv_full_dates() {
        let records = vec![record(0, 1.0, "x")];
        let out = render_csv(&records, DateStyle::DayMonthYear).unwrap();
        assert!(out.contains("05/03/2024,x,1,Uncategorized"));
    }

    #[test]
    fn test_render_csv_empty_is_header_and_totals_only() {
        let out = render_csv(&[], DateStyle::DayMonth).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], ",,,,£0.00,£0.00,£0.00");
    }

    #[test]
    fn test_render_csv_is_deterministic() {
        let records = vec![record(0, -1.5, "same"), record(1, 2.5, "again")];
        let a = render_csv(&records, DateStyle::DayMonth).unwrap();
        let b = render_csv(&records, DateStyle::DayMonth).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_description_quotes_round_trip() {
        let tricky = "He said \"hello, again\" twice";
        let records = vec![record(0, -1.0, tricky)];
        let out = render_csv(&records, DateStyle::DayMonth).unwrap();
        // Embedded quotes are doubled on the wire
        assert!(out.contains("\"He said \"\"hello, again\"\" twice\""));

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(out.as_bytes());
        let rows: Vec<csv::StringRecord> =
            rdr.records().collect::<std::result::Result<_, _>>().unwrap();
        assert_eq!(&rows[2][1], tricky);
    }
}
