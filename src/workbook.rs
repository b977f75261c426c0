use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, Workbook};

use crate::error::Result;
use crate::ledger::Totals;
use crate::models::Transaction;

const MONEY_FORMAT: &str = "£#,##0.00";

/// Render the ledger as an in-memory `.xlsx` workbook: a single
/// `Transactions` sheet with three title rows, the column header, one row
/// per record, and a totals block two rows below the last data row.
pub fn render_workbook(
    records: &[Transaction],
    company: &str,
    account_label: &str,
) -> Result<Vec<u8>> {
    let totals = Totals::compute(records);

    let mut workbook = Workbook::new();
    // Pin the document creation time so identical record sets produce
    // byte-identical files.
    let properties =
        DocProperties::new().set_creation_datetime(&ExcelDateTime::from_ymd(2024, 1, 1)?);
    workbook.set_properties(&properties);
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Transactions")?;

    let date_format = Format::new().set_num_format("dd-mm");
    let money_format = Format::new().set_num_format(MONEY_FORMAT);

    worksheet.write_string(0, 0, "GENERAL LEDGER")?;
    worksheet.write_string(1, 0, format!("ACCOUNT: {account_label}"))?;
    worksheet.write_string(2, 0, company.to_uppercase())?;

    worksheet.write_string(3, 0, "Date")?;
    worksheet.write_string(3, 1, "Description")?;
    worksheet.write_string(3, 2, "Amount")?;
    worksheet.write_string(3, 3, "Type")?;

    for (i, rec) in records.iter().enumerate() {
        let row = 4 + i as u32;
        worksheet.write_datetime_with_format(row, 0, &rec.date, &date_format)?;
        worksheet.write_string(row, 1, &rec.description)?;
        worksheet.write_number_with_format(row, 2, rec.amount, &money_format)?;
        worksheet.write_string(row, 3, rec.category.as_str())?;
    }

    let label_row = 4 + records.len() as u32 + 1;
    worksheet.write_string(label_row, 0, "Total Expenditure")?;
    worksheet.write_string(label_row, 1, "Total Income")?;
    worksheet.write_string(label_row, 2, "Total Balance")?;
    worksheet.write_number_with_format(label_row + 1, 0, totals.expenditure, &money_format)?;
    worksheet.write_number_with_format(label_row + 1, 1, totals.income, &money_format)?;
    worksheet.write_number_with_format(label_row + 1, 2, totals.balance, &money_format)?;

    worksheet.autofit();

    Ok(workbook.save_to_buffer()?)
}
