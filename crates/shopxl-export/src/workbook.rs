//! `.xlsx` encoding of an extracted result set.
//!
//! One worksheet, a bold header row taken from [`FLAT_RECORD_COLUMNS`], then
//! one row per record in the order given. Text stays text, numeric prices
//! become number cells, availability becomes a boolean cell, and absent
//! values or empty strings leave the cell blank.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use shopxl_core::{FlatRecord, PriceValue, FLAT_RECORD_COLUMNS};

use crate::error::ExportError;

/// Name of the single worksheet in every exported workbook.
pub const SHEET_NAME: &str = "Products";

/// Conventional output filename for a storefront, e.g.
/// `"shop.example_products.xlsx"`.
#[must_use]
pub fn export_filename(hostname: &str) -> String {
    format!("{hostname}_products.xlsx")
}

/// Encodes `records` as an in-memory `.xlsx` file.
///
/// # Errors
///
/// Returns [`ExportError::Xlsx`] if the workbook cannot be assembled.
pub fn render_workbook(records: &[FlatRecord]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = build_workbook(records)?;
    Ok(workbook.save_to_buffer()?)
}

/// Encodes `records` and writes the workbook to `path`.
///
/// The bytes are rendered before the file is created, so an encoding failure
/// never leaves a truncated file behind.
///
/// # Errors
///
/// Returns [`ExportError::Xlsx`] on encoding failure and [`ExportError::Io`]
/// if the file cannot be written.
pub fn write_workbook(records: &[FlatRecord], path: &Path) -> Result<(), ExportError> {
    let bytes = render_workbook(records)?;
    std::fs::write(path, &bytes).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        rows = records.len(),
        bytes = bytes.len(),
        "wrote workbook"
    );
    Ok(())
}

fn build_workbook(records: &[FlatRecord]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let header = Format::new().set_bold();
    for (col, name) in (0u16..).zip(FLAT_RECORD_COLUMNS) {
        sheet.write_string_with_format(0, col, name, &header)?;
    }

    for (row, record) in (1u32..).zip(records) {
        write_record(sheet, row, record)?;
    }

    Ok(workbook)
}

fn write_record(sheet: &mut Worksheet, row: u32, record: &FlatRecord) -> Result<(), XlsxError> {
    write_text(sheet, row, 0, &record.handle)?;
    write_text(sheet, row, 1, &record.title)?;
    write_opt_text(sheet, row, 2, record.vendor.as_deref())?;
    write_opt_text(sheet, row, 3, record.product_type.as_deref())?;
    write_text(sheet, row, 4, &record.tags)?;
    write_text(sheet, row, 5, &record.image_url)?;
    write_text(sheet, row, 6, &record.variant_title)?;
    match &record.price {
        Some(PriceValue::Text(price)) => write_text(sheet, row, 7, price)?,
        Some(number @ PriceValue::Number(_)) => match number.as_number() {
            Some(value) => {
                sheet.write_number(row, 7, value)?;
            }
            None => write_text(sheet, row, 7, &number.to_string())?,
        },
        None => {}
    }
    write_opt_text(sheet, row, 8, record.sku.as_deref())?;
    if let Some(available) = record.available {
        sheet.write_boolean(row, 9, available)?;
    }
    Ok(())
}

/// Writes `value` as a text cell.
///
/// Empty strings (no tags, no image) are deliberately left as blank cells
/// rather than empty-string cells; spreadsheet apps render both the same.
fn write_text(sheet: &mut Worksheet, row: u32, col: u16, value: &str) -> Result<(), XlsxError> {
    if !value.is_empty() {
        sheet.write_string(row, col, value)?;
    }
    Ok(())
}

fn write_opt_text(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<&str>,
) -> Result<(), XlsxError> {
    match value {
        Some(v) => write_text(sheet, row, col, v),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "workbook_test.rs"]
mod tests;
