use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use super::row::{HEADER, ResultRow};
use crate::error::CloudIpError;

const SHEET_NAME: &str = "Sheet1";

/// Write a single-sheet workbook with a bold header row
pub fn write_xlsx(path: &Path, rows: &[ResultRow]) -> Result<(), CloudIpError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, title) in (0u16..).zip(HEADER) {
        worksheet.write_string_with_format(0, col, title, &header_format)?;
    }

    for (line, row) in (1u32..).zip(rows) {
        for (col, cell) in (0u16..).zip(row.cells()) {
            worksheet.write_string(line, col, cell)?;
        }
    }
    worksheet.autofit();

    workbook.save(path)?;
    Ok(())
}
