//! Spreadsheet workbook serialization

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use rust_xlsxwriter::{ColNum, DocProperties, ExcelDateTime, RowNum, Workbook};
use tracing::debug;

use super::table::{CellValue, ExportRecord, ExportTable};
use crate::error::{Error, Result};

/// MIME type of an Office Open XML workbook
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Default name of the single exported sheet
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Workbook-level name covering the header and every exported row
pub const EXPORT_RANGE_NAME: &str = "ExportData";

/// Converts a table into a workbook binary
pub trait WorkbookSerializer {
    fn serialize(&self, table: &ExportTable) -> Result<Vec<u8>>;
}

/// Single-sheet `.xlsx` serializer
///
/// The document creation time is pinned so the same table always produces
/// byte-identical output.
#[derive(Debug, Clone)]
pub struct XlsxSerializer {
    sheet_name: String,
}

impl Default for XlsxSerializer {
    fn default() -> Self {
        Self::new(DEFAULT_SHEET_NAME)
    }
}

impl XlsxSerializer {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
        }
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }
}

impl WorkbookSerializer for XlsxSerializer {
    fn serialize(&self, table: &ExportTable) -> Result<Vec<u8>> {
        table.validate()?;

        let mut workbook = Workbook::new();
        let created = ExcelDateTime::from_ymd(2000, 1, 1)?;
        workbook.set_properties(&DocProperties::new().set_creation_datetime(&created));

        let columns = table.columns();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(self.sheet_name.as_str())?;

        for (col, name) in columns.iter().enumerate() {
            worksheet.write_string(0, col_num(col)?, *name)?;
        }

        for (index, record) in table.records().iter().enumerate() {
            let row = row_num(index + 1)?;
            for (col, value) in record.values().enumerate() {
                let col = col_num(col)?;
                match value {
                    CellValue::Number(n) => worksheet.write_number(row, col, *n)?,
                    // Excel has no empty string cell; blanks are implied
                    CellValue::Text(s) if s.is_empty() => continue,
                    CellValue::Text(s) => worksheet.write_string(row, col, s.as_str())?,
                };
            }
        }

        // Rows made only of blanks leave no trace in the sheet data, so the
        // full extent is recorded as a defined name
        if !columns.is_empty() {
            let reference = format!(
                "='{}'!$A$1:${}${}",
                self.sheet_name.replace('\'', "''"),
                column_letters(col_num(columns.len() - 1)?),
                u64::from(row_num(table.len())?) + 1
            );
            workbook.define_name(EXPORT_RANGE_NAME, &reference)?;
        }

        let bytes = workbook.save_to_buffer()?;
        debug!(
            "Serialized {} records into {} bytes (sheet: {})",
            table.len(),
            bytes.len(),
            self.sheet_name
        );
        Ok(bytes)
    }
}

fn row_num(index: usize) -> Result<RowNum> {
    RowNum::try_from(index).map_err(|_| Error::Encoding(format!("row {} out of range", index)))
}

fn col_num(index: usize) -> Result<ColNum> {
    ColNum::try_from(index)
        .map_err(|_| Error::Encoding(format!("column {} out of range", index)))
}

/// Zero-based column index to spreadsheet letters (0 -> A, 26 -> AA)
fn column_letters(col: ColNum) -> String {
    let mut n = u32::from(col) + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

/// Number of data rows recorded under [`EXPORT_RANGE_NAME`], if present
fn recorded_row_count(defined_names: &[(String, String)]) -> Option<u32> {
    let (_, reference) = defined_names
        .iter()
        .find(|(name, _)| name == EXPORT_RANGE_NAME)?;
    let last_row: u32 = reference.rsplit('$').next()?.trim().parse().ok()?;
    last_row.checked_sub(1)
}

/// Parse the first sheet of a workbook back into a table
///
/// The first row is taken as the header; every following row becomes one
/// record. Blank cells read back as empty text. Workbooks written by
/// [`XlsxSerializer`] carry their row count, so trailing blank records are
/// kept; for other workbooks the used range decides.
pub fn read_workbook(bytes: &[u8]) -> Result<ExportTable> {
    let mut workbook = Xlsx::new(Cursor::new(bytes))?;
    let recorded_rows = recorded_row_count(workbook.defined_names());

    let Some(range) = workbook.worksheet_range_at(0) else {
        return Ok(ExportTable::default());
    };
    let range = range?;

    let Some((first_row, first_col)) = range.start() else {
        return Ok(ExportTable::default());
    };
    let width = u32::try_from(range.width())
        .map_err(|_| Error::Encoding("sheet too wide".to_string()))?;

    let columns: Vec<String> = (0..width)
        .map(|col| {
            range
                .get_value((first_row, first_col + col))
                .map(|cell| cell.to_string())
                .unwrap_or_default()
        })
        .collect();

    let data_rows = match recorded_rows {
        Some(rows) => rows,
        None => u32::try_from(range.height().saturating_sub(1))
            .map_err(|_| Error::Encoding("sheet too tall".to_string()))?,
    };

    let table = (1..=data_rows)
        .map(|row| {
            columns
                .iter()
                .zip(0..width)
                .map(|(column, col)| {
                    let value = range
                        .get_value((first_row + row, first_col + col))
                        .map(cell_value)
                        .unwrap_or_else(|| CellValue::Text(String::new()));
                    (column.clone(), value)
                })
                .collect::<ExportRecord>()
        })
        .collect();

    Ok(table)
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Empty => CellValue::Text(String::new()),
        other => CellValue::Text(other.to_string()),
    }
}
