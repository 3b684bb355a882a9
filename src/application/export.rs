// src/application/export.rs
use std::path::Path;

use crate::domain::{DomainError, Drug};

/// Spreadsheet column headers, in display order. These are part of the
/// export contract: downstream pharmacy tooling matches on the Korean
/// header text, so the set and order are fixed.
pub const COLUMN_HEADERS: [&str; 8] = [
    "품목기준코드",
    "보험코드",
    "약품명",
    "제조사",
    "제형",
    "장축 길이",
    "단축 길이",
    "두께",
];

/// One spreadsheet data row, already in column order. An `item_seq` of 0
/// is the normalized "absent" value and exports as a blank cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub item_seq: Option<i64>,
    pub edi_code: String,
    pub item_name: String,
    pub entp_name: String,
    pub form_code_name: String,
    pub leng_long: f64,
    pub leng_short: f64,
    pub thick: f64,
}

/// Map the saved list to export rows. Pure; an empty list yields no rows
/// (the writer still emits the header).
pub fn to_rows(drugs: &[Drug]) -> Vec<ExportRow> {
    drugs
        .iter()
        .map(|d| ExportRow {
            item_seq: (d.item_seq != 0).then_some(d.item_seq),
            edi_code: d.edi_code.clone(),
            item_name: d.item_name.clone(),
            entp_name: d.entp_name.clone(),
            form_code_name: d.form_code_name.clone(),
            leng_long: d.leng_long,
            leng_short: d.leng_short,
            thick: d.thick,
        })
        .collect()
}

/// Writes rows (under the fixed headers) to a spreadsheet file.
pub trait SpreadsheetWriter {
    fn write(&self, rows: &[ExportRow], path: &Path) -> Result<(), DomainError>;
}

pub struct ListExporter<W: SpreadsheetWriter> {
    writer: W,
}

impl<W: SpreadsheetWriter> ListExporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Export the saved list to `path`. Returns the number of data rows
    /// written (0 for an empty list, which still produces a header-only
    /// sheet).
    pub fn export(&self, drugs: &[Drug], path: &Path) -> Result<usize, DomainError> {
        let rows = to_rows(drugs);
        self.writer.write(&rows, path)?;
        Ok(rows.len())
    }
}
