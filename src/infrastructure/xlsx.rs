// src/infrastructure/xlsx.rs
use crate::application::export::{ExportRow, SpreadsheetWriter, COLUMN_HEADERS};
use crate::constants::EXPORT_SHEET_NAME;
use crate::domain::DomainError;
use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::Path;
use tracing::debug;

/// `.xlsx` writer for the saved-drug list. One fixed-name worksheet, a
/// header row, one data row per drug.
pub struct XlsxExporter;

impl XlsxExporter {
    pub fn new() -> Self {
        Self
    }
}

fn as_export_error(e: XlsxError) -> DomainError {
    DomainError::Export(format!("Failed to build worksheet: {}", e))
}

impl SpreadsheetWriter for XlsxExporter {
    fn write(&self, rows: &[ExportRow], path: &Path) -> Result<(), DomainError> {
        debug!(path = %path.display(), rows = rows.len(), "Writing xlsx export");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(EXPORT_SHEET_NAME).map_err(as_export_error)?;

        for (col, header) in COLUMN_HEADERS.iter().enumerate() {
            sheet
                .write_string(0, col as u16, *header)
                .map_err(as_export_error)?;
        }

        for (i, row) in rows.iter().enumerate() {
            let r = (i + 1) as u32;
            match row.item_seq {
                Some(code) => sheet.write_number(r, 0, code as f64),
                None => sheet.write_string(r, 0, ""),
            }
            .map_err(as_export_error)?;
            sheet
                .write_string(r, 1, row.edi_code.as_str())
                .map_err(as_export_error)?;
            sheet
                .write_string(r, 2, row.item_name.as_str())
                .map_err(as_export_error)?;
            sheet
                .write_string(r, 3, row.entp_name.as_str())
                .map_err(as_export_error)?;
            sheet
                .write_string(r, 4, row.form_code_name.as_str())
                .map_err(as_export_error)?;
            sheet
                .write_number(r, 5, row.leng_long)
                .map_err(as_export_error)?;
            sheet
                .write_number(r, 6, row.leng_short)
                .map_err(as_export_error)?;
            sheet
                .write_number(r, 7, row.thick)
                .map_err(as_export_error)?;
        }

        workbook.save(path).map_err(|e| {
            DomainError::Export(format!("Failed to write {}: {}", path.display(), e))
        })?;

        Ok(())
    }
}
