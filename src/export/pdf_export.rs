// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::Report;
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::ui::messages::info;
use std::path::Path;

/// Tables wider than this go landscape.
const LANDSCAPE_FROM_COLUMNS: usize = 7;

pub(crate) fn export_pdf(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = if report.headers.len() >= LANDSCAPE_FROM_COLUMNS {
        PdfManager::landscape()
    } else {
        PdfManager::new()
    };
    pdf.write_table(&report.title, &report.headers, &report.rows);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
