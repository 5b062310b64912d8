// src/export/logic.rs

use crate::core::listing::Listing;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::Report;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::{Entity, RowStyle};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the rows of `entity` (optionally filtered by `search`).
    ///
    /// - `file` must be an absolute path (`~/` is expanded)
    /// - an existing file is overwritten only with `force` or after confirmation
    /// - nothing is written when no row matches
    ///
    /// Returns the number of rows written.
    pub fn export(
        pool: &DbPool,
        entity: Entity,
        format: ExportFormat,
        file: &str,
        search: Option<&str>,
        force: bool,
        style: &RowStyle,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let mut listing = Listing::load(pool, entity, style)?;
        if let Some(needle) = search {
            listing.search(needle);
        }

        if listing.is_empty() {
            warning(format!("No {} records to export.", entity.label()));
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let report = Report::from_listing(entity, &listing, style.lang);
        Self::write(&report, format, &path)?;
        Ok(report.rows.len())
    }

    pub fn write(report: &Report, format: ExportFormat, path: &std::path::Path) -> AppResult<()> {
        match format {
            ExportFormat::Csv => export_csv(report, path),
            ExportFormat::Json => export_json(report, path),
            ExportFormat::Xlsx => export_xlsx(report, path),
            ExportFormat::Pdf => export_pdf(report, path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::crud::CrudLogic;
    use crate::db::migrate::run_pending_migrations;
    use crate::models::Invoice;
    use crate::models::status::InvoiceStatus;
    use crate::utils::date::parse_date;
    use std::fs;

    fn pool_with_invoices() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        run_pending_migrations(&pool.conn).unwrap();
        for (id, amount, status) in [
            ("001", 1500.0, InvoiceStatus::Paid),
            ("002", 2450.5, InvoiceStatus::Pending),
        ] {
            CrudLogic::add(
                &pool,
                &Invoice {
                    id: id.into(),
                    number: format!("INV-2024-{id}"),
                    date: parse_date("2024-01-15").unwrap(),
                    amount,
                    status,
                },
            )
            .unwrap();
        }
        pool
    }

    fn out(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("bizdesk_export_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let p = dir.join(name);
        let _ = fs::remove_file(&p);
        p
    }

    #[test]
    fn relative_paths_are_refused() {
        let pool = pool_with_invoices();
        let res = ExportLogic::export(
            &pool,
            Entity::Invoice,
            ExportFormat::Csv,
            "relative.csv",
            None,
            true,
            &RowStyle::default(),
        );
        assert!(matches!(res, Err(AppError::Export(_))));
    }

    #[test]
    fn csv_export_uses_display_rows() {
        let pool = pool_with_invoices();
        let path = out("invoices.csv");
        let n = ExportLogic::export(
            &pool,
            Entity::Invoice,
            ExportFormat::Csv,
            &path.to_string_lossy(),
            Some("pending"),
            true,
            &RowStyle::default(),
        )
        .unwrap();
        assert_eq!(n, 1);

        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("ID,Number,Date,Amount,Status"));
        assert_eq!(
            lines.next(),
            Some("002,INV-2024-002,2024-01-15,\"$2,450.50\",Pending")
        );
    }

    #[test]
    fn no_match_writes_nothing() {
        let pool = pool_with_invoices();
        let path = out("none.json");
        let n = ExportLogic::export(
            &pool,
            Entity::Invoice,
            ExportFormat::Json,
            &path.to_string_lossy(),
            Some("zzz"),
            true,
            &RowStyle::default(),
        )
        .unwrap();
        assert_eq!(n, 0);
        assert!(!path.exists());
    }
}
