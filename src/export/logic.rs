use crate::core::calculator::AggregateOptions;
use crate::core::calculator::daily::daily_totals;
use crate::core::calculator::weekly::weekly_totals;
use crate::db::store::PunchStore;
use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_absolute, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::punches_to_rows;
use crate::export::{ExportData, ExportFormat};
use crate::ui::messages::warning;
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::path::Path;

fn write_rows<T: Serialize>(format: ExportFormat, rows: &[T], path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
    }
}

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export punches or derived totals to `file`.
    /// Returns the number of rows written (0 when there was nothing to export).
    pub fn export<S: PunchStore, Tz: TimeZone>(
        store: &S,
        format: ExportFormat,
        data: ExportData,
        file: &str,
        force: bool,
        now: &DateTime<Tz>,
        opts: &AggregateOptions,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_absolute(path)?;

        let punches = store.list_all();
        if punches.is_empty() {
            warning("No punches recorded, nothing to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match data {
            ExportData::Punches => {
                let rows = punches_to_rows(&punches, &now.timezone());
                write_rows(format, &rows, path)?;
                Ok(rows.len())
            }
            ExportData::Daily => {
                let rows = daily_totals(&punches, now, opts);
                write_rows(format, &rows, path)?;
                Ok(rows.len())
            }
            ExportData::Weekly => {
                let rows = weekly_totals(&punches, now, opts);
                write_rows(format, &rows, path)?;
                Ok(rows.len())
            }
        }
    }
}
