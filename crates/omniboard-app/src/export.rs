//! PNG export of the committed drawing.

use omniboard_render::{Board, RenderError};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Application name, used as the export filename prefix.
pub const APP_NAME: &str = "omniboard";

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("render error: {0}")]
    Render(#[from] RenderError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Export filename convention: `<app-name>-<timestamp>.png`.
pub fn export_filename(timestamp_millis: u128) -> String {
    format!("{APP_NAME}-{timestamp_millis}.png")
}

/// Write the committed drawing (full history replay, no preview overlay)
/// as a PNG file into `dir`. Returns the written path.
pub fn export_png(board: &Board, dir: &Path) -> Result<PathBuf, ExportError> {
    let bytes = board.snapshot_png()?;
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let path = dir.join(export_filename(millis));
    std::fs::write(&path, bytes)?;
    log::info!("exported drawing to {}", path.display());
    Ok(path)
}
