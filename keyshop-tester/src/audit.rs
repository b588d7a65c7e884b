//! Offline check of a saved cart slot.
//!
//! The file is read once and decoded exactly as the storefront would on
//! start-up, without touching the file itself.
use std::fs;
use std::path::{Path, PathBuf};

use keyshop_core::{CART_STORAGE_KEY, CartPersistence, LineItem, LoadReport, MemoryStorage};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a cart: {}", path.display(), describe(report))]
    Corrupt { path: PathBuf, report: LoadReport },
}

#[derive(Debug, Clone)]
pub struct AuditSummary {
    pub path: PathBuf,
    pub report: LoadReport,
    pub lines: Vec<LineItem>,
}

impl AuditSummary {
    /// Every stored entry decoded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        matches!(self.report, LoadReport::Loaded { .. } | LoadReport::Absent)
    }

    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.lines.iter().map(LineItem::line_total).sum()
    }
}

pub fn describe(report: &LoadReport) -> String {
    match report {
        LoadReport::Absent => "no cart stored".to_string(),
        LoadReport::Loaded { count } => format!("{count} line(s) decoded"),
        LoadReport::Partial { kept, dropped } => {
            format!("{kept} line(s) decoded, {dropped} malformed entr(ies) dropped")
        }
        LoadReport::NotJson => "payload is not valid JSON".to_string(),
        LoadReport::NotArray => "payload is JSON but not an array".to_string(),
        LoadReport::Unreadable => "storage could not be read".to_string(),
    }
}

/// Decode the cart slot saved at `path`.
///
/// # Errors
///
/// Fails when the file cannot be read or holds no usable cart at all.
pub fn audit_file(path: &Path) -> Result<AuditSummary, AuditError> {
    let raw = fs::read_to_string(path).map_err(|source| AuditError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let persistence =
        CartPersistence::new(MemoryStorage::with_item(CART_STORAGE_KEY, &raw));
    let (lines, report) = persistence.load_with_report();
    log::debug!("Audited {}: {report:?}", path.display());

    match report {
        LoadReport::NotJson | LoadReport::NotArray | LoadReport::Unreadable => {
            Err(AuditError::Corrupt {
                path: path.to_path_buf(),
                report,
            })
        }
        _ => Ok(AuditSummary {
            path: path.to_path_buf(),
            report,
            lines,
        }),
    }
}
