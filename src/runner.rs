// Batch processing of files passed on the command line

use std::path::{Path, PathBuf};

use crate::oracle::Oracle;
use crate::refine::{RefineOutcome, RefinementController};

/// Result of one batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    pub refined: Vec<(PathBuf, RefineOutcome)>,
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    pub fn total_updates(&self) -> usize {
        self.refined.iter().map(|(_, outcome)| outcome.updates()).sum()
    }
}

/// True when the path text ends with `.{extension}` (leading dot optional).
///
/// Matches on the raw string, so a bare `.py` counts and `dir.py/` does not.
pub fn is_supported(path: &Path, extension: &str) -> bool {
    let suffix = format!(".{}", extension.trim_start_matches('.'));
    path.to_string_lossy().ends_with(&suffix)
}

/// Turn a raw command-line argument into a path, dropping stray whitespace
pub fn normalize_arg(arg: &str) -> PathBuf {
    PathBuf::from(arg.trim())
}

/// Refine each file in order.
///
/// Files with the wrong extension are skipped. A file that fails is logged
/// and recorded, and the batch moves on to the next one.
pub async fn run_batch<O: Oracle>(
    controller: &mut RefinementController<O>,
    files: &[PathBuf],
    extension: &str,
) -> BatchReport {
    let mut report = BatchReport::default();

    for path in files {
        tracing::info!("Looking at {}", path.display());

        if !is_supported(path, extension) {
            tracing::info!("Skipping {}: not a .{} file", path.display(), extension);
            report.skipped.push(path.clone());
            continue;
        }

        tracing::info!("Processing {}", path.display());
        match controller.refine(path).await {
            Ok(outcome) => report.refined.push((path.clone(), outcome)),
            Err(e) => {
                tracing::error!("Failed to refine {}: {:#}", path.display(), e);
                report.failed.push((path.clone(), format!("{:#}", e)));
            }
        }
    }

    tracing::info!(
        refined = report.refined.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        updates = report.total_updates(),
        "Batch complete"
    );

    report
}
