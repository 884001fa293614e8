#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Sync the analysis pipeline's chart PNGs into the dashboard's static directory.
//!
//! # Design
//! - The expected chart set is [`ChartAsset::all`]; nothing else is copied.
//! - Every source chart must start with the PNG signature before anything is written.
//! - Charts and the lock are staged in a sibling `<dest>.staging` directory, which
//!   then replaces the destination; stale charts never linger and a failed run
//!   leaves the previous output untouched.
//! - `ASSET_LOCK.txt` is deterministic: one `sha256`/size line per chart in
//!   chart order, then a totals line.
//!
//! Failure modes include a missing source directory, a missing or non-file
//! chart, copy errors, non-PNG contents, or inability to write the lock file.

use std::fs;
use std::path::{Path, PathBuf};

use fs_extra::file::CopyOptions;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, info, warn};
use uidai_ui::core::assets::ChartAsset;
use walkdir::WalkDir;

/// Directory under the UI crate root that receives the charts.
pub const OUTPUT_DIR: &str = "static/outputs";
/// Name of the lock file written next to the charts.
pub const LOCK_FILE: &str = "ASSET_LOCK.txt";

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Errors returned by the asset sync tool.
#[derive(Debug, Error)]
pub enum AssetSyncError {
    /// The pipeline output directory does not exist or is not a directory.
    #[error("pipeline output directory is missing: {}", path.display())]
    MissingSource {
        /// Directory that was expected.
        path: PathBuf,
    },
    /// One of the expected charts is absent from the source directory.
    #[error("chart {file} is missing: {}", path.display())]
    MissingChart {
        /// Expected chart file name.
        file: &'static str,
        /// Path that was checked.
        path: PathBuf,
    },
    /// A chart path exists but is not a regular file.
    #[error("expected file but found non-file: {}", path.display())]
    ExpectedFile {
        /// Path that was expected to be a file.
        path: PathBuf,
    },
    /// A chart does not start with the PNG signature.
    #[error("chart is not a PNG: {}", path.display())]
    InvalidPng {
        /// File that failed validation.
        path: PathBuf,
    },
    /// A filesystem operation failed.
    #[error("io error at {}: {source}", path.display())]
    Io {
        /// Path involved in the failing IO operation.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// A file copy failed.
    #[error("copy failed from {} to {}: {message}", from.display(), to.display())]
    CopyFailed {
        /// Copy source path.
        from: PathBuf,
        /// Copy destination path.
        to: PathBuf,
        /// Error message from the copy implementation.
        message: String,
    },
    /// The UI crate root could not be derived from the tool's manifest directory.
    #[error("cannot locate the UI crate root above {}", manifest_dir.display())]
    UiRootUnresolved {
        /// Manifest directory of the asset sync tool.
        manifest_dir: PathBuf,
    },
    /// The destination has no final path component to stage next to.
    #[error("destination must name a directory: {}", path.display())]
    InvalidDest {
        /// Destination that was given.
        path: PathBuf,
    },
    /// Listing the source directory failed.
    #[error("directory walk failed at {}: {message}", path.display())]
    WalkFailed {
        /// Directory path that could not be traversed.
        path: PathBuf,
        /// Error message from directory traversal.
        message: String,
    },
}

/// Where to read charts from and where to write them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Pipeline output directory holding the chart PNGs.
    pub source: PathBuf,
    /// Directory the dashboard serves charts from.
    pub dest: PathBuf,
}

/// Digest and size of one copied chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRecord {
    /// Chart that was copied.
    pub asset: ChartAsset,
    /// Lowercase hex SHA-256 of the copied bytes.
    pub sha256: String,
    /// Size of the copied file.
    pub bytes: u64,
}

/// Outcome of a successful sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Copied charts, in [`ChartAsset::all`] order.
    pub charts: Vec<ChartRecord>,
    /// PNGs found in the source that are not part of the chart set.
    pub ignored: Vec<PathBuf>,
    /// Location of the written lock file.
    pub lock_path: PathBuf,
}

/// Default destination: `static/outputs` under the `uidai-ui` crate root.
///
/// # Errors
/// Returns an error if the tool is not nested two levels below the UI crate.
pub fn default_dest() -> Result<PathBuf, AssetSyncError> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let ui_root = manifest_dir
        .parent()
        .and_then(Path::parent)
        .ok_or_else(|| AssetSyncError::UiRootUnresolved {
            manifest_dir: manifest_dir.to_path_buf(),
        })?;
    Ok(ui_root.join(OUTPUT_DIR))
}

/// Copy the chart set from `options.source` into `options.dest` and write the lock file.
///
/// Charts are validated in the source and staged next to `options.dest`; the
/// previous output is only replaced once the staged copy and its lock are complete.
///
/// # Errors
/// Returns an error if the source or any chart is missing, a chart is not a
/// PNG, a copy fails, or the output cannot be written.
pub fn sync_charts(options: &SyncOptions) -> Result<SyncReport, AssetSyncError> {
    info!(
        source = %options.source.display(),
        dest = %options.dest.display(),
        "syncing chart assets"
    );
    ensure_source(&options.source)?;
    let inputs = ChartAsset::all()
        .into_iter()
        .map(|asset| chart_input(&options.source, asset))
        .collect::<Result<Vec<_>, _>>()?;
    let ignored = unexpected_pngs(&options.source)?;
    for path in &ignored {
        warn!(path = %path.display(), "ignoring PNG outside the chart set");
    }

    let staging = staging_dir(&options.dest)?;
    replace_dir(&staging)?;
    let mut charts = Vec::with_capacity(inputs.len());
    for (from, expected) in inputs {
        let to = staging.join(expected.asset.file_name());
        copy_file(&from, &to)?;
        let copied = inspect_chart(expected.asset, &to)?;
        if copied != expected {
            return Err(AssetSyncError::CopyFailed {
                from,
                to,
                message: "copied bytes differ from source".to_string(),
            });
        }
        debug!(
            file = copied.asset.file_name(),
            bytes = copied.bytes,
            "chart staged"
        );
        charts.push(copied);
    }

    let staged_lock = staging.join(LOCK_FILE);
    fs::write(&staged_lock, render_lock(&charts)).map_err(|source| AssetSyncError::Io {
        path: staged_lock,
        source,
    })?;
    swap_into_place(&staging, &options.dest)?;

    let lock_path = options.dest.join(LOCK_FILE);
    info!(
        charts = charts.len(),
        ignored = ignored.len(),
        lock = %lock_path.display(),
        "chart assets synced"
    );
    Ok(SyncReport {
        charts,
        ignored,
        lock_path,
    })
}

/// Render the lock file contents for `charts`.
#[must_use]
pub fn render_lock(charts: &[ChartRecord]) -> String {
    let mut out = String::new();
    let mut total = 0_u64;
    for chart in charts {
        total += chart.bytes;
        out.push_str(&format!(
            "{} sha256 {} bytes {}\n",
            chart.asset.file_name(),
            chart.sha256,
            chart.bytes
        ));
    }
    out.push_str(&format!("total files {} bytes {total}\n", charts.len()));
    out
}

fn ensure_source(path: &Path) -> Result<(), AssetSyncError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(AssetSyncError::MissingSource {
            path: path.to_path_buf(),
        })
    }
}

fn chart_input(
    source: &Path,
    asset: ChartAsset,
) -> Result<(PathBuf, ChartRecord), AssetSyncError> {
    let path = source.join(asset.file_name());
    if !path.exists() {
        return Err(AssetSyncError::MissingChart {
            file: asset.file_name(),
            path,
        });
    }
    if !path.is_file() {
        return Err(AssetSyncError::ExpectedFile { path });
    }
    let record = inspect_chart(asset, &path)?;
    Ok((path, record))
}

fn unexpected_pngs(source: &Path) -> Result<Vec<PathBuf>, AssetSyncError> {
    let mut ignored = Vec::new();
    for entry in WalkDir::new(source).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|err| AssetSyncError::WalkFailed {
            path: source.to_path_buf(),
            message: err.to_string(),
        })?;
        let name = entry.file_name().to_string_lossy();
        let is_png = Path::new(name.as_ref())
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        let known = ChartAsset::from_file_name(&name).is_some();
        if entry.file_type().is_file() && is_png && !known {
            ignored.push(entry.into_path());
        }
    }
    Ok(ignored)
}

fn staging_dir(dest: &Path) -> Result<PathBuf, AssetSyncError> {
    let name = dest
        .file_name()
        .ok_or_else(|| AssetSyncError::InvalidDest {
            path: dest.to_path_buf(),
        })?;
    let mut staged = name.to_os_string();
    staged.push(".staging");
    Ok(dest.with_file_name(staged))
}

fn remove_path(path: &Path) -> Result<(), AssetSyncError> {
    let io_err = |source| AssetSyncError::Io {
        path: path.to_path_buf(),
        source,
    };
    if path.is_dir() {
        fs::remove_dir_all(path).map_err(io_err)
    } else if path.exists() {
        fs::remove_file(path).map_err(io_err)
    } else {
        Ok(())
    }
}

fn replace_dir(path: &Path) -> Result<(), AssetSyncError> {
    remove_path(path)?;
    fs::create_dir_all(path).map_err(|source| AssetSyncError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn swap_into_place(staging: &Path, dest: &Path) -> Result<(), AssetSyncError> {
    remove_path(dest)?;
    fs::rename(staging, dest).map_err(|source| AssetSyncError::Io {
        path: dest.to_path_buf(),
        source,
    })
}

fn copy_file(from: &Path, to: &Path) -> Result<(), AssetSyncError> {
    let mut options = CopyOptions::new();
    options.overwrite = true;
    fs_extra::file::copy(from, to, &options).map_err(|err| AssetSyncError::CopyFailed {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        message: err.to_string(),
    })?;
    Ok(())
}

fn inspect_chart(asset: ChartAsset, path: &Path) -> Result<ChartRecord, AssetSyncError> {
    let bytes = fs::read(path).map_err(|source| AssetSyncError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if !bytes.starts_with(&PNG_SIGNATURE) {
        return Err(AssetSyncError::InvalidPng {
            path: path.to_path_buf(),
        });
    }
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(ChartRecord {
        asset,
        sha256: format!("{:x}", hasher.finalize()),
        bytes: bytes.len() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use tempfile::TempDir;

    type TestResult = Result<(), Box<dyn Error>>;

    fn png_bytes(tag: &str) -> Vec<u8> {
        let mut bytes = PNG_SIGNATURE.to_vec();
        bytes.extend_from_slice(tag.as_bytes());
        bytes
    }

    fn write_pipeline_outputs(dir: &Path) -> Result<(), std::io::Error> {
        for asset in ChartAsset::all() {
            fs::write(dir.join(asset.file_name()), png_bytes(asset.file_name()))?;
        }
        Ok(())
    }

    fn options(root: &TempDir) -> Result<SyncOptions, std::io::Error> {
        let source = root.path().join("outputs");
        fs::create_dir_all(&source)?;
        Ok(SyncOptions {
            source,
            dest: root.path().join("ui/static/outputs"),
        })
    }

    #[test]
    fn sync_copies_every_chart_and_writes_lock() -> TestResult {
        let root = TempDir::new()?;
        let options = options(&root)?;
        write_pipeline_outputs(&options.source)?;

        let report = sync_charts(&options)?;

        assert_eq!(report.charts.len(), 8);
        assert!(report.ignored.is_empty());
        for asset in ChartAsset::all() {
            let copied = fs::read(options.dest.join(asset.file_name()))?;
            assert_eq!(copied, png_bytes(asset.file_name()));
        }

        let lock = fs::read_to_string(&report.lock_path)?;
        let lines: Vec<&str> = lock.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with("01_univariate_time_trend.png sha256 "));
        assert!(lines[3].starts_with("04_bivariate_scatter.png sha256 "));
        let total: u64 = report.charts.iter().map(|chart| chart.bytes).sum();
        assert_eq!(lines[8], format!("total files 8 bytes {total}"));
        Ok(())
    }

    #[test]
    fn lock_is_stable_across_runs() -> TestResult {
        let root = TempDir::new()?;
        let options = options(&root)?;
        write_pipeline_outputs(&options.source)?;

        let first = fs::read_to_string(sync_charts(&options)?.lock_path)?;
        let second = fs::read_to_string(sync_charts(&options)?.lock_path)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn missing_chart_names_the_file() -> TestResult {
        let root = TempDir::new()?;
        let options = options(&root)?;
        write_pipeline_outputs(&options.source)?;
        fs::remove_file(options.source.join(ChartAsset::DistrictHotspots.file_name()))?;

        let result = sync_charts(&options);
        assert!(
            matches!(
                result,
                Err(AssetSyncError::MissingChart { file: "07_trivariate_district_hotspots.png", .. })
            ),
            "expected MissingChart error, got {result:?}"
        );
        assert!(!options.dest.exists(), "destination must be untouched");
        Ok(())
    }

    #[test]
    fn directory_in_place_of_chart_is_rejected() -> TestResult {
        let root = TempDir::new()?;
        let options = options(&root)?;
        write_pipeline_outputs(&options.source)?;
        let chart = options.source.join(ChartAsset::Scatter.file_name());
        fs::remove_file(&chart)?;
        fs::create_dir(&chart)?;

        let result = sync_charts(&options);
        assert!(
            matches!(result, Err(AssetSyncError::ExpectedFile { .. })),
            "expected ExpectedFile error, got {result:?}"
        );
        Ok(())
    }

    #[test]
    fn non_png_chart_fails_validation() -> TestResult {
        let root = TempDir::new()?;
        let options = options(&root)?;
        write_pipeline_outputs(&options.source)?;
        fs::write(
            options.source.join(ChartAsset::TimeTrend.file_name()),
            "<html>not an image</html>",
        )?;

        let bad = options.source.join(ChartAsset::TimeTrend.file_name());
        let result = sync_charts(&options);
        assert!(
            matches!(&result, Err(AssetSyncError::InvalidPng { path }) if *path == bad),
            "expected InvalidPng error for the source chart, got {result:?}"
        );
        assert!(!options.dest.exists(), "nothing is written for an invalid source");
        Ok(())
    }

    #[test]
    fn failed_sync_keeps_previous_output() -> TestResult {
        let root = TempDir::new()?;
        let options = options(&root)?;
        write_pipeline_outputs(&options.source)?;
        let first = sync_charts(&options)?;
        let good_lock = fs::read_to_string(&first.lock_path)?;

        let growth = ChartAsset::GrowthByState.file_name();
        fs::write(options.source.join(growth), "not a png")?;
        let result = sync_charts(&options);
        assert!(
            matches!(result, Err(AssetSyncError::InvalidPng { .. })),
            "expected InvalidPng error, got {result:?}"
        );

        assert_eq!(fs::read_to_string(options.dest.join(LOCK_FILE))?, good_lock);
        assert_eq!(fs::read(options.dest.join(growth))?, png_bytes(growth));
        Ok(())
    }

    #[test]
    fn staging_dir_is_gone_after_sync() -> TestResult {
        let root = TempDir::new()?;
        let options = options(&root)?;
        write_pipeline_outputs(&options.source)?;
        let staging = staging_dir(&options.dest)?;
        fs::create_dir_all(&staging)?;
        fs::write(staging.join("leftover.png"), png_bytes("leftover"))?;

        sync_charts(&options)?;

        assert!(!staging.exists());
        assert!(!options.dest.join("leftover.png").exists());
        assert!(options.dest.join(LOCK_FILE).is_file());
        Ok(())
    }

    #[test]
    fn root_destination_cannot_be_staged() {
        let result = staging_dir(Path::new("/"));
        assert!(
            matches!(result, Err(AssetSyncError::InvalidDest { .. })),
            "expected InvalidDest error, got {result:?}"
        );
    }

    #[test]
    fn missing_source_is_reported() -> TestResult {
        let root = TempDir::new()?;
        let options = SyncOptions {
            source: root.path().join("nope"),
            dest: root.path().join("dest"),
        };
        assert!(matches!(
            sync_charts(&options),
            Err(AssetSyncError::MissingSource { .. })
        ));
        Ok(())
    }

    #[test]
    fn extra_pngs_are_ignored_and_stale_output_removed() -> TestResult {
        let root = TempDir::new()?;
        let options = options(&root)?;
        write_pipeline_outputs(&options.source)?;
        fs::write(options.source.join("draft_chart.png"), png_bytes("draft"))?;
        fs::write(options.source.join("flagged_records.csv"), "id\n1\n")?;
        fs::create_dir_all(&options.dest)?;
        fs::write(options.dest.join("old.png"), png_bytes("old"))?;

        let report = sync_charts(&options)?;

        assert_eq!(report.ignored, vec![options.source.join("draft_chart.png")]);
        assert!(!options.dest.join("draft_chart.png").exists());
        assert!(!options.dest.join("old.png").exists());
        assert!(!options.dest.join("flagged_records.csv").exists());
        Ok(())
    }

    #[test]
    fn render_lock_lists_charts_then_totals() {
        let charts = vec![
            ChartRecord {
                asset: ChartAsset::TimeTrend,
                sha256: "aa".to_string(),
                bytes: 10,
            },
            ChartRecord {
                asset: ChartAsset::GrowthByState,
                sha256: "bb".to_string(),
                bytes: 32,
            },
        ];
        assert_eq!(
            render_lock(&charts),
            "01_univariate_time_trend.png sha256 aa bytes 10\n\
             08_trivariate_growth_by_state.png sha256 bb bytes 32\n\
             total files 2 bytes 42\n"
        );
    }

    #[test]
    fn unresolved_ui_root_is_not_reported_as_missing_source() {
        let err = AssetSyncError::UiRootUnresolved {
            manifest_dir: PathBuf::from("/asset_sync"),
        };
        let message = err.to_string();
        assert!(message.contains("UI crate root"), "{message}");
        assert!(!message.contains("pipeline output"), "{message}");
    }

    #[test]
    fn default_dest_points_into_ui_static() -> TestResult {
        let dest = default_dest()?;
        assert!(dest.ends_with(OUTPUT_DIR));
        assert!(dest.parent().is_some_and(|p| p.ends_with("static")));
        Ok(())
    }
}
