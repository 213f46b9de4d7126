use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ReportError;

/// Severity classification used for observer callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReportSeverity {
    /// Informational event.
    Info,
    /// Request rejected by validation (bad axis name, bin count, ...).
    Warning,
    /// The rendering collaborator failed.
    Error,
}

/// Severity for a report failure.
pub(crate) fn severity_of(error: &ReportError) -> ReportSeverity {
    match error {
        ReportError::RenderFailure { .. } => ReportSeverity::Error,
        _ => ReportSeverity::Warning,
    }
}

/// Context about one histogram request.
#[derive(Debug, Clone)]
pub struct ReportContext {
    /// X-axis column name.
    pub x_axis: String,
    /// Effective y column name (`count` when derived).
    pub y_column: String,
    /// The signed limit from the request, if any.
    pub limit: Option<i64>,
}

/// Minimal stats reported on a successful request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportStats {
    /// Number of working-table rows handed to the renderer.
    pub rows: usize,
}

/// Observer interface for report outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait ReportObserver: Send + Sync {
    /// Called when a histogram request renders successfully.
    fn on_success(&self, _ctx: &ReportContext, _stats: ReportStats) {}

    /// Called when a histogram request fails.
    fn on_failure(&self, _ctx: &ReportContext, _severity: ReportSeverity, _error: &ReportError) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ReportObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn ReportObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl ReportObserver for CompositeObserver {
    fn on_success(&self, ctx: &ReportContext, stats: ReportStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &ReportContext, severity: ReportSeverity, error: &ReportError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }
}

/// Logs report events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl ReportObserver for StdErrObserver {
    fn on_success(&self, ctx: &ReportContext, stats: ReportStats) {
        eprintln!(
            "[report][ok] x={} y={} limit={:?} rows={}",
            ctx.x_axis, ctx.y_column, ctx.limit, stats.rows
        );
    }

    fn on_failure(&self, ctx: &ReportContext, severity: ReportSeverity, error: &ReportError) {
        eprintln!(
            "[report][{:?}] x={} y={} limit={:?} err={}",
            severity, ctx.x_axis, ctx.y_column, ctx.limit, error
        );
    }
}

/// Appends report events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are
    /// ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl ReportObserver for FileObserver {
    fn on_success(&self, ctx: &ReportContext, stats: ReportStats) {
        self.append_line(&format!(
            "{} ok x={} y={} limit={:?} rows={}",
            unix_ts(),
            ctx.x_axis,
            ctx.y_column,
            ctx.limit,
            stats.rows
        ));
    }

    fn on_failure(&self, ctx: &ReportContext, severity: ReportSeverity, error: &ReportError) {
        self.append_line(&format!(
            "{} fail severity={:?} x={} y={} limit={:?} err={}",
            unix_ts(),
            severity,
            ctx.x_axis,
            ctx.y_column,
            ctx.limit,
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
