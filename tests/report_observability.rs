use std::sync::{Arc, Mutex};

use histogram_reporting::report::{
    ChartRenderer, CompositeObserver, HistogramRequestBuilder, HistogramSpec, RenderParams,
    ReportContext, ReportObserver, ReportSeverity, ReportStats,
};
use histogram_reporting::types::{DataSet, DataType, Field, Schema, Value};
use histogram_reporting::ReportError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<usize>>,
    failures: Mutex<Vec<ReportSeverity>>,
}

impl ReportObserver for RecordingObserver {
    fn on_success(&self, _ctx: &ReportContext, stats: ReportStats) {
        self.successes.lock().unwrap().push(stats.rows);
    }

    fn on_failure(&self, _ctx: &ReportContext, severity: ReportSeverity, _error: &ReportError) {
        self.failures.lock().unwrap().push(severity);
    }
}

struct OkRenderer;

impl ChartRenderer for OkRenderer {
    type Chart = ();

    fn render(
        &self,
        _table: &DataSet,
        _params: &RenderParams,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }
}

struct FailingRenderer;

impl ChartRenderer for FailingRenderer {
    type Chart = ();

    fn render(
        &self,
        _table: &DataSet,
        _params: &RenderParams,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err("renderer exploded".into())
    }
}

fn category_dataset() -> DataSet {
    let schema = Schema::new(vec![Field::new("category", DataType::Utf8)]);
    let rows = ["A", "B", "B"]
        .iter()
        .map(|s| vec![Value::Utf8(s.to_string())])
        .collect();
    DataSet::new(schema, rows)
}

#[test]
fn observer_receives_success_with_working_table_rows() {
    let obs = Arc::new(RecordingObserver::default());
    let ds = category_dataset();

    HistogramRequestBuilder::new(&ds)
        .with_observer(obs.clone())
        .build(&HistogramSpec::new("category"), &OkRenderer)
        .unwrap();

    // Frequency table has two distinct categories.
    assert_eq!(obs.successes.lock().unwrap().clone(), vec![2]);
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn validation_failure_reports_warning_severity() {
    let obs = Arc::new(RecordingObserver::default());
    let ds = category_dataset();

    let _ = HistogramRequestBuilder::new(&ds)
        .with_observer(obs.clone())
        .build(&HistogramSpec::new("missing"), &OkRenderer)
        .unwrap_err();

    assert_eq!(
        obs.failures.lock().unwrap().clone(),
        vec![ReportSeverity::Warning]
    );
    assert!(obs.successes.lock().unwrap().is_empty());
}

#[test]
fn renderer_failure_reports_error_severity() {
    let obs = Arc::new(RecordingObserver::default());
    let ds = category_dataset();

    let _ = HistogramRequestBuilder::new(&ds)
        .with_observer(obs.clone())
        .build(&HistogramSpec::new("category"), &FailingRenderer)
        .unwrap_err();

    assert_eq!(
        obs.failures.lock().unwrap().clone(),
        vec![ReportSeverity::Error]
    );
}

#[test]
fn file_observer_appends_outcome_lines() {
    let path = std::env::temp_dir().join(format!(
        "histogram-report-log-{}-{:?}",
        std::process::id(),
        std::thread::current().id()
    ));
    let _ = std::fs::remove_file(&path);

    let obs = Arc::new(histogram_reporting::report::FileObserver::new(&path));
    let ds = category_dataset();
    HistogramRequestBuilder::new(&ds)
        .with_observer(obs)
        .build(&HistogramSpec::new("category"), &OkRenderer)
        .unwrap();

    let log = std::fs::read_to_string(&path).unwrap();
    assert!(log.contains("ok x=category y=count"));
    assert!(log.contains("rows=2"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn composite_observer_fans_out_to_all_observers() {
    let first = Arc::new(RecordingObserver::default());
    let second = Arc::new(RecordingObserver::default());
    let composite = Arc::new(CompositeObserver::new(vec![
        first.clone() as Arc<dyn ReportObserver>,
        second.clone() as Arc<dyn ReportObserver>,
    ]));

    let ds = category_dataset();
    HistogramRequestBuilder::new(&ds)
        .with_observer(composite)
        .build(&HistogramSpec::new("category"), &OkRenderer)
        .unwrap();

    assert_eq!(first.successes.lock().unwrap().clone(), vec![2]);
    assert_eq!(second.successes.lock().unwrap().clone(), vec![2]);
}
