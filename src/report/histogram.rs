//! Histogram request shaping: frequency-table derivation, top/bottom-N
//! selection over categorical axes, and directive assembly.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{ReportError, ReportResult};
use crate::types::{DataSet, DataType, Field, Schema, Value};

use super::observability::{severity_of, ReportContext, ReportObserver, ReportStats};
use super::render::{ChartRenderer, RenderParams, RenderPolicy};
use super::spec::{HistogramSpec, LimitSelection, RankDirection, YAxis, COUNT_COLUMN};

/// Hashable stand-in for [`Value`] used to group rows by distinct x value.
#[derive(Hash, PartialEq, Eq)]
enum ValueKey {
    Null,
    Int64(i64),
    // f64 keyed by bit pattern.
    Float64(u64),
    Bool(bool),
    Utf8(String),
}

impl ValueKey {
    fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKey::Null,
            Value::Int64(v) => ValueKey::Int64(*v),
            Value::Float64(v) => ValueKey::Float64(v.to_bits()),
            Value::Bool(v) => ValueKey::Bool(*v),
            Value::Utf8(s) => ValueKey::Utf8(s.clone()),
        }
    }
}

/// Derive a frequency table: one row per distinct value of `column`, in
/// first-seen order, with an [`DataType::Int64`] `count` column.
///
/// The result's row count equals the number of distinct values, and the
/// `count` column sums to `dataset.row_count()`.
pub fn value_counts(dataset: &DataSet, column: &str) -> ReportResult<DataSet> {
    let idx = dataset
        .schema
        .index_of(column)
        .ok_or_else(|| ReportError::ColumnNotFound {
            column: column.to_string(),
        })?;
    let data_type = dataset.schema.fields[idx].data_type.clone();

    let mut order: Vec<(Value, i64)> = Vec::new();
    let mut seen: HashMap<ValueKey, usize> = HashMap::new();
    for value in dataset.column_values(idx) {
        match seen.get(&ValueKey::of(value)) {
            Some(&slot) => order[slot].1 += 1,
            None => {
                seen.insert(ValueKey::of(value), order.len());
                order.push((value.clone(), 1));
            }
        }
    }

    let schema = Schema::new(vec![
        Field::new(column, data_type),
        Field::new(COUNT_COLUMN, DataType::Int64),
    ]);
    let rows = order
        .into_iter()
        .map(|(value, count)| vec![value, Value::Int64(count)])
        .collect();
    Ok(DataSet::new(schema, rows))
}

/// Shapes one histogram request and hands the result to a chart renderer.
///
/// Borrows the dataset read-only; every derivation produces a new table. One
/// builder can serve any number of requests, each independent of the others.
pub struct HistogramRequestBuilder<'a> {
    data: &'a DataSet,
    policy: RenderPolicy,
    observer: Option<Arc<dyn ReportObserver>>,
}

impl<'a> HistogramRequestBuilder<'a> {
    /// Create a builder over `data` with the default [`RenderPolicy`].
    pub fn new(data: &'a DataSet) -> Self {
        Self {
            data,
            policy: RenderPolicy::default(),
            observer: None,
        }
    }

    /// Substitute a rendering policy (log scale, bar gap).
    pub fn with_policy(mut self, policy: RenderPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Attach an observer for request outcomes (metrics/logging).
    pub fn with_observer(mut self, observer: Arc<dyn ReportObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Run the data-shaping pipeline without rendering: validate the spec,
    /// derive the working table, apply top/bottom-N selection, and assemble
    /// the rendering directive.
    ///
    /// Fails fast on validation; never mutates the underlying dataset.
    pub fn prepare(&self, spec: &HistogramSpec) -> ReportResult<(DataSet, RenderParams)> {
        let x_field =
            self.data
                .schema
                .field(&spec.x_axis)
                .ok_or_else(|| ReportError::ColumnNotFound {
                    column: spec.x_axis.clone(),
                })?;
        let x_type = x_field.data_type.clone();

        if spec.bin_count == 0 {
            return Err(ReportError::InvalidBinCount {
                bin_count: spec.bin_count,
            });
        }

        // The y index is resolved here, once: in the derived frequency table
        // the count column is always index 1, even when the x column is
        // itself named `count`. Re-resolving by name later would pick up the
        // x column in that case.
        let (mut table, y_column, y_idx) = match &spec.y_axis {
            YAxis::Count => (
                value_counts(self.data, &spec.x_axis)?,
                COUNT_COLUMN.to_string(),
                1,
            ),
            YAxis::Column(name) => {
                let idx = self.data.schema.index_of(name).ok_or_else(|| {
                    ReportError::ColumnNotFound {
                        column: name.clone(),
                    }
                })?;
                (self.data.clone(), name.clone(), idx)
            }
        };

        // Top/bottom-N applies to per-distinct-value axes only; numeric axes
        // bin by range, so truncation there is a silent no-op.
        if let Some(limit) = spec.limit {
            if x_type.is_categorical() {
                apply_limit(&mut table, y_idx, LimitSelection::from_signed(limit));
            }
        }

        let params = RenderParams {
            x: spec.x_axis.clone(),
            y: y_column,
            histfunc: spec.agg_func,
            bin_count: spec.bin_count,
            log_y: self.policy.log_y,
            bar_gap: self.policy.bar_gap,
        };
        Ok((table, params))
    }

    /// Shape the request and render it through `renderer`.
    ///
    /// Renderer failures propagate as [`ReportError::RenderFailure`] with the
    /// cause attached; nothing is retried.
    pub fn build<R: ChartRenderer>(
        &self,
        spec: &HistogramSpec,
        renderer: &R,
    ) -> ReportResult<R::Chart> {
        let ctx = ReportContext {
            x_axis: spec.x_axis.clone(),
            y_column: String::from(spec.y_axis.clone()),
            limit: spec.limit,
        };

        let (table, params) = match self.prepare(spec) {
            Ok(out) => out,
            Err(err) => {
                self.notify_failure(&ctx, &err);
                return Err(err);
            }
        };

        match renderer.render(&table, &params) {
            Ok(chart) => {
                if let Some(obs) = &self.observer {
                    obs.on_success(
                        &ctx,
                        ReportStats {
                            rows: table.row_count(),
                        },
                    );
                }
                Ok(chart)
            }
            Err(source) => {
                let err = ReportError::RenderFailure { source };
                self.notify_failure(&ctx, &err);
                Err(err)
            }
        }
    }

    fn notify_failure(&self, ctx: &ReportContext, err: &ReportError) {
        if let Some(obs) = &self.observer {
            obs.on_failure(ctx, severity_of(err), err);
        }
    }
}

/// Stable-sort `table` by the column at `y_idx` and keep `selection.count`
/// rows from the chosen end. Row values are never changed, only selection and
/// order.
fn apply_limit(table: &mut DataSet, y_idx: usize, selection: LimitSelection) {
    let null = Value::Null;
    table.rows.sort_by(|a, b| {
        let ya = a.get(y_idx).unwrap_or(&null);
        let yb = b.get(y_idx).unwrap_or(&null);
        match selection.direction {
            RankDirection::Bottom => ya.total_cmp(yb),
            RankDirection::Top => yb.total_cmp(ya),
        }
    });
    table.rows.truncate(selection.count);
}
