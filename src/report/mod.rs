//! Histogram report shaping.
//!
//! This layer turns a [`crate::types::DataSet`] plus a [`spec::HistogramSpec`]
//! into a working table and a rendering directive, then hands both to a
//! [`render::ChartRenderer`]. It is purely in-memory and single-pass.
//!
//! Currently implemented:
//!
//! - [`spec`]: validated request parameters (axes, aggregation, bins, limit)
//! - [`histogram`]: the request builder and frequency-table derivation
//! - [`render`]: the renderer collaborator contract and policy constants
//! - [`observability`]: observer hooks for request outcomes
//!
//! ## Example: top-3 categories by occurrence count
//!
//! ```rust
//! use histogram_reporting::report::histogram::HistogramRequestBuilder;
//! use histogram_reporting::report::spec::HistogramSpec;
//! use histogram_reporting::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let schema = Schema::new(vec![Field::new("category", DataType::Utf8)]);
//! let ds = DataSet::new(
//!     schema,
//!     ["A", "A", "B", "C", "C", "C"]
//!         .iter()
//!         .map(|s| vec![Value::Utf8(s.to_string())])
//!         .collect(),
//! );
//!
//! let spec = HistogramSpec {
//!     limit: Some(3),
//!     ..HistogramSpec::new("category")
//! };
//! let (table, params) = HistogramRequestBuilder::new(&ds).prepare(&spec).unwrap();
//!
//! assert_eq!(table.row_count(), 3);
//! assert_eq!(params.y, "count");
//! ```

pub mod histogram;
pub mod observability;
pub mod render;
pub mod spec;

pub use histogram::{value_counts, HistogramRequestBuilder};
pub use observability::{
    CompositeObserver, FileObserver, ReportContext, ReportObserver, ReportSeverity, ReportStats,
    StdErrObserver,
};
pub use render::{ChartRenderer, RenderParams, RenderPolicy};
pub use spec::{AggFunc, HistogramSpec, LimitSelection, RankDirection, YAxis, COUNT_COLUMN};
