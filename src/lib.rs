//! `histogram-reporting` is a small library that shapes an in-memory
//! [`types::DataSet`] into histogram-ready aggregates and hands them to a
//! pluggable chart renderer.
//!
//! The primary entrypoint is [`report::HistogramRequestBuilder`]: given a
//! dataset and a [`report::HistogramSpec`], it decides whether occurrence
//! counts must be pre-computed, applies an optional top/bottom-N selection
//! over categorical axes, assembles rendering parameters, and invokes a
//! [`report::ChartRenderer`] collaborator.
//!
//! ## What the builder does
//!
//! - **Count derivation**: when the y axis is the `count` sentinel (the
//!   default), the working table becomes a frequency table with one row per
//!   distinct x value.
//! - **Top/bottom-N**: a signed `limit` keeps the `|limit|` rows with the
//!   largest (positive) or smallest (zero/negative) y values. Applies only
//!   when the x column's declared type is categorical/text; numeric axes bin
//!   by range and ignore it.
//! - **Directive assembly**: the aggregation function, bin count, and the
//!   fixed rendering policy (log-scaled y, small bar gap) are packed into
//!   [`report::RenderParams`] for the renderer.
//!
//! Rendering itself, figure styling, CLIs, and data loading all live outside
//! this crate: the renderer is a trait implemented by the caller.
//!
//! ## Quick example
//!
//! ```rust
//! use histogram_reporting::report::{ChartRenderer, HistogramRequestBuilder, HistogramSpec, RenderParams};
//! use histogram_reporting::types::{DataSet, DataType, Field, Schema, Value};
//!
//! // A renderer that just records what it was asked to draw.
//! struct TitleRenderer;
//!
//! impl ChartRenderer for TitleRenderer {
//!     type Chart = String;
//!
//!     fn render(
//!         &self,
//!         table: &DataSet,
//!         params: &RenderParams,
//!     ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
//!         Ok(format!("{} by {} ({} rows)", params.y, params.x, table.row_count()))
//!     }
//! }
//!
//! # fn main() -> Result<(), histogram_reporting::ReportError> {
//! let schema = Schema::new(vec![Field::new("category", DataType::Utf8)]);
//! let ds = DataSet::new(
//!     schema,
//!     ["A", "A", "B"]
//!         .iter()
//!         .map(|s| vec![Value::Utf8(s.to_string())])
//!         .collect(),
//! );
//!
//! let chart = HistogramRequestBuilder::new(&ds)
//!     .build(&HistogramSpec::new("category"), &TitleRenderer)?;
//! assert_eq!(chart, "count by category (2 rows)");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`report`]: the histogram request builder, spec types, renderer contract
//! - [`types`]: schema + in-memory dataset types
//! - [`error`]: error types used across the report layer

pub mod error;
pub mod report;
pub mod types;

pub use error::{ReportError, ReportResult};
