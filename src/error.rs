use thiserror::Error;

/// Convenience result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Error type returned by the report layer.
///
/// Validation variants are raised before any table derivation happens;
/// [`ReportError::RenderFailure`] wraps whatever the chart-rendering
/// collaborator returned, with the cause attached.
#[derive(Debug, Error)]
pub enum ReportError {
    /// An axis referenced a column that does not exist in the dataset schema.
    #[error("column not found: '{column}'")]
    ColumnNotFound { column: String },

    /// The requested bin count is not a positive integer.
    #[error("invalid bin count: {bin_count} (must be > 0)")]
    InvalidBinCount { bin_count: usize },

    /// The aggregation function name is not one of sum/avg/min/max/count.
    #[error("unsupported aggregation function: '{name}'")]
    UnsupportedAggregation { name: String },

    /// The rendering collaborator rejected the assembled table/parameters.
    #[error("render failure: {source}")]
    RenderFailure {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
