//! The chart-rendering collaborator contract.
//!
//! The report layer never renders anything itself: it assembles a working
//! table plus [`RenderParams`] and hands both to a [`ChartRenderer`]. The
//! renderer is free to be a plotting toolkit binding, an SVG writer, or a
//! recording stub in tests.

use crate::types::DataSet;

use super::spec::AggFunc;

/// Fixed rendering choices shared by every histogram this crate produces.
///
/// Kept as a configuration struct rather than literals inside the pipeline so
/// an alternate policy can be substituted without touching the filtering
/// algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderPolicy {
    /// Log-scale the y axis.
    pub log_y: bool,
    /// Spacing between bars, as a fraction of the bar slot.
    pub bar_gap: f64,
}

impl Default for RenderPolicy {
    fn default() -> Self {
        Self {
            log_y: true,
            bar_gap: 0.02,
        }
    }
}

/// The assembled rendering directive handed to a [`ChartRenderer`] alongside
/// the working table.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    /// X-axis column name in the working table.
    pub x: String,
    /// Effective y column name (`count` when derived).
    pub y: String,
    /// Aggregation the renderer applies to residual duplicate x values.
    pub histfunc: AggFunc,
    /// Number of bins for numeric x axes.
    pub bin_count: usize,
    /// Log-scale the y axis.
    pub log_y: bool,
    /// Spacing between bars.
    pub bar_gap: f64,
}

/// A chart-rendering collaborator.
///
/// Implementations receive the shaped working table and the directive and
/// return an opaque renderable chart object. Errors are propagated by the
/// builder as [`crate::error::ReportError::RenderFailure`], cause attached,
/// never swallowed or retried.
pub trait ChartRenderer {
    /// The renderable object this renderer produces.
    type Chart;

    /// Render one histogram.
    fn render(
        &self,
        table: &DataSet,
        params: &RenderParams,
    ) -> Result<Self::Chart, Box<dyn std::error::Error + Send + Sync>>;
}
