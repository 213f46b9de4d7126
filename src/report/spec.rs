//! Request parameters for one histogram report.
//!
//! A [`HistogramSpec`] is constructed (or deserialized) per report request,
//! validated by the builder, used once, then discarded.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Operation used to combine multiple rows sharing an x value into one
/// plotted y value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggFunc {
    /// Sum of values.
    Sum,
    /// Arithmetic mean.
    Avg,
    /// Minimum value.
    Min,
    /// Maximum value.
    Max,
    /// Count of rows.
    Count,
}

impl AggFunc {
    /// The lowercase wire name (`"sum"`, `"avg"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            AggFunc::Sum => "sum",
            AggFunc::Avg => "avg",
            AggFunc::Min => "min",
            AggFunc::Max => "max",
            AggFunc::Count => "count",
        }
    }
}

impl FromStr for AggFunc {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sum" => Ok(AggFunc::Sum),
            "avg" => Ok(AggFunc::Avg),
            "min" => Ok(AggFunc::Min),
            "max" => Ok(AggFunc::Max),
            "count" => Ok(AggFunc::Count),
            other => Err(ReportError::UnsupportedAggregation {
                name: other.to_string(),
            }),
        }
    }
}

/// The y axis of a histogram request: either a real column, or the `count`
/// sentinel meaning "derive occurrence counts of the x-axis values".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum YAxis {
    /// Derive a frequency table from the x axis. The default.
    Count,
    /// Read an existing column.
    Column(String),
}

/// The sentinel column name reserved for derived counts.
pub const COUNT_COLUMN: &str = "count";

impl Default for YAxis {
    fn default() -> Self {
        YAxis::Count
    }
}

impl From<String> for YAxis {
    fn from(s: String) -> Self {
        if s == COUNT_COLUMN {
            YAxis::Count
        } else {
            YAxis::Column(s)
        }
    }
}

impl From<YAxis> for String {
    fn from(y: YAxis) -> Self {
        match y {
            YAxis::Count => COUNT_COLUMN.to_string(),
            YAxis::Column(name) => name,
        }
    }
}

/// Validated parameters for one histogram request.
///
/// `limit` keeps the sign-encoded external contract: magnitude = number of
/// rows to keep after sorting by the y axis, sign = direction (positive →
/// top-N, zero or negative → bottom-N). It only applies when the x-axis
/// column is categorical/text; numeric axes bin by range and ignore it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramSpec {
    /// Name of the dataset column used as the x axis. Required.
    pub x_axis: String,
    /// Y axis: a column name, or the `count` sentinel (the default).
    #[serde(default)]
    pub y_axis: YAxis,
    /// Aggregation applied by the renderer to residual duplicate x values.
    #[serde(default = "default_agg_func")]
    pub agg_func: AggFunc,
    /// Number of bins; meaningful only for numeric x axes.
    #[serde(default = "default_bin_count")]
    pub bin_count: usize,
    /// Optional sign-encoded top/bottom-N selection.
    #[serde(default)]
    pub limit: Option<i64>,
}

fn default_agg_func() -> AggFunc {
    AggFunc::Avg
}

fn default_bin_count() -> usize {
    10
}

impl HistogramSpec {
    /// A spec for `x_axis` with all other parameters at their defaults
    /// (derived counts, `avg`, 10 bins, no limit).
    pub fn new(x_axis: impl Into<String>) -> Self {
        Self {
            x_axis: x_axis.into(),
            y_axis: YAxis::default(),
            agg_func: default_agg_func(),
            bin_count: default_bin_count(),
            limit: None,
        }
    }
}

/// Which end of the sorted working table a limit keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankDirection {
    /// Keep the rows with the largest y values.
    Top,
    /// Keep the rows with the smallest y values.
    Bottom,
}

/// Internal decomposition of the signed `limit` parameter.
///
/// Built once when a request is prepared, so sign-based branching does not
/// propagate through the filtering algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitSelection {
    /// Number of rows to keep.
    pub count: usize,
    /// Which end of the sort to keep them from.
    pub direction: RankDirection,
}

impl LimitSelection {
    /// Decompose a signed limit: positive → top-N, zero or negative →
    /// bottom-N of the magnitude.
    pub fn from_signed(limit: i64) -> Self {
        let direction = if limit > 0 {
            RankDirection::Top
        } else {
            RankDirection::Bottom
        };
        Self {
            // Saturating cast: magnitudes past usize::MAX keep everything.
            count: usize::try_from(limit.unsigned_abs()).unwrap_or(usize::MAX),
            direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AggFunc, HistogramSpec, LimitSelection, RankDirection, YAxis};

    #[test]
    fn agg_func_parses_all_five_names() {
        for (name, expected) in [
            ("sum", AggFunc::Sum),
            ("avg", AggFunc::Avg),
            ("min", AggFunc::Min),
            ("max", AggFunc::Max),
            ("count", AggFunc::Count),
        ] {
            assert_eq!(name.parse::<AggFunc>().unwrap(), expected);
            assert_eq!(expected.as_str(), name);
        }
    }

    #[test]
    fn agg_func_rejects_unknown_names() {
        let err = "median".parse::<AggFunc>().unwrap_err();
        assert!(err.to_string().contains("unsupported aggregation"));
        assert!(err.to_string().contains("median"));
    }

    #[test]
    fn y_axis_count_sentinel_round_trips() {
        assert_eq!(YAxis::from("count".to_string()), YAxis::Count);
        assert_eq!(
            YAxis::from("revenue".to_string()),
            YAxis::Column("revenue".to_string())
        );
        assert_eq!(String::from(YAxis::Count), "count");
    }

    #[test]
    fn limit_decomposition_maps_sign_to_direction() {
        assert_eq!(
            LimitSelection::from_signed(3),
            LimitSelection {
                count: 3,
                direction: RankDirection::Top
            }
        );
        assert_eq!(
            LimitSelection::from_signed(-2),
            LimitSelection {
                count: 2,
                direction: RankDirection::Bottom
            }
        );
        // Zero keeps nothing, from the bottom end.
        assert_eq!(
            LimitSelection::from_signed(0),
            LimitSelection {
                count: 0,
                direction: RankDirection::Bottom
            }
        );
    }

    #[test]
    fn limit_decomposition_handles_extreme_magnitudes() {
        let selection = LimitSelection::from_signed(i64::MIN);
        assert_eq!(selection.direction, RankDirection::Bottom);
        assert_eq!(
            selection.count,
            usize::try_from(i64::MIN.unsigned_abs()).unwrap_or(usize::MAX)
        );
    }

    #[test]
    fn spec_defaults_match_the_request_contract() {
        let spec = HistogramSpec::new("category");
        assert_eq!(spec.y_axis, YAxis::Count);
        assert_eq!(spec.agg_func, AggFunc::Avg);
        assert_eq!(spec.bin_count, 10);
        assert_eq!(spec.limit, None);
    }
}
