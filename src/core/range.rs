use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Axis, FunctionEntry, Series};
use crate::error::{PlotError, PlotResult};

/// User-facing axis bounds. `None` marks a bound left to auto-inference.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisRange {
    pub low: Option<f64>,
    pub high: Option<f64>,
}

impl AxisRange {
    #[must_use]
    pub fn auto() -> Self {
        Self::default()
    }

    /// Pins both bounds. Non-finite values leave that bound unset.
    #[must_use]
    pub fn pinned(low: f64, high: f64) -> Self {
        Self::from_bounds(Some(low), Some(high))
    }

    #[must_use]
    pub fn from_bounds(low: Option<f64>, high: Option<f64>) -> Self {
        Self {
            low: low.filter(|v| v.is_finite()),
            high: high.filter(|v| v.is_finite()),
        }
    }

    #[must_use]
    pub fn is_auto(self) -> bool {
        self.low.is_none() && self.high.is_none()
    }

    #[must_use]
    pub fn is_pinned(self) -> bool {
        self.low.is_some() && self.high.is_some()
    }
}

/// Final bounds of one axis; always finite with `low < high` and a finite span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RangeBounds")]
pub struct ResolvedRange {
    low: f64,
    high: f64,
}

/// Unchecked wire form of [`ResolvedRange`].
#[derive(Deserialize)]
struct RangeBounds {
    low: f64,
    high: f64,
}

impl TryFrom<RangeBounds> for ResolvedRange {
    type Error = PlotError;

    fn try_from(bounds: RangeBounds) -> PlotResult<Self> {
        match bounds_error(bounds.low, bounds.high) {
            Some(reason) => Err(PlotError::InvalidData(format!("resolved range: {reason}"))),
            None => Ok(Self {
                low: bounds.low,
                high: bounds.high,
            }),
        }
    }
}

fn bounds_error(low: f64, high: f64) -> Option<String> {
    if !low.is_finite() || !high.is_finite() {
        return Some(format!("bounds must be finite, got [{low}, {high}]"));
    }
    if low >= high {
        return Some(format!("low {low} must be below high {high}"));
    }
    if !(high - low).is_finite() {
        return Some(format!("span of [{low}, {high}] overflows f64"));
    }
    None
}

impl ResolvedRange {
    pub fn new(axis: Axis, low: f64, high: f64) -> PlotResult<Self> {
        match bounds_error(low, high) {
            Some(reason) => Err(PlotError::DegenerateRange { axis, reason }),
            None => Ok(Self { low, high }),
        }
    }

    #[must_use]
    pub fn low(self) -> f64 {
        self.low
    }

    #[must_use]
    pub fn high(self) -> f64 {
        self.high
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.high - self.low
    }

    #[must_use]
    pub fn bounds(self) -> (f64, f64) {
        (self.low, self.high)
    }
}

/// Running min/max over finite samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    min: f64,
    max: f64,
}

impl Default for Extent {
    fn default() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl Extent {
    pub fn include(&mut self, value: f64) {
        if value.is_finite() {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
    }

    #[must_use]
    pub fn min(self) -> Option<f64> {
        self.min.is_finite().then_some(self.min)
    }

    #[must_use]
    pub fn max(self) -> Option<f64> {
        self.max.is_finite().then_some(self.max)
    }
}

impl Extend<f64> for Extent {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.include(value);
        }
    }
}

/// Tuning for auto-inferred bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangePolicy {
    /// Fraction of the data span added as padding (`0.05` widens by 5%).
    pub padding_ratio: f64,
    /// Span substituted when every inferred value is identical.
    pub min_auto_span: f64,
}

impl Default for RangePolicy {
    fn default() -> Self {
        Self {
            padding_ratio: 0.05,
            min_auto_span: 1.0,
        }
    }
}

impl RangePolicy {
    pub fn validate(self) -> PlotResult<Self> {
        if !self.padding_ratio.is_finite() || self.padding_ratio < 0.0 {
            return Err(PlotError::InvalidData(
                "range padding ratio must be finite and >= 0".to_owned(),
            ));
        }
        if !self.min_auto_span.is_finite() || self.min_auto_span <= 0.0 {
            return Err(PlotError::InvalidData(
                "range min auto span must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Fills in unset axis bounds from series data and function samples.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RangeComputer {
    policy: RangePolicy,
}

impl RangeComputer {
    #[must_use]
    pub fn new(policy: RangePolicy) -> Self {
        Self { policy }
    }

    /// Resolves both axes.
    ///
    /// The x-axis is inferred from series only. The y-axis additionally
    /// samples every function at `sampling_columns` evenly spaced points of
    /// the resolved x-range, so the x-axis must resolve first.
    pub fn resolve(
        &self,
        x_axis: AxisRange,
        y_axis: AxisRange,
        series: &[Series],
        functions: &[FunctionEntry],
        sampling_columns: u32,
    ) -> PlotResult<(ResolvedRange, ResolvedRange)> {
        let mut x_extent = Extent::default();
        if !x_axis.is_pinned() {
            for entry in series {
                x_extent.extend(entry.xs().iter().copied());
            }
        }
        let x_range = self.resolve_axis(Axis::X, x_axis, x_extent)?;

        let mut y_extent = Extent::default();
        if !y_axis.is_pinned() {
            for entry in series {
                y_extent.extend(entry.ys().iter().copied());
            }
            if !functions.is_empty() && sampling_columns > 0 {
                let step = x_range.span() / f64::from(sampling_columns);
                for function in functions {
                    y_extent.extend(
                        (0..sampling_columns)
                            .map(|i| function.eval(x_range.low() + f64::from(i) * step)),
                    );
                }
            }
        }
        let y_range = self.resolve_axis(Axis::Y, y_axis, y_extent)?;

        debug!(
            x_low = x_range.low(),
            x_high = x_range.high(),
            y_low = y_range.low(),
            y_high = y_range.high(),
            "resolved plot ranges"
        );
        Ok((x_range, y_range))
    }

    /// Resolves one axis from its pinned bounds and the observed extent.
    ///
    /// Padding grows the span by `padding_ratio`. When both ends were
    /// inferred each moves by half the pad; when only one was, that end
    /// takes the whole pad. Pinned ends never move.
    pub fn resolve_axis(
        &self,
        axis: Axis,
        bounds: AxisRange,
        extent: Extent,
    ) -> PlotResult<ResolvedRange> {
        let low_auto = bounds.low.is_none();
        let high_auto = bounds.high.is_none();

        let mut low = match bounds.low.or(extent.min()) {
            Some(value) => value,
            None => return Err(no_data(axis, "lower")),
        };
        let mut high = match bounds.high.or(extent.max()) {
            Some(value) => value,
            None => return Err(no_data(axis, "upper")),
        };

        if low == high {
            let min_span = self.policy.min_auto_span;
            match (low_auto, high_auto) {
                (true, true) => {
                    low -= min_span / 2.0;
                    high += min_span / 2.0;
                }
                (true, false) => low -= min_span,
                (false, true) => high += min_span,
                (false, false) => {}
            }
        }

        // Validates the unpadded span so pinned inversions surface here.
        let unpadded = ResolvedRange::new(axis, low, high)?;

        let pad = unpadded.span() * self.policy.padding_ratio;
        match (low_auto, high_auto) {
            (true, true) => {
                low -= pad / 2.0;
                high += pad / 2.0;
            }
            (true, false) => low -= pad,
            (false, true) => high += pad,
            (false, false) => {}
        }

        ResolvedRange::new(axis, low, high)
    }
}

fn no_data(axis: Axis, which: &str) -> PlotError {
    PlotError::DegenerateRange {
        axis,
        reason: format!("no series data to infer the {which} bound; pin the range explicitly"),
    }
}
