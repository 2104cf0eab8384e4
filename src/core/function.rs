use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{CoordinateMapper, PixelSink, Style};
use crate::error::{PlotError, PlotResult};

pub type PlotFn = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// Continuous `f(x)` drawn across the resolved x-range.
pub struct FunctionEntry {
    style: Style,
    function: PlotFn,
}

impl FunctionEntry {
    pub fn new<F>(style: Style, function: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            style,
            function: Box::new(function),
        }
    }

    #[must_use]
    pub fn style(&self) -> Style {
        self.style
    }

    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        (self.function)(x)
    }
}

impl fmt::Debug for FunctionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionEntry")
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

/// Bounds on adaptive function sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingPolicy {
    /// Maximum number of step halvings before a sample is accepted anyway.
    pub max_halvings: u32,
    /// Accepted samples allowed per output column before the trace is cut.
    pub max_samples_per_column: u32,
}

impl Default for SamplingPolicy {
    fn default() -> Self {
        Self {
            max_halvings: 24,
            max_samples_per_column: 256,
        }
    }
}

impl SamplingPolicy {
    pub fn validate(self) -> PlotResult<Self> {
        if self.max_halvings == 0 || self.max_halvings > 64 {
            return Err(PlotError::InvalidData(
                "sampling max halvings must be in 1..=64".to_owned(),
            ));
        }
        if self.max_samples_per_column == 0 {
            return Err(PlotError::InvalidData(
                "sampling max samples per column must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Counters from one function rasterization pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FunctionTrace {
    pub evaluations: u64,
    pub accepted: u64,
    pub plotted: u64,
    /// Samples accepted because the halving budget ran out.
    pub budget_exhausted: u64,
    /// Samples skipped because `f(x)` was not finite.
    pub gaps: u64,
    /// X position where sampling stopped early, if it did.
    pub truncated_at: Option<f64>,
}

impl FunctionTrace {
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncated_at.is_some()
    }
}

/// Samples `entry` from the low to the high end of the mapper's x-range.
///
/// Each step starts at one column width and is halved until the sample
/// lands less than one row away from the previous one, so consecutive
/// plotted pixels never leave a vertical gap. Rows are compared after
/// clamping to the raster, so samples beyond the same edge never force
/// halving. Halving stops after `policy.max_halvings` and the sample is
/// taken as is; the whole pass stops after `max_samples_per_column * width`
/// accepted samples.
pub fn rasterize_function<S: PixelSink + ?Sized>(
    entry: &FunctionEntry,
    mapper: CoordinateMapper,
    policy: SamplingPolicy,
    sink: &mut S,
) -> FunctionTrace {
    let (x_low, x_high) = mapper.x_range().bounds();
    let base_step = mapper.column_step();
    let max_samples =
        u64::from(policy.max_samples_per_column) * u64::from(mapper.resolution().width);
    let color = entry.style().color;

    // NaN marks a sample that cannot be plotted.
    let row_at = |x: f64| {
        let row = mapper.row_of(entry.eval(x));
        if row.is_finite() {
            row.clamp(0.0, mapper.max_row())
        } else {
            f64::NAN
        }
    };

    let mut trace = FunctionTrace::default();
    let mut plot = |x: f64, row: f64, trace: &mut FunctionTrace| {
        trace.accepted += 1;
        if row.is_finite() {
            sink.plot(mapper.snap(mapper.column_of(x), row), color);
            trace.plotted += 1;
            Some(row)
        } else {
            trace.gaps += 1;
            None
        }
    };

    let mut x = x_low;
    trace.evaluations += 1;
    let mut previous_row = plot(x, row_at(x), &mut trace);

    while x < x_high {
        if trace.accepted >= max_samples {
            trace.truncated_at = Some(x);
            break;
        }

        let mut step = base_step.min(x_high - x);
        let mut halvings = 0;
        let (next_x, row) = loop {
            let candidate = x + step;
            let row = row_at(candidate);
            trace.evaluations += 1;

            let Some(previous) = previous_row else {
                break (candidate, row);
            };
            if !row.is_finite() || (row - previous).abs() < 1.0 {
                break (candidate, row);
            }
            if halvings >= policy.max_halvings || x + step / 2.0 <= x {
                trace.budget_exhausted += 1;
                break (candidate, row);
            }
            step /= 2.0;
            halvings += 1;
        };

        if next_x <= x {
            // The step vanished below float resolution at `x`.
            trace.truncated_at = Some(x);
            break;
        }

        x = next_x;
        previous_row = plot(x, row, &mut trace);
    }

    trace!(
        evaluations = trace.evaluations,
        accepted = trace.accepted,
        plotted = trace.plotted,
        budget_exhausted = trace.budget_exhausted,
        "rasterized function"
    );
    trace
}
