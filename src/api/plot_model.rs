use tracing::debug;

use crate::core::{
    AxisRange, FunctionEntry, RangePolicy, Resolution, SamplingPolicy, Series, Style, StyleCursor,
};
use crate::error::PlotResult;

use super::PlotConfig;

/// Accumulates series and functions and renders them onto one canvas.
///
/// Mutation takes `&mut self` and rendering `&self`, so a model is never
/// rendered while it is being changed. Entries are drawn series first, then
/// functions, each group in registration order.
#[derive(Debug)]
pub struct PlotModel {
    pub(super) resolution: Resolution,
    pub(super) x_range: AxisRange,
    pub(super) y_range: AxisRange,
    pub(super) series: Vec<Series>,
    pub(super) functions: Vec<FunctionEntry>,
    pub(super) style_cursor: StyleCursor,
    pub(super) sampling: SamplingPolicy,
    pub(super) range_policy: RangePolicy,
}

impl Default for PlotModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotModel {
    /// Creates an empty model at the default 1024x768 resolution.
    #[must_use]
    pub fn new() -> Self {
        Self {
            resolution: Resolution::default(),
            x_range: AxisRange::auto(),
            y_range: AxisRange::auto(),
            series: Vec::new(),
            functions: Vec::new(),
            style_cursor: StyleCursor::default(),
            sampling: SamplingPolicy::default(),
            range_policy: RangePolicy::default(),
        }
    }

    pub fn with_resolution(width: u32, height: u32) -> PlotResult<Self> {
        let mut model = Self::new();
        model.set_resolution(width, height)?;
        Ok(model)
    }

    pub fn with_config(config: PlotConfig) -> PlotResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            resolution: config.resolution,
            x_range: config.x_range,
            y_range: config.y_range,
            sampling: config.sampling,
            range_policy: config.range_policy,
            ..Self::new()
        })
    }

    #[must_use]
    pub fn config(&self) -> PlotConfig {
        PlotConfig {
            resolution: self.resolution,
            x_range: self.x_range,
            y_range: self.y_range,
            sampling: self.sampling,
            range_policy: self.range_policy,
        }
    }

    /// Drops all entries and restores default resolution, ranges and style
    /// cursor. Sampling and range policies are kept.
    pub fn clear(&mut self) {
        debug!(
            series = self.series.len(),
            functions = self.functions.len(),
            "clear plot model"
        );
        self.resolution = Resolution::default();
        self.x_range = AxisRange::auto();
        self.y_range = AxisRange::auto();
        self.series.clear();
        self.functions.clear();
        self.style_cursor.reset();
    }

    /// Pins the x-range. A non-finite bound returns that end to auto-inference.
    pub fn set_x_range(&mut self, low: f64, high: f64) {
        self.x_range = AxisRange::pinned(low, high);
    }

    /// Pins the y-range. A non-finite bound returns that end to auto-inference.
    pub fn set_y_range(&mut self, low: f64, high: f64) {
        self.y_range = AxisRange::pinned(low, high);
    }

    pub fn set_x_bounds(&mut self, low: Option<f64>, high: Option<f64>) {
        self.x_range = AxisRange::from_bounds(low, high);
    }

    pub fn set_y_bounds(&mut self, low: Option<f64>, high: Option<f64>) {
        self.y_range = AxisRange::from_bounds(low, high);
    }

    #[must_use]
    pub fn x_range(&self) -> AxisRange {
        self.x_range
    }

    #[must_use]
    pub fn y_range(&self) -> AxisRange {
        self.y_range
    }

    /// Sets the resolution used by [`PlotModel::render`].
    pub fn set_resolution(&mut self, width: u32, height: u32) -> PlotResult<()> {
        self.resolution = Resolution::new(width, height).validate()?;
        Ok(())
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn sampling_policy(&self) -> SamplingPolicy {
        self.sampling
    }

    pub fn set_sampling_policy(&mut self, policy: SamplingPolicy) -> PlotResult<()> {
        self.sampling = policy.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn range_policy(&self) -> RangePolicy {
        self.range_policy
    }

    pub fn set_range_policy(&mut self, policy: RangePolicy) -> PlotResult<()> {
        self.range_policy = policy.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn functions(&self) -> &[FunctionEntry] {
        &self.functions
    }

    #[must_use]
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    /// Style the next auto-styled entry will receive.
    #[must_use]
    pub fn next_style(&self) -> Style {
        self.style_cursor.peek()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty() && self.functions.is_empty()
    }
}
