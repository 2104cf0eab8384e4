use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, RangePolicy, Resolution, SamplingPolicy};
use crate::error::{PlotError, PlotResult};

pub const PLOT_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Serializable plot setup.
///
/// Hosts can persist/load a plot's resolution, pinned ranges and sampling
/// bounds without inventing their own format. Missing fields fall back to
/// their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub resolution: Resolution,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub sampling: SamplingPolicy,
    pub range_policy: RangePolicy,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::new(Resolution::default())
    }
}

impl PlotConfig {
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            x_range: AxisRange::auto(),
            y_range: AxisRange::auto(),
            sampling: SamplingPolicy::default(),
            range_policy: RangePolicy::default(),
        }
    }

    /// Pins the x-range.
    #[must_use]
    pub fn with_x_range(mut self, low: f64, high: f64) -> Self {
        self.x_range = AxisRange::pinned(low, high);
        self
    }

    /// Pins the y-range.
    #[must_use]
    pub fn with_y_range(mut self, low: f64, high: f64) -> Self {
        self.y_range = AxisRange::pinned(low, high);
        self
    }

    #[must_use]
    pub fn with_sampling(mut self, sampling: SamplingPolicy) -> Self {
        self.sampling = sampling;
        self
    }

    #[must_use]
    pub fn with_range_policy(mut self, range_policy: RangePolicy) -> Self {
        self.range_policy = range_policy;
        self
    }

    pub fn validate(self) -> PlotResult<Self> {
        Ok(Self {
            resolution: self.resolution.validate()?,
            x_range: AxisRange::from_bounds(self.x_range.low, self.x_range.high),
            y_range: AxisRange::from_bounds(self.y_range.low, self.y_range.high),
            sampling: self.sampling.validate()?,
            range_policy: self.range_policy.validate()?,
        })
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        let payload = PlotConfigJsonContractV1 {
            schema_version: PLOT_CONFIG_JSON_SCHEMA_V1,
            config: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize plot config contract v1: {e}"))
        })
    }

    /// Parses either a bare config object or a versioned contract payload.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse plot config json: {e}")))?;

        let config = if value.get("schema_version").is_some() {
            let payload: PlotConfigJsonContractV1 = serde_json::from_value(value).map_err(|e| {
                PlotError::InvalidData(format!("failed to parse plot config contract: {e}"))
            })?;
            if payload.schema_version != PLOT_CONFIG_JSON_SCHEMA_V1 {
                return Err(PlotError::InvalidData(format!(
                    "unsupported plot config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value(value)
                .map_err(|e| PlotError::InvalidData(format!("failed to parse plot config: {e}")))?
        };

        config.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: PlotConfig,
}
