use serde::{Deserialize, Serialize};

use crate::core::{FunctionTrace, ResolvedRange, Resolution};
use crate::error::{PlotError, PlotResult};
use crate::render::Canvas;

/// Recoverable conditions hit during a render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RenderWarning {
    /// A function kept demanding samples past its budget; its trace was
    /// cut at `truncated_at`.
    NonterminatingSample {
        function_index: usize,
        truncated_at: f64,
        accepted: u64,
    },
}

/// Deterministic summary of one render pass, used by tests and diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderReport {
    pub resolution: Resolution,
    pub x_range: ResolvedRange,
    pub y_range: ResolvedRange,
    /// Pixel writes per series, in registration order.
    pub series_writes: Vec<usize>,
    /// Sampling counters per function, in registration order.
    pub functions: Vec<FunctionTrace>,
    pub warnings: Vec<RenderWarning>,
}

impl RenderReport {
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize render report json: {e}"))
        })
    }
}

/// Canvas plus the report describing how it was produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    pub canvas: Canvas,
    pub report: RenderReport,
}
