use thiserror::Error;

use crate::core::Axis;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("degenerate {axis} range: {reason}")]
    DegenerateRange { axis: Axis, reason: String },

    #[error("series length mismatch: {xs} x-values vs {ys} y-values")]
    MismatchedSeriesLength { xs: usize, ys: usize },

    #[error("invalid resolution: width={width}, height={height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}
