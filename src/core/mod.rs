pub mod function;
pub mod mapper;
pub mod range;
pub mod series;
pub mod style;
pub mod types;

pub use function::{FunctionEntry, FunctionTrace, PlotFn, SamplingPolicy, rasterize_function};
pub use mapper::{CoordinateMapper, Pixel, PixelSink};
pub use range::{AxisRange, Extent, RangeComputer, RangePolicy, ResolvedRange};
pub use series::{Series, rasterize_series};
pub use style::{Color, Connector, PALETTE, Style, StyleCursor};
pub use types::{Axis, DEFAULT_HEIGHT, DEFAULT_WIDTH, DataPoint, Resolution};
