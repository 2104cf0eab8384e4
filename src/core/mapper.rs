use crate::core::{Color, ResolvedRange, Resolution};
use crate::error::PlotResult;

/// Integer raster cell. `row` 0 holds the lowest y values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub column: u32,
    pub row: u32,
}

impl Pixel {
    #[must_use]
    pub fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

/// Destination for rasterized pixels.
pub trait PixelSink {
    fn plot(&mut self, pixel: Pixel, color: Color);
}

/// Maps data-space coordinates onto a fixed raster.
///
/// One data unit spans `width / (x_high - x_low)` columns; positions are
/// rounded to the nearest cell and clamped into the raster so callers
/// never write out of bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    x_range: ResolvedRange,
    y_range: ResolvedRange,
    resolution: Resolution,
}

impl CoordinateMapper {
    pub fn new(
        x_range: ResolvedRange,
        y_range: ResolvedRange,
        resolution: Resolution,
    ) -> PlotResult<Self> {
        Ok(Self {
            x_range,
            y_range,
            resolution: resolution.validate()?,
        })
    }

    #[must_use]
    pub fn x_range(self) -> ResolvedRange {
        self.x_range
    }

    #[must_use]
    pub fn y_range(self) -> ResolvedRange {
        self.y_range
    }

    #[must_use]
    pub fn resolution(self) -> Resolution {
        self.resolution
    }

    /// Data-space width of one column.
    #[must_use]
    pub fn column_step(self) -> f64 {
        self.x_range.span() / f64::from(self.resolution.width)
    }

    /// Data-space height of one row.
    #[must_use]
    pub fn row_step(self) -> f64 {
        self.y_range.span() / f64::from(self.resolution.height)
    }

    /// Unrounded column position of `x`.
    #[must_use]
    pub fn column_of(self, x: f64) -> f64 {
        (x - self.x_range.low()) / self.column_step()
    }

    /// Unrounded row position of `y`.
    #[must_use]
    pub fn row_of(self, y: f64) -> f64 {
        (y - self.y_range.low()) / self.row_step()
    }

    #[must_use]
    pub fn to_continuous(self, x: f64, y: f64) -> (f64, f64) {
        (self.column_of(x), self.row_of(y))
    }

    #[must_use]
    pub fn to_pixel(self, x: f64, y: f64) -> Pixel {
        let (column, row) = self.to_continuous(x, y);
        self.snap(column, row)
    }

    /// Highest valid continuous column position.
    #[must_use]
    pub fn max_column(self) -> f64 {
        f64::from(self.resolution.width - 1)
    }

    /// Highest valid continuous row position.
    #[must_use]
    pub fn max_row(self) -> f64 {
        f64::from(self.resolution.height - 1)
    }

    /// Rounds a continuous raster position and clamps it to the raster.
    #[must_use]
    pub fn snap(self, column: f64, row: f64) -> Pixel {
        Pixel {
            column: snap_index(column, self.resolution.width),
            row: snap_index(row, self.resolution.height),
        }
    }
}

fn snap_index(position: f64, extent: u32) -> u32 {
    let max = f64::from(extent - 1);
    // `clamp` keeps NaN, which `as` then saturates to 0.
    position.round().clamp(0.0, max) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Axis;

    fn mapper(width: u32, height: u32) -> CoordinateMapper {
        let x = ResolvedRange::new(Axis::X, 0.0, 10.0).expect("x range");
        let y = ResolvedRange::new(Axis::Y, -1.0, 1.0).expect("y range");
        CoordinateMapper::new(x, y, Resolution::new(width, height)).expect("mapper")
    }

    #[test]
    fn maps_midpoint_to_center_cell() {
        let pixel = mapper(100, 50).to_pixel(5.0, 0.0);
        assert_eq!(pixel, Pixel::new(50, 25));
    }

    #[test]
    fn clamps_out_of_range_values() {
        let m = mapper(100, 50);
        assert_eq!(m.to_pixel(-3.0, -9.0), Pixel::new(0, 0));
        assert_eq!(m.to_pixel(10.0, 1.0), Pixel::new(99, 49));
        assert_eq!(m.to_pixel(1e9, 1e9), Pixel::new(99, 49));
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let x = ResolvedRange::new(Axis::X, 0.0, 1.0).expect("x range");
        let y = ResolvedRange::new(Axis::Y, 0.0, 1.0).expect("y range");
        assert!(CoordinateMapper::new(x, y, Resolution::new(0, 10)).is_err());
    }
}
