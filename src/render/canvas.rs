use tracing::warn;

use crate::core::{Color, Pixel, PixelSink, Resolution};
use crate::error::{PlotError, PlotResult};

/// Row-major RGBA raster produced by one render pass.
///
/// Row 0 holds the lowest y values, which is also the first row written by
/// bottom-left-origin encoders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    resolution: Resolution,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Allocates a canvas cleared to [`Color::TRANSPARENT`].
    ///
    /// Sizes whose buffer cannot be allocated fail with
    /// [`PlotError::InvalidResolution`].
    pub fn new(resolution: Resolution) -> PlotResult<Self> {
        let resolution = resolution.validate()?;
        let too_large = || PlotError::InvalidResolution {
            width: resolution.width,
            height: resolution.height,
        };

        let count = resolution.pixel_count().ok_or_else(too_large)?;
        let mut pixels = Vec::new();
        if let Err(err) = pixels.try_reserve_exact(count) {
            warn!(
                width = resolution.width,
                height = resolution.height,
                error = %err,
                "canvas allocation refused"
            );
            return Err(too_large());
        }
        pixels.resize(count, Color::TRANSPARENT);
        Ok(Self { resolution, pixels })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.resolution.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.resolution.height
    }

    #[must_use]
    pub fn get(&self, column: u32, row: u32) -> Option<Color> {
        self.index(column, row).map(|index| self.pixels[index])
    }

    pub fn set(&mut self, column: u32, row: u32, color: Color) -> PlotResult<()> {
        let index = self.index(column, row).ok_or_else(|| {
            PlotError::InvalidData(format!(
                "pixel ({column}, {row}) outside {}x{} canvas",
                self.resolution.width, self.resolution.height
            ))
        })?;
        self.pixels[index] = color;
        Ok(())
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    #[must_use]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Rows from the bottom (`row` 0) up.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        self.pixels.chunks_exact(self.resolution.width as usize)
    }

    /// Number of pixels that differ from the cleared background.
    #[must_use]
    pub fn painted_count(&self) -> usize {
        self.pixels
            .iter()
            .filter(|&&color| color != Color::TRANSPARENT)
            .count()
    }

    fn index(&self, column: u32, row: u32) -> Option<usize> {
        if column >= self.resolution.width || row >= self.resolution.height {
            return None;
        }
        Some(row as usize * self.resolution.width as usize + column as usize)
    }
}

impl PixelSink for Canvas {
    fn plot(&mut self, pixel: Pixel, color: Color) {
        if let Some(index) = self.index(pixel.column, pixel.row) {
            self.pixels[index] = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_cleared() {
        let canvas = Canvas::new(Resolution::new(4, 3)).expect("canvas");
        assert_eq!(canvas.pixels().len(), 12);
        assert_eq!(canvas.painted_count(), 0);
    }

    #[test]
    fn writes_are_bounded() {
        let mut canvas = Canvas::new(Resolution::new(4, 3)).expect("canvas");
        canvas.set(3, 2, Color::RED).expect("in bounds");
        assert!(canvas.set(4, 0, Color::RED).is_err());
        canvas.plot(Pixel::new(10, 10), Color::GREEN);
        assert_eq!(canvas.painted_count(), 1);
        assert_eq!(canvas.rows().nth(2).map(|row| row[3]), Some(Color::RED));
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        assert!(matches!(
            Canvas::new(Resolution::new(0, 5)),
            Err(PlotError::InvalidResolution { width: 0, height: 5 })
        ));
    }

    #[test]
    fn unallocatable_canvas_is_rejected() {
        assert!(matches!(
            Canvas::new(Resolution::new(u32::MAX, u32::MAX)),
            Err(PlotError::InvalidResolution { .. })
        ));
    }
}
