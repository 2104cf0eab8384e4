use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{CoordinateMapper, DataPoint, Pixel, PixelSink, Style};
use crate::error::{PlotError, PlotResult};

/// Discrete (x, y) samples drawn as a connected path.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    style: Style,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Series {
    pub fn new(style: Style, xs: Vec<f64>, ys: Vec<f64>) -> PlotResult<Self> {
        if xs.len() != ys.len() {
            return Err(PlotError::MismatchedSeriesLength {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if xs.iter().chain(&ys).any(|v| !v.is_finite()) {
            return Err(PlotError::InvalidData(
                "series values must be finite".to_owned(),
            ));
        }
        Ok(Self { style, xs, ys })
    }

    /// Builds a series whose x-values are the sample indices `0..len`.
    pub fn from_values(style: Style, ys: Vec<f64>) -> PlotResult<Self> {
        let xs = (0..ys.len()).map(|i| i as f64).collect();
        Self::new(style, xs, ys)
    }

    #[must_use]
    pub fn style(&self) -> Style {
        self.style
    }

    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = DataPoint> + '_ {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| DataPoint::new(x, y))
    }
}

/// Draws `series` as a connected path and returns the number of pixel writes.
///
/// Every segment is walked in continuous raster space with sub-pixel steps
/// along its dominant axis, so consecutive writes never leave a gap. Parts
/// of a segment outside the raster are clamped onto the nearest edge.
pub fn rasterize_series<S: PixelSink + ?Sized>(
    series: &Series,
    mapper: CoordinateMapper,
    sink: &mut S,
) -> usize {
    let mut writer = PathWriter {
        sink,
        style: series.style(),
        last: None,
        writes: 0,
    };

    let mut previous: Option<(f64, f64)> = None;
    for point in series.points() {
        let current = mapper.to_continuous(point.x, point.y);
        match previous {
            Some(from) => walk_segment(from, current, mapper, &mut writer),
            None if series.len() == 1 => {
                writer.write(mapper.snap(current.0, current.1));
            }
            None => {}
        }
        previous = Some(current);
    }

    trace!(
        points = series.len(),
        writes = writer.writes,
        "rasterized series"
    );
    writer.writes
}

struct PathWriter<'a, S: PixelSink + ?Sized> {
    sink: &'a mut S,
    style: Style,
    last: Option<Pixel>,
    writes: usize,
}

impl<S: PixelSink + ?Sized> PathWriter<'_, S> {
    fn write(&mut self, pixel: Pixel) {
        if self.last == Some(pixel) {
            return;
        }
        self.sink.plot(pixel, self.style.color);
        self.last = Some(pixel);
        self.writes += 1;
    }
}

fn walk_segment<S: PixelSink + ?Sized>(
    from: (f64, f64),
    to: (f64, f64),
    mapper: CoordinateMapper,
    writer: &mut PathWriter<'_, S>,
) {
    // Each segment reports its own pixels, even when it starts where the
    // previous one ended.
    writer.last = None;
    let breaks = clamp_breakpoints(from, to, mapper);
    let at = |t: f64| {
        let column = from.0 + (to.0 - from.0) * t;
        let row = from.1 + (to.1 - from.1) * t;
        (
            column.clamp(0.0, mapper.max_column()),
            row.clamp(0.0, mapper.max_row()),
        )
    };

    for pair in breaks.windows(2) {
        walk_clamped(at(pair[0].0), at(pair[1].0), mapper, writer);
    }
}

/// Parameters in `[0, 1]` where the segment enters or leaves the raster box.
///
/// Between two consecutive breakpoints the clamped path is a straight line
/// inside the raster, which keeps each walk bounded by the raster size no
/// matter how far outside the data lies.
fn clamp_breakpoints(
    from: (f64, f64),
    to: (f64, f64),
    mapper: CoordinateMapper,
) -> SmallVec<[OrderedFloat<f64>; 6]> {
    let mut breaks: SmallVec<[OrderedFloat<f64>; 6]> = SmallVec::new();
    breaks.push(OrderedFloat(0.0));
    breaks.push(OrderedFloat(1.0));

    for (start, end, limit) in [
        (from.0, to.0, 0.0),
        (from.0, to.0, mapper.max_column()),
        (from.1, to.1, 0.0),
        (from.1, to.1, mapper.max_row()),
    ] {
        let delta = end - start;
        if delta != 0.0 {
            let t = (limit - start) / delta;
            if t > 0.0 && t < 1.0 {
                breaks.push(OrderedFloat(t));
            }
        }
    }

    breaks.sort_unstable();
    breaks
}

/// DDA walk between two in-raster positions.
///
/// Both deltas are divided by `ceil(major) + 1`, where `major` is the
/// dominant magnitude, so the dominant axis advances by less than one cell
/// per step and a zero-length segment still takes a single finite step.
fn walk_clamped<S: PixelSink + ?Sized>(
    from: (f64, f64),
    to: (f64, f64),
    mapper: CoordinateMapper,
    writer: &mut PathWriter<'_, S>,
) {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let major = dx.abs().max(dy.abs());
    let steps = major.ceil() as usize + 1;
    let step_x = dx / steps as f64;
    let step_y = dy / steps as f64;

    for i in 0..=steps {
        let t = i as f64;
        writer.write(mapper.snap(from.0 + step_x * t, from.1 + step_y * t));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Axis, Color, Resolution, ResolvedRange};

    #[derive(Default)]
    struct Recorder(Vec<Pixel>);

    impl PixelSink for Recorder {
        fn plot(&mut self, pixel: Pixel, _color: Color) {
            self.0.push(pixel);
        }
    }

    fn mapper(low: f64, high: f64, size: u32) -> CoordinateMapper {
        let x = ResolvedRange::new(Axis::X, low, high).expect("x range");
        let y = ResolvedRange::new(Axis::Y, low, high).expect("y range");
        CoordinateMapper::new(x, y, Resolution::new(size, size)).expect("mapper")
    }

    fn style() -> Style {
        Style::marker(Color::RED)
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let result = Series::new(style(), vec![0.0, 1.0], vec![0.0]);
        assert!(matches!(
            result,
            Err(PlotError::MismatchedSeriesLength { xs: 2, ys: 1 })
        ));
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(Series::new(style(), vec![0.0], vec![f64::NAN]).is_err());
    }

    #[test]
    fn value_series_uses_indices_for_x() {
        let series = Series::from_values(style(), vec![3.0, 4.0, 5.0]).expect("series");
        assert_eq!(series.xs(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn diagonal_walk_is_gap_free() {
        let series = Series::new(style(), vec![0.0, 10.0], vec![0.0, 5.0]).expect("series");
        let mut recorder = Recorder::default();
        rasterize_series(&series, mapper(0.0, 11.0, 11), &mut recorder);

        for pair in recorder.0.windows(2) {
            assert!(pair[0].column.abs_diff(pair[1].column) <= 1);
            assert!(pair[0].row.abs_diff(pair[1].row) <= 1);
        }
        assert_eq!(recorder.0.first(), Some(&Pixel::new(0, 0)));
        assert_eq!(recorder.0.last(), Some(&Pixel::new(10, 5)));
    }

    #[test]
    fn descending_segment_is_walked() {
        let series = Series::new(style(), vec![10.0, 0.0], vec![10.0, 0.0]).expect("series");
        let mut recorder = Recorder::default();
        rasterize_series(&series, mapper(0.0, 10.0, 11), &mut recorder);
        assert_eq!(recorder.0.len(), 11);
    }

    #[test]
    fn single_point_writes_once() {
        let series = Series::new(style(), vec![5.0], vec![5.0]).expect("series");
        let mut recorder = Recorder::default();
        assert_eq!(rasterize_series(&series, mapper(0.0, 10.0, 11), &mut recorder), 1);
    }

    #[test]
    fn far_outside_segment_is_bounded() {
        let series = Series::new(style(), vec![0.0, 1e12], vec![5.0, 5.0]).expect("series");
        let mut recorder = Recorder::default();
        let writes = rasterize_series(&series, mapper(0.0, 10.0, 11), &mut recorder);
        assert_eq!(writes, 11);
        assert!(recorder.0.iter().all(|p| p.column <= 10 && p.row <= 10));
    }
}
