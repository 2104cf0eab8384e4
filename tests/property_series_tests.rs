use raster_plot::PlotModel;
use raster_plot::core::{
    Color, CoordinateMapper, Pixel, PixelSink, Resolution, rasterize_series,
};
use proptest::prelude::*;

#[derive(Default)]
struct Recorder(Vec<Pixel>);

impl PixelSink for Recorder {
    fn plot(&mut self, pixel: Pixel, _color: Color) {
        self.0.push(pixel);
    }
}

proptest! {
    #[test]
    fn every_pair_plots_in_bounds(
        xs in proptest::collection::vec(-10_000.0f64..10_000.0, 1..48),
        ys in proptest::collection::vec(-1_000.0f64..1_000.0, 1..48),
        width in 1u32..512,
        height in 1u32..512,
        pin in proptest::option::of((-100.0f64..100.0, 0.5f64..50.0)),
    ) {
        let len = xs.len().min(ys.len());
        let mut plot = PlotModel::new();
        if let Some((low, span)) = pin {
            plot.set_x_range(low, low + span);
            plot.set_y_range(low, low + span);
        }
        plot.add_series(xs[..len].to_vec(), ys[..len].to_vec()).expect("series");

        let (x_range, y_range) = plot.resolve_ranges(width).expect("ranges");
        let mapper = CoordinateMapper::new(x_range, y_range, Resolution::new(width, height))
            .expect("mapper");

        let mut recorder = Recorder::default();
        let writes = rasterize_series(&plot.series()[0], mapper, &mut recorder);

        prop_assert!(writes >= len.saturating_sub(1).max(1));
        prop_assert_eq!(writes, recorder.0.len());
        for pixel in &recorder.0 {
            prop_assert!(pixel.column < width && pixel.row < height);
        }
        for pair in recorder.0.windows(2) {
            prop_assert!(pair[0].column.abs_diff(pair[1].column) <= 1);
            prop_assert!(pair[0].row.abs_diff(pair[1].row) <= 1);
        }
    }
}
