use raster_plot::PlotModel;
use raster_plot::api::RenderWarning;
use raster_plot::core::{
    Color, CoordinateMapper, Pixel, PixelSink, Resolution, SamplingPolicy, rasterize_function,
};

#[derive(Default)]
struct Recorder(Vec<Pixel>);

impl PixelSink for Recorder {
    fn plot(&mut self, pixel: Pixel, _color: Color) {
        self.0.push(pixel);
    }
}

#[test]
fn sine_trace_has_no_vertical_gaps() {
    let mut plot = PlotModel::new();
    plot.set_x_range(0.0, 6.2832);
    plot.add_function(f64::sin);

    let (x, y) = plot.resolve_ranges(200).expect("ranges");
    let mapper = CoordinateMapper::new(x, y, Resolution::new(200, 50)).expect("mapper");
    let mut recorder = Recorder::default();
    let trace = rasterize_function(
        &plot.functions()[0],
        mapper,
        plot.sampling_policy(),
        &mut recorder,
    );

    assert!(!trace.is_truncated());
    assert!(recorder.0.len() >= 200);
    for pair in recorder.0.windows(2) {
        assert!(
            pair[0].row.abs_diff(pair[1].row) <= 1,
            "gap between {:?} and {:?}",
            pair[0],
            pair[1]
        );
        assert!(pair[1].column >= pair[0].column);
    }
}

#[test]
fn sine_render_covers_every_column() {
    let mut plot = PlotModel::new();
    plot.set_x_range(0.0, 6.2832);
    plot.add_function(f64::sin);

    let canvas = plot.render_at(200, 50).expect("render");
    for column in 0..200 {
        let painted = (0..50).any(|row| canvas.get(column, row) != Some(Color::TRANSPARENT));
        assert!(painted, "column {column} is empty");
    }
}

#[test]
fn pole_does_not_hang_render() {
    let mut plot = PlotModel::new();
    plot.set_x_range(-1.0, 1.0);
    plot.set_y_range(-10.0, 10.0);
    plot.add_function(|x| 1.0 / x);

    let output = plot.render_with_report(128, 64).expect("render");
    let trace = output.report.functions[0];
    assert!(!trace.is_truncated());
    assert!(trace.plotted > 0);
}

#[test]
fn jump_discontinuity_accepts_sample_after_halving_budget() {
    let mut plot = PlotModel::new();
    plot.set_x_range(-1.0, 1.0);
    plot.set_y_range(-10.0, 10.0);
    plot.add_function(|x| if x < 0.3 { -5.0 } else { 5.0 });

    let output = plot.render_with_report(128, 64).expect("render");
    let trace = output.report.functions[0];
    assert_eq!(trace.budget_exhausted, 1);
    assert!(!output.report.has_warnings());
}

#[test]
fn runaway_sampling_is_truncated_with_warning() {
    let mut plot = PlotModel::new();
    plot.set_x_range(0.0, 1.0);
    plot.set_y_range(-1.0, 1.0);
    plot.set_sampling_policy(SamplingPolicy {
        max_halvings: 8,
        max_samples_per_column: 1,
    })
    .expect("policy");
    plot.add_function(|x| (x * 1e7).sin());

    let output = plot.render_with_report(16, 16).expect("render");
    assert_eq!(output.report.warnings.len(), 1);
    assert!(matches!(
        output.report.warnings[0],
        RenderWarning::NonterminatingSample {
            function_index: 0,
            accepted: 16,
            ..
        }
    ));
    assert!(output.canvas.painted_count() > 0);
}

#[test]
fn nan_regions_leave_gaps() {
    let mut plot = PlotModel::new();
    plot.set_x_range(-1.0, 1.0);
    plot.add_function(f64::sqrt);

    let output = plot.render_with_report(100, 40).expect("render");
    let trace = output.report.functions[0];
    assert!(trace.gaps > 0);
    assert!(!output.report.has_warnings());
    for column in 0..45 {
        assert!((0..40).all(|row| output.canvas.get(column, row) == Some(Color::TRANSPARENT)));
    }
}
