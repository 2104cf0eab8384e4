use criterion::{Criterion, criterion_group, criterion_main};
use raster_plot::PlotModel;
use raster_plot::core::{Color, Style};
use std::hint::black_box;

fn bench_series_render_10k(c: &mut Criterion) {
    let xs: Vec<f64> = (0..10_000).map(|i| i as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|x| (x * 0.01).sin() * 100.0).collect();
    let mut plot = PlotModel::new();
    plot.add_series(xs, ys).expect("valid series");

    c.bench_function("series_render_10k", |b| {
        b.iter(|| {
            let _ = plot
                .render_at(black_box(1920), black_box(1080))
                .expect("render should succeed");
        })
    });
}

fn bench_function_render_steep(c: &mut Criterion) {
    let mut plot = PlotModel::new();
    plot.set_x_range(-10.0, 10.0);
    plot.set_y_range(-5.0, 5.0);
    plot.add_function_styled(Style::line(Color::BLUE), |x| (x * x).sin() * 4.0);
    plot.add_function(f64::tan);

    c.bench_function("function_render_steep", |b| {
        b.iter(|| {
            let _ = plot
                .render_with_report(black_box(1024), black_box(768))
                .expect("render should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_series_render_10k,
    bench_function_render_steep
);
criterion_main!(benches);
