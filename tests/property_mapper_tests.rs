use raster_plot::core::{Axis, CoordinateMapper, Resolution, ResolvedRange};
use proptest::prelude::*;

proptest! {
    #[test]
    fn mapper_is_monotonic_and_in_bounds(
        low in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        a in -0.5f64..1.5,
        b in -0.5f64..1.5,
        width in 1u32..4096,
        height in 1u32..4096,
    ) {
        let range = ResolvedRange::new(Axis::X, low, low + span).expect("range");
        let y_range = ResolvedRange::new(Axis::Y, low, low + span).expect("range");
        let mapper = CoordinateMapper::new(range, y_range, Resolution::new(width, height))
            .expect("mapper");

        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        let x1 = low + first * span;
        let x2 = low + second * span;

        let p1 = mapper.to_pixel(x1, x1);
        let p2 = mapper.to_pixel(x2, x2);
        prop_assert!(p1.column <= p2.column);
        prop_assert!(p1.row <= p2.row);
        prop_assert!(p2.column < width && p2.row < height);
    }
}
