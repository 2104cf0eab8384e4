use raster_plot::core::{Axis, AxisRange, Extent, RangeComputer, RangePolicy};
use proptest::prelude::*;

proptest! {
    #[test]
    fn inferred_range_contains_padded_data(
        values in proptest::collection::vec(-1_000_000.0f64..1_000_000.0, 1..64),
        padding_ratio in 0.0f64..0.5,
    ) {
        let mut extent = Extent::default();
        extent.extend(values.iter().copied());
        let data_low = extent.min().expect("min");
        let data_high = extent.max().expect("max");

        let computer = RangeComputer::new(RangePolicy {
            padding_ratio,
            ..RangePolicy::default()
        });
        let range = computer
            .resolve_axis(Axis::Y, AxisRange::auto(), extent)
            .expect("resolve");

        prop_assert!(range.low() <= range.high());
        prop_assert!(range.low() <= data_low);
        prop_assert!(range.high() >= data_high);
        prop_assert!(range.span() >= data_high - data_low);
    }

    #[test]
    fn pinned_range_is_untouched(
        low in -1_000.0f64..1_000.0,
        span in 0.001f64..1_000.0,
        values in proptest::collection::vec(-10_000.0f64..10_000.0, 0..16),
    ) {
        let mut extent = Extent::default();
        extent.extend(values.iter().copied());

        let range = RangeComputer::default()
            .resolve_axis(Axis::X, AxisRange::pinned(low, low + span), extent)
            .expect("resolve");
        prop_assert_eq!(range.bounds(), (low, low + span));
    }
}
