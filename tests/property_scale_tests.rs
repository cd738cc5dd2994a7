use housing_scrolly::core::scale::ticks;
use housing_scrolly::core::{LinearScale, PriceScale, TimeScale, Viewport};
use proptest::prelude::*;

proptest! {
    #[test]
    fn time_scale_round_trip_property(
        time_start in -1_000_000.0f64..1_000_000.0,
        time_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let time_end = time_start + time_span;
        let value = time_start + value_factor * time_span;

        let mut scale = TimeScale::new(time_start, time_end).expect("valid scale");
        scale.fit_viewport(Viewport::new(2048, 1024)).expect("fit");

        let px = scale.time_to_pixel(value).expect("to pixel");
        let recovered = scale.pixel_to_time(px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= 1e-6);
        prop_assert!((-1e-9..=2048.0 + 1e-9).contains(&px));
    }

    #[test]
    fn price_scale_is_decreasing_in_pixels(
        price_min in 0.0f64..500_000.0,
        price_span in 1.0f64..500_000.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0
    ) {
        prop_assume!(a < b);
        let mut scale = PriceScale::new(price_min, price_min + price_span).expect("valid scale");
        scale.fit_viewport(Viewport::new(800, 600)).expect("fit");

        let low = scale.price_to_pixel(price_min + a * price_span).expect("low");
        let high = scale.price_to_pixel(price_min + b * price_span).expect("high");
        prop_assert!(high < low);
    }

    #[test]
    fn price_scale_round_trip_property(
        price_min in 0.0f64..500_000.0,
        price_span in 1.0f64..500_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let price = price_min + value_factor * price_span;
        let mut scale = PriceScale::new(price_min, price_min + price_span).expect("valid scale");
        scale.fit_viewport(Viewport::new(800, 600)).expect("fit");

        let px = scale.price_to_pixel(price).expect("to pixel");
        let recovered = scale.pixel_to_price(px).expect("from pixel");
        prop_assert!((recovered - price).abs() <= 1e-6 * (price.abs() + 1.0));
    }

    #[test]
    fn ticks_stay_inside_domain(
        start in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        count in 1usize..20
    ) {
        let stop = start + span;
        let values = ticks(start, stop, count);
        let tolerance = 1e-9 * (start.abs() + stop.abs() + 1.0);
        for value in &values {
            prop_assert!(*value >= start - tolerance && *value <= stop + tolerance);
        }
        prop_assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn ranges_change_without_touching_domain(
        width in 1u32..4000,
        height in 1u32..4000
    ) {
        let scale = LinearScale::new(-5.0, 5.0).expect("scale");
        let resized = scale.with_range(0.0, f64::from(width)).expect("range");
        prop_assert_eq!(resized.domain(), scale.domain());
        prop_assert_eq!(resized.range(), (0.0, f64::from(width)));

        let mut price = PriceScale::new(1.0, 2.0).expect("price");
        price.fit_viewport(Viewport::new(width, height)).expect("fit");
        prop_assert_eq!(price.domain(), (1.0, 2.0));
        prop_assert_eq!(price.range(), (f64::from(height), 0.0));
    }
}
