mod common;

use approx::assert_relative_eq;
use chrono::{TimeZone, Utc};
use housing_scrolly::core::primitives::datetime_to_unix_seconds;
use housing_scrolly::core::{LinearScale, PriceScale, TimeScale, Viewport, extent, parse_month};

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(10.0, 110.0)
        .and_then(|scale| scale.with_range(0.0, 1000.0))
        .expect("valid scale");

    let original = 42.5;
    let px = scale.domain_to_pixel(original).expect("to pixel");
    let recovered = scale.pixel_to_domain(px).expect("from pixel");

    assert_relative_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn non_finite_domain_is_rejected() {
    assert!(LinearScale::new(f64::NAN, 1.0).is_err());
    assert!(LinearScale::new(0.0, f64::INFINITY).is_err());
}

#[test]
fn empty_extent_is_rejected() {
    assert!(extent(Vec::new()).is_err());
    assert_eq!(extent([3.0, -1.0, 2.0]).expect("extent"), (-1.0, 3.0));
}

#[test]
fn domains_equal_data_extent() {
    let points = common::fixture_points();
    let time_scale = TimeScale::from_points(&points).expect("time scale");
    let price_scale = PriceScale::from_points(&points).expect("price scale");

    let september = datetime_to_unix_seconds(Utc.with_ymd_and_hms(2016, 9, 1, 0, 0, 0).unwrap());
    let april = datetime_to_unix_seconds(Utc.with_ymd_and_hms(2017, 4, 1, 0, 0, 0).unwrap());
    assert_eq!(time_scale.domain(), (september, april));
    assert_eq!(
        price_scale.domain(),
        (common::FIXTURE_PRICE_MIN, common::FIXTURE_PRICE_MAX)
    );
}

#[test]
fn price_scale_uses_inverted_y_axis() {
    let mut scale = PriceScale::new(10.0, 110.0).expect("valid scale");
    scale.fit_viewport(Viewport::new(800, 600)).expect("fit");

    assert_eq!(scale.range(), (600.0, 0.0));
    assert_eq!(scale.price_to_pixel(110.0).expect("top"), 0.0);
    assert_eq!(scale.price_to_pixel(10.0).expect("bottom"), 600.0);
}

#[test]
fn time_scale_range_follows_viewport_width() {
    let mut scale = TimeScale::new(0.0, 10.0).expect("valid scale");
    scale.fit_viewport(Viewport::new(400, 300)).expect("fit");

    assert_eq!(scale.range(), (0.0, 400.0));
    assert_eq!(scale.time_to_pixel(5.0).expect("mid"), 200.0);
    assert_eq!(scale.pixel_to_time(400.0).expect("end"), 10.0);
}

#[test]
fn us_november_point_maps_through_both_scales() {
    let points = common::fixture_points();
    let viewport = Viewport::new(400, 570);
    let mut time_scale = TimeScale::from_points(&points).expect("time scale");
    let mut price_scale = PriceScale::from_points(&points).expect("price scale");
    time_scale.fit_viewport(viewport).expect("fit time");
    price_scale.fit_viewport(viewport).expect("fit price");

    let november = parse_month("November-16").expect("month");
    let (start, end) = time_scale.domain();
    let expected_x = (datetime_to_unix_seconds(november) - start) / (end - start) * 400.0;
    let expected_y = 570.0
        - (191_000.0 - common::FIXTURE_PRICE_MIN)
            / (common::FIXTURE_PRICE_MAX - common::FIXTURE_PRICE_MIN)
            * 570.0;

    let point = points
        .iter()
        .find(|point| point.region == "US" && point.month == "November-16")
        .expect("US November point");
    assert_eq!(point.price, 191_000.0);
    assert_relative_eq!(
        time_scale.time_to_pixel(point.time()).expect("x"),
        expected_x,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        time_scale.datetime_to_pixel(november).expect("x from date"),
        expected_x,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        price_scale.price_to_pixel(point.price).expect("y"),
        expected_y,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        price_scale.pixel_to_price(expected_y).expect("price"),
        191_000.0,
        epsilon = 1e-6
    );
}

#[test]
fn time_ticks_are_labelled_by_month_and_stay_in_range() {
    let points = common::fixture_points();
    let mut time_scale = TimeScale::from_points(&points).expect("time scale");
    time_scale.fit_viewport(Viewport::new(400, 570)).expect("fit");

    let ticks = time_scale.ticks(9).expect("ticks");
    assert!(!ticks.is_empty());
    for tick in &ticks {
        assert!((0.0..=400.0).contains(&tick.position));
        let (month, year) = tick.label.split_once(' ').expect("`Mon YY` label");
        assert_eq!(month.len(), 3);
        assert!(year == "16" || year == "17", "unexpected year in {}", tick.label);
    }
}

#[test]
fn price_ticks_use_grouped_labels() {
    let mut price_scale =
        PriceScale::new(common::FIXTURE_PRICE_MIN, common::FIXTURE_PRICE_MAX).expect("scale");
    price_scale.fit_viewport(Viewport::new(400, 570)).expect("fit");

    let ticks = price_scale.ticks(10).expect("ticks");
    let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels.first(), Some(&"160,000"));
    assert_eq!(labels.last(), Some(&"360,000"));
    assert_eq!(ticks.len(), 11);
    assert!(ticks.windows(2).all(|pair| pair[0].position > pair[1].position));
}
