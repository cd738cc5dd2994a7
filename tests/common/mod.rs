#![allow(dead_code)]

use std::path::PathBuf;

use housing_scrolly::api::{
    ChartConfig, ChartContext, ScrollyChart, StaticHost, load_price_points,
};
use housing_scrolly::core::{Paint, PricePoint};
use housing_scrolly::render::NullRenderer;

pub const FIXTURE_ROWS: usize = 80;
pub const FIXTURE_REGIONS: usize = 10;
pub const FIXTURE_PRICE_MIN: f64 = 144_000.0;
pub const FIXTURE_PRICE_MAX: f64 = 362_000.0;

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/housing-prices.csv")
}

pub fn fixture_points() -> Vec<PricePoint> {
    load_price_points(fixture_path()).expect("fixture loads")
}

pub fn fixture_context() -> ChartContext {
    ChartContext::new(ChartConfig::default(), &fixture_points()).expect("context")
}

pub fn headless_chart(container_width: u32, viewport_height: u32) -> ScrollyChart<NullRenderer> {
    let config = ChartConfig::default();
    let host = StaticHost::for_config(&config, container_width, viewport_height);
    ScrollyChart::load(NullRenderer::default(), config, &host, fixture_path()).expect("chart")
}

/// Bar fill followed by (region, line stroke, marker fill, label fill).
pub type PaintSnapshot = (Paint, Vec<(String, Paint, Paint, Paint)>);

pub fn paint_snapshot(context: &ChartContext) -> PaintSnapshot {
    let scene = context.scene();
    let regions = scene
        .regions
        .iter()
        .map(|elements| {
            (
                elements.region.clone(),
                elements.line.stroke,
                elements.marker.fill,
                elements.label.fill,
            )
        })
        .collect();
    (scene.bar.fill, regions)
}
