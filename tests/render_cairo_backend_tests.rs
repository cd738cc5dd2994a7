#![cfg(feature = "cairo-backend")]

mod common;

use housing_scrolly::api::StepId;
use housing_scrolly::error::ChartError;
use housing_scrolly::render::{CairoRenderer, Renderer};

#[test]
fn blank_step_draws_only_axes_and_titles() {
    let mut chart = common::headless_chart(800, 600);
    chart.enter_step(StepId::Blank).expect("blank");

    let mut renderer = CairoRenderer::new(800, 600).expect("renderer");
    renderer.render(&chart.frame()).expect("render");

    let stats = renderer.last_stats();
    assert_eq!(stats.rects_drawn, 0);
    assert_eq!(stats.polylines_drawn, 0);
    assert_eq!(stats.circles_drawn, 0);
    assert!(stats.lines_drawn > 0);
    assert!(stats.texts_drawn > 0);
}

#[test]
fn full_step_draws_band_and_every_region() {
    let mut chart = common::headless_chart(800, 600);
    chart.enter_step(StepId::FullWithBar).expect("bar");

    let mut renderer = CairoRenderer::new(800, 600).expect("renderer");
    renderer.render(&chart.frame()).expect("render");

    let stats = renderer.last_stats();
    assert_eq!(stats.rects_drawn, 1);
    assert_eq!(stats.polylines_drawn, common::FIXTURE_REGIONS);
    assert_eq!(stats.circles_drawn, common::FIXTURE_REGIONS);
}

#[test]
fn surface_encodes_as_png() {
    let chart = common::headless_chart(800, 600);
    let mut renderer = CairoRenderer::new(800, 600).expect("renderer");
    renderer.render(&chart.frame()).expect("render");

    let mut png = Vec::new();
    renderer.write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn empty_surface_is_rejected() {
    let err = CairoRenderer::new(0, 600).expect_err("zero width");
    assert!(matches!(
        err,
        ChartError::InvalidViewport {
            width: 0,
            height: 600
        }
    ));
}
