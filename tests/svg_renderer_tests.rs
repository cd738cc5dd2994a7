mod common;

use housing_scrolly::api::StepId;
use housing_scrolly::render::{Renderer, SvgRenderer};

#[test]
fn document_carries_chart_structure() {
    let chart = common::headless_chart(800, 600);
    let svg = chart.to_svg().expect("svg");

    assert!(svg.trim_start().starts_with("<svg"));
    assert!(svg.contains(r#"width="800""#));
    assert!(svg.contains(r#"height="600""#));
    assert!(svg.trim_end().ends_with("</svg>"));

    assert_eq!(svg.matches("<polyline").count(), common::FIXTURE_REGIONS);
    assert_eq!(svg.matches("<circle").count(), common::FIXTURE_REGIONS);
    assert_eq!(svg.matches("<rect").count(), 1);
    assert!(svg.to_ascii_uppercase().contains("C2DFFF"));

    assert!(svg.contains("New England"));
    assert!(svg.contains("U.S. housing prices fall in winter"));
    assert!(svg.contains("200,000"));
}

#[test]
fn frame_tags_every_region_element() {
    let chart = common::headless_chart(800, 600);
    let frame = chart.frame();

    assert_eq!(frame.rects[0].class, "bar");
    assert!(
        frame
            .polylines
            .iter()
            .any(|polyline| polyline.class == "price-line westsouthcentral")
    );
    assert!(frame.circles.iter().any(|circle| circle.class == "us"));
    assert!(
        frame
            .texts
            .iter()
            .any(|text| text.class == "text newengland" && text.text == "New England")
    );
    assert!(frame.texts.iter().any(|text| text.class == "title"));
}

#[test]
fn blank_step_leaves_hidden_elements_out() {
    let mut chart = common::headless_chart(800, 600);
    chart.enter_step(StepId::Blank).expect("blank");
    let svg = chart.to_svg().expect("svg");

    assert!(!svg.contains("<polyline"));
    assert!(!svg.contains("<circle"));
    assert!(!svg.contains("<rect"));
    assert!(!svg.contains("New England"));
    assert!(svg.contains("U.S. housing prices fall in winter"));
    assert!(svg.contains("<line"));
}

#[test]
fn highlight_bar_step_draws_band_and_muted_lines() {
    let mut chart = common::headless_chart(800, 600);
    chart.enter_step(StepId::FullWithBar).expect("bar");
    let svg = chart.to_svg().expect("svg").to_ascii_uppercase();

    assert_eq!(svg.matches("<RECT").count(), 1);
    assert!(svg.contains("C2DFFF"));
    assert!(svg.contains("FF0000"));
    assert!(svg.contains("40E0D0"));
    assert!(svg.contains("808080"));
}

#[test]
fn renderer_keeps_last_document() {
    let chart = common::headless_chart(800, 600);
    let mut renderer = SvgRenderer::new();
    assert!(renderer.document().is_empty());

    renderer.render(&chart.frame()).expect("render");
    let expected = chart.to_svg().expect("svg");
    assert_eq!(renderer.document(), expected);
    assert_eq!(renderer.into_document(), expected);
}
