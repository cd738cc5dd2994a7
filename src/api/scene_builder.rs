use crate::core::{
    Paint, PathPoint, PriceScale, SeriesGroup, TimeScale, Viewport, project_polyline,
};
use crate::error::{ChartError, ChartResult};

use super::chart_context::HighlightBand;
use super::scene::{
    AxisElement, AxisOrientation, BarElement, ElementRegistry, LabelElement, LineElement,
    MarkerElement, RegionElements, Scene, TitleElement,
};
use super::{ChartConfig, ChartContext};

/// Draws the full scene: one line, marker and label per region, the title, the
/// highlight band and both axes.
///
/// Lines and markers start in their region color, labels in the label color and
/// the band in its fill.
pub(crate) fn build_scene(
    config: &ChartConfig,
    series: &[SeriesGroup],
    time_scale: TimeScale,
    price_scale: PriceScale,
    band: HighlightBand,
    inner: Viewport,
) -> ChartResult<Scene> {
    let mut regions = ElementRegistry::default();
    for group in series {
        let (path, anchor) = region_geometry(group, time_scale, price_scale)?;
        regions.insert(RegionElements {
            region: group.region.clone(),
            tag: group.tag.clone(),
            color: group.color,
            line: LineElement {
                path,
                stroke: Paint::Color(group.color),
                stroke_width: config.line_stroke_width,
            },
            marker: MarkerElement {
                cx: anchor.x,
                cy: anchor.y,
                radius: config.marker_radius,
                fill: Paint::Color(group.color),
            },
            label: LabelElement {
                text: group.region.clone(),
                x: anchor.x,
                y: anchor.y,
                dx: config.label_offset.dx,
                dy: config.label_offset.dy,
                font_size: config.label_font_size,
                fill: Paint::Color(config.label_color),
            },
        });
    }

    let (bar_x, bar_width) = bar_geometry(band, time_scale)?;

    Ok(Scene {
        outer: config.margin.outer_viewport(inner),
        inner,
        margin: config.margin,
        bar: BarElement {
            x: bar_x,
            y: 0.0,
            width: bar_width,
            height: f64::from(inner.height),
            fill: Paint::Color(band.fill),
        },
        regions,
        title: TitleElement {
            text: config.title.clone(),
            x: f64::from(inner.width) / 2.0,
            y: config.title_offset.dy,
            dx: config.title_offset.dx,
            font_size: config.title_font_size,
        },
        x_axis: x_axis(config, time_scale, inner)?,
        y_axis: y_axis(config, price_scale, inner)?,
    })
}

/// Recomputes every position-dependent attribute from the context's current
/// scale ranges. Paints are left untouched.
pub(crate) fn reposition_scene(context: &mut ChartContext, inner: Viewport) -> ChartResult<()> {
    let ChartContext {
        config,
        series,
        time_scale,
        price_scale,
        band,
        scene,
        ..
    } = context;

    for group in series.iter() {
        let (path, anchor) = region_geometry(group, *time_scale, *price_scale)?;
        let elements = scene.regions.get_mut(&group.region).ok_or_else(|| {
            ChartError::InvalidData(format!("no elements registered for `{}`", group.region))
        })?;
        elements.line.path = path;
        elements.marker.cx = anchor.x;
        elements.marker.cy = anchor.y;
        elements.label.x = anchor.x;
        elements.label.y = anchor.y;
    }

    let (bar_x, bar_width) = bar_geometry(*band, *time_scale)?;
    scene.bar.x = bar_x;
    scene.bar.y = 0.0;
    scene.bar.width = bar_width;
    scene.bar.height = f64::from(inner.height);

    scene.title.x = f64::from(inner.width) / 2.0;
    scene.x_axis = x_axis(config, *time_scale, inner)?;
    scene.y_axis = y_axis(config, *price_scale, inner)?;
    scene.inner = inner;
    scene.outer = config.margin.outer_viewport(inner);
    Ok(())
}

fn region_geometry(
    group: &SeriesGroup,
    time_scale: TimeScale,
    price_scale: PriceScale,
) -> ChartResult<(Vec<PathPoint>, PathPoint)> {
    let path = project_polyline(&group.points, time_scale, price_scale)?;
    let anchor = path.first().copied().ok_or_else(|| {
        ChartError::InvalidData(format!("region `{}` has no points", group.region))
    })?;
    Ok((path, anchor))
}

fn bar_geometry(band: HighlightBand, time_scale: TimeScale) -> ChartResult<(f64, f64)> {
    let x = time_scale.time_to_pixel(band.anchor)?;
    let width =
        time_scale.time_to_pixel(band.span_end)? - time_scale.time_to_pixel(band.span_start)?;
    Ok((x, width.max(0.0)))
}

fn x_axis(config: &ChartConfig, time_scale: TimeScale, inner: Viewport) -> ChartResult<AxisElement> {
    Ok(AxisElement {
        orientation: AxisOrientation::Bottom,
        offset: f64::from(inner.height),
        length: f64::from(inner.width),
        ticks: time_scale.ticks(config.x_tick_count)?,
    })
}

fn y_axis(
    config: &ChartConfig,
    price_scale: PriceScale,
    inner: Viewport,
) -> ChartResult<AxisElement> {
    Ok(AxisElement {
        orientation: AxisOrientation::Left,
        offset: 0.0,
        length: f64::from(inner.height),
        ticks: price_scale.ticks(config.y_tick_count)?,
    })
}
