use crate::core::{Color, Paint, PathPoint};
use crate::render::{
    CirclePrimitive, LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

use super::scene::{AxisElement, AxisOrientation, Scene};

const AXIS_TICK_SIZE: f64 = 6.0;
const AXIS_TICK_PADDING: f64 = 3.0;
const AXIS_FONT_SIZE: f64 = 10.0;
const AXIS_STROKE_WIDTH: f64 = 1.0;

/// Flattens the scene into outer-canvas primitives.
///
/// The highlight band comes first so it sits beneath every other element.
#[must_use]
pub fn build_render_frame(scene: &Scene) -> RenderFrame {
    let left = f64::from(scene.margin.left);
    let top = f64::from(scene.margin.top);
    let mut frame = RenderFrame::new(scene.outer);

    frame.rects.push(RectPrimitive {
        x: left + scene.bar.x,
        y: top + scene.bar.y,
        width: scene.bar.width,
        height: scene.bar.height,
        fill: scene.bar.fill,
        class: "bar".to_owned(),
    });

    for elements in scene.regions.iter() {
        frame.polylines.push(PolylinePrimitive {
            points: elements
                .line
                .path
                .iter()
                .map(|point| PathPoint {
                    x: left + point.x,
                    y: top + point.y,
                })
                .collect(),
            stroke: elements.line.stroke,
            stroke_width: elements.line.stroke_width,
            class: format!("price-line {}", elements.tag),
        });

        frame.circles.push(CirclePrimitive {
            cx: left + elements.marker.cx,
            cy: top + elements.marker.cy,
            radius: elements.marker.radius,
            fill: elements.marker.fill,
            class: elements.tag.clone(),
        });

        let label = &elements.label;
        frame.texts.push(
            TextPrimitive::new(
                label.text.clone(),
                left + label.x + label.dx,
                top + label.y + label.dy,
                label.font_size,
                label.fill,
                TextHAlign::Left,
            )
            .with_class(format!("text {}", elements.tag)),
        );
    }

    frame.texts.push(
        TextPrimitive::new(
            scene.title.text.clone(),
            left + scene.title.x + scene.title.dx,
            top + scene.title.y,
            scene.title.font_size,
            Paint::Color(Color::BLACK),
            TextHAlign::Center,
        )
        .with_class("title"),
    );

    push_axis(&mut frame, &scene.x_axis, left, top);
    push_axis(&mut frame, &scene.y_axis, left, top);
    frame
}

fn push_axis(frame: &mut RenderFrame, axis: &AxisElement, left: f64, top: f64) {
    let color = Color::BLACK;
    match axis.orientation {
        AxisOrientation::Bottom => {
            let y = top + axis.offset;
            frame.lines.push(LinePrimitive::new(
                left,
                y,
                left + axis.length,
                y,
                AXIS_STROKE_WIDTH,
                color,
            ));
            for tick in &axis.ticks {
                let x = left + tick.position;
                frame.lines.push(LinePrimitive::new(
                    x,
                    y,
                    x,
                    y + AXIS_TICK_SIZE,
                    AXIS_STROKE_WIDTH,
                    color,
                ));
                frame.texts.push(
                    TextPrimitive::new(
                        tick.label.clone(),
                        x,
                        y + AXIS_TICK_SIZE + AXIS_TICK_PADDING + AXIS_FONT_SIZE * 0.71,
                        AXIS_FONT_SIZE,
                        Paint::Color(color),
                        TextHAlign::Center,
                    )
                    .with_class("tick x-axis"),
                );
            }
        }
        AxisOrientation::Left => {
            let x = left + axis.offset;
            frame.lines.push(LinePrimitive::new(
                x,
                top,
                x,
                top + axis.length,
                AXIS_STROKE_WIDTH,
                color,
            ));
            for tick in &axis.ticks {
                let y = top + tick.position;
                frame.lines.push(LinePrimitive::new(
                    x - AXIS_TICK_SIZE,
                    y,
                    x,
                    y,
                    AXIS_STROKE_WIDTH,
                    color,
                ));
                frame.texts.push(
                    TextPrimitive::new(
                        tick.label.clone(),
                        x - AXIS_TICK_SIZE - AXIS_TICK_PADDING,
                        y + AXIS_FONT_SIZE * 0.32,
                        AXIS_FONT_SIZE,
                        Paint::Color(color),
                        TextHAlign::Right,
                    )
                    .with_class("tick y-axis"),
                );
            }
        }
    }
}
