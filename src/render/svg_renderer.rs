use std::fmt::Display;

use plotters::backend::{DrawingBackend, SVGBackend};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{IntoFont, RGBAColor, ShapeStyle, TextStyle};

use crate::core::Paint;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

const FONT_FAMILY: &str = "sans-serif";

/// Renderer that serializes each frame into a standalone SVG document.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document produced by the most recent successful `render` call.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.document = svg_document(frame)?;
        Ok(())
    }
}

/// Draws `frame` through the plotters SVG backend and returns the document.
///
/// Elements painted `none` are left out of the document.
pub fn svg_document(frame: &RenderFrame) -> ChartResult<String> {
    let mut document = String::new();
    {
        let size = (frame.viewport.width, frame.viewport.height);
        let mut backend = SVGBackend::with_string(&mut document, size);
        draw_frame(&mut backend, frame)?;
        backend.present().map_err(backend_error)?;
    }
    Ok(document)
}

/// Draws every visible primitive of `frame` onto any plotters backend, in
/// frame order.
pub fn draw_frame<DB: DrawingBackend>(backend: &mut DB, frame: &RenderFrame) -> ChartResult<()> {
    for rect in &frame.rects {
        let Paint::Color(fill) = rect.fill else {
            continue;
        };
        backend
            .draw_rect(
                coord(rect.x, rect.y),
                coord(rect.x + rect.width, rect.y + rect.height),
                &shape_style(fill, 1.0, true),
                true,
            )
            .map_err(backend_error)?;
    }

    for polyline in &frame.polylines {
        let Paint::Color(stroke) = polyline.stroke else {
            continue;
        };
        backend
            .draw_path(
                polyline.points.iter().map(|point| coord(point.x, point.y)),
                &shape_style(stroke, polyline.stroke_width, false),
            )
            .map_err(backend_error)?;
    }

    for circle in &frame.circles {
        let Paint::Color(fill) = circle.fill else {
            continue;
        };
        backend
            .draw_circle(
                coord(circle.cx, circle.cy),
                circle.radius.round().max(1.0) as u32,
                &shape_style(fill, 1.0, true),
                true,
            )
            .map_err(backend_error)?;
    }

    for line in &frame.lines {
        backend
            .draw_line(
                coord(line.x1, line.y1),
                coord(line.x2, line.y2),
                &shape_style(line.color, line.stroke_width, false),
            )
            .map_err(backend_error)?;
    }

    for text in &frame.texts {
        let Paint::Color(fill) = text.fill else {
            continue;
        };
        let h_pos = match text.h_align {
            TextHAlign::Left => HPos::Left,
            TextHAlign::Center => HPos::Center,
            TextHAlign::Right => HPos::Right,
        };
        let color = rgba(fill);
        let style = TextStyle::from((FONT_FAMILY, text.font_size_px).into_font())
            .color(&color)
            .pos(Pos::new(h_pos, VPos::Bottom));
        backend
            .draw_text(&text.text, &style, coord(text.x, text.y))
            .map_err(backend_error)?;
    }

    Ok(())
}

fn rgba(color: Color) -> RGBAColor {
    let (red, green, blue) = color.to_rgb8();
    RGBAColor(red, green, blue, color.alpha)
}

fn shape_style(color: Color, stroke_width: f64, filled: bool) -> ShapeStyle {
    ShapeStyle {
        color: rgba(color),
        filled,
        stroke_width: stroke_width.round().max(1.0) as u32,
    }
}

fn coord(x: f64, y: f64) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

fn backend_error(err: impl Display) -> ChartError {
    ChartError::InvalidData(format!("drawing backend failed: {err}"))
}
