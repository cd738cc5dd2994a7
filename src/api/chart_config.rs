use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Color, MAX_TICK_COUNT, Margin, Viewport, parse_month, region_tag};
use crate::error::{ChartError, ChartResult};

use super::StepId;

/// Shaded month band drawn behind the price lines.
///
/// The band starts at `anchor_month` and is as wide as the distance from
/// `span_start_month` to `span_end_month`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightBandConfig {
    pub anchor_month: String,
    pub span_start_month: String,
    pub span_end_month: String,
    pub fill: Color,
}

impl Default for HighlightBandConfig {
    fn default() -> Self {
        Self {
            anchor_month: "December-16".to_owned(),
            span_start_month: "November-16".to_owned(),
            span_end_month: "February-17".to_owned(),
            fill: Color::rgb(194.0 / 255.0, 223.0 / 255.0, 1.0),
        }
    }
}

/// Pixel offset applied to a text element after positioning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextOffset {
    pub dx: f64,
    pub dy: f64,
}

/// Chart bootstrap configuration.
///
/// Every field has a serde default, so `{}` is a complete configuration for the
/// regional housing price dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_mount_selector")]
    pub mount_selector: String,
    #[serde(default)]
    pub margin: Margin,
    #[serde(default = "default_initial_size")]
    pub initial_size: Viewport,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_title_font_size")]
    pub title_font_size: f64,
    /// `dy` is the title baseline above the plot area; `dx` shifts it right.
    #[serde(default = "default_title_offset")]
    pub title_offset: TextOffset,
    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,
    #[serde(default)]
    pub highlight_band: HighlightBandConfig,
    #[serde(default = "default_focus_region")]
    pub focus_region: String,
    #[serde(default = "default_highlight_regions")]
    pub highlight_regions: Vec<String>,
    #[serde(default = "default_focus_color")]
    pub focus_color: Color,
    #[serde(default = "default_highlight_color")]
    pub highlight_color: Color,
    #[serde(default = "default_muted_color")]
    pub muted_color: Color,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f64,
    #[serde(default = "default_line_stroke_width")]
    pub line_stroke_width: f64,
    #[serde(default = "default_label_offset")]
    pub label_offset: TextOffset,
    #[serde(default = "default_label_font_size")]
    pub label_font_size: f64,
    #[serde(default = "default_x_tick_count")]
    pub x_tick_count: usize,
    #[serde(default = "default_y_tick_count")]
    pub y_tick_count: usize,
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Scroll trigger element id to the step it selects.
    #[serde(default = "default_step_triggers")]
    pub step_triggers: IndexMap<String, StepId>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            mount_selector: default_mount_selector(),
            margin: Margin::default(),
            initial_size: default_initial_size(),
            title: default_title(),
            title_font_size: default_title_font_size(),
            title_offset: default_title_offset(),
            palette: default_palette(),
            highlight_band: HighlightBandConfig::default(),
            focus_region: default_focus_region(),
            highlight_regions: default_highlight_regions(),
            focus_color: default_focus_color(),
            highlight_color: default_highlight_color(),
            muted_color: default_muted_color(),
            label_color: default_label_color(),
            marker_radius: default_marker_radius(),
            line_stroke_width: default_line_stroke_width(),
            label_offset: default_label_offset(),
            label_font_size: default_label_font_size(),
            x_tick_count: default_x_tick_count(),
            y_tick_count: default_y_tick_count(),
            resize_debounce_ms: default_resize_debounce_ms(),
            transition_ms: default_transition_ms(),
            step_triggers: default_step_triggers(),
        }
    }
}

impl ChartConfig {
    /// Parses a JSON configuration; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidData(format!("invalid chart config: {err}")))?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::InvalidData(format!("failed to serialize config: {err}")))
    }

    /// Sets the color palette assigned to regions in first-seen order.
    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the outer chart size used before the first relayout.
    #[must_use]
    pub fn with_initial_size(mut self, width: u32, height: u32) -> Self {
        self.initial_size = Viewport::new(width, height);
        self
    }

    /// Sets the shaded band months and fill.
    #[must_use]
    pub fn with_highlight_band(mut self, band: HighlightBandConfig) -> Self {
        self.highlight_band = band;
        self
    }

    /// Sets the regions painted in the highlight color by the highlight steps.
    #[must_use]
    pub fn with_highlight_regions(mut self, regions: Vec<String>) -> Self {
        self.highlight_regions = regions;
        self
    }

    #[must_use]
    pub fn with_resize_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.resize_debounce_ms = debounce_ms;
        self
    }

    #[must_use]
    pub fn focus_tag(&self) -> String {
        region_tag(&self.focus_region)
    }

    #[must_use]
    pub fn highlight_tags(&self) -> Vec<String> {
        self.highlight_regions
            .iter()
            .map(|region| region_tag(region))
            .collect()
    }

    /// Checks every field, returning the config unchanged when it is usable.
    pub fn validate(self) -> ChartResult<Self> {
        if self.mount_selector.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "mount selector must not be empty".to_owned(),
            ));
        }

        self.margin
            .inner_viewport(self.initial_size.width, self.initial_size.height)?;

        if self.palette.is_empty() {
            return Err(ChartError::InvalidData(
                "color palette must not be empty".to_owned(),
            ));
        }
        for color in self
            .palette
            .iter()
            .chain([
                &self.highlight_band.fill,
                &self.focus_color,
                &self.highlight_color,
                &self.muted_color,
                &self.label_color,
            ])
        {
            color.validate()?;
        }

        let span_start = parse_month(&self.highlight_band.span_start_month)?;
        let span_end = parse_month(&self.highlight_band.span_end_month)?;
        parse_month(&self.highlight_band.anchor_month)?;
        if span_end < span_start {
            return Err(ChartError::InvalidData(
                "highlight band span must not end before it starts".to_owned(),
            ));
        }

        if self.focus_tag().is_empty() {
            return Err(ChartError::InvalidData(
                "focus region must contain at least one letter".to_owned(),
            ));
        }

        for (name, value) in [
            ("title font size", self.title_font_size),
            ("marker radius", self.marker_radius),
            ("line stroke width", self.line_stroke_width),
            ("label font size", self.label_font_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        for offset in [self.title_offset, self.label_offset] {
            if !offset.dx.is_finite() || !offset.dy.is_finite() {
                return Err(ChartError::InvalidData(
                    "text offsets must be finite".to_owned(),
                ));
            }
        }

        for (name, count) in [
            ("x tick count", self.x_tick_count),
            ("y tick count", self.y_tick_count),
        ] {
            if count == 0 || count > MAX_TICK_COUNT {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be in 1..={MAX_TICK_COUNT}, got {count}"
                )));
            }
        }

        for step in StepId::ALL {
            let bound = self
                .step_triggers
                .values()
                .filter(|candidate| **candidate == step)
                .count();
            if bound != 1 {
                return Err(ChartError::InvalidData(format!(
                    "step `{}` must be bound to exactly one trigger, found {bound}",
                    step.name()
                )));
            }
        }

        Ok(self)
    }
}

fn default_mount_selector() -> String {
    "#chart-2".to_owned()
}

fn default_initial_size() -> Viewport {
    Viewport::new(600, 700)
}

fn default_title() -> String {
    "U.S. housing prices fall in winter".to_owned()
}

fn default_title_font_size() -> f64 {
    24.0
}

fn default_title_offset() -> TextOffset {
    TextOffset {
        dx: 40.0,
        dy: -40.0,
    }
}

fn default_palette() -> Vec<Color> {
    [
        (0x8d, 0xd3, 0xc7),
        (0xff, 0xff, 0xb3),
        (0xbe, 0xba, 0xda),
        (0xfb, 0x80, 0x72),
        (0x80, 0xb1, 0xd3),
        (0xfd, 0xb4, 0x62),
        (0xb3, 0xde, 0x69),
        (0xfc, 0xcd, 0xe5),
        (0xd9, 0xd9, 0xd9),
        (0xbc, 0x80, 0xbd),
    ]
    .into_iter()
    .map(|(red, green, blue): (u8, u8, u8)| {
        Color::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    })
    .collect()
}

fn default_focus_region() -> String {
    "US".to_owned()
}

fn default_highlight_regions() -> Vec<String> {
    ["Mountain", "Pacific", "West South Central", "South Atlantic"]
        .into_iter()
        .map(str::to_owned)
        .collect()
}

fn default_focus_color() -> Color {
    Color::RED
}

fn default_highlight_color() -> Color {
    Color::TURQUOISE
}

fn default_muted_color() -> Color {
    Color::GRAY
}

fn default_label_color() -> Color {
    Color::BLACK
}

fn default_marker_radius() -> f64 {
    4.0
}

fn default_line_stroke_width() -> f64 {
    2.0
}

fn default_label_offset() -> TextOffset {
    TextOffset { dx: 6.0, dy: 4.0 }
}

fn default_label_font_size() -> f64 {
    12.0
}

fn default_x_tick_count() -> usize {
    9
}

fn default_y_tick_count() -> usize {
    10
}

fn default_resize_debounce_ms() -> u64 {
    200
}

fn default_transition_ms() -> u64 {
    250
}

fn default_step_triggers() -> IndexMap<String, StepId> {
    StepId::ALL
        .into_iter()
        .map(|step| (step.default_trigger_id().to_owned(), step))
        .collect()
}
