use tracing::info;

use crate::core::{
    Color, OrdinalColorScale, PriceScale, PricePoint, SeriesGroup, TimeScale, Viewport,
    group_by_region, parse_month, primitives::datetime_to_unix_seconds,
};
use crate::error::{ChartError, ChartResult};

use super::scene_builder::build_scene;
use super::{ChartConfig, HighlightBandConfig, Scene};

/// Highlight band months resolved to time-domain values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightBand {
    pub anchor: f64,
    pub span_start: f64,
    pub span_end: f64,
    pub fill: Color,
}

impl HighlightBand {
    pub fn from_config(config: &HighlightBandConfig) -> ChartResult<Self> {
        Ok(Self {
            anchor: datetime_to_unix_seconds(parse_month(&config.anchor_month)?),
            span_start: datetime_to_unix_seconds(parse_month(&config.span_start_month)?),
            span_end: datetime_to_unix_seconds(parse_month(&config.span_end_month)?),
            fill: config.fill,
        })
    }
}

/// Everything one chart instance owns: configuration, grouped data, scales,
/// the color mapping and the rendered scene.
///
/// Scale domains and region colors are fixed when the context is built; only
/// the scale ranges and element geometry change afterwards (on relayout), and
/// only element paints change on step entry.
#[derive(Debug, Clone)]
pub struct ChartContext {
    pub(crate) config: ChartConfig,
    pub(crate) series: Vec<SeriesGroup>,
    pub(crate) colors: OrdinalColorScale,
    pub(crate) time_scale: TimeScale,
    pub(crate) price_scale: PriceScale,
    pub(crate) band: HighlightBand,
    pub(crate) scene: Scene,
}

impl ChartContext {
    /// Builds scales and colors from `points` and draws the initial scene at the
    /// configured initial size.
    pub fn new(config: ChartConfig, points: &[PricePoint]) -> ChartResult<Self> {
        let config = config.validate()?;
        if points.is_empty() {
            return Err(ChartError::InvalidData(
                "chart cannot be built from empty data".to_owned(),
            ));
        }
        if points.iter().any(|point| point.region.trim().is_empty()) {
            return Err(ChartError::InvalidData(
                "every price point needs a region".to_owned(),
            ));
        }

        let mut colors = OrdinalColorScale::new(config.palette.clone())?;
        let series = group_by_region(points, &mut colors);

        let inner = config
            .margin
            .inner_viewport(config.initial_size.width, config.initial_size.height)?;
        let mut time_scale = TimeScale::from_points(points)?;
        let mut price_scale = PriceScale::from_points(points)?;
        time_scale.fit_viewport(inner)?;
        price_scale.fit_viewport(inner)?;

        let band = HighlightBand::from_config(&config.highlight_band)?;
        let scene = build_scene(&config, &series, time_scale, price_scale, band, inner)?;

        info!(
            points = points.len(),
            regions = series.len(),
            color_collisions = colors.has_collisions(),
            "chart context built"
        );

        Ok(Self {
            config,
            series,
            colors,
            time_scale,
            price_scale,
            band,
            scene,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn series(&self) -> &[SeriesGroup] {
        &self.series
    }

    #[must_use]
    pub fn colors(&self) -> &OrdinalColorScale {
        &self.colors
    }

    #[must_use]
    pub fn time_scale(&self) -> TimeScale {
        self.time_scale
    }

    #[must_use]
    pub fn price_scale(&self) -> PriceScale {
        self.price_scale
    }

    #[must_use]
    pub fn highlight_band(&self) -> HighlightBand {
        self.band
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Current plot-area size.
    #[must_use]
    pub fn inner_viewport(&self) -> Viewport {
        self.scene.inner
    }
}
