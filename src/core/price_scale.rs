use serde::{Deserialize, Serialize};

use crate::core::scale::{AxisTick, LinearScale, extent, format_tick_value};
use crate::core::{PricePoint, Viewport};
use crate::error::ChartResult;

/// Vertical scale: prices mapped onto `[height, 0]` so larger prices sit higher.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceScale {
    linear: LinearScale,
}

impl PriceScale {
    pub fn new(price_min: f64, price_max: f64) -> ChartResult<Self> {
        Ok(Self {
            linear: LinearScale::new(price_min, price_max)?,
        })
    }

    /// Fits the domain to the lowest and highest price.
    pub fn from_points(points: &[PricePoint]) -> ChartResult<Self> {
        let (min, max) = extent(points.iter().map(|point| point.price))?;
        Self::new(min, max)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    /// Binds the range to `[viewport.height, 0]`.
    pub fn fit_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.linear.set_range(f64::from(viewport.height), 0.0)
    }

    pub fn price_to_pixel(self, price: f64) -> ChartResult<f64> {
        self.linear.domain_to_pixel(price)
    }

    pub fn pixel_to_price(self, pixel: f64) -> ChartResult<f64> {
        self.linear.pixel_to_domain(pixel)
    }

    pub fn ticks(self, tick_count: usize) -> ChartResult<Vec<AxisTick>> {
        let step = self.linear.tick_step(tick_count);
        self.linear
            .ticks(tick_count)
            .into_iter()
            .map(|value| {
                Ok(AxisTick {
                    value,
                    position: self.price_to_pixel(value)?,
                    label: format_tick_value(value, step),
                })
            })
            .collect()
    }
}
