use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, unix_seconds_to_datetime};
use crate::core::scale::{AxisTick, LinearScale, extent};
use crate::core::{PricePoint, Viewport};
use crate::error::ChartResult;

/// Tick label format for the horizontal axis (`Nov 16`).
pub const TIME_TICK_FORMAT: &str = "%b %y";

/// Horizontal scale: unix seconds mapped onto `[0, width]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(time_start: f64, time_end: f64) -> ChartResult<Self> {
        Ok(Self {
            linear: LinearScale::new(time_start, time_end)?,
        })
    }

    /// Fits the domain to the earliest and latest point.
    pub fn from_points(points: &[PricePoint]) -> ChartResult<Self> {
        let (start, end) = extent(points.iter().map(PricePoint::time))?;
        Self::new(start, end)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    /// Binds the range to `[0, viewport.width]`.
    pub fn fit_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.linear.set_range(0.0, f64::from(viewport.width))
    }

    pub fn time_to_pixel(self, time: f64) -> ChartResult<f64> {
        self.linear.domain_to_pixel(time)
    }

    pub fn datetime_to_pixel(self, time: DateTime<Utc>) -> ChartResult<f64> {
        self.time_to_pixel(datetime_to_unix_seconds(time))
    }

    pub fn pixel_to_time(self, pixel: f64) -> ChartResult<f64> {
        self.linear.pixel_to_domain(pixel)
    }

    /// Numeric ticks over the time domain, labelled as `Mon YY`.
    pub fn ticks(self, tick_count: usize) -> ChartResult<Vec<AxisTick>> {
        let mut ticks = Vec::new();
        for value in self.linear.ticks(tick_count) {
            let Some(time) = unix_seconds_to_datetime(value) else {
                continue;
            };
            ticks.push(AxisTick {
                value,
                position: self.time_to_pixel(value)?,
                label: time.format(TIME_TICK_FORMAT).to_string(),
            });
        }
        Ok(ticks)
    }
}
