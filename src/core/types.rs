use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::datetime_to_unix_seconds;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plot area for title, labels and axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub top: u32,
    pub left: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 100,
            left: 50,
            right: 150,
            bottom: 30,
        }
    }
}

impl Margin {
    /// Plot area left over once margins are removed from an outer size.
    pub fn inner_viewport(self, outer_width: u32, outer_height: u32) -> ChartResult<Viewport> {
        let width = i64::from(outer_width) - i64::from(self.left) - i64::from(self.right);
        let height = i64::from(outer_height) - i64::from(self.top) - i64::from(self.bottom);
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidViewport { width, height });
        }
        // Both values are bounded by the u32 inputs.
        Ok(Viewport::new(width as u32, height as u32))
    }

    /// Outer size of a chart whose plot area is `inner`.
    #[must_use]
    pub fn outer_viewport(self, inner: Viewport) -> Viewport {
        Viewport::new(
            inner.width + self.left + self.right,
            inner.height + self.top + self.bottom,
        )
    }
}

/// One parsed CSV row: the median price of one region in one month.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub region: String,
    pub month: String,
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

impl PricePoint {
    /// Horizontal domain value (unix seconds) used by the time scale.
    #[must_use]
    pub fn time(&self) -> f64 {
        datetime_to_unix_seconds(self.timestamp)
    }
}
