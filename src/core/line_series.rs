use serde::{Deserialize, Serialize};

use crate::core::{PriceScale, PricePoint, TimeScale};
use crate::error::ChartResult;

/// Projected polyline vertex in plot-area pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

/// Projects one point through both scales.
pub fn project_point(
    point: &PricePoint,
    time_scale: TimeScale,
    price_scale: PriceScale,
) -> ChartResult<PathPoint> {
    Ok(PathPoint {
        x: time_scale.time_to_pixel(point.time())?,
        y: price_scale.price_to_pixel(point.price)?,
    })
}

/// Projects a chronologically ordered series into polyline vertices.
pub fn project_polyline(
    points: &[PricePoint],
    time_scale: TimeScale,
    price_scale: PriceScale,
) -> ChartResult<Vec<PathPoint>> {
    points
        .iter()
        .map(|point| project_point(point, time_scale, price_scale))
        .collect()
}
