pub mod color;
pub mod color_scale;
pub mod line_series;
pub mod price_scale;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod time_scale;
pub mod types;

pub use color::{Color, Paint};
pub use color_scale::OrdinalColorScale;
pub use line_series::{PathPoint, project_point, project_polyline};
pub use price_scale::PriceScale;
pub use primitives::{parse_month, parse_price, region_tag};
pub use scale::{AxisTick, LinearScale, MAX_TICK_COUNT, extent};
pub use series::{SeriesGroup, group_by_region};
pub use time_scale::{TIME_TICK_FORMAT, TimeScale};
pub use types::{Margin, PricePoint, Viewport};
