use indexmap::IndexMap;

use crate::core::primitives::region_tag;
use crate::core::{Color, OrdinalColorScale, PricePoint};

/// All points of one region in chronological order, with its stable color.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesGroup {
    pub region: String,
    pub tag: String,
    pub color: Color,
    pub points: Vec<PricePoint>,
}

impl SeriesGroup {
    /// Earliest point; labels and markers are anchored here.
    #[must_use]
    pub fn first_point(&self) -> Option<&PricePoint> {
        self.points.first()
    }
}

/// Groups points by region, preserving first-seen region order.
///
/// Colors are assigned through `colors` in that same order, so the mapping is
/// stable for a given input file.
#[must_use]
pub fn group_by_region(points: &[PricePoint], colors: &mut OrdinalColorScale) -> Vec<SeriesGroup> {
    let mut groups: IndexMap<&str, Vec<PricePoint>> = IndexMap::new();
    for point in points {
        groups
            .entry(point.region.as_str())
            .or_default()
            .push(point.clone());
    }

    groups
        .into_iter()
        .map(|(region, mut points)| {
            points.sort_by_key(|point| point.timestamp);
            SeriesGroup {
                region: region.to_owned(),
                tag: region_tag(region),
                color: colors.assign(region),
                points,
            }
        })
        .collect()
}
