use indexmap::IndexMap;

use crate::core::{AxisTick, Color, Margin, Paint, PathPoint, Viewport};

/// Price line of one region. Lines are never filled.
#[derive(Debug, Clone, PartialEq)]
pub struct LineElement {
    pub path: Vec<PathPoint>,
    pub stroke: Paint,
    pub stroke_width: f64,
}

/// Circle marking the first point of a region.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerElement {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Paint,
}

/// Region name drawn next to its marker.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelElement {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub font_size: f64,
    pub fill: Paint,
}

/// The line, marker and label owned by one region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionElements {
    pub region: String,
    pub tag: String,
    pub color: Color,
    pub line: LineElement,
    pub marker: MarkerElement,
    pub label: LabelElement,
}

/// Region elements keyed by region name, in first-seen order.
///
/// Step states address elements by tag; since two region names can share a
/// tag, tag lookup may yield several entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementRegistry {
    regions: IndexMap<String, RegionElements>,
}

impl ElementRegistry {
    pub fn insert(&mut self, elements: RegionElements) {
        self.regions.insert(elements.region.clone(), elements);
    }

    #[must_use]
    pub fn get(&self, region: &str) -> Option<&RegionElements> {
        self.regions.get(region)
    }

    pub fn get_mut(&mut self, region: &str) -> Option<&mut RegionElements> {
        self.regions.get_mut(region)
    }

    pub fn by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a RegionElements> + 'a {
        self.regions.values().filter(move |elements| elements.tag == tag)
    }

    pub fn by_tag_mut<'a>(
        &'a mut self,
        tag: &'a str,
    ) -> impl Iterator<Item = &'a mut RegionElements> + 'a {
        self.regions
            .values_mut()
            .filter(move |elements| elements.tag == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionElements> {
        self.regions.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut RegionElements> {
        self.regions.values_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Shaded rectangle marking the winter months.
#[derive(Debug, Clone, PartialEq)]
pub struct BarElement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Paint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TitleElement {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub font_size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

/// Axis ticks already positioned along the axis in plot-area pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisElement {
    pub orientation: AxisOrientation,
    /// Translation applied to the whole axis (bottom axes sit at plot height).
    pub offset: f64,
    /// Length of the domain line.
    pub length: f64,
    pub ticks: Vec<AxisTick>,
}

/// In-memory scene graph of the chart. Coordinates are relative to the plot
/// area; `margin` places the plot area inside the outer canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub outer: Viewport,
    pub inner: Viewport,
    pub margin: Margin,
    pub bar: BarElement,
    pub regions: ElementRegistry,
    pub title: TitleElement,
    pub x_axis: AxisElement,
    pub y_axis: AxisElement,
}
