use indexmap::IndexMap;
use tracing::warn;

use crate::core::Color;
use crate::error::{ChartError, ChartResult};

/// Ordinal key-to-color mapping with an implicit, first-seen domain.
///
/// Keys receive palette entries in the order they are first requested. Once
/// the palette is exhausted the assignment wraps, so later keys share colors
/// with earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalColorScale {
    palette: Vec<Color>,
    assigned: IndexMap<String, Color>,
}

impl OrdinalColorScale {
    pub fn new(palette: Vec<Color>) -> ChartResult<Self> {
        if palette.is_empty() {
            return Err(ChartError::InvalidData(
                "color palette must not be empty".to_owned(),
            ));
        }
        for color in &palette {
            color.validate()?;
        }

        Ok(Self {
            palette,
            assigned: IndexMap::new(),
        })
    }

    /// Returns the color for `key`, assigning the next palette slot on first use.
    pub fn assign(&mut self, key: &str) -> Color {
        if let Some(color) = self.assigned.get(key) {
            return *color;
        }

        let slot = self.assigned.len() % self.palette.len();
        if self.assigned.len() == self.palette.len() {
            warn!(
                palette_len = self.palette.len(),
                key, "color palette exhausted; colors will repeat"
            );
        }
        let color = self.palette[slot];
        self.assigned.insert(key.to_owned(), color);
        color
    }

    #[must_use]
    pub fn color_of(&self, key: &str) -> Option<Color> {
        self.assigned.get(key).copied()
    }

    #[must_use]
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Assigned keys in assignment order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.assigned.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// True when more keys were assigned than the palette holds.
    #[must_use]
    pub fn has_collisions(&self) -> bool {
        self.assigned.len() > self.palette.len()
    }
}
