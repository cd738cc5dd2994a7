use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Color, Paint};

use super::StepId;
use super::scene::{RegionElements, Scene};

/// How one element category is painted in a visual state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "color")]
pub enum PaintRule {
    /// Transparent (`none`).
    Hidden,
    /// The region's assigned palette color.
    RegionColor,
    Fixed(Color),
}

impl PaintRule {
    #[must_use]
    pub fn resolve(self, region_color: Color) -> Paint {
        match self {
            Self::Hidden => Paint::None,
            Self::RegionColor => Paint::Color(region_color),
            Self::Fixed(color) => Paint::Color(color),
        }
    }
}

/// Paint rules for the per-region element categories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementPaints {
    /// Marker fill.
    pub point: PaintRule,
    /// Line stroke.
    pub line: PaintRule,
    /// Label fill.
    pub label: PaintRule,
}

impl ElementPaints {
    #[must_use]
    pub const fn uniform(rule: PaintRule) -> Self {
        Self {
            point: rule,
            line: rule,
            label: rule,
        }
    }
}

/// Paints applied to every region carrying `tag`, instead of the base paints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionOverride {
    pub tag: String,
    pub paints: ElementPaints,
}

/// Complete declared appearance of the chart for one step.
///
/// A state restates every styled attribute, so applying it never depends on
/// what was applied before.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualState {
    pub step: StepId,
    pub bar: Paint,
    pub base: ElementPaints,
    /// Later entries win when several match the same tag.
    #[serde(default)]
    pub overrides: Vec<RegionOverride>,
}

impl VisualState {
    /// Overrides that take effect: the last entry for each tag.
    pub fn effective_overrides(&self) -> impl Iterator<Item = &RegionOverride> {
        self.overrides
            .iter()
            .enumerate()
            .filter(|(index, candidate)| {
                !self.overrides[index + 1..]
                    .iter()
                    .any(|later| later.tag == candidate.tag)
            })
            .map(|(_, candidate)| candidate)
    }
}

/// Scene element addressed by a style change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementRef {
    Bar,
    Line(String),
    Point(String),
    Label(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleAttribute {
    Fill,
    Stroke,
}

/// One attribute whose value changed when a state was applied.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeChange {
    pub element: ElementRef,
    pub attribute: StyleAttribute,
    pub from: Paint,
    pub to: Paint,
}

impl AttributeChange {
    /// Value shown at `progress` (0..=1) through the transition.
    #[must_use]
    pub fn paint_at(&self, progress: f64) -> Paint {
        self.from.interpolate(self.to, progress)
    }
}

/// Attribute changes produced by one state application, to be eased over
/// `duration` by hosts that animate.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTransition {
    pub step: StepId,
    pub duration: Duration,
    pub changes: Vec<AttributeChange>,
}

impl StyleTransition {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Progress (0..=1) after `elapsed` time.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }
}

/// Writes every styled attribute of `scene` as declared by `state`.
///
/// The scene holds final values immediately; the returned transition lists the
/// attributes whose values actually changed.
pub fn apply_visual_state(
    scene: &mut Scene,
    state: &VisualState,
    duration: Duration,
) -> StyleTransition {
    let mut changes = Vec::new();

    set_paint(
        &mut scene.bar.fill,
        state.bar,
        ElementRef::Bar,
        StyleAttribute::Fill,
        &mut changes,
    );

    let overridden: HashSet<&str> = state
        .overrides
        .iter()
        .map(|candidate| candidate.tag.as_str())
        .collect();
    for elements in scene
        .regions
        .iter_mut()
        .filter(|elements| !overridden.contains(elements.tag.as_str()))
    {
        apply_region(elements, state.base, &mut changes);
    }

    for region_override in state.effective_overrides() {
        for elements in scene.regions.by_tag_mut(&region_override.tag) {
            apply_region(elements, region_override.paints, &mut changes);
        }
    }

    StyleTransition {
        step: state.step,
        duration,
        changes,
    }
}

fn apply_region(
    elements: &mut RegionElements,
    paints: ElementPaints,
    changes: &mut Vec<AttributeChange>,
) {
    let color = elements.color;
    set_paint(
        &mut elements.line.stroke,
        paints.line.resolve(color),
        ElementRef::Line(elements.region.clone()),
        StyleAttribute::Stroke,
        changes,
    );
    set_paint(
        &mut elements.marker.fill,
        paints.point.resolve(color),
        ElementRef::Point(elements.region.clone()),
        StyleAttribute::Fill,
        changes,
    );
    set_paint(
        &mut elements.label.fill,
        paints.label.resolve(color),
        ElementRef::Label(elements.region.clone()),
        StyleAttribute::Fill,
        changes,
    );
}

fn set_paint(
    slot: &mut Paint,
    target: Paint,
    element: ElementRef,
    attribute: StyleAttribute,
    changes: &mut Vec<AttributeChange>,
) {
    if *slot == target {
        return;
    }
    changes.push(AttributeChange {
        element,
        attribute,
        from: *slot,
        to: target,
    });
    *slot = target;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focus(tag: &str, color: Color) -> RegionOverride {
        RegionOverride {
            tag: tag.to_owned(),
            paints: ElementPaints::uniform(PaintRule::Fixed(color)),
        }
    }

    #[test]
    fn later_override_for_a_tag_wins() {
        let state = VisualState {
            step: StepId::UsOnly,
            bar: Paint::None,
            base: ElementPaints::uniform(PaintRule::Hidden),
            overrides: vec![
                focus("us", Color::RED),
                focus("pacific", Color::TURQUOISE),
                focus("us", Color::BLACK),
            ],
        };

        let effective: Vec<_> = state.effective_overrides().collect();
        assert_eq!(effective.len(), 2);
        assert_eq!(effective[0].tag, "pacific");
        assert_eq!(effective[1], &focus("us", Color::BLACK));
    }

    #[test]
    fn zero_duration_transition_is_complete() {
        let transition = StyleTransition {
            step: StepId::Blank,
            duration: Duration::ZERO,
            changes: Vec::new(),
        };
        assert_eq!(transition.progress(Duration::from_millis(10)), 1.0);
        assert!(transition.is_empty());
    }
}
