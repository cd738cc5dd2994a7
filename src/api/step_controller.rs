use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Paint, region_tag};
use crate::error::{ChartError, ChartResult};

use super::visual_state::{
    ElementPaints, PaintRule, RegionOverride, StyleTransition, VisualState, apply_visual_state,
};
use super::{ChartConfig, ChartContext};

/// Named scroll checkpoints, in narrative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepId {
    /// Everything hidden except the axes.
    Blank,
    /// Every region in its own color, band hidden.
    AllVisible,
    /// Focus region emphasized, every other region muted.
    UsOnly,
    /// As `UsOnly`, with the highlight regions emphasized too.
    UsPlusHighlightRegions,
    /// As `UsPlusHighlightRegions`, with the band shown.
    FullWithBar,
}

impl StepId {
    pub const ALL: [Self; 5] = [
        Self::Blank,
        Self::AllVisible,
        Self::UsOnly,
        Self::UsPlusHighlightRegions,
        Self::FullWithBar,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::AllVisible => "all-visible",
            Self::UsOnly => "us-only",
            Self::UsPlusHighlightRegions => "us-plus-highlight-regions",
            Self::FullWithBar => "full-with-bar",
        }
    }

    /// Id of the page element that fires this step when scrolled into view.
    #[must_use]
    pub const fn default_trigger_id(self) -> &'static str {
        match self {
            Self::Blank => "blank-chart-two",
            Self::AllVisible => "all-lines",
            Self::UsOnly => "us-line",
            Self::UsPlusHighlightRegions => "highlight-line",
            Self::FullWithBar => "highlight-bar",
        }
    }
}

/// Pure mapping from step to the visual state it declares.
#[derive(Debug, Clone, PartialEq)]
pub struct StepTable {
    states: IndexMap<StepId, VisualState>,
}

impl StepTable {
    /// Builds the five step states from the configured colors and regions.
    #[must_use]
    pub fn from_config(config: &ChartConfig) -> Self {
        let muted = PaintRule::Fixed(config.muted_color);
        let focus = RegionOverride {
            tag: region_tag(&config.focus_region),
            paints: ElementPaints::uniform(PaintRule::Fixed(config.focus_color)),
        };
        let mut with_highlights = vec![focus.clone()];
        with_highlights.extend(config.highlight_regions.iter().map(|region| RegionOverride {
            tag: region_tag(region),
            paints: ElementPaints::uniform(PaintRule::Fixed(config.highlight_color)),
        }));

        let states = [
            VisualState {
                step: StepId::Blank,
                bar: Paint::None,
                base: ElementPaints::uniform(PaintRule::Hidden),
                overrides: Vec::new(),
            },
            VisualState {
                step: StepId::AllVisible,
                bar: Paint::None,
                base: ElementPaints {
                    point: PaintRule::RegionColor,
                    line: PaintRule::RegionColor,
                    label: PaintRule::Fixed(config.label_color),
                },
                overrides: Vec::new(),
            },
            VisualState {
                step: StepId::UsOnly,
                bar: Paint::None,
                base: ElementPaints::uniform(muted),
                overrides: vec![focus],
            },
            VisualState {
                step: StepId::UsPlusHighlightRegions,
                bar: Paint::None,
                base: ElementPaints::uniform(muted),
                overrides: with_highlights.clone(),
            },
            VisualState {
                step: StepId::FullWithBar,
                bar: Paint::Color(config.highlight_band.fill),
                base: ElementPaints::uniform(muted),
                overrides: with_highlights,
            },
        ]
        .into_iter()
        .map(|state| (state.step, state))
        .collect();

        Self { states }
    }

    #[must_use]
    pub fn state(&self, step: StepId) -> Option<&VisualState> {
        self.states.get(&step)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VisualState> {
        self.states.values()
    }
}

/// Applies step states to a chart context in response to trigger events.
///
/// The controller keeps no history: each entry restates the whole chart, so
/// step order does not matter and re-entering a step is harmless.
#[derive(Debug, Clone, PartialEq)]
pub struct StepController {
    table: StepTable,
    triggers: IndexMap<String, StepId>,
    transition: Duration,
}

impl StepController {
    #[must_use]
    pub fn from_config(config: &ChartConfig) -> Self {
        Self {
            table: StepTable::from_config(config),
            triggers: config.step_triggers.clone(),
            transition: Duration::from_millis(config.transition_ms),
        }
    }

    #[must_use]
    pub fn table(&self) -> &StepTable {
        &self.table
    }

    pub fn resolve_trigger(&self, trigger_id: &str) -> ChartResult<StepId> {
        self.triggers
            .get(trigger_id)
            .copied()
            .ok_or_else(|| ChartError::UnknownStep(trigger_id.to_owned()))
    }

    /// Handles a "step entered" event fired by the trigger `trigger_id`.
    pub fn on_step_enter(
        &self,
        context: &mut ChartContext,
        trigger_id: &str,
    ) -> ChartResult<StyleTransition> {
        let step = self.resolve_trigger(trigger_id)?;
        self.apply(context, step)
    }

    pub fn apply(&self, context: &mut ChartContext, step: StepId) -> ChartResult<StyleTransition> {
        let state = self
            .table
            .state(step)
            .ok_or_else(|| ChartError::UnknownStep(step.name().to_owned()))?;
        let transition = apply_visual_state(&mut context.scene, state, self.transition);
        debug!(
            step = step.name(),
            changes = transition.changes.len(),
            "step entered"
        );
        Ok(transition)
    }
}
