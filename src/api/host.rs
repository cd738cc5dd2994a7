use std::collections::HashSet;

use crate::error::{ChartError, ChartResult};

use super::ChartConfig;

/// Environment the chart is mounted into.
///
/// Embedders answer three questions: does the mount point exist (and how wide
/// is it), how tall is the visible viewport, and does a given scroll trigger
/// element exist.
pub trait ChartHost {
    /// Width of the element matched by `selector`, or `None` when it is absent.
    fn container_width(&self, selector: &str) -> Option<u32>;

    /// Height of the visible viewport (window inner height).
    fn viewport_height(&self) -> u32;

    fn has_step_trigger(&self, trigger_id: &str) -> bool;
}

/// Fails fast when the mount point or any configured step trigger is missing.
pub fn validate_host(config: &ChartConfig, host: &impl ChartHost) -> ChartResult<()> {
    if host.container_width(&config.mount_selector).is_none() {
        return Err(ChartError::MissingMountPoint(config.mount_selector.clone()));
    }

    if let Some(missing) = config
        .step_triggers
        .keys()
        .find(|trigger_id| !host.has_step_trigger(trigger_id))
    {
        return Err(ChartError::MissingStepTrigger(missing.clone()));
    }

    Ok(())
}

/// Fixed-size host for headless rendering and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticHost {
    mount_selector: Option<String>,
    container_width: u32,
    viewport_height: u32,
    triggers: HashSet<String>,
}

impl StaticHost {
    /// Host exposing the configured mount point and every configured trigger.
    #[must_use]
    pub fn for_config(config: &ChartConfig, container_width: u32, viewport_height: u32) -> Self {
        Self {
            mount_selector: Some(config.mount_selector.clone()),
            container_width,
            viewport_height,
            triggers: config.step_triggers.keys().cloned().collect(),
        }
    }

    #[must_use]
    pub fn without_mount_point(mut self) -> Self {
        self.mount_selector = None;
        self
    }

    #[must_use]
    pub fn without_trigger(mut self, trigger_id: &str) -> Self {
        self.triggers.remove(trigger_id);
        self
    }

    pub fn set_size(&mut self, container_width: u32, viewport_height: u32) {
        self.container_width = container_width;
        self.viewport_height = viewport_height;
    }
}

impl ChartHost for StaticHost {
    fn container_width(&self, selector: &str) -> Option<u32> {
        self.mount_selector
            .as_deref()
            .filter(|mount| *mount == selector)
            .map(|_| self.container_width)
    }

    fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    fn has_step_trigger(&self, trigger_id: &str) -> bool {
        self.triggers.contains(trigger_id)
    }
}
