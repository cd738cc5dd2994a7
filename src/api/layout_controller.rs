use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use crate::core::Viewport;
use crate::error::ChartResult;

use super::ChartContext;
use super::host::ChartHost;
use super::scene_builder::reposition_scene;

/// Measured space available to the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerSize {
    /// Width of the mount container.
    pub container_width: u32,
    /// Height of the visible viewport.
    pub viewport_height: u32,
}

impl ContainerSize {
    #[must_use]
    pub const fn new(container_width: u32, viewport_height: u32) -> Self {
        Self {
            container_width,
            viewport_height,
        }
    }

    /// Reads the current size from `host`; `None` when the mount point is gone.
    #[must_use]
    pub fn measure(host: &impl ChartHost, mount_selector: &str) -> Option<Self> {
        host.container_width(mount_selector)
            .map(|width| Self::new(width, host.viewport_height()))
    }
}

/// Resizes the chart to `size`: new plot area, new scale ranges, every element
/// repositioned. Domains, colors and paints are untouched.
///
/// A size too small to hold the margins is rejected and the previous layout is
/// kept.
pub fn relayout(context: &mut ChartContext, size: ContainerSize) -> ChartResult<Viewport> {
    let inner = context
        .config
        .margin
        .inner_viewport(size.container_width, size.viewport_height)
        .inspect_err(|err| warn!(error = %err, "rejecting relayout"))?;

    let mut time_scale = context.time_scale;
    let mut price_scale = context.price_scale;
    time_scale.fit_viewport(inner)?;
    price_scale.fit_viewport(inner)?;
    context.time_scale = time_scale;
    context.price_scale = price_scale;

    reposition_scene(context, inner)?;
    debug!(width = inner.width, height = inner.height, "chart relayout");
    Ok(inner)
}

/// Trailing-edge debouncer for resize notifications.
///
/// Each notification restarts the quiet window; only the latest size is kept
/// and released once no notification arrived for the whole window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeDebouncer {
    window: Duration,
    pending: Option<(ContainerSize, Instant)>,
    superseded: u64,
}

impl ResizeDebouncer {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            superseded: 0,
        }
    }

    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Number of notifications dropped because a newer one replaced them.
    #[must_use]
    pub fn superseded(&self) -> u64 {
        self.superseded
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn notify(&mut self, size: ContainerSize, now: Instant) {
        if self.pending.replace((size, now)).is_some() {
            self.superseded = self.superseded.saturating_add(1);
            trace!(superseded = self.superseded, "resize debounced");
        }
    }

    /// Releases the pending size once the quiet window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<ContainerSize> {
        let (size, last) = self.pending?;
        if now.saturating_duration_since(last) < self.window {
            return None;
        }
        self.pending = None;
        Some(size)
    }
}
