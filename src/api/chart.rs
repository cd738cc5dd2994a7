use std::io::Read;
use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{error, info};

use crate::core::{PricePoint, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer, svg_document};

use super::data_loader::{load_price_points, parse_price_points};
use super::host::{ChartHost, validate_host};
use super::layout_controller::{ContainerSize, ResizeDebouncer, relayout};
use super::render_frame_builder::build_render_frame;
use super::visual_state::StyleTransition;
use super::{ChartConfig, ChartContext, Scene, StepController, StepId};

/// External notification delivered to the chart by its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartEvent {
    /// The scroll trigger `trigger_id` entered the viewport.
    StepEnter { trigger_id: String },
    /// The container or viewport changed size.
    Resize(ContainerSize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    StepApplied(StyleTransition),
    /// The resize is held until the debounce window passes; see
    /// [`ScrollyChart::poll`].
    ResizeScheduled,
}

/// Scroll-driven regional price chart bound to a renderer.
///
/// Events are handled one at a time; every handled event that changes the
/// scene is followed by a render pass.
pub struct ScrollyChart<R: Renderer> {
    renderer: R,
    context: ChartContext,
    steps: StepController,
    debouncer: ResizeDebouncer,
}

impl<R: Renderer> ScrollyChart<R> {
    /// Validates the host, loads the CSV at `data_path` and renders the chart.
    ///
    /// Load failures are logged and returned; nothing is rendered.
    pub fn load(
        renderer: R,
        config: ChartConfig,
        host: &impl ChartHost,
        data_path: impl AsRef<Path>,
    ) -> ChartResult<Self> {
        validate_host(&config, host)?;
        let points = load_price_points(data_path)
            .inspect_err(|err| error!(error = %err, "failed to load price data"))?;
        Self::from_points(renderer, config, host, &points)
    }

    /// Same as [`ScrollyChart::load`], reading CSV from `reader`.
    pub fn from_reader(
        renderer: R,
        config: ChartConfig,
        host: &impl ChartHost,
        reader: impl Read,
    ) -> ChartResult<Self> {
        validate_host(&config, host)?;
        let points = parse_price_points(reader)
            .inspect_err(|err| error!(error = %err, "failed to parse price data"))?;
        Self::from_points(renderer, config, host, &points)
    }

    /// Builds and renders the chart from already parsed points, then lays it
    /// out once for the host's current size.
    pub fn from_points(
        renderer: R,
        config: ChartConfig,
        host: &impl ChartHost,
        points: &[PricePoint],
    ) -> ChartResult<Self> {
        validate_host(&config, host)?;
        let mut context = ChartContext::new(config, points)?;

        let size = ContainerSize::measure(host, &context.config.mount_selector)
            .ok_or_else(|| ChartError::MissingMountPoint(context.config.mount_selector.clone()))?;
        match relayout(&mut context, size) {
            // Too small for the margins: keep the initial layout.
            Ok(_) | Err(ChartError::InvalidViewport { .. }) => {}
            Err(err) => return Err(err),
        }

        let steps = StepController::from_config(&context.config);
        let debouncer =
            ResizeDebouncer::new(Duration::from_millis(context.config.resize_debounce_ms));
        let mut chart = Self {
            renderer,
            context,
            steps,
            debouncer,
        };
        chart.render()?;
        info!(
            regions = chart.context.series().len(),
            width = chart.context.inner_viewport().width,
            height = chart.context.inner_viewport().height,
            "chart rendered"
        );
        Ok(chart)
    }

    pub fn handle_event(&mut self, event: ChartEvent, now: Instant) -> ChartResult<EventOutcome> {
        match event {
            ChartEvent::StepEnter { trigger_id } => {
                let transition = self.steps.on_step_enter(&mut self.context, &trigger_id)?;
                self.render()?;
                Ok(EventOutcome::StepApplied(transition))
            }
            ChartEvent::Resize(size) => {
                self.debouncer.notify(size, now);
                Ok(EventOutcome::ResizeScheduled)
            }
        }
    }

    /// Applies a debounced resize once its quiet window has passed.
    ///
    /// Returns the new plot-area size when a relayout happened.
    pub fn poll(&mut self, now: Instant) -> ChartResult<Option<Viewport>> {
        match self.debouncer.poll(now) {
            Some(size) => self.resize_now(size).map(Some),
            None => Ok(None),
        }
    }

    /// Relayouts immediately, bypassing the debouncer.
    pub fn resize_now(&mut self, size: ContainerSize) -> ChartResult<Viewport> {
        let inner = relayout(&mut self.context, size)?;
        self.render()?;
        Ok(inner)
    }

    pub fn enter_step(&mut self, step: StepId) -> ChartResult<StyleTransition> {
        let transition = self.steps.apply(&mut self.context, step)?;
        self.render()?;
        Ok(transition)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        build_render_frame(self.context.scene())
    }

    pub fn to_svg(&self) -> ChartResult<String> {
        svg_document(&self.frame())
    }

    #[must_use]
    pub fn context(&self) -> &ChartContext {
        &self.context
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        self.context.scene()
    }

    #[must_use]
    pub fn steps(&self) -> &StepController {
        &self.steps
    }

    #[must_use]
    pub fn has_pending_resize(&self) -> bool {
        self.debouncer.is_pending()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
