mod chart;
mod chart_config;
mod chart_context;
mod data_loader;
mod host;
mod layout_controller;
mod render_frame_builder;
mod scene;
mod scene_builder;
mod step_controller;
mod visual_state;

pub use chart::{ChartEvent, EventOutcome, ScrollyChart};
pub use chart_config::{ChartConfig, HighlightBandConfig, TextOffset};
pub use chart_context::{ChartContext, HighlightBand};
pub use data_loader::{load_price_points, parse_price_points};
pub use host::{ChartHost, StaticHost, validate_host};
pub use layout_controller::{ContainerSize, ResizeDebouncer, relayout};
pub use render_frame_builder::build_render_frame;
pub use scene::{
    AxisElement, AxisOrientation, BarElement, ElementRegistry, LabelElement, LineElement,
    MarkerElement, RegionElements, Scene, TitleElement,
};
pub use step_controller::{StepController, StepId, StepTable};
pub use visual_state::{
    AttributeChange, ElementPaints, ElementRef, PaintRule, RegionOverride, StyleAttribute,
    StyleTransition, VisualState, apply_visual_state,
};
