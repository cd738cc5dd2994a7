//! housing-scrolly: scroll-driven line chart of regional housing prices.
//!
//! A chart is built once from a `month,region,price` CSV. Afterwards it only
//! reacts to two host events: a scroll step being entered, which restyles every
//! element from a fixed table of visual states, and a (debounced) resize, which
//! repositions every element against new scale ranges.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEvent, ScrollyChart, StepId};
pub use error::{ChartError, ChartResult};
