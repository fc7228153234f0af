//! formchart
//!
//! A lightweight Rust library for turning delimited form input into chart
//! configurations for an external charting library (Chart.js), plus summary
//! statistics. Pairs with the `formchart` CLI.
//!
//! ### Features
//! - Parse labels/values/colors separated by `,` or the full-width `，`
//! - Sample data for empty fields when a chart type is selected
//! - Summary statistics (sum, mean, min, max, median, standard deviation)
//! - Build fully-resolved chart specs, plus an expanded (fullscreen) variant
//! - Owned chart slots that release the previous chart before replacing it
//!
//! ### Example
//! ```no_run
//! use formchart::{Action, App, ChartType, SurfaceSize, render::HtmlRenderer};
//!
//! let mut app = App::new(HtmlRenderer::new("out"));
//! app.dispatch(Action::SelectType(ChartType::Pie))?;
//! app.dispatch(Action::Generate)?;
//! println!("{}", app.state().statistics);
//!
//! app.dispatch(Action::ToggleFullscreen)?;
//! app.layout_settled(SurfaceSize { width: 1600, height: 900 })?;
//! # Ok::<(), formchart::Error>(())
//! ```

pub mod app;
pub mod defaults;
pub mod error;
pub mod expanded;
pub mod models;
pub mod parse;
pub mod render;
pub mod spec;
pub mod stats;
pub mod storage;

pub use app::{Action, App, Effect, Field, FormState, Transition, update};
pub use error::{Error, Result};
pub use models::{CHART_TYPES, ChartRequest, ChartType, ChartTypeDescriptor};
pub use render::{ChartSlot, Renderer, Surface, SurfaceId, SurfaceSize};
pub use spec::ChartSpec;
pub use stats::Statistics;
