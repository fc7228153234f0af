//! Form controller: explicit state, a pure update function, and an [`App`]
//! that applies the resulting effects to the primary and expanded surfaces.
//!
//! ```
//! use formchart::{Action, ChartType, Effect, FormState, update};
//!
//! let state = FormState::default();
//! let t = update(&state, Action::SelectType(ChartType::Bar))?;
//! let t = update(&t.state, Action::Generate)?;
//! assert!(t.state.generated);
//! assert!(matches!(t.effect, Effect::RenderPrimary(_)));
//! # Ok::<(), formchart::Error>(())
//! ```

use crate::defaults::apply_defaults;
use crate::error::{Error, Result};
use crate::expanded::expanded;
use crate::models::{ChartRequest, ChartType, DEFAULT_DATASET_LABEL};
use crate::parse::{parse_values, split_fields};
use crate::render::{ChartSlot, Renderer, SurfaceId, SurfaceSize};
use crate::spec::{self, ChartSpec};
use crate::stats::{self, Statistics};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Editable text fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Labels,
    Values,
    Colors,
    DatasetLabel,
    XAxisLabel,
    YAxisLabel,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Labels => "labels",
            Field::Values => "values",
            Field::Colors => "colors",
            Field::DatasetLabel => "dataset label",
            Field::XAxisLabel => "x axis label",
            Field::YAxisLabel => "y axis label",
        })
    }
}

/// Everything the UI binds to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    pub chart_type: Option<ChartType>,
    pub labels: String,
    pub values: String,
    pub colors: String,
    pub dataset_label: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub generated: bool,
    pub fullscreen: bool,
    pub statistics: Statistics,
}

impl FormState {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Labels => &self.labels,
            Field::Values => &self.values,
            Field::Colors => &self.colors,
            Field::DatasetLabel => &self.dataset_label,
            Field::XAxisLabel => &self.x_axis_label,
            Field::YAxisLabel => &self.y_axis_label,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Labels => &mut self.labels,
            Field::Values => &mut self.values,
            Field::Colors => &mut self.colors,
            Field::DatasetLabel => &mut self.dataset_label,
            Field::XAxisLabel => &mut self.x_axis_label,
            Field::YAxisLabel => &mut self.y_axis_label,
        }
    }

    /// Parse the form into a request.
    ///
    /// Requires a selected type and non-blank labels and values. Non-numeric
    /// value tokens are kept as NaN.
    pub fn to_request(&self) -> Result<ChartRequest> {
        let chart_type = self.chart_type.ok_or(Error::MissingChartType)?;
        for field in [Field::Labels, Field::Values] {
            if self.field(field).trim().is_empty() {
                return Err(Error::EmptyField(field));
            }
        }
        let dataset_label = if self.dataset_label.is_empty() {
            DEFAULT_DATASET_LABEL.to_string()
        } else {
            self.dataset_label.clone()
        };
        Ok(ChartRequest {
            chart_type,
            labels: split_fields(&self.labels),
            values: parse_values(&self.values),
            colors: (!self.colors.is_empty()).then(|| split_fields(&self.colors)),
            dataset_label,
            x_title: self.x_axis_label.clone(),
            y_title: self.y_axis_label.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Select a chart type and fill empty fields with its sample data.
    SelectType(ChartType),
    Edit(Field, String),
    Generate,
    ToggleFullscreen,
}

/// Work the host must carry out after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Replace the primary chart with this spec.
    RenderPrimary(ChartSpec),
    /// Render the expanded chart once the container has its final layout.
    ScheduleExpanded,
    ReleaseExpanded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: FormState,
    pub effect: Effect,
}

/// Compute the next state for `action`. Never mutates `state`.
pub fn update(state: &FormState, action: Action) -> Result<Transition> {
    let mut next = state.clone();
    let effect = match action {
        Action::SelectType(chart_type) => {
            next.chart_type = Some(chart_type);
            apply_defaults(&mut next, chart_type);
            Effect::None
        }
        Action::Edit(field, text) => {
            *next.field_mut(field) = text;
            Effect::None
        }
        Action::Generate => {
            let request = next.to_request()?;
            next.statistics = stats::summarize(&request.values)?;
            next.generated = true;
            Effect::RenderPrimary(spec::build(&request))
        }
        Action::ToggleFullscreen => {
            if next.fullscreen {
                next.fullscreen = false;
                Effect::ReleaseExpanded
            } else if next.generated {
                next.fullscreen = true;
                Effect::ScheduleExpanded
            } else {
                return Err(Error::NotGenerated);
            }
        }
    };
    Ok(Transition {
        state: next,
        effect,
    })
}

/// Size of the primary surface: unset, so it follows its container.
pub const PRIMARY_SIZE: Option<SurfaceSize> = None;

/// Form state wired to a renderer through two owned chart slots.
pub struct App<R: Renderer> {
    state: FormState,
    renderer: R,
    primary: ChartSlot<R::Chart>,
    expanded: ChartSlot<R::Chart>,
    spec: Option<ChartSpec>,
    expanded_pending: bool,
}

impl<R: Renderer> App<R> {
    pub fn new(renderer: R) -> Self {
        Self::with_state(renderer, FormState::default())
    }

    pub fn with_state(renderer: R, state: FormState) -> Self {
        Self {
            state,
            renderer,
            primary: ChartSlot::new(SurfaceId::Primary),
            expanded: ChartSlot::new(SurfaceId::Expanded),
            spec: None,
            expanded_pending: false,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Spec of the current primary chart.
    pub fn spec(&self) -> Option<&ChartSpec> {
        self.spec.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn primary(&self) -> &ChartSlot<R::Chart> {
        &self.primary
    }

    pub fn expanded(&self) -> &ChartSlot<R::Chart> {
        &self.expanded
    }

    /// Whether an expanded render waits for [`App::layout_settled`].
    pub fn expanded_pending(&self) -> bool {
        self.expanded_pending
    }

    /// Apply `action`. On error the state is left unchanged, except that a
    /// failed primary render also drops the previous chart: `generated` is
    /// cleared and no spec is kept.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let Transition { state, effect } = update(&self.state, action)?;
        match effect {
            Effect::None => {}
            Effect::RenderPrimary(spec) => {
                if let Err(err) = self.primary.mount(&mut self.renderer, PRIMARY_SIZE, &spec) {
                    // mount released the old chart before failing
                    self.spec = None;
                    self.state.generated = false;
                    return Err(err.into());
                }
                self.spec = Some(spec);
            }
            Effect::ScheduleExpanded => {
                self.expanded_pending = true;
            }
            Effect::ReleaseExpanded => {
                self.expanded_pending = false;
                self.expanded.release(&mut self.renderer);
            }
        }
        self.state = state;
        Ok(())
    }

    /// Post-layout callback: the expanded container now measures `size`.
    ///
    /// Renders the pending expanded chart onto a surface of exactly that size.
    /// Returns `false` when nothing was pending, e.g. the view was toggled off
    /// before layout settled.
    pub fn layout_settled(&mut self, size: SurfaceSize) -> Result<bool> {
        if !std::mem::take(&mut self.expanded_pending) || !self.state.fullscreen {
            debug!("layout settled with no expanded render pending");
            return Ok(false);
        }
        let spec = self.spec.as_ref().ok_or(Error::NotGenerated)?;
        let overlay = expanded(spec, &self.state.dataset_label);
        self.expanded.mount(&mut self.renderer, Some(size), &overlay)?;
        Ok(true)
    }

    /// Release both charts.
    pub fn shutdown(&mut self) {
        self.expanded_pending = false;
        self.expanded.release(&mut self.renderer);
        self.primary.release(&mut self.renderer);
    }

    /// Shut down and hand back the renderer.
    pub fn into_renderer(mut self) -> R {
        self.shutdown();
        self.renderer
    }
}
