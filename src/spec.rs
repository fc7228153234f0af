//! Chart specs: the fully-resolved configuration handed to the charting library.
//!
//! The types serialize to the Chart.js configuration schema (camelCase keys,
//! unset options omitted). NaN data points serialize as `null`, which the
//! library draws as a gap.
//!
//! [`build`] maps a [`ChartRequest`] to a [`ChartSpec`] in two steps: a base
//! skeleton shared by every chart type, then one augmentation selected through
//! [`augmenter`].

use crate::models::{ChartRequest, ChartType};
use log::{debug, warn};
use serde::Serialize;

/// Palette for slice charts when the user supplied no colors.
pub const DEFAULT_PALETTE: [&str; 6] = [
    "rgba(255, 99, 132, 0.7)",
    "rgba(54, 162, 235, 0.7)",
    "rgba(255, 206, 86, 0.7)",
    "rgba(75, 192, 192, 0.7)",
    "rgba(153, 102, 255, 0.7)",
    "rgba(255, 159, 64, 0.7)",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_border_color: Option<String>,
}

/// A single color for the whole dataset, or one color per value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorSpec {
    One(String),
    PerValue(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Plugins>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            scales: None,
            plugins: None,
            layout: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub title: AxisTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Plugins {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Right,
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: LegendPosition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<LegendLabels>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendLabels {
    pub font: Font,
    pub padding: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub display: bool,
    pub text: String,
    pub font: Font,
    pub padding: Padding,
}

/// Padding in pixels; unset sides are left to the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Padding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<u32>,
}

impl Padding {
    pub fn uniform(px: u32) -> Self {
        Self {
            top: Some(px),
            right: Some(px),
            bottom: Some(px),
            left: Some(px),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub padding: Padding,
}

impl ChartSpec {
    /// The single dataset every built spec carries.
    ///
    /// # Panics
    /// If `data.datasets` is empty, which only a hand-assembled spec can be.
    pub fn dataset(&self) -> &Dataset {
        &self.data.datasets[0]
    }

    /// Mutable form of [`ChartSpec::dataset`]; panics on the same condition.
    pub fn dataset_mut(&mut self) -> &mut Dataset {
        &mut self.data.datasets[0]
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Type-specific step applied on top of the base skeleton.
pub type Augment = fn(&ChartRequest, &mut ChartSpec);

/// Look up the augmentation for a chart type.
pub fn augmenter(chart_type: ChartType) -> Augment {
    match chart_type {
        ChartType::Bar => augment_bar,
        ChartType::Line => augment_line,
        ChartType::Pie | ChartType::Doughnut | ChartType::PolarArea => augment_slices,
        ChartType::Radar => augment_radar,
    }
}

/// Build a self-contained spec from a request.
pub fn build(request: &ChartRequest) -> ChartSpec {
    if request.values.iter().any(|v| v.is_nan()) {
        warn!("values contain non-numeric entries; they will render as gaps");
    }
    let mut spec = base(request);
    augmenter(request.chart_type)(request, &mut spec);
    debug!(
        "built {} spec with {} labels and {} values",
        request.chart_type,
        request.labels.len(),
        request.values.len()
    );
    spec
}

/// Skeleton shared by every chart type.
pub fn base(request: &ChartRequest) -> ChartSpec {
    ChartSpec {
        chart_type: request.chart_type,
        data: ChartData {
            labels: request.labels.clone(),
            datasets: vec![Dataset {
                label: request.dataset_label.clone(),
                data: request.values.clone(),
                border_width: 1,
                ..Dataset::default()
            }],
        },
        options: ChartOptions::default(),
    }
}

/// Repeat `colors` (whole-list concatenation) until it covers `n` values, then truncate to `n`.
///
/// An empty list falls back to [`DEFAULT_PALETTE`].
pub fn cycle_colors(colors: &[String], n: usize) -> Vec<String> {
    let mut out: Vec<String> = if colors.is_empty() {
        DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
    } else {
        colors.to_vec()
    };
    while out.len() < n {
        out.extend_from_within(..);
    }
    out.truncate(n);
    out
}

fn axis_scales(request: &ChartRequest) -> Scales {
    Scales {
        x: Axis {
            title: AxisTitle {
                display: true,
                text: request.x_title.clone(),
            },
            begin_at_zero: None,
        },
        y: Axis {
            title: AxisTitle {
                display: true,
                text: request.y_title.clone(),
            },
            begin_at_zero: Some(true),
        },
    }
}

fn augment_bar(request: &ChartRequest, spec: &mut ChartSpec) {
    spec.options.scales = Some(axis_scales(request));
    let ds = spec.dataset_mut();
    ds.background_color = Some(ColorSpec::One("rgba(54, 162, 235, 0.5)".into()));
    ds.border_color = Some("rgb(54, 162, 235)".into());
}

fn augment_line(request: &ChartRequest, spec: &mut ChartSpec) {
    spec.options.scales = Some(axis_scales(request));
    let ds = spec.dataset_mut();
    ds.tension = Some(0.3);
    ds.fill = Some(false);
    ds.border_color = Some("rgb(75, 192, 192)".into());
    ds.background_color = Some(ColorSpec::One("rgba(75, 192, 192, 0.5)".into()));
}

fn augment_slices(request: &ChartRequest, spec: &mut ChartSpec) {
    let colors = cycle_colors(request.colors.as_deref().unwrap_or(&[]), request.values.len());
    let ds = spec.dataset_mut();
    ds.background_color = Some(ColorSpec::PerValue(colors));
    ds.border_color = Some("white".into());
    ds.border_width = 2;
    spec.options.plugins = Some(Plugins {
        legend: Some(Legend {
            position: LegendPosition::Right,
            labels: None,
        }),
        title: None,
    });
}

fn augment_radar(_request: &ChartRequest, spec: &mut ChartSpec) {
    let ds = spec.dataset_mut();
    ds.background_color = Some(ColorSpec::One("rgba(54, 162, 235, 0.2)".into()));
    ds.border_color = Some("rgb(54, 162, 235)".into());
    ds.point_background_color = Some("rgb(54, 162, 235)".into());
    ds.point_border_color = Some("#fff".into());
    ds.point_hover_background_color = Some("#fff".into());
    ds.point_hover_border_color = Some("rgb(54, 162, 235)".into());
}
