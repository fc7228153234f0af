//! Render lifecycle: the boundary to the external charting library.
//!
//! A [`Renderer`] turns a [`ChartSpec`] into a live chart bound to a drawing
//! surface. Live charts hold library resources (listeners, canvas contexts) and
//! must be destroyed explicitly. [`ChartSlot`] owns at most one chart per
//! surface and always destroys the previous chart before creating the next.
//!
//! [`HtmlRenderer`] is the concrete backend: each surface becomes a standalone
//! HTML page that loads Chart.js and constructs the chart from the embedded spec.

use crate::error::RenderError;
use crate::spec::ChartSpec;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// The two drawing surfaces the app renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SurfaceId {
    Primary,
    Expanded,
}

impl SurfaceId {
    /// DOM id of the canvas backing this surface.
    pub fn canvas_id(self) -> &'static str {
        match self {
            SurfaceId::Primary => "chartCanvas",
            SurfaceId::Expanded => "fullscreenChartCanvas",
        }
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceId::Primary => f.write_str("primary"),
            SurfaceId::Expanded => f.write_str("expanded"),
        }
    }
}

/// Pixel dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

/// A drawing surface; `size: None` lets the surface follow its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    pub id: SurfaceId,
    pub size: Option<SurfaceSize>,
}

/// The external charting library.
pub trait Renderer {
    /// Handle to a live chart. Not `Clone`: exactly one owner releases it.
    type Chart;

    fn create(&mut self, surface: &Surface, spec: &ChartSpec) -> Result<Self::Chart, RenderError>;

    fn destroy(&mut self, chart: Self::Chart);
}

/// Owner of the (at most one) live chart on a surface.
#[derive(Debug)]
pub struct ChartSlot<C> {
    surface: SurfaceId,
    chart: Option<C>,
}

impl<C> ChartSlot<C> {
    pub fn new(surface: SurfaceId) -> Self {
        Self {
            surface,
            chart: None,
        }
    }

    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    pub fn chart(&self) -> Option<&C> {
        self.chart.as_ref()
    }

    pub fn is_live(&self) -> bool {
        self.chart.is_some()
    }

    /// Replace the slot's chart: destroy the current one, then create from `spec`.
    ///
    /// If creation fails the slot is left empty.
    pub fn mount<R>(
        &mut self,
        renderer: &mut R,
        size: Option<SurfaceSize>,
        spec: &ChartSpec,
    ) -> Result<&C, RenderError>
    where
        R: Renderer<Chart = C>,
    {
        self.release(renderer);
        let surface = Surface {
            id: self.surface,
            size,
        };
        let chart = renderer.create(&surface, spec)?;
        debug!("mounted {} chart on {} surface", spec.chart_type, self.surface);
        Ok(self.chart.insert(chart))
    }

    /// Destroy the current chart, if any. Returns whether one was live.
    pub fn release<R>(&mut self, renderer: &mut R) -> bool
    where
        R: Renderer<Chart = C>,
    {
        match self.chart.take() {
            Some(chart) => {
                renderer.destroy(chart);
                debug!("released chart on {} surface", self.surface);
                true
            }
            None => false,
        }
    }
}

/// Where Chart.js is loaded from in generated pages.
pub const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js";

/// A chart written as an HTML page.
#[derive(Debug, PartialEq, Eq)]
pub struct HtmlChart {
    pub surface: SurfaceId,
    pub path: PathBuf,
}

/// Writes one `<surface>.html` page per surface into an output directory.
///
/// Mirrors the library's canvas rule: a surface whose chart has not been
/// destroyed cannot take another one.
#[derive(Debug)]
pub struct HtmlRenderer {
    out_dir: PathBuf,
    live: BTreeSet<SurfaceId>,
}

impl HtmlRenderer {
    pub fn new<P: AsRef<Path>>(out_dir: P) -> Self {
        Self {
            out_dir: out_dir.as_ref().to_path_buf(),
            live: BTreeSet::new(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn path_for(&self, surface: SurfaceId) -> PathBuf {
        self.out_dir.join(format!("{surface}.html"))
    }

    pub fn is_live(&self, surface: SurfaceId) -> bool {
        self.live.contains(&surface)
    }
}

impl Renderer for HtmlRenderer {
    type Chart = HtmlChart;

    fn create(&mut self, surface: &Surface, spec: &ChartSpec) -> Result<HtmlChart, RenderError> {
        if self.live.contains(&surface.id) {
            return Err(RenderError::SurfaceInUse(surface.id));
        }
        let page = html_page(surface, spec)?;
        fs::create_dir_all(&self.out_dir)?;
        let path = self.path_for(surface.id);
        fs::write(&path, page)?;
        self.live.insert(surface.id);
        info!("wrote {} chart to {}", spec.chart_type, path.display());
        Ok(HtmlChart {
            surface: surface.id,
            path,
        })
    }

    fn destroy(&mut self, chart: HtmlChart) {
        self.live.remove(&chart.surface);
    }
}

/// Standalone page constructing the chart on a canvas sized to the surface.
pub fn html_page(surface: &Surface, spec: &ChartSpec) -> Result<String, RenderError> {
    // No raw `<` inside the script block: `</script>` and `<!--` both change
    // how the HTML parser reads it. `\u003c` is the same character to JSON.
    let config = serde_json::to_string_pretty(spec)?.replace('<', "\\u003c");
    let (container_style, canvas_attrs) = match surface.size {
        Some(SurfaceSize { width, height }) => (
            format!("width:{width}px;height:{height}px;"),
            format!(" width=\"{width}\" height=\"{height}\""),
        ),
        None => ("width:100%;height:400px;".to_string(), String::new()),
    };
    let canvas_id = surface.id.canvas_id();
    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{chart_type} chart</title>
<script src="{cdn}"></script>
</head>
<body>
<div style="position:relative;{container_style}">
<canvas id="{canvas_id}"{canvas_attrs}></canvas>
</div>
<script>
const config = {config};
new Chart(document.getElementById("{canvas_id}").getContext("2d"), config);
</script>
</body>
</html>
"#,
        chart_type = spec.chart_type,
        cdn = CHART_JS_CDN,
    ))
}
