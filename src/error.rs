//! Error types shared across the crate.

use crate::app::Field;
use crate::render::SurfaceId;
use thiserror::Error;

/// Convenience alias used by every fallible library function.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Input that a computation is undefined for (e.g. statistics of nothing).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown chart type `{0}` (expected one of bar, line, pie, doughnut, radar, polarArea)")]
    UnknownChartType(String),

    #[error("no chart type selected")]
    MissingChartType,

    #[error("the {0} field is empty")]
    EmptyField(Field),

    /// The expanded view needs a chart to expand.
    #[error("no chart has been generated yet")]
    NotGenerated,

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures reported by a [`crate::render::Renderer`].
#[derive(Debug, Error)]
pub enum RenderError {
    /// A chart is still attached to the surface; it must be destroyed first.
    #[error("surface `{0}` is already in use; destroy its chart before reusing it")]
    SurfaceInUse(SurfaceId),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
