use crate::error::Result;
use crate::spec::ChartSpec;
use crate::stats::Statistics;
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save a chart spec as pretty JSON (the exact config handed to the library).
pub fn save_spec_json<P: AsRef<Path>>(spec: &ChartSpec, path: P) -> Result<()> {
    save_pretty(spec, path.as_ref())
}

/// Save statistics as a pretty JSON object.
pub fn save_stats_json<P: AsRef<Path>>(stats: &Statistics, path: P) -> Result<()> {
    save_pretty(stats, path.as_ref())
}

fn save_pretty<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(value)?;
    f.write_all(s.as_bytes())?;
    info!("saved {}", path.display());
    Ok(())
}
