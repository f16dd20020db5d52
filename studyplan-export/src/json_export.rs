//! JSON serialization of a finished plan, for web responses and files.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use studyplan_core::WeeklyPlan;

/// Pretty-printed JSON for the whole plan.
pub fn plan_to_json(plan: &WeeklyPlan) -> Result<String> {
    serde_json::to_string_pretty(plan).context("serializing plan to JSON")
}

/// Write the plan as pretty-printed JSON at `path`. I/O failures propagate.
pub fn write_plan_json(plan: &WeeklyPlan, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path.as_ref())
        .with_context(|| format!("creating {}", path.as_ref().display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), plan)
        .with_context(|| format!("writing {}", path.as_ref().display()))?;
    Ok(())
}
