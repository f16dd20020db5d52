//! Flatten a weekly plan into CSV rows, one per activity block.
//!
//! Columns: Day, Date, Activity_Order, Activity, Duration_Hours,
//! Description, Tips (semicolon-joined), Focus_Areas (semicolon-joined).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use studyplan_core::WeeklyPlan;

/// One exported activity block. `activity_order` is 1-based within its day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRow {
    #[serde(rename = "Day")]
    pub day: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Activity_Order")]
    pub activity_order: usize,
    #[serde(rename = "Activity")]
    pub activity: String,
    #[serde(rename = "Duration_Hours")]
    pub duration_hours: f64,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Tips")]
    pub tips: String,
    #[serde(rename = "Focus_Areas")]
    pub focus_areas: String,
}

/// Flatten in day order, then block order within the day.
pub fn plan_to_rows(plan: &WeeklyPlan) -> Vec<PlanRow> {
    let mut rows = Vec::new();
    for day in &plan.days {
        let focus_areas = day.focus_areas.join("; ");
        for (i, block) in day.schedule.iter().enumerate() {
            rows.push(PlanRow {
                day: day.day.clone(),
                date: day.date.to_string(),
                activity_order: i + 1,
                activity: block.title.clone(),
                duration_hours: block.duration_hours,
                description: block.description.clone(),
                tips: block.tips.join("; "),
                focus_areas: focus_areas.clone(),
            });
        }
    }
    rows
}

/// Write the plan to a CSV file at `path`. I/O failures propagate.
pub fn write_plan_csv(plan: &WeeklyPlan, path: impl AsRef<Path>) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path.as_ref())
        .with_context(|| format!("creating {}", path.as_ref().display()))?;
    for row in plan_to_rows(plan) {
        wtr.serialize(row)?;
    }
    wtr.flush()
        .with_context(|| format!("writing {}", path.as_ref().display()))?;
    Ok(())
}

/// Read rows back from a previously exported CSV.
pub fn read_plan_rows(path: impl AsRef<Path>) -> Result<Vec<PlanRow>> {
    let mut rdr = csv::Reader::from_path(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}
