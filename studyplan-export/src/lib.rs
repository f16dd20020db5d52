//! studyplan-export: CSV and JSON boundaries for finished weekly plans

pub mod csv_export;
pub mod json_export;

pub use csv_export::{PlanRow, plan_to_rows, read_plan_rows, write_plan_csv};
pub use json_export::{plan_to_json, write_plan_json};
