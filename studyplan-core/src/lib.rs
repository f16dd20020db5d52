//! studyplan-core: subject/scenario tables, time allocation, daily block
//! building, and the weekly plan composer.

pub mod allocation;
pub mod blocks;
pub mod focus;
pub mod profiles;
pub mod recommend;
pub mod week;

pub use allocation::{TimeAllocation, compute_allocation};
pub use blocks::{ActivityBlock, ActivityKind, BREAK_HOURS, MIN_BLOCK_HOURS, build_day};
pub use focus::{WEEKDAYS, focus_areas_for};
pub use profiles::{Scenario, ScenarioProfile, SubjectKind, SubjectProfile};
pub use recommend::{
    MAX_RECOMMENDATIONS, SeededSampler, TipSampler, study_recommendations,
};
pub use week::{DaySchedule, PlanSummary, WeeklyPlan, compose_week, parse_start_date};
