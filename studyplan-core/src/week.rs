//! Weekly plan composer: seven day schedules plus aggregates and advice.
//!
//! Pure given its inputs; the only randomness is the injected tip sampler.

use crate::allocation::{TimeAllocation, compute_allocation, round1};
use crate::blocks::{ActivityBlock, ActivityKind, build_day};
use crate::focus::{WEEKDAYS, focus_areas_for};
use crate::profiles::Scenario;
use crate::recommend::{TipSampler, study_recommendations};
use anyhow::Result;
use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// One weekday's schedule within a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: String,
    pub date: NaiveDate,
    pub planned_hours: f64,
    pub schedule: Vec<ActivityBlock>,
    pub focus_areas: Vec<String>,
}

/// Week-level study-hour aggregates. Breaks are excluded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub total_study_hours: f64,
    pub reading_hours: f64,
    pub practice_hours: f64,
    pub revision_hours: f64,
    pub average_daily_hours: f64,
}

/// A complete 7-day plan. Built in one call, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub subject: String,
    pub scenario: Scenario,
    pub daily_hours: f64,
    pub total_weekly_hours: f64,
    pub start_date: NaiveDate,
    pub time_allocation: TimeAllocation,
    /// Monday through Sunday, in order.
    pub days: Vec<DaySchedule>,
    pub selected_topics: Vec<String>,
    pub recommendations: Vec<String>,
    pub summary: PlanSummary,
}

impl WeeklyPlan {
    /// Look up a day by its weekday name.
    pub fn day(&self, name: &str) -> Option<&DaySchedule> {
        self.days.iter().find(|d| d.day == name)
    }
}

/// Parse an ISO 8601 start date like "2024-01-15".
pub fn parse_start_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("invalid start date '{s}': {e}"))
}

/// Compose a full week of day schedules starting at `start_date`
/// (today when omitted).
///
/// General study lightens weekends to 80% of the daily hours; exam prep
/// raises them to 110%. Non-positive `daily_hours` produce a degenerate
/// plan with empty days and zero totals rather than an error.
pub fn compose_week(
    subject: &str,
    daily_hours: f64,
    scenario: Scenario,
    start_date: Option<NaiveDate>,
    selected_topics: &[String],
    sampler: &mut dyn TipSampler,
) -> WeeklyPlan {
    let start = start_date.unwrap_or_else(|| Local::now().date_naive());

    let mut days = Vec::with_capacity(WEEKDAYS.len());
    for (i, name) in WEEKDAYS.iter().enumerate() {
        let adjusted = adjusted_daily_hours(daily_hours, scenario, name);
        days.push(DaySchedule {
            day: name.to_string(),
            date: start + Days::new(i as u64),
            planned_hours: round1(adjusted.max(0.0)),
            schedule: build_day(subject, adjusted, scenario),
            focus_areas: focus_areas_for(subject, i, selected_topics),
        });
    }

    let summary = summarize(&days);

    WeeklyPlan {
        subject: subject.to_string(),
        scenario,
        daily_hours,
        total_weekly_hours: round1((daily_hours * 7.0).max(0.0)),
        start_date: start,
        time_allocation: compute_allocation(subject, daily_hours * 7.0, scenario),
        days,
        selected_topics: selected_topics.to_vec(),
        recommendations: study_recommendations(subject, daily_hours, scenario, sampler),
        summary,
    }
}

fn adjusted_daily_hours(daily_hours: f64, scenario: Scenario, day: &str) -> f64 {
    let weekend = matches!(day, "Saturday" | "Sunday");
    match scenario {
        Scenario::GeneralStudy if weekend => daily_hours * 0.8,
        Scenario::ExamPrep if weekend => daily_hours * 1.1,
        _ => daily_hours,
    }
}

fn summarize(days: &[DaySchedule]) -> PlanSummary {
    let mut reading = 0.0;
    let mut practice = 0.0;
    let mut revision = 0.0;

    for block in days.iter().flat_map(|d| &d.schedule) {
        match block.kind {
            ActivityKind::Reading => reading += block.duration_hours,
            ActivityKind::Practice => practice += block.duration_hours,
            ActivityKind::Revision => revision += block.duration_hours,
            ActivityKind::Break => {}
        }
    }

    let total = reading + practice + revision;
    PlanSummary {
        total_study_hours: round1(total),
        reading_hours: round1(reading),
        practice_hours: round1(practice),
        revision_hours: round1(revision),
        average_daily_hours: round1(total / 7.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::SeededSampler;

    fn date(s: &str) -> NaiveDate {
        parse_start_date(s).unwrap()
    }

    fn plan(subject: &str, daily_hours: f64, scenario: Scenario) -> WeeklyPlan {
        compose_week(
            subject,
            daily_hours,
            scenario,
            Some(date("2024-01-15")),
            &[],
            &mut SeededSampler::new(1),
        )
    }

    #[test]
    fn test_seven_days_in_stable_order() {
        let p = plan("Chemistry", 2.0, Scenario::Homework);
        let names: Vec<&str> = p.days.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(names, WEEKDAYS.to_vec());
    }

    #[test]
    fn test_dates_step_from_start() {
        let p = plan("Chemistry", 2.0, Scenario::Homework);
        assert_eq!(p.day("Monday").unwrap().date, date("2024-01-15"));
        assert_eq!(p.day("Thursday").unwrap().date, date("2024-01-18"));
        assert_eq!(p.day("Sunday").unwrap().date, date("2024-01-21"));
    }

    #[test]
    fn test_math_exam_prep_reference_plan() {
        let p = plan("Mathematics", 3.0, Scenario::ExamPrep);
        assert_eq!(p.days.len(), 7);
        assert_eq!(p.day("Monday").unwrap().date, date("2024-01-15"));
        // Weekdays schedule 3.0h of study, weekend days 3.3h planned.
        assert_eq!(p.day("Wednesday").unwrap().planned_hours, 3.0);
        assert_eq!(p.day("Saturday").unwrap().planned_hours, 3.3);
        assert_eq!(
            p.summary.average_daily_hours,
            round1(p.summary.total_study_hours / 7.0)
        );
    }

    #[test]
    fn test_general_study_lightens_weekends() {
        let p = plan("English", 3.0, Scenario::GeneralStudy);
        assert_eq!(p.day("Friday").unwrap().planned_hours, 3.0);
        assert_eq!(p.day("Saturday").unwrap().planned_hours, 2.4);
        assert_eq!(p.day("Sunday").unwrap().planned_hours, 2.4);
    }

    #[test]
    fn test_other_scenarios_keep_weekend_hours() {
        for scenario in [Scenario::Homework, Scenario::ProjectWork] {
            let p = plan("English", 3.0, scenario);
            assert_eq!(p.day("Saturday").unwrap().planned_hours, 3.0);
        }
    }

    #[test]
    fn test_summary_matches_block_durations() {
        let p = plan("Physics", 2.5, Scenario::ProjectWork);
        let mut expected = 0.0;
        for block in p.days.iter().flat_map(|d| &d.schedule) {
            if block.kind != ActivityKind::Break {
                expected += block.duration_hours;
            }
        }
        assert_eq!(p.summary.total_study_hours, round1(expected));
        assert_eq!(
            round1(
                p.summary.reading_hours + p.summary.practice_hours + p.summary.revision_hours
            ),
            p.summary.total_study_hours
        );
    }

    #[test]
    fn test_topics_round_robin_across_week() {
        let topics: Vec<String> = (1..=10).map(|i| format!("Unit {i}")).collect();
        let p = compose_week(
            "Mathematics",
            2.0,
            Scenario::ExamPrep,
            Some(date("2024-01-15")),
            &topics,
            &mut SeededSampler::new(1),
        );
        for day in &p.days[..6] {
            assert_eq!(day.focus_areas.len(), 1, "{} should get one topic", day.day);
        }
        assert_eq!(p.day("Sunday").unwrap().focus_areas.len(), 4);
        assert_eq!(p.selected_topics, topics);
    }

    #[test]
    fn test_weekly_allocation_covers_seven_days() {
        let p = plan("Biology", 2.0, Scenario::GeneralStudy);
        assert_eq!(p.total_weekly_hours, 14.0);
        let a = p.time_allocation;
        let sum = a.reading_hours + a.practice_hours + a.revision_hours;
        assert!((sum - 14.0).abs() <= 0.1 + 1e-9);
    }

    #[test]
    fn test_degenerate_plan_for_zero_hours() {
        let p = plan("Mathematics", 0.0, Scenario::GeneralStudy);
        assert_eq!(p.days.len(), 7);
        for day in &p.days {
            assert!(day.schedule.is_empty());
            assert_eq!(day.planned_hours, 0.0);
        }
        assert_eq!(p.summary.total_study_hours, 0.0);
        assert_eq!(p.time_allocation.total_hours, 0.0);
    }

    #[test]
    fn test_recommendations_attached_and_capped() {
        let p = plan("Mathematics", 3.0, Scenario::ExamPrep);
        assert!(!p.recommendations.is_empty());
        assert!(p.recommendations.len() <= 7);
    }

    #[test]
    fn test_parse_start_date_rejects_garbage() {
        assert!(parse_start_date("2024-01-15").is_ok());
        assert!(parse_start_date("01/15/2024").is_err());
        assert!(parse_start_date("not a date").is_err());
    }

    #[test]
    fn test_plan_survives_json_round_trip() {
        let p = plan("Computer Science", 2.0, Scenario::ProjectWork);
        let json = serde_json::to_string(&p).unwrap();
        let back: WeeklyPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
