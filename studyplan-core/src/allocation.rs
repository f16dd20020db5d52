//! Time allocation: splits a total-hours budget into reading/practice/revision.

use crate::profiles::{Scenario, ScenarioProfile, SubjectProfile};
use serde::{Deserialize, Serialize};

/// Round to one decimal place, the granularity of every reported hour value.
pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Hours allocated per activity for one invocation. Parts are renormalized
/// so they sum to the requested total before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeAllocation {
    pub reading_hours: f64,
    pub practice_hours: f64,
    pub revision_hours: f64,
    pub total_hours: f64,
}

impl TimeAllocation {
    pub fn zero() -> Self {
        Self {
            reading_hours: 0.0,
            practice_hours: 0.0,
            revision_hours: 0.0,
            total_hours: 0.0,
        }
    }
}

/// Split `total_hours` across the three activities for a subject + scenario.
///
/// Unknown subjects use the default share split; the scenario has already
/// been resolved by the caller (unknown tags map to general study). Totals
/// at or below zero yield the all-zero allocation.
pub fn compute_allocation(subject: &str, total_hours: f64, scenario: Scenario) -> TimeAllocation {
    if total_hours <= 0.0 {
        return TimeAllocation::zero();
    }

    let shares = SubjectProfile::for_subject(subject);
    let weights = ScenarioProfile::for_scenario(scenario);

    let mut reading = shares.reading * weights.reading * total_hours;
    let mut practice = shares.practice * weights.practice * total_hours;
    let mut revision = shares.revision * weights.revision * total_hours;

    // Renormalize so the parts sum to the requested total.
    let sum = reading + practice + revision;
    if sum > 0.0 {
        reading = reading / sum * total_hours;
        practice = practice / sum * total_hours;
        revision = revision / sum * total_hours;
    } else {
        return TimeAllocation::zero();
    }

    TimeAllocation {
        reading_hours: round1(reading),
        practice_hours: round1(practice),
        revision_hours: round1(revision),
        total_hours: round1(reading + practice + revision),
    }
}
