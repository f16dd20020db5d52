//! Recommendation list: scenario base tips, one hours-based tip, and up to
//! two subject tips drawn through an injectable sampler.

use crate::profiles::{Scenario, SubjectKind};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Recommendations are capped at the seven most relevant entries.
pub const MAX_RECOMMENDATIONS: usize = 7;

/// Randomness seam for the subject-tip draw, so callers and tests can pin
/// the outcome.
pub trait TipSampler {
    /// Sample up to `n` distinct entries from `pool`.
    fn sample(&mut self, pool: &[&'static str], n: usize) -> Vec<&'static str>;
}

/// Deterministic sampler backed by a seeded RNG.
pub struct SeededSampler {
    rng: StdRng,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl TipSampler for SeededSampler {
    fn sample(&mut self, pool: &[&'static str], n: usize) -> Vec<&'static str> {
        pool.choose_multiple(&mut self.rng, n).copied().collect()
    }
}

fn scenario_tips(scenario: Scenario) -> [&'static str; 5] {
    match scenario {
        Scenario::ExamPrep => [
            "Create a countdown calendar to your exam date and track progress daily",
            "Take practice tests under strict timed conditions to build exam stamina",
            "Focus 60% of your time on your weakest topics - identify gaps early",
            "Review past exam papers and understand the marking scheme",
            "Create concise summary sheets for last-minute revision",
        ],
        Scenario::Homework => [
            "Read assignment instructions twice before starting any work",
            "Break large assignments into smaller, manageable tasks with deadlines",
            "Use multiple reliable sources and always cite them properly",
            "Complete assignments 1-2 days before the deadline for review time",
            "Form study groups to discuss challenging homework problems",
        ],
        Scenario::ProjectWork => [
            "Start with a clear project outline and timeline with milestones",
            "Spend 30% of your time on research and planning before execution",
            "Keep regular backups of your work and document your process",
            "Get feedback early and often - don't wait until the end",
            "Focus on quality over quantity - depth beats breadth in projects",
        ],
        Scenario::GeneralStudy => [
            "Follow the 50-30-20 rule: 50% new material, 30% practice, 20% review",
            "Use active recall techniques - test yourself without looking at notes",
            "Connect new concepts to what you already know for better retention",
            "Study the same subject at the same time daily to build routine",
            "Set specific learning goals for each study session",
        ],
    }
}

fn subject_tips(subject: &str) -> Option<&'static [&'static str]> {
    let pool: &'static [&'static str] = match SubjectKind::from_name(subject) {
        SubjectKind::Mathematics => &[
            "Practice problems daily - math skills deteriorate quickly without use",
            "Keep a formula sheet and review it at the start of each session",
            "Work through problems step-by-step, never skip intermediate steps",
            "Focus on understanding 'why' formulas work, not just memorizing them",
        ],
        SubjectKind::Physics => &[
            "Always draw clear diagrams before solving physics problems",
            "Understand the physical meaning behind every equation you use",
            "Practice dimensional analysis to check if your answers make sense",
            "Connect physics concepts to real-world phenomena you observe",
        ],
        SubjectKind::Chemistry => &[
            "Memorize the periodic table structure early - it's your roadmap",
            "Practice balancing chemical equations until it becomes automatic",
            "Connect molecular structure to chemical properties and behavior",
            "Use 3D models or drawings to visualize molecular structures",
        ],
        SubjectKind::Biology => &[
            "Create concept maps to show relationships between biological processes",
            "Develop mnemonics for complex biological terms and classifications",
            "Study at multiple levels: molecular, cellular, organism, ecosystem",
            "Use diagrams and flowcharts to understand biological processes",
        ],
        SubjectKind::ComputerScience => &[
            "Code every single day, even if just for 30 minutes",
            "Debug systematically using print statements and debuggers",
            "Read other people's code to learn different problem-solving approaches",
            "Build projects that interest you - passion drives learning",
        ],
        SubjectKind::English => &[
            "Read diverse genres to expand vocabulary and writing styles",
            "Write daily - even journal entries help improve fluency",
            "Analyze literary techniques and their effects on meaning",
            "Practice speaking and presenting to build confidence",
        ],
        SubjectKind::History => &[
            "Create timelines to understand chronological relationships",
            "Connect historical events to their causes and consequences",
            "Read primary sources to understand historical perspectives",
            "Use maps to understand geographical context of events",
        ],
        SubjectKind::Other => return None,
    };
    Some(pool)
}

/// Assemble the recommendation list for a plan.
///
/// Order: 5 scenario tips, then the hours tip (under an hour / 2-4 hours /
/// over 4 hours; nothing for hours strictly between 1 and 2), then up to
/// two sampled subject tips. Truncated to [`MAX_RECOMMENDATIONS`].
pub fn study_recommendations(
    subject: &str,
    daily_hours: f64,
    scenario: Scenario,
    sampler: &mut dyn TipSampler,
) -> Vec<String> {
    let mut recs: Vec<String> = scenario_tips(scenario)
        .iter()
        .map(|t| t.to_string())
        .collect();

    if daily_hours < 1.0 {
        recs.push(
            "Consider increasing study time to at least 1 hour daily for effective learning"
                .to_string(),
        );
    } else if daily_hours > 4.0 {
        recs.push("Break long study sessions into 90-minute chunks with 15-minute breaks".to_string());
    } else if daily_hours >= 2.0 {
        recs.push(
            "Use the Pomodoro Technique: 25 minutes focused study + 5 minute breaks".to_string(),
        );
    }

    if let Some(pool) = subject_tips(subject) {
        recs.extend(sampler.sample(pool, 2).into_iter().map(String::from));
    }

    recs.truncate(MAX_RECOMMENDATIONS);
    recs
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sampler that always takes the first `n` pool entries, for exact asserts.
    struct FirstN;

    impl TipSampler for FirstN {
        fn sample(&mut self, pool: &[&'static str], n: usize) -> Vec<&'static str> {
            pool.iter().take(n).copied().collect()
        }
    }

    #[test]
    fn test_capped_at_seven() {
        let recs = study_recommendations("Mathematics", 3.0, Scenario::ExamPrep, &mut FirstN);
        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_scenario_tips_lead_the_list() {
        let recs = study_recommendations("Physics", 3.0, Scenario::Homework, &mut FirstN);
        assert!(recs[0].starts_with("Read assignment instructions"));
        assert_eq!(recs[..5].len(), 5);
    }

    #[test]
    fn test_hours_tip_thresholds() {
        let tip_at = |hours: f64| {
            let recs = study_recommendations("Unknown", hours, Scenario::GeneralStudy, &mut FirstN);
            recs.get(5).cloned()
        };

        assert!(tip_at(0.5).unwrap().contains("at least 1 hour"));
        assert_eq!(tip_at(1.5), None);
        assert!(tip_at(2.0).unwrap().contains("Pomodoro"));
        assert!(tip_at(4.0).unwrap().contains("Pomodoro"));
        assert!(tip_at(4.5).unwrap().contains("90-minute chunks"));
    }

    #[test]
    fn test_unknown_subject_contributes_no_tips() {
        // 5 base + pomodoro, nothing sampled.
        let recs = study_recommendations("Alchemy", 3.0, Scenario::GeneralStudy, &mut FirstN);
        assert_eq!(recs.len(), 6);
    }

    #[test]
    fn test_subject_tips_sampled_without_replacement() {
        let recs = study_recommendations("Biology", 1.5, Scenario::GeneralStudy, &mut FirstN);
        // 5 base + 0 hours tip + 2 subject tips.
        assert_eq!(recs.len(), 7);
        assert_ne!(recs[5], recs[6]);
    }

    #[test]
    fn test_seeded_sampler_is_reproducible() {
        let run = |seed: u64| {
            study_recommendations(
                "Computer Science",
                3.0,
                Scenario::ProjectWork,
                &mut SeededSampler::new(seed),
            )
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_seeded_sampler_draws_distinct_entries() {
        let mut sampler = SeededSampler::new(7);
        let pool = ["a", "b", "c", "d"];
        let drawn = sampler.sample(&pool, 2);
        assert_eq!(drawn.len(), 2);
        assert_ne!(drawn[0], drawn[1]);
    }
}
