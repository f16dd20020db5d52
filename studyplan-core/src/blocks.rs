//! Daily block builder: quantizes an allocation into 30-minute study blocks
//! and interleaves the scenario's breaks.

use crate::allocation::compute_allocation;
use crate::profiles::Scenario;
use serde::{Deserialize, Serialize};

/// Minimum study block unit: 30 minutes.
pub const MIN_BLOCK_HOURS: f64 = 0.5;

/// Breaks are a fixed quarter hour.
pub const BREAK_HOURS: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Reading,
    Practice,
    Revision,
    Break,
}

/// One timed entry in a day's schedule. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityBlock {
    pub kind: ActivityKind,
    pub title: String,
    pub duration_hours: f64,
    pub description: String,
    pub tips: Vec<String>,
}

impl ActivityBlock {
    fn new(
        kind: ActivityKind,
        title: &str,
        duration_hours: f64,
        description: String,
        tips: &[&str],
    ) -> Self {
        Self {
            kind,
            title: title.to_string(),
            duration_hours,
            description,
            tips: tips.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Snap allocated hours to whole 30-minute blocks, never below one block.
///
/// At very low daily hours this intentionally over-allocates: 0.5 available
/// hours still yields one 0.5h block per activity, 1.5h scheduled in total.
/// Known boundary behavior, kept as-is.
fn quantize(allocated_hours: f64) -> f64 {
    (allocated_hours / MIN_BLOCK_HOURS).round().max(1.0) * MIN_BLOCK_HOURS
}

/// Build the ordered block sequence for one day.
///
/// Every scenario emits its reading/practice/revision trio in its own order
/// with its own wording; a break follows the first study block when the day
/// exceeds 1 hour and a second break follows the second study block when it
/// exceeds 2 hours. `daily_hours <= 0` yields an empty day.
pub fn build_day(subject: &str, daily_hours: f64, scenario: Scenario) -> Vec<ActivityBlock> {
    if daily_hours <= 0.0 {
        return Vec::new();
    }

    let alloc = compute_allocation(subject, daily_hours, scenario);
    let reading = quantize(alloc.reading_hours);
    let practice = quantize(alloc.practice_hours);
    let revision = quantize(alloc.revision_hours);

    let studies: [ActivityBlock; 3] = match scenario {
        Scenario::GeneralStudy => [
            ActivityBlock::new(
                ActivityKind::Reading,
                "Reading",
                reading,
                format!("Read {subject} theory and concepts"),
                &[
                    "Take notes while reading",
                    "Highlight key concepts",
                    "Ask questions about unclear topics",
                ],
            ),
            ActivityBlock::new(
                ActivityKind::Practice,
                "Practice",
                practice,
                format!("Solve {subject} problems and exercises"),
                &[
                    "Start with easier problems",
                    "Time yourself",
                    "Check solutions carefully",
                ],
            ),
            ActivityBlock::new(
                ActivityKind::Revision,
                "Revision",
                revision,
                format!("Review and consolidate {subject} learning"),
                &[
                    "Summarize key points",
                    "Test yourself",
                    "Connect new concepts with previous knowledge",
                ],
            ),
        ],
        Scenario::ExamPrep => [
            ActivityBlock::new(
                ActivityKind::Practice,
                "Intensive Practice",
                practice,
                format!("Solve {subject} exam-style problems"),
                &[
                    "Time yourself strictly",
                    "Practice past exam questions",
                    "Focus on problem-solving speed",
                ],
            ),
            ActivityBlock::new(
                ActivityKind::Reading,
                "Targeted Reading",
                reading,
                format!("Study difficult {subject} concepts"),
                &[
                    "Focus on exam syllabus",
                    "Make concise notes",
                    "Understand rather than memorize",
                ],
            ),
            ActivityBlock::new(
                ActivityKind::Revision,
                "Active Revision",
                revision,
                "Test knowledge and fill gaps".to_string(),
                &["Self-testing", "Create mind maps", "Explain concepts aloud"],
            ),
        ],
        Scenario::Homework => [
            ActivityBlock::new(
                ActivityKind::Reading,
                "Research & Reading",
                reading,
                format!("Research and read relevant {subject} materials"),
                &[
                    "Use reliable sources",
                    "Take detailed notes",
                    "Cite sources properly",
                ],
            ),
            ActivityBlock::new(
                ActivityKind::Practice,
                "Homework Execution",
                practice,
                format!("Complete {subject} homework assignments"),
                &[
                    "Follow assignment guidelines",
                    "Show all work clearly",
                    "Double-check answers",
                ],
            ),
            ActivityBlock::new(
                ActivityKind::Revision,
                "Review & Polish",
                revision,
                "Review completed work and make improvements".to_string(),
                &["Proofread carefully", "Check formatting", "Ensure completeness"],
            ),
        ],
        Scenario::ProjectWork => [
            ActivityBlock::new(
                ActivityKind::Reading,
                "Research & Investigation",
                reading,
                format!("Research {subject} project topics"),
                &[
                    "Use multiple sources",
                    "Take organized notes",
                    "Verify information accuracy",
                ],
            ),
            ActivityBlock::new(
                ActivityKind::Practice,
                "Hands-on Work",
                practice,
                format!("Work on {subject} project implementation"),
                &[
                    "Document your process",
                    "Test ideas iteratively",
                    "Keep backup copies",
                ],
            ),
            ActivityBlock::new(
                ActivityKind::Revision,
                "Review & Refine",
                revision,
                "Review project progress and refine work".to_string(),
                &["Assess quality", "Get feedback if possible", "Plan next steps"],
            ),
        ],
    };

    let breaks = break_flavors(scenario);
    let [first, second, third] = studies;

    let mut day = Vec::with_capacity(5);
    day.push(first);
    if daily_hours > 1.0 {
        day.push(breaks[0].clone());
    }
    day.push(second);
    if daily_hours > 2.0 {
        day.push(breaks[1].clone());
    }
    day.push(third);
    day
}

fn break_flavors(scenario: Scenario) -> [ActivityBlock; 2] {
    let brk = |title: &str, description: &str, tips: &[&str]| {
        ActivityBlock::new(
            ActivityKind::Break,
            title,
            BREAK_HOURS,
            description.to_string(),
            tips,
        )
    };

    match scenario {
        Scenario::GeneralStudy => [
            brk(
                "Break",
                "Short break - stretch, hydrate",
                &["Step away from study area", "Do light physical activity"],
            ),
            brk(
                "Break",
                "Medium break - refresh mind",
                &["Get fresh air if possible", "Have a healthy snack"],
            ),
        ],
        Scenario::ExamPrep => {
            let b = brk(
                "Short Break",
                "Quick energy break",
                &["Do breathing exercises", "Stay hydrated"],
            );
            [b.clone(), b]
        }
        Scenario::Homework => {
            let b = brk(
                "Break",
                "Rest and recharge",
                &["Step away from work", "Stretch or walk"],
            );
            [b.clone(), b]
        }
        Scenario::ProjectWork => {
            let b = brk(
                "Creative Break",
                "Take a creative break to refresh ideas",
                &["Go for a walk", "Listen to music", "Brainstorm freely"],
            );
            [b.clone(), b]
        }
    }
}
