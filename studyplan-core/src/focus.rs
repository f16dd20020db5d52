//! Per-day focus areas: either caller-selected topics spread across the
//! week, or the static subject-by-weekday table.

use crate::profiles::SubjectKind;

/// Fixed weekday names in plan order. Day index 0 is Monday.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MATHEMATICS_FOCUS: [[&str; 2]; 7] = [
    ["Algebra fundamentals", "Linear equations"],
    ["Geometry concepts", "Area and volume"],
    ["Calculus basics", "Derivatives"],
    ["Statistics", "Probability"],
    ["Problem-solving practice", "Mixed exercises"],
    ["Review weak areas", "Practice tests"],
    ["Comprehensive review", "Prepare for next week"],
];

const PHYSICS_FOCUS: [[&str; 2]; 7] = [
    ["Mechanics", "Newton's laws"],
    ["Energy and momentum", "Work and power"],
    ["Waves and oscillations", "Sound"],
    ["Electricity and magnetism", "Circuits"],
    ["Thermodynamics", "Heat transfer"],
    ["Problem-solving", "Laboratory concepts"],
    ["Review and integration", "Conceptual understanding"],
];

const CHEMISTRY_FOCUS: [[&str; 2]; 7] = [
    ["Atomic structure", "Periodic table"],
    ["Chemical bonding", "Molecular geometry"],
    ["Chemical reactions", "Stoichiometry"],
    ["Solutions and concentrations", "Acids and bases"],
    ["Organic chemistry basics", "Functional groups"],
    ["Laboratory techniques", "Safety procedures"],
    ["Review and practice", "Concept connections"],
];

const BIOLOGY_FOCUS: [[&str; 2]; 7] = [
    ["Cell structure and function", "Organelles"],
    ["Genetics and heredity", "DNA and RNA"],
    ["Evolution and natural selection", "Species"],
    ["Ecology and ecosystems", "Environmental science"],
    ["Human anatomy and physiology", "Body systems"],
    ["Laboratory skills", "Microscopy"],
    ["Review and synthesis", "Biological connections"],
];

const COMPUTER_SCIENCE_FOCUS: [[&str; 2]; 7] = [
    ["Programming fundamentals", "Syntax and logic"],
    ["Data structures", "Arrays and lists"],
    ["Algorithms", "Sorting and searching"],
    ["Object-oriented programming", "Classes and objects"],
    ["Database concepts", "SQL basics"],
    ["Project work", "Coding practice"],
    ["Code review", "Debugging and testing"],
];

const DEFAULT_FOCUS: [&str; 3] = ["Core concepts", "Practice exercises", "Review materials"];

/// Focus areas for one day of the week.
///
/// When `selected_topics` is non-empty, topics are dealt out round-robin:
/// each day takes `len / 7` topics in order and Sunday absorbs the
/// remainder. Otherwise the fixed per-subject table applies, with a generic
/// default for subjects the table does not know.
pub fn focus_areas_for(subject: &str, day_index: usize, selected_topics: &[String]) -> Vec<String> {
    debug_assert!(day_index < 7);

    if !selected_topics.is_empty() {
        let per_day = selected_topics.len() / 7;
        let start = day_index * per_day;
        if day_index == 6 {
            return selected_topics[start..].to_vec();
        }
        return selected_topics[start..start + per_day].to_vec();
    }

    let table: Option<&[[&str; 2]; 7]> = match SubjectKind::from_name(subject) {
        SubjectKind::Mathematics => Some(&MATHEMATICS_FOCUS),
        SubjectKind::Physics => Some(&PHYSICS_FOCUS),
        SubjectKind::Chemistry => Some(&CHEMISTRY_FOCUS),
        SubjectKind::Biology => Some(&BIOLOGY_FOCUS),
        SubjectKind::ComputerScience => Some(&COMPUTER_SCIENCE_FOCUS),
        // English and History have no per-day table.
        SubjectKind::English | SubjectKind::History | SubjectKind::Other => None,
    };

    match table {
        Some(t) => t[day_index].iter().map(|s| s.to_string()).collect(),
        None => DEFAULT_FOCUS.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Topic {i}")).collect()
    }

    #[test]
    fn test_ten_topics_one_per_day_rest_on_sunday() {
        let topics = topics(10);
        for day in 0..6 {
            let areas = focus_areas_for("Mathematics", day, &topics);
            assert_eq!(areas, vec![format!("Topic {}", day + 1)]);
        }
        let sunday = focus_areas_for("Mathematics", 6, &topics);
        assert_eq!(
            sunday,
            vec!["Topic 7", "Topic 8", "Topic 9", "Topic 10"]
        );
    }

    #[test]
    fn test_fourteen_topics_two_per_day() {
        let topics = topics(14);
        let monday = focus_areas_for("Physics", 0, &topics);
        assert_eq!(monday, vec!["Topic 1", "Topic 2"]);
        let sunday = focus_areas_for("Physics", 6, &topics);
        assert_eq!(sunday, vec!["Topic 13", "Topic 14"]);
    }

    #[test]
    fn test_fewer_topics_than_days_land_on_sunday() {
        let topics = topics(3);
        for day in 0..6 {
            assert!(focus_areas_for("Biology", day, &topics).is_empty());
        }
        assert_eq!(focus_areas_for("Biology", 6, &topics).len(), 3);
    }

    #[test]
    fn test_subject_table_when_no_topics() {
        let monday = focus_areas_for("Mathematics", 0, &[]);
        assert_eq!(monday, vec!["Algebra fundamentals", "Linear equations"]);
        let sunday = focus_areas_for("Computer Science", 6, &[]);
        assert_eq!(sunday, vec!["Code review", "Debugging and testing"]);
    }

    #[test]
    fn test_unknown_subject_default_focus() {
        for subject in ["English", "History", "Philosophy"] {
            let areas = focus_areas_for(subject, 2, &[]);
            assert_eq!(
                areas,
                vec!["Core concepts", "Practice exercises", "Review materials"]
            );
        }
    }
}
