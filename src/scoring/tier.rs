use serde::{Serialize, Serializer};
use std::fmt;

/// A subject slot on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Subject {
    Maths,
    Biology,
    Chemistry,
    Physics,
    History,
    Geography,
    Economics,
    Social,
    Science,
    English,
    Tamil,
}

impl Subject {
    pub const ALL: [Subject; 11] = [
        Subject::Maths,
        Subject::Biology,
        Subject::Chemistry,
        Subject::Physics,
        Subject::History,
        Subject::Geography,
        Subject::Economics,
        Subject::Social,
        Subject::Science,
        Subject::English,
        Subject::Tamil,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Subject::Maths => "Maths",
            Subject::Biology => "Biology",
            Subject::Chemistry => "Chemistry",
            Subject::Physics => "Physics",
            Subject::History => "History",
            Subject::Geography => "Geography",
            Subject::Economics => "Economics",
            Subject::Social => "Social",
            Subject::Science => "Science",
            Subject::English => "English",
            Subject::Tamil => "Tamil",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Subject> {
        let name = name.trim();
        Subject::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Subject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

const HIGH_WEIGHTS: [(Subject, f64); 9] = [
    (Subject::Maths, 0.15),
    (Subject::Biology, 0.10),
    (Subject::Chemistry, 0.10),
    (Subject::Physics, 0.10),
    (Subject::History, 0.10),
    (Subject::Geography, 0.10),
    (Subject::Economics, 0.10),
    (Subject::English, 0.15),
    (Subject::Tamil, 0.10),
];

const LOW_WEIGHTS: [(Subject, f64); 5] = [
    (Subject::Maths, 0.25),
    (Subject::Social, 0.25),
    (Subject::Science, 0.25),
    (Subject::English, 0.15),
    (Subject::Tamil, 0.10),
];

/// Grade level above which the high tier applies.
pub const TIER_BOUNDARY: u8 = 8;

/// Subject/weight pairing selected by grade level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Grades 9-12: nine subjects.
    High,
    /// Grades 1-8: five subjects.
    Low,
}

impl Tier {
    /// Grade 8 itself belongs to the low tier.
    pub fn for_grade(grade: u8) -> Tier {
        if grade > TIER_BOUNDARY {
            Tier::High
        } else {
            Tier::Low
        }
    }

    /// Built-in ordered (subject, weight) pairs for this tier.
    pub fn default_weights(self) -> &'static [(Subject, f64)] {
        match self {
            Tier::High => &HIGH_WEIGHTS,
            Tier::Low => &LOW_WEIGHTS,
        }
    }

    /// Subjects in the tier's natural order.
    pub fn subjects(self) -> impl Iterator<Item = Subject> {
        self.default_weights().iter().map(|(s, _)| *s)
    }

    pub fn contains(self, subject: Subject) -> bool {
        self.subjects().any(|s| s == subject)
    }

    pub fn key(self) -> &'static str {
        match self {
            Tier::High => "high",
            Tier::Low => "low",
        }
    }
}

/// Ordered weight fractions for one tier.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightSet {
    entries: Vec<(Subject, f64)>,
}

impl WeightSet {
    pub fn new(entries: Vec<(Subject, f64)>) -> Self {
        Self { entries }
    }

    pub fn default_for(tier: Tier) -> Self {
        Self::new(tier.default_weights().to_vec())
    }

    pub fn entries(&self) -> &[(Subject, f64)] {
        &self.entries
    }

    pub fn weight(&self, subject: Subject) -> Option<f64> {
        self.entries
            .iter()
            .find(|(s, _)| *s == subject)
            .map(|(_, w)| *w)
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }
}

/// Marks for the subjects of one tier, in tier order.
///
/// Every mark is expected to lie in [0, 100]; the form controller enforces
/// that before a `SubjectSet` reaches the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SubjectSet {
    marks: Vec<SubjectMark>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubjectMark {
    pub subject: Subject,
    pub mark: f64,
}

impl SubjectSet {
    pub fn new(marks: Vec<(Subject, f64)>) -> Self {
        Self {
            marks: marks
                .into_iter()
                .map(|(subject, mark)| SubjectMark { subject, mark })
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubjectMark> {
        self.marks.iter()
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn mark(&self, subject: Subject) -> Option<f64> {
        self.marks
            .iter()
            .find(|m| m.subject == subject)
            .map(|m| m.mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundary() {
        assert_eq!(Tier::for_grade(1), Tier::Low);
        assert_eq!(Tier::for_grade(8), Tier::Low);
        assert_eq!(Tier::for_grade(9), Tier::High);
        assert_eq!(Tier::for_grade(12), Tier::High);
    }

    #[test]
    fn test_tier_subject_counts() {
        assert_eq!(Tier::for_grade(8).subjects().count(), 5);
        assert_eq!(Tier::for_grade(9).subjects().count(), 9);
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        for tier in [Tier::High, Tier::Low] {
            let total = WeightSet::default_for(tier).total();
            assert!((total - 1.0).abs() < 1e-9, "{:?} sums to {}", tier, total);
        }
    }

    #[test]
    fn test_tier_order() {
        let low: Vec<_> = Tier::Low.subjects().collect();
        assert_eq!(
            low,
            vec![
                Subject::Maths,
                Subject::Social,
                Subject::Science,
                Subject::English,
                Subject::Tamil
            ]
        );
        let high: Vec<_> = Tier::High.subjects().collect();
        assert_eq!(high.first(), Some(&Subject::Maths));
        assert_eq!(high.last(), Some(&Subject::Tamil));
        assert!(!Tier::High.contains(Subject::Social));
        assert!(!Tier::Low.contains(Subject::Physics));
    }

    #[test]
    fn test_subject_from_name() {
        assert_eq!(Subject::from_name("maths"), Some(Subject::Maths));
        assert_eq!(Subject::from_name(" Tamil "), Some(Subject::Tamil));
        assert_eq!(Subject::from_name("Art"), None);
    }

    #[test]
    fn test_weight_lookup() {
        let weights = WeightSet::default_for(Tier::Low);
        assert_eq!(weights.weight(Subject::Tamil), Some(0.10));
        assert_eq!(weights.weight(Subject::Physics), None);
    }
}
