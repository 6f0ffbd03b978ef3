use serde::{Deserialize, Serialize};

/// One threshold band: values at or above `min` map to `outcome`.
#[derive(Debug, Clone, PartialEq)]
pub struct Band<T> {
    pub min: f64,
    pub outcome: T,
}

/// Ordered threshold table with a fallback for values below every band.
///
/// Bands are sorted highest threshold first on construction, so lookup is a
/// first-match scan regardless of the order they were supplied in.
#[derive(Debug, Clone, PartialEq)]
pub struct BandTable<T> {
    bands: Vec<Band<T>>,
    fallback: T,
}

impl<T> BandTable<T> {
    pub fn new(mut bands: Vec<Band<T>>, fallback: T) -> Self {
        bands.sort_by(|a, b| b.min.total_cmp(&a.min));
        Self { bands, fallback }
    }

    /// Outcome of the first band whose threshold `value` meets.
    pub fn lookup(&self, value: f64) -> &T {
        self.bands
            .iter()
            .find(|band| value >= band.min)
            .map(|band| &band.outcome)
            .unwrap_or(&self.fallback)
    }

    pub fn bands(&self) -> &[Band<T>] {
        &self.bands
    }

    pub fn fallback(&self) -> &T {
        &self.fallback
    }
}

/// Rank label paired with its qualitative performance label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RankOutcome {
    pub rank: String,
    pub performance: String,
}

impl RankOutcome {
    fn new(rank: &str, performance: &str) -> Self {
        Self {
            rank: rank.to_string(),
            performance: performance.to_string(),
        }
    }
}

pub type LetterGradeTable = BandTable<String>;
pub type RankTable = BandTable<RankOutcome>;

/// A+ / A / B / C / D, F below 50.
pub fn default_letter_grades() -> LetterGradeTable {
    let bands = [(90.0, "A+"), (80.0, "A"), (70.0, "B"), (60.0, "C"), (50.0, "D")]
        .into_iter()
        .map(|(min, label)| Band {
            min,
            outcome: label.to_string(),
        })
        .collect();
    BandTable::new(bands, "F".to_string())
}

/// Rank bands keyed on the attendance-adjusted score.
pub fn default_ranks() -> RankTable {
    let bands = vec![
        Band { min: 90.0, outcome: RankOutcome::new("Top 5%", "Excellent") },
        Band { min: 80.0, outcome: RankOutcome::new("Top 20%", "Very Good") },
        Band { min: 70.0, outcome: RankOutcome::new("Top 50%", "Good") },
        Band { min: 60.0, outcome: RankOutcome::new("Top 75%", "Average") },
    ];
    BandTable::new(bands, RankOutcome::new("Below 75%", "Needs Improvement"))
}
