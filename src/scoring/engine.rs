use serde::Serialize;

use super::bands::{
    default_letter_grades, default_ranks, Band, BandTable, LetterGradeTable, RankOutcome,
    RankTable,
};
use super::config::ScoringConfig;
use super::tier::{Subject, SubjectSet, Tier, WeightSet};
use super::validation::validate_scoring;

/// Resolved scoring tables: weights per tier plus the two band tables.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringModel {
    high_weights: WeightSet,
    low_weights: WeightSet,
    letter_grades: LetterGradeTable,
    ranks: RankTable,
}

impl Default for ScoringModel {
    fn default() -> Self {
        Self {
            high_weights: WeightSet::default_for(Tier::High),
            low_weights: WeightSet::default_for(Tier::Low),
            letter_grades: default_letter_grades(),
            ranks: default_ranks(),
        }
    }
}

impl ScoringModel {
    /// Validate `config` and build the model, falling back to the built-in
    /// table for any part the config leaves out.
    pub fn from_config(config: &ScoringConfig) -> Result<Self, Vec<String>> {
        validate_scoring(config)?;

        let mut model = Self::default();

        if let Some(ref weights) = config.weights {
            for tier in [Tier::High, Tier::Low] {
                if let Some(map) = weights.for_tier(tier) {
                    // Keep tier order; validation guarantees every subject is present.
                    let entries = tier
                        .subjects()
                        .filter_map(|subject| {
                            map.iter()
                                .find(|(name, _)| Subject::from_name(name) == Some(subject))
                                .map(|(_, weight)| (subject, *weight))
                        })
                        .collect();
                    *model.weights_mut(tier) = WeightSet::new(entries);
                }
            }
        }

        if let Some(ref letters) = config.letter_grades {
            let bands = letters
                .bands
                .iter()
                .map(|b| Band {
                    min: b.min,
                    outcome: b.label.clone(),
                })
                .collect();
            model.letter_grades = BandTable::new(bands, letters.fallback.clone());
        }

        if let Some(ref ranks) = config.ranks {
            let bands = ranks
                .bands
                .iter()
                .map(|b| Band {
                    min: b.min,
                    outcome: RankOutcome {
                        rank: b.rank.clone(),
                        performance: b.performance.clone(),
                    },
                })
                .collect();
            model.ranks = BandTable::new(bands, ranks.fallback.clone());
        }

        Ok(model)
    }

    pub fn weights(&self, tier: Tier) -> &WeightSet {
        match tier {
            Tier::High => &self.high_weights,
            Tier::Low => &self.low_weights,
        }
    }

    fn weights_mut(&mut self, tier: Tier) -> &mut WeightSet {
        match tier {
            Tier::High => &mut self.high_weights,
            Tier::Low => &mut self.low_weights,
        }
    }

    pub fn letter_grade(&self, weighted_average: f64) -> &str {
        self.letter_grades.lookup(weighted_average)
    }

    /// Rank for a weighted average scaled by the attendance fraction.
    pub fn rank(&self, weighted_average: f64, attendance: f64) -> &RankOutcome {
        self.ranks.lookup(adjusted_score(weighted_average, attendance))
    }
}

/// Result of one successful submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub grade_level: u8,
    /// Rounded to two decimals.
    pub weighted_average: f64,
    pub letter_grade: String,
    /// Rounded to two decimals.
    pub attendance: f64,
    pub rank: String,
    pub performance: String,
    pub breakdown: SubjectSet,
}

/// Sum of mark × weight divided by the sum of the weights used.
///
/// Subjects without a weight in `weights` contribute nothing. Returns 0.0 if
/// no weight applies.
pub fn weighted_average(marks: &SubjectSet, weights: &WeightSet) -> f64 {
    let (sum, total_weight) = marks
        .iter()
        .filter_map(|m| weights.weight(m.subject).map(|w| (m.mark * w, w)))
        .fold((0.0, 0.0), |(sum, total), (product, w)| (sum + product, total + w));

    if total_weight > 0.0 {
        sum / total_weight
    } else {
        0.0
    }
}

/// Weighted average scaled by attendance / 100.
pub fn adjusted_score(weighted_average: f64, attendance: f64) -> f64 {
    weighted_average * (attendance / 100.0)
}

/// Round to two decimal places for display.
///
/// Rounds via the `{:.2}` text, so the stored value is exactly what gets
/// printed (2.675 becomes 2.67).
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Build the report for pre-validated input.
///
/// Assumes `grade_level` is in 1..=12, every mark and `attendance` lie in
/// [0, 100], and `marks` holds the subjects of the grade's tier. Range
/// checking is the form controller's job, not this function's.
pub fn compute_report(
    grade_level: u8,
    marks: SubjectSet,
    attendance: f64,
    model: &ScoringModel,
) -> Report {
    let tier = Tier::for_grade(grade_level);
    let average = weighted_average(&marks, model.weights(tier));

    // Banding uses the unrounded average.
    let letter_grade = model.letter_grade(average).to_string();
    let rank = model.rank(average, attendance).clone();

    Report {
        grade_level,
        weighted_average: round2(average),
        letter_grade,
        attendance: round2(attendance),
        rank: rank.rank,
        performance: rank.performance,
        breakdown: marks,
    }
}
