use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::bands::{default_letter_grades, default_ranks, RankOutcome};
use super::tier::Tier;

/// Scoring overrides read from the `scoring:` section of the config file.
///
/// Every part is optional; anything left out uses the built-in tables.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   weights:
///     low: { Maths: 0.3, Social: 0.2, Science: 0.25, English: 0.15, Tamil: 0.1 }
///   letter_grades:
///     bands:
///       - { min: 85, label: "Distinction" }
///       - { min: 50, label: "Pass" }
///     fallback: "Fail"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<WeightsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_grades: Option<LetterGradesConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranks: Option<RanksConfig>,
}

/// Per-tier weight overrides, keyed by subject name.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WeightsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<BTreeMap<String, f64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<BTreeMap<String, f64>>,
}

impl WeightsConfig {
    pub fn for_tier(&self, tier: Tier) -> Option<&BTreeMap<String, f64>> {
        match tier {
            Tier::High => self.high.as_ref(),
            Tier::Low => self.low.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LetterGradesConfig {
    pub bands: Vec<LetterBand>,
    pub fallback: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LetterBand {
    pub min: f64,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RanksConfig {
    pub bands: Vec<RankBand>,
    pub fallback: RankOutcome,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RankBand {
    pub min: f64,
    pub rank: String,
    pub performance: String,
}

impl ScoringConfig {
    /// Fully populated config mirroring the built-in tables, used by `init`.
    pub fn builtin() -> Self {
        let weights_for = |tier: Tier| {
            tier.default_weights()
                .iter()
                .map(|(subject, weight)| (subject.name().to_string(), *weight))
                .collect::<BTreeMap<_, _>>()
        };

        let letters = default_letter_grades();
        let ranks = default_ranks();

        Self {
            weights: Some(WeightsConfig {
                high: Some(weights_for(Tier::High)),
                low: Some(weights_for(Tier::Low)),
            }),
            letter_grades: Some(LetterGradesConfig {
                bands: letters
                    .bands()
                    .iter()
                    .map(|b| LetterBand {
                        min: b.min,
                        label: b.outcome.clone(),
                    })
                    .collect(),
                fallback: letters.fallback().clone(),
            }),
            ranks: Some(RanksConfig {
                bands: ranks
                    .bands()
                    .iter()
                    .map(|b| RankBand {
                        min: b.min,
                        rank: b.outcome.rank.clone(),
                        performance: b.outcome.performance.clone(),
                    })
                    .collect(),
                fallback: ranks.fallback().clone(),
            }),
        }
    }
}
