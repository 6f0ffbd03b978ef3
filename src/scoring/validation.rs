use std::collections::{BTreeMap, HashSet};

use super::config::ScoringConfig;
use super::tier::{Subject, Tier};

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref weights) = config.weights {
        for tier in [Tier::High, Tier::Low] {
            if let Some(map) = weights.for_tier(tier) {
                validate_weights(tier, map, &mut errors);
            }
        }
    }

    if let Some(ref letters) = config.letter_grades {
        let path = "scoring.letter_grades";
        validate_thresholds(path, letters.bands.iter().map(|b| b.min), &mut errors);
        for (i, band) in letters.bands.iter().enumerate() {
            if band.label.trim().is_empty() {
                errors.push(format!("{}.bands[{}].label: must not be empty", path, i));
            }
        }
        if letters.fallback.trim().is_empty() {
            errors.push(format!("{}.fallback: must not be empty", path));
        }
    }

    if let Some(ref ranks) = config.ranks {
        let path = "scoring.ranks";
        validate_thresholds(path, ranks.bands.iter().map(|b| b.min), &mut errors);
        for (i, band) in ranks.bands.iter().enumerate() {
            if band.rank.trim().is_empty() {
                errors.push(format!("{}.bands[{}].rank: must not be empty", path, i));
            }
            if band.performance.trim().is_empty() {
                errors.push(format!("{}.bands[{}].performance: must not be empty", path, i));
            }
        }
        if ranks.fallback.rank.trim().is_empty() || ranks.fallback.performance.trim().is_empty() {
            errors.push(format!("{}.fallback: rank and performance must not be empty", path));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_weights(tier: Tier, map: &BTreeMap<String, f64>, errors: &mut Vec<String>) {
    let path = format!("scoring.weights.{}", tier.key());
    let mut seen = HashSet::new();

    for (name, weight) in map {
        match Subject::from_name(name) {
            Some(subject) if tier.contains(subject) => {
                if !seen.insert(subject) {
                    errors.push(format!("{}.{}: subject listed twice", path, name));
                }
            }
            Some(_) => errors.push(format!(
                "{}.{}: not a subject of the {} tier",
                path,
                name,
                tier.key()
            )),
            None => errors.push(format!("{}.{}: unknown subject", path, name)),
        }

        if !weight.is_finite() || *weight < 0.0 {
            errors.push(format!(
                "{}.{}: weight must be a non-negative number, got {}",
                path, name, weight
            ));
        }
    }

    for subject in tier.subjects() {
        if !seen.contains(&subject) {
            errors.push(format!("{}: missing weight for {}", path, subject));
        }
    }

    let total: f64 = map.values().filter(|w| w.is_finite()).sum();
    if total <= 0.0 {
        errors.push(format!("{}: weights must sum to more than zero", path));
    }
}

fn validate_thresholds(
    path: &str,
    thresholds: impl Iterator<Item = f64>,
    errors: &mut Vec<String>,
) {
    let mut seen: Vec<f64> = Vec::new();
    let mut count = 0;

    for (i, min) in thresholds.enumerate() {
        count += 1;
        if !min.is_finite() || !(0.0..=100.0).contains(&min) {
            errors.push(format!(
                "{}.bands[{}].min: must be between 0 and 100, got {}",
                path, i, min
            ));
        } else if seen.contains(&min) {
            errors.push(format!("{}.bands[{}].min: duplicate threshold {}", path, i, min));
        } else {
            seen.push(min);
        }
    }

    if count == 0 {
        errors.push(format!("{}.bands: at least one band is required", path));
    }
}
