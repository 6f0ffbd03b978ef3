pub mod bands;
pub mod config;
pub mod engine;
pub mod tier;
pub mod validation;

pub use bands::{Band, BandTable, RankOutcome};
pub use config::*;
pub use engine::{compute_report, Report, ScoringModel};
pub use tier::{Subject, SubjectMark, SubjectSet, Tier, WeightSet, TIER_BOUNDARY};
pub use validation::validate_scoring;
