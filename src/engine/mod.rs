pub mod ecosystem;
pub mod profile;
pub mod score;
pub mod tips;

pub use ecosystem::{EcosystemBand, FactorImpacts, ImpactLevel, OceanMood};
pub use profile::{LifestyleProfile, TransportMode};
pub use score::{PenaltyComponent, PenaltyFactor, ScoreAssessment};
pub use tips::{generate_tips, AchievementView, ImpactRating, Tip};
