use super::profile::{LifestyleProfile, TransportMode};
use serde::Serialize;

/// Overall mood of the rendered ecosystem, derived from the score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OceanMood {
    Thriving,
    Healthy,
    Stressed,
    Critical,
}

impl OceanMood {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Thriving => "Thriving",
            Self::Healthy => "Healthy",
            Self::Stressed => "Stressed",
            Self::Critical => "Critical",
        }
    }
}

/// Fixed descriptive content for one score band of the ecosystem view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EcosystemBand {
    pub mood: OceanMood,
    pub visual_tier: &'static str,
    pub water_color: &'static str,
    pub coral_health: &'static str,
    pub marine_life: &'static str,
    pub visibility: &'static str,
    pub debris: &'static str,
    /// Decorative marine-life entity count for the renderer.
    pub marine_life_count: u8,
}

/// Bands are evaluated top-down; the first matching lower bound wins.
static BANDS: [(u8, EcosystemBand); 4] = [
    (
        80,
        EcosystemBand {
            mood: OceanMood::Thriving,
            visual_tier: "best",
            water_color: "from-cyan-400 to-blue-500",
            coral_health: "Vibrant coral reefs with diverse colors",
            marine_life: "Abundant fish schools swimming freely",
            visibility: "Crystal clear water with excellent visibility",
            debris: "Clean ocean floor with no pollution",
            marine_life_count: 12,
        },
    ),
    (
        60,
        EcosystemBand {
            mood: OceanMood::Healthy,
            visual_tier: "good",
            water_color: "from-cyan-500 to-blue-600",
            coral_health: "Healthy coral with some minor bleaching",
            marine_life: "Good fish population with normal activity",
            visibility: "Clear water with good visibility",
            debris: "Minimal debris, mostly natural materials",
            marine_life_count: 8,
        },
    ),
    (
        40,
        EcosystemBand {
            mood: OceanMood::Stressed,
            visual_tier: "degraded",
            water_color: "from-blue-600 to-gray-600",
            coral_health: "Stressed coral showing bleaching signs",
            marine_life: "Reduced fish population, some species missing",
            visibility: "Cloudy water with reduced visibility",
            debris: "Some plastic waste and pollution visible",
            marine_life_count: 4,
        },
    ),
    (
        0,
        EcosystemBand {
            mood: OceanMood::Critical,
            visual_tier: "worst",
            water_color: "from-gray-600 to-gray-800",
            coral_health: "Severely bleached and dying coral",
            marine_life: "Very few fish, mostly bottom feeders",
            visibility: "Murky water with poor visibility",
            debris: "Heavy pollution with plastic and toxic waste",
            marine_life_count: 2,
        },
    ),
];

impl EcosystemBand {
    pub fn resolve(score: u8) -> &'static Self {
        BANDS
            .iter()
            .find_map(|(lower_bound, band)| (score >= *lower_bound).then_some(band))
            .unwrap_or(&BANDS[BANDS.len() - 1].1)
    }
}

/// Floating-debris entity count for scores below the healthy band.
pub fn debris_count(score: u8) -> u8 {
    if score < 60 {
        (60 - score) / 10
    } else {
        0
    }
}

/// Per-factor impact badge. Thresholds here are intentionally finer-grained
/// than the tip-generation triggers and must not be unified with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    Low,
    Moderate,
    High,
}

impl ImpactLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    pub const fn plastic(bottles_per_week: u8) -> Self {
        if bottles_per_week < 5 {
            Self::Low
        } else if bottles_per_week < 15 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub const fn seafood(meals_per_week: u8) -> Self {
        if meals_per_week < 3 {
            Self::Low
        } else if meals_per_week < 8 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub const fn transport(mode: TransportMode) -> Self {
        match mode {
            TransportMode::Walk | TransportMode::Bike => Self::Low,
            TransportMode::Public => Self::Moderate,
            TransportMode::Car | TransportMode::Plane => Self::High,
        }
    }
}

/// Badge set rendered alongside the ecosystem, independent of the aggregate
/// score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FactorImpacts {
    pub plastic: ImpactLevel,
    pub marine_life: ImpactLevel,
    pub carbon: ImpactLevel,
}

impl FactorImpacts {
    pub fn of(profile: &LifestyleProfile) -> Self {
        Self {
            plastic: ImpactLevel::plastic(profile.plastic_bottles_per_week),
            marine_life: ImpactLevel::seafood(profile.seafood_meals_per_week),
            carbon: ImpactLevel::transport(profile.transport),
        }
    }
}
