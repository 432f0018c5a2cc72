use super::profile::{LifestyleProfile, TransportMode, SHOWER_MINUTES_MIN};
use serde::Serialize;

/// Lifestyle factor contributing a penalty to the Ocean Health Score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyFactor {
    Plastic,
    Seafood,
    Transportation,
    Water,
}

impl PenaltyFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Plastic => "Plastic Use",
            Self::Seafood => "Seafood Consumption",
            Self::Transportation => "Transportation",
            Self::Water => "Water Usage",
        }
    }
}

/// Discrete contribution to the score, allowing a transparent breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PenaltyComponent {
    pub factor: PenaltyFactor,
    pub penalty: f64,
    pub note: String,
}

/// Derived Ocean Health Score with its per-factor penalty trail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreAssessment {
    pub score: u8,
    pub components: Vec<PenaltyComponent>,
}

impl ScoreAssessment {
    /// Score a profile. Pure and total: penalties are independent,
    /// individually capped, and the result is floored at zero.
    pub fn of(profile: &LifestyleProfile) -> Self {
        let mut components = Vec::with_capacity(4);

        let plastic = (f64::from(profile.plastic_bottles_per_week) * 1.5).min(30.0);
        components.push(PenaltyComponent {
            factor: PenaltyFactor::Plastic,
            penalty: plastic,
            note: format!(
                "{} plastic bottle(s) per week",
                profile.plastic_bottles_per_week
            ),
        });

        let seafood = (f64::from(profile.seafood_meals_per_week) * 2.0).min(25.0);
        components.push(PenaltyComponent {
            factor: PenaltyFactor::Seafood,
            penalty: seafood,
            note: format!(
                "{} seafood meal(s) per week",
                profile.seafood_meals_per_week
            ),
        });

        let transport = transport_penalty(profile.transport);
        components.push(PenaltyComponent {
            factor: PenaltyFactor::Transportation,
            penalty: transport,
            note: format!("primary mode: {}", profile.transport.label()),
        });

        // Shower minutes are clamped to >= 5 upstream, so the term is
        // never negative; saturating_sub keeps the math total regardless.
        let minutes_over_floor = profile
            .shower_minutes_per_day
            .saturating_sub(SHOWER_MINUTES_MIN);
        let water = (f64::from(minutes_over_floor) * 0.8).min(20.0);
        components.push(PenaltyComponent {
            factor: PenaltyFactor::Water,
            penalty: water,
            note: format!(
                "{} shower minute(s) per day",
                profile.shower_minutes_per_day
            ),
        });

        let total: f64 = components.iter().map(|component| component.penalty).sum();
        let score = (100.0 - total).round().max(0.0) as u8;

        Self { score, components }
    }

    pub fn total_penalty(&self) -> f64 {
        self.components
            .iter()
            .map(|component| component.penalty)
            .sum()
    }
}

pub const fn transport_penalty(mode: TransportMode) -> f64 {
    match mode {
        TransportMode::Walk | TransportMode::Bike => 0.0,
        TransportMode::Public => 5.0,
        TransportMode::Car => 20.0,
        TransportMode::Plane => 30.0,
    }
}
