use serde::{Deserialize, Serialize};

/// Input widget domains. Values arriving from outside the UI sliders are
/// clamped back into these ranges so every downstream computation stays total.
pub const PLASTIC_BOTTLES_MAX: u8 = 50;
pub const SEAFOOD_MEALS_MAX: u8 = 20;
pub const SHOWER_MINUTES_MIN: u8 = 5;
pub const SHOWER_MINUTES_MAX: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Walk,
    Bike,
    Public,
    Car,
    Plane,
}

impl TransportMode {
    pub const fn ordered() -> [Self; 5] {
        [Self::Walk, Self::Bike, Self::Public, Self::Car, Self::Plane]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Walk => "Walking",
            Self::Bike => "Cycling",
            Self::Public => "Public Transport",
            Self::Car => "Private Car",
            Self::Plane => "Frequent Flying",
        }
    }

    pub fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_ascii_lowercase().as_str() {
            "walk" => Ok(Self::Walk),
            "bike" => Ok(Self::Bike),
            "public" => Ok(Self::Public),
            "car" => Ok(Self::Car),
            "plane" => Ok(Self::Plane),
            other => Err(format!(
                "unknown transport mode '{other}' (expected walk, bike, public, car, or plane)"
            )),
        }
    }
}

/// Self-reported lifestyle habits for a single session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifestyleProfile {
    pub plastic_bottles_per_week: u8,
    pub seafood_meals_per_week: u8,
    pub transport: TransportMode,
    pub shower_minutes_per_day: u8,
}

impl LifestyleProfile {
    /// Clamp every field into its widget domain.
    pub fn clamped(self) -> Self {
        Self {
            plastic_bottles_per_week: self.plastic_bottles_per_week.min(PLASTIC_BOTTLES_MAX),
            seafood_meals_per_week: self.seafood_meals_per_week.min(SEAFOOD_MEALS_MAX),
            transport: self.transport,
            shower_minutes_per_day: self
                .shower_minutes_per_day
                .clamp(SHOWER_MINUTES_MIN, SHOWER_MINUTES_MAX),
        }
    }
}

impl Default for LifestyleProfile {
    fn default() -> Self {
        Self {
            plastic_bottles_per_week: 0,
            seafood_meals_per_week: 0,
            transport: TransportMode::Car,
            shower_minutes_per_day: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_pulls_values_into_widget_domains() {
        let profile = LifestyleProfile {
            plastic_bottles_per_week: 120,
            seafood_meals_per_week: 99,
            transport: TransportMode::Walk,
            shower_minutes_per_day: 2,
        }
        .clamped();

        assert_eq!(profile.plastic_bottles_per_week, PLASTIC_BOTTLES_MAX);
        assert_eq!(profile.seafood_meals_per_week, SEAFOOD_MEALS_MAX);
        assert_eq!(profile.shower_minutes_per_day, SHOWER_MINUTES_MIN);
    }

    #[test]
    fn parse_accepts_each_mode_and_rejects_unknown() {
        for mode in TransportMode::ordered() {
            let raw = match mode {
                TransportMode::Walk => "walk",
                TransportMode::Bike => "bike",
                TransportMode::Public => "public",
                TransportMode::Car => "car",
                TransportMode::Plane => "plane",
            };
            assert_eq!(TransportMode::parse(raw), Ok(mode));
        }

        assert!(TransportMode::parse("rocket").is_err());
    }
}
