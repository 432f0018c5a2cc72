use super::profile::{LifestyleProfile, TransportMode};
use serde::Serialize;

/// Hard cap on the number of tip cards shown at once.
pub const MAX_TIPS: usize = 5;

/// Display-only impact rating carried by each tip card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactRating {
    High,
    Medium,
}

impl ImpactRating {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
        }
    }
}

/// A recommended action with a stable identifier. Descriptions interpolate
/// the profile's own numbers so the card reads as personal feedback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tip {
    pub id: &'static str,
    pub title: &'static str,
    pub description: String,
    pub impact: ImpactRating,
    pub category: &'static str,
}

/// Evaluate the fixed rule list against a profile, in rule order, and keep
/// the first `MAX_TIPS` matches. Completion state never removes a tip from
/// the result; callers overlay their own completed flags.
pub fn generate_tips(profile: &LifestyleProfile) -> Vec<Tip> {
    let mut tips = Vec::new();

    if profile.plastic_bottles_per_week > 10 {
        let bottles = u32::from(profile.plastic_bottles_per_week);
        tips.push(Tip {
            id: "plastic-bottles",
            title: "Switch to Reusable Water Bottles",
            description: format!(
                "You use {bottles} plastic bottles per week. Switching to reusable bottles \
                 could save {} bottles annually and prevent 1,000L of ocean pollution.",
                bottles * 52
            ),
            impact: ImpactRating::High,
            category: "Plastic Reduction",
        });
    }

    if profile.seafood_meals_per_week > 5 {
        tips.push(Tip {
            id: "sustainable-seafood",
            title: "Choose Sustainable Seafood",
            description: format!(
                "With {} seafood meals per week, choosing sustainable options or reducing \
                 by 2 meals could protect marine biodiversity and help fish populations recover.",
                profile.seafood_meals_per_week
            ),
            impact: ImpactRating::High,
            category: "Marine Protection",
        });
    }

    if matches!(profile.transport, TransportMode::Car | TransportMode::Plane) {
        let habit = match profile.transport {
            TransportMode::Plane => "frequent flying",
            _ => "car usage",
        };
        tips.push(Tip {
            id: "transport-change",
            title: "Reduce Carbon Footprint",
            description: format!(
                "Your {habit} contributes to ocean acidification. Consider public \
                 transport, cycling, or walking for shorter trips."
            ),
            impact: ImpactRating::Medium,
            category: "Transportation",
        });
    }

    if profile.shower_minutes_per_day > 15 {
        tips.push(Tip {
            id: "water-conservation",
            title: "Conserve Water Resources",
            description: format!(
                "Your {}-minute showers use significant water. Reducing by 5 minutes \
                 daily saves 1,825 gallons annually and reduces wastewater impact on oceans.",
                profile.shower_minutes_per_day
            ),
            impact: ImpactRating::Medium,
            category: "Water Conservation",
        });
    }

    tips.push(Tip {
        id: "beach-cleanup",
        title: "Join Beach Cleanup Initiatives",
        description: "Participate in local beach cleanups to directly remove harmful debris \
                      from marine environments. One person can collect 20+ pounds of trash \
                      per cleanup."
            .to_string(),
        impact: ImpactRating::High,
        category: "Direct Action",
    });

    if profile.plastic_bottles_per_week < 5 {
        tips.push(Tip {
            id: "influence-others",
            title: "Inspire Your Community",
            description: "Your low plastic usage is excellent! Share your habits with friends \
                          and family. One person can influence 5-10 others to adopt \
                          eco-friendly practices."
                .to_string(),
            impact: ImpactRating::High,
            category: "Community Impact",
        });
    }

    tips.truncate(MAX_TIPS);
    tips
}

/// Presentational gate unlocking an achievement badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AchievementRule {
    CompletedTips(usize),
    ScoreAtLeast(u8),
}

struct AchievementTemplate {
    key: &'static str,
    name: &'static str,
    rule: AchievementRule,
}

static ACHIEVEMENTS: [AchievementTemplate; 4] = [
    AchievementTemplate {
        key: "first-step",
        name: "First Step",
        rule: AchievementRule::CompletedTips(1),
    },
    AchievementTemplate {
        key: "eco-warrior",
        name: "Eco Warrior",
        rule: AchievementRule::CompletedTips(3),
    },
    AchievementTemplate {
        key: "ocean-guardian",
        name: "Ocean Guardian",
        rule: AchievementRule::ScoreAtLeast(80),
    },
    AchievementTemplate {
        key: "marine-hero",
        name: "Marine Hero",
        rule: AchievementRule::CompletedTips(5),
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AchievementView {
    pub key: &'static str,
    pub name: &'static str,
    pub unlocked: bool,
}

/// Badge states for the fixed achievement catalog.
pub fn achievements(completed_tips: usize, score: u8) -> Vec<AchievementView> {
    ACHIEVEMENTS
        .iter()
        .map(|template| AchievementView {
            key: template.key,
            name: template.name,
            unlocked: match template.rule {
                AchievementRule::CompletedTips(required) => completed_tips >= required,
                AchievementRule::ScoreAtLeast(required) => score >= required,
            },
        })
        .collect()
}

/// Rotating sidebar facts. Selection is keyed rather than random so the
/// dashboard stays deterministic under test.
pub static OCEAN_FACTS: [&str; 5] = [
    "A single plastic bottle takes 450 years to decompose in the ocean.",
    "Ocean acidification has increased by 30% since the Industrial Revolution.",
    "Over 8 million tons of plastic waste enter our oceans every year.",
    "Coral reefs support 25% of all marine species despite covering less than 1% of the ocean floor.",
    "The ocean produces over 50% of the world's oxygen.",
];

pub fn ocean_fact(seed: usize) -> &'static str {
    OCEAN_FACTS[seed % OCEAN_FACTS.len()]
}

/// Display-only estimate shown on the dashboard progress cards.
pub fn co2_saved_kg(completed_tips: usize) -> u32 {
    (completed_tips as f64 * 2.5).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(plastic: u8, seafood: u8, transport: TransportMode, shower: u8) -> LifestyleProfile {
        LifestyleProfile {
            plastic_bottles_per_week: plastic,
            seafood_meals_per_week: seafood,
            transport,
            shower_minutes_per_day: shower,
        }
    }

    fn ids(tips: &[Tip]) -> Vec<&'static str> {
        tips.iter().map(|tip| tip.id).collect()
    }

    #[test]
    fn baseline_tip_is_always_present() {
        let minimal = generate_tips(&profile(0, 0, TransportMode::Walk, 5));
        assert!(ids(&minimal).contains(&"beach-cleanup"));

        let maximal = generate_tips(&profile(50, 20, TransportMode::Plane, 60));
        assert!(ids(&maximal).contains(&"beach-cleanup"));
    }

    #[test]
    fn low_impact_profile_earns_influence_tip_only() {
        let tips = generate_tips(&profile(0, 0, TransportMode::Walk, 5));
        assert_eq!(ids(&tips), vec!["beach-cleanup", "influence-others"]);
    }

    #[test]
    fn high_impact_profile_caps_at_five_in_rule_order() {
        // All four conditional rules fire; the cap drops nothing here but
        // order must follow rule evaluation, not impact ranking.
        let tips = generate_tips(&profile(20, 10, TransportMode::Plane, 30));
        assert_eq!(
            ids(&tips),
            vec![
                "plastic-bottles",
                "sustainable-seafood",
                "transport-change",
                "water-conservation",
                "beach-cleanup",
            ]
        );
        assert!(tips.len() <= MAX_TIPS);
    }

    #[test]
    fn boundary_values_do_not_trigger_rules() {
        let tips = generate_tips(&profile(10, 5, TransportMode::Public, 15));
        assert_eq!(ids(&tips), vec!["beach-cleanup"]);
    }

    #[test]
    fn descriptions_interpolate_profile_numbers() {
        let tips = generate_tips(&profile(12, 0, TransportMode::Walk, 10));
        let plastic = tips
            .iter()
            .find(|tip| tip.id == "plastic-bottles")
            .expect("plastic tip fires above ten bottles");
        assert!(plastic.description.contains("12 plastic bottles"));
        assert!(plastic.description.contains("624 bottles annually"));
    }

    #[test]
    fn transport_tip_names_the_habit() {
        let by_plane = generate_tips(&profile(0, 0, TransportMode::Plane, 10));
        let tip = by_plane
            .iter()
            .find(|tip| tip.id == "transport-change")
            .expect("transport tip fires for plane");
        assert!(tip.description.contains("frequent flying"));

        let by_car = generate_tips(&profile(0, 0, TransportMode::Car, 10));
        let tip = by_car
            .iter()
            .find(|tip| tip.id == "transport-change")
            .expect("transport tip fires for car");
        assert!(tip.description.contains("car usage"));
    }

    #[test]
    fn achievements_unlock_at_fixed_thresholds() {
        let locked = achievements(0, 50);
        assert!(locked.iter().all(|badge| !badge.unlocked));

        let first = achievements(1, 50);
        assert!(first
            .iter()
            .any(|badge| badge.key == "first-step" && badge.unlocked));
        assert!(first
            .iter()
            .any(|badge| badge.key == "eco-warrior" && !badge.unlocked));

        let warrior = achievements(3, 50);
        assert!(warrior
            .iter()
            .any(|badge| badge.key == "eco-warrior" && badge.unlocked));
        assert!(warrior
            .iter()
            .any(|badge| badge.key == "marine-hero" && !badge.unlocked));

        let hero = achievements(5, 79);
        assert!(hero
            .iter()
            .any(|badge| badge.key == "marine-hero" && badge.unlocked));
        assert!(hero
            .iter()
            .any(|badge| badge.key == "ocean-guardian" && !badge.unlocked));

        let guardian = achievements(0, 80);
        assert!(guardian
            .iter()
            .any(|badge| badge.key == "ocean-guardian" && badge.unlocked));
    }

    #[test]
    fn ocean_fact_cycles_through_catalog() {
        assert_eq!(ocean_fact(0), OCEAN_FACTS[0]);
        assert_eq!(ocean_fact(4), OCEAN_FACTS[4]);
        assert_eq!(ocean_fact(5), OCEAN_FACTS[0]);
    }

    #[test]
    fn co2_estimate_rounds_to_whole_kilograms() {
        assert_eq!(co2_saved_kg(0), 0);
        assert_eq!(co2_saved_kg(1), 3);
        assert_eq!(co2_saved_kg(2), 5);
        assert_eq!(co2_saved_kg(5), 13);
    }
}
