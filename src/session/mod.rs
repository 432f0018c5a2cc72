pub mod pledge;
pub mod share;

use crate::engine::ecosystem::{debris_count, EcosystemBand, FactorImpacts, OceanMood};
use crate::engine::profile::LifestyleProfile;
use crate::engine::score::ScoreAssessment;
use crate::engine::tips::{self, AchievementView, Tip};
use chrono::{DateTime, Utc};
use pledge::{CommunityView, PledgeRecord};
use serde::{Deserialize, Serialize};

/// Score shown before the user ever submits the calculator.
pub const DEFAULT_SCORE_SNAPSHOT: u8 = 50;

/// Navigable views. Any view is reachable from any other; there is no
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Home,
    Calculator,
    Simulator,
    Tips,
    Community,
}

impl View {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Home,
            Self::Calculator,
            Self::Simulator,
            Self::Tips,
            Self::Community,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Calculator => "Impact Calculator",
            Self::Simulator => "Ecosystem Simulator",
            Self::Tips => "Eco Tips Dashboard",
            Self::Community => "Community Pledge",
        }
    }
}

/// The single in-memory aggregate for one page session. Downstream views
/// derive their content from this state on each read; the score snapshot
/// only moves on an explicit calculator submit.
#[derive(Debug, Clone)]
pub struct SessionState {
    current_view: View,
    profile: LifestyleProfile,
    score_snapshot: u8,
    completed_tips: Vec<String>,
    pledge: PledgeRecord,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current_view: View::Home,
            profile: LifestyleProfile::default(),
            score_snapshot: DEFAULT_SCORE_SNAPSHOT,
            completed_tips: Vec::new(),
            pledge: PledgeRecord::default(),
        }
    }
}

impl SessionState {
    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn profile(&self) -> &LifestyleProfile {
        &self.profile
    }

    pub fn score_snapshot(&self) -> u8 {
        self.score_snapshot
    }

    pub fn completed_tips(&self) -> &[String] {
        &self.completed_tips
    }

    pub fn has_pledged(&self) -> bool {
        self.pledge.has_pledged()
    }

    /// Overwrite the profile and score snapshot, then land on the simulator.
    /// The only transition that moves the snapshot.
    pub fn submit_calculator(&mut self, profile: LifestyleProfile) -> ScoreAssessment {
        let profile = profile.clamped();
        let assessment = ScoreAssessment::of(&profile);
        self.profile = profile;
        self.score_snapshot = assessment.score;
        self.current_view = View::Simulator;
        assessment
    }

    /// Mark a tip done. Idempotent: re-completing an id is a no-op and the
    /// set only ever grows. Returns whether the id was newly added.
    pub fn complete_tip(&mut self, tip_id: &str) -> bool {
        if self.completed_tips.iter().any(|id| id == tip_id) {
            return false;
        }
        self.completed_tips.push(tip_id.to_string());
        true
    }

    /// Record the pledge. A blank name after trimming is a silent no-op.
    pub fn pledge(&mut self, name: &str, message: &str) -> bool {
        self.pledge.submit(name, message)
    }

    pub fn navigate(&mut self, view: View) {
        self.current_view = view;
    }

    pub fn summary(&self) -> SessionSummaryView {
        SessionSummaryView {
            current_view: self.current_view,
            view_label: self.current_view.label(),
            score: self.score_snapshot,
            completed_tips: self.completed_tips.len(),
            has_pledged: self.has_pledged(),
        }
    }

    /// Ecosystem content derived from the score snapshot, plus the
    /// factor badges derived from the raw inputs.
    pub fn ecosystem(&self) -> EcosystemView {
        let band = EcosystemBand::resolve(self.score_snapshot);
        EcosystemView {
            score: self.score_snapshot,
            mood: band.mood,
            mood_label: band.mood.label(),
            visual_tier: band.visual_tier,
            water_color: band.water_color,
            coral_health: band.coral_health,
            marine_life: band.marine_life,
            visibility: band.visibility,
            debris: band.debris,
            marine_life_count: band.marine_life_count,
            debris_count: debris_count(self.score_snapshot),
            impacts: FactorImpacts::of(&self.profile),
        }
    }

    /// Tip cards with completion overlays plus the dashboard side content.
    pub fn tips_dashboard(&self) -> TipsDashboardView {
        let cards = tips::generate_tips(&self.profile)
            .into_iter()
            .map(|tip| {
                let completed = self.completed_tips.iter().any(|id| id == tip.id);
                TipCardView { tip, completed }
            })
            .collect();

        TipsDashboardView {
            score: self.score_snapshot,
            completed_tips: self.completed_tips.len(),
            co2_saved_kg: tips::co2_saved_kg(self.completed_tips.len()),
            cards,
            achievements: self.achievements(),
            ocean_fact: tips::ocean_fact(self.completed_tips.len()),
        }
    }

    pub fn achievements(&self) -> Vec<AchievementView> {
        tips::achievements(self.completed_tips.len(), self.score_snapshot)
    }

    pub fn community(&self, now: DateTime<Utc>) -> CommunityView {
        self.pledge.community_view(now)
    }
}

/// Compact session snapshot for the header/status surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummaryView {
    pub current_view: View,
    pub view_label: &'static str,
    pub score: u8,
    pub completed_tips: usize,
    pub has_pledged: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EcosystemView {
    pub score: u8,
    pub mood: OceanMood,
    pub mood_label: &'static str,
    pub visual_tier: &'static str,
    pub water_color: &'static str,
    pub coral_health: &'static str,
    pub marine_life: &'static str,
    pub visibility: &'static str,
    pub debris: &'static str,
    pub marine_life_count: u8,
    pub debris_count: u8,
    pub impacts: FactorImpacts,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipCardView {
    #[serde(flatten)]
    pub tip: Tip,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipsDashboardView {
    pub score: u8,
    pub completed_tips: usize,
    pub co2_saved_kg: u32,
    pub cards: Vec<TipCardView>,
    pub achievements: Vec<AchievementView>,
    pub ocean_fact: &'static str,
}
