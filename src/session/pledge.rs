use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Baseline count behind the "ocean protectors have pledged" banner. The
/// community has no backing store; the local pledge only ever adds one.
pub const BASELINE_PLEDGE_COUNT: u64 = 12_345;

/// Wall text shown when the local pledge omits a message.
pub const DEFAULT_PLEDGE_MESSAGE: &str = "I commit to protecting marine life!";

/// Local-only pledge state. The boolean is the only field that outlives the
/// community view; name and message exist purely for display.
#[derive(Debug, Clone, Default)]
pub struct PledgeRecord {
    has_pledged: bool,
    name: Option<String>,
    message: Option<String>,
}

impl PledgeRecord {
    pub fn has_pledged(&self) -> bool {
        self.has_pledged
    }

    /// Record the pledge. The name is required after trimming; a blank name
    /// leaves the record untouched and reports failure silently.
    pub fn submit(&mut self, name: &str, message: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }

        self.has_pledged = true;
        self.name = Some(name.to_string());
        let message = message.trim();
        self.message = (!message.is_empty()).then(|| message.to_string());
        true
    }

    /// Wall content: the local pledge (if any) first, then the hardcoded
    /// sample entries with timestamps anchored to `now`.
    pub fn community_view(&self, now: DateTime<Utc>) -> CommunityView {
        let mut wall = Vec::with_capacity(SAMPLE_PLEDGES.len() + 1);

        if self.has_pledged {
            if let Some(name) = &self.name {
                wall.push(PledgeWallEntry {
                    name: name.clone(),
                    message: self
                        .message
                        .clone()
                        .unwrap_or_else(|| DEFAULT_PLEDGE_MESSAGE.to_string()),
                    posted_at: now,
                    posted_label: "just now".to_string(),
                });
            }
        }

        for sample in &SAMPLE_PLEDGES {
            wall.push(PledgeWallEntry {
                name: sample.name.to_string(),
                message: sample.message.to_string(),
                posted_at: now - Duration::hours(sample.hours_ago),
                posted_label: time_ago_label(sample.hours_ago),
            });
        }

        CommunityView {
            total_pledges: BASELINE_PLEDGE_COUNT + u64::from(self.has_pledged),
            wall,
        }
    }
}

struct SamplePledge {
    name: &'static str,
    message: &'static str,
    hours_ago: i64,
}

static SAMPLE_PLEDGES: [SamplePledge; 5] = [
    SamplePledge {
        name: "Sarah M.",
        message: "I pledge to reduce my plastic use by 80%!",
        hours_ago: 2,
    },
    SamplePledge {
        name: "Alex K.",
        message: "Committed to sustainable seafood choices for my family.",
        hours_ago: 5,
    },
    SamplePledge {
        name: "Maya P.",
        message: "No more single-use plastics in my household!",
        hours_ago: 24,
    },
    SamplePledge {
        name: "David L.",
        message: "Switching to public transport to reduce my carbon footprint.",
        hours_ago: 24,
    },
    SamplePledge {
        name: "Emma R.",
        message: "Organizing beach cleanups in my community!",
        hours_ago: 48,
    },
];

fn time_ago_label(hours: i64) -> String {
    if hours < 24 {
        format!("{hours} hours ago")
    } else {
        let days = hours / 24;
        if days == 1 {
            "1 day ago".to_string()
        } else {
            format!("{days} days ago")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PledgeWallEntry {
    pub name: String,
    pub message: String,
    pub posted_at: DateTime<Utc>,
    pub posted_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommunityView {
    pub total_pledges: u64,
    pub wall: Vec<PledgeWallEntry>,
}
