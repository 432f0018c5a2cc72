use serde::{Deserialize, Serialize};
use urlencoding::encode;

/// Fixed message template carried by every outbound share action.
pub const SHARE_TEXT: &str = "I just pledged to protect marine life with BlueConserve! \
                              Join me in making a difference for our oceans. \u{1F30A} \
                              #BlueConserve #OceanConservation";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SharePlatform {
    Twitter,
    Facebook,
    Linkedin,
    Copy,
}

impl SharePlatform {
    pub const fn ordered() -> [Self; 4] {
        [Self::Twitter, Self::Facebook, Self::Linkedin, Self::Copy]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Facebook => "Facebook",
            Self::Linkedin => "LinkedIn",
            Self::Copy => "Copy Link",
        }
    }
}

/// What the UI should do for a share action: open a platform URL, or put
/// the templated text on the clipboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub platform: SharePlatform,
    pub platform_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Build the share action for a platform. Platform URLs percent-encode both
/// the message template and the page URL; the copy action carries them raw.
pub fn share_payload(platform: SharePlatform, page_url: &str) -> SharePayload {
    let (url, text) = match platform {
        SharePlatform::Twitter => (
            Some(format!(
                "https://twitter.com/intent/tweet?text={}&url={}",
                encode(SHARE_TEXT),
                encode(page_url)
            )),
            None,
        ),
        SharePlatform::Facebook => (
            Some(format!(
                "https://www.facebook.com/sharer/sharer.php?u={}",
                encode(page_url)
            )),
            None,
        ),
        SharePlatform::Linkedin => (
            Some(format!(
                "https://www.linkedin.com/sharing/share-offsite/?url={}",
                encode(page_url)
            )),
            None,
        ),
        SharePlatform::Copy => (None, Some(format!("{SHARE_TEXT} {page_url}"))),
    };

    SharePayload {
        platform,
        platform_label: platform.label(),
        url,
        text,
    }
}
