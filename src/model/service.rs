use serde::{Deserialize, Serialize};
use std::fmt;

/// External identity provider a user can be searched and added by.
/// Declaration order is the tab bar order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum ServiceId {
    Keybase,
    Contact,
    Phone,
    Email,
    Twitter,
    Facebook,
    Github,
    Reddit,
    Hackernews,
}

impl ServiceId {
    pub const ALL: [ServiceId; 9] = [
        ServiceId::Keybase,
        ServiceId::Contact,
        ServiceId::Phone,
        ServiceId::Email,
        ServiceId::Twitter,
        ServiceId::Facebook,
        ServiceId::Github,
        ServiceId::Reddit,
        ServiceId::Hackernews,
    ];

    /// Human-readable label used in tabs and prompts
    pub fn label(self) -> &'static str {
        match self {
            ServiceId::Keybase => "Keybase",
            ServiceId::Contact => "Your contacts",
            ServiceId::Phone => "Phone",
            ServiceId::Email => "Email",
            ServiceId::Twitter => "Twitter",
            ServiceId::Facebook => "Facebook",
            ServiceId::Github => "GitHub",
            ServiceId::Reddit => "Reddit",
            ServiceId::Hackernews => "Hacker News",
        }
    }

    /// Single-cell glyph standing in for the service icon font
    pub fn icon(self) -> &'static str {
        match self {
            ServiceId::Keybase => "K",
            ServiceId::Contact => "☺",
            ServiceId::Phone => "☎",
            ServiceId::Email => "@",
            ServiceId::Twitter => "t",
            ServiceId::Facebook => "f",
            ServiceId::Github => "g",
            ServiceId::Reddit => "r",
            ServiceId::Hackernews => "Y",
        }
    }

    /// Wire name, as used in fixtures and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceId::Keybase => "keybase",
            ServiceId::Contact => "contact",
            ServiceId::Phone => "phone",
            ServiceId::Email => "email",
            ServiceId::Twitter => "twitter",
            ServiceId::Facebook => "facebook",
            ServiceId::Github => "github",
            ServiceId::Reddit => "reddit",
            ServiceId::Hackernews => "hackernews",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Next tab, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
