use ratatui::style::Color;

use crate::model::{FollowingState, ServiceId};

pub struct Theme;

impl Theme {
    // ── Base palette ────────────────────────────────────────────
    pub const BACKGROUND: Color = Color::Rgb(18, 18, 24);
    pub const SURFACE: Color = Color::Rgb(28, 28, 38);
    pub const TEXT: Color = Color::Rgb(225, 225, 235);
    pub const MUTED_TEXT: Color = Color::Rgb(100, 105, 120);
    pub const SEPARATOR: Color = Color::Rgb(45, 45, 58);

    // ── Accent colors ───────────────────────────────────────────
    pub const ACCENT: Color = Color::Rgb(80, 200, 200);
    pub const BLUE: Color = Color::Rgb(51, 160, 255); // banner background

    // ── Semantic colors ─────────────────────────────────────────
    pub const SUCCESS: Color = Color::Rgb(80, 210, 120);
    pub const WARNING: Color = Color::Rgb(230, 180, 60);
    pub const ERROR: Color = Color::Rgb(230, 80, 80);
    pub const INFO: Color = Color::Rgb(80, 180, 220);

    // ── UI chrome ───────────────────────────────────────────────
    pub const HEADER_BG: Color = Color::Rgb(24, 24, 32);
    pub const FOOTER_BG: Color = Color::Rgb(24, 24, 32);
    pub const PANEL_BORDER: Color = Color::Rgb(50, 50, 65);
    pub const ACTIVE_BORDER: Color = Color::Rgb(80, 200, 200); // = ACCENT
    pub const SELECTION_BG: Color = Color::Rgb(40, 55, 75);
    pub const OVERLAY_BG: Color = Color::Rgb(10, 10, 14); // dimmed backdrop while waiting

    // ── Service accents ─────────────────────────────────────────
    pub const SERVICE_KEYBASE: Color = Color::Rgb(51, 160, 255);
    pub const SERVICE_CONTACT: Color = Color::Rgb(120, 200, 170);
    pub const SERVICE_TWITTER: Color = Color::Rgb(29, 161, 242);
    pub const SERVICE_FACEBOOK: Color = Color::Rgb(66, 103, 178);
    pub const SERVICE_GITHUB: Color = Color::Rgb(200, 200, 210);
    pub const SERVICE_REDDIT: Color = Color::Rgb(255, 69, 0);
    pub const SERVICE_HACKERNEWS: Color = Color::Rgb(255, 102, 0);

    /// Accent color for a service tab, icon and empty-state prompt
    pub fn service_color(service: ServiceId) -> Color {
        match service {
            ServiceId::Keybase => Self::SERVICE_KEYBASE,
            ServiceId::Contact | ServiceId::Phone | ServiceId::Email => Self::SERVICE_CONTACT,
            ServiceId::Twitter => Self::SERVICE_TWITTER,
            ServiceId::Facebook => Self::SERVICE_FACEBOOK,
            ServiceId::Github => Self::SERVICE_GITHUB,
            ServiceId::Reddit => Self::SERVICE_REDDIT,
            ServiceId::Hackernews => Self::SERVICE_HACKERNEWS,
        }
    }

    /// Username color by relationship, as in the follow graph
    pub fn following_color(state: FollowingState) -> Color {
        match state {
            FollowingState::Following => Self::SUCCESS,
            FollowingState::NotFollowing => Self::INFO,
            FollowingState::You => Self::ACCENT,
            FollowingState::NoState => Self::TEXT,
        }
    }
}
