use serde::{Deserialize, Serialize};

/// Feature switches read from the flags file. Missing keys stay enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Show recommendations before a query is typed
    pub recommendations: bool,
    /// Offer the contact-import banner on mobile
    pub contacts_banner: bool,
    /// Offer converting a large chat into a team
    pub make_team: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            recommendations: true,
            contacts_banner: true,
            make_team: true,
        }
    }
}

/// Layout discriminator. Never changes which state is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Desktop,
    Mobile,
}

impl Platform {
    pub fn is_mobile(self) -> bool {
        matches!(self, Platform::Mobile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_flags_default_to_enabled() {
        let flags: FeatureFlags = serde_json::from_str(r#"{"make_team": false}"#).unwrap();
        assert!(flags.recommendations);
        assert!(flags.contacts_banner);
        assert!(!flags.make_team);
    }

    #[test]
    fn platform_parses_lowercase() {
        let platform: Platform = serde_json::from_str("\"mobile\"").unwrap();
        assert!(platform.is_mobile());
        assert!(!Platform::Desktop.is_mobile());
    }
}
