use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::ConfigError;
use crate::model::{FeatureFlags, Platform, RolePicker, ServiceId, TeamRole};

/// Terminal user picker for starting a chat or building a team
#[derive(Debug, Clone, Parser)]
#[command(name = "team-builder", version, about)]
pub struct Cli {
    /// JSON fixture with recommendations, users and contact settings
    #[arg(long, default_value = "demos/users.json")]
    pub fixtures: PathBuf,

    /// JSON feature-flag file; missing keys stay enabled
    #[arg(long)]
    pub flags: Option<PathBuf>,

    /// Layout to render
    #[arg(long, value_enum, default_value_t = Platform::Desktop)]
    pub platform: Platform,

    /// Service tab selected at startup
    #[arg(long, value_enum, default_value_t = ServiceId::Keybase)]
    pub service: ServiceId,

    /// Render a named demo state instead of talking to the fixture backend
    #[arg(long)]
    pub story: Option<String>,

    /// Print the stories available for --platform and exit
    #[arg(long)]
    pub list_stories: bool,

    /// Adding people to an existing team: show the role picker
    #[arg(long)]
    pub role_picker: bool,

    /// Roles the picker refuses, comma separated
    #[arg(long, value_enum, value_delimiter = ',', requires = "role_picker")]
    pub disabled_roles: Vec<TeamRole>,

    /// Write tracing output here; discarded when unset
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn initial_role_picker(&self) -> Option<RolePicker> {
        self.role_picker
            .then(|| RolePicker::new().with_disabled(self.disabled_roles.iter().copied()))
    }
}

/// Read feature flags, or defaults when no file is given
pub fn load_flags(path: Option<&Path>) -> Result<FeatureFlags, ConfigError> {
    let Some(path) = path else {
        return Ok(FeatureFlags::default());
    };
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["team-builder"]);
        assert_eq!(cli.fixtures, PathBuf::from("demos/users.json"));
        assert_eq!(cli.platform, Platform::Desktop);
        assert_eq!(cli.service, ServiceId::Keybase);
        assert!(cli.story.is_none());
        assert!(!cli.list_stories);
    }

    #[test]
    fn cli_parses_platform_and_service() {
        let cli = Cli::parse_from([
            "team-builder",
            "--platform",
            "mobile",
            "--service",
            "hackernews",
            "--story",
            "loading",
        ]);
        assert_eq!(cli.platform, Platform::Mobile);
        assert_eq!(cli.service, ServiceId::Hackernews);
        assert_eq!(cli.story.as_deref(), Some("loading"));
    }

    #[test]
    fn cli_rejects_unknown_service() {
        assert!(Cli::try_parse_from(["team-builder", "--service", "myspace"]).is_err());
    }

    #[test]
    fn role_picker_off_by_default() {
        let cli = Cli::parse_from(["team-builder"]);
        assert!(cli.initial_role_picker().is_none());
    }

    #[test]
    fn role_picker_with_disabled_roles() {
        let cli = Cli::parse_from([
            "team-builder",
            "--role-picker",
            "--disabled-roles",
            "owner,admin",
        ]);
        let picker = cli.initial_role_picker().unwrap();
        assert_eq!(picker.disabled, [TeamRole::Owner, TeamRole::Admin]);
        assert_eq!(picker.selected, TeamRole::Writer);
    }

    #[test]
    fn disabled_roles_need_role_picker() {
        assert!(Cli::try_parse_from(["team-builder", "--disabled-roles", "owner"]).is_err());
    }

    #[test]
    fn no_flags_file_means_defaults() {
        assert_eq!(load_flags(None).unwrap(), FeatureFlags::default());
    }

    #[test]
    fn flags_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flags.json");
        fs::write(&path, r#"{"contacts_banner": false}"#).unwrap();

        let flags = load_flags(Some(&path)).unwrap();
        assert!(!flags.contacts_banner);
        assert!(flags.recommendations);
    }

    #[test]
    fn malformed_flags_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flags.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(load_flags(Some(&path)), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn missing_flags_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(load_flags(Some(&path)), Err(ConfigError::Read { .. })));
    }
}
