use serde::{Deserialize, Serialize};
use std::fmt;

/// Role new members get when they are added to an existing team
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum TeamRole {
    Owner,
    Admin,
    #[default]
    Writer,
    Reader,
}

impl TeamRole {
    /// Picker order, most privileged first
    pub const ALL: [TeamRole; 4] = [
        TeamRole::Owner,
        TeamRole::Admin,
        TeamRole::Writer,
        TeamRole::Reader,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TeamRole::Owner => "owner",
            TeamRole::Admin => "admin",
            TeamRole::Writer => "writer",
            TeamRole::Reader => "reader",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TeamRole::Owner => "Owner",
            TeamRole::Admin => "Admin",
            TeamRole::Writer => "Writer",
            TeamRole::Reader => "Reader",
        }
    }

    /// Only readers and writers can be invited by an external handle
    pub fn allowed_for_external(self) -> bool {
        matches!(self, TeamRole::Writer | TeamRole::Reader)
    }
}

impl fmt::Display for TeamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role picker shown when adding people to an existing team.
/// `open` only controls visibility; the selection is kept while closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePicker {
    pub selected: TeamRole,
    pub disabled: Vec<TeamRole>,
    pub send_notification: bool,
    pub open: bool,
}

impl Default for RolePicker {
    fn default() -> Self {
        Self {
            selected: TeamRole::default(),
            disabled: Vec::new(),
            send_notification: true,
            open: false,
        }
    }
}

impl RolePicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable `roles`; moves the selection off a disabled role if needed
    pub fn with_disabled(mut self, roles: impl IntoIterator<Item = TeamRole>) -> Self {
        self.disabled = roles.into_iter().collect();
        if self.is_disabled(self.selected) {
            let first = self.enabled().next();
            if let Some(role) = first {
                self.selected = role;
            }
        }
        self
    }

    pub fn is_disabled(&self, role: TeamRole) -> bool {
        self.disabled.contains(&role)
    }

    fn enabled(&self) -> impl Iterator<Item = TeamRole> + '_ {
        TeamRole::ALL.into_iter().filter(|r| !self.is_disabled(*r))
    }

    /// Select `role`. Returns false and keeps the old selection if it is disabled.
    pub fn select(&mut self, role: TeamRole) -> bool {
        if self.is_disabled(role) {
            tracing::debug!(%role, "role disabled, selection unchanged");
            return false;
        }
        self.selected = role;
        true
    }

    /// Move the selection by `step` through the enabled roles, clamped at the ends
    pub fn step(&mut self, step: isize) {
        let enabled: Vec<TeamRole> = self.enabled().collect();
        let Some(pos) = enabled.iter().position(|r| *r == self.selected) else {
            return;
        };
        let next = pos
            .saturating_add_signed(step)
            .min(enabled.len().saturating_sub(1));
        self.selected = enabled[next];
    }

    pub fn toggle_notification(&mut self) {
        self.send_notification = !self.send_notification;
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }
}
