//! Contact-import banner policy and its fetch-once config store.
//!
//! Whether contacts were already imported is a tri-state loaded from the
//! backend. The store moves `Unknown -> Loading -> Known` and only the first
//! transition hands out a load request, so evaluating the banner on every
//! frame never issues a second load.

use crate::model::{FeatureFlags, Platform};

/// Import-enabled setting as seen by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportEnabled {
    #[default]
    Unknown,
    Loading,
    Known(bool),
    /// Load failed; stays hidden and is not retried this session
    Failed,
}

/// OS contact permission as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionStatus {
    Granted,
    Denied,
    #[default]
    Undetermined,
}

/// Requests the store hands to the effect runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactsAction {
    LoadImportEnabled,
    RequestPermissions { then_toggle_import_on: bool },
    EditImportEnabled { enable: bool },
}

#[derive(Debug, Clone, Default)]
pub struct ContactsImport {
    pub import_enabled: ImportEnabled,
    pub permission: PermissionStatus,
    /// "Later" pressed. Session only, never written back.
    pub dismissed: bool,
}

impl ContactsImport {
    pub fn new() -> Self {
        Self::default()
    }

    /// The banner is only ever considered on mobile with the flag on
    pub fn eligible(flags: &FeatureFlags, platform: Platform) -> bool {
        flags.contacts_banner && platform.is_mobile()
    }

    /// Guarded `Unknown -> Loading` transition.
    /// Returns the load request once; `None` on every later call.
    pub fn ensure_loaded(&mut self) -> Option<ContactsAction> {
        match self.import_enabled {
            ImportEnabled::Unknown => {
                self.import_enabled = ImportEnabled::Loading;
                tracing::debug!("contacts import setting unknown, requesting load");
                Some(ContactsAction::LoadImportEnabled)
            }
            _ => None,
        }
    }

    /// Evaluate eligibility and, when eligible, the fetch-once guard
    pub fn poll(&mut self, flags: &FeatureFlags, platform: Platform) -> Option<ContactsAction> {
        if !Self::eligible(flags, platform) {
            return None;
        }
        self.ensure_loaded()
    }

    pub fn loaded(&mut self, enabled: bool) {
        tracing::debug!(enabled, "contacts import setting loaded");
        self.import_enabled = ImportEnabled::Known(enabled);
    }

    pub fn load_failed(&mut self) {
        if self.import_enabled == ImportEnabled::Loading {
            self.import_enabled = ImportEnabled::Failed;
        }
    }

    /// Banner shows only when import is known to be off
    pub fn banner_visible(&self, flags: &FeatureFlags, platform: Platform) -> bool {
        Self::eligible(flags, platform)
            && !self.dismissed
            && self.import_enabled == ImportEnabled::Known(false)
    }

    /// "Import contacts": ask for permission first unless already granted
    pub fn import_action(&self) -> ContactsAction {
        if self.permission != PermissionStatus::Granted {
            ContactsAction::RequestPermissions {
                then_toggle_import_on: true,
            }
        } else {
            ContactsAction::EditImportEnabled { enable: true }
        }
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }
}
