pub mod flags;
pub mod ids;
pub mod role;
pub mod serde_utils;
pub mod service;
pub mod theme;
pub mod user;

pub use flags::{FeatureFlags, Platform};
pub use ids::{ConversationId, UserId};
pub use role::{RolePicker, TeamRole};
pub use service::ServiceId;
pub use theme::Theme;
pub use user::{FollowingState, SearchResult, TeamMember};
