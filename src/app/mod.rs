pub mod navigation;
pub mod state;
pub mod update;

pub use navigation::{
    handle_key, on_add, on_change_service, on_change_text, on_finish_team_building, on_remove,
    on_search_for_more,
};
pub use state::{AppState, MAX_CHAT_SIZE};
pub use update::update;
