pub mod contacts_banner;
pub mod footer;
pub mod service_tab_bar;
pub mod status;
pub mod team_box;
pub mod user_list;

pub use contacts_banner::{render_contacts_banner, BANNER_HEIGHT};
pub use footer::render_footer;
pub use service_tab_bar::render_service_tab_bar;
pub use status::{render_empty_service, render_loading, render_waiting_overlay, spinner_glyph};
pub use team_box::{render_make_team_hint, render_role_picker, render_team_box};
pub use user_list::render_user_list;
