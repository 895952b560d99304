pub mod charts;
pub mod handlers;
pub mod home;
pub mod metrics;
pub mod results;
pub mod sidebar;
pub mod theme_toggle;
pub mod upload_section;
pub mod utils;
