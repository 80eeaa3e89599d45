use log::Level;

pub const SITE_NAME: &str = "Meridian";
pub const CONTACT_EMAIL: &str = "contact@meridian.example";

/// Pixels scrolled before the nav bar switches to its solid background.
pub const NAV_SCROLL_THRESHOLD: i32 = 80;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose route logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn page_title(heading: &str) -> String {
    format!("{} | {}", heading, SITE_NAME)
}
