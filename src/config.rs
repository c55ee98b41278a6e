use log::Level;

/// Formspree form that receives contact requests.
const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/xanpbqgd";

pub const ROTATION_INTERVAL_MS: u32 = 5_000;
pub const NAV_CLOSE_DELAY_MS: u32 = 300;
pub const POPUP_DURATION_MS: u32 = 4_000;

pub const LOGO_PATH: &str = "/assets/logo.png";
pub const HERO_IMAGE_PATH: &str = "/assets/hero-pic.png";

/// Endpoint the contact form posts to. Set `FORM_ENDPOINT` at build time to point
/// a build at a different form.
pub fn get_form_endpoint() -> &'static str {
    option_env!("FORM_ENDPOINT").unwrap_or(DEFAULT_FORM_ENDPOINT)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
