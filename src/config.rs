use log::Level;

/// Vertical offset past which the navigation bar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Distance below the viewport top of the line a section has to straddle to be active.
pub const REFERENCE_LINE_PX: f64 = 100.0;

pub const CONTACT_EMAIL: &str = "m.klapp@galaxy-coffee-company.com";
pub const CONTACT_PHONE_DISPLAY: &str = "+1 (559) 245-5755";
pub const CONTACT_PHONE_TEL: &str = "+15592455755";
pub const CONTACT_ADDRESS: [&str; 5] = [
    "Galaxy Coffee Company LLC",
    "Maurice Klapp",
    "1901 Avenue of the Stars",
    "Suite 200",
    "Los Angeles, CA 90067",
];

pub const LOGO_URL: &str = "https://i.postimg.cc/HswPWvnC/Asset-5.png";
pub const BACKGROUND_URL: &str = "https://i.postimg.cc/k56TDJMH/background.jpg";
pub const MACHINE_URL: &str = "https://i.postimg.cc/5N1TGV7d/galaxy-coffee-co-machine.png";

/// How long the contact form keeps its "opening your email app" notice up.
pub const NOTICE_DURATION_MS: u32 = 4000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
