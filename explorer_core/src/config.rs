pub const DEFAULT_FEED_URL: &str = "https://cdn.jsdelivr.net/gh/GCA-Classroom/apod/data.json";

pub const FETCH_BUTTON_LABEL: &str = "Fetch Space Images";

/// Feed location, overridable at build time with `EXPLORER_FEED_URL`.
pub fn feed_url() -> &'static str {
    option_env!("EXPLORER_FEED_URL").unwrap_or(DEFAULT_FEED_URL)
}
