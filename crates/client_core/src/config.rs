use std::{collections::HashMap, fs};

use serde::Deserialize;
use tracing::warn;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://playground.4geeks.com/contact";
pub const DEFAULT_AGENDA_SLUG: &str = "test1234";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub base_url: String,
    pub agenda_slug: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            agenda_slug: DEFAULT_AGENDA_SLUG.into(),
        }
    }
}

/// Defaults, overridden by an optional `agenda.toml` in the working
/// directory, overridden in turn by environment variables.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("agenda.toml") {
        apply_file(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("AGENDA_BASE_URL") {
        settings.base_url = v;
    }
    if let Ok(v) = std::env::var("AGENDA_SLUG") {
        settings.agenda_slug = v;
    }

    normalize(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
        if let Some(v) = file_cfg.get("base_url") {
            settings.base_url = v.clone();
        }
        if let Some(v) = file_cfg.get("agenda_slug") {
            settings.agenda_slug = v.clone();
        }
    }
}

/// Trailing slashes would double up in endpoint paths; a base URL that
/// does not parse at all is kept (the first request will fail loudly) but
/// flagged here.
fn normalize(mut settings: Settings) -> Settings {
    while settings.base_url.ends_with('/') {
        settings.base_url.pop();
    }
    if Url::parse(&settings.base_url).is_err() {
        warn!(base_url = %settings.base_url, "base_url is not a valid URL");
    }
    settings
}
