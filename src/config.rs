use log::warn;
use rocket::figment::Figment;
use serde::{Deserialize, Serialize};

const DEFAULT_CONTENT_PATH: &str = "website/static/content.json";

/// The `[default.folio]` table of Rocket.toml (or `ROCKET_FOLIO=...`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub content_path: String,
    pub content_url: Option<String>,
    pub content_timeout_secs: Option<u64>,
    pub site_title: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        FolioConfig {
            content_path: DEFAULT_CONTENT_PATH.to_string(),
            content_url: None,
            content_timeout_secs: None,
            site_title: "Portfolio".to_string(),
        }
    }
}

impl FolioConfig {
    /// Read the `folio` table, falling back to defaults when it is missing
    /// or malformed.
    pub fn from_figment(figment: &Figment) -> Self {
        if !figment.contains("folio") {
            return FolioConfig::default();
        }
        match figment.extract_inner::<FolioConfig>("folio") {
            Ok(cfg) => cfg.normalized(),
            Err(e) => {
                warn!("Invalid [folio] config, using defaults: {}", e);
                FolioConfig::default()
            }
        }
    }

    fn normalized(mut self) -> Self {
        if self.content_path.trim().is_empty() {
            self.content_path = DEFAULT_CONTENT_PATH.to_string();
        }
        self.content_url = self
            .content_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());
        self
    }
}
