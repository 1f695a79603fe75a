use std::path::PathBuf;
use std::time::Duration;

use log::{debug, warn};

use crate::config::FolioConfig;
use crate::models::content::ContentDocument;
use crate::models::fallback;

#[derive(Debug)]
pub enum LoadError {
    Network(String),
    Status(u16),
    Io(String),
    Parse(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Network(e) => write!(f, "network error: {}", e),
            LoadError::Status(code) => write!(f, "unexpected HTTP status {}", code),
            LoadError::Io(e) => write!(f, "read error: {}", e),
            LoadError::Parse(e) => write!(f, "invalid content document: {}", e),
        }
    }
}

/// Where the raw content document comes from.
#[rocket::async_trait]
pub trait ContentSource: Send + Sync {
    /// Short label for logs and the health endpoint.
    fn kind(&self) -> &'static str;

    /// Fetch the raw JSON body. Only a successful fetch returns `Ok`.
    async fn fetch(&self) -> Result<String, LoadError>;
}

/// GET of a content URL. Success requires a 2xx status.
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: &str, timeout: Option<Duration>) -> Result<Self, LoadError> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder
            .build()
            .map_err(|e| LoadError::Network(format!("HTTP client error: {}", e)))?;
        Ok(HttpSource {
            url: url.to_string(),
            client,
        })
    }
}

#[rocket::async_trait]
impl ContentSource for HttpSource {
    fn kind(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(LoadError::Status(resp.status().as_u16()));
        }

        resp.text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))
    }
}

/// The static `content.json` read straight from disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

#[rocket::async_trait]
impl ContentSource for FileSource {
    fn kind(&self) -> &'static str {
        "file"
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        rocket::tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| LoadError::Io(format!("{}: {}", self.path.display(), e)))
    }
}

/// Resolves the content document. Never fails: any fetch or parse problem
/// is logged and the built-in document is returned instead.
pub struct ContentLoader {
    source: Box<dyn ContentSource>,
}

impl ContentLoader {
    pub fn new(source: Box<dyn ContentSource>) -> Self {
        ContentLoader { source }
    }

    /// HTTP when `content_url` is configured, otherwise the local file.
    pub fn from_config(cfg: &FolioConfig) -> Self {
        if let Some(url) = &cfg.content_url {
            let timeout = cfg.content_timeout_secs.map(Duration::from_secs);
            match HttpSource::new(url, timeout) {
                Ok(src) => return ContentLoader::new(Box::new(src)),
                Err(e) => warn!(
                    "Cannot use content_url {}: {}; reading {} instead",
                    url, e, cfg.content_path
                ),
            }
        }
        ContentLoader::new(Box::new(FileSource::new(&cfg.content_path)))
    }

    pub fn source_kind(&self) -> &'static str {
        self.source.kind()
    }

    /// Fetch and validate without substituting anything.
    pub async fn try_load(&self) -> Result<ContentDocument, LoadError> {
        let body = self.source.fetch().await?;
        ContentDocument::from_json(&body).map_err(|e| LoadError::Parse(e.to_string()))
    }

    pub async fn load(&self) -> ContentDocument {
        match self.try_load().await {
            Ok(doc) => {
                debug!("Loaded content document from {} source", self.source.kind());
                doc
            }
            Err(e) => {
                warn!("Content document unavailable ({}), using fallback data", e);
                fallback::document()
            }
        }
    }
}
