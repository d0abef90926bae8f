use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use crate::config::Config;
use crate::error::{LottoError, Result};
use crate::utils::draw_slug;

/// Supplies the raw result page for a draw date.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch_document(&self, draw_date: NaiveDate) -> Result<String>;
}

/// `{base}/{DDMM<BE year>}/`, the source site's per-draw page.
pub fn draw_url(base_url: &str, draw_date: NaiveDate) -> String {
    format!("{}/{}/", base_url.trim_end_matches('/'), draw_slug(draw_date))
}

/// Fetches result pages from news.sanook.com.
#[derive(Debug, Clone)]
pub struct SanookFetcher {
    client: reqwest::Client,
    base_url: String,
    overrides: HashMap<NaiveDate, String>,
}

impl SanookFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(LottoError::Client)?;

        Ok(Self {
            client,
            base_url: config.source_base_url.clone(),
            overrides: config.url_overrides.clone(),
        })
    }

    pub fn url_for(&self, draw_date: NaiveDate) -> String {
        self.overrides
            .get(&draw_date)
            .cloned()
            .unwrap_or_else(|| draw_url(&self.base_url, draw_date))
    }
}

#[async_trait]
impl DocumentSource for SanookFetcher {
    fn name(&self) -> &'static str {
        "sanook"
    }

    async fn fetch_document(&self, draw_date: NaiveDate) -> Result<String> {
        let url = self.url_for(draw_date);
        debug!(%url, "fetching draw page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| LottoError::Fetch {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LottoError::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| LottoError::Fetch { url, source })
    }
}

/// Reads previously saved pages named `<DDMM<BE year>>.html` from a directory.
#[derive(Debug, Clone)]
pub struct FileDocumentSource {
    dir: PathBuf,
}

impl FileDocumentSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, draw_date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}.html", draw_slug(draw_date)))
    }
}

#[async_trait]
impl DocumentSource for FileDocumentSource {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn fetch_document(&self, draw_date: NaiveDate) -> Result<String> {
        let path = self.path_for(draw_date);
        debug!(path = %path.display(), "reading saved draw page");
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| LottoError::Io {
                path: path.display().to_string(),
                source,
            })
    }
}
