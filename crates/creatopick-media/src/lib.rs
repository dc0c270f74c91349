//! Local image materialization: fan out downloads, fall back to the remote
//! URL per image, and support a manual cache wipe.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Extensions the image cache will write and later delete
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("image fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("image fetch returned HTTP {code}")]
    Status { code: u16 },

    #[error("image cache I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome for one URL. Always carries the remote URL; the local path is
/// present only when the download landed on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadResult {
    pub url: String,
    pub local_path: Option<PathBuf>,
    pub error: Option<String>,
}

impl DownloadResult {
    /// Local file when downloaded, remote URL otherwise
    pub fn reference(&self) -> String {
        match &self.local_path {
            Some(path) => path.to_string_lossy().into_owned(),
            None => self.url.clone(),
        }
    }
}

/// Extension drawn from the URL path, restricted to the allow-list
pub fn extension_for(url: &str) -> &'static str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let lower = path.to_ascii_lowercase();
    ALLOWED_EXTENSIONS
        .iter()
        .find(|ext| lower.ends_with(&format!(".{ext}")))
        .copied()
        .unwrap_or("jpg")
}

/// Stable cache file name for a URL
pub fn file_name_for(url: &str) -> String {
    format!("{:x}.{}", md5::compute(url), extension_for(url))
}

pub struct ImageStore {
    dir: PathBuf,
    client: reqwest::Client,
}

impl ImageStore {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            client: reqwest::Client::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Download every URL concurrently. The output holds exactly one result
    /// per input URL, in input order; failures keep the remote reference.
    pub async fn materialize(&self, urls: &[String]) -> Vec<DownloadResult> {
        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            warn!(dir = %self.dir.display(), error = %e, "cannot create image directory");
        }

        let mut handles = Vec::with_capacity(urls.len());
        for url in urls {
            let client = self.client.clone();
            let dir = self.dir.clone();
            let url = url.clone();
            handles.push(tokio::spawn(download_one(client, dir, url)));
        }

        let mut results = Vec::with_capacity(handles.len());
        for (handle, url) in handles.into_iter().zip(urls) {
            match handle.await {
                Ok(result) => results.push(result),
                Err(e) => results.push(DownloadResult {
                    url: url.clone(),
                    local_path: None,
                    error: Some(e.to_string()),
                }),
            }
        }

        let downloaded = results.iter().filter(|r| r.local_path.is_some()).count();
        debug!(total = results.len(), downloaded, "materialize finished");
        results
    }

    /// Delete every allow-listed image file; returns the number removed
    pub fn clear(&self) -> Result<usize, MediaError> {
        if !self.dir.exists() {
            return Ok(0);
        }

        let mut removed = 0;
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            let allowed = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.to_ascii_lowercase())
                .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()));
            if allowed {
                std::fs::remove_file(&path)?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}

async fn download_one(client: reqwest::Client, dir: PathBuf, url: String) -> DownloadResult {
    match fetch_bytes(&client, &url).await {
        Ok(bytes) => {
            let path = dir.join(file_name_for(&url));
            match std::fs::write(&path, &bytes) {
                Ok(()) => DownloadResult {
                    url,
                    local_path: Some(path),
                    error: None,
                },
                Err(e) => DownloadResult {
                    url,
                    local_path: None,
                    error: Some(e.to_string()),
                },
            }
        }
        Err(e) => {
            debug!(%url, error = %e, "image download failed; keeping remote reference");
            DownloadResult {
                url,
                local_path: None,
                error: Some(e.to_string()),
            }
        }
    }
}

async fn fetch_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, MediaError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(MediaError::Status {
            code: status.as_u16(),
        });
    }
    Ok(response.bytes().await?.to_vec())
}
