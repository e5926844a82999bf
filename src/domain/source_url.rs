use std::fmt;

use url::Url;

use super::media_type::{DEFAULT_AUDIO_EXTENSION, extension_of};

const BLOB_VIEW_HOSTS: [&str; 2] = ["github.com", "www.github.com"];
const RAW_CONTENT_HOST: &str = "raw.githubusercontent.com";

/// A remote audio location, normalized so that fetching it yields raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUrl(Url);

#[derive(Debug, thiserror::Error)]
pub enum SourceUrlError {
    #[error("invalid url: {0}")]
    Invalid(#[from] url::ParseError),
    #[error("unsupported url scheme: {0}")]
    UnsupportedScheme(String),
}

impl SourceUrl {
    pub fn parse(raw: &str) -> Result<Self, SourceUrlError> {
        let url = Url::parse(raw.trim())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SourceUrlError::UnsupportedScheme(url.scheme().to_string()));
        }
        Ok(Self(rewrite_blob_view(url)))
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Extension of the last path segment, `.wav` when there is none.
    pub fn extension(&self) -> String {
        self.0
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .and_then(extension_of)
            .unwrap_or_else(|| DEFAULT_AUDIO_EXTENSION.to_string())
    }
}

impl fmt::Display for SourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// `github.com/<org>/<repo>/blob/<ref>/<path>` serves an HTML viewer; the same
/// file lives at `raw.githubusercontent.com/<org>/<repo>/<ref>/<path>`.
fn rewrite_blob_view(url: Url) -> Url {
    let is_blob_host = url
        .host_str()
        .is_some_and(|host| BLOB_VIEW_HOSTS.contains(&host));
    if !is_blob_host {
        return url;
    }

    let segments: Vec<String> = url
        .path_segments()
        .map(|segments| segments.map(str::to_string).collect())
        .unwrap_or_default();
    if segments.len() < 5 || segments[2] != "blob" {
        return url;
    }

    let raw_path = segments
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != 2)
        .map(|(_, segment)| segment.as_str())
        .collect::<Vec<_>>()
        .join("/");

    let mut rewritten = url.clone();
    if rewritten.set_host(Some(RAW_CONTENT_HOST)).is_err() {
        return url;
    }
    rewritten.set_path(&raw_path);
    rewritten
}
