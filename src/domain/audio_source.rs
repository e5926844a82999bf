use bytes::Bytes;

#[derive(Debug, Clone, PartialEq)]
pub struct AudioUpload {
    pub bytes: Bytes,
    pub declared_content_type: String,
    pub filename: Option<String>,
}

/// Where the audio for one analysis request comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioSource {
    Upload(AudioUpload),
    RemoteUrl(String),
}

impl AudioSource {
    /// Picks the source from the optional request parts. An upload wins over a
    /// URL; a blank URL counts as absent.
    pub fn select(upload: Option<AudioUpload>, url: Option<String>) -> Option<Self> {
        if let Some(upload) = upload {
            return Some(Self::Upload(upload));
        }

        url.map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .map(Self::RemoteUrl)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Upload(_) => "upload",
            Self::RemoteUrl(_) => "remote_url",
        }
    }
}
