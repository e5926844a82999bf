/// Extension used when a URL path carries none.
pub const DEFAULT_AUDIO_EXTENSION: &str = ".wav";

pub const KNOWN_AUDIO_EXTENSIONS: [&str; 6] = [".mp3", ".wav", ".ogg", ".m4a", ".aac", ".flac"];

const ACCEPTED_DOWNLOAD_PREFIXES: [&str; 4] =
    ["audio/", "video/", "application/octet-stream", "binary/"];

/// Uploads must declare an `audio/*` content type.
pub fn is_audio_media_type(content_type: &str) -> bool {
    content_type
        .trim()
        .to_ascii_lowercase()
        .starts_with("audio/")
}

pub fn is_known_audio_extension(extension: &str) -> bool {
    let lowered = extension.to_ascii_lowercase();
    KNOWN_AUDIO_EXTENSIONS.contains(&lowered.as_str())
}

/// Whether a downloaded body looks like audio. Hosts often mislabel audio, so
/// a recognized extension is enough on its own.
pub fn is_acceptable_download(content_type: Option<&str>, extension: &str) -> bool {
    if is_known_audio_extension(extension) {
        return true;
    }

    content_type
        .map(|ct| ct.trim().to_ascii_lowercase())
        .is_some_and(|ct| {
            ACCEPTED_DOWNLOAD_PREFIXES
                .iter()
                .any(|prefix| ct.starts_with(prefix))
        })
}

/// Best-effort extension for an uploaded `audio/*` type without a filename.
pub fn extension_for_media_type(content_type: &str) -> &'static str {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.as_str() {
        "audio/mpeg" | "audio/mp3" => ".mp3",
        "audio/ogg" => ".ogg",
        "audio/mp4" | "audio/x-m4a" | "audio/m4a" => ".m4a",
        "audio/aac" => ".aac",
        "audio/flac" | "audio/x-flac" => ".flac",
        _ => DEFAULT_AUDIO_EXTENSION,
    }
}

/// Extension of a file name including the leading dot, if it has a usable one.
pub fn extension_of(file_name: &str) -> Option<String> {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext))
}
