use callsight::domain::{SourceUrl, SourceUrlError};

#[test]
fn given_github_blob_url_when_parsing_then_rewritten_to_raw_content() {
    let url = SourceUrl::parse("https://github.com/org/repo/blob/main/call.wav").unwrap();

    assert_eq!(
        url.as_str(),
        "https://raw.githubusercontent.com/org/repo/main/call.wav"
    );
    assert!(!url.as_str().contains("/blob/"));
    assert_eq!(url.as_url().host_str(), Some("raw.githubusercontent.com"));
}

#[test]
fn given_github_blob_url_with_query_when_parsing_then_query_is_kept() {
    let url = SourceUrl::parse("https://github.com/org/repo/blob/v1/a.mp3?raw=true").unwrap();

    assert_eq!(
        url.as_str(),
        "https://raw.githubusercontent.com/org/repo/v1/a.mp3?raw=true"
    );
}

#[test]
fn given_non_github_url_when_parsing_then_left_unchanged() {
    let url = SourceUrl::parse("https://cdn.example.com/blob/main/call.wav").unwrap();

    assert_eq!(url.as_str(), "https://cdn.example.com/blob/main/call.wav");
}

#[test]
fn given_url_with_audio_extension_when_deriving_extension_then_matches_path() {
    for (raw, expected) in [
        ("https://x.io/a/b/call.mp3", ".mp3"),
        ("https://x.io/call.flac?sig=abc", ".flac"),
        ("https://x.io/call.m4a#t=10", ".m4a"),
    ] {
        assert_eq!(SourceUrl::parse(raw).unwrap().extension(), expected, "{raw}");
    }
}

#[test]
fn given_url_without_extension_when_deriving_extension_then_defaults_to_wav() {
    for raw in ["https://x.io/stream", "https://x.io/", "https://x.io"] {
        assert_eq!(SourceUrl::parse(raw).unwrap().extension(), ".wav", "{raw}");
    }
}

#[test]
fn given_garbage_when_parsing_then_invalid() {
    assert!(matches!(
        SourceUrl::parse("not a url"),
        Err(SourceUrlError::Invalid(_))
    ));
}

#[test]
fn given_non_http_scheme_when_parsing_then_rejected() {
    assert!(matches!(
        SourceUrl::parse("file:///etc/passwd"),
        Err(SourceUrlError::UnsupportedScheme(s)) if s == "file"
    ));
}
