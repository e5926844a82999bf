use callsight::domain::media_type::{
    extension_for_media_type, extension_of, is_acceptable_download, is_audio_media_type,
    is_known_audio_extension,
};

#[test]
fn given_audio_content_types_when_checking_upload_then_accepted() {
    for ct in ["audio/wav", "audio/mpeg", "Audio/X-M4A", " audio/ogg; codecs=opus"] {
        assert!(is_audio_media_type(ct), "{ct} should be audio");
    }
}

#[test]
fn given_non_audio_content_types_when_checking_upload_then_rejected() {
    for ct in ["", "video/mp4", "application/octet-stream", "text/plain", "audio"] {
        assert!(!is_audio_media_type(ct), "{ct:?} should not be audio");
    }
}

#[test]
fn given_known_extension_when_content_type_is_html_then_download_is_acceptable() {
    assert!(is_acceptable_download(Some("text/html"), ".mp3"));
    assert!(is_acceptable_download(None, ".FLAC"));
}

#[test]
fn given_unknown_extension_when_content_type_is_permitted_then_download_is_acceptable() {
    for ct in ["audio/wav", "video/webm", "application/octet-stream", "binary/octet-stream"] {
        assert!(is_acceptable_download(Some(ct), ".bin"), "{ct} should pass");
    }
}

#[test]
fn given_unknown_extension_and_html_when_checking_download_then_not_acceptable() {
    assert!(!is_acceptable_download(Some("text/html; charset=utf-8"), ".php"));
    assert!(!is_acceptable_download(None, ".php"));
}

#[test]
fn given_allow_list_when_checking_then_all_six_extensions_are_known() {
    for ext in [".mp3", ".wav", ".ogg", ".m4a", ".aac", ".flac"] {
        assert!(is_known_audio_extension(ext));
    }
    assert!(!is_known_audio_extension(".webm"));
}

#[test]
fn given_media_types_when_mapping_to_extension_then_falls_back_to_wav() {
    assert_eq!(extension_for_media_type("audio/mpeg"), ".mp3");
    assert_eq!(extension_for_media_type("audio/x-m4a"), ".m4a");
    assert_eq!(extension_for_media_type("audio/unknown"), ".wav");
}

#[test]
fn given_file_names_when_extracting_extension_then_includes_dot() {
    assert_eq!(extension_of("call.mp3").as_deref(), Some(".mp3"));
    assert_eq!(extension_of("call"), None);
    assert_eq!(extension_of("call."), None);
}
