#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub speaker_label: String,
    pub text: String,
}

impl Utterance {
    pub fn new(speaker_label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker_label: speaker_label.into(),
            text: text.into(),
        }
    }
}
