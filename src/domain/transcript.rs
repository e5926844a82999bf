use std::fmt::Write;

use super::utterance::Utterance;

/// Speaker-attributed utterances in the order the provider returned them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transcript {
    utterances: Vec<Utterance>,
}

impl Transcript {
    pub fn new(utterances: Vec<Utterance>) -> Self {
        Self { utterances }
    }

    pub fn utterances(&self) -> &[Utterance] {
        &self.utterances
    }

    pub fn len(&self) -> usize {
        self.utterances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utterances.is_empty()
    }

    /// One `Speaker {label}: {text}` line per utterance, each ending in `\n`.
    /// Line breaks inside an utterance are folded into single spaces.
    pub fn render(&self) -> String {
        let mut rendered = String::new();
        for utterance in &self.utterances {
            // Writing into a String cannot fail.
            let _ = writeln!(
                rendered,
                "Speaker {}: {}",
                utterance.speaker_label,
                single_line(&utterance.text)
            );
        }
        rendered
    }
}

fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
