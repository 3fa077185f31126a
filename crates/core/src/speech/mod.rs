mod channel;
mod scripted;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

pub use channel::ChannelRecognizer;
pub use scripted::ScriptedRecognizer;

/// Separator between ranked alternatives in a typed transcript line.
pub const ALTERNATIVE_SEPARATOR: char = '|';

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Alternative {
    pub transcript: String,
    pub confidence: Option<f32>,
}

impl Alternative {
    pub fn new<S: Into<String>>(transcript: S) -> Self {
        Self {
            transcript: transcript.into(),
            confidence: None,
        }
    }
}

/// A final recognition result: alternatives ranked best first.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Utterance {
    pub alternatives: Vec<Alternative>,
}

impl Utterance {
    pub fn single<S: Into<String>>(transcript: S) -> Self {
        Self {
            alternatives: vec![Alternative::new(transcript)],
        }
    }

    /// Parses `"first | second | third"` into ranked alternatives, dropping
    /// blank entries.
    pub fn parse_line(line: &str) -> Self {
        let alternatives = line
            .split(ALTERNATIVE_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Alternative::new)
            .collect();
        Self { alternatives }
    }

    pub fn top(&self) -> Option<&Alternative> {
        self.alternatives.first()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    pub fn transcripts(&self) -> impl Iterator<Item = &str> {
        self.alternatives.iter().map(|a| a.transcript.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SpeechError {
    #[error("no speech was detected")]
    NoSpeech,
    #[error("microphone is unavailable")]
    AudioCapture,
    #[error("microphone permission was denied")]
    NotAllowed,
    #[error("network error during recognition")]
    Network,
    #[error("speech recognition is not supported")]
    Unsupported,
    #[error("already listening")]
    AlreadyListening,
    #[error("transcript source closed")]
    Closed,
}

impl SpeechError {
    /// Maps a recognizer error code (`"no-speech"`, `"not-allowed"`, ...) to
    /// the taxonomy; unknown codes are reported as network failures.
    pub fn from_code(code: &str) -> Self {
        match code {
            "no-speech" => Self::NoSpeech,
            "audio-capture" => Self::AudioCapture,
            "not-allowed" | "service-not-allowed" => Self::NotAllowed,
            "not-supported" => Self::Unsupported,
            _ => Self::Network,
        }
    }

    /// Whether the player can simply try speaking again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::NoSpeech | Self::Network | Self::AlreadyListening)
    }
}

pub trait SpeechRecognizer: Send + Sync {
    fn listen(&self) -> BoxFuture<'_, Result<Utterance, SpeechError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_keeps_rank_order() {
        let u = Utterance::parse_line(" 코기리 | 코끼리 ||  ");
        assert_eq!(u.transcripts().collect::<Vec<_>>(), vec!["코기리", "코끼리"]);
        assert_eq!(u.top().map(|a| a.transcript.as_str()), Some("코기리"));
    }

    #[test]
    fn blank_line_is_empty() {
        assert!(Utterance::parse_line("   ").is_empty());
        assert!(Utterance::default().top().is_none());
    }

    #[test]
    fn error_codes_map_to_taxonomy() {
        assert_eq!(SpeechError::from_code("no-speech"), SpeechError::NoSpeech);
        assert_eq!(SpeechError::from_code("audio-capture"), SpeechError::AudioCapture);
        assert_eq!(SpeechError::from_code("not-allowed"), SpeechError::NotAllowed);
        assert_eq!(SpeechError::from_code("network"), SpeechError::Network);
        assert!(SpeechError::NoSpeech.is_retryable());
        assert!(!SpeechError::NotAllowed.is_retryable());
        assert_eq!(SpeechError::NotAllowed.to_string(), "microphone permission was denied");
    }
}
