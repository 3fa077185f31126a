use crate::speech::{SpeechError, SpeechRecognizer, Utterance};
use futures::future::BoxFuture;
use futures::FutureExt;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays a fixed list of recognition results, then reports [`SpeechError::Closed`].
#[derive(Debug, Default)]
pub struct ScriptedRecognizer {
    script: Mutex<VecDeque<Result<Utterance, SpeechError>>>,
}

impl ScriptedRecognizer {
    pub fn new<I>(script: I) -> Self
    where
        I: IntoIterator<Item = Result<Utterance, SpeechError>>,
    {
        Self {
            script: Mutex::new(script.into_iter().collect()),
        }
    }

    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::new(lines.into_iter().map(|l| Ok(Utterance::parse_line(l))))
    }

    pub fn remaining(&self) -> usize {
        self.script.lock().map(|q| q.len()).unwrap_or(0)
    }
}

impl SpeechRecognizer for ScriptedRecognizer {
    fn listen(&self) -> BoxFuture<'_, Result<Utterance, SpeechError>> {
        async move {
            let next = match self.script.lock() {
                Ok(mut q) => q.pop_front(),
                Err(_) => None,
            };
            next.unwrap_or(Err(SpeechError::Closed))
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_script_then_closes() {
        let rec = ScriptedRecognizer::new([
            Ok(Utterance::single("토끼")),
            Err(SpeechError::NoSpeech),
        ]);
        assert_eq!(rec.remaining(), 2);

        let first = futures::executor::block_on(rec.listen()).unwrap();
        assert_eq!(first.top().unwrap().transcript, "토끼");
        let second = futures::executor::block_on(rec.listen()).unwrap_err();
        assert_eq!(second, SpeechError::NoSpeech);
        let third = futures::executor::block_on(rec.listen()).unwrap_err();
        assert_eq!(third, SpeechError::Closed);
    }

    #[test]
    fn from_lines_parses_alternatives() {
        let rec = ScriptedRecognizer::from_lines(["a | b"]);
        let u = futures::executor::block_on(rec.listen()).unwrap();
        assert_eq!(u.alternatives.len(), 2);
    }
}
