use crate::speech::{SpeechError, SpeechRecognizer, Utterance};
use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::sync::{mpsc, Mutex};

/// Recognizer fed by transcript lines from another task (stdin, a socket,
/// an external transcription service).
pub struct ChannelRecognizer {
    rx: Mutex<mpsc::Receiver<String>>,
}

impl ChannelRecognizer {
    pub fn new(rx: mpsc::Receiver<String>) -> Self {
        Self { rx: Mutex::new(rx) }
    }

    pub fn channel(capacity: usize) -> (mpsc::Sender<String>, Self) {
        let (tx, rx) = mpsc::channel(capacity);
        (tx, Self::new(rx))
    }
}

impl SpeechRecognizer for ChannelRecognizer {
    fn listen(&self) -> BoxFuture<'_, Result<Utterance, SpeechError>> {
        async move {
            let mut rx = self
                .rx
                .try_lock()
                .map_err(|_| SpeechError::AlreadyListening)?;
            let line = rx.recv().await.ok_or(SpeechError::Closed)?;
            let utterance = Utterance::parse_line(&line);
            if utterance.is_empty() {
                tracing::debug!("blank transcript line");
                return Err(SpeechError::NoSpeech);
            }
            Ok(utterance)
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lines_become_utterances() {
        let (tx, rec) = ChannelRecognizer::channel(4);
        tx.send("코끼리 | 코기리".to_owned()).await.unwrap();
        tx.send("   ".to_owned()).await.unwrap();
        drop(tx);

        let u = rec.listen().await.unwrap();
        assert_eq!(u.transcripts().collect::<Vec<_>>(), vec!["코끼리", "코기리"]);
        assert_eq!(rec.listen().await.unwrap_err(), SpeechError::NoSpeech);
        assert_eq!(rec.listen().await.unwrap_err(), SpeechError::Closed);
    }

    #[tokio::test]
    async fn second_listener_is_turned_away() {
        let (tx, rec) = ChannelRecognizer::channel(1);
        let mut first = rec.listen();
        assert!((&mut first).now_or_never().is_none());

        let err = rec.listen().await.unwrap_err();
        assert_eq!(err, SpeechError::AlreadyListening);
        assert!(err.is_retryable());

        tx.send("토끼".to_owned()).await.unwrap();
        let u = first.await.unwrap();
        assert_eq!(u.top().unwrap().transcript, "토끼");
        assert!(rec.listen().now_or_never().is_none());
    }
}
