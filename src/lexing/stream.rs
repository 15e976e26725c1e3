//! Token streams
//!
//! A [TokenStream] is the one-way channel between the scanner and its single consumer. It
//! is finite and cannot be restarted; after yielding an error it yields nothing else.
//!
//! Two backends exist:
//!
//! - `Lazy` runs the scanner inside `next()`, one token at a time.
//! - `Channel` runs the scanner on a dedicated thread feeding a bounded queue. The queue
//!   capacity only throttles the producer. Dropping the stream disconnects the queue and
//!   joins the thread, so no producer outlives its consumer.

use super::common::LexError;
use super::scanner::Scanner;
use crate::config::{ParsingConfig, StreamBackend};
use crate::token::Token;
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use tracing::{debug, trace};

pub struct TokenStream<'a> {
    backend: Backend<'a>,
    finished: bool,
}

enum Backend<'a> {
    Lazy(Scanner<'a>),
    Channel(ChannelReceiver),
}

struct ChannelReceiver {
    receiver: Option<Receiver<Result<Token, LexError>>>,
    producer: Option<JoinHandle<()>>,
}

impl<'a> TokenStream<'a> {
    /// A stream that scans on demand.
    pub fn new(source: &'a str) -> Self {
        Self {
            backend: Backend::Lazy(Scanner::new(source)),
            finished: false,
        }
    }

    /// Pick the backend named by the configuration.
    pub fn from_config(source: &'a str, config: &ParsingConfig) -> io::Result<Self> {
        match config.stream {
            StreamBackend::Lazy => Ok(Self::new(source)),
            StreamBackend::Channel => Self::spawn(source.to_owned(), config.channel_capacity),
        }
    }

    /// A stream whose scanner runs on its own thread behind a queue of `capacity` tokens.
    pub fn spawn(source: String, capacity: usize) -> io::Result<TokenStream<'static>> {
        let (sender, receiver) = mpsc::sync_channel(capacity);

        let producer = thread::Builder::new()
            .name("traindown-scanner".to_string())
            .spawn(move || {
                for item in Scanner::new(&source) {
                    if sender.send(item).is_err() {
                        trace!("token consumer went away, stopping scanner");
                        return;
                    }
                }
            })?;

        debug!(capacity, "spawned scanner thread");

        Ok(TokenStream {
            backend: Backend::Channel(ChannelReceiver {
                receiver: Some(receiver),
                producer: Some(producer),
            }),
            finished: false,
        })
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl ChannelReceiver {
    fn recv(&mut self) -> Option<Result<Token, LexError>> {
        let receiver = self.receiver.as_ref()?;
        match receiver.recv() {
            Ok(item) => Some(item),
            // The sender is gone: either the scan finished or the thread died.
            Err(_) => {
                self.receiver = None;
                match self.producer.take().map(JoinHandle::join) {
                    Some(Err(_)) => Some(Err(LexError::ProducerPanicked)),
                    _ => None,
                }
            }
        }
    }
}

impl Drop for ChannelReceiver {
    fn drop(&mut self) {
        // Disconnect first so a producer blocked on a full queue wakes up and exits.
        self.receiver.take();
        if let Some(producer) = self.producer.take() {
            let _ = producer.join();
        }
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let item = match &mut self.backend {
            Backend::Lazy(scanner) => scanner.next(),
            Backend::Channel(channel) => channel.recv(),
        };

        if !matches!(item, Some(Ok(_))) {
            self.finished = true;
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    const SOURCE: &str = "@ 2020-01-01\nsquat:\n  100 5r\n  110 3r\nbench:\n  60";

    fn values(stream: TokenStream<'_>) -> Vec<String> {
        stream
            .map(|r| r.expect("stream failed").to_string())
            .collect()
    }

    #[test]
    fn test_lazy_and_channel_agree() {
        let lazy = values(TokenStream::new(SOURCE));
        let channel = values(TokenStream::spawn(SOURCE.to_string(), 2).expect("spawn failed"));
        assert_eq!(lazy, channel);
        assert_eq!(lazy.len(), 8);
    }

    #[test]
    fn test_rendezvous_channel() {
        let stream = TokenStream::spawn(SOURCE.to_string(), 0).expect("spawn failed");
        assert_eq!(values(stream).len(), 8);
    }

    #[test]
    fn test_stream_is_fused_after_error() {
        let mut stream = TokenStream::new("squat:\n  100\n  ?");
        assert_eq!(stream.next().map(|r| r.map(|t| t.kind)), Some(Ok(TokenKind::Movement)));
        assert_eq!(stream.next().map(|r| r.map(|t| t.kind)), Some(Ok(TokenKind::Load)));
        assert!(matches!(stream.next(), Some(Err(LexError::UnexpectedCharacter { .. }))));
        assert!(stream.is_finished());
        assert_eq!(stream.next(), None);
    }

    #[test]
    fn test_channel_error_is_forwarded() {
        let mut stream = TokenStream::spawn("?".to_string(), 1).expect("spawn failed");
        assert!(matches!(stream.next(), Some(Err(LexError::UnexpectedCharacter { .. }))));
        assert_eq!(stream.next(), None);
    }

    #[test]
    fn test_dropping_channel_stream_early_stops_producer() {
        let source = "squat:\n".to_string() + &"  100 5r\n".repeat(1_000);
        let mut stream = TokenStream::spawn(source, 1).expect("spawn failed");
        assert!(stream.next().is_some());
        // Drop joins the producer; this would hang if it kept blocking on a full queue.
        drop(stream);
    }

    #[test]
    fn test_from_config_selects_backend() {
        let config = ParsingConfig {
            stream: StreamBackend::Channel,
            channel_capacity: 4,
        };
        let stream = TokenStream::from_config(SOURCE, &config).expect("spawn failed");
        assert!(matches!(stream.backend, Backend::Channel(_)));
        assert_eq!(values(stream).len(), 8);
    }
}
