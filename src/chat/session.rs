//! The chat screen and its message log.
//!
//! This module provides the `ChatSession` struct which owns the ordered,
//! append-only message log and drives the chat exchange with the backend.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::to_writer_pretty;

use crate::client::ChatApi;
use crate::error::{Error, Result};
use crate::observability::{CHAT_FALLBACKS, CHAT_TURNS};
use crate::render::Renderer;
use crate::types::MessageEntry;

/// Text of the seeded welcome entry.
pub const WELCOME_TEXT: &str = "Welcome! Ask me for a financial analysis.";

/// Fixed bot entry appended when a chat exchange fails for any reason.
pub const FALLBACK_TEXT: &str = "Server error.";

/// Outcome of one send attempt.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Input was empty or whitespace-only; nothing was appended or sent.
    Ignored,

    /// The backend replied and its reply was appended.
    Replied,

    /// The exchange failed and the fixed fallback entry was appended.
    Fallback,
}

/// A chat session owning the message log.
///
/// The log is seeded with one welcome entry and only ever grows: each
/// non-empty send appends exactly one user entry and, once the call
/// resolves, exactly one bot entry.
pub struct ChatSession<C: ChatApi> {
    client: C,
    messages: Vec<MessageEntry>,
    request_count: u64,
    fallback_count: u64,
}

/// Aggregated stats for a chat session.
#[derive(Debug, Clone)]
pub struct SessionStats {
    /// The number of entries in the message log, welcome included.
    pub message_count: usize,
    /// Total chat exchanges attempted.
    pub request_count: u64,
    /// Exchanges that resolved to the fallback entry.
    pub fallback_count: u64,
}

impl<C: ChatApi> ChatSession<C> {
    /// Creates a new session seeded with the welcome entry.
    pub fn new(client: C) -> Self {
        Self {
            client,
            messages: vec![MessageEntry::bot(WELCOME_TEXT)],
            request_count: 0,
            fallback_count: 0,
        }
    }

    /// Sends a user message through the backend.
    ///
    /// This method:
    /// 1. Ignores empty and whitespace-only input
    /// 2. Appends the user entry immediately (optimistic, unconditional)
    /// 3. Issues the chat call
    /// 4. Appends the reply, or the fixed fallback on any failure
    ///
    /// Failures never propagate to the caller; the worst case is the
    /// fallback entry, and the user recovers by sending another message.
    /// The appended bot entry is handed to the renderer.
    pub async fn send(&mut self, input: &str, renderer: &mut dyn Renderer) -> SendOutcome {
        if input.trim().is_empty() {
            return SendOutcome::Ignored;
        }

        self.messages.push(MessageEntry::user(input));
        self.request_count += 1;
        CHAT_TURNS.click();

        let (entry, outcome) = match self.client.chat(input).await {
            Ok(response) => (MessageEntry::bot(response.reply), SendOutcome::Replied),
            Err(_) => {
                self.fallback_count += 1;
                CHAT_FALLBACKS.click();
                (MessageEntry::bot(FALLBACK_TEXT), SendOutcome::Fallback)
            }
        };

        renderer.message(&entry);
        self.messages.push(entry);
        outcome
    }

    /// Returns the message log in display order.
    pub fn messages(&self) -> &[MessageEntry] {
        &self.messages
    }

    /// Returns the number of entries in the message log.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Saves the message log to the specified path.
    pub fn save_transcript_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let transcript = TranscriptFile::new(&self.messages);
        let file = File::create(path.as_ref())
            .map_err(|err| Error::io("failed to create transcript file", err))?;
        let writer = BufWriter::new(file);
        to_writer_pretty(writer, &transcript).map_err(|err| {
            Error::serialization("failed to serialize transcript", Some(Box::new(err)))
        })
    }

    /// Returns the current session statistics snapshot.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            message_count: self.message_count(),
            request_count: self.request_count,
            fallback_count: self.fallback_count,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct TranscriptFile {
    version: u8,
    messages: Vec<MessageEntry>,
}

impl TranscriptFile {
    fn new(messages: &[MessageEntry]) -> Self {
        Self {
            version: 1,
            messages: messages.to_vec(),
        }
    }
}
