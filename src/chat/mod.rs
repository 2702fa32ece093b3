//! Chat application module for the Finsight terminal client.
//!
//! This module provides the two screens of the application and their
//! supporting pieces:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`login`]: the login screen state machine
//! - [`session`]: the chat screen and its message log
//! - [`commands`]: slash command parsing

mod commands;
mod config;
mod login;
mod session;

pub use crate::render::{PlainTextRenderer, Renderer};
pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatConfig};
pub use login::{LOGIN_ERROR_TEXT, LoginScreen};
pub use session::{ChatSession, FALLBACK_TEXT, SendOutcome, SessionStats, WELCOME_TEXT};
