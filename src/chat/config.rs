//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `arrrg` and configuration
//! structures for controlling client behavior.

use std::path::PathBuf;

use arrrg_derive::CommandLine;

/// Default backend base address.
const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

/// Command-line arguments for the finsight-chat tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Backend base URL.
    #[arrrg(optional, "Backend base URL (default: http://localhost:8000/)", "URL")]
    pub base_url: Option<String>,

    /// Path of the session token file.
    #[arrrg(optional, "Token file path (default: ~/.finsight/token)", "PATH")]
    pub token_file: Option<String>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,

    /// Ignore any saved token and prompt for login.
    #[arrrg(flag, "Ignore any saved token and prompt for login")]
    pub fresh_login: bool,
}

/// Configuration for the chat client.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// The backend base URL.
    pub base_url: String,

    /// Where the session token is persisted.
    pub token_path: PathBuf,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,

    /// Whether to ignore a saved token and run the login screen anyway.
    pub fresh_login: bool,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    ///
    /// Defaults:
    /// - Base URL: http://localhost:8000/
    /// - Token file: ~/.finsight/token
    /// - Color: enabled
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token_path: default_token_path(),
            use_color: true,
            fresh_login: false,
        }
    }

    /// Sets the backend base URL.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Sets the token file path.
    pub fn with_token_path(mut self, path: PathBuf) -> Self {
        self.token_path = path;
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    /// Forces the login screen even when a token is saved.
    pub fn with_fresh_login(mut self) -> Self {
        self.fresh_login = true;
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        ChatConfig {
            base_url: args.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            token_path: args
                .token_file
                .map(PathBuf::from)
                .unwrap_or_else(default_token_path),
            use_color: !args.no_color,
            fresh_login: args.fresh_login,
        }
    }
}

/// Returns the default token file location, `~/.finsight/token`.
///
/// Falls back to a path relative to the working directory when `HOME` is
/// unset.
fn default_token_path() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".finsight").join("token"),
        None => PathBuf::from(".finsight").join("token"),
    }
}
