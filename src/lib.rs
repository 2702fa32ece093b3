// Public modules
pub mod chat;
pub mod client;
pub mod error;
pub mod render;
pub mod token;
pub mod types;

mod observability;

// Re-exports
pub use client::{ChatApi, Finsight};
pub use error::{Error, Result};
pub use observability::register_biometrics;
pub use render::{PlainTextRenderer, Renderer};
pub use token::TokenStore;
pub use types::*;
