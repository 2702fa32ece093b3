// Public modules
pub mod chat;
pub mod login;
pub mod message;

// Re-exports
pub use chat::{ChatRequest, ChatResponse};
pub use login::{LoginRequest, LoginResponse};
pub use message::{MessageEntry, Sender};
