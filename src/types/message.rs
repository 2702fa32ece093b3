use serde::{Deserialize, Serialize};

/// Who authored a message log entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The local user.
    User,

    /// The backend analyst.
    Bot,
}

/// One entry in the display log.
///
/// The log is ordered and append-only: entries are shown top to bottom in
/// insertion order and are never edited or removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageEntry {
    /// Who authored the entry.
    pub from: Sender,

    /// The entry text.
    pub text: String,
}

impl MessageEntry {
    /// Creates a new entry with the given sender and text.
    pub fn new(from: Sender, text: impl Into<String>) -> Self {
        Self {
            from,
            text: text.into(),
        }
    }

    /// Creates a new user entry.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    /// Creates a new bot entry.
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_wire_shape() {
        let entry = MessageEntry::user("Hello");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"from":"user","text":"Hello"}"#);
    }

    #[test]
    fn sender_round_trips_lowercase() {
        let entry: MessageEntry =
            serde_json::from_str(r#"{"from":"bot","text":"hi"}"#).unwrap();
        assert_eq!(entry, MessageEntry::bot("hi"));
    }
}
