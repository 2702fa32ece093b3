use serde::{Deserialize, Serialize};

/// Request body for the `/chat` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    /// The user's message text, sent as typed.
    pub message: String,
}

impl ChatRequest {
    /// Creates a new chat request.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Successful response body from the `/chat` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    /// The backend's analysis reply.
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_wire_shape() {
        let req = ChatRequest::new("analyze AAPL");
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"message":"analyze AAPL"}"#);
    }

    #[test]
    fn chat_response_parses() {
        let resp: ChatResponse = serde_json::from_str(r#"{"reply":"Looks bullish."}"#).unwrap();
        assert_eq!(resp.reply, "Looks bullish.");
    }
}
