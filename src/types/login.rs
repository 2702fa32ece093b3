use serde::{Deserialize, Serialize};

/// Request body for the `/login` endpoint.
///
/// Credentials are transient: this struct is built at submit time and
/// dropped once the call resolves, success or failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The account username.
    pub username: String,

    /// The account password.
    pub password: String,
}

impl LoginRequest {
    /// Creates a new login request from a credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Successful response body from the `/login` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// The opaque session token issued by the backend.
    ///
    /// The client does not inspect or validate it; it is stored verbatim
    /// and replayed as a bearer credential.
    pub access_token: String,
}
