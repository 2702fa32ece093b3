//! The login screen state machine.
//!
//! The only transition in the application: {unauthenticated} ->
//! {authenticated}, driven by a successful credential exchange. There is no
//! transition back; the screen never logs out.

use crate::client::ChatApi;
use crate::observability::{LOGIN_ATTEMPTS, LOGIN_FAILURES};
use crate::token::TokenStore;

/// Fixed inline message shown for every login failure.
///
/// Bad credentials, network failure, and server errors are deliberately not
/// distinguished; the user recovers by resubmitting.
pub const LOGIN_ERROR_TEXT: &str = "Invalid username or password";

/// State for the login screen.
pub struct LoginScreen {
    error: Option<String>,
    authenticated: bool,
}

impl LoginScreen {
    /// Creates a fresh, unauthenticated login screen.
    pub fn new() -> Self {
        Self {
            error: None,
            authenticated: false,
        }
    }

    /// Returns the inline error from the last failed submit, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns true once a submit has succeeded.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Submits a credential pair.
    ///
    /// Clears any previous error first. On success the returned token is
    /// persisted and the screen becomes authenticated. On any failure,
    /// including a failure to persist the token, the fixed error text is
    /// recorded and the screen stays unauthenticated.
    ///
    /// Returns the authenticated flag. The credentials are dropped when the
    /// call resolves either way.
    pub async fn submit<C: ChatApi>(
        &mut self,
        client: &C,
        tokens: &TokenStore,
        username: &str,
        password: &str,
    ) -> bool {
        self.error = None;
        LOGIN_ATTEMPTS.click();

        let outcome = match client.login(username, password).await {
            Ok(response) => tokens.set(&response.access_token),
            Err(err) => Err(err),
        };

        match outcome {
            Ok(()) => {
                self.authenticated = true;
            }
            Err(_) => {
                LOGIN_FAILURES.click();
                self.error = Some(LOGIN_ERROR_TEXT.to_string());
            }
        }
        self.authenticated
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::types::{ChatResponse, LoginResponse};

    struct StubApi {
        token: Result<String>,
    }

    #[async_trait::async_trait]
    impl ChatApi for StubApi {
        async fn login(&self, _username: &str, _password: &str) -> Result<LoginResponse> {
            self.token
                .clone()
                .map(|access_token| LoginResponse { access_token })
        }

        async fn chat(&self, _message: &str) -> Result<ChatResponse> {
            Err(Error::internal_server("not under test", None))
        }
    }

    fn scratch_tokens(name: &str) -> TokenStore {
        let mut path = std::env::temp_dir();
        path.push(format!("finsight-login-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_file(&path);
        TokenStore::open(path)
    }

    #[tokio::test]
    async fn successful_login_persists_token_and_authenticates() {
        let api = StubApi {
            token: Ok("issued-token".to_string()),
        };
        let tokens = scratch_tokens("success");
        let mut screen = LoginScreen::new();

        assert!(!screen.is_authenticated());
        let authenticated = screen.submit(&api, &tokens, "user", "pwd").await;

        assert!(authenticated);
        assert!(screen.is_authenticated());
        assert!(screen.error().is_none());
        assert_eq!(tokens.get().unwrap().as_deref(), Some("issued-token"));
        let _ = std::fs::remove_file(tokens.path());
    }

    #[tokio::test]
    async fn failed_login_sets_fixed_error_and_stores_nothing() {
        let api = StubApi {
            token: Err(Error::authentication("401 from backend")),
        };
        let tokens = scratch_tokens("failure");
        let mut screen = LoginScreen::new();

        let authenticated = screen.submit(&api, &tokens, "user", "wrong").await;

        assert!(!authenticated);
        assert!(!screen.is_authenticated());
        assert_eq!(screen.error(), Some(LOGIN_ERROR_TEXT));
        assert_eq!(tokens.get().unwrap(), None);
        let _ = std::fs::remove_file(tokens.path());
    }

    #[tokio::test]
    async fn resubmit_clears_previous_error() {
        let tokens = scratch_tokens("resubmit");
        let mut screen = LoginScreen::new();

        let failing = StubApi {
            token: Err(Error::connection("refused", None)),
        };
        screen.submit(&failing, &tokens, "user", "pwd").await;
        assert_eq!(screen.error(), Some(LOGIN_ERROR_TEXT));

        let succeeding = StubApi {
            token: Ok("second-try".to_string()),
        };
        let authenticated = screen.submit(&succeeding, &tokens, "user", "pwd").await;
        assert!(authenticated);
        assert!(screen.error().is_none());
        let _ = std::fs::remove_file(tokens.path());
    }
}
