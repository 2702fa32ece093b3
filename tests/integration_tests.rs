//! Integration tests for the finsight library.
//! These tests require a running backend and credentials in the environment.

#[cfg(test)]
mod tests {
    use finsight::chat::{ChatSession, LoginScreen, Renderer, SendOutcome, WELCOME_TEXT};
    use finsight::{ChatApi, Finsight, MessageEntry, TokenStore};

    struct NullRenderer;

    impl Renderer for NullRenderer {
        fn message(&mut self, _entry: &MessageEntry) {}
        fn print_info(&mut self, _text: &str) {}
        fn print_error(&mut self, _text: &str) {}
    }

    fn live_backend() -> Option<(String, String, String)> {
        let base_url = std::env::var("FINSIGHT_BASE_URL").ok()?;
        let username = std::env::var("FINSIGHT_TEST_USERNAME").ok()?;
        let password = std::env::var("FINSIGHT_TEST_PASSWORD").ok()?;
        Some((base_url, username, password))
    }

    fn scratch_tokens(name: &str) -> TokenStore {
        let mut path = std::env::temp_dir();
        path.push(format!("finsight-it-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_file(&path);
        TokenStore::open(path)
    }

    #[tokio::test]
    async fn test_login_stores_token() {
        let Some((base_url, username, password)) = live_backend() else {
            eprintln!("Skipping test: FINSIGHT_BASE_URL / credentials not set");
            return;
        };

        let tokens = scratch_tokens("login");
        let client = Finsight::with_options(tokens.clone(), Some(base_url), None)
            .expect("Failed to create client");

        let mut screen = LoginScreen::new();
        let authenticated = screen.submit(&client, &tokens, &username, &password).await;

        assert!(authenticated, "login should succeed with valid credentials");
        assert!(tokens.has(), "token should be persisted after login");
        let _ = std::fs::remove_file(tokens.path());
    }

    #[tokio::test]
    async fn test_chat_round_trip() {
        let Some((base_url, username, password)) = live_backend() else {
            eprintln!("Skipping test: FINSIGHT_BASE_URL / credentials not set");
            return;
        };

        let tokens = scratch_tokens("chat");
        let client = Finsight::with_options(tokens.clone(), Some(base_url), None)
            .expect("Failed to create client");
        client
            .login(&username, &password)
            .await
            .map(|resp| tokens.set(&resp.access_token))
            .expect("login should succeed")
            .expect("token should persist");

        let mut session = ChatSession::new(client);
        assert_eq!(session.messages(), &[MessageEntry::bot(WELCOME_TEXT)]);

        let outcome = session.send("Hello", &mut NullRenderer).await;
        assert_eq!(outcome, SendOutcome::Replied, "chat should succeed");
        assert_eq!(session.message_count(), 3);
        let _ = std::fs::remove_file(tokens.path());
    }

    #[tokio::test]
    async fn test_bad_credentials_rejected() {
        let Some((base_url, _, _)) = live_backend() else {
            eprintln!("Skipping test: FINSIGHT_BASE_URL not set");
            return;
        };

        let tokens = scratch_tokens("badcreds");
        let client = Finsight::with_options(tokens.clone(), Some(base_url), None)
            .expect("Failed to create client");

        let result = client.login("nobody", "wrong-password").await;
        assert!(result.is_err(), "login with bad credentials should fail");
        assert!(result.unwrap_err().is_authentication());
        assert!(!tokens.has());
    }
}
