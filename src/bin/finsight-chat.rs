//! Interactive terminal client for the Finsight financial-analysis service.
//!
//! This binary renders the two screens of the application: a login prompt
//! that exchanges credentials for a session token, and a chat REPL backed
//! by the remote analysis endpoint.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage against the default backend
//! finsight-chat
//!
//! # Point at another backend
//! finsight-chat --base-url https://finsight.example.com/
//!
//! # Ignore the saved token and sign in again
//! finsight-chat --fresh-login
//!
//! # Disable colors (useful for piping output)
//! finsight-chat --no-color
//! ```
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/help` - Show available commands
//! - `/stats` - Show session statistics
//! - `/config` - Show the current configuration
//! - `/save <file>` - Save the message log to a file
//! - `/quit` - Exit the application

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use finsight::chat::{
    ChatArgs, ChatCommand, ChatConfig, ChatSession, LoginScreen, PlainTextRenderer, Renderer,
    help_text, parse_command,
};
use finsight::{Finsight, TokenStore};

/// Main entry point for the finsight-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("finsight-chat [OPTIONS]");
    let config = ChatConfig::from(args);

    let tokens = TokenStore::open(config.token_path.clone());
    let client = Finsight::with_options(tokens.clone(), Some(config.base_url.clone()), None)?;
    let mut renderer = PlainTextRenderer::with_color(config.use_color);
    let mut rl = DefaultEditor::new()?;

    if tokens.has() && !config.fresh_login {
        // A stored token means a prior login; reuse it instead of prompting.
        renderer
            .print_info("Using saved session token (run with --fresh-login to sign in again).");
    } else if !run_login(&client, &tokens, &mut renderer, &mut rl).await? {
        return Ok(());
    }

    let mut session = ChatSession::new(client);

    println!("Finsight Chat ({})", config.base_url);
    println!("Type /help for commands, /quit to exit\n");
    for entry in session.messages() {
        renderer.message(entry);
    }

    loop {
        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Stats => {
                            print_stats(&session);
                        }
                        ChatCommand::ShowConfig => {
                            print_config(&config);
                        }
                        ChatCommand::SaveTranscript(path) => {
                            match session.save_transcript_to(&path) {
                                Ok(_) => {
                                    renderer.print_info(&format!("Transcript saved to {}", path))
                                }
                                Err(err) => renderer
                                    .print_error(&format!("Failed to save transcript: {}", err)),
                            }
                        }
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                // Regular message - send to the backend. Failures surface as
                // the fallback entry, never as an error here.
                session.send(line, &mut renderer).await;
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - soft interrupt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}

/// Runs the login screen until a submit succeeds.
///
/// Returns false when the user exits without authenticating.
async fn run_login(
    client: &Finsight,
    tokens: &TokenStore,
    renderer: &mut PlainTextRenderer,
    rl: &mut DefaultEditor,
) -> Result<bool, Box<dyn std::error::Error>> {
    let mut screen = LoginScreen::new();
    println!("Log in to Finsight");

    while !screen.is_authenticated() {
        let username = match rl.readline("Username: ") {
            Ok(line) => line.trim().to_string(),
            Err(ReadlineError::Interrupted) => {
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("\nGoodbye!");
                return Ok(false);
            }
            Err(err) => return Err(Box::new(err)),
        };
        // Both fields are required; re-prompt instead of submitting blanks.
        if username.is_empty() {
            continue;
        }

        let password = dialoguer::Password::new().with_prompt("Password").interact()?;
        if password.is_empty() {
            continue;
        }

        if screen.submit(client, tokens, &username, &password).await {
            renderer.print_info("Logged in.");
        } else if let Some(error) = screen.error() {
            renderer.print_error(error);
        }
    }

    Ok(true)
}

fn print_stats(session: &ChatSession<Finsight>) {
    let stats = session.stats();
    println!("    Session Statistics:");
    println!("      Messages: {}", stats.message_count);
    println!("      Chat requests: {}", stats.request_count);
    println!("      Fallback replies: {}", stats.fallback_count);
}

fn print_config(config: &ChatConfig) {
    println!("    Current Configuration:");
    println!("      Backend: {}", config.base_url);
    println!("      Token file: {}", config.token_path.display());
    println!(
        "      Color: {}",
        if config.use_color { "enabled" } else { "disabled" }
    );
}
