//! Interactive chat with the portfolio's design-strategist assistant.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage with default settings
//! folio-chat
//!
//! # Specify a model
//! folio-chat --model gemini-2.5-flash
//!
//! # Load a different persona
//! folio-chat --persona persona.yaml
//!
//! # Disable colors (useful for piping output)
//! folio-chat --no-color
//! ```
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/help` - Show available commands
//! - `/projects`, `/skills`, `/services` - Browse the portfolio
//! - `/history` - Show the conversation so far
//! - `/stats` - Show session statistics
//! - `/quit` - Exit the application

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use folio::chat::{
    ChatArgs, ChatCommand, ChatConfig, ChatSession, PlainTextRenderer, Renderer, Submission,
    help_text, parse_command,
};
use folio::portfolio::{InMemoryRepository, PortfolioRepository, catalog};
use folio::{API_KEY_ENV, CompletionClient};

/// Main entry point for the folio-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("folio-chat [OPTIONS]");
    let config = ChatConfig::try_from(args)?;
    let use_color = config.use_color;

    let session = ChatSession::connect(&config)?;
    let content = InMemoryRepository::seeded();
    let mut renderer = PlainTextRenderer::with_color(use_color);
    let mut rl = DefaultEditor::new()?;

    println!("Folio Chat (model: {})", config.persona.model);
    println!("Type /help for commands, /quit to exit\n");
    if std::env::var(API_KEY_ENV).map_or(true, |key| key.is_empty()) {
        renderer.print_error(&format!(
            "{API_KEY_ENV} is not set; replies will fall back to the unavailable message"
        ));
    }
    for turn in session.transcript().iter() {
        renderer.print_turn(turn);
    }

    loop {
        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line.as_str());

                // Check for slash commands
                if let Some(cmd) = parse_command(&line) {
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
                        ChatCommand::History => {
                            for turn in session.transcript().iter() {
                                renderer.print_turn(turn);
                            }
                        }
                        ChatCommand::Stats => print_stats(&session),
                        ChatCommand::Projects => print_projects(&content),
                        ChatCommand::Skills => print_skills(&content),
                        ChatCommand::Services => print_services(),
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                renderer.print_pending();
                match session.submit(&line).await {
                    Submission::Replied(turn) => renderer.print_turn(&turn),
                    Submission::Busy => renderer.print_info("Still working on the last answer."),
                    Submission::Empty => {}
                }
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

fn print_stats(session: &ChatSession<CompletionClient>) {
    let stats = session.stats();
    println!("    Session Statistics:");
    println!("      Model: {}", session.completer().persona().model);
    println!(
        "      Turns: {} ({} yours, {} assistant)",
        stats.turn_count, stats.user_turns, stats.assistant_turns
    );
    println!("      Context window: {} turns", stats.context_window);
    println!("      Messages sent: {}", stats.accepted);
    println!(
        "      Dropped: {} while busy, {} blank",
        stats.dropped_busy, stats.dropped_empty
    );
}

fn print_projects(content: &InMemoryRepository) {
    println!("    Projects:");
    for project in content.list_projects() {
        println!("      {} [{}]", project.title, project.category);
        println!("        {}", project.description);
        println!("        Tools: {}", project.tools.join(", "));
    }
}

fn print_skills(content: &InMemoryRepository) {
    for (category, skills) in content.skills_by_category() {
        println!("    {category}:");
        for skill in skills {
            println!("      {:<16} {:>3}%", skill.name, skill.level);
        }
    }
}

fn print_services() {
    println!("    Services:");
    for service in catalog::services() {
        println!("      {}: {}", service.title, service.description);
    }
}
