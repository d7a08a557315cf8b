//! Integration tests for the folio library.
//! Live tests require an API key in the environment and are skipped without one.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use folio::chat::{ChatConfig, ChatSession, Submission};
    use folio::portfolio::{
        InMemoryRepository, PageView, PortfolioRepository, Section, parse_admin_command,
    };
    use folio::{
        API_KEY_ENV, Completer, CompletionClient, Error, FAILURE_FALLBACK, Gemini, Persona,
        Result, Speaker, Turn,
    };

    /// Answers every prompt by echoing it, counting calls.
    #[derive(Default)]
    struct EchoCompleter {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl Completer for EchoCompleter {
        async fn complete(&self, prompt: &str, history: &[Turn]) -> Result<String> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            Ok(format!("{prompt} ({} turns of context)", history.len()))
        }
    }

    struct DownCompleter;

    #[async_trait::async_trait]
    impl Completer for DownCompleter {
        async fn complete(&self, _: &str, _: &[Turn]) -> Result<String> {
            Err(Error::service_unavailable("maintenance", None))
        }
    }

    #[tokio::test]
    async fn conversation_through_public_api() {
        let completer = Arc::new(EchoCompleter::default());
        let session = ChatSession::new(completer.clone(), Persona::default().greeting);

        assert_eq!(session.submit("   ").await, Submission::Empty);
        for i in 0..4 {
            let outcome = session.submit(&format!("question {i}")).await;
            assert!(matches!(outcome, Submission::Replied(_)));
        }

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 9);
        assert_eq!(completer.calls.load(Ordering::Relaxed), 4);
        for (i, turn) in transcript.iter().enumerate() {
            let expected = if i % 2 == 0 {
                Speaker::Assistant
            } else {
                Speaker::User
            };
            assert_eq!(turn.speaker(), expected);
        }
        // The fourth question sees the five turns before it.
        assert_eq!(
            transcript.last().unwrap().text(),
            "question 3 (5 turns of context)"
        );
    }

    #[tokio::test]
    async fn failing_backend_yields_fallback_turn() {
        let session = ChatSession::new(DownCompleter, "Hello!");
        let outcome = session.submit("Are you there?").await;
        assert_eq!(
            outcome,
            Submission::Replied(Turn::assistant(FAILURE_FALLBACK))
        );
        assert!(!session.is_busy());
        assert_eq!(session.turn_count(), 3);
    }

    #[tokio::test]
    async fn unreachable_service_yields_fallback_turn() {
        let config = ChatConfig::new().with_base_url(Some("http://127.0.0.1:1/v1beta/".to_string()));
        let session = ChatSession::connect(&config).unwrap();
        let outcome = session.submit("Hi").await;
        assert_eq!(
            outcome,
            Submission::Replied(Turn::assistant(FAILURE_FALLBACK))
        );
    }

    #[test]
    fn admin_edits_flow_into_listing() {
        let mut repo = InMemoryRepository::seeded();
        for line in [
            "add project",
            "set 5 title Orbit Banking",
            "set 5 tools Figma, Framer",
            "add skill Motion 75 Hard Skill",
            "delete skill Adobe XD",
        ] {
            let command = parse_admin_command(line).unwrap();
            command.apply(&mut repo).unwrap();
        }

        let projects = repo.list_projects();
        assert_eq!(projects.len(), 5);
        assert_eq!(projects[4].title, "Orbit Banking");
        assert_eq!(projects[4].tools, vec!["Figma", "Framer"]);
        let chart: Vec<String> = repo.chart_skills().into_iter().map(|s| s.name).collect();
        assert!(chart.contains(&"Motion".to_string()));
        assert_eq!(repo.summary().skill_count, 9);
    }

    #[test]
    fn page_view_transitions() {
        let mut view = PageView::new();
        view.on_scroll(120.0);
        view.toggle_menu();
        view.open_assistant();
        assert_eq!(view.navigate(Section::Contact), "#contact");
        assert!(view.is_scrolled());
        assert!(!view.is_menu_open());
        assert!(view.is_assistant_open());
    }

    #[tokio::test]
    async fn test_live_reply() {
        // This test requires FOLIO_API_KEY to be set
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        if api_key.is_none() {
            eprintln!("Skipping test: {API_KEY_ENV} not set");
            return;
        }

        let client = Gemini::new(api_key).expect("Failed to create client");
        let completion =
            CompletionClient::new(client, Persona::default().with_max_output_tokens(64));
        let reply = completion
            .try_reply("In one sentence, what is a design system?", &[])
            .await;
        assert!(reply.is_ok(), "Request should succeed with valid API key");
    }
}
