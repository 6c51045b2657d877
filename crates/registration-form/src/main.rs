//! Registration form - interactive terminal front-end.

use anyhow::Context;
use registration_form::{config::Config, ProxyBackend, RegistrationForm, SearchOutcome};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Name(&'a str),
    Email(&'a str),
    Type(&'a str),
    Pick(usize),
    Show,
    Next,
    Help,
    Quit,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let (verb, rest) = match line.split_once(' ') {
            Some((verb, rest)) => (verb, rest),
            None => (line, ""),
        };

        match verb {
            "name" => Command::Name(rest),
            "email" => Command::Email(rest),
            "type" => Command::Type(rest),
            "pick" => match rest.trim().parse::<usize>() {
                Ok(n) if n > 0 => Command::Pick(n),
                _ => Command::Unknown(line),
            },
            "show" => Command::Show,
            "next" => Command::Next,
            "help" | "?" => Command::Help,
            "quit" | "exit" | ":q" => Command::Quit,
            _ => Command::Unknown(line),
        }
    }
}

const HELP: &str = "commands:
  name <text>    set the name field
  email <text>   set the email field
  type <text>    set the address field text (searches after 2 characters)
  pick <n>       choose suggestion n
  show           print the form
  next           submit the form
  quit           leave";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(proxy = %config.proxy.base_url, "Starting registration form");

    let backend = ProxyBackend::new(&config.proxy.base_url, config.proxy.timeout)
        .context("Failed to create proxy backend")?;
    let mut form = RegistrationForm::new(Arc::new(backend));

    run(&mut form, config.proxy.timeout).await
}

async fn run(form: &mut RegistrationForm, lookup_wait: Duration) -> anyhow::Result<()> {
    let mut out = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    out.write_all(format!("Registration\n{HELP}\n").as_bytes()).await?;

    loop {
        out.write_all(b"> ").await?;
        out.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let reply = match Command::parse(line) {
            Command::Name(name) => {
                form.set_name(name);
                format!("name: {name}")
            }
            Command::Email(email) => {
                form.set_email(email);
                format!("email: {email}")
            }
            Command::Type(text) => {
                let outcome = form.address_field().handle_input(text).await;
                let state = form.address_field().state().await;
                render_suggestions(outcome, &state.display_options())
            }
            Command::Pick(n) => {
                let state = form.address_field().state().await;
                match state.display_options().get(n - 1) {
                    Some(text) => {
                        let text = text.to_string();
                        let selected = form.address_field().handle_select(&text).await;
                        let mut reply = format!("address: {text}");
                        if selected.is_some_and(|c| c.place_id.is_some()) {
                            // Wait briefly so the resolved address can be shown right away
                            if let Ok(Some(event)) =
                                tokio::time::timeout(lookup_wait, form.next_event()).await
                            {
                                reply.push_str(&format!("\n{event:?}"));
                            }
                        }
                        reply
                    }
                    None => format!("no suggestion {n}"),
                }
            }
            Command::Show => {
                form.poll_events();
                let state = form.address_field().state().await;
                format!(
                    "address field: {:?} ({:?})\nresolved: {:?}",
                    state.query_text,
                    state.phase(),
                    form.address().await
                )
            }
            Command::Next => {
                let registration = form.submit().await;
                serde_json::to_string_pretty(&registration)?
            }
            Command::Help => HELP.to_string(),
            Command::Quit => break,
            Command::Unknown(line) => format!("unknown command: {line} (try `help`)"),
        };

        out.write_all(reply.as_bytes()).await?;
        out.write_all(b"\n").await?;
    }

    Ok(())
}

fn render_suggestions(outcome: SearchOutcome, options: &[&str]) -> String {
    match outcome {
        SearchOutcome::Failed => "(suggestions unavailable)".to_string(),
        SearchOutcome::Stale => "(superseded)".to_string(),
        SearchOutcome::Cleared | SearchOutcome::Applied(_) => {
            if options.is_empty() {
                return "(no suggestions)".to_string();
            }
            options
                .iter()
                .enumerate()
                .map(|(i, text)| format!("  {}. {}", i + 1, text))
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}
