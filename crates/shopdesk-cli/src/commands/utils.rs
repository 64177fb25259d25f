use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use shopdesk_core::ports::{ConfirmationPrompt, Confirmer};
use std::io::{self, BufRead, Write};

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Asks on the terminal; `--yes` answers every prompt in advance.
pub struct StdinConfirmer {
    assume_yes: bool,
}

impl StdinConfirmer {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

fn ask(prompt: &ConfirmationPrompt) -> io::Result<bool> {
    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{}", prompt.title)?;
    writeln!(stderr, "{}", prompt.message)?;
    for consequence in &prompt.consequences {
        writeln!(stderr, "  - {}", consequence)?;
    }
    write!(stderr, "Continue? [y/N] ")?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "YES"))
}

#[async_trait]
impl Confirmer for StdinConfirmer {
    async fn confirm(&self, prompt: &ConfirmationPrompt) -> bool {
        if self.assume_yes {
            tracing::debug!("[StdinConfirmer] --yes given: {}", prompt.title);
            return true;
        }

        let prompt = prompt.clone();
        match tokio::task::spawn_blocking(move || ask(&prompt)).await {
            Ok(Ok(answer)) => answer,
            Ok(Err(e)) => {
                tracing::warn!("[StdinConfirmer] Cannot read answer: {}", e);
                false
            }
            Err(e) => {
                tracing::warn!("[StdinConfirmer] Prompt task failed: {}", e);
                false
            }
        }
    }
}
