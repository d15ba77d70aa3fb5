use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use tokio::io::AsyncReadExt;

use crate::cli::Command;
use crate::state::AppState;

pub mod extract;
pub mod lessons;
pub mod speak;
pub mod translate;
pub mod vocabulary;

use extract::handle_extract;
use lessons::handle_lessons;
use speak::handle_speak;
use translate::handle_translate;
use vocabulary::handle_vocab;

/// Route a parsed command to its handler and print the result
pub async fn dispatch(state: &AppState, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Extract(args) => {
            let text = read_input(args.file.as_deref()).await?;
            tracing::debug!("Extract input: {} chars", text.len());

            let output = handle_extract(state, text, args.mode, args.save)?;
            print_json(&output)?;
        }
        Command::Translate(args) => {
            let output = handle_translate(state, &args.text, args.from, args.to).await?;
            print_json(&output)?;
        }
        Command::Speak(args) => {
            let output = handle_speak(state, &args.text, args.lang, &args.out).await?;
            print_json(&output)?;
        }
        Command::Vocab(command) => {
            let output = handle_vocab(state, command)?;
            print_json(&output)?;
        }
        Command::Lessons(command) => {
            let output = handle_lessons(state, command)?;
            print_json(&output)?;
        }
    }

    Ok(())
}

async fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

