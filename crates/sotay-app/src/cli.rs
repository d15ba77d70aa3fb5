use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sotay_types::{ExtractionMode, PracticeKind};

#[derive(Parser, Debug)]
#[command(
    name = "sotay",
    version,
    about = "Vocabulary notebook: pull words out of study notes, translate and speak them"
)]
pub struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract vocabulary entries from pasted notes
    Extract(ExtractArgs),

    /// Translate a word or sentence
    Translate(TranslateArgs),

    /// Render text to an MP3 file
    Speak(SpeakArgs),

    /// Manage saved vocabulary
    #[command(subcommand)]
    Vocab(VocabCommand),

    /// Browse reading lessons
    #[command(subcommand)]
    Lessons(LessonsCommand),
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Notes file, stdin when omitted
    pub file: Option<PathBuf>,

    /// sequential or associative
    #[arg(long)]
    pub mode: Option<ExtractionMode>,

    /// Save the extracted entries to the vocabulary store
    #[arg(long)]
    pub save: bool,
}

#[derive(Args, Debug)]
pub struct TranslateArgs {
    pub text: String,

    #[arg(long)]
    pub from: Option<String>,

    #[arg(long)]
    pub to: Option<String>,
}

#[derive(Args, Debug)]
pub struct SpeakArgs {
    pub text: String,

    /// Output file
    #[arg(long, short, default_value = "speech.mp3")]
    pub out: PathBuf,

    #[arg(long)]
    pub lang: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum VocabCommand {
    /// List saved words, newest first
    List,

    /// Save a word by hand
    Add {
        word: String,
        translation: String,
        #[arg(long)]
        context: Option<String>,
        #[arg(long)]
        level: Option<String>,
    },

    /// Record a review of a saved word
    Review { id: u64 },

    /// Count a correct answer in a practice drill
    Practice {
        id: u64,
        /// typing or speech
        #[arg(long)]
        kind: PracticeKind,
    },

    /// Delete a saved word
    Delete { id: u64 },
}

#[derive(Subcommand, Debug)]
pub enum LessonsCommand {
    /// List lessons, optionally for one level
    List {
        /// A1, A2, B1, ...
        #[arg(long)]
        level: Option<String>,
    },

    /// Show one lesson in full
    Show { id: u64 },
}
