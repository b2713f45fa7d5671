//! CLI argument definitions for the dotdash command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

use dotdash_cli::commands::config::ConfigArgs;

/// dotdash - Morse code translator and keyed-tone synthesizer
#[derive(Parser)]
#[command(name = "dotdash")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Translate text to Morse
    Encode {
        /// Text to encode
        text: String,

        /// Also print the Morse as dot/dash glyphs
        #[arg(long)]
        glyphs: bool,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Translate Morse to text
    Decode {
        /// Morse string, letters separated by spaces and words by " / "
        morse: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Render keyed Morse audio to a WAV file
    Play {
        /// Morse string to play
        #[arg(required_unless_present = "text")]
        morse: Option<String>,

        /// Encode and play this text instead
        #[arg(short, long, conflicts_with = "morse")]
        text: Option<String>,

        /// Output WAV file path
        #[arg(short, long)]
        output: String,

        /// Render sample rate in Hz
        #[arg(long, default_value_t = dotdash_audio::context::DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        #[command(flatten)]
        config: ConfigArgs,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the keying schedule of a Morse string
    Timing {
        /// Morse string to schedule
        #[arg(required_unless_present = "text")]
        morse: Option<String>,

        /// Encode and schedule this text instead
        #[arg(short, long, conflicts_with = "morse")]
        text: Option<String>,

        /// List every pulse
        #[arg(long)]
        pulses: bool,

        #[command(flatten)]
        config: ConfigArgs,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// List the Morse symbol table
    Table {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// List lessons, or show one with its exercises
    Lessons {
        /// Lesson id to show
        id: Option<u32>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Show quiz questions or grade an answer
    Quiz {
        /// Difficulty tier
        #[arg(short, long, default_value = "easy", value_parser = ["easy", "medium", "hard"])]
        difficulty: String,

        /// Question number to grade (1-based)
        #[arg(short, long, requires = "answer")]
        question: Option<usize>,

        /// Answer to grade
        #[arg(short, long, requires = "question")]
        answer: Option<String>,

        /// Seconds left on the question clock when answering [default: 30]
        #[arg(long, requires = "question")]
        seconds_left: Option<u32>,

        /// The hint was revealed before answering
        #[arg(long, requires = "question")]
        hint: bool,

        /// Show answers when listing
        #[arg(long)]
        answers: bool,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify that lesson and quiz Morse matches the encoder
    CheckContent {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}
