use std::path::PathBuf;

use avyo_config::schema::AvatarSkin;
use clap::{Parser, Subcommand, ValueEnum};

/// Avyo: an animated chat companion with mood-aware expressions.
#[derive(Parser, Debug)]
#[command(name = "avyo", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error) or a full filter directive.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the mood label of a piece of text.
    Classify {
        /// Text to classify; multiple words are joined with spaces.
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Run the avatar headlessly and print poses as JSON lines.
    Simulate {
        /// Message submitted at the start of the run.
        #[arg(short, long)]
        message: Option<String>,

        /// Simulated duration in seconds.
        #[arg(short, long, default_value_t = 6.0)]
        seconds: f64,

        /// Skin override.
        #[arg(long, value_enum)]
        skin: Option<SkinArg>,

        /// Seed for blinking and wave rolls.
        #[arg(long)]
        seed: Option<u64>,

        /// Print every Nth frame.
        #[arg(long, default_value_t = 10)]
        every: u32,

        /// Skip the hello wave at the start of the run.
        #[arg(long)]
        no_greeting: bool,
    },

    /// Chat with the offline companion on stdin.
    Chat {
        /// Name to greet; defaults to `[chat] username`.
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Print the effective configuration as JSON.
    Config,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinArg {
    Cartoon,
    Human,
    Robot,
}

impl From<SkinArg> for AvatarSkin {
    fn from(skin: SkinArg) -> Self {
        match skin {
            SkinArg::Cartoon => AvatarSkin::Cartoon,
            SkinArg::Human => AvatarSkin::Human,
            SkinArg::Robot => AvatarSkin::Robot,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
