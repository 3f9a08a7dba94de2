mod chat;
mod cli;
mod simulate;

use std::io::Write;
use std::process::ExitCode;

use avyo_companion::{classify, ChatSession};
use avyo_config::schema::LogLevel;
use avyo_config::AvyoConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::Command;
use crate::simulate::SimulationOptions;

const DEFAULT_LOG_DIRECTIVE: &str = "avyo=info";

/// Turn `--log-level` or the config level into a filter directive.
///
/// A bare level such as `debug` is scoped to the avyo crates; anything
/// else is passed through as a full directive.
fn log_directive(arg: Option<&str>, config_level: Option<&LogLevel>) -> String {
    match arg {
        Some(level) if level.parse::<LevelFilter>().is_ok() => format!("avyo={level}"),
        Some(directive) => directive.to_string(),
        None => config_level
            .map(LogLevel::directive)
            .unwrap_or(DEFAULT_LOG_DIRECTIVE)
            .to_string(),
    }
}

fn init_tracing(directive: &str) {
    let filter = EnvFilter::from_default_env();
    let filter = match directive.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(e) => {
            eprintln!("invalid log directive {directive:?} ({e}), using info");
            filter.add_directive(LevelFilter::INFO.into())
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    // Config is read before logging starts so `[logging] level` can apply.
    let loaded = match &args.config {
        Some(path) => avyo_config::load_config_from(path),
        None => avyo_config::load_config(),
    };
    let directive = log_directive(
        args.log_level.as_deref(),
        loaded.as_ref().ok().map(|c| &c.logging.level),
    );
    init_tracing(&directive);

    tracing::info!("Avyo v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        AvyoConfig::default()
    });

    match run(args.command, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, mut config: AvyoConfig) -> avyo_common::Result<()> {
    match command {
        Command::Classify { text } => {
            println!("{}", classify(&text.join(" ")));
        }
        Command::Config => {
            println!("{}", avyo_config::config_to_json(&config));
        }
        Command::Simulate {
            message,
            seconds,
            skin,
            seed,
            every,
            no_greeting,
        } => {
            if let Some(skin) = skin {
                config.avatar.skin = skin.into();
            }
            if seed.is_some() {
                config.avatar.seed = seed;
            }
            let options = SimulationOptions {
                message,
                seconds,
                every,
                greet: !no_greeting,
            };
            let mut out = std::io::stdout().lock();
            simulate::run(&config, &options, &mut out)?;
            out.flush()?;
        }
        Command::Chat { user } => {
            let username = user.unwrap_or_else(|| config.chat.username.clone());
            let mut session = ChatSession::new(username, &config.chat);
            let responder = chat::responder_from_config(&config.chat, None);
            let today = chrono::Local::now().date_naive();
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            chat::run(&mut session, &responder, today, input, &mut std::io::stdout()).await?;
        }
    }
    Ok(())
}
