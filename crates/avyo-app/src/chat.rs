//! Interactive chat over line-oriented input.

use std::io::Write;
use std::time::Duration;

use avyo_common::{ActivityFlags, ActivityState, AvyoError};
use avyo_companion::{
    caption, festival_avatar, greeting, mood_avatar, ChatError, ChatSession, MockResponder,
    Responder, RESPONSE_FAILED_NOTICE,
};
use avyo_config::schema::ChatConfig;
use chrono::NaiveDate;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::info;

const QUIT_COMMANDS: &[&str] = &["/quit", "/exit"];

/// Build the mock responder configured by `[chat] reply_delay_ms`.
pub fn responder_from_config(config: &ChatConfig, seed: Option<u64>) -> MockResponder {
    MockResponder::new(Duration::from_millis(u64::from(config.reply_delay_ms)), seed)
}

/// Run the chat loop until the input ends or a quit command is read.
///
/// Returns the number of messages sent.
pub async fn run<R, W>(
    session: &mut ChatSession,
    responder: &dyn Responder,
    today: NaiveDate,
    input: R,
    out: &mut W,
) -> avyo_common::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let banner = greeting(session.username(), today);
    writeln!(out, "{}", banner.title)?;
    writeln!(out, "{}", banner.description)?;
    let (_, portrait) = festival_avatar(today);
    writeln!(out, "  [avatar: {portrait}]")?;
    if let Some(welcome) = session.messages().first() {
        writeln!(out, "{}: {}", session.assistant_name(), welcome.content)?;
    }

    let mut lines = input.lines();
    let mut sent = 0;
    while let Some(line) = lines.next_line().await? {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if QUIT_COMMANDS.contains(&text) {
            break;
        }

        let listening = ActivityFlags::only(ActivityState::Listening);
        writeln!(out, "  ({})", caption(&listening, session.conversation_mood()))?;
        let exchange = match session.send(responder, text).await {
            Ok(exchange) => exchange,
            Err(ChatError::EmptyMessage) => continue,
            Err(e) => return Err(AvyoError::Chat(e.to_string())),
        };
        sent += 1;

        match exchange.reply {
            Some(reply) => writeln!(out, "{}: {}", session.assistant_name(), reply.content)?,
            None => writeln!(out, "{RESPONSE_FAILED_NOTICE}")?,
        }

        let mood = session.conversation_mood();
        writeln!(
            out,
            "  [mood: {} | message: {} | {}] {}",
            mood,
            exchange.mood,
            mood_avatar(mood),
            caption(&ActivityFlags::default(), mood)
        )?;
    }

    info!(session = %session.id(), sent, "chat ended");
    Ok(sent)
}
