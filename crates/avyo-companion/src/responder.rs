//! Reply generation.
//!
//! [`Responder`] is the seam for any chat-completion backend. The built-in
//! [`MockResponder`] answers from a small rule table so the companion works
//! without network access.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::ChatError;

#[async_trait]
pub trait Responder: Send + Sync {
    /// Produce a reply to `message` from the user called `username`.
    async fn respond(&self, message: &str, username: &str) -> Result<String, ChatError>;
}

/// Rule-based offline responder.
pub struct MockResponder {
    delay: Duration,
    rng: Mutex<StdRng>,
}

impl MockResponder {
    pub fn new(delay: Duration, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            delay,
            rng: Mutex::new(rng),
        }
    }

    /// Responder with no simulated delay.
    pub fn instant(seed: Option<u64>) -> Self {
        Self::new(Duration::ZERO, seed)
    }

    fn pick(&self, options: &[String]) -> Result<String, ChatError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| ChatError::Responder("responder rng poisoned".into()))?;
        options
            .choose(&mut *rng)
            .cloned()
            .ok_or_else(|| ChatError::Responder("no reply candidates".into()))
    }

    /// Compute the reply without waiting.
    pub fn reply_for(&self, message: &str, username: &str) -> Result<String, ChatError> {
        let text = message.to_lowercase();
        let has = |needle: &str| text.contains(needle);

        if is_greeting(&text) {
            return Ok(format!("Hello {username}! How are you feeling today?"));
        }
        if has("how are you") {
            return Ok(format!(
                "I'm doing great, {username}! Thanks for asking. How can I assist you today?"
            ));
        }
        if has("weather") {
            return Ok(format!(
                "Currently it's 24°C and sunny outside. Perfect day to go for a walk, {username}!"
            ));
        }
        if has("news") {
            return Ok("Today's top news: New advances in AI technology announced today! \
                 Scientists have created more realistic virtual avatars that can recognize \
                 human emotions."
                .to_string());
        }
        if has("sad") || has("unhappy") {
            return Ok(format!(
                "I'm sorry to hear you're feeling down, {username}. Would you like me to \
                 suggest some mood-lifting activities or perhaps tell you a joke?"
            ));
        }
        if has("joke") {
            let jokes = [
                "Why don't scientists trust atoms? Because they make up everything!".to_string(),
                "Why did the AI go to art school? To learn how to draw conclusions!".to_string(),
                format!("What do you call {username} who loves telling dad jokes? A faux pa!"),
                "Why did the computer show up at work late? It had a hard drive!".to_string(),
            ];
            return Ok(format!("Here's a joke for you: {} 😄", self.pick(&jokes)?));
        }
        if has("thank") {
            return Ok(format!(
                "You're very welcome, {username}! I'm always here to help."
            ));
        }

        let defaults = [
            format!("That's interesting, {username}. Tell me more about that."),
            format!("I understand, {username}. How else can I assist you today?"),
            format!(
                "Thanks for sharing that with me, {username}. Is there anything specific you'd like to know?"
            ),
            format!("I appreciate your input, {username}. Let me know if you have any questions."),
        ];
        self.pick(&defaults)
    }
}

/// "hello" or "hi" as a whole word. Plain substring matching would treat
/// words such as "this" or "which" as greetings, so only whole words count.
fn is_greeting(text: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|word| word == "hello" || word == "hi")
}

#[async_trait]
impl Responder for MockResponder {
    async fn respond(&self, message: &str, username: &str) -> Result<String, ChatError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let reply = self.reply_for(message, username)?;
        debug!(chars = reply.len(), "mock reply ready");
        Ok(reply)
    }
}
