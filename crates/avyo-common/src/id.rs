//! String identifiers for sessions and chat messages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fresh random (v4) UUID string.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new() -> Self {
                Self(new_id())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// One chat session.
    SessionId
);

string_id!(
    /// One chat message. The assistant's opening message always uses
    /// [`MessageId::WELCOME`].
    MessageId
);

impl MessageId {
    pub const WELCOME: &'static str = "welcome";

    pub fn welcome() -> Self {
        Self(Self::WELCOME.to_string())
    }

    pub fn is_welcome(&self) -> bool {
        self.0 == Self::WELCOME
    }
}
