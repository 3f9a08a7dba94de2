pub mod errors;
pub mod id;
pub mod types;

pub use errors::{AvyoError, ConfigError};
pub use id::{new_id, MessageId, SessionId};
pub use types::{ActivityFlags, ActivityState, Color, MoodLabel, Signal};

pub type Result<T> = std::result::Result<T, AvyoError>;
