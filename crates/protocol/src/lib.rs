//! Wire protocol types for the SUSTeam platform API.
//!
//! Holds the domain values the service returns, the `{success, ...}`
//! response envelope every endpoint answers with, and the fixed protocol
//! constants. Nothing here performs I/O.

pub mod constants;
pub mod envelope;
pub mod types;

// Re-export primary types for convenience.
pub use envelope::{Envelope, Introspection, Payload, ProtocolError};
pub use types::{
    Achievement, AchievementProcess, Friend, Game, GameIdentifier, GameSave, Record, User,
};
