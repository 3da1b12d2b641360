//! Session identity: the bearer token and the game it acts on.

use reqwest::header::HeaderValue;
use susteam_protocol::GameIdentifier;

use crate::config::ConfigError;

/// Token and game identifier shared by every operation of a [`Client`](crate::Client).
///
/// Read-only once built; replacing it requires `&mut Client`.
#[derive(Clone, PartialEq)]
pub struct Session {
    token: String,
    game: GameIdentifier,
}

impl Session {
    /// Creates a session, rejecting tokens that cannot travel in an
    /// `Authorization` header.
    pub fn new(token: impl Into<String>, game: impl Into<GameIdentifier>) -> Result<Self, ConfigError> {
        let token = token.into();
        HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| ConfigError::InvalidToken)?;
        Ok(Self {
            token,
            game: game.into(),
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn game(&self) -> &GameIdentifier {
        &self.game
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("game", &self.game)
            .finish()
    }
}
