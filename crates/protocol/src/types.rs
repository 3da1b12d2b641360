use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_AVATAR;

/// Identifies the game a session acts on.
///
/// The service accepts either form in path segments and resolves a key to
/// exactly one numeric id on its side. In TOML/JSON an integer is an id and
/// a string is a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameIdentifier {
    Id(i32),
    Key(String),
}

impl GameIdentifier {
    /// Returns the numeric id if this identifier already is one.
    pub fn id(&self) -> Option<i32> {
        match self {
            GameIdentifier::Id(id) => Some(*id),
            GameIdentifier::Key(_) => None,
        }
    }
}

impl fmt::Display for GameIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameIdentifier::Id(id) => write!(f, "{id}"),
            GameIdentifier::Key(key) => f.write_str(key),
        }
    }
}

impl From<i32> for GameIdentifier {
    fn from(id: i32) -> Self {
        GameIdentifier::Id(id)
    }
}

impl From<&str> for GameIdentifier {
    fn from(key: &str) -> Self {
        GameIdentifier::Key(key.to_string())
    }
}

impl From<String> for GameIdentifier {
    fn from(key: String) -> Self {
        GameIdentifier::Key(key)
    }
}

/// A published game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub price: i32,
    pub author: String,
    /// Older service builds name this field `publishDate`.
    #[serde(alias = "publishDate")]
    pub publish_time: DateTime<Utc>,
    pub introduction: Option<String>,
    pub description: Option<String>,
}

/// The account bound to the session token.
///
/// Decoded from the `userRole` object of the token endpoint, which also
/// lists the account's roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub mail: String,
    pub avatar: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub balance: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

impl User {
    /// Avatar path, falling back to the service's default avatar.
    pub fn avatar_or_default(&self) -> &str {
        self.avatar.as_deref().unwrap_or(DEFAULT_AVATAR)
    }
}

/// Metadata of one stored save file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSave {
    pub username: String,
    pub game_id: i32,
    pub save_name: String,
    pub saved_time: DateTime<Utc>,
}

/// An achievement definition. `achievement_name` is unique within a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub game_id: i32,
    pub achievement_id: i32,
    pub achievement_name: String,
    #[serde(default)]
    pub description: String,
    pub achieve_count: i32,
}

/// A user's progress towards one achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementProcess {
    pub username: String,
    pub achievement_name: String,
    pub rate_of_process: i32,
}

/// One submitted leaderboard score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub record_id: i32,
    pub game_id: i32,
    pub username: String,
    pub score: i32,
}

/// A friend of the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub username: String,
    pub online: bool,
    pub last_seen: DateTime<Utc>,
}
