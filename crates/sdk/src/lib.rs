//! Async client SDK for the SUSTeam game platform.
//!
//! A game links this crate to authenticate its player and talk to the
//! platform service. Every operation follows the same pipeline: resolve
//! the player's identity through the token endpoint, issue the dependent
//! request keyed off that identity, then decode the `{success, ...}`
//! envelope into a typed result or an [`SdkError`].
//!
//! # Operations
//!
//! - **Session** — [`Client::initialize`], [`Client::user`], [`Client::is_server_online`]
//! - **Games** — lookup by id or key, bought-game checks
//! - **Saves** — upload, download, delete and list cloud saves
//! - **Achievements** — definitions and per-user progress
//! - **Records** — score submission and leaderboards
//! - **Friends** — friend lists and game invites

mod achievements;
pub mod client;
pub mod config;
pub mod error;
mod friends;
mod games;
mod identity;
mod paths;
mod pipeline;
mod records;
mod saves;
pub mod session;
pub mod transport;

#[cfg(test)]
mod mock;

// Re-export primary types for convenience.
pub use client::Client;
pub use config::{ConfigError, SdkConfig};
pub use error::{Result, SdkError};
pub use session::Session;
pub use susteam_protocol::{
    Achievement, AchievementProcess, Friend, Game, GameIdentifier, GameSave, ProtocolError,
    Record, User,
};
pub use transport::{ApiRequest, ApiResponse, FilePart, HttpTransport, Method, RequestBody, Transport};
