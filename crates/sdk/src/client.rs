//! SDK entry point.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use susteam_protocol::User;
use tracing::info;

use crate::config::{SdkConfig, default_save_dir};
use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::session::Session;
use crate::transport::{HttpTransport, Transport};

/// Client for the SUSTeam platform service.
///
/// Holds the session and one shared transport. Operations borrow the
/// client immutably, so independent operations may run concurrently; they
/// are not ordered against each other.
pub struct Client {
    session: Session,
    transport: Arc<dyn Transport>,
    save_dir: PathBuf,
}

impl Client {
    /// Builds a client and its HTTP transport from `config`.
    pub fn initialize(config: SdkConfig) -> Result<Self> {
        let session = Session::new(config.token.as_str(), config.game.clone())?;
        let transport = HttpTransport::new(config.base_url.as_str())?;
        info!(base_url = %transport.base_url(), game = %session.game(), "SUSTeam client initialized");

        Ok(Self {
            session,
            transport: Arc::new(transport),
            save_dir: config.resolved_save_dir(),
        })
    }

    /// Replaces session and transport with ones built from `config`.
    ///
    /// On error the client is left unchanged.
    pub fn reinitialize(&mut self, config: SdkConfig) -> Result<()> {
        *self = Self::initialize(config)?;
        Ok(())
    }

    /// Builds a client over a caller-provided transport.
    pub fn with_transport(session: Session, transport: Arc<dyn Transport>) -> Self {
        Self {
            session,
            transport,
            save_dir: default_save_dir(),
        }
    }

    /// Sets the root directory downloaded saves are written under.
    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = dir.into();
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    pub(crate) fn pipeline(&self) -> Pipeline<'_> {
        Pipeline::new(&self.session, self.transport.as_ref())
    }

    /// Checks that the service answers the token endpoint.
    ///
    /// Succeeds whether or not the token is valid.
    pub async fn is_server_online(&self) -> Result<()> {
        self.pipeline().introspect().await.map(|_| ())
    }

    /// Returns the user bound to the session token.
    pub async fn user(&self) -> Result<User> {
        self.pipeline().resolve_identity().await
    }
}
