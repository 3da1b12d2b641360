//! Identity resolution through the token endpoint.
//!
//! Identity is never cached: every operation that needs the user performs
//! its own round trip, since the token may be revoked between calls.

use susteam_protocol::{Introspection, User};
use tracing::{debug, warn};

use crate::error::{Result, SdkError};
use crate::paths;
use crate::pipeline::Pipeline;
use crate::transport::ApiRequest;

impl Pipeline<'_> {
    /// Asks the token endpoint about the session token.
    ///
    /// Only the shape of the answer is checked; a `token: false` answer is
    /// still a successful introspection.
    pub(crate) async fn introspect(&self) -> Result<Introspection> {
        let request = ApiRequest::get(paths::token()).bearer(self.token());
        let response = self.send(request).await?;
        Introspection::parse(&response.body).map_err(|e| {
            warn!(status = response.status, error = %e, "malformed token response");
            SdkError::from(e)
        })
    }

    /// Checks that the session token is valid without decoding the user.
    pub(crate) async fn authorize(&self) -> Result<Introspection> {
        let introspection = self.introspect().await?;
        if !introspection.token {
            warn!("token rejected by server");
            return Err(SdkError::Auth("token invalid".into()));
        }
        Ok(introspection)
    }

    /// Resolves the user bound to the session token.
    pub(crate) async fn resolve_identity(&self) -> Result<User> {
        let user = self.authorize().await?.into_user()?;
        debug!(username = %user.username, "identity resolved");
        Ok(user)
    }
}
