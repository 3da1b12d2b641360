//! Request orchestration.
//!
//! Every operation is one of three shapes built from the same steps:
//!
//! - **one-phase**: send a request, decode its envelope ([`Pipeline::dispatch`]);
//! - **token-checked**: confirm the token is valid, then dispatch
//!   ([`Pipeline::run_authorized`]);
//! - **two-phase**: resolve identity, build the request from the resolved
//!   [`User`], then dispatch ([`Pipeline::run`]);
//! - **three-phase**: resolve identity, resolve the session's [`Game`],
//!   then dispatch ([`Pipeline::run_with_game`]).
//!
//! Phases are strictly sequential and the first failure returns
//! immediately, so a later request is never issued after an earlier one
//! failed.

use susteam_protocol::constants::keys;
use susteam_protocol::{Envelope, Game, GameIdentifier, Payload, ProtocolError, User};
use tracing::{debug, warn};

use crate::error::{Result, SdkError};
use crate::paths;
use crate::session::Session;
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// Borrowed view of a client used to run one operation.
pub(crate) struct Pipeline<'a> {
    session: &'a Session,
    transport: &'a dyn Transport,
}

impl<'a> Pipeline<'a> {
    pub(crate) fn new(session: &'a Session, transport: &'a dyn Transport) -> Self {
        Self { session, transport }
    }

    /// Bearer token of the session.
    pub(crate) fn token(&self) -> &str {
        self.session.token()
    }

    pub(crate) fn game(&self) -> &GameIdentifier {
        self.session.game()
    }

    /// Sends one request without interpreting the response.
    pub(crate) async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let method = request.method;
        let path = request.path.clone();
        debug!(?method, %path, "sending request");

        self.transport.send(request).await.inspect_err(|e| {
            warn!(?method, %path, error = %e, "request failed");
        })
    }

    /// Sends a request and decodes its envelope.
    ///
    /// A `success: false` envelope becomes [`SdkError::Server`] carrying the
    /// server's `error` string; the decoder only ever sees success payloads.
    pub(crate) async fn dispatch<T, D>(&self, request: ApiRequest, decode: D) -> Result<T>
    where
        D: FnOnce(Payload) -> Result<T, ProtocolError>,
    {
        let path = request.path.clone();
        let response = self.send(request).await?;

        let envelope = match Envelope::parse(&response.body) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!(%path, status = response.status, error = %e, "malformed response");
                if response.is_success() {
                    return Err(e.into());
                }
                return Err(ProtocolError::UnexpectedStatus(response.status).into());
            }
        };

        match envelope.into_result() {
            Ok(payload) => Ok(decode(payload)?),
            Err(error) => {
                debug!(%path, %error, "request rejected by server");
                Err(SdkError::Server(error))
            }
        }
    }

    /// Checks the token, then dispatches. The user is not decoded.
    pub(crate) async fn run_authorized<T, B, D>(&self, build: B, decode: D) -> Result<T>
    where
        B: FnOnce() -> ApiRequest,
        D: FnOnce(Payload) -> Result<T, ProtocolError>,
    {
        self.authorize().await?;
        self.dispatch(build(), decode).await
    }

    /// Resolves identity, then dispatches the request built from it.
    pub(crate) async fn run<T, B, D>(&self, build: B, decode: D) -> Result<T>
    where
        B: FnOnce(&User) -> ApiRequest,
        D: FnOnce(Payload) -> Result<T, ProtocolError>,
    {
        let user = self.resolve_identity().await?;
        let request = build(&user);
        self.dispatch(request, decode).await
    }

    /// Resolves identity and the session's game, then dispatches.
    pub(crate) async fn run_with_game<T, B, D>(&self, build: B, decode: D) -> Result<T>
    where
        B: FnOnce(&User, &Game) -> ApiRequest,
        D: FnOnce(Payload) -> Result<T, ProtocolError>,
    {
        let user = self.resolve_identity().await?;
        let game = self.fetch_game(self.game()).await?;
        let request = build(&user, &game);
        self.dispatch(request, decode).await
    }

    /// Looks up a game by id or key. Unauthenticated.
    pub(crate) async fn fetch_game(&self, game: &GameIdentifier) -> Result<Game> {
        self.dispatch(ApiRequest::get(paths::game(game)), |mut payload| {
            payload.take(keys::GAME)
        })
        .await
    }
}
