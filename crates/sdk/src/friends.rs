//! Friend lists and game invites.

use susteam_protocol::Friend;
use susteam_protocol::constants::keys;

use crate::client::Client;
use crate::error::Result;
use crate::paths;
use crate::transport::ApiRequest;

impl Client {
    /// Lists all friends of the token's user.
    pub async fn friends(&self) -> Result<Vec<Friend>> {
        let pipeline = self.pipeline();
        let request = ApiRequest::get(paths::friends()).bearer(pipeline.token());
        pipeline
            .dispatch(request, |mut payload| payload.take(keys::FRIENDS))
            .await
    }

    /// Lists friends who also own the session's game.
    pub async fn game_friends(&self) -> Result<Vec<Friend>> {
        let pipeline = self.pipeline();
        pipeline
            .run_with_game(
                |_, game| ApiRequest::get(paths::game_friends(game.id)).bearer(pipeline.token()),
                |mut payload| payload.take(keys::FRIENDS),
            )
            .await
    }

    /// Invites `friend` to the session's game.
    pub async fn invite(&self, friend: &str) -> Result<()> {
        let pipeline = self.pipeline();
        let request = ApiRequest::get(paths::invite(friend, pipeline.game())).bearer(pipeline.token());
        pipeline.dispatch(request, |_| Ok(())).await
    }
}
