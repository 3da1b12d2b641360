//! Game lookup and purchase checks.

use susteam_protocol::constants::keys;
use susteam_protocol::{Game, GameIdentifier};

use crate::client::Client;
use crate::error::Result;
use crate::paths;
use crate::transport::ApiRequest;

impl Client {
    /// Looks up a game by numeric id or by game key. No authentication.
    pub async fn get_game(&self, game: &GameIdentifier) -> Result<Game> {
        self.pipeline().fetch_game(game).await
    }

    /// Looks up the session's own game.
    pub async fn game(&self) -> Result<Game> {
        let pipeline = self.pipeline();
        pipeline.fetch_game(pipeline.game()).await
    }

    /// Whether the session's user owns the game behind `game_key`.
    pub async fn check_bought(&self, game_key: &str) -> Result<bool> {
        let pipeline = self.pipeline();
        let request = ApiRequest::get(paths::check_bought(game_key)).bearer(pipeline.token());
        pipeline
            .dispatch(request, |mut payload| payload.take(keys::BOUGHT))
            .await
    }
}
