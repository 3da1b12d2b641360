//! Score submission and leaderboards.

use serde_json::json;
use susteam_protocol::Record;
use susteam_protocol::constants::keys;

use crate::client::Client;
use crate::error::Result;
use crate::paths;
use crate::transport::ApiRequest;

impl Client {
    /// Submits a score for the user. Records are append-only.
    pub async fn add_record(&self, score: i32) -> Result<()> {
        let pipeline = self.pipeline();
        pipeline
            .run(
                |user| {
                    ApiRequest::post(paths::records(pipeline.game()))
                        .bearer(pipeline.token())
                        .json(json!({
                            "username": user.username,
                            "score": score,
                        }))
                },
                |_| Ok(()),
            )
            .await
    }

    /// Returns the top `count` records in the order the server ranks them.
    pub async fn get_rank(&self, count: u32) -> Result<Vec<Record>> {
        let pipeline = self.pipeline();
        pipeline
            .run(
                |_| ApiRequest::get(paths::rank(pipeline.game(), count)).bearer(pipeline.token()),
                |mut payload| payload.take(keys::RECORDS),
            )
            .await
    }

    /// Returns the user's best score in the session's game.
    pub async fn get_user_max_score(&self) -> Result<i32> {
        let pipeline = self.pipeline();
        pipeline
            .run(
                |user| {
                    ApiRequest::get(paths::max_score(pipeline.game(), &user.username))
                        .bearer(pipeline.token())
                },
                |mut payload| payload.take::<Record>(keys::RECORD).map(|r| r.score),
            )
            .await
    }
}
