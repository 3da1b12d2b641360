//! Achievement definitions and per-user progress.

use serde_json::json;
use susteam_protocol::constants::keys;
use susteam_protocol::{Achievement, AchievementProcess};

use crate::client::Client;
use crate::error::Result;
use crate::paths;
use crate::transport::ApiRequest;

impl Client {
    /// Defines a new achievement for the session's game.
    pub async fn add_achievement(
        &self,
        name: &str,
        description: &str,
        achieve_count: i32,
    ) -> Result<()> {
        let pipeline = self.pipeline();
        pipeline
            .run_authorized(
                || {
                    ApiRequest::post(paths::achievements(pipeline.game()))
                        .bearer(pipeline.token())
                        .json(json!({
                            "achievementName": name,
                            "description": description,
                            "achieveCount": achieve_count,
                        }))
                },
                |_| Ok(()),
            )
            .await
    }

    /// Lists every achievement of the session's game.
    pub async fn get_all_achievements(&self) -> Result<Vec<Achievement>> {
        let pipeline = self.pipeline();
        pipeline
            .run_authorized(
                || ApiRequest::get(paths::achievements(pipeline.game())).bearer(pipeline.token()),
                |mut payload| payload.take(keys::ACHIEVEMENTS),
            )
            .await
    }

    /// Fetches one achievement by name.
    pub async fn get_achievement(&self, name: &str) -> Result<Achievement> {
        let pipeline = self.pipeline();
        pipeline
            .run_authorized(
                || {
                    ApiRequest::get(paths::achievement(pipeline.game(), name))
                        .bearer(pipeline.token())
                },
                |mut payload| payload.take(keys::ACHIEVEMENT),
            )
            .await
    }

    /// Sets the user's progress on achievement `name`.
    pub async fn update_user_achievement_process(&self, name: &str, rate: i32) -> Result<()> {
        let pipeline = self.pipeline();
        pipeline
            .run(
                |user| {
                    ApiRequest::post(paths::achieve_process(pipeline.game()))
                        .bearer(pipeline.token())
                        .json(json!({
                            "username": user.username,
                            "achievementName": name,
                            "rateOfProcess": rate,
                        }))
                },
                |_| Ok(()),
            )
            .await
    }

    /// Returns the user's progress on achievement `name`.
    pub async fn get_user_achievement_process(&self, name: &str) -> Result<i32> {
        let pipeline = self.pipeline();
        pipeline
            .run(
                |user| {
                    ApiRequest::get(paths::user_achieve_process(
                        &user.username,
                        pipeline.game(),
                        name,
                    ))
                    .bearer(pipeline.token())
                },
                |mut payload| {
                    payload
                        .take::<AchievementProcess>(keys::ACHIEVE_PROCESS)
                        .map(|p| p.rate_of_process)
                },
            )
            .await
    }
}
