//! Cloud save transfer: upload, download, delete, list.
//!
//! Saves are addressed by `(username, game, save name)`. Downloads land in
//! `<save_dir>/<game id>/<save name>`, a cache the server stays
//! authoritative over.

use std::io;
use std::path::{Path, PathBuf};

use susteam_protocol::constants::keys;
use susteam_protocol::{Envelope, GameSave, ProtocolError};
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::client::Client;
use crate::error::{Result, SdkError};
use crate::paths;
use crate::transport::{ApiRequest, ApiResponse, FilePart};

/// Rejects save names that cannot be used as a single local file name.
fn validate_save_name(save_name: &str) -> Result<()> {
    let reason = if save_name.is_empty() {
        Some("empty save name")
    } else if save_name == "." || save_name == ".." {
        Some("save name is a directory reference")
    } else if save_name.contains(['/', '\\', '\0']) {
        Some("save name contains a path separator")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(SdkError::local_io(
            save_name,
            io::Error::new(io::ErrorKind::InvalidInput, reason),
        )),
        None => Ok(()),
    }
}

/// Extracts the file content of a download response.
///
/// A 2xx body is the file content, whatever it looks like. Otherwise a
/// failure envelope is reported as the server's error.
fn save_content(response: ApiResponse) -> Result<Vec<u8>> {
    if response.is_success() {
        return Ok(response.body);
    }

    match Envelope::parse(&response.body) {
        Ok(Envelope::Failure { error }) => Err(SdkError::Server(error)),
        _ => Err(ProtocolError::UnexpectedStatus(response.status).into()),
    }
}

/// Writes `content` to `<dir>/<save_name>`, creating `dir` if needed.
///
/// Returns once the data has been flushed to disk.
async fn write_save(dir: &Path, save_name: &str, content: &[u8]) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| SdkError::local_io(dir, e))?;

    let path = dir.join(save_name);
    let mut file = tokio::fs::File::create(&path)
        .await
        .map_err(|e| SdkError::local_io(&path, e))?;
    file.write_all(content)
        .await
        .map_err(|e| SdkError::local_io(&path, e))?;
    file.sync_all()
        .await
        .map_err(|e| SdkError::local_io(&path, e))?;

    Ok(path)
}

impl Client {
    /// Uploads `local_file` under its own file name.
    pub async fn save(&self, local_file: impl AsRef<Path>) -> Result<()> {
        let local_file = local_file.as_ref();
        let save_name = local_file
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                SdkError::local_io(
                    local_file,
                    io::Error::new(io::ErrorKind::InvalidInput, "path has no UTF-8 file name"),
                )
            })?;
        self.save_as(local_file, save_name).await
    }

    /// Uploads `local_file` under `save_name`, replacing any save of that name.
    pub async fn save_as(&self, local_file: impl AsRef<Path>, save_name: &str) -> Result<()> {
        let local_file = local_file.as_ref();
        validate_save_name(save_name)?;

        let pipeline = self.pipeline();
        let user = pipeline.resolve_identity().await?;

        let content = tokio::fs::read(local_file)
            .await
            .map_err(|e| SdkError::local_io(local_file, e))?;
        let size = content.len();

        let request = ApiRequest::post(paths::save(&user.username, pipeline.game(), save_name))
            .bearer(pipeline.token())
            .multipart(FilePart::save(save_name, content));
        pipeline.dispatch(request, |_| Ok(())).await?;

        info!(save_name, bytes = size, "save uploaded");
        Ok(())
    }

    /// Downloads `save_name` into the local save cache and returns its path.
    ///
    /// The session's game is resolved first so the cache directory is keyed
    /// by numeric game id even when the session holds a game key. The file
    /// is overwritten if present.
    pub async fn load(&self, save_name: &str) -> Result<PathBuf> {
        validate_save_name(save_name)?;

        let pipeline = self.pipeline();
        let user = pipeline.resolve_identity().await?;
        let game = pipeline.fetch_game(pipeline.game()).await?;

        let request = ApiRequest::get(paths::save(&user.username, pipeline.game(), save_name))
            .bearer(pipeline.token());
        let response = pipeline.send(request).await?;
        let content = save_content(response)?;

        let dir = self.save_dir().join(game.id.to_string());
        let path = write_save(&dir, save_name, &content).await?;

        info!(save_name, path = %path.display(), bytes = content.len(), "save downloaded");
        Ok(path)
    }

    /// Deletes the save named `save_name`.
    pub async fn delete_save(&self, save_name: &str) -> Result<()> {
        let pipeline = self.pipeline();
        pipeline
            .run(
                |user| {
                    ApiRequest::delete(paths::save(&user.username, pipeline.game(), save_name))
                        .bearer(pipeline.token())
                },
                |_| Ok(()),
            )
            .await
    }

    /// Lists the user's saves for the session's game.
    pub async fn get_all_game_saves(&self) -> Result<Vec<GameSave>> {
        let pipeline = self.pipeline();
        pipeline
            .run(
                |user| {
                    ApiRequest::get(paths::saves(&user.username, pipeline.game()))
                        .bearer(pipeline.token())
                },
                |mut payload| payload.take(keys::SAVES),
            )
            .await
    }
}
