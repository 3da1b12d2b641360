/// Base URL every endpoint path is appended to.
pub const DEFAULT_BASE_URL: &str = "https://susteam.gogo.moe/api";

/// Multipart form field carrying an uploaded save file.
pub const SAVE_FIELD_NAME: &str = "txt-file";

/// Declared media type of uploaded save files.
///
/// The service only stores text saves.
pub const SAVE_MEDIA_TYPE: &str = "text/plain";

/// Avatar path the service substitutes for users without one.
pub const DEFAULT_AVATAR: &str = "/avatar/default.jpg";

/// Payload keys used inside success envelopes.
pub mod keys {
    pub const GAME: &str = "game";
    pub const USER_ROLE: &str = "userRole";
    pub const TOKEN: &str = "token";
    pub const SAVES: &str = "saves";
    pub const ACHIEVEMENTS: &str = "achievements";
    pub const ACHIEVEMENT: &str = "achievement";
    pub const ACHIEVE_PROCESS: &str = "achieveProcess";
    pub const RECORDS: &str = "records";
    pub const RECORD: &str = "record";
    pub const FRIENDS: &str = "friends";
    pub const BOUGHT: &str = "bought";
}
