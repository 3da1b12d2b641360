//! Endpoint path templates.
//!
//! Every caller-supplied string segment goes through [`encode_segment`], so
//! a name is encoded identically whichever endpoint it ends up in.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use susteam_protocol::GameIdentifier;

/// Everything except RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes one path segment (UTF-8, spaces as `%20`).
pub(crate) fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

fn game_segment(game: &GameIdentifier) -> String {
    encode_segment(&game.to_string())
}

pub(crate) fn token() -> String {
    "/token".to_string()
}

pub(crate) fn game(game: &GameIdentifier) -> String {
    match game {
        GameIdentifier::Id(id) => format!("/game/{id}"),
        GameIdentifier::Key(key) => format!("/gameKey/{}", encode_segment(key)),
    }
}

pub(crate) fn achievements(game: &GameIdentifier) -> String {
    format!("/achievement/{}", game_segment(game))
}

pub(crate) fn achievement(game: &GameIdentifier, name: &str) -> String {
    format!("/achievement/{}/{}", game_segment(game), encode_segment(name))
}

pub(crate) fn achieve_process(game: &GameIdentifier) -> String {
    format!("/achieveProcess/{}", game_segment(game))
}

pub(crate) fn user_achieve_process(username: &str, game: &GameIdentifier, name: &str) -> String {
    format!(
        "/achieveProcess/{}/{}/{}",
        encode_segment(username),
        game_segment(game),
        encode_segment(name)
    )
}

pub(crate) fn records(game: &GameIdentifier) -> String {
    format!("/record/{}", game_segment(game))
}

pub(crate) fn rank(game: &GameIdentifier, count: u32) -> String {
    format!("/record/{}/{count}", game_segment(game))
}

pub(crate) fn max_score(game: &GameIdentifier, username: &str) -> String {
    format!("/record/max/{}/{}", game_segment(game), encode_segment(username))
}

pub(crate) fn friends() -> String {
    "/friend".to_string()
}

pub(crate) fn game_friends(game_id: i32) -> String {
    format!("/friend/{game_id}")
}

pub(crate) fn invite(friend: &str, game: &GameIdentifier) -> String {
    format!("/friend/invite/{}/{}", encode_segment(friend), game_segment(game))
}

pub(crate) fn check_bought(game_key: &str) -> String {
    format!("/check/key/{}", encode_segment(game_key))
}

pub(crate) fn saves(username: &str, game: &GameIdentifier) -> String {
    format!("/save/{}/{}", encode_segment(username), game_segment(game))
}

pub(crate) fn save(username: &str, game: &GameIdentifier, save_name: &str) -> String {
    format!(
        "/save/{}/{}/{}",
        encode_segment(username),
        game_segment(game),
        encode_segment(save_name)
    )
}
