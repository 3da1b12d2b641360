fn main() {
    println!("Run `cargo test -p wire-compat` to execute wire compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use susteam_protocol::constants::keys;
    use susteam_protocol::{
        Achievement, AchievementProcess, Envelope, Friend, Game, GameSave, Introspection, Payload,
        Record,
    };

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads a recorded response body.
    fn load_fixture(name: &str) -> Vec<u8> {
        let path = fixtures_dir().join(name);
        fs::read(&path).unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
    }

    /// Decodes a fixture that must be a success envelope.
    fn success_payload(name: &str) -> Payload {
        let envelope = Envelope::parse(&load_fixture(name))
            .unwrap_or_else(|e| panic!("fixture {name} is not an envelope: {e}"));
        envelope
            .into_result()
            .unwrap_or_else(|e| panic!("fixture {name} is a failure envelope: {e}"))
    }

    // --- Token endpoint ---

    #[test]
    fn fixture_token_valid() {
        let intro = Introspection::parse(&load_fixture("token_valid.json")).unwrap();
        assert!(intro.token);

        let user = intro.into_user().unwrap();
        assert_eq!(user.username, "test001");
        assert_eq!(user.balance, 200);
        assert_eq!(user.roles, vec!["user"]);
        assert!(user.description.is_none());
    }

    #[test]
    fn fixture_token_invalid() {
        let intro = Introspection::parse(&load_fixture("token_invalid.json")).unwrap();
        assert!(!intro.token);
    }

    // --- Domain payloads ---

    #[test]
    fn fixture_game() {
        let game: Game = success_payload("game.json").take(keys::GAME).unwrap();
        assert_eq!(game.id, 10);
        assert_eq!(game.introduction.as_deref(), Some("贪吃蛇"));
        assert_eq!(game.publish_time.to_rfc3339(), "2020-11-18T12:00:00+00:00");
    }

    #[test]
    fn fixture_saves() {
        let saves: Vec<GameSave> = success_payload("saves.json").take(keys::SAVES).unwrap();
        assert_eq!(saves.len(), 2);
        assert_eq!(saves[0].save_name, "testfile.txt");
        assert!(saves[1].saved_time > saves[0].saved_time);
    }

    #[test]
    fn fixture_achievements() {
        let achievements: Vec<Achievement> = success_payload("achievements.json")
            .take(keys::ACHIEVEMENTS)
            .unwrap();
        assert_eq!(achievements.len(), 2);
        assert_eq!(achievements[1].achievement_name, "大胃王");
        assert_eq!(achievements[1].achieve_count, 100);
    }

    #[test]
    fn fixture_achieve_process() {
        let process: AchievementProcess = success_payload("achieve_process.json")
            .take(keys::ACHIEVE_PROCESS)
            .unwrap();
        assert_eq!(process.rate_of_process, 42);
    }

    #[test]
    fn fixture_records_keep_order() {
        let records: Vec<Record> = success_payload("records_rank.json")
            .take(keys::RECORDS)
            .unwrap();
        let ids: Vec<i32> = records.iter().map(|r| r.record_id).collect();
        assert_eq!(ids, vec![1, 4, 2]);
    }

    #[test]
    fn fixture_friends() {
        let friends: Vec<Friend> = success_payload("friends.json").take(keys::FRIENDS).unwrap();
        assert_eq!(friends.len(), 2);
        assert!(friends[0].online);
        assert!(!friends[1].online);
    }

    // --- Failure envelopes ---

    #[test]
    fn fixture_failure_message_verbatim() {
        let envelope = Envelope::parse(&load_fixture("check_bought_failure.json")).unwrap();
        assert_eq!(envelope.into_result().unwrap_err(), "game not found");
    }

    #[test]
    fn every_fixture_is_json_object() {
        for entry in fs::read_dir(fixtures_dir()).unwrap() {
            let path = entry.unwrap().path();
            let value: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap())
                .unwrap_or_else(|e| panic!("{} is not JSON: {e}", path.display()));
            assert!(value.is_object(), "{} is not an object", path.display());
        }
    }
}
