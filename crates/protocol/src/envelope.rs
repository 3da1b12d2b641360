//! Response envelope decoding.
//!
//! Every endpoint answers `{"success": bool, ...}`. A failed envelope
//! carries `{"error": string}` and nothing else may be read from it. The
//! token endpoint is the exception: it answers with a boolean `token`
//! field and the bound `userRole`, and is decoded by [`Introspection`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::constants::keys;
use crate::types::User;

/// Errors produced when a response does not match the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("json format invalid")]
    InvalidFormat,

    #[error("response is not valid JSON: {0}")]
    NotJson(#[from] serde_json::Error),

    #[error("missing field `{0}`")]
    MissingField(String),

    #[error("invalid `{field}` payload: {source}")]
    InvalidField {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected HTTP status {0}")]
    UnexpectedStatus(u16),
}

/// A decoded `{success, ...}` response.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// `success: true`; the remaining fields are the payload.
    Success(Payload),
    /// `success: false` with the server-supplied message.
    Failure { error: String },
}

impl Envelope {
    /// Parses a raw response body.
    ///
    /// The body must be a JSON object with a boolean `success`. A failure
    /// envelope must carry a string `error`.
    pub fn parse(body: &[u8]) -> Result<Self, ProtocolError> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(value)
    }

    /// Decodes an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, ProtocolError> {
        let Value::Object(mut fields) = value else {
            return Err(ProtocolError::InvalidFormat);
        };

        let success = fields
            .remove("success")
            .and_then(|v| v.as_bool())
            .ok_or(ProtocolError::InvalidFormat)?;

        if success {
            return Ok(Envelope::Success(Payload { fields }));
        }

        match fields.remove("error") {
            Some(Value::String(error)) => Ok(Envelope::Failure { error }),
            _ => Err(ProtocolError::InvalidFormat),
        }
    }

    /// Returns the payload, or the server's error message verbatim.
    pub fn into_result(self) -> Result<Payload, String> {
        match self {
            Envelope::Success(payload) => Ok(payload),
            Envelope::Failure { error } => Err(error),
        }
    }
}

/// Fields of a successful envelope, minus `success`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    fields: Map<String, Value>,
}

impl Payload {
    /// Removes and decodes the field stored under `key`.
    pub fn take<T: DeserializeOwned>(&mut self, key: &str) -> Result<T, ProtocolError> {
        let value = self
            .fields
            .remove(key)
            .ok_or_else(|| ProtocolError::MissingField(key.to_string()))?;
        serde_json::from_value(value).map_err(|source| ProtocolError::InvalidField {
            field: key.to_string(),
            source,
        })
    }

    /// Whether the payload carries `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Decoded answer of the token endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Introspection {
    /// Whether the bearer token is currently valid.
    pub token: bool,
    user_role: Option<Value>,
}

impl Introspection {
    /// Parses a token endpoint body.
    ///
    /// Fails with [`ProtocolError::InvalidFormat`] when `token` is absent or
    /// not a boolean. `success` is not consulted.
    pub fn parse(body: &[u8]) -> Result<Self, ProtocolError> {
        let value: Value = serde_json::from_slice(body)?;
        let Value::Object(mut fields) = value else {
            return Err(ProtocolError::InvalidFormat);
        };

        let token = fields
            .get(keys::TOKEN)
            .and_then(Value::as_bool)
            .ok_or(ProtocolError::InvalidFormat)?;

        Ok(Self {
            token,
            user_role: fields.remove(keys::USER_ROLE),
        })
    }

    /// Decodes the bound user from `userRole`.
    pub fn into_user(self) -> Result<User, ProtocolError> {
        let value = self
            .user_role
            .ok_or_else(|| ProtocolError::MissingField(keys::USER_ROLE.to_string()))?;
        serde_json::from_value(value).map_err(|source| ProtocolError::InvalidField {
            field: keys::USER_ROLE.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Record;

    #[test]
    fn success_envelope_exposes_payload() {
        let body = br#"{"success":true,"records":[
            {"recordId":1,"gameId":10,"username":"a","score":50},
            {"recordId":2,"gameId":10,"username":"b","score":40}
        ]}"#;
        let env = Envelope::parse(body).unwrap();
        let mut payload = env.into_result().unwrap();
        assert!(payload.contains("records"));

        let records: Vec<Record> = payload.take("records").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].username, "b");
        assert!(payload.is_empty());
    }

    #[test]
    fn failure_envelope_keeps_message_verbatim() {
        let body = br#"{"success":false,"error":"game not found"}"#;
        let env = Envelope::parse(body).unwrap();
        assert_eq!(
            env,
            Envelope::Failure {
                error: "game not found".into()
            }
        );
        assert_eq!(env.into_result().unwrap_err(), "game not found");
    }

    #[test]
    fn failure_envelope_ignores_payload_fields() {
        let body = br#"{"success":false,"error":"nope","records":[]}"#;
        let env = Envelope::parse(body).unwrap();
        assert!(matches!(env, Envelope::Failure { .. }));
    }

    #[test]
    fn missing_success_is_invalid() {
        let err = Envelope::parse(br#"{"records":[]}"#).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidFormat));
        assert_eq!(err.to_string(), "json format invalid");
    }

    #[test]
    fn wrong_typed_success_is_invalid() {
        let err = Envelope::parse(br#"{"success":"yes"}"#).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidFormat));
    }

    #[test]
    fn failure_without_error_is_invalid() {
        let err = Envelope::parse(br#"{"success":false}"#).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidFormat));
    }

    #[test]
    fn non_object_is_invalid() {
        let err = Envelope::parse(b"[1,2,3]").unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidFormat));
    }

    #[test]
    fn garbage_is_not_json() {
        let err = Envelope::parse(b"<html>502</html>").unwrap_err();
        assert!(matches!(err, ProtocolError::NotJson(_)));
    }

    #[test]
    fn take_missing_field() {
        let mut payload = Envelope::parse(br#"{"success":true}"#)
            .unwrap()
            .into_result()
            .unwrap();
        let err = payload.take::<bool>("bought").unwrap_err();
        assert!(matches!(err, ProtocolError::MissingField(ref k) if k == "bought"));
    }

    #[test]
    fn take_wrong_type() {
        let mut payload = Envelope::parse(br#"{"success":true,"bought":"maybe"}"#)
            .unwrap()
            .into_result()
            .unwrap();
        let err = payload.take::<bool>("bought").unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidField { .. }));
    }

    #[test]
    fn introspection_valid_token() {
        let body = br#"{"success":true,"token":true,"userRole":{"username":"alice","mail":"a@b.c","roles":["user"]}}"#;
        let intro = Introspection::parse(body).unwrap();
        assert!(intro.token);
        let user = intro.into_user().unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.roles, vec!["user"]);
    }

    #[test]
    fn introspection_invalid_token() {
        let intro = Introspection::parse(br#"{"success":true,"token":false}"#).unwrap();
        assert!(!intro.token);
    }

    #[test]
    fn introspection_missing_token_field() {
        let err = Introspection::parse(br#"{"success":true}"#).unwrap_err();
        assert_eq!(err.to_string(), "json format invalid");
    }

    #[test]
    fn introspection_missing_user_role() {
        let intro = Introspection::parse(br#"{"token":true}"#).unwrap();
        let err = intro.into_user().unwrap_err();
        assert!(matches!(err, ProtocolError::MissingField(ref k) if k == "userRole"));
    }
}
