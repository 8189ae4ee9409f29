use courier_core::error::CourierError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Target chat: a numeric id or a channel username in the form `@name`.
///
/// The API also takes a numeric id sent as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl ChatId {
    /// Reject usernames the API cannot resolve.
    pub fn validate(&self, param: &str) -> Result<(), CourierError> {
        match self {
            Self::Id(_) => Ok(()),
            Self::Username(name) => {
                let is_handle = name.len() > 1 && name.starts_with('@');
                if is_handle || name.parse::<i64>().is_ok() {
                    Ok(())
                } else {
                    Err(CourierError::invalid(format!(
                        "{param} must be a chat id or an @username, got {name:?}"
                    )))
                }
            }
        }
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        Self::Username(username.to_string())
    }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self {
        Self::Username(username)
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Username(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_id_wire_forms() {
        assert_eq!(serde_json::to_value(ChatId::from(123)).unwrap(), json!(123));
        assert_eq!(
            serde_json::to_value(ChatId::from("@channel")).unwrap(),
            json!("@channel")
        );
        let id: ChatId = serde_json::from_value(json!(-100)).unwrap();
        assert_eq!(id, ChatId::Id(-100));
        let name: ChatId = serde_json::from_value(json!("@news")).unwrap();
        assert_eq!(name, ChatId::Username("@news".into()));
    }

    #[test]
    fn test_validate_numeric_string_id() {
        assert!(ChatId::from("-1001234567890").validate("chat_id").is_ok());
        assert!(ChatId::from("42").validate("from_chat_id").is_ok());
        let parsed: ChatId = serde_json::from_value(json!("-1001234567890")).unwrap();
        assert!(parsed.validate("chat_id").is_ok());
    }

    #[test]
    fn test_validate_username() {
        assert!(ChatId::from(0).validate("chat_id").is_ok());
        assert!(ChatId::from("@news").validate("chat_id").is_ok());

        let err = ChatId::from("news").validate("chat_id").unwrap_err();
        assert!(matches!(err, CourierError::InvalidRequestParameters(_)));
        assert!(err.to_string().contains("chat_id"));

        assert!(ChatId::from("@").validate("chat_id").is_err());
        assert!(ChatId::from("12ab").validate("chat_id").is_err());
        assert!(ChatId::from("").validate("chat_id").is_err());
    }
}
