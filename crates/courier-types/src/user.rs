use serde::{Deserialize, Serialize};

use crate::object::TelegramObject;

/// A Telegram user or bot.
///
/// Docs: <https://core.telegram.org/bots/api#user>
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// IETF language tag of the user's language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    /// Returned only in `getMe`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_join_groups: Option<bool>,
    /// Returned only in `getMe`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_read_all_group_messages: Option<bool>,
    /// Returned only in `getMe`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_inline_queries: Option<bool>,
}

impl TelegramObject for User {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bot_user_round_trip() {
        let payload = json!({
            "id": 123456,
            "is_bot": true,
            "first_name": "Courier",
            "username": "courier_bot",
            "can_join_groups": true,
            "can_read_all_group_messages": false,
            "supports_inline_queries": false
        });
        let user = User::from_wire(payload.clone()).unwrap();
        assert!(user.is_bot);
        assert_eq!(user.can_read_all_group_messages, Some(false));
        assert_eq!(user.to_wire().unwrap(), payload);
    }

    #[test]
    fn test_false_is_bot_is_emitted() {
        let user = User::from_wire(json!({"id": 1, "is_bot": false, "first_name": ""})).unwrap();
        assert_eq!(
            user.to_wire().unwrap(),
            json!({"id": 1, "is_bot": false, "first_name": ""})
        );
    }
}
