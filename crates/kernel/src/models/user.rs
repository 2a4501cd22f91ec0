//! User model: the people who own product categories.

use serde::{Deserialize, Serialize};

/// A catalog user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Sex marker as supplied by the source data.
    pub sex: Sex,
}

/// Sex marker on a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl User {
    /// Create a user record.
    pub fn new(id: i64, name: impl Into<String>, sex: Sex) -> Self {
        Self {
            id,
            name: name.into(),
            sex,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn sex_uses_single_letter_codes() {
        let json = serde_json::to_string(&Sex::Female).unwrap();
        assert_eq!(json, "\"f\"");

        let parsed: Sex = serde_json::from_str("\"m\"").unwrap();
        assert_eq!(parsed, Sex::Male);
    }

    #[test]
    fn user_deserializes_from_source_shape() {
        let user: User = serde_json::from_str(r#"{"id": 2, "name": "Anna", "sex": "f"}"#).unwrap();
        assert_eq!(user, User::new(2, "Anna", Sex::Female));
    }

    #[test]
    fn unknown_sex_code_is_rejected() {
        let result: Result<User, _> = serde_json::from_str(r#"{"id": 1, "name": "X", "sex": "x"}"#);
        assert!(result.is_err());
    }
}
