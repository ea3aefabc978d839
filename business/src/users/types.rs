//! Wire types for the `/api/v1/users` resource.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Numeric user identifier, serialized as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u32);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub user_type: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Users in the order the server returned them.
pub type UserList = Vec<User>;

/// Body of `POST /api/v1/users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub user_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Body of `PUT /api/v1/users/{id}`; absent fields are left untouched server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UpdateUserPayload {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.mobile.is_none()
            && self.user_type.is_none()
            && self.password.is_none()
    }
}

/// `{ "status": 200, "message": "...", "data": [...] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersEnvelope {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<UserList>,
}

/// Body of `GET /api/v1/users`, kept as received.
///
/// Deployments disagree on whether the list is returned bare or wrapped in an
/// envelope; the API layer does not pick one, the store unwraps it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListUsersResponse {
    Flat(UserList),
    Envelope(UsersEnvelope),
    Unrecognized(serde_json::Value),
}

impl ListUsersResponse {
    pub fn into_users(self) -> Option<UserList> {
        match self {
            Self::Flat(users) => Some(users),
            Self::Envelope(envelope) => envelope.data,
            Self::Unrecognized(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_json(id: u32) -> serde_json::Value {
        json!({
            "id": id,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "mobile": "555-0100",
            "user_type": "admin"
        })
    }

    #[test]
    fn test_user_id_parse() {
        assert_eq!("42".parse::<UserId>(), Ok(UserId(42)));
        assert_eq!(" 7 ".parse::<UserId>(), Ok(UserId(7)));
        assert!("abc".parse::<UserId>().is_err());
        assert!("-1".parse::<UserId>().is_err());
    }

    #[test]
    fn test_user_deserializes_backend_dto() {
        let user: User = serde_json::from_value(user_json(1)).unwrap();
        assert_eq!(user.id, UserId(1));
        assert_eq!(user.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_update_payload_skips_absent_fields() {
        let payload = UpdateUserPayload {
            email: Some("new@example.com".to_owned()),
            ..Default::default()
        };
        assert!(!payload.is_empty());
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "email": "new@example.com" })
        );
        assert!(UpdateUserPayload::default().is_empty());
    }

    #[test]
    fn test_create_payload_omits_optional_fields() {
        let payload = CreateUserPayload {
            first_name: "A".to_owned(),
            last_name: "B".to_owned(),
            email: "a@b.c".to_owned(),
            mobile: "1".to_owned(),
            user_type: "staff".to_owned(),
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("password").is_none());
        assert!(value.get("middle_name").is_none());
        assert_eq!(value["user_type"], "staff");
    }

    #[test]
    fn test_list_response_flat() {
        let response: ListUsersResponse =
            serde_json::from_value(json!([user_json(1), user_json(2)])).unwrap();
        let users = response.into_users().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].id, UserId(2));
    }

    #[test]
    fn test_list_response_empty_array_is_flat() {
        let response: ListUsersResponse = serde_json::from_value(json!([])).unwrap();
        assert_eq!(response, ListUsersResponse::Flat(Vec::new()));
    }

    #[test]
    fn test_list_response_envelope() {
        let response: ListUsersResponse = serde_json::from_value(json!({
            "status": 200,
            "message": "ok",
            "data": [user_json(3)]
        }))
        .unwrap();
        assert!(matches!(response, ListUsersResponse::Envelope(_)));
        assert_eq!(response.into_users().unwrap()[0].id, UserId(3));
    }

    #[test]
    fn test_list_response_unexpected_shapes() {
        let response: ListUsersResponse =
            serde_json::from_value(json!({ "users": [user_json(1)] })).unwrap();
        assert_eq!(response.into_users(), None);

        let response: ListUsersResponse = serde_json::from_value(json!("nope")).unwrap();
        assert!(matches!(response, ListUsersResponse::Unrecognized(_)));
    }
}
