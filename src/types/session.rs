use serde::{Deserialize, Serialize};

use crate::types::StudentLevel;

/// Identity carried by an authenticated admin session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SessionUser {
    pub id: String,
    pub class: StudentLevel,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn optional_fields_may_be_absent() {
        let user: SessionUser = serde_json::from_value(json!({
            "id": "u1",
            "class": "B3",
            "email": "student@example.org",
        }))
        .unwrap();

        assert_eq!(user.class, StudentLevel::B3);
        assert_eq!(user.name, None);
        assert_eq!(user.role, None);
    }

    #[test]
    fn full_session_round_trips() {
        let user: SessionUser = serde_json::from_value(json!({
            "id": "u2",
            "class": "M2",
            "email": "staff@example.org",
            "name": "Staff",
            "role": "admin",
        }))
        .unwrap();

        assert_eq!(user.role.as_deref(), Some("admin"));
        assert_eq!(serde_json::to_value(&user).unwrap()["class"], "M2");
    }
}
