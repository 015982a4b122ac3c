//! BambooHR user accounts

use std::fmt;

use serde::de::{Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::employee::Employee;
use crate::utils::serde::{empty_object_if_none, option_string_or_number, string_or_number};

/// Account record from `GET v1/meta/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(with = "string_or_number")]
    pub id: String,
    /// Linked employee, absent for accounts without an employee record.
    #[serde(
        default,
        deserialize_with = "option_string_or_number::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub employee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// User merged with its directory record.
///
/// `employee_details` serializes as `{}` when the user has no matching
/// employee, never as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWithDetails {
    #[serde(flatten)]
    pub user: User,
    #[serde(default, with = "empty_object_if_none")]
    pub employee_details: Option<Employee>,
}

impl UserWithDetails {
    pub fn new(user: User, employee_details: Option<Employee>) -> Self {
        Self { user, employee_details }
    }
}

/// Body of `GET v1/meta/users`.
///
/// The provider answers with an object keyed by user id. Keys carry no
/// meaning beyond the record's own `id`, so the listing keeps only the values,
/// in the order they appear in the payload. A plain array is accepted too.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserListing(pub Vec<User>);

impl UserListing {
    pub fn into_users(self) -> Vec<User> {
        self.0
    }
}

impl<'de> Deserialize<'de> for UserListing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ListingVisitor;

        impl<'de> Visitor<'de> for ListingVisitor {
            type Value = UserListing;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object or array of user records")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut users = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((_key, user)) = map.next_entry::<String, User>()? {
                    users.push(user);
                }
                Ok(UserListing(users))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut users = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(user) = seq.next_element::<User>()? {
                    users.push(user);
                }
                Ok(UserListing(users))
            }
        }

        deserializer.deserialize_any(ListingVisitor)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn numeric_provider_ids_are_normalized() {
        let user: User = serde_json::from_value(json!({
            "id": 2222,
            "employeeId": 5,
            "firstName": "Ada",
            "email": "ada@example.com",
            "status": "enabled"
        }))
        .unwrap();

        assert_eq!(user.id, "2222");
        assert_eq!(user.employee_id.as_deref(), Some("5"));
        assert!(user.extra.is_empty());
    }

    #[test]
    fn numeric_ids_round_trip_as_strings() {
        let user: User =
            serde_json::from_value(json!({"id": 2222, "employeeId": 5, "status": "enabled"}))
                .unwrap();

        let written = serde_json::to_value(&user).unwrap();
        assert_eq!(written, json!({"id": "2222", "employeeId": "5", "status": "enabled"}));

        let back: User = serde_json::from_value(written).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn listing_keeps_payload_order_not_key_order() {
        let listing: UserListing = serde_json::from_str(
            r#"{"30": {"id": 30}, "10": {"id": 10}, "20": {"id": 20, "employeeId": null}}"#,
        )
        .unwrap();

        let ids: Vec<String> = listing.into_users().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec!["30", "10", "20"]);
    }

    #[test]
    fn listing_accepts_arrays() {
        let listing: UserListing = serde_json::from_str(r#"[{"id": "u1"}]"#).unwrap();
        assert_eq!(listing.0.len(), 1);
    }

    #[test]
    fn unmatched_user_serializes_empty_details() {
        let user: User = serde_json::from_value(json!({"id": "u1", "employeeId": "9"})).unwrap();
        let merged = UserWithDetails::new(user, None);

        assert_eq!(
            serde_json::to_value(&merged).unwrap(),
            json!({"id": "u1", "employeeId": "9", "employeeDetails": {}})
        );
    }

    #[test]
    fn matched_user_carries_directory_record() {
        let user: User = serde_json::from_value(json!({"id": "u1", "employeeId": "5"})).unwrap();
        let employee: Employee =
            serde_json::from_value(json!({"id": "5", "hireDate": "2020-01-01"})).unwrap();

        let merged = UserWithDetails::new(user, Some(employee));
        assert_eq!(
            serde_json::to_value(&merged).unwrap(),
            json!({
                "id": "u1",
                "employeeId": "5",
                "employeeDetails": {"id": "5", "hireDate": "2020-01-01"}
            })
        );
    }
}
