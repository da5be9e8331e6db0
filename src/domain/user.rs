//! User - Profile Records Returned by the API

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::DEFAULT_AVATAR_URL;

/// Opaque user identifier as issued by the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A user profile as served by `GET /api/user/{id}`
///
/// Every field tolerates being absent or `null` on the wire. The view never
/// needs the record's own id (the subject comes from the route), so `_id` is
/// read leniently and a duplicate `id` is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    #[serde(
        rename = "_id",
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<UserId>,
    pub name: Option<String>,
    pub profile_picture: Option<String>,
    #[serde(deserialize_with = "lenient_count")]
    pub posts_count: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub followers: Vec<UserId>,
    #[serde(deserialize_with = "null_as_default")]
    pub following: Vec<UserId>,
}

impl UserProfile {
    /// Display name, `None` when missing or blank
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.trim().is_empty())
    }

    /// Picture URL, falling back to the shared default avatar
    pub fn picture_url(&self) -> &str {
        self.profile_picture
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_AVATAR_URL)
    }

    pub fn posts_count(&self) -> u64 {
        self.posts_count.unwrap_or(0)
    }

    pub fn followers_count(&self) -> usize {
        self.followers.len()
    }

    pub fn following_count(&self) -> usize {
        self.following.len()
    }

    /// Whether `user` is among this profile's followers
    pub fn has_follower(&self, user: &UserId) -> bool {
        self.followers.contains(user)
    }

    /// Whether this profile follows `user`
    pub fn follows(&self, user: &UserId) -> bool {
        self.following.contains(user)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a plain string or an extended-JSON `{"$oid": "..."}`; anything
/// else decodes as `None`.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<UserId>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Value::deserialize(deserializer)? {
        Value::String(id) => Some(id),
        Value::Object(mut map) => match map.remove("$oid") {
            Some(Value::String(id)) => Some(id),
            _ => None,
        },
        _ => None,
    };
    Ok(id.map(UserId::from).filter(|id| !id.is_blank()))
}

/// Accepts integers, non-negative floats (truncated) and numeric strings
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(count
        .filter(|f| f.is_finite() && *f >= 0.0)
        .map(|f| f as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_profile() {
        let json = r#"{
            "_id": "u1",
            "name": "Ana",
            "profilePicture": "https://cdn/ana.png",
            "postsCount": 12,
            "followers": ["u2", "u3"],
            "following": ["u2"]
        }"#;
        let profile: UserProfile = serde_json::from_str(json).expect("valid profile");

        assert_eq!(profile.id, Some(UserId::from("u1")));
        assert_eq!(profile.display_name(), Some("Ana"));
        assert_eq!(profile.picture_url(), "https://cdn/ana.png");
        assert_eq!(profile.posts_count(), 12);
        assert_eq!(profile.followers_count(), 2);
        assert_eq!(profile.following_count(), 1);
        assert!(profile.has_follower(&UserId::from("u3")));
        assert!(profile.follows(&UserId::from("u2")));
        assert!(!profile.follows(&UserId::from("u3")));
    }

    #[test]
    fn test_decode_sparse_profile_uses_fallbacks() {
        let json = r#"{ "id": "u9", "name": "  ", "profilePicture": null, "followers": null }"#;
        let profile: UserProfile = serde_json::from_str(json).expect("sparse profile");

        assert_eq!(profile.id, None);
        assert_eq!(profile.display_name(), None);
        assert_eq!(profile.picture_url(), DEFAULT_AVATAR_URL);
        assert_eq!(profile.posts_count(), 0);
        assert!(profile.followers.is_empty());
        assert!(profile.following.is_empty());
    }

    #[test]
    fn test_follower_order_is_preserved() {
        let json = r#"{ "followers": ["c", "a", "b"] }"#;
        let profile: UserProfile = serde_json::from_str(json).expect("profile");
        let ids: Vec<&str> = profile.followers.iter().map(UserId::as_str).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_decode_profile_with_both_id_fields() {
        let json = r#"{"_id":"u1","id":"u1","name":"Ana","followers":["me"],"following":[]}"#;
        let profile: UserProfile = serde_json::from_str(json).expect("profile with virtual id");

        assert_eq!(profile.id, Some(UserId::from("u1")));
        assert!(profile.has_follower(&UserId::from("me")));
    }

    #[test]
    fn test_decode_extended_json_id() {
        let json = r#"{"_id":{"$oid":"66ab12"},"name":"Ana"}"#;
        let profile: UserProfile = serde_json::from_str(json).expect("extended id");
        assert_eq!(profile.id, Some(UserId::from("66ab12")));

        let json = r#"{"_id":42,"name":"Ana"}"#;
        let profile: UserProfile = serde_json::from_str(json).expect("numeric id");
        assert_eq!(profile.id, None);
    }

    #[test]
    fn test_posts_count_is_read_leniently() {
        for (raw, expected) in [
            ("3", 3),
            ("3.0", 3),
            ("\"7\"", 7),
            ("-1", 0),
            ("null", 0),
            ("\"many\"", 0),
        ] {
            let json = format!(r#"{{"postsCount":{raw}}}"#);
            let profile: UserProfile = serde_json::from_str(&json).expect("profile");
            assert_eq!(profile.posts_count(), expected, "{raw}");
        }
    }
}
