use crate::error::{ProfileError, ProfileResult};
use crate::timestamp::Timestamp;

use serde::{Deserialize, Serialize};
use serde_json::Value;

const ANONYMOUS: &str = "Anonymous";

/// The site owner's public record together with its like bookkeeping.
///
/// The text fields hold whatever JSON value was last sent for them, usually a string.
///
/// `likes` always equals `liked_by.len()`, and `liked_by` holds each visitor at most once.
/// Both are private so that only [`Profile::like`] and [`Profile::unlike`] move them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: Value,
    pub title: Value,
    pub bio: Value,
    pub email: Value,
    pub github: Value,
    pub linkedin: Value,
    pub avatar: Value,
    likes: u64,
    liked_by: Vec<String>,
    joined_date: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<Timestamp>,
}

impl Profile {
    /// Placeholder profile as it looks before the owner fills it in.
    pub fn new(joined_date: Timestamp) -> Self {
        Self {
            name: Value::from("Your Name"),
            title: Value::from("Full Stack Developer"),
            bio: Value::from("Welcome to my personal web profile!"),
            email: Value::from("your.email@example.com"),
            github: Value::from("https://github.com/yourprofile"),
            linkedin: Value::from("https://linkedin.com/in/yourprofile"),
            avatar: Value::from("👤"),
            likes: 0,
            liked_by: vec![],
            joined_date,
            updated_at: None,
        }
    }

    pub fn likes(&self) -> u64 {
        self.likes
    }

    pub fn liked_by(&self) -> &[String] {
        &self.liked_by
    }

    pub fn joined_date(&self) -> Timestamp {
        self.joined_date
    }

    pub fn updated_at(&self) -> Option<Timestamp> {
        self.updated_at
    }

    /// Overwrite every field present in `update` and stamp `updated_at`.
    pub fn apply_update(&mut self, update: ProfileUpdate, now: Timestamp) {
        let ProfileUpdate {
            name,
            title,
            bio,
            email,
            github,
            linkedin,
        } = update;

        for (field, value) in [
            (&mut self.name, name),
            (&mut self.title, title),
            (&mut self.bio, bio),
            (&mut self.email, email),
            (&mut self.github, github),
            (&mut self.linkedin, linkedin),
        ] {
            if let Some(value) = value {
                *field = value.unwrap_or(Value::Null);
            }
        }

        self.updated_at = Some(now);
    }

    pub fn like(&mut self, visitor: &VisitorName) -> ProfileResult<LikeSummary> {
        if self.liked_by.iter().any(|name| name == visitor.as_str()) {
            return Err(ProfileError::AlreadyLiked { likes: self.likes });
        }

        self.liked_by.push(visitor.as_str().to_string());
        self.likes += 1;

        Ok(LikeSummary {
            likes: self.likes,
            message: format!("{visitor} liked your profile!"),
        })
    }

    pub fn unlike(&mut self, visitor: &VisitorName) -> ProfileResult<LikeSummary> {
        let index = self
            .liked_by
            .iter()
            .position(|name| name == visitor.as_str())
            .ok_or(ProfileError::NotLiked { likes: self.likes })?;

        self.liked_by.remove(index);
        self.likes -= 1;

        Ok(LikeSummary {
            likes: self.likes,
            message: format!("{visitor} unliked your profile"),
        })
    }
}

/// Partial profile sent with `PUT /api/profile`.
///
/// The outer `Option` says whether the field was sent at all, the inner one is `None` for an
/// explicit `null`. Any other JSON value is taken as is.
#[derive(Deserialize, Default, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ProfileUpdate {
    #[serde(with = "::serde_with::rust::double_option")]
    pub name: Option<Option<Value>>,
    #[serde(with = "::serde_with::rust::double_option")]
    pub title: Option<Option<Value>>,
    #[serde(with = "::serde_with::rust::double_option")]
    pub bio: Option<Option<Value>>,
    #[serde(with = "::serde_with::rust::double_option")]
    pub email: Option<Option<Value>>,
    #[serde(with = "::serde_with::rust::double_option")]
    pub github: Option<Option<Value>>,
    #[serde(with = "::serde_with::rust::double_option")]
    pub linkedin: Option<Option<Value>>,
}

/// Body of the like and unlike endpoints.
#[derive(Serialize, Deserialize, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct VisitorRequest {
    pub visitor_name: Option<serde_json::Value>,
}

impl VisitorRequest {
    pub fn visitor(&self) -> VisitorName {
        VisitorName::from_json(self.visitor_name.as_ref())
    }
}

/// Identifier a visitor likes the profile under. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitorName(String);

impl VisitorName {
    /// Falls back to `Anonymous` when no name, or an empty one, was given.
    pub fn resolve(name: Option<&str>) -> Self {
        match name {
            Some(name) if !name.is_empty() => Self(name.to_string()),
            _ => Self(ANONYMOUS.to_string()),
        }
    }

    /// Uses the text of any truthy JSON value; `null`, `false`, `0` and `""` mean `Anonymous`.
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(name)) => Self::resolve(Some(name.as_str())),
            Some(Value::Bool(true)) => Self("true".to_string()),
            Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Self(n.to_string()),
            Some(value @ (Value::Array(_) | Value::Object(_))) => Self(value.to_string()),
            _ => Self::resolve(None),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VisitorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LikeSummary {
    pub likes: u64,
    pub message: String,
}
