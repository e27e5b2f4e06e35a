use chrono::{DateTime, Utc};
use reqwest::Url;

use crate::domain::id::ObjectId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: ObjectId<User>,
    pub slug: String,
    pub name: String,
    pub avatar_url: Url,
}

impl User {
    pub fn new(id: ObjectId<User>, slug: String, name: String, avatar_url: Url) -> Self {
        Self {
            id,
            slug,
            name,
            avatar_url,
        }
    }

    /// Handle as shown next to the display name
    pub fn handle(&self) -> String {
        format!("@{}", self.slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tweet {
    pub id: ObjectId<Tweet>,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub created_by: ObjectId<User>,
    pub liked: bool,
    pub place: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_user_handle() {
        let user = User::new(
            ObjectId::new("1"),
            "guidomb".to_string(),
            "Guido".to_string(),
            Url::parse("https://pbs.example.com/a.png").unwrap(),
        );

        assert_eq!(user.handle(), "@guidomb");
    }
}
