use std::collections::HashMap;

use crate::domain::{
    id::ObjectId,
    tweet::{Tweet, User},
};

/// One page of the home timeline as delivered by the network layer.
///
/// Every `Tweet::created_by` refers to an entry of `users`; the parser
/// guarantees this before the response reaches the update function.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimelineResponse {
    pub tweets: Vec<Tweet>,
    pub users: HashMap<ObjectId<User>, User>,
}

impl TimelineResponse {
    pub fn new(tweets: Vec<Tweet>, users: HashMap<ObjectId<User>, User>) -> Self {
        Self { tweets, users }
    }

    /// `(user id, avatar url)` pairs for every author, ordered by user id
    pub fn avatar_requests(&self) -> Vec<(ObjectId<User>, reqwest::Url)> {
        let mut pairs: Vec<_> = self
            .users
            .values()
            .map(|user| (user.id.clone(), user.avatar_url.clone()))
            .collect();
        pairs.sort_by(|(a, _), (b, _)| a.cmp(b));
        pairs
    }
}
