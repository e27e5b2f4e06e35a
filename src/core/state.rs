use std::collections::HashMap;

use crate::{
    core::route::Route,
    domain::{Image, ObjectId, TimelineResponse, Tweet, TwitterOperationError, User},
};

/// Application state
///
/// Owned by the runtime; the update function takes it by value and hands
/// back the next one.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum State {
    /// Nothing fetched yet
    #[default]
    Idle,
    /// Timeline fetch in flight
    Loading,
    /// Timeline fetch failed; nothing leaves this state
    Failed(TwitterOperationError),
    /// Timeline available, avatars arriving
    Complete(TimelineState),
}

/// Payload of `State::Complete`
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineState {
    /// In the order delivered by the service
    pub tweets: Vec<Tweet>,
    pub users: HashMap<ObjectId<User>, User>,
    /// Keys are always a subset of `users` keys
    pub avatars: HashMap<ObjectId<User>, Image>,
    pub current_route: Route,
}

impl State {
    pub fn initial() -> Self {
        Self::Idle
    }

    pub fn timeline(&self) -> Option<&TimelineState> {
        match self {
            State::Complete(timeline) => Some(timeline),
            _ => None,
        }
    }

    pub fn current_route(&self) -> Option<&Route> {
        self.timeline().map(|timeline| &timeline.current_route)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, State::Loading)
    }
}

impl TimelineState {
    pub fn from_response(response: TimelineResponse) -> Self {
        Self {
            tweets: response.tweets,
            users: response.users,
            avatars: HashMap::new(),
            current_route: Route::Timeline,
        }
    }

    pub fn tweet(&self, id: &ObjectId<Tweet>) -> Option<&Tweet> {
        self.tweets.iter().find(|tweet| &tweet.id == id)
    }

    /// Author of `tweet`, if known
    pub fn author(&self, tweet: &Tweet) -> Option<&User> {
        self.users.get(&tweet.created_by)
    }

    pub fn avatar(&self, user_id: &ObjectId<User>) -> Option<&Image> {
        self.avatars.get(user_id)
    }

    pub fn len(&self) -> usize {
        self.tweets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{timeline_response, tweet, user};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_state_default() {
        assert_eq!(State::default(), State::Idle);
        assert_eq!(State::initial(), State::Idle);
        assert!(State::Idle.timeline().is_none());
        assert!(State::Loading.is_loading());
    }

    #[test]
    fn test_timeline_state_from_response() {
        let response = timeline_response(
            vec![tweet("t2", "u1"), tweet("t1", "u1")],
            vec![user("u1", "alice")],
        );

        let timeline = TimelineState::from_response(response);

        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline.tweets[0].id, ObjectId::new("t2"));
        assert_eq!(timeline.users.len(), 1);
        assert!(timeline.avatars.is_empty());
        assert_eq!(timeline.current_route, Route::Timeline);
    }

    #[test]
    fn test_lookup_helpers() {
        let timeline = TimelineState::from_response(timeline_response(
            vec![tweet("t1", "u1")],
            vec![user("u1", "alice")],
        ));
        let first = &timeline.tweets[0];

        assert_eq!(timeline.tweet(&ObjectId::new("t1")), Some(first));
        assert!(timeline.tweet(&ObjectId::new("missing")).is_none());
        assert_eq!(timeline.author(first).map(|u| u.slug.as_str()), Some("alice"));
        assert!(timeline.avatar(&ObjectId::new("u1")).is_none());
    }
}
