//! View projection
//!
//! [`view`] maps a [`State`] to a [`View`], the render tree the renderer
//! draws. It only reads the state.

use std::slice;

use crate::{
    core::{route::Route, state::State},
    domain::{Image, ObjectId, Tweet, User},
};

pub const LOADING_MESSAGE: &str = "Fetching timeline ...";
pub const FAILURE_TITLE: &str = "Operation error";
pub const FAILURE_MESSAGE: &str =
    "There was an error while fetching the timeline. Do you want to try again?";
pub const FAILURE_BUTTONS: [&str; 2] = ["No", "Yes"];

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub title: &'static str,
    pub back_enabled: bool,
    pub body: Body,
    pub alert: Option<Alert>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Empty,
    Message(&'static str),
    Timeline(Vec<TweetItem>),
    Detail(TweetItem),
    /// `Detail` route pointing at a tweet that is not in the timeline
    InvalidId(ObjectId<Tweet>),
}

/// A tweet joined with its author and, once downloaded, the author's avatar
#[derive(Debug, Clone, PartialEq)]
pub struct TweetItem {
    pub tweet: Tweet,
    pub author: User,
    pub avatar: Option<Image>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub title: &'static str,
    pub message: &'static str,
    pub buttons: Vec<&'static str>,
}

impl Alert {
    fn operation_failed() -> Self {
        Self {
            title: FAILURE_TITLE,
            message: FAILURE_MESSAGE,
            buttons: FAILURE_BUTTONS.to_vec(),
        }
    }
}

impl View {
    fn root(body: Body) -> Self {
        Self {
            title: Route::Timeline.title(),
            back_enabled: false,
            body,
            alert: None,
        }
    }

    /// Tweets listed in the body, in display order
    pub fn items(&self) -> &[TweetItem] {
        match &self.body {
            Body::Timeline(items) => items,
            Body::Detail(item) => slice::from_ref(item),
            _ => &[],
        }
    }
}

pub fn view(state: &State) -> View {
    match state {
        State::Idle => View::root(Body::Empty),
        State::Loading => View::root(Body::Message(LOADING_MESSAGE)),
        State::Failed(e) => {
            log::debug!("Rendering failure alert for {e}");
            View {
                alert: Some(Alert::operation_failed()),
                ..View::root(Body::Empty)
            }
        }
        State::Complete(timeline) => {
            let item = |tweet: &Tweet| {
                timeline.author(tweet).map(|author| TweetItem {
                    tweet: tweet.clone(),
                    author: author.clone(),
                    avatar: timeline.avatar(&author.id).cloned(),
                })
            };
            let body = match &timeline.current_route {
                Route::Timeline => {
                    Body::Timeline(timeline.tweets.iter().filter_map(item).collect())
                }
                Route::Detail(id) => timeline
                    .tweet(id)
                    .and_then(item)
                    .map_or_else(|| Body::InvalidId(id.clone()), Body::Detail),
            };
            View {
                title: timeline.current_route.title(),
                back_enabled: timeline.current_route.previous().is_some(),
                body,
                alert: None,
            }
        }
    }
}
