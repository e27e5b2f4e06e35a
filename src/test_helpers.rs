//! Fixtures shared by unit tests, integration tests and benches

use std::collections::{HashMap, HashSet};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use futures::future::{BoxFuture, FutureExt};
use reqwest::Url;

use crate::{
    core::{
        cmd::Cmd,
        cmd_executor::{CommandExecutor, Dispatcher},
        state::{State, TimelineState},
    },
    domain::{Image, ObjectId, TimelineResponse, Tweet, TwitterOperationError, User},
    infrastructure::twitter::{TwitterResult, TwitterService},
};

/// Creation time of every fixture tweet
pub fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2008, 8, 27, 13, 8, 45)
        .single()
        .expect("valid timestamp")
}

pub fn avatar_url(user_id: &str) -> Url {
    Url::parse(&format!("https://pbs.example.com/avatars/{user_id}.png")).expect("valid url")
}

/// User whose display name equals its slug
pub fn user(id: &str, slug: &str) -> User {
    User::new(
        ObjectId::new(id),
        slug.to_string(),
        slug.to_string(),
        avatar_url(id),
    )
}

pub fn tweet(id: &str, user_id: &str) -> Tweet {
    Tweet {
        id: ObjectId::new(id),
        text: format!("tweet {id}"),
        created_at: created_at(),
        created_by: ObjectId::new(user_id),
        liked: false,
        place: None,
    }
}

pub fn image(bytes: &[u8]) -> Image {
    Image::new(bytes.to_vec(), Some("image/png".to_string()))
}

pub fn timeline_response(tweets: Vec<Tweet>, users: Vec<User>) -> TimelineResponse {
    let users: HashMap<_, _> = users.into_iter().map(|u| (u.id.clone(), u)).collect();
    TimelineResponse::new(tweets, users)
}

/// `Complete` state holding one tweet per `(tweet id, user id)` pair
pub fn complete_state(pairs: &[(&str, &str)]) -> State {
    let tweets = pairs.iter().map(|(t, u)| tweet(t, u)).collect();
    let users = pairs.iter().map(|(_, u)| user(u, u)).collect();
    State::Complete(TimelineState::from_response(timeline_response(
        tweets, users,
    )))
}

/// In-memory `TwitterService`
///
/// Image downloads return the URL bytes unless the URL was marked failing.
/// It records how many downloads ran at once.
#[derive(Debug)]
pub struct FakeTwitterService {
    timeline: TwitterResult<TimelineResponse>,
    failing_images: HashSet<Url>,
    image_delay: Duration,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
    image_requests: Arc<AtomicUsize>,
}

impl FakeTwitterService {
    pub fn with_timeline(response: TimelineResponse) -> Self {
        Self::new(Ok(response))
    }

    pub fn with_timeline_error(error: TwitterOperationError) -> Self {
        Self::new(Err(error))
    }

    fn new(timeline: TwitterResult<TimelineResponse>) -> Self {
        Self {
            timeline,
            failing_images: HashSet::new(),
            image_delay: Duration::ZERO,
            in_flight: Arc::new(AtomicUsize::new(0)),
            max_in_flight: Arc::new(AtomicUsize::new(0)),
            image_requests: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing_image(mut self, url: Url) -> Self {
        self.failing_images.insert(url);
        self
    }

    pub fn image_delay(mut self, delay: Duration) -> Self {
        self.image_delay = delay;
        self
    }

    /// Highest number of image downloads observed running together
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn image_requests(&self) -> usize {
        self.image_requests.load(Ordering::SeqCst)
    }
}

impl TwitterService for FakeTwitterService {
    fn fetch_timeline(&self) -> BoxFuture<'static, TwitterResult<TimelineResponse>> {
        let timeline = self.timeline.clone();
        async move { timeline }.boxed()
    }

    fn fetch_image(&self, url: &Url) -> BoxFuture<'static, TwitterResult<Image>> {
        let url = url.clone();
        let fails = self.failing_images.contains(&url);
        let delay = self.image_delay;
        let in_flight = Arc::clone(&self.in_flight);
        let max_in_flight = Arc::clone(&self.max_in_flight);
        let image_requests = Arc::clone(&self.image_requests);
        async move {
            image_requests.fetch_add(1, Ordering::SeqCst);
            let running = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            max_in_flight.fetch_max(running, Ordering::SeqCst);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            in_flight.fetch_sub(1, Ordering::SeqCst);
            if fails {
                Err(TwitterOperationError::RequestFailure(format!(
                    "{url}: 404 Not Found"
                )))
            } else {
                Ok(image(url.as_str().as_bytes()))
            }
        }
        .boxed()
    }
}

/// Executor that only remembers what it was asked to run
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    commands: Mutex<Vec<Cmd>>,
}

impl RecordingExecutor {
    pub fn commands(&self) -> Vec<Cmd> {
        self.commands
            .lock()
            .map(|commands| commands.clone())
            .unwrap_or_default()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&self, cmd: Cmd, _dispatcher: Dispatcher) {
        if let Ok(mut commands) = self.commands.lock() {
            commands.push(cmd);
        }
    }
}
