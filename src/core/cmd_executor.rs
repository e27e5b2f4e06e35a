use std::sync::Arc;

use reqwest::Url;
use tokio::sync::{mpsc, Semaphore};

use crate::{
    core::{cmd::Cmd, msg::Msg},
    domain::{ObjectId, User},
    infrastructure::twitter::TwitterService,
};

/// Cloneable handle that feeds messages back into the runtime.
///
/// Safe to use from any task or thread; every message ends up in the
/// runtime's single queue, so the update function never runs concurrently.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Msg>,
}

impl Dispatcher {
    pub fn new(tx: mpsc::UnboundedSender<Msg>) -> Self {
        Self { tx }
    }

    /// Queues `msg`; returns false when the runtime is gone
    pub fn dispatch(&self, msg: Msg) -> bool {
        match self.tx.send(msg) {
            Ok(()) => true,
            Err(mpsc::error::SendError(msg)) => {
                log::warn!("Dispatcher: runtime closed, dropping {}", msg.name());
                false
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Turns commands into asynchronous work.
///
/// `execute` must not block: it starts the work and returns. Results come
/// back only through `dispatcher`.
pub trait CommandExecutor: Send + Sync {
    fn execute(&self, cmd: Cmd, dispatcher: Dispatcher);
}

/// Command executor backed by a `TwitterService`
///
/// - `FetchTimeline` dispatches exactly one message, success or failure.
/// - `FetchUserAvatars` dispatches one message per avatar that downloads;
///   failures are logged and dropped. At most `avatar_concurrency`
///   downloads run at once.
pub struct CmdExecutor<S> {
    service: Arc<S>,
    avatar_permits: Arc<Semaphore>,
}

impl<S: TwitterService + 'static> CmdExecutor<S> {
    pub fn new(service: S, avatar_concurrency: usize) -> Self {
        Self::with_shared_service(Arc::new(service), avatar_concurrency)
    }

    pub fn with_shared_service(service: Arc<S>, avatar_concurrency: usize) -> Self {
        Self {
            service,
            avatar_permits: Arc::new(Semaphore::new(avatar_concurrency.max(1))),
        }
    }

    fn fetch_timeline(&self, dispatcher: Dispatcher) {
        let fetch = self.service.fetch_timeline();
        tokio::spawn(async move {
            let msg = match fetch.await {
                Ok(response) => {
                    log::info!(
                        "Fetched timeline: {} tweets by {} users",
                        response.tweets.len(),
                        response.users.len()
                    );
                    Msg::TimelineFetched(response)
                }
                Err(e) => {
                    log::error!("Failed to fetch timeline: {e}");
                    Msg::TwitterOperationFailure(e)
                }
            };
            dispatcher.dispatch(msg);
        });
    }

    fn fetch_user_avatars(&self, pairs: Vec<(ObjectId<User>, Url)>, dispatcher: Dispatcher) {
        log::debug!("Fetching {} avatars", pairs.len());
        for (user_id, url) in pairs {
            let service = Arc::clone(&self.service);
            let permits = Arc::clone(&self.avatar_permits);
            let dispatcher = dispatcher.clone();
            tokio::spawn(async move {
                let Ok(_permit) = permits.acquire_owned().await else {
                    return;
                };
                match service.fetch_image(&url).await {
                    Ok(image) => {
                        log::debug!("Fetched avatar of {user_id} ({} bytes)", image.len());
                        dispatcher.dispatch(Msg::UserAvatarFetched(user_id, image));
                    }
                    Err(e) => {
                        log::warn!("Failed to fetch avatar of {user_id} from {url}: {e}");
                    }
                }
            });
        }
    }
}

impl<S: TwitterService + 'static> CommandExecutor for CmdExecutor<S> {
    fn execute(&self, cmd: Cmd, dispatcher: Dispatcher) {
        log::debug!("CmdExecutor: executing {}", cmd.name());
        match cmd {
            Cmd::FetchTimeline => self.fetch_timeline(dispatcher),
            Cmd::FetchUserAvatars(pairs) => self.fetch_user_avatars(pairs, dispatcher),
        }
    }
}
