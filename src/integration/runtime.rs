use std::mem;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{
    core::{
        cmd_executor::{CommandExecutor, Dispatcher},
        msg::Msg,
        state::State,
        subscription::{subscriptions, NoopSubscriptionManager, Subscription, SubscriptionManager},
        update::{update, Transition},
    },
    presentation::view::{view, View},
};

/// Single owner of the application state.
///
/// Every message, whatever task produced it, arrives through one channel
/// and is applied here one at a time.
pub struct Runtime {
    state: State,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    executor: Arc<dyn CommandExecutor>,
    subscription_manager: Arc<dyn SubscriptionManager>,
    active_subscriptions: Vec<Subscription>,
    render_requested: bool,
    stats: RuntimeStats,
}

impl Runtime {
    pub fn new(initial_state: State, executor: Arc<dyn CommandExecutor>) -> Self {
        Self::with_subscription_manager(
            initial_state,
            executor,
            Arc::new(NoopSubscriptionManager),
        )
    }

    pub fn with_subscription_manager(
        initial_state: State,
        executor: Arc<dyn CommandExecutor>,
        subscription_manager: Arc<dyn SubscriptionManager>,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let mut runtime = Self {
            state: initial_state,
            msg_tx,
            msg_rx,
            executor,
            subscription_manager,
            active_subscriptions: Vec::new(),
            render_requested: true,
            stats: RuntimeStats::default(),
        };
        runtime.sync_subscriptions();
        runtime
    }

    /// Handle for queueing messages from any task
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(self.msg_tx.clone())
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Projection of the current state
    pub fn view(&self) -> View {
        view(&self.state)
    }

    /// Applies `msg`, starts the resulting command and asks for a render.
    /// Returns false when the message was ignored in the current state.
    pub fn handle(&mut self, msg: Msg) -> bool {
        let name = msg.name();
        let _span = tracing::debug_span!("handle", msg = name).entered();
        if msg.is_frequent() {
            log::trace!("Runtime: handling {name}");
        } else {
            log::debug!("Runtime: handling {name}");
        }

        let state = mem::take(&mut self.state);
        let handled = match update(msg, state) {
            Transition::Next { state, cmd } => {
                self.state = state;
                self.stats.handled += 1;
                if let Some(cmd) = cmd {
                    self.stats.commands_issued += 1;
                    self.executor.execute(cmd, self.dispatcher());
                }
                self.sync_subscriptions();
                true
            }
            Transition::Ignored(state) => {
                self.state = state;
                self.stats.ignored += 1;
                log::debug!("Runtime: {name} ignored");
                false
            }
        };
        self.render_requested = true;
        handled
    }

    /// Applies every queued message without waiting; returns how many ran
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.handle(msg);
            processed += 1;
        }
        if processed > 0 {
            log::debug!("Runtime: {:?}", self.stats);
        }
        processed
    }

    /// Waits for the next queued message
    pub async fn next_message(&mut self) -> Option<Msg> {
        self.msg_rx.recv().await
    }

    /// Returns whether a render was requested since the last call and clears it
    pub fn take_render_request(&mut self) -> bool {
        mem::take(&mut self.render_requested)
    }

    pub fn stats(&self) -> RuntimeStats {
        self.stats.clone()
    }

    fn sync_subscriptions(&mut self) {
        let next = subscriptions(&self.state);
        for stale in self
            .active_subscriptions
            .iter()
            .filter(|s| !next.contains(s))
        {
            self.subscription_manager.remove(stale);
        }
        for fresh in next
            .iter()
            .filter(|s| !self.active_subscriptions.contains(s))
        {
            self.subscription_manager.add(fresh, self.dispatcher());
        }
        self.active_subscriptions = next;
    }
}

/// Runtime statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeStats {
    pub handled: usize,
    pub ignored: usize,
    pub commands_issued: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::cmd::Cmd,
        domain::{ObjectId, TwitterOperationError},
        test_helpers::{image, timeline_response, tweet, user, RecordingExecutor},
    };
    use pretty_assertions::assert_eq;

    fn create_test_runtime() -> (Runtime, Arc<RecordingExecutor>) {
        let executor = Arc::new(RecordingExecutor::default());
        let runtime = Runtime::new(
            State::initial(),
            Arc::clone(&executor) as Arc<dyn CommandExecutor>,
        );
        (runtime, executor)
    }

    #[test]
    fn test_runtime_creation() {
        let (mut runtime, _) = create_test_runtime();

        assert_eq!(runtime.state(), &State::Idle);
        assert_eq!(runtime.stats(), RuntimeStats::default());
        assert!(runtime.take_render_request());
        assert!(!runtime.take_render_request());
    }

    #[test]
    fn test_launch_issues_fetch_timeline() {
        let (mut runtime, executor) = create_test_runtime();

        assert!(runtime.handle(Msg::ApplicationLaunched));

        assert_eq!(runtime.state(), &State::Loading);
        assert_eq!(executor.commands(), vec![Cmd::FetchTimeline]);
        assert_eq!(runtime.stats().commands_issued, 1);
    }

    #[test]
    fn test_ignored_message_still_requests_render() {
        let (mut runtime, executor) = create_test_runtime();
        runtime.take_render_request();

        assert!(!runtime.handle(Msg::UserAvatarFetched(
            ObjectId::new("u1"),
            image(&[1])
        )));

        assert_eq!(runtime.state(), &State::Idle);
        assert!(executor.commands().is_empty());
        assert!(runtime.take_render_request());
        assert_eq!(
            runtime.stats(),
            RuntimeStats {
                handled: 0,
                ignored: 1,
                commands_issued: 0,
            }
        );
    }

    #[test]
    fn test_process_pending_drains_dispatched_messages() {
        let (mut runtime, executor) = create_test_runtime();
        let dispatcher = runtime.dispatcher();
        let response = timeline_response(
            vec![tweet("t1", "u1"), tweet("t2", "u2")],
            vec![user("u1", "alice"), user("u2", "bob")],
        );

        dispatcher.dispatch(Msg::ApplicationLaunched);
        dispatcher.dispatch(Msg::TimelineFetched(response.clone()));
        assert_eq!(runtime.state(), &State::Idle);

        assert_eq!(runtime.process_pending(), 2);

        let timeline = runtime.state().timeline().unwrap();
        assert_eq!(timeline.tweets.len(), 2);
        assert_eq!(
            executor.commands(),
            vec![
                Cmd::FetchTimeline,
                Cmd::FetchUserAvatars(response.avatar_requests())
            ]
        );
        assert_eq!(runtime.process_pending(), 0);
    }

    #[test]
    fn test_failure_while_loading() {
        let (mut runtime, _) = create_test_runtime();

        runtime.handle(Msg::ApplicationLaunched);
        runtime.handle(Msg::TwitterOperationFailure(
            TwitterOperationError::RequestFailure("timeout".to_string()),
        ));

        assert_eq!(
            runtime.state(),
            &State::Failed(TwitterOperationError::RequestFailure(
                "timeout".to_string()
            ))
        );
        assert!(runtime.view().alert.is_some());
    }

    #[tokio::test]
    async fn test_messages_from_concurrent_tasks_are_applied_in_turn() {
        let (mut runtime, _) = create_test_runtime();
        runtime.handle(Msg::ApplicationLaunched);
        let users: Vec<_> = (0..16).map(|i| user(&format!("u{i}"), "x")).collect();
        let tweets: Vec<_> = (0..16)
            .map(|i| tweet(&format!("t{i}"), &format!("u{i}")))
            .collect();
        runtime.handle(Msg::TimelineFetched(timeline_response(tweets, users)));

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let dispatcher = runtime.dispatcher();
                tokio::spawn(async move {
                    dispatcher.dispatch(Msg::UserAvatarFetched(
                        ObjectId::new(format!("u{i}")),
                        image(&[i]),
                    ));
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(runtime.process_pending(), 16);
        assert_eq!(runtime.state().timeline().unwrap().avatars.len(), 16);
        assert_eq!(runtime.stats().handled, 18);
    }

    #[tokio::test]
    async fn test_next_message() {
        let (mut runtime, _) = create_test_runtime();
        runtime.dispatcher().dispatch(Msg::ApplicationLaunched);

        assert_eq!(runtime.next_message().await, Some(Msg::ApplicationLaunched));
    }
}
