use crate::core::{cmd_executor::Dispatcher, state::State};

/// Long-lived external event sources.
///
/// This application registers none, so the type has no values; it exists
/// so that a `SubscriptionManager` can be wired without changing the
/// runtime when one is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subscription {}

pub trait SubscriptionManager: Send + Sync {
    fn add(&self, subscription: &Subscription, dispatcher: Dispatcher);
    fn remove(&self, subscription: &Subscription);
}

/// Subscriptions for a given state
pub fn subscriptions(_state: &State) -> Vec<Subscription> {
    Vec::new()
}

#[derive(Debug, Clone, Default)]
pub struct NoopSubscriptionManager;

impl SubscriptionManager for NoopSubscriptionManager {
    fn add(&self, subscription: &Subscription, _dispatcher: Dispatcher) {
        match *subscription {}
    }

    fn remove(&self, subscription: &Subscription) {
        match *subscription {}
    }
}
