use crate::{
    core::route::Route,
    domain::{Image, ObjectId, TimelineResponse, TwitterOperationError, User},
};

/// Events fed into the update function.
///
/// `ApplicationLaunched` comes from the host, `RouteChanged` from the
/// navigation translator, everything else from the command executor.
#[derive(Debug, Clone, PartialEq, strum::IntoStaticStr)]
pub enum Msg {
    ApplicationLaunched,
    RouteChanged(Route),
    TimelineFetched(TimelineResponse),
    UserAvatarFetched(ObjectId<User>, Image),
    TwitterOperationFailure(TwitterOperationError),
}

impl Msg {
    /// Variant name for logging without dumping payloads
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, Msg::UserAvatarFetched(..))
    }
}
