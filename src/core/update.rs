use crate::core::{
    cmd::Cmd,
    msg::Msg,
    state::{State, TimelineState},
};

/// Outcome of applying a message to a state
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// The message was handled
    Next { state: State, cmd: Option<Cmd> },
    /// The message means nothing in this state; the state comes back untouched
    Ignored(State),
}

impl Transition {
    fn next(state: State, cmd: Option<Cmd>) -> Self {
        Transition::Next { state, cmd }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Transition::Ignored(_))
    }

    pub fn state(&self) -> &State {
        match self {
            Transition::Next { state, .. } | Transition::Ignored(state) => state,
        }
    }

    pub fn cmd(&self) -> Option<&Cmd> {
        match self {
            Transition::Next { cmd, .. } => cmd.as_ref(),
            Transition::Ignored(_) => None,
        }
    }

    pub fn into_parts(self) -> (State, Option<Cmd>) {
        match self {
            Transition::Next { state, cmd } => (state, cmd),
            Transition::Ignored(state) => (state, None),
        }
    }
}

/// Elm-like update function
/// Returns the next state and the command to run, or hands the state back
/// when the message does not apply to it
pub fn update(msg: Msg, state: State) -> Transition {
    match (state, msg) {
        (State::Idle, Msg::ApplicationLaunched) => {
            Transition::next(State::Loading, Some(Cmd::FetchTimeline))
        }

        (State::Loading, Msg::TimelineFetched(response)) => {
            let avatars = Cmd::FetchUserAvatars(response.avatar_requests());
            let timeline = TimelineState::from_response(response);
            Transition::next(State::Complete(timeline), Some(avatars))
        }

        (State::Loading, Msg::TwitterOperationFailure(error)) => {
            Transition::next(State::Failed(error), None)
        }

        (State::Complete(mut timeline), Msg::UserAvatarFetched(user_id, image)) => {
            if !timeline.users.contains_key(&user_id) {
                log::warn!("Ignoring avatar for unknown user {user_id}");
                return Transition::Ignored(State::Complete(timeline));
            }
            timeline.avatars.insert(user_id, image);
            Transition::next(State::Complete(timeline), None)
        }

        (State::Complete(mut timeline), Msg::RouteChanged(route)) => {
            timeline.current_route = route;
            Transition::next(State::Complete(timeline), None)
        }

        (state, _) => Transition::Ignored(state),
    }
}
