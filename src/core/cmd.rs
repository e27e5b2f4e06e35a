use reqwest::Url;

use crate::domain::{ObjectId, User};

/// Elm-like command definitions
/// Side effects requested by the update function, executed by a `CommandExecutor`
#[derive(Debug, Clone, PartialEq, Eq, strum::IntoStaticStr)]
pub enum Cmd {
    /// Fetch one page of the home timeline
    FetchTimeline,
    /// Fetch the avatar of each listed user
    FetchUserAvatars(Vec<(ObjectId<User>, Url)>),
}

impl Cmd {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Upper bound of messages the command dispatches back
    pub fn max_messages(&self) -> usize {
        match self {
            Cmd::FetchTimeline => 1,
            Cmd::FetchUserAvatars(pairs) => pairs.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cmd_name() {
        assert_eq!(Cmd::FetchTimeline.name(), "FetchTimeline");
        assert_eq!(Cmd::FetchUserAvatars(vec![]).name(), "FetchUserAvatars");
    }

    #[test]
    fn test_cmd_max_messages() {
        let url = Url::parse("https://pbs.example.com/a.png").unwrap();
        let cmd = Cmd::FetchUserAvatars(vec![
            (ObjectId::new("1"), url.clone()),
            (ObjectId::new("2"), url),
        ]);

        assert_eq!(Cmd::FetchTimeline.max_messages(), 1);
        assert_eq!(cmd.max_messages(), 2);
    }
}
