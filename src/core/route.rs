use crate::domain::{ObjectId, Tweet};

/// Logical navigation position of the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Timeline,
    Detail(ObjectId<Tweet>),
}

impl Route {
    /// Route the host starts on
    pub fn initial() -> Self {
        Self::Timeline
    }

    /// Target of back navigation; `Detail` always returns to `Timeline`
    pub fn previous(&self) -> Option<Route> {
        match self {
            Route::Timeline => None,
            Route::Detail(_) => Some(Route::Timeline),
        }
    }

    /// Whether the host may move from `self` to `next`
    pub fn can_navigate_to(&self, next: &Route) -> bool {
        match (self, next) {
            (_, Route::Timeline) => true,
            (Route::Timeline, Route::Detail(_)) => true,
            (Route::Detail(_), Route::Detail(_)) => false,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Timeline => "Timeline",
            Route::Detail(_) => "Tweet",
        }
    }
}
