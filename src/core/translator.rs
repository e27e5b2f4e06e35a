use crate::core::{msg::Msg, route::Route};

/// Translates a host-level route change into a domain message
/// This function is pure and contains no side effects
pub fn translate_route_change(_from: &Route, to: &Route) -> Option<Msg> {
    Some(Msg::RouteChanged(to.clone()))
}

/// Host-side navigation stack.
///
/// Tracks the screen the host is showing and turns navigation requests into
/// `RouteChanged` messages. The update function only records what this
/// reports; it never changes the route on its own.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Route,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Moves forward to `to`; rejected moves yield no message
    pub fn navigate(&mut self, to: Route) -> Option<Msg> {
        if to == self.current || !self.current.can_navigate_to(&to) {
            log::debug!("Navigation from {:?} to {:?} rejected", self.current, to);
            return None;
        }
        let msg = translate_route_change(&self.current, &to);
        self.current = to;
        msg
    }

    /// Moves to the previous route, if any
    pub fn back(&mut self) -> Option<Msg> {
        let previous = self.current.previous()?;
        let msg = translate_route_change(&self.current, &previous);
        self.current = previous;
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ObjectId;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_translate_route_change() {
        let detail = Route::Detail(ObjectId::new("1"));

        assert_eq!(
            translate_route_change(&Route::Timeline, &detail),
            Some(Msg::RouteChanged(detail))
        );
    }

    #[test]
    fn test_navigate_to_detail_and_back() {
        let mut navigator = Navigator::new(Route::initial());
        let detail = Route::Detail(ObjectId::new("1"));

        assert_eq!(
            navigator.navigate(detail.clone()),
            Some(Msg::RouteChanged(detail.clone()))
        );
        assert_eq!(navigator.current(), &detail);

        assert_eq!(navigator.back(), Some(Msg::RouteChanged(Route::Timeline)));
        assert_eq!(navigator.current(), &Route::Timeline);
    }

    #[test]
    fn test_detail_from_detail_is_rejected() {
        let mut navigator = Navigator::new(Route::Detail(ObjectId::new("1")));

        assert_eq!(navigator.navigate(Route::Detail(ObjectId::new("2"))), None);
        assert_eq!(navigator.current(), &Route::Detail(ObjectId::new("1")));
    }

    #[test]
    fn test_back_from_timeline_yields_nothing() {
        let mut navigator = Navigator::default();

        assert_eq!(navigator.back(), None);
        assert_eq!(navigator.navigate(Route::Timeline), None);
    }
}
