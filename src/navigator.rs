use std::sync::Arc;

use crate::navigation::{Location, NavState};
use crate::scroll::{ScrollAction, ScrollCoordinator, Viewport};

/// Client-side shell state: the current location, its scroll handling and
/// the navigation bar it implies.
pub struct Navigator {
    current: Location,
    scroll: ScrollCoordinator,
    last_scroll: ScrollAction,
}

impl Navigator {
    pub fn new(viewport: Arc<dyn Viewport>, start: &str) -> Self {
        let current = Location::parse(start);
        let scroll = ScrollCoordinator::new(viewport, &current);
        Navigator {
            current,
            scroll,
            last_scroll: ScrollAction::None,
        }
    }

    pub fn navigate(&mut self, href: &str) -> NavState {
        let location = Location::parse(href);
        self.last_scroll = self.scroll.on_location_change(&location);
        self.current = location;
        NavState::resolve(&self.current)
    }

    pub fn current(&self) -> &Location {
        &self.current
    }

    pub fn nav_state(&self) -> NavState {
        NavState::resolve(&self.current)
    }

    pub fn last_scroll(&self) -> &ScrollAction {
        &self.last_scroll
    }
}
