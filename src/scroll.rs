use std::sync::Arc;
use std::time::Duration;

use spdlog::debug;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::navigation::Location;

/// Routes rendered as one continuous scrollable home page.
pub const HOME_GROUP: [&str; 3] = ["/", "/skills", "/projects"];

pub const PAGE_CHANGE_DELAY: Duration = Duration::ZERO;
pub const IN_PAGE_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    PageChange,
    InPage,
}

impl TransitionKind {
    pub fn behavior(&self) -> ScrollBehavior {
        match self {
            TransitionKind::PageChange => ScrollBehavior::Instant,
            TransitionKind::InPage => ScrollBehavior::Smooth,
        }
    }

    pub fn delay(&self) -> Duration {
        match self {
            TransitionKind::PageChange => PAGE_CHANGE_DELAY,
            TransitionKind::InPage => IN_PAGE_DELAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollAction {
    None,
    ToTop { behavior: ScrollBehavior },
    IntoView { id: String, behavior: ScrollBehavior, delay: Duration },
}

/// The rendered document the coordinator scrolls.
pub trait Viewport: Send + Sync {
    fn has_element(&self, id: &str) -> bool;
    fn scroll_into_view(&self, id: &str, behavior: ScrollBehavior);
    fn scroll_to_top(&self, behavior: ScrollBehavior);
}

fn in_home_group(path: &str) -> bool {
    HOME_GROUP.contains(&path)
}

pub fn classify_transition(prev_path: &str, next_path: &str) -> TransitionKind {
    if prev_path == next_path {
        return TransitionKind::InPage;
    }
    if in_home_group(prev_path) && in_home_group(next_path) {
        return TransitionKind::InPage;
    }
    TransitionKind::PageChange
}

pub fn plan_scroll(kind: TransitionKind, location: &Location, viewport: &dyn Viewport) -> ScrollAction {
    let behavior = kind.behavior();
    match location.anchor_id() {
        Some(id) if viewport.has_element(id) => ScrollAction::IntoView {
            id: id.to_string(),
            behavior,
            delay: kind.delay(),
        },
        Some(_) => ScrollAction::None,
        None => ScrollAction::ToTop { behavior },
    }
}

/// Reacts to every location change with at most one scroll. A scroll that is
/// still waiting for its delay is dropped when the next change arrives.
pub struct ScrollCoordinator {
    viewport: Arc<dyn Viewport>,
    prev_pathname: String,
    pending: Option<JoinHandle<()>>,
}

impl ScrollCoordinator {
    pub fn new(viewport: Arc<dyn Viewport>, initial: &Location) -> Self {
        ScrollCoordinator {
            viewport,
            prev_pathname: initial.pathname.clone(),
            pending: None,
        }
    }

    /// Deferred scrolls run on the current tokio runtime. Outside of one they
    /// are performed right away.
    pub fn on_location_change(&mut self, location: &Location) -> ScrollAction {
        self.cancel_pending();

        let kind = classify_transition(&self.prev_pathname, &location.pathname);
        let action = plan_scroll(kind, location, self.viewport.as_ref());
        debug!("{} -> {}: {:?}, {:?}", self.prev_pathname, location, kind, action);

        match action {
            ScrollAction::ToTop { behavior } => self.viewport.scroll_to_top(behavior),
            ScrollAction::IntoView { ref id, behavior, delay } => {
                self.pending = self.schedule(id.clone(), behavior, delay);
            }
            ScrollAction::None => {}
        }

        self.prev_pathname = location.pathname.clone();
        action
    }

    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn cancel_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }

    fn schedule(&self, id: String, behavior: ScrollBehavior, delay: Duration) -> Option<JoinHandle<()>> {
        let viewport = self.viewport.clone();
        match Handle::try_current() {
            Ok(handle) => {
                let sleep = tokio::time::sleep(delay);
                Some(handle.spawn(async move {
                    sleep.await;
                    viewport.scroll_into_view(&id, behavior);
                }))
            }
            Err(_) => {
                viewport.scroll_into_view(&id, behavior);
                None
            }
        }
    }
}

impl Drop for ScrollCoordinator {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
