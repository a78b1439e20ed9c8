//! In-process [`NavigationHost`] with a history stack.
//!
//! Listeners belong to the screen that was current when they registered.
//! Moving away from a screen delivers `Blur` to its listeners and `Focus` to
//! the listeners of the screen arrived at. The registry lock is never held
//! while a listener runs, so listeners may call back into the navigator.

use std::sync::{Mutex, MutexGuard, PoisonError};

use recipebox_core::{
    EventDisposition, ListenerId, NavigationHost, ScreenEventKind, ScreenId, ScreenListener,
};

struct Registration {
    id: ListenerId,
    kind: ScreenEventKind,
    owner: ScreenId,
    listener: ScreenListener,
}

struct NavigatorState {
    current: ScreenId,
    /// Screens behind `current`, oldest first.
    history: Vec<ScreenId>,
    listeners: Vec<Registration>,
    next_id: u64,
}

/// Stack navigator used by the CLI shell and tests.
pub struct StackNavigator {
    state: Mutex<NavigatorState>,
}

impl StackNavigator {
    /// Start at `root` with an empty history.
    pub fn new(root: ScreenId) -> Self {
        Self {
            state: Mutex::new(NavigatorState {
                current: root,
                history: Vec::new(),
                listeners: Vec::new(),
                next_id: 0,
            }),
        }
    }

    pub fn current(&self) -> ScreenId {
        self.lock().current.clone()
    }

    /// Screens behind the current one, oldest first.
    pub fn history(&self) -> Vec<ScreenId> {
        self.lock().history.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    /// Deliver `kind` to the current screen's listeners.
    ///
    /// Every matching listener runs. The result is `Handled` when at least
    /// one of them vetoed the default action.
    pub fn dispatch(&self, kind: ScreenEventKind) -> EventDisposition {
        let current = self.current();
        self.deliver(&current, kind)
    }

    /// Platform back button: run the listeners, then pop the history unless
    /// a listener handled it.
    pub fn press_hardware_back(&self) -> EventDisposition {
        let disposition = self.dispatch(ScreenEventKind::HardwareBack);
        if disposition == EventDisposition::Default {
            self.go_back();
        }
        disposition
    }

    /// Pop one screen. Returns `false` at the root.
    pub fn go_back(&self) -> bool {
        let previous = self.lock().history.last().cloned();
        match previous {
            Some(screen) => {
                self.navigate(&screen);
                true
            }
            None => {
                tracing::debug!("Back pressed at navigation root");
                false
            }
        }
    }

    fn deliver(&self, owner: &ScreenId, kind: ScreenEventKind) -> EventDisposition {
        let listeners: Vec<ScreenListener> = self
            .lock()
            .listeners
            .iter()
            .filter(|r| r.kind == kind && r.owner == *owner)
            .map(|r| r.listener.clone())
            .collect();

        let mut disposition = EventDisposition::Default;
        for listener in listeners {
            if listener(kind) == EventDisposition::Handled {
                disposition = EventDisposition::Handled;
            }
        }
        tracing::trace!(screen = %owner, ?kind, ?disposition, "Screen event delivered");
        disposition
    }

    fn lock(&self) -> MutexGuard<'_, NavigatorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NavigationHost for StackNavigator {
    /// Navigating to a screen already in the history pops back to it;
    /// anything else is pushed.
    fn navigate(&self, to: &ScreenId) {
        let left = {
            let mut state = self.lock();
            if state.current == *to {
                tracing::trace!(screen = %to, "Already on screen");
                return;
            }
            let left = std::mem::replace(&mut state.current, to.clone());
            if let Some(pos) = state.history.iter().rposition(|s| s == to) {
                state.history.truncate(pos);
            } else {
                state.history.push(left.clone());
            }
            left
        };

        tracing::debug!(from = %left, to = %to, "Navigated");
        self.deliver(&left, ScreenEventKind::Blur);
        self.deliver(to, ScreenEventKind::Focus);
    }

    fn add_listener(&self, kind: ScreenEventKind, listener: ScreenListener) -> ListenerId {
        let mut state = self.lock();
        state.next_id += 1;
        let id = ListenerId(state.next_id);
        let owner = state.current.clone();
        state.listeners.push(Registration {
            id,
            kind,
            owner,
            listener,
        });
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        self.lock().listeners.retain(|r| r.id != id);
    }
}
