//! Navigation host port and scoped listener registration.
//!
//! The host owns the navigation stack and delivers lifecycle events
//! (focus, blur, hardware back) to registered listeners. Screens never attach
//! a listener without holding a [`ListenerGuard`], so every registration is
//! undone on every exit path, including panics and forced teardown.

use std::fmt;
use std::sync::Arc;

use crate::domain::{EventDisposition, ListenerId, ScreenEventKind, ScreenId};

/// Callback invoked by the host for a subscribed event kind.
pub type ScreenListener = Arc<dyn Fn(ScreenEventKind) -> EventDisposition + Send + Sync>;

/// External navigation host.
pub trait NavigationHost: Send + Sync {
    /// Imperatively move to another screen.
    fn navigate(&self, to: &ScreenId);

    /// Register a listener for one event kind.
    fn add_listener(&self, kind: ScreenEventKind, listener: ScreenListener) -> ListenerId;

    /// Unregister a listener. Unknown ids are ignored.
    fn remove_listener(&self, id: ListenerId);
}

/// RAII registration of a [`ScreenListener`]; unregisters on drop.
pub struct ListenerGuard {
    host: Arc<dyn NavigationHost>,
    id: ListenerId,
    kind: ScreenEventKind,
}

impl ListenerGuard {
    /// Register `listener` for `kind` and hold the registration.
    pub fn register(
        host: Arc<dyn NavigationHost>,
        kind: ScreenEventKind,
        listener: ScreenListener,
    ) -> Self {
        let id = host.add_listener(kind, listener);
        tracing::debug!(?kind, listener_id = id.0, "Screen listener registered");
        Self { host, id, kind }
    }

    pub const fn id(&self) -> ListenerId {
        self.id
    }

    pub const fn kind(&self) -> ScreenEventKind {
        self.kind
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.host.remove_listener(self.id);
        tracing::debug!(kind = ?self.kind, listener_id = self.id.0, "Screen listener removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeHost {
        next_id: Mutex<u64>,
        listeners: Mutex<Vec<(ListenerId, ScreenEventKind)>>,
    }

    impl NavigationHost for FakeHost {
        fn navigate(&self, _to: &ScreenId) {}

        fn add_listener(&self, kind: ScreenEventKind, _listener: ScreenListener) -> ListenerId {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            let id = ListenerId(*next);
            self.listeners.lock().unwrap().push((id, kind));
            id
        }

        fn remove_listener(&self, id: ListenerId) {
            self.listeners.lock().unwrap().retain(|(l, _)| *l != id);
        }
    }

    fn noop_listener() -> ScreenListener {
        Arc::new(|_| EventDisposition::Default)
    }

    #[test]
    fn test_guard_unregisters_on_drop() {
        let host = Arc::new(FakeHost::default());
        let guard = ListenerGuard::register(host.clone(), ScreenEventKind::Blur, noop_listener());
        assert_eq!(host.listeners.lock().unwrap().len(), 1);
        assert_eq!(guard.kind(), ScreenEventKind::Blur);

        drop(guard);
        assert!(host.listeners.lock().unwrap().is_empty());
    }

    #[test]
    fn test_guards_release_only_their_own_listener() {
        let host = Arc::new(FakeHost::default());
        let back =
            ListenerGuard::register(host.clone(), ScreenEventKind::HardwareBack, noop_listener());
        let blur = ListenerGuard::register(host.clone(), ScreenEventKind::Blur, noop_listener());

        drop(back);
        let remaining = host.listeners.lock().unwrap().clone();
        assert_eq!(remaining, vec![(blur.id(), ScreenEventKind::Blur)]);
    }
}
