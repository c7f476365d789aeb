//! Viewport resize subscriptions.
//!
//! A `ResizeSubscription` is the only way to listen for viewport width changes.
//! It is acquired when a component mounts and released when it unmounts
//! (`unsubscribe` is idempotent and also runs on `Drop`), so the process-wide
//! event source never holds a callback for a dead component.
//!
//! - Web/WASM: each subscription owns one `resize` listener on `window`.
//! - Native: subscriptions register in a thread-local hub; the platform shell
//!   forwards window resize events through [`dispatch_resize`].

use tracing::debug;

type ResizeCallback = Box<dyn FnMut(f64)>;

/// Handle for one registered resize listener.
pub struct ResizeSubscription {
    handle: Option<imp::Handle>,
}

impl ResizeSubscription {
    /// Register `on_resize`, called with the new viewport width in logical px.
    pub fn subscribe(on_resize: impl FnMut(f64) + 'static) -> Self {
        let handle = imp::attach(Box::new(on_resize));
        if handle.is_some() {
            debug!("viewport: resize listener registered");
        }
        Self { handle }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Remove the listener. Safe to call any number of times.
    pub fn unsubscribe(&mut self) {
        if let Some(handle) = self.handle.take() {
            imp::detach(handle);
            debug!("viewport: resize listener removed");
        }
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl std::fmt::Debug for ResizeSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeSubscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Current viewport width, when the platform can report one.
pub fn current_width() -> Option<f64> {
    imp::current_width()
}

#[cfg(not(target_arch = "wasm32"))]
pub use imp::{dispatch_resize, listener_count};

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::{closure::Closure, JsCast};

    use super::ResizeCallback;

    pub struct Handle {
        closure: Closure<dyn FnMut(web_sys::Event)>,
    }

    pub fn attach(mut on_resize: ResizeCallback) -> Option<Handle> {
        let window = web_sys::window()?;
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            if let Some(width) = current_width() {
                on_resize(width);
            }
        });
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Handle { closure })
    }

    pub fn detach(handle: Handle) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "resize",
                handle.closure.as_ref().unchecked_ref(),
            );
        }
    }

    pub fn current_width() -> Option<f64> {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::ResizeCallback;

    pub type Handle = u64;

    type Listener = (Handle, Rc<RefCell<ResizeCallback>>);

    thread_local! {
        static LISTENERS: RefCell<Vec<Listener>> = const { RefCell::new(Vec::new()) };
        static NEXT_ID: Cell<Handle> = const { Cell::new(1) };
        static LAST_WIDTH: Cell<Option<f64>> = const { Cell::new(None) };
    }

    pub fn attach(on_resize: ResizeCallback) -> Option<Handle> {
        let id = NEXT_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        LISTENERS.with(|l| l.borrow_mut().push((id, Rc::new(RefCell::new(on_resize)))));
        Some(id)
    }

    pub fn detach(handle: Handle) {
        LISTENERS.with(|l| l.borrow_mut().retain(|(id, _)| *id != handle));
    }

    pub fn current_width() -> Option<f64> {
        LAST_WIDTH.with(Cell::get)
    }

    /// Deliver a native window resize to every live subscription on this
    /// thread. Returns how many listeners were notified.
    pub fn dispatch_resize(width: f64) -> usize {
        LAST_WIDTH.with(|w| w.set(Some(width)));
        // Snapshot first: a callback may unsubscribe while we iterate.
        let snapshot: Vec<_> = LISTENERS.with(|l| l.borrow().iter().map(|(_, cb)| cb.clone()).collect());
        for callback in &snapshot {
            if let Ok(mut cb) = callback.try_borrow_mut() {
                cb(width);
            }
        }
        snapshot.len()
    }

    pub fn listener_count() -> usize {
        LISTENERS.with(|l| l.borrow().len())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn dispatch_reaches_live_subscription() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let sub = ResizeSubscription::subscribe(move |w| sink.borrow_mut().push(w));
        assert!(sub.is_active());

        assert_eq!(dispatch_resize(1024.0), 1);
        assert_eq!(dispatch_resize(500.0), 1);
        assert_eq!(*seen.borrow(), vec![1024.0, 500.0]);
        assert_eq!(current_width(), Some(500.0));
    }

    #[test]
    fn unsubscribe_is_idempotent_and_stops_delivery() {
        let hits = Rc::new(RefCell::new(0));
        let counter = hits.clone();
        let mut sub = ResizeSubscription::subscribe(move |_| *counter.borrow_mut() += 1);
        assert_eq!(listener_count(), 1);

        sub.unsubscribe();
        sub.unsubscribe();
        assert!(!sub.is_active());
        assert_eq!(listener_count(), 0);

        assert_eq!(dispatch_resize(1200.0), 0);
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn drop_releases_listener() {
        {
            let _sub = ResizeSubscription::subscribe(|_| {});
            assert_eq!(listener_count(), 1);
        }
        assert_eq!(listener_count(), 0);
    }

    #[test]
    fn subscriptions_are_independent() {
        let first = ResizeSubscription::subscribe(|_| {});
        let mut second = ResizeSubscription::subscribe(|_| {});
        second.unsubscribe();
        assert_eq!(listener_count(), 1);
        drop(first);
        assert_eq!(listener_count(), 0);
    }
}
