//! The window width signal the container lays itself out against.
//!
//! Containers never read a global window. They subscribe to a
//! [`ResizeSource`], which a host backs with its real window (see
//! [`properties_container_view`](crate::properties_container_view)) and tests
//! drive directly through [`Viewport::resize`].

use std::{cell::RefCell, rc::Rc};

use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

new_key_type! {
    /// Identifies one listener registered with a [`ResizeSource`].
    pub struct ListenerId;
}

pub type ResizeListener = Rc<dyn Fn()>;

/// A source of viewport resize notifications.
pub trait ResizeSource {
    /// The current inner width of the viewport in pixels.
    fn inner_width(&self) -> f64;

    /// Register `listener` to be called after every resize.
    fn add_listener(&self, listener: ResizeListener) -> ListenerId;

    /// Remove a listener. Returns `false` if `id` was not registered.
    fn remove_listener(&self, id: ListenerId) -> bool;
}

#[derive(Default)]
struct ViewportState {
    width: f64,
    listeners: SlotMap<ListenerId, ResizeListener>,
}

/// An in-memory [`ResizeSource`].
///
/// Cloning yields another handle to the same viewport.
#[derive(Clone, Default)]
pub struct Viewport {
    state: Rc<RefCell<ViewportState>>,
}

impl Viewport {
    pub fn new(width: f64) -> Self {
        Self {
            state: Rc::new(RefCell::new(ViewportState {
                width,
                listeners: SlotMap::with_key(),
            })),
        }
    }

    pub fn width(&self) -> f64 {
        self.state.borrow().width
    }

    /// Store the new width and notify every listener.
    ///
    /// Listeners are called from a snapshot taken after the width is stored,
    /// so they can read the viewport and add or remove listeners while being
    /// notified. A listener removed during notification is still called for
    /// this resize if it was already in the snapshot.
    pub fn resize(&self, width: f64) {
        let listeners: SmallVec<[ResizeListener; 4]> = {
            let mut state = self.state.borrow_mut();
            state.width = width;
            state.listeners.values().cloned().collect()
        };
        log::trace!("viewport resized to {width}px, notifying {}", listeners.len());
        for listener in listeners {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

impl std::fmt::Debug for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Viewport")
            .field("width", &state.width)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

impl ResizeSource for Viewport {
    fn inner_width(&self) -> f64 {
        self.width()
    }

    fn add_listener(&self, listener: ResizeListener) -> ListenerId {
        self.state.borrow_mut().listeners.insert(listener)
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        self.state.borrow_mut().listeners.remove(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn resize_notifies_listeners_with_new_width() {
        let viewport = Viewport::new(800.0);
        let seen = Rc::new(Cell::new(0.0));

        let listener = {
            let viewport = viewport.clone();
            let seen = seen.clone();
            Rc::new(move || seen.set(viewport.width()))
        };
        viewport.add_listener(listener);

        viewport.resize(1400.0);
        assert_eq!(seen.get(), 1400.0);
        assert_eq!(viewport.inner_width(), 1400.0);
    }

    #[test]
    fn removed_listener_is_not_called() {
        let viewport = Viewport::new(800.0);
        let calls = Rc::new(Cell::new(0));

        let id = {
            let calls = calls.clone();
            viewport.add_listener(Rc::new(move || calls.set(calls.get() + 1)))
        };
        viewport.resize(900.0);
        assert!(viewport.remove_listener(id));
        assert!(!viewport.remove_listener(id));
        viewport.resize(1000.0);

        assert_eq!(calls.get(), 1);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn listener_can_remove_itself() {
        let viewport = Viewport::new(800.0);
        let own_id: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));
        let calls = Rc::new(Cell::new(0));

        let id = {
            let viewport = viewport.clone();
            let own_id = own_id.clone();
            let calls = calls.clone();
            viewport.clone().add_listener(Rc::new(move || {
                calls.set(calls.get() + 1);
                if let Some(id) = own_id.get() {
                    viewport.remove_listener(id);
                }
            }))
        };
        own_id.set(Some(id));

        viewport.resize(900.0);
        viewport.resize(1000.0);
        assert_eq!(calls.get(), 1);
    }
}
