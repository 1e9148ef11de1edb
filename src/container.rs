use std::{
    cell::{Cell, Ref, RefCell},
    rc::{Rc, Weak},
};

use crate::{
    l10n::Messages,
    layout::{LayoutConfig, LayoutState},
    property::DisplayProperty,
    repaint::{RepaintReason, RepaintSink},
    viewport::{ListenerId, ResizeSource},
};

/// Where a container is in its lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Built but not yet listening to its viewport.
    Created,
    /// Listening to its viewport.
    Active(ListenerId),
    /// Torn down. No further recomputation or repaint happens.
    Disposed,
}

struct ContainerState {
    loading: bool,
    properties: Vec<DisplayProperty>,
    layout: LayoutState,
}

struct Shared {
    config: LayoutConfig,
    state: RefCell<ContainerState>,
    lifecycle: Cell<Lifecycle>,
    viewport: Rc<dyn ResizeSource>,
    repaint: Box<dyn RepaintSink>,
}

impl Shared {
    fn is_disposed(&self) -> bool {
        self.lifecycle.get() == Lifecycle::Disposed
    }

    fn request_repaint(&self, reason: RepaintReason) {
        if self.is_disposed() {
            return;
        }
        self.repaint.request_repaint(reason);
    }

    /// Recompute the layout from the current width and property count.
    ///
    /// Skipped while loading or once disposed.
    fn layout_display_properties(&self) {
        if self.is_disposed() {
            log::trace!("ignoring layout request on a disposed properties container");
            return;
        }
        {
            let mut state = self.state.borrow_mut();
            if state.loading {
                return;
            }
            let width = self.viewport.inner_width();
            state.layout = self.config.select(width, state.properties.len());
            log::debug!(
                "properties layout for {width}px and {} properties: {:?}",
                state.properties.len(),
                state.layout
            );
        }
        self.request_repaint(RepaintReason::LayoutChanged);
    }
}

/// A responsive list of [`DisplayProperty`] values.
///
/// The container picks its [`LayoutState`] from the viewport width and the
/// number of properties, and asks its [`RepaintSink`] to repaint after every
/// recomputation and every change of the loading flag.
///
/// ```
/// use std::rc::Rc;
/// use floem_properties::{
///     DisplayProperty, GridDisplayLayout, PropertiesContainer, RepaintReason, Viewport,
/// };
///
/// let viewport = Viewport::new(1200.0);
/// let container = PropertiesContainer::new(Rc::new(viewport.clone()), |_: RepaintReason| {});
/// container.init();
///
/// container.set_loading(false);
/// container.set_properties(vec![
///     DisplayProperty::new("Server", "localhost"),
///     DisplayProperty::new("Edition", "Developer"),
///     DisplayProperty::new("Version", "16.0"),
/// ]);
/// assert_eq!(container.current_layout().columns, GridDisplayLayout::TwoColumns);
/// assert_eq!(container.current_layout().height_px, 2 * 46 + 25);
///
/// viewport.resize(900.0);
/// assert_eq!(container.current_layout().columns, GridDisplayLayout::OneColumn);
/// ```
pub struct PropertiesContainer {
    shared: Rc<Shared>,
    messages: Messages,
}

impl PropertiesContainer {
    /// Create a container with the default breakpoints, loading and empty.
    pub fn new(viewport: Rc<dyn ResizeSource>, repaint: impl RepaintSink + 'static) -> Self {
        Self::with_config(LayoutConfig::default(), viewport, repaint)
    }

    pub fn with_config(
        config: LayoutConfig,
        viewport: Rc<dyn ResizeSource>,
        repaint: impl RepaintSink + 'static,
    ) -> Self {
        Self {
            shared: Rc::new(Shared {
                config,
                state: RefCell::new(ContainerState {
                    loading: true,
                    properties: Vec::new(),
                    layout: config.initial(),
                }),
                lifecycle: Cell::new(Lifecycle::Created),
                viewport,
                repaint: Box::new(repaint),
            }),
            messages: Messages::default(),
        }
    }

    /// Replace the status announcements.
    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Start listening to the viewport and request the first repaint.
    ///
    /// Does nothing if the container was already initialized or disposed.
    pub fn init(&self) {
        match self.shared.lifecycle.get() {
            Lifecycle::Created => {}
            Lifecycle::Active(_) => {
                log::warn!("properties container initialized twice");
                return;
            }
            Lifecycle::Disposed => {
                log::warn!("properties container initialized after dispose");
                return;
            }
        }

        let weak: Weak<Shared> = Rc::downgrade(&self.shared);
        let id = self.shared.viewport.add_listener(Rc::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.layout_display_properties();
            }
        }));
        self.shared.lifecycle.set(Lifecycle::Active(id));
        self.shared.request_repaint(RepaintReason::Initialized);
    }

    /// Stop listening to the viewport.
    ///
    /// Safe to call more than once and also run on drop. Once it returns, no
    /// recomputation or repaint request happens on this container again.
    pub fn dispose(&self) {
        let previous = self.shared.lifecycle.replace(Lifecycle::Disposed);
        if let Lifecycle::Active(id) = previous {
            if !self.shared.viewport.remove_listener(id) {
                log::warn!("properties container listener was already removed from its viewport");
            }
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.shared.lifecycle.get()
    }

    /// Replace the properties and recompute the layout.
    pub fn set_properties(&self, properties: impl IntoIterator<Item = DisplayProperty>) {
        self.shared.state.borrow_mut().properties = properties.into_iter().collect();
        self.shared.layout_display_properties();
    }

    /// Set the loading flag and request a repaint.
    ///
    /// This does not recompute the layout when loading finishes; the next
    /// [`set_properties`](Self::set_properties) or viewport resize does.
    pub fn set_loading(&self, loading: bool) {
        self.shared.state.borrow_mut().loading = loading;
        self.shared.request_repaint(RepaintReason::LoadingChanged);
    }

    /// Recompute the layout from the viewport's current width.
    ///
    /// Skipped while loading.
    pub fn on_viewport_resized(&self) {
        self.shared.layout_display_properties();
    }

    pub fn current_layout(&self) -> LayoutState {
        self.shared.state.borrow().layout
    }

    pub fn is_loading(&self) -> bool {
        self.shared.state.borrow().loading
    }

    pub fn properties(&self) -> Vec<DisplayProperty> {
        self.shared.state.borrow().properties.clone()
    }

    pub fn with_properties<O>(&self, f: impl FnOnce(&[DisplayProperty]) -> O) -> O {
        let state: Ref<'_, ContainerState> = self.shared.state.borrow();
        f(&state.properties)
    }

    pub fn property_count(&self) -> usize {
        self.shared.state.borrow().properties.len()
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.shared.config
    }

    pub fn viewport_width(&self) -> f64 {
        self.shared.viewport.inner_width()
    }

    pub fn loading_message(&self) -> &str {
        self.messages.loading()
    }

    pub fn loading_completed_message(&self) -> &str {
        self.messages.loading_completed()
    }

    /// The announcement matching the current loading flag.
    pub fn status_message(&self) -> &str {
        if self.is_loading() {
            self.loading_message()
        } else {
            self.loading_completed_message()
        }
    }
}

impl Drop for PropertiesContainer {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for PropertiesContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.state.borrow();
        f.debug_struct("PropertiesContainer")
            .field("lifecycle", &self.shared.lifecycle.get())
            .field("loading", &state.loading)
            .field("properties", &state.properties)
            .field("layout", &state.layout)
            .finish()
    }
}
