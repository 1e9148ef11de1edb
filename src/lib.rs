//! # Floem Properties
//! A responsive properties container for [Floem](https://crates.io/crates/floem)
//! applications.
//!
//! The container shows an ordered list of label/value pairs and reflows them
//! into one or two columns as the window gets narrower or wider:
//!
//! - two columns, label and value on one line, from `1366px`
//! - two columns, value under the label, from `1024px`
//! - one column, value under the label, below that
//!
//! The container height follows from the arrangement and the number of
//! properties (see [`LayoutConfig::select`]).
//!
//! ## Hosting
//!
//! [`PropertiesContainer`] holds no reference to a window or a renderer. It
//! listens to a [`ResizeSource`] for width changes and reports back through a
//! [`RepaintSink`], which makes it usable from any host and easy to drive in
//! tests with a [`Viewport`]:
//!
//! ```rust
//! # use std::{cell::Cell, rc::Rc};
//! # use floem_properties::*;
//! let viewport = Viewport::new(1400.0);
//! let repaints = Rc::new(Cell::new(0));
//! let container = PropertiesContainer::new(Rc::new(viewport.clone()), {
//!     let repaints = repaints.clone();
//!     move |_: RepaintReason| repaints.set(repaints.get() + 1)
//! });
//! container.init();
//!
//! // The host finishes loading, then hands over the properties.
//! container.set_loading(false);
//! container.set_properties([
//!     DisplayProperty::from(("Server", "localhost")),
//!     DisplayProperty::from(("Version", "16.0")),
//! ]);
//! assert_eq!(container.current_layout().direction, PropertyLayoutDirection::Row);
//!
//! viewport.resize(1100.0);
//! assert_eq!(container.current_layout().direction, PropertyLayoutDirection::Column);
//! assert_eq!(repaints.get(), 4);
//!
//! container.dispose();
//! viewport.resize(600.0);
//! assert_eq!(repaints.get(), 4);
//! ```
//!
//! With the `view` feature, [`ReactiveContainer`] connects a container to
//! floem's reactive runtime and [`properties_container_view`] renders it.
//!
//! ## Loading
//!
//! Containers start out loading. While loading, width changes and new
//! properties do not recompute the layout. Setting the loading flag back to
//! `false` does not recompute either: the next
//! [`set_properties`](PropertiesContainer::set_properties) or resize does, so
//! hosts finish loading first and then publish the properties.

mod container;
#[cfg(feature = "view")]
mod container_view;
pub mod l10n;
pub mod layout;
mod property;
mod repaint;
pub mod viewport;

pub use container::{Lifecycle, PropertiesContainer};
#[cfg(feature = "view")]
pub use container_view::{ReactiveContainer, properties_container_view};
pub use l10n::Messages;
pub use layout::{
    GridDisplayLayout, LayoutBreakpoints, LayoutConfig, LayoutMetrics, LayoutState,
    PropertyLayoutDirection,
};
pub use property::DisplayProperty;
pub use repaint::{RepaintReason, RepaintSink};
pub use viewport::{ListenerId, ResizeSource, Viewport};

#[cfg(feature = "view")]
pub use floem;
