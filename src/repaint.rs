/// Why a container asked its host to repaint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RepaintReason {
    /// The container subscribed to its viewport.
    Initialized,
    /// A layout recomputation ran. The layout may be identical to the previous one.
    LayoutChanged,
    /// The loading flag was set.
    LoadingChanged,
}

/// Receives repaint requests from a container.
///
/// Requests are edge triggered: a container asks again after every
/// recomputation even when nothing visible changed, and the host decides
/// how to schedule the redraw.
pub trait RepaintSink {
    fn request_repaint(&self, reason: RepaintReason);
}

impl<F: Fn(RepaintReason)> RepaintSink for F {
    fn request_repaint(&self, reason: RepaintReason) {
        self(reason)
    }
}

#[cfg(feature = "view")]
impl RepaintSink for floem::reactive::Trigger {
    fn request_repaint(&self, _reason: RepaintReason) {
        self.notify();
    }
}
