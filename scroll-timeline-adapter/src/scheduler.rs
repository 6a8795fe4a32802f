use crate::{FrameHandle, Host};

/// At most one outstanding animation-frame request.
///
/// Any number of scroll/resize events between two frames collapse into one request, and a
/// handle that was cancelled or superseded is rejected by `take`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameSlot {
    pending: Option<FrameHandle>,
}

impl FrameSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Requests a frame unless one is already pending.
    ///
    /// Returns `true` when a new request was issued.
    pub fn request<H: Host + ?Sized>(&mut self, host: &H) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(host.request_frame());
        true
    }

    /// Cancels the pending request, if any.
    pub fn cancel<H: Host + ?Sized>(&mut self, host: &H) -> bool {
        match self.pending.take() {
            Some(handle) => {
                host.cancel_frame(handle);
                true
            }
            None => false,
        }
    }

    /// Consumes the pending request if `handle` is the one it issued.
    pub fn take(&mut self, handle: FrameHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}
