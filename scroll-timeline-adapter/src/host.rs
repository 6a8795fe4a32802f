use scroll_timeline::{ElementBounds, Viewport, VisualState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameHandle(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListenerKind {
    Scroll,
    Resize,
}

/// The render tree and viewport a section lives in.
///
/// Methods take `&self`: a host is shared by every mounted section (behind an `Rc`) and owns
/// whatever interior mutability it needs, the way a DOM does. Everything runs on one thread.
///
/// Hosts deliver events back to sections themselves: a registered scroll/resize listener
/// should end up calling `SectionLifecycle::on_scroll`/`on_resize` (or the `Page` versions),
/// and a requested frame should end up calling `on_frame` with its handle.
pub trait Host {
    /// A live element reference (e.g. a DOM node).
    type Handle: Clone;

    fn add_listener(&self, kind: ListenerKind) -> ListenerId;
    fn remove_listener(&self, id: ListenerId);

    /// Schedules a callback on the next animation frame.
    fn request_frame(&self) -> FrameHandle;
    fn cancel_frame(&self, handle: FrameHandle);

    fn viewport(&self) -> Viewport;

    /// Reads an element's in-flow layout box in document coordinates.
    ///
    /// For a pinned element this must report the position of its placeholder.
    fn measure(&self, element: &Self::Handle) -> Option<ElementBounds>;

    /// Writes the named properties of `state` to `element`, leaving the others untouched.
    fn write_state(&self, element: &Self::Handle, state: &VisualState);

    /// Fixes `element` in the viewport and inserts an in-flow placeholder of `reserved_height`.
    fn pin(&self, element: &Self::Handle, reserved_height: f32);

    /// Returns `element` to normal flow and removes its placeholder.
    fn unpin(&self, element: &Self::Handle);
}
