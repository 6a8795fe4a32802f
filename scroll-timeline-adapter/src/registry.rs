use alloc::rc::Rc;
use core::cell::RefCell;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use scroll_timeline::ElementId;

#[cfg(feature = "std")]
type HandleMap<H> = HashMap<ElementId, H>;
#[cfg(not(feature = "std"))]
type HandleMap<H> = BTreeMap<ElementId, H>;

/// Maps stable element ids to live render-tree handles.
///
/// Timelines refer to elements by id only; handles are looked up when a frame is rendered,
/// so re-rendering an element is a single `attach` and unmounting it a single `detach`.
#[derive(Clone, Debug)]
pub struct ElementRegistry<H> {
    live: HandleMap<H>,
}

pub type SharedRegistry<H> = Rc<RefCell<ElementRegistry<H>>>;

impl<H> ElementRegistry<H> {
    pub fn new() -> Self {
        Self {
            live: HandleMap::new(),
        }
    }

    pub fn shared() -> SharedRegistry<H> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Binds `id` to `handle`, returning the handle it replaces.
    pub fn attach(&mut self, id: ElementId, handle: H) -> Option<H> {
        atrace!(id = id.get(), "ElementRegistry::attach");
        self.live.insert(id, handle)
    }

    pub fn detach(&mut self, id: ElementId) -> Option<H> {
        atrace!(id = id.get(), "ElementRegistry::detach");
        self.live.remove(&id)
    }

    pub fn get(&self, id: ElementId) -> Option<&H> {
        self.live.get(&id)
    }

    pub fn is_attached(&self, id: ElementId) -> bool {
        self.live.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn clear(&mut self) {
        self.live.clear();
    }
}

impl<H> Default for ElementRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Clones the handle for `id` out of a shared registry without holding the borrow.
pub(crate) fn lookup<H: Clone>(registry: &SharedRegistry<H>, id: ElementId) -> Option<H> {
    registry.borrow().get(id).cloned()
}
