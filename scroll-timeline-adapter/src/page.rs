use alloc::rc::Rc;
use alloc::vec::Vec;

use scroll_timeline::{ElementId, VariantSet};

use crate::{FrameHandle, FrameReport, Host, SectionLifecycle, SharedRegistry};

/// The sections mounted on one page, sharing a host and an element registry.
///
/// Navigating away tears every section down before the next page's sections mount.
pub struct Page<H: Host> {
    host: Rc<H>,
    registry: SharedRegistry<H::Handle>,
    sections: Vec<SectionLifecycle<H>>,
}

impl<H: Host> Page<H> {
    pub fn new(host: Rc<H>, registry: SharedRegistry<H::Handle>) -> Self {
        Self {
            host,
            registry,
            sections: Vec::new(),
        }
    }

    pub fn host(&self) -> &Rc<H> {
        &self.host
    }

    pub fn registry(&self) -> &SharedRegistry<H::Handle> {
        &self.registry
    }

    /// Mounts `section`, replacing (and tearing down) a previous mount of the same id.
    pub fn mount(&mut self, section: ElementId, variants: VariantSet) {
        self.unmount(section);
        let lifecycle = SectionLifecycle::mount(
            Rc::clone(&self.host),
            Rc::clone(&self.registry),
            section,
            variants,
        );
        self.sections.push(lifecycle);
    }

    /// Returns `false` if `section` was not mounted.
    pub fn unmount(&mut self, section: ElementId) -> bool {
        match self.sections.iter().position(|s| s.section() == section) {
            Some(index) => {
                self.sections.remove(index).unmount();
                true
            }
            None => false,
        }
    }

    /// Tears down every mounted section.
    pub fn clear(&mut self) {
        for section in self.sections.drain(..) {
            section.unmount();
        }
    }

    /// Replaces the mounted sections with `sections`.
    pub fn navigate(&mut self, sections: impl IntoIterator<Item = (ElementId, VariantSet)>) {
        adebug!(outgoing = self.sections.len(), "Page::navigate");
        self.clear();
        for (section, variants) in sections {
            self.mount(section, variants);
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, section: ElementId) -> Option<&SectionLifecycle<H>> {
        self.sections.iter().find(|s| s.section() == section)
    }

    pub fn get_mut(&mut self, section: ElementId) -> Option<&mut SectionLifecycle<H>> {
        self.sections.iter_mut().find(|s| s.section() == section)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionLifecycle<H>> {
        self.sections.iter()
    }

    /// Total listeners held by mounted sections.
    pub fn listener_count(&self) -> usize {
        self.sections.iter().map(|s| s.listener_count()).sum()
    }

    pub fn on_scroll(&mut self) {
        for section in &mut self.sections {
            section.on_scroll();
        }
    }

    pub fn on_resize(&mut self) {
        for section in &mut self.sections {
            section.on_resize();
        }
    }

    /// Routes a frame callback to the section that requested it.
    pub fn on_frame(
        &mut self,
        handle: FrameHandle,
        now_ms: u64,
    ) -> Option<(ElementId, FrameReport)> {
        let section = self
            .sections
            .iter_mut()
            .find(|s| s.pending_frame() == Some(handle))?;
        let report = section.on_frame(handle, now_ms)?;
        Some((section.section(), report))
    }
}

impl<H: Host> core::fmt::Debug for Page<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Page")
            .field("sections", &self.sections)
            .finish_non_exhaustive()
    }
}
