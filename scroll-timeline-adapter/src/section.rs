use alloc::rc::Rc;
use alloc::vec::Vec;

use scroll_timeline::{
    ElementId, PinController, PinEvent, PinState, RangePosition, RenderFrame, ScrollTracker,
    Timeline, TriggerEvent, VariantId, VariantSelector, VariantSet, VariantSpec,
};

use crate::registry::lookup;
use crate::{FrameHandle, FrameSlot, Host, ListenerId, ListenerKind, SharedRegistry};

/// Per-section lifecycle state.
///
/// `Idle → Armed → Active → Complete`, with the reverse transitions on scroll-up.
/// `TornDown` is terminal and reachable from every state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SectionState {
    Idle,
    /// Listeners registered; the scroll offset is before the trigger range.
    Armed,
    /// Inside the trigger range (the pin may be engaged).
    Active,
    /// Past the trigger range, or showing static content.
    Complete,
    TornDown,
}

impl SectionState {
    fn from_position(position: RangePosition) -> Self {
        match position {
            RangePosition::Before => Self::Armed,
            RangePosition::Inside => Self::Active,
            RangePosition::After => Self::Complete,
        }
    }
}

/// What one rendered frame did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub progress: f32,
    pub state: SectionState,
    pub pin: Option<PinEvent>,
    pub events: &'static [TriggerEvent],
    /// Targets whose state was written.
    pub written: usize,
    /// Targets skipped because they are not attached.
    pub skipped: usize,
}

struct Animated<E> {
    tracker: ScrollTracker,
    timeline: Timeline,
    pin: Option<PinController>,
    /// The handle the host pinned, kept so the pin can be released after the element detaches.
    pinned: Option<E>,
    frame: RenderFrame,
}

impl<E: Clone> Animated<E> {
    fn apply_pin<H>(
        &mut self,
        host: &H,
        registry: &SharedRegistry<E>,
        section: ElementId,
        event: Option<PinEvent>,
    ) where
        H: Host<Handle = E> + ?Sized,
    {
        match event {
            Some(PinEvent::Engage { reserved_height }) => {
                if let Some(handle) = lookup(registry, section) {
                    host.pin(&handle, reserved_height);
                    self.pinned = Some(handle);
                }
            }
            Some(PinEvent::Release) => {
                if let Some(handle) = self.pinned.take() {
                    host.unpin(&handle);
                }
            }
            None => {}
        }
    }

    /// Releases an engaged pin, returning the event if there was one.
    fn release_pin<H>(
        &mut self,
        host: &H,
        registry: &SharedRegistry<E>,
        section: ElementId,
    ) -> Option<PinEvent>
    where
        H: Host<Handle = E> + ?Sized,
    {
        let event = self.pin.as_mut().and_then(PinController::release);
        self.apply_pin(host, registry, section, event);
        event
    }
}

enum Runtime<E> {
    Animated(Animated<E>),
    Static { frame: RenderFrame },
}

/// Owns everything one mounted section needs to animate, and releases all of it on teardown.
///
/// Acquisition happens in [`SectionLifecycle::mount`]: one scroll listener, one resize
/// listener, a tracker and timeline for the selected variant, and (for pinned variants) a pin
/// controller. Release is guaranteed on every exit path: [`SectionLifecycle::tear_down`],
/// [`SectionLifecycle::unmount`], a variant switch, and `Drop`.
///
/// `section` is the element that gets pinned; the trigger range of each variant names the
/// element that gets measured (usually the same one).
pub struct SectionLifecycle<H: Host> {
    host: Rc<H>,
    registry: SharedRegistry<H::Handle>,
    section: ElementId,
    selector: VariantSelector,
    state: SectionState,
    listeners: Vec<ListenerId>,
    frame: FrameSlot,
    runtime: Option<Runtime<H::Handle>>,
    layout_dirty: bool,
    progress: Option<f32>,
}

impl<H: Host> SectionLifecycle<H> {
    pub fn mount(
        host: Rc<H>,
        registry: SharedRegistry<H::Handle>,
        section: ElementId,
        variants: VariantSet,
    ) -> Self {
        let mut s = Self {
            host,
            registry,
            section,
            selector: VariantSelector::new(variants),
            state: SectionState::Idle,
            listeners: Vec::new(),
            frame: FrameSlot::new(),
            runtime: None,
            layout_dirty: true,
            progress: None,
        };
        let width = s.host.viewport().width;
        let id = s
            .selector
            .update(width)
            .map(|change| change.current)
            .unwrap_or(VariantId(0));
        adebug!(section = section.get(), variant = id.0, width, "SectionLifecycle::mount");
        s.arm(id);
        s
    }

    pub fn section(&self) -> ElementId {
        self.section
    }

    pub fn state(&self) -> SectionState {
        self.state
    }

    pub fn variant(&self) -> Option<VariantId> {
        if self.state == SectionState::TornDown {
            return None;
        }
        self.selector.current()
    }

    pub fn variant_name(&self) -> Option<&str> {
        self.variant()?;
        self.selector.current_variant().map(|v| v.name.as_str())
    }

    /// Progress from the most recent frame of the current variant.
    pub fn progress(&self) -> Option<f32> {
        self.progress
    }

    pub fn pin_state(&self) -> PinState {
        match &self.runtime {
            Some(Runtime::Animated(Animated { pin: Some(pin), .. })) => pin.state(),
            _ => PinState::default(),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.frame.pending()
    }

    pub fn is_torn_down(&self) -> bool {
        self.state == SectionState::TornDown
    }

    /// Schedules a recomputation on the next frame. Repeated calls within one frame coalesce.
    pub fn on_scroll(&mut self) {
        if self.is_torn_down() {
            return;
        }
        self.frame.request(&*self.host);
    }

    /// Re-evaluates the responsive variant and the layout.
    ///
    /// A variant change fully releases the outgoing runtime before the incoming one
    /// registers. A width below the pin breakpoint releases the pin before returning.
    pub fn on_resize(&mut self) {
        if self.is_torn_down() {
            return;
        }
        let width = self.host.viewport().width;
        if let Some(change) = self.selector.update(width) {
            adebug!(
                section = self.section.get(),
                previous = ?change.previous,
                current = change.current.0,
                width,
                "SectionLifecycle: variant switch"
            );
            self.release();
            self.arm(change.current);
            return;
        }

        if let Some(Runtime::Animated(anim)) = &mut self.runtime {
            let event = anim.pin.as_mut().and_then(|pin| pin.set_viewport_width(width));
            anim.apply_pin(&*self.host, &self.registry, self.section, event);
        }
        self.layout_dirty = true;
        self.frame.request(&*self.host);
    }

    /// Forces a re-measure on the next frame (e.g. after content above the section changed).
    pub fn refresh(&mut self) {
        if self.is_torn_down() {
            return;
        }
        self.layout_dirty = true;
        self.frame.request(&*self.host);
    }

    /// Renders the frame previously requested by this section.
    ///
    /// Progress is computed once per frame and every pin decision and element state derives
    /// from that value. Returns `None` for stale or cancelled handles, after teardown, and
    /// while the trigger element is detached. A detached trigger element releases the pin; the
    /// tracker keeps its last position so reattaching does not replay crossings.
    pub fn on_frame(&mut self, handle: FrameHandle, now_ms: u64) -> Option<FrameReport> {
        if !self.frame.take(handle) {
            atrace!(handle = handle.0, "SectionLifecycle: ignoring stale frame");
            return None;
        }
        let host = Rc::clone(&self.host);
        let registry = Rc::clone(&self.registry);

        let anim = match self.runtime.as_mut()? {
            Runtime::Static { frame } => {
                let (written, skipped) = write_frame(&*host, &registry, frame);
                return Some(FrameReport {
                    progress: 1.0,
                    state: self.state,
                    pin: None,
                    events: &[],
                    written,
                    skipped,
                });
            }
            Runtime::Animated(anim) => anim,
        };

        let trigger = anim.tracker.trigger().section;
        let Some(trigger_handle) = lookup(&registry, trigger) else {
            if !self.layout_dirty {
                adebug!(section = trigger.get(), "SectionLifecycle: trigger element detached");
            }
            anim.release_pin(&*host, &registry, self.section);
            self.layout_dirty = true;
            return None;
        };

        let viewport = host.viewport();
        if self.layout_dirty || !anim.tracker.is_attached() {
            match host.measure(&trigger_handle) {
                Some(bounds) => {
                    anim.tracker.on_layout(bounds, &viewport);
                    self.layout_dirty = false;
                }
                None => {
                    awarn!(
                        section = trigger.get(),
                        "SectionLifecycle: section cannot be measured; rendering static content"
                    );
                    let pin = anim.release_pin(&*host, &registry, self.section);
                    anim.frame.fill_static(anim.timeline.targets().iter().copied());
                    let (written, skipped) = write_frame(&*host, &registry, &anim.frame);
                    self.state = SectionState::Complete;
                    self.progress = Some(1.0);
                    return Some(FrameReport {
                        progress: 1.0,
                        state: self.state,
                        pin,
                        events: &[],
                        written,
                        skipped,
                    });
                }
            }
        }

        let sample = anim.tracker.sample(viewport.scroll_y, now_ms)?;

        let pin = match anim.pin.as_mut() {
            Some(pin) => {
                let height = anim.tracker.bounds().map_or(0.0, |b| b.height);
                let range_len = anim.tracker.range().map_or(0.0, |r| r.len());
                pin.update(sample.position, height, range_len)
            }
            None => None,
        };
        anim.apply_pin(&*host, &registry, self.section, pin);

        anim.timeline.sample_into(sample.progress, &mut anim.frame);
        let (written, skipped) = write_frame(&*host, &registry, &anim.frame);

        self.state = SectionState::from_position(sample.position);
        self.progress = Some(sample.progress);
        atrace!(
            section = self.section.get(),
            progress = sample.progress,
            written,
            skipped,
            "SectionLifecycle::on_frame"
        );

        Some(FrameReport {
            progress: sample.progress,
            state: self.state,
            pin,
            events: sample.events(),
            written,
            skipped,
        })
    }

    /// Releases every listener, the pending frame and the pin. Idempotent.
    pub fn tear_down(&mut self) {
        if self.is_torn_down() {
            return;
        }
        adebug!(section = self.section.get(), "SectionLifecycle::tear_down");
        self.release();
        self.state = SectionState::TornDown;
    }

    /// Tears the section down and drops it.
    pub fn unmount(mut self) {
        self.tear_down();
    }

    fn arm(&mut self, id: VariantId) {
        let Some(variant) = self.selector.set().get(id) else {
            return;
        };
        let width = self.host.viewport().width;

        let runtime = match &variant.spec {
            VariantSpec::Animated(config) if !config.timeline.is_empty() => {
                let pin = config.pins().then(|| {
                    let mut pin = PinController::new(config.pin);
                    pin.set_viewport_width(width);
                    pin
                });
                Runtime::Animated(Animated {
                    tracker: ScrollTracker::new(config.trigger),
                    timeline: config.timeline.clone(),
                    pin,
                    pinned: None,
                    frame: RenderFrame::new(),
                })
            }
            VariantSpec::Animated(_) => {
                awarn!(
                    section = self.section.get(),
                    variant = variant.name.as_str(),
                    "SectionLifecycle: empty timeline; rendering static content"
                );
                Runtime::Static {
                    frame: RenderFrame::static_fallback(self.selector.set().targets()),
                }
            }
            VariantSpec::Static => Runtime::Static {
                frame: RenderFrame::static_fallback(self.selector.set().targets()),
            },
        };

        self.listeners.push(self.host.add_listener(ListenerKind::Scroll));
        self.listeners.push(self.host.add_listener(ListenerKind::Resize));
        self.state = match runtime {
            Runtime::Animated(_) => SectionState::Armed,
            Runtime::Static { .. } => SectionState::Complete,
        };
        self.runtime = Some(runtime);
        self.layout_dirty = true;
        self.progress = None;
        self.frame.request(&*self.host);
    }

    fn release(&mut self) {
        self.frame.cancel(&*self.host);

        if let Some(Runtime::Animated(mut anim)) = self.runtime.take() {
            anim.release_pin(&*self.host, &self.registry, self.section);
        }

        for id in self.listeners.drain(..) {
            self.host.remove_listener(id);
        }
        self.progress = None;
        self.state = SectionState::Idle;
    }
}

impl<H: Host> Drop for SectionLifecycle<H> {
    fn drop(&mut self) {
        self.tear_down();
    }
}

impl<H: Host> core::fmt::Debug for SectionLifecycle<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SectionLifecycle")
            .field("section", &self.section)
            .field("state", &self.state)
            .field("variant", &self.selector.current())
            .field("listeners", &self.listeners)
            .field("frame", &self.frame)
            .field("progress", &self.progress)
            .finish_non_exhaustive()
    }
}

fn write_frame<H: Host + ?Sized>(
    host: &H,
    registry: &SharedRegistry<H::Handle>,
    frame: &RenderFrame,
) -> (usize, usize) {
    let mut written = 0usize;
    let mut skipped = 0usize;
    for t in frame.iter() {
        match lookup(registry, t.target) {
            Some(handle) => {
                host.write_state(&handle, &t.state);
                written += 1;
            }
            None => skipped += 1,
        }
    }
    (written, skipped)
}
