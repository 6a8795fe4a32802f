use crate::*;

use scroll_timeline::{
    ElementBounds, ElementId, PinEvent, PinOptions, Phase, SectionConfig, Timeline,
    TriggerEvent, TriggerRange, Variant, VariantSet, Viewport, VisualState,
};

use core::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::vec;
use std::vec::Vec;

const SECTION: ElementId = ElementId(100);
const OTHER: ElementId = ElementId(200);
const TITLE: ElementId = ElementId(1);
const BODY: ElementId = ElementId(2);

#[derive(Clone, Copy, Debug, PartialEq)]
enum Op {
    AddListener(ListenerKind),
    RemoveListener(ListenerKind),
    RequestFrame,
    CancelFrame,
    Write(u32),
    Pin(u32, f32),
    Unpin(u32),
}

#[derive(Default)]
struct State {
    next_id: u64,
    listeners: BTreeMap<ListenerId, ListenerKind>,
    frames: Vec<FrameHandle>,
    requested: usize,
    viewport: Viewport,
    bounds: HashMap<u32, ElementBounds>,
    written: HashMap<u32, VisualState>,
    pinned: HashMap<u32, f32>,
    log: Vec<Op>,
}

/// An in-memory page: elements are `u32` handles with fixed layout boxes.
#[derive(Default)]
struct FakeHost {
    state: RefCell<State>,
}

impl FakeHost {
    fn new(width: f32) -> Rc<Self> {
        let host = Self::default();
        host.state.borrow_mut().viewport = Viewport::new(width, 1000.0, 0.0);
        Rc::new(host)
    }

    fn place(&self, element: u32, top: f32, height: f32) {
        self.state
            .borrow_mut()
            .bounds
            .insert(element, ElementBounds::new(top, height));
    }

    fn scroll_to(&self, scroll_y: f32) {
        self.state.borrow_mut().viewport.scroll_y = scroll_y;
    }

    fn resize(&self, width: f32) {
        self.state.borrow_mut().viewport.width = width;
    }

    /// Hands the oldest pending frame to the caller, as the host's frame loop would.
    fn take_frame(&self) -> Option<FrameHandle> {
        let mut s = self.state.borrow_mut();
        if s.frames.is_empty() {
            None
        } else {
            Some(s.frames.remove(0))
        }
    }

    fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    fn pending_frames(&self) -> usize {
        self.state.borrow().frames.len()
    }

    fn requested(&self) -> usize {
        self.state.borrow().requested
    }

    fn opacity(&self, element: u32) -> Option<f32> {
        self.state
            .borrow()
            .written
            .get(&element)
            .and_then(|s| s.opacity)
    }

    fn pinned(&self, element: u32) -> Option<f32> {
        self.state.borrow().pinned.get(&element).copied()
    }

    fn take_log(&self) -> Vec<Op> {
        core::mem::take(&mut self.state.borrow_mut().log)
    }

    fn has_no_resources(&self) -> bool {
        let s = self.state.borrow();
        s.listeners.is_empty() && s.frames.is_empty() && s.pinned.is_empty()
    }

    fn id(&self) -> u64 {
        let mut s = self.state.borrow_mut();
        s.next_id += 1;
        s.next_id
    }
}

impl Host for FakeHost {
    type Handle = u32;

    fn add_listener(&self, kind: ListenerKind) -> ListenerId {
        let id = ListenerId(self.id());
        let mut s = self.state.borrow_mut();
        s.listeners.insert(id, kind);
        s.log.push(Op::AddListener(kind));
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        let mut s = self.state.borrow_mut();
        let kind = s.listeners.remove(&id).expect("unknown listener");
        s.log.push(Op::RemoveListener(kind));
    }

    fn request_frame(&self) -> FrameHandle {
        let handle = FrameHandle(self.id());
        let mut s = self.state.borrow_mut();
        s.frames.push(handle);
        s.requested += 1;
        s.log.push(Op::RequestFrame);
        handle
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        let mut s = self.state.borrow_mut();
        s.frames.retain(|h| *h != handle);
        s.log.push(Op::CancelFrame);
    }

    fn viewport(&self) -> Viewport {
        self.state.borrow().viewport
    }

    fn measure(&self, element: &u32) -> Option<ElementBounds> {
        self.state.borrow().bounds.get(element).copied()
    }

    fn write_state(&self, element: &u32, state: &VisualState) {
        let mut s = self.state.borrow_mut();
        s.written.entry(*element).or_default().merge(state);
        s.log.push(Op::Write(*element));
    }

    fn pin(&self, element: &u32, reserved_height: f32) {
        let mut s = self.state.borrow_mut();
        s.pinned.insert(*element, reserved_height);
        s.log.push(Op::Pin(*element, reserved_height));
    }

    fn unpin(&self, element: &u32) {
        let mut s = self.state.borrow_mut();
        s.pinned.remove(element);
        s.log.push(Op::Unpin(*element));
    }
}

fn opacity_phase(target: ElementId, start: f32, end: f32) -> Phase {
    Phase::single(target, start, end)
        .with_from(VisualState::new().with_opacity(0.0))
        .with_to(VisualState::new().with_opacity(1.0))
}

/// Title fades in over the first half, body over the second. Pinned for one viewport height.
fn reveal(section: ElementId, pin: PinOptions) -> SectionConfig {
    let timeline = Timeline::builder()
        .phase(opacity_phase(TITLE, 0.0, 0.5))
        .phase(opacity_phase(BODY, 0.5, 1.0))
        .build()
        .unwrap();
    SectionConfig::new(TriggerRange::new(section).pinned(), timeline).with_pin(pin)
}

fn responsive_reveal(section: ElementId) -> VariantSet {
    VariantSet::new(vec![
        Variant::animated("wide", 768.0, reveal(section, PinOptions::new())),
        Variant::static_content("narrow", 0.0),
    ])
    .unwrap()
}

/// Section at top 1000, height 800, in a 1000px-tall viewport: the range is [1000, 2000).
fn page(width: f32) -> (Rc<FakeHost>, SharedRegistry<u32>) {
    let host = FakeHost::new(width);
    host.place(SECTION.get(), 1000.0, 800.0);
    host.place(OTHER.get(), 3000.0, 600.0);
    let registry = ElementRegistry::shared();
    for id in [SECTION, OTHER, TITLE, BODY] {
        registry.borrow_mut().attach(id, id.get());
    }
    (host, registry)
}

fn mount(
    host: &Rc<FakeHost>,
    registry: &SharedRegistry<u32>,
    variants: VariantSet,
) -> SectionLifecycle<FakeHost> {
    SectionLifecycle::mount(Rc::clone(host), Rc::clone(registry), SECTION, variants)
}

fn render(
    host: &FakeHost,
    section: &mut SectionLifecycle<FakeHost>,
    now_ms: u64,
) -> Option<FrameReport> {
    let handle = host.take_frame()?;
    section.on_frame(handle, now_ms)
}

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-5,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn mount_registers_listeners_and_requests_a_frame() {
    let (host, registry) = page(1400.0);
    let section = mount(&host, &registry, responsive_reveal(SECTION));

    assert_eq!(section.state(), SectionState::Armed);
    assert_eq!(section.variant_name(), Some("wide"));
    assert_eq!(section.listener_count(), 2);
    assert_eq!(host.listener_count(), 2);
    assert_eq!(host.pending_frames(), 1);
    assert_eq!(
        host.take_log(),
        vec![
            Op::AddListener(ListenerKind::Scroll),
            Op::AddListener(ListenerKind::Resize),
            Op::RequestFrame,
        ]
    );
}

#[test]
fn first_frame_renders_initial_states() {
    let (host, registry) = page(1400.0);
    let mut section = mount(&host, &registry, responsive_reveal(SECTION));

    let report = render(&host, &mut section, 0).unwrap();
    assert_eq!(report.progress, 0.0);
    assert_eq!(report.state, SectionState::Armed);
    assert_eq!(report.pin, None);
    assert_eq!(report.written, 2);
    assert_eq!(host.opacity(TITLE.get()), Some(0.0));
    assert_eq!(host.opacity(BODY.get()), Some(0.0));
}

#[test]
fn scrolling_into_range_pins_and_animates() {
    let (host, registry) = page(1400.0);
    let mut section = mount(&host, &registry, responsive_reveal(SECTION));
    render(&host, &mut section, 0);

    host.scroll_to(1600.0);
    section.on_scroll();
    let report = render(&host, &mut section, 16).unwrap();

    assert_close(report.progress, 0.6);
    assert_eq!(report.state, SectionState::Active);
    assert_eq!(report.events, &[TriggerEvent::Enter]);
    assert_eq!(
        report.pin,
        Some(PinEvent::Engage {
            reserved_height: 800.0
        })
    );
    assert_eq!(host.pinned(SECTION.get()), Some(800.0));
    assert!(section.pin_state().is_pinned);
    assert_eq!(host.opacity(TITLE.get()), Some(1.0));
    assert_close(host.opacity(BODY.get()).unwrap(), 0.2);
}

#[test]
fn leaving_the_range_releases_the_pin() {
    let (host, registry) = page(1400.0);
    let mut section = mount(&host, &registry, responsive_reveal(SECTION));

    host.scroll_to(1600.0);
    render(&host, &mut section, 0);
    assert!(host.pinned(SECTION.get()).is_some());

    host.scroll_to(2500.0);
    section.on_scroll();
    let report = render(&host, &mut section, 16).unwrap();
    assert_eq!(report.progress, 1.0);
    assert_eq!(report.state, SectionState::Complete);
    assert_eq!(report.pin, Some(PinEvent::Release));
    assert_eq!(report.events, &[TriggerEvent::Leave]);
    assert_eq!(host.pinned(SECTION.get()), None);
    assert_eq!(host.opacity(BODY.get()), Some(1.0));

    host.scroll_to(1500.0);
    section.on_scroll();
    let report = render(&host, &mut section, 32).unwrap();
    assert_eq!(report.state, SectionState::Active);
    assert_eq!(report.events, &[TriggerEvent::EnterBack]);
    assert!(matches!(report.pin, Some(PinEvent::Engage { .. })));

    host.scroll_to(0.0);
    section.on_scroll();
    let report = render(&host, &mut section, 48).unwrap();
    assert_eq!(report.state, SectionState::Armed);
    assert_eq!(report.events, &[TriggerEvent::LeaveBack]);
    assert_eq!(report.pin, Some(PinEvent::Release));
    assert_eq!(host.opacity(TITLE.get()), Some(0.0));
}

#[test]
fn scroll_bursts_coalesce_into_one_frame() {
    let (host, registry) = page(1400.0);
    let mut section = mount(&host, &registry, responsive_reveal(SECTION));
    for y in [100.0, 200.0, 300.0, 400.0] {
        host.scroll_to(y);
        section.on_scroll();
        section.on_resize();
    }
    assert_eq!(host.requested(), 1);
    assert_eq!(host.pending_frames(), 1);

    render(&host, &mut section, 0).unwrap();
    assert!(section.pending_frame().is_none());

    section.on_scroll();
    section.on_scroll();
    assert_eq!(host.requested(), 2);
}

#[test]
fn stale_frames_are_ignored() {
    let (host, registry) = page(1400.0);
    let mut section = mount(&host, &registry, responsive_reveal(SECTION));
    let handle = host.take_frame().unwrap();

    assert!(section.on_frame(FrameHandle(9_999), 0).is_none());
    assert!(section.on_frame(handle, 0).is_some());
    assert!(section.on_frame(handle, 16).is_none());
}

#[test]
fn listeners_return_to_baseline_after_unmount() {
    for scroll_y in [0.0, 1000.0, 1300.0, 1600.0, 1999.0, 2000.0, 4000.0] {
        let (host, registry) = page(1400.0);
        let mut section = mount(&host, &registry, responsive_reveal(SECTION));
        host.scroll_to(scroll_y);
        render(&host, &mut section, 0).unwrap();
        // Leave a frame outstanding so teardown has to cancel it.
        section.on_scroll();

        section.unmount();
        assert!(host.has_no_resources(), "leaked at scroll {scroll_y}");
    }
}

#[test]
fn repeated_mount_cycles_do_not_accumulate_listeners() {
    let (host, registry) = page(1400.0);
    for i in 0..10u64 {
        let mut section = mount(&host, &registry, responsive_reveal(SECTION));
        host.scroll_to(900.0 + i as f32 * 150.0);
        render(&host, &mut section, i * 16);
        assert_eq!(host.listener_count(), 2);
        section.unmount();
    }
    assert!(host.has_no_resources());
}

#[test]
fn unmount_cancels_the_pending_frame() {
    let (host, registry) = page(1400.0);
    let section = mount(&host, &registry, responsive_reveal(SECTION));
    assert_eq!(host.pending_frames(), 1);
    host.take_log();

    section.unmount();
    let log = host.take_log();
    assert_eq!(log[0], Op::CancelFrame);
    assert_eq!(host.pending_frames(), 0);
}

#[test]
fn drop_tears_down() {
    let (host, registry) = page(1400.0);
    {
        let mut section = mount(&host, &registry, responsive_reveal(SECTION));
        host.scroll_to(1600.0);
        render(&host, &mut section, 0);
        section.on_scroll();
        assert!(!host.has_no_resources());
    }
    assert!(host.has_no_resources());
}

#[test]
fn tear_down_is_idempotent_and_final() {
    let (host, registry) = page(1400.0);
    let mut section = mount(&host, &registry, responsive_reveal(SECTION));
    let handle = host.take_frame().unwrap();

    section.tear_down();
    host.take_log();
    section.tear_down();
    section.on_scroll();
    section.on_resize();
    section.refresh();

    assert!(host.take_log().is_empty());
    assert_eq!(section.state(), SectionState::TornDown);
    assert_eq!(section.variant(), None);
    assert!(section.on_frame(handle, 0).is_none());
}

#[test]
fn narrowing_swaps_variant_and_releases_pin_before_returning() {
    let (host, registry) = page(1400.0);
    let mut section = mount(&host, &registry, responsive_reveal(SECTION));
    host.scroll_to(1600.0);
    let report = render(&host, &mut section, 0).unwrap();
    assert_close(report.progress, 0.6);
    assert!(host.pinned(SECTION.get()).is_some());
    host.take_log();

    host.resize(500.0);
    section.on_resize();

    assert_eq!(host.pinned(SECTION.get()), None);
    assert_eq!(section.variant_name(), Some("narrow"));
    assert_eq!(section.state(), SectionState::Complete);
    assert_eq!(host.listener_count(), 2);
    // Everything from the outgoing variant is released before the incoming one registers,
    // and nothing is written until the next frame.
    assert_eq!(
        host.take_log(),
        vec![
            Op::Unpin(SECTION.get()),
            Op::RemoveListener(ListenerKind::Scroll),
            Op::RemoveListener(ListenerKind::Resize),
            Op::AddListener(ListenerKind::Scroll),
            Op::AddListener(ListenerKind::Resize),
            Op::RequestFrame,
        ]
    );

    let report = render(&host, &mut section, 16).unwrap();
    assert_eq!(report.progress, 1.0);
    assert_eq!(report.written, 2);
    assert_eq!(host.opacity(TITLE.get()), Some(1.0));
    assert_eq!(host.opacity(BODY.get()), Some(1.0));
    assert_eq!(host.pinned(SECTION.get()), None);
}

#[test]
fn variant_switch_cancels_an_outstanding_frame() {
    let (host, registry) = page(1400.0);
    let mut section = mount(&host, &registry, responsive_reveal(SECTION));
    let stale = host.take_frame().unwrap();

    host.resize(500.0);
    section.on_resize();

    assert_eq!(host.pending_frames(), 1);
    assert!(section.on_frame(stale, 0).is_none());
    assert!(render(&host, &mut section, 0).is_some());
}

#[test]
fn widening_restores_the_animated_variant() {
    let (host, registry) = page(500.0);
    let mut section = mount(&host, &registry, responsive_reveal(SECTION));
    assert_eq!(section.variant_name(), Some("narrow"));
    render(&host, &mut section, 0);

    host.resize(1400.0);
    host.scroll_to(1600.0);
    section.on_resize();
    assert_eq!(section.variant_name(), Some("wide"));
    assert_eq!(section.state(), SectionState::Armed);

    let report = render(&host, &mut section, 16).unwrap();
    assert_close(report.progress, 0.6);
    assert_eq!(host.pinned(SECTION.get()), Some(800.0));
}

#[test]
fn pin_breakpoint_releases_pin_within_resize() {
    let (host, registry) = page(1400.0);
    let pin = PinOptions::new().with_disable_below(Some(768.0));
    let variants = VariantSet::single(reveal(SECTION, pin)).unwrap();
    let mut section = mount(&host, &registry, variants);
    host.scroll_to(1600.0);
    render(&host, &mut section, 0);
    assert!(host.pinned(SECTION.get()).is_some());

    host.resize(500.0);
    section.on_resize();
    assert_eq!(host.pinned(SECTION.get()), None);
    assert!(!section.pin_state().is_pinned);

    let report = render(&host, &mut section, 16).unwrap();
    assert_close(report.progress, 0.6);
    assert_eq!(report.state, SectionState::Active);
    assert_eq!(report.pin, None);
    assert_eq!(host.pinned(SECTION.get()), None);

    host.resize(1400.0);
    section.on_resize();
    let report = render(&host, &mut section, 32).unwrap();
    assert!(matches!(report.pin, Some(PinEvent::Engage { .. })));
}

#[test]
fn narrow_mount_never_pins() {
    let (host, registry) = page(500.0);
    let pin = PinOptions::new().with_disable_below(Some(768.0));
    let variants = VariantSet::single(reveal(SECTION, pin)).unwrap();
    let mut section = mount(&host, &registry, variants);
    host.scroll_to(1600.0);

    let report = render(&host, &mut section, 0).unwrap();
    assert_eq!(report.pin, None);
    assert_eq!(host.pinned(SECTION.get()), None);
}

#[test]
fn detached_targets_are_skipped() {
    let (host, registry) = page(1400.0);
    let mut section = mount(&host, &registry, responsive_reveal(SECTION));
    registry.borrow_mut().detach(BODY);

    host.scroll_to(1600.0);
    let report = render(&host, &mut section, 0).unwrap();
    assert_eq!(report.written, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(host.opacity(BODY.get()), None);

    registry.borrow_mut().attach(BODY, BODY.get());
    section.on_scroll();
    let report = render(&host, &mut section, 16).unwrap();
    assert_eq!(report.written, 2);
    assert_close(host.opacity(BODY.get()).unwrap(), 0.2);
}

#[test]
fn detached_section_produces_no_updates() {
    let (host, registry) = page(1400.0);
    let mut section = mount(&host, &registry, responsive_reveal(SECTION));
    registry.borrow_mut().detach(SECTION);
    host.take_log();

    host.scroll_to(1600.0);
    assert!(render(&host, &mut section, 0).is_none());
    assert!(
        !host
            .take_log()
            .iter()
            .any(|op| matches!(op, Op::Write(_) | Op::Pin(..)))
    );

    registry.borrow_mut().attach(SECTION, SECTION.get());
    section.on_scroll();
    let report = render(&host, &mut section, 16).unwrap();
    assert_close(report.progress, 0.6);
}

#[test]
fn unmeasurable_section_renders_static_content() {
    let (host, registry) = page(1400.0);
    host.state.borrow_mut().bounds.remove(&SECTION.get());
    let mut section = mount(&host, &registry, responsive_reveal(SECTION));

    let report = render(&host, &mut section, 0).unwrap();
    assert_eq!(report.progress, 1.0);
    assert_eq!(report.state, SectionState::Complete);
    assert_eq!(report.pin, None);
    assert_eq!(host.opacity(TITLE.get()), Some(1.0));
    assert_eq!(host.opacity(BODY.get()), Some(1.0));
}

#[test]
fn losing_measurement_while_pinned_returns_to_normal_flow() {
    let (host, registry) = page(1400.0);
    let mut section = mount(&host, &registry, responsive_reveal(SECTION));
    host.scroll_to(1600.0);
    render(&host, &mut section, 0);
    assert_eq!(host.pinned(SECTION.get()), Some(800.0));

    host.state.borrow_mut().bounds.remove(&SECTION.get());
    section.refresh();
    let report = render(&host, &mut section, 16).unwrap();

    assert_eq!(report.progress, 1.0);
    assert_eq!(report.state, SectionState::Complete);
    assert_eq!(report.pin, Some(PinEvent::Release));
    assert_eq!(host.pinned(SECTION.get()), None);
    assert!(!section.pin_state().is_pinned);
    assert_eq!(host.opacity(BODY.get()), Some(1.0));
}

#[test]
fn detaching_a_pinned_section_still_unpins_on_unmount() {
    let (host, registry) = page(1400.0);
    let mut section = mount(&host, &registry, responsive_reveal(SECTION));
    host.scroll_to(1600.0);
    render(&host, &mut section, 0);
    assert_eq!(host.pinned(SECTION.get()), Some(800.0));

    registry.borrow_mut().detach(SECTION);
    section.unmount();

    assert_eq!(host.pinned(SECTION.get()), None);
    assert!(host.has_no_resources());
}

#[test]
fn detaching_a_pinned_section_releases_the_pin_on_the_next_frame() {
    let (host, registry) = page(1400.0);
    let mut section = mount(&host, &registry, responsive_reveal(SECTION));
    host.scroll_to(1600.0);
    render(&host, &mut section, 0);

    registry.borrow_mut().detach(SECTION);
    section.on_scroll();
    assert!(render(&host, &mut section, 16).is_none());
    assert_eq!(host.pinned(SECTION.get()), None);
    assert!(!section.pin_state().is_pinned);

    registry.borrow_mut().attach(SECTION, SECTION.get());
    section.on_scroll();
    let report = render(&host, &mut section, 32).unwrap();
    assert_eq!(report.state, SectionState::Active);
    assert!(report.events.is_empty());
    assert_eq!(
        report.pin,
        Some(PinEvent::Engage {
            reserved_height: 800.0
        })
    );
    assert_eq!(host.pinned(SECTION.get()), Some(800.0));
}

#[test]
fn reattaching_past_the_range_replays_no_crossings() {
    let (host, registry) = page(1400.0);
    let mut section = mount(&host, &registry, responsive_reveal(SECTION));
    host.scroll_to(2500.0);
    let report = render(&host, &mut section, 0).unwrap();
    assert_eq!(report.events, &[TriggerEvent::Enter, TriggerEvent::Leave]);

    registry.borrow_mut().detach(SECTION);
    section.on_scroll();
    assert!(render(&host, &mut section, 16).is_none());

    registry.borrow_mut().attach(SECTION, SECTION.get());
    section.on_scroll();
    let report = render(&host, &mut section, 32).unwrap();
    assert_eq!(report.state, SectionState::Complete);
    assert!(report.events.is_empty());
    assert_eq!(report.pin, None);
}

#[test]
fn empty_timeline_is_static() {
    let (host, registry) = page(1400.0);
    let config = SectionConfig::new(TriggerRange::new(SECTION), Timeline::new());
    let section = mount(&host, &registry, VariantSet::single(config).unwrap());
    assert_eq!(section.state(), SectionState::Complete);
    assert_eq!(section.listener_count(), 2);
}

#[test]
fn registry_tracks_attachments() {
    let mut registry = ElementRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.attach(TITLE, 1u32), None);
    assert_eq!(registry.attach(TITLE, 7u32), Some(1));
    assert_eq!(registry.get(TITLE), Some(&7));
    assert!(registry.is_attached(TITLE));
    assert_eq!(registry.detach(TITLE), Some(7));
    assert!(!registry.is_attached(TITLE));
    assert_eq!(registry.len(), 0);
}

#[test]
fn frame_slot_takes_only_its_own_handle() {
    let host = FakeHost::new(1400.0);
    let mut slot = FrameSlot::new();
    assert!(slot.request(&*host));
    assert!(!slot.request(&*host));
    let handle = slot.pending().unwrap();

    assert!(!slot.take(FrameHandle(handle.0 + 1)));
    assert!(slot.take(handle));
    assert!(!slot.is_pending());
    assert!(!slot.cancel(&*host));
}

#[test]
fn navigation_tears_down_the_previous_page() {
    let (host, registry) = page(1400.0);
    let mut page = Page::new(Rc::clone(&host), Rc::clone(&registry));
    page.mount(SECTION, responsive_reveal(SECTION));
    page.mount(OTHER, responsive_reveal(OTHER));
    assert_eq!(page.len(), 2);
    assert_eq!(page.listener_count(), 4);
    assert_eq!(host.listener_count(), 4);

    page.navigate([(OTHER, responsive_reveal(OTHER))]);
    assert_eq!(page.len(), 1);
    assert!(page.get(SECTION).is_none());
    assert_eq!(host.listener_count(), 2);
    assert_eq!(host.pending_frames(), 1);

    host.scroll_to(3300.0);
    page.on_scroll();
    let handle = host.take_frame().unwrap();
    let (id, report) = page.on_frame(handle, 0).unwrap();
    assert_eq!(id, OTHER);
    assert_close(report.progress, 0.3);

    page.clear();
    assert!(page.is_empty());
    assert!(host.has_no_resources());
}

#[test]
fn remounting_a_section_replaces_it() {
    let (host, registry) = page(1400.0);
    let mut page = Page::new(Rc::clone(&host), Rc::clone(&registry));
    page.mount(SECTION, responsive_reveal(SECTION));
    page.mount(SECTION, responsive_reveal(SECTION));
    assert_eq!(page.len(), 1);
    assert_eq!(host.listener_count(), 2);
    assert!(page.unmount(SECTION));
    assert!(!page.unmount(SECTION));
    assert!(host.has_no_resources());
}
