// Example: driving a section through a simulated host (no real UI).
//
// A real adapter would:
// - implement `Host` over its render tree (DOM nodes, widgets, ...)
// - forward scroll/resize events to `Page::on_scroll`/`Page::on_resize`
// - call `Page::on_frame` from its animation-frame callback
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use scroll_timeline::{
    ElementBounds, ElementId, Phase, PinOptions, SectionConfig, Timeline, TriggerRange, Variant,
    VariantSet, Viewport, VisualState,
};
use scroll_timeline_adapter::{
    ElementRegistry, FrameHandle, Host, ListenerId, ListenerKind, Page,
};

#[derive(Default)]
struct SimHost {
    next: Cell<u64>,
    frames: RefCell<Vec<FrameHandle>>,
    viewport: Cell<Viewport>,
}

impl SimHost {
    fn id(&self) -> u64 {
        self.next.set(self.next.get() + 1);
        self.next.get()
    }
}

impl Host for SimHost {
    type Handle = &'static str;

    fn add_listener(&self, kind: ListenerKind) -> ListenerId {
        println!("  + {kind:?} listener");
        ListenerId(self.id())
    }

    fn remove_listener(&self, id: ListenerId) {
        println!("  - listener {}", id.0);
    }

    fn request_frame(&self) -> FrameHandle {
        let handle = FrameHandle(self.id());
        self.frames.borrow_mut().push(handle);
        handle
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.frames.borrow_mut().retain(|h| *h != handle);
    }

    fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    fn measure(&self, element: &&'static str) -> Option<ElementBounds> {
        (*element == "hero").then(|| ElementBounds::new(1000.0, 800.0))
    }

    fn write_state(&self, element: &&'static str, state: &VisualState) {
        println!("  {element}: opacity={:?}", state.opacity);
    }

    fn pin(&self, element: &&'static str, reserved_height: f32) {
        println!("  pin {element} (placeholder {reserved_height}px)");
    }

    fn unpin(&self, element: &&'static str) {
        println!("  unpin {element}");
    }
}

fn run_frames(host: &SimHost, page: &mut Page<SimHost>, now_ms: u64) {
    let frames: Vec<_> = host.frames.borrow_mut().drain(..).collect();
    for handle in frames {
        if let Some((id, report)) = page.on_frame(handle, now_ms) {
            println!("  frame {id}: p={:.2} state={:?}", report.progress, report.state);
        }
    }
}

fn main() {
    let hero = ElementId(1);
    let heading = ElementId(2);

    let host = Rc::new(SimHost::default());
    host.viewport.set(Viewport::new(1400.0, 1000.0, 0.0));
    let registry = ElementRegistry::shared();
    registry.borrow_mut().attach(hero, "hero");
    registry.borrow_mut().attach(heading, "heading");

    let timeline = Timeline::builder()
        .phase(
            Phase::single(heading, 0.0, 0.5)
                .with_from(VisualState::new().with_opacity(0.0))
                .with_to(VisualState::new().with_opacity(1.0)),
        )
        .build()
        .expect("valid timeline");
    let wide = SectionConfig::new(TriggerRange::new(hero).pinned(), timeline)
        .with_pin(PinOptions::new());
    let variants = VariantSet::new(vec![
        Variant::animated("wide", 768.0, wide),
        Variant::static_content("narrow", 0.0),
    ])
    .expect("valid variants");

    let mut page = Page::new(Rc::clone(&host), Rc::clone(&registry));
    println!("mount");
    page.mount(hero, variants);
    run_frames(&host, &mut page, 0);

    for (i, scroll_y) in [1200.0, 1600.0].into_iter().enumerate() {
        println!("scroll to {scroll_y}");
        host.viewport.set(host.viewport.get().with_scroll_y(scroll_y));
        page.on_scroll();
        run_frames(&host, &mut page, 16 * (i as u64 + 1));
    }

    println!("resize to 500");
    let mut vp = host.viewport.get();
    vp.width = 500.0;
    host.viewport.set(vp);
    page.on_resize();
    run_frames(&host, &mut page, 64);

    println!("navigate away");
    page.clear();
}
