// Example: a pinned section whose title fades in, then whose cards rise in with a stagger.
use scroll_timeline::{
    ElementBounds, ElementId, Easing, Phase, ScrollTracker, Timeline, TriggerRange, Viewport,
    VisualState,
};

fn main() {
    let section = ElementId(10);
    let title = ElementId(1);
    let cards = [ElementId(2), ElementId(3), ElementId(4)];

    let timeline = Timeline::builder()
        .phase(
            Phase::single(title, 0.0, 0.4)
                .with_from(VisualState::new().with_opacity(0.0).with_translate_y(24.0))
                .with_to(VisualState::new().with_opacity(1.0).with_translate_y(0.0))
                .with_easing(Easing::EaseOutCubic),
        )
        .phase(
            Phase::new(cards, 0.4, 1.0)
                .with_from(VisualState::new().with_opacity(0.0).with_scale(0.9))
                .with_to(VisualState::new().with_opacity(1.0).with_scale(1.0))
                .with_stagger(0.1),
        )
        .build()
        .expect("valid timeline");

    let mut tracker = ScrollTracker::new(TriggerRange::new(section).pinned());
    let viewport = Viewport::new(1280.0, 800.0, 0.0);
    let range = tracker.on_layout(ElementBounds::new(1200.0, 800.0), &viewport);
    println!("range=[{}, {})", range.start, range.end);

    let mut now_ms = 0u64;
    for scroll_y in (1000..=2200).step_by(100) {
        now_ms += 16;
        let Some(sample) = tracker.sample(scroll_y as f32, now_ms) else {
            continue;
        };
        let frame = timeline.sample(sample.progress);
        let opacities: Vec<_> = frame
            .iter()
            .map(|t| format!("{}={:.2}", t.target, t.state.opacity.unwrap_or(1.0)))
            .collect();
        println!(
            "scroll={scroll_y} p={:.2} {:?} events={:?} {}",
            sample.progress,
            sample.position,
            sample.events(),
            opacities.join(" ")
        );
    }
}
