// Example: windowing, scroll phase and scroll-to math without a component.
use viewport_list::{Align, ListOptions, ScrollEvent, ScrollStateMachine};

fn main() {
    // 1,000 messages, 70px rows, 400px container.
    let count = 1_000usize;
    let opts = ListOptions::new(70.0, 400.0);
    let g = opts.geometry;
    let mut scroll = ScrollStateMachine::new(&opts);

    let total = g.total_height(count);
    for (now_ms, top) in [(0u64, 0.0), (16, 350.0), (32, 700.0)] {
        let out = scroll.on_scroll(ScrollEvent::new(top, g.container_height, total), now_ms);
        println!(
            "t={now_ms}ms top={} dir={:?} range={:?}",
            out.scroll_top,
            out.direction,
            g.visible_range(scroll.scroll_top(), count)
        );
    }

    if scroll.poll_idle(32 + opts.idle_delay_ms) {
        println!("idle at {:?}", scroll.viewport_state());
    }

    let target = g.scroll_offset_for_index(500, Align::Center, count);
    println!("scroll_to(500, center) -> {target:?}");
}
