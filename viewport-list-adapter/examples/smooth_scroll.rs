use viewport_list::{Align, ListOptions};
use viewport_list_adapter::{Easing, ScrollBehavior, VirtualList, VirtualListOptions};

fn main() {
    // Example: smooth scroll-to-index driven by a frame loop.
    //
    // The list never moves itself: each tick yields an offset, the host writes it to the native
    // container, and the container's scroll event is fed back like any user scroll.
    let opts = VirtualListOptions::new(ListOptions::new(70.0, 400.0), |_: &u32, i| i.to_string())
        .with_scroll_behavior(ScrollBehavior::Smooth {
            duration_ms: 240,
            easing: Easing::EaseInOutCubic,
            echo_tolerance_px: 1.0,
        });
    let mut list = VirtualList::new((0..1_000u32).collect::<Vec<_>>(), opts);

    let target = list.scroll_to_item(500, Align::Center, 0);
    println!("target={target:?}");

    let mut now_ms = 0u64;
    while list.is_animating() {
        if let Some(offset) = list.tick(now_ms).scroll_to {
            list.on_scroll(offset, now_ms);
            println!(
                "t={now_ms:>3} offset={offset:>9.2} window={:?}",
                list.visible_range()
            );
        }
        now_ms += 16;
    }

    // Let the idle debounce settle.
    let deadline = list.idle_deadline().unwrap_or(now_ms);
    let tick = list.tick(deadline);
    println!(
        "became_idle={} state={:?}",
        tick.became_idle,
        list.viewport_state()
    );
}
