use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::collections::HashMap;
use std::sync::Mutex;

use viewport_list::{Align, Generation, ListOptions, ScrollDirection, ScrollEvent};

fn messages(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("m{i}")).collect()
}

fn chat_options() -> VirtualListOptions<String> {
    // 70px rows in a 400px container, overscan 5.
    VirtualListOptions::new(ListOptions::new(70.0, 400.0), |m: &String, _| m.clone())
}

fn instant(opts: VirtualListOptions<String>) -> VirtualListOptions<String> {
    opts.with_scroll_behavior(ScrollBehavior::Instant)
}

fn smooth(opts: VirtualListOptions<String>, duration_ms: u64) -> VirtualListOptions<String> {
    opts.with_scroll_behavior(ScrollBehavior::Smooth {
        duration_ms,
        easing: Easing::SmoothStep,
        echo_tolerance_px: DEFAULT_ECHO_TOLERANCE_PX,
    })
}

/// Ticks every 16ms from `start_ms` and reports each written offset back to the list `lag`
/// ticks later, as an asynchronous host event queue would. Returns the time after the last tick.
fn run_animation(list: &mut VirtualList<Vec<String>>, start_ms: u64, lag: usize) -> u64 {
    let mut written = Vec::new();
    let mut now = start_ms;
    while list.is_animating() {
        let Some(offset) = list.tick(now).scroll_to else {
            panic!("an animating list yields an offset every tick");
        };
        written.push(offset);
        if written.len() > lag {
            let echo = written[written.len() - 1 - lag];
            list.on_scroll(echo, now);
        }
        now += 16;
        assert!(now < start_ms + 10_000, "animation never finished");
    }
    for &echo in &written[written.len().saturating_sub(lag)..] {
        list.on_scroll(echo, now);
    }
    now
}

#[test]
fn renders_overscanned_window_with_keys_and_positions() {
    let mut list = VirtualList::new(messages(1_000), chat_options());
    list.on_scroll(700.0, 0);

    let plan = list.render(|m, i, visible| (m.clone(), i, visible));
    let Some(frame) = plan.as_list() else {
        panic!("expected a list frame");
    };
    assert_eq!(frame.total_height, 70_000.0);
    assert_eq!(frame.window.indices(), 5..22);
    assert!(frame.sticky.is_empty());
    assert!(!frame.loading);

    let indexes: Vec<usize> = frame.rows.iter().map(|r| r.index).collect();
    assert_eq!(indexes, (5..22).collect::<Vec<_>>());

    let first = &frame.rows[0];
    assert_eq!(first.key, "m5");
    assert_eq!(first.top, 350.0);
    assert!(!first.is_visible);
    assert_eq!(first.content, (String::from("m5"), 5, false));

    // Rows 10..16 intersect [700, 1100).
    let on_screen: Vec<usize> = frame
        .rows
        .iter()
        .filter(|r| r.is_visible)
        .map(|r| r.index)
        .collect();
    assert_eq!(on_screen, (10..16).collect::<Vec<_>>());
}

#[test]
fn empty_collection_selects_empty_branch() {
    let mut list = VirtualList::new(Vec::<String>::new(), chat_options());
    assert!(list.render(|m, _, _| m.clone()).is_empty());

    list.set_loading(true);
    let plan = list.render(|m, _, _| m.clone());
    let Some(frame) = plan.as_list() else {
        panic!("a loading list is not empty");
    };
    assert!(frame.loading);
    assert!(frame.rows.is_empty());
    assert_eq!(frame.total_height, 0.0);
}

#[test]
fn loading_flag_appends_below_rows() {
    let mut list = VirtualList::new(messages(3), chat_options());
    list.set_loading(true);
    let plan = list.render(|_, i, _| i);
    let frame = plan.as_list().map(|f| (f.loading, f.rows.len()));
    assert_eq!(frame, Some((true, 3)));
}

#[test]
fn sticky_rows_render_first_in_overlay() {
    let opts = chat_options().with_sticky_indices([0, 30, 99, 0]);
    let mut list = VirtualList::new(messages(50), opts);
    list.on_scroll(0.0, 0);

    let mut calls = Vec::new();
    let plan = list.render(|_, i, _| {
        calls.push(i);
        i
    });
    let Some(frame) = plan.as_list() else {
        panic!("expected a list frame");
    };

    let sticky: Vec<(usize, f64)> = frame.sticky.iter().map(|r| (r.index, r.top)).collect();
    assert_eq!(sticky, [(0, 0.0), (30, 70.0)]);
    assert!(frame.sticky.iter().all(|r| r.is_visible));
    assert_eq!(frame.sticky[1].key, "m30");

    // Sticky rows do not consume overscan: the window is the same as without them.
    assert_eq!(frame.window.indices(), 0..12);
    // Row 0 is both pinned and windowed.
    assert_eq!(frame.rows[0].index, 0);

    let mut expected = Vec::from([0usize, 30]);
    expected.extend(0..12);
    assert_eq!(calls, expected);
}

#[test]
fn sticky_indices_follow_collection_shrink() {
    let opts = chat_options().with_sticky_indices([1, 8]);
    let mut list = VirtualList::new(messages(10), opts);
    list.set_items(messages(5));
    let plan = list.render(|_, i, _| i);
    let sticky: Vec<usize> = plan
        .as_list()
        .map(|f| f.sticky.iter().map(|r| r.index).collect())
        .unwrap_or_default();
    assert_eq!(sticky, [1]);
}

#[test]
fn on_scroll_fires_for_every_event() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let opts = chat_options().with_on_scroll(Some({
        let seen = Arc::clone(&seen);
        move |top: f64| seen.lock().unwrap().push(top)
    }));
    let mut list = VirtualList::new(messages(1_000), opts);

    list.on_scroll(10.0, 0);
    list.on_scroll(10.0, 1);
    list.on_scroll(-4.0, 2);
    assert_eq!(*seen.lock().unwrap(), [10.0, 10.0, 0.0]);
    assert_eq!(list.scroll_direction(), Some(ScrollDirection::Backward));
}

#[test]
fn end_reached_fires_once_per_collection() {
    let fired = Arc::new(AtomicUsize::new(0));
    let opts = VirtualListOptions::new(ListOptions::new(10.0, 100.0), |m: &String, _| m.clone())
        .with_on_end_reached(Some({
            let fired = Arc::clone(&fired);
            move || {
                fired.fetch_add(1, Ordering::SeqCst);
            }
        }));
    // 100 rows of 10px: the 0.8 threshold sits at scroll_top 700.
    let mut list = VirtualList::new(messages(100), opts);

    for (now, top) in [(0u64, 100.0), (1, 710.0), (2, 400.0), (3, 750.0), (4, 200.0), (5, 900.0)] {
        list.on_scroll(top, now);
    }
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    // A new page arrives; the offset is kept.
    assert_eq!(list.set_items(messages(200)), Generation(1));
    assert_eq!(list.scroll_top(), 900.0);

    // 200 rows: the threshold moves to 1500.
    for (now, top) in [(6u64, 1_000.0), (7, 1_550.0), (8, 1_600.0), (9, 1_900.0)] {
        list.on_scroll(top, now);
    }
    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

#[test]
fn explicit_scroll_metrics_drive_end_reached() {
    let fired = Arc::new(AtomicUsize::new(0));
    let opts = chat_options().with_on_end_reached(Some({
        let fired = Arc::clone(&fired);
        move || {
            fired.fetch_add(1, Ordering::SeqCst);
        }
    }));
    let mut list = VirtualList::new(messages(1_000), opts);

    // The native container also shows a loading footer, so it reports more content.
    let out = list.on_scroll_event(ScrollEvent::new(58_000.0, 400.0, 72_000.0), 0);
    assert!(out.end_reached);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[test]
fn tick_debounces_idle() {
    let mut list = VirtualList::new(messages(1_000), chat_options());
    for (now, top) in [(0u64, 10.0), (50, 20.0), (100, 30.0)] {
        list.on_scroll(top, now);
        assert!(list.is_scrolling());
    }
    assert_eq!(list.idle_deadline(), Some(250));

    let mut idle = 0;
    for now in [120u64, 249, 250, 400] {
        if list.tick(now).became_idle {
            idle += 1;
        }
    }
    assert_eq!(idle, 1);
    assert!(!list.is_scrolling());
    assert_eq!(list.scroll_direction(), None);
}

#[test]
fn replacing_items_cancels_pending_idle() {
    let mut list = VirtualList::new(messages(1_000), chat_options());
    list.on_scroll(100.0, 0);
    list.set_items(messages(1_100));
    assert_eq!(list.idle_deadline(), None);
    assert!(!list.is_scrolling());
    assert!(!list.tick(1_000).became_idle);
    assert_eq!(list.viewport_state().scroll_top, 100.0);
}

#[test]
fn smooth_scroll_to_item_flows_through_scroll_events() {
    let mut list = VirtualList::new(messages(1_000), smooth(chat_options(), 100));

    let target = list.scroll_to_item(500, Align::Center, 0);
    assert_eq!(target, Some(34_835.0));
    assert!(list.is_animating());
    // Nothing moves until the host writes the offset and the container reports back.
    assert_eq!(list.scroll_top(), 0.0);

    let mut last = 0.0;
    let mut now = 0u64;
    while list.is_animating() {
        let tick = list.tick(now);
        let Some(offset) = tick.scroll_to else {
            panic!("an animating list yields an offset every tick");
        };
        assert!(offset >= last);
        last = offset;
        list.on_scroll(offset, now);
        now += 16;
    }

    assert_eq!(list.scroll_top(), 34_835.0);
    assert!(list.visible_range().contains(500));
    assert!(list.viewport_range().contains(500));
    assert_eq!(list.tick(now).scroll_to, None);
}

#[test]
fn user_scroll_cancels_smooth_scroll() {
    let mut list = VirtualList::new(messages(1_000), chat_options());
    list.scroll_to_item(900, Align::Start, 0);
    let Some(offset) = list.tick(16).scroll_to else {
        panic!("expected a tween sample");
    };
    list.on_scroll(offset, 16);
    assert!(list.is_animating());

    // The user grabs the scrollbar somewhere else.
    list.on_scroll(offset + 500.0, 20);
    assert!(!list.is_animating());
    assert_eq!(list.tick(32).scroll_to, None);
}

#[test]
fn instant_scroll_to_item_jumps_on_next_tick() {
    let mut list = VirtualList::new(messages(1_000), instant(chat_options()));
    assert_eq!(list.scroll_to_item(10, Align::End, 0), Some(370.0));
    assert!(!list.is_animating());
    assert_eq!(list.tick(1).scroll_to, Some(370.0));
    assert_eq!(list.tick(2).scroll_to, None);
}

#[test]
fn out_of_bounds_scroll_to_item_is_a_no_op() {
    let mut list = VirtualList::new(messages(10), chat_options());
    assert_eq!(list.scroll_to_item(10, Align::Start, 0), None);
    assert!(!list.is_animating());
    assert_eq!(list.tick(1), Tick::default());
}

#[test]
fn scroll_to_index_prop_fires_on_change_only() {
    let mut list = VirtualList::new(messages(1_000), instant(chat_options()));

    assert_eq!(list.set_scroll_to_index(Some(10), 0), Some(700.0));
    assert_eq!(list.set_scroll_to_index(Some(10), 1), None);
    assert_eq!(list.set_scroll_to_index(Some(20), 2), Some(1_400.0));

    // Clearing the prop re-arms the same index.
    assert_eq!(list.set_scroll_to_index(None, 3), None);
    assert_eq!(list.set_scroll_to_index(Some(20), 4), Some(1_400.0));

    // A changed alignment is a new request.
    list.update_options(|o| o.list.scroll_to_alignment = Align::End);
    assert_eq!(list.set_scroll_to_index(Some(20), 5), Some(1_070.0));
}

#[test]
fn stale_scroll_to_index_retries_when_data_arrives() {
    let mut list = VirtualList::new(messages(1_000), instant(chat_options()));
    assert_eq!(list.set_scroll_to_index(Some(5_000), 0), None);
    assert_eq!(list.tick(1).scroll_to, None);

    list.set_items(messages(6_000));
    assert_eq!(list.set_scroll_to_index(Some(5_000), 2), Some(350_000.0));
    assert_eq!(list.set_scroll_to_index(Some(5_000), 3), None);
}

#[test]
fn anchor_preserves_position_across_prepend() {
    let mut list = VirtualList::new(messages(100), instant(chat_options()));
    list.on_scroll(505.0, 0);

    let Some(anchor) = list.capture_anchor() else {
        panic!("non-empty list has an anchor");
    };
    assert_eq!(anchor.key, "m7");
    assert_eq!(anchor.offset_in_row, 15.0);

    // Ten older messages load above.
    let mut older: Vec<String> = (0..10).map(|i| format!("old{i}")).collect();
    older.extend(messages(100));
    let index_of: HashMap<String, usize> = older
        .iter()
        .enumerate()
        .map(|(i, m)| (m.clone(), i))
        .collect();
    list.set_items(older);

    let restored = list.restore_anchor(&anchor, |k| index_of.get(k).copied());
    assert_eq!(restored, Some(17.0 * 70.0 + 15.0));
    assert_eq!(list.tick(1).scroll_to, restored);

    let gone = ScrollAnchor {
        key: String::from("deleted"),
        offset_in_row: 0.0,
    };
    assert_eq!(list.restore_anchor(&gone, |k| index_of.get(k).copied()), None);
}

#[test]
fn container_resize_changes_window() {
    let mut list = VirtualList::new(messages(1_000), chat_options());
    list.on_scroll(700.0, 0);
    assert_eq!(list.visible_range().end_index, 22);
    list.set_container_height(800.0);
    // 10 + ceil(800/70)=12 + 1 + 5
    assert_eq!(list.visible_range().end_index, 28);
}

#[test]
fn tween_samples_endpoints() {
    let t = Tween::new(0.0, 100.0, 10, 100, Easing::Linear);
    assert_eq!(t.sample(0), 0.0);
    assert_eq!(t.sample(60), 50.0);
    assert_eq!(t.sample(110), 100.0);
    assert!(t.is_done(110));
    assert!(!t.is_done(109));

    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
        assert_eq!(easing.apply(2.0), 1.0);
    }
}

#[test]
fn tween_retarget_starts_from_current_sample() {
    let mut t = Tween::new(0.0, 1_000.0, 0, 100, Easing::Linear);
    t.retarget(50, 200.0, 100);
    assert_eq!(t.from, 500.0);
    assert_eq!(t.to, 200.0);
    assert_eq!(t.start_ms, 50);
}

#[test]
fn options_clone_shares_closures() {
    let opts = chat_options().with_sticky_indices([3]);
    let copy = opts.clone();
    assert!(Arc::ptr_eq(&opts.key_extractor, &copy.key_extractor));
    assert_eq!(copy.sticky_indices, [3]);
    assert_eq!(copy.scroll_behavior, ScrollBehavior::default());
}

#[test]
fn late_echoes_do_not_cancel_smooth_scroll() {
    for lag in [1, 2, 3] {
        let mut list = VirtualList::new(messages(1_000), smooth(chat_options(), 200));
        assert_eq!(list.scroll_to_item(500, Align::Start, 0), Some(35_000.0));
        run_animation(&mut list, 16, lag);
        assert_eq!(list.scroll_top(), 35_000.0, "lag {lag}");
    }
}

#[test]
fn echo_one_tick_behind_keeps_animating() {
    let mut list = VirtualList::new(messages(1_000), smooth(chat_options(), 300));
    list.scroll_to_item(500, Align::Start, 0);
    let s1 = list.tick(16).scroll_to;
    let s2 = list.tick(32).scroll_to;
    assert!(s2 > s1);

    let Some(s1) = s1 else {
        panic!("expected a sample");
    };
    list.on_scroll(s1, 33);
    assert!(list.is_animating());
    assert_eq!(list.scroll_top(), s1);
}

#[test]
fn echo_tolerance_is_configurable() {
    let loose = chat_options().with_scroll_behavior(ScrollBehavior::Smooth {
        duration_ms: 300,
        easing: Easing::Linear,
        echo_tolerance_px: 8.0,
    });
    let mut list = VirtualList::new(messages(1_000), loose);
    list.scroll_to_item(900, Align::Start, 0);
    let Some(offset) = list.tick(16).scroll_to else {
        panic!("expected a sample");
    };
    // The host rounded the written offset by a few pixels.
    list.on_scroll(offset + 5.0, 17);
    assert!(list.is_animating());

    let mut strict = VirtualList::new(messages(1_000), smooth(chat_options(), 300));
    strict.scroll_to_item(900, Align::Start, 0);
    let Some(offset) = strict.tick(16).scroll_to else {
        panic!("expected a sample");
    };
    strict.on_scroll(offset + 5.0, 17);
    assert!(!strict.is_animating());
}

#[test]
fn scroll_to_item_while_animating_retargets_from_current_position() {
    let mut list = VirtualList::new(messages(1_000), smooth(chat_options(), 100));
    assert_eq!(list.scroll_to_item(900, Align::Start, 0), Some(63_000.0));
    let Some(s1) = list.tick(16).scroll_to else {
        panic!("expected a sample");
    };
    list.on_scroll(s1, 16);

    assert_eq!(list.scroll_to_item(100, Align::Start, 20), Some(7_000.0));
    assert!(list.is_animating());

    // The path stays continuous: the first sample is where the old animation was at 20ms.
    let old = Tween::new(0.0, 63_000.0, 0, 100, Easing::SmoothStep);
    assert_eq!(list.tick(20).scroll_to, Some(old.sample(20)));
    list.on_scroll(old.sample(20), 20);

    run_animation(&mut list, 36, 1);
    assert_eq!(list.scroll_top(), 7_000.0);
}

#[test]
fn scroll_to_index_prop_animates_with_smooth_behavior() {
    let mut list = VirtualList::new(messages(1_000), smooth(chat_options(), 100));

    assert_eq!(list.set_scroll_to_index(Some(40), 0), Some(2_800.0));
    assert!(list.is_animating());
    let Some(s1) = list.tick(16).scroll_to else {
        panic!("expected a sample");
    };
    list.on_scroll(s1, 16);

    // Re-rendering with the same prop neither restarts nor retargets.
    assert_eq!(list.set_scroll_to_index(Some(40), 20), None);
    let expected = Tween::new(0.0, 2_800.0, 0, 100, Easing::SmoothStep).sample(32);
    assert_eq!(list.tick(32).scroll_to, Some(expected));
    list.on_scroll(expected, 32);

    run_animation(&mut list, 48, 0);
    assert_eq!(list.scroll_top(), 2_800.0);
    assert!(list.viewport_range().contains(40));
}

#[test]
fn user_scroll_drops_queued_jump() {
    let mut list = VirtualList::new(messages(1_000), instant(chat_options()));
    assert_eq!(list.scroll_to_item(500, Align::Start, 0), Some(35_000.0));
    list.on_scroll(100.0, 1);
    assert_eq!(list.tick(2).scroll_to, None);
    assert_eq!(list.scroll_top(), 100.0);
}

#[test]
fn user_scroll_after_anchor_restore_wins() {
    let mut list = VirtualList::new(messages(100), chat_options());
    list.on_scroll(505.0, 0);
    let Some(anchor) = list.capture_anchor() else {
        panic!("non-empty list has an anchor");
    };

    let mut older: Vec<String> = (0..10).map(|i| format!("old{i}")).collect();
    older.extend(messages(100));
    let index_of: HashMap<String, usize> = older
        .iter()
        .enumerate()
        .map(|(i, m)| (m.clone(), i))
        .collect();
    list.set_items(older);
    assert_eq!(
        list.restore_anchor(&anchor, |k| index_of.get(k).copied()),
        Some(1_205.0)
    );

    // The user keeps scrolling before the host's next frame.
    list.on_scroll(2_000.0, 5);
    assert_eq!(list.tick(6).scroll_to, None);
    assert_eq!(list.scroll_top(), 2_000.0);
}

#[test]
fn tween_progress_is_clamped() {
    let t = Tween::new(10.0, 20.0, 100, 0, Easing::Linear);
    assert_eq!(t.duration_ms, 1);
    assert_eq!(t.progress(50), 0.0);
    assert_eq!(t.progress(500), 1.0);
    assert_eq!(t.sample(500), 20.0);
}

#[test]
fn dropping_list_mid_animation_releases_callbacks() {
    let calls = Arc::new(AtomicUsize::new(0));
    let opts = smooth(chat_options(), 300).with_on_scroll(Some({
        let calls = Arc::clone(&calls);
        move |_: f64| {
            calls.fetch_add(1, Ordering::SeqCst);
        }
    }));
    let mut list = VirtualList::new(messages(1_000), opts);
    list.scroll_to_item(500, Align::Start, 0);
    list.on_scroll(0.0, 1);
    assert!(list.is_animating());
    assert!(list.idle_deadline().is_some());
    assert_eq!(Arc::strong_count(&calls), 2);

    drop(list);
    assert_eq!(Arc::strong_count(&calls), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
