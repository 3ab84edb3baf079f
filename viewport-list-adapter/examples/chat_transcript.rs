use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use viewport_list::ListOptions;
use viewport_list_adapter::{RenderPlan, ScrollBehavior, VirtualList, VirtualListOptions};

#[derive(Clone, Debug)]
struct Message {
    id: u64,
    text: String,
}

fn page(first_id: u64, n: u64) -> Vec<Message> {
    (first_id..first_id + n)
        .map(|id| Message {
            id,
            text: format!("message #{id}"),
        })
        .collect()
}

fn main() {
    // Example: a chat transcript with infinite scroll and "load older" prepends.
    //
    // - `on_end_reached` requests the next page once per page
    // - prepending older messages captures an anchor first, then restores it
    let wants_more = Arc::new(AtomicBool::new(false));
    let opts = VirtualListOptions::new(ListOptions::new(56.0, 480.0), |m: &Message, _| {
        m.id.to_string()
    })
    .with_on_end_reached(Some({
        let wants_more = Arc::clone(&wants_more);
        move || wants_more.store(true, Ordering::SeqCst)
    }))
    .with_scroll_behavior(ScrollBehavior::Instant);

    let mut messages = page(1_000, 50);
    let mut list = VirtualList::new(messages.clone(), opts);

    // Scroll down until the list asks for more, twice.
    let mut now_ms = 0u64;
    let mut top = 0.0;
    let mut pages = 0;
    while pages < 2 {
        now_ms += 16;
        top += 120.0;
        list.on_scroll(top, now_ms);
        if wants_more.swap(false, Ordering::SeqCst) {
            pages += 1;
            let next_id = messages.last().map_or(0, |m| m.id + 1);
            messages.extend(page(next_id, 50));
            let generation = list.set_items(messages.clone());
            println!(
                "end reached at top={top}: loaded page, count={} generation={generation:?}",
                list.item_count()
            );
        }
    }

    // Load older history above the current view.
    let anchor = list.capture_anchor();
    println!("anchor before prepend: {anchor:?}");
    let mut older = page(900, 100);
    older.extend(messages);
    let index_of: HashMap<String, usize> = older
        .iter()
        .enumerate()
        .map(|(i, m)| (m.id.to_string(), i))
        .collect();
    list.set_items(older);
    if let Some(anchor) = anchor {
        let restored = list.restore_anchor(&anchor, |k| index_of.get(k).copied());
        println!("restored offset: {restored:?}");
    }
    if let Some(offset) = list.tick(now_ms + 16).scroll_to {
        // The host writes `offset` to its container; the container reports it back.
        list.on_scroll(offset, now_ms + 16);
    }

    match list.render(|m, _, visible| (m.text.clone(), visible)) {
        RenderPlan::Empty => println!("(no messages)"),
        RenderPlan::List(frame) => {
            println!(
                "window={:?} total_height={}",
                frame.window, frame.total_height
            );
            for row in frame.rows.iter().filter(|r| r.is_visible) {
                println!("  key={} top={} {}", row.key, row.top, row.content.0);
            }
        }
    }
}
