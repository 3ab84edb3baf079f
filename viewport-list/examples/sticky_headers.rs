// Example: day-separator headers pinned above a windowed transcript.
use viewport_list::{Geometry, compose_sticky};

fn main() {
    let messages: Vec<String> = (0..500).map(|i| format!("message #{i}")).collect();
    let g = Geometry::new(24.0, 240.0).with_overscan(2);

    // Stale index 900 is dropped, duplicate 0 collapses.
    let pinned = [0usize, 0, 120, 900];
    let sticky = compose_sticky(&pinned, &messages, |m, i| format!("{i}:{m}"));

    let range = g.visible_range(2_400.0, messages.len());
    println!("overlay:");
    for (slot, row) in sticky.iter().enumerate() {
        println!("  [{}px] {}", slot as f64 * g.item_height, row.key);
    }
    println!("window {range:?}:");
    for i in range.indices() {
        println!("  [{}px] {}", i as f64 * g.item_height, messages[i]);
    }
}
