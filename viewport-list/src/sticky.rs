use alloc::vec::Vec;

use crate::ItemSource;

/// A normalized set of pinned row indexes.
///
/// Out-of-bounds indexes are dropped and duplicates collapse onto their first occurrence; the
/// caller's order is otherwise kept, since it is the stacking order of the overlay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StickySet {
    indices: Vec<usize>,
}

impl StickySet {
    pub fn new(indices: impl IntoIterator<Item = usize>, item_count: usize) -> Self {
        let mut out = Vec::new();
        for index in indices {
            if index >= item_count {
                vtrace!(index, item_count, "StickySet: dropping out-of-bounds index");
                continue;
            }
            if out.contains(&index) {
                continue;
            }
            out.push(index);
        }
        Self { indices: out }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }
}

/// One row of the sticky overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StickyItem<'a, T, K> {
    pub item: &'a T,
    pub index: usize,
    pub key: K,
}

/// Resolves pinned indexes against the current collection.
///
/// Indexes whose item no longer resolves (for example after the collection shrank) are skipped.
/// The result is independent of the windowed range: a pinned row may also appear there.
pub fn compose_sticky<'a, S, K>(
    indices: &[usize],
    items: &'a S,
    mut key_fn: impl FnMut(&S::Item, usize) -> K,
) -> Vec<StickyItem<'a, S::Item, K>>
where
    S: ItemSource + ?Sized,
{
    let set = StickySet::new(indices.iter().copied(), items.len());
    let mut out = Vec::with_capacity(set.len());
    for &index in set.indices() {
        let Some(item) = items.get(index) else {
            continue;
        };
        out.push(StickyItem {
            item,
            index,
            key: key_fn(item, index),
        });
    }
    out
}
