use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::sync::Arc;
use alloc::vec::Vec;

/// Read-only, index-addressable access to the host's item collection.
///
/// The engine only ever asks for the length and for single elements; it never mutates or
/// reorders the collection.
pub trait ItemSource {
    type Item;

    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> ItemSource for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> ItemSource for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> ItemSource for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

impl<S: ItemSource + ?Sized> ItemSource for Arc<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<&S::Item> {
        (**self).get(index)
    }
}

impl<S: ItemSource + ?Sized> ItemSource for Box<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<&S::Item> {
        (**self).get(index)
    }
}

impl<S: ItemSource + ?Sized> ItemSource for &S {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<&S::Item> {
        (**self).get(index)
    }
}
