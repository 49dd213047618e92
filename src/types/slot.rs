//! The one-or-many container used for links and embedded resources.

/// A relation's value: either a single `T` or an ordered, non-empty sequence.
///
/// HAL allows a relation to map to one link/resource or to an array of them,
/// and the distinction is meaningful on the wire (`{"href": ...}` vs
/// `[{"href": ...}]`). `Slot` keeps that shape explicit instead of always
/// wrapping in a `Vec`.
///
/// Promotion is monotonic: pushing onto a `Single` yields a `Many`, and a
/// `Many` never collapses back to `Single`. A `Many` is never empty; absence
/// of a relation is modeled by the key not being in the map at all.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<T> {
    Single(T),
    Many(Vec<T>),
}

impl<T> Slot<T> {
    /// Number of values held.
    pub fn len(&self) -> usize {
        match self {
            Slot::Single(_) => 1,
            Slot::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// The first value. Total: a `Many` is never empty.
    pub fn first(&self) -> &T {
        match self {
            Slot::Single(value) => value,
            Slot::Many(items) => &items[0],
        }
    }

    /// The value at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        match self {
            Slot::Single(value) if index == 0 => Some(value),
            Slot::Single(_) => None,
            Slot::Many(items) => items.get(index),
        }
    }

    /// Iterate the held values in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        match self {
            Slot::Single(value) => std::slice::from_ref(value).iter(),
            Slot::Many(items) => items.iter(),
        }
    }

    /// Project every held value, preserving the single-vs-many shape.
    pub fn map<U, F: FnMut(&T) -> U>(&self, mut f: F) -> Slot<U> {
        match self {
            Slot::Single(value) => Slot::Single(f(value)),
            Slot::Many(items) => Slot::Many(items.iter().map(f).collect()),
        }
    }

    /// Append another slot's values, promoting `Single` to `Many`.
    ///
    /// `Single + Single` becomes `Many([a, b])`; a `Many` on either side is
    /// flattened in. Order is preserved: existing values first.
    pub fn push(self, other: Slot<T>) -> Slot<T> {
        let mut items = match self {
            Slot::Single(value) => vec![value],
            Slot::Many(items) => items,
        };
        match other {
            Slot::Single(value) => items.push(value),
            Slot::Many(more) => items.extend(more),
        }
        Slot::Many(items)
    }

    /// Build a slot from a vector: `None` when empty, the vector's shape
    /// otherwise. A one-element vector still becomes `Many`: the caller
    /// supplied a sequence, and the wire shape reflects that.
    pub fn from_vec(items: Vec<T>) -> Option<Slot<T>> {
        if items.is_empty() {
            None
        } else {
            Some(Slot::Many(items))
        }
    }
}

impl<T> From<T> for Slot<T> {
    fn from(value: T) -> Self {
        Slot::Single(value)
    }
}
