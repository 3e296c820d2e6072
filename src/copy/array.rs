//! Fixed-length sequences.

use crate::{DeepCopy, ShapeKind};

impl<T: DeepCopy, const N: usize> DeepCopy for [T; N] {
    const KIND: ShapeKind = ShapeKind::Array;

    fn deep_copy(&self) -> Self {
        // N == 0 owns no storage and visits nothing.
        std::array::from_fn(|index| self[index].deep_copy())
    }
}
