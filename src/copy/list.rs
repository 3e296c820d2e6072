//! Ordered dynamic sequences.
//!
//! An absent sequence is `Option<Vec<T>>::None` and is handled by the
//! `Option` impl, so it stays absent instead of becoming an empty vec.

use std::collections::VecDeque;

use crate::{DeepCopy, ShapeKind};

impl<T: DeepCopy> DeepCopy for Vec<T> {
    const KIND: ShapeKind = ShapeKind::List;

    fn deep_copy(&self) -> Self {
        let mut copy = Vec::with_capacity(self.len());
        for element in self {
            copy.push(element.deep_copy());
        }
        copy
    }
}

impl<T: DeepCopy> DeepCopy for VecDeque<T> {
    const KIND: ShapeKind = ShapeKind::List;

    fn deep_copy(&self) -> Self {
        let mut copy = VecDeque::with_capacity(self.len());
        for element in self {
            copy.push_back(element.deep_copy());
        }
        copy
    }
}
