//! Associative mappings.
//!
//! Keys are copied by value and never recursed into: a key is immutable
//! while it sits in a map. Values are deep copied.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use crate::{DeepCopy, ShapeKind};

impl<K, V, S> DeepCopy for HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: DeepCopy,
    S: BuildHasher + Clone,
{
    const KIND: ShapeKind = ShapeKind::Map;

    fn deep_copy(&self) -> Self {
        let mut copy = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        for (key, value) in self {
            copy.insert(key.clone(), value.deep_copy());
        }
        copy
    }
}

impl<K, V> DeepCopy for BTreeMap<K, V>
where
    K: Ord + Clone,
    V: DeepCopy,
{
    const KIND: ShapeKind = ShapeKind::Map;

    fn deep_copy(&self) -> Self {
        self.iter()
            .map(|(key, value)| (key.clone(), value.deep_copy()))
            .collect()
    }
}

// Sets are maps without values: only keys, so a clone is already deep.
impl<K, S> DeepCopy for HashSet<K, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    const KIND: ShapeKind = ShapeKind::Map;

    fn deep_copy(&self) -> Self {
        self.clone()
    }
}

impl<K: Ord + Clone> DeepCopy for BTreeSet<K> {
    const KIND: ShapeKind = ShapeKind::Map;

    fn deep_copy(&self) -> Self {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn map_of_pointers() {
        let mut original = HashMap::new();
        original.insert(0, Rc::new(RefCell::new(1)));

        let copy = original.deep_copy();
        assert_eq!(copy, original);
        assert!(!Rc::ptr_eq(&copy[&0], &original[&0]));

        *copy[&0].borrow_mut() = 2;
        assert_eq!(*original[&0].borrow(), 1);
    }

    #[test]
    fn absent_map_stays_absent() {
        let original: Option<HashMap<String, u8>> = None;
        assert!(original.deep_copy().is_none());
    }

    #[test]
    fn btree_map_values_are_deep() {
        let mut original = BTreeMap::new();
        original.insert("k", vec![Box::new(1)]);

        let mut copy = original.deep_copy();
        if let Some(values) = copy.get_mut("k") {
            *values[0] = 5;
        }
        assert_eq!(*original["k"][0], 1);
    }

    #[test]
    fn sets_copy_their_keys() {
        let original: HashSet<String> = ["a", "b"].into_iter().map(String::from).collect();
        assert_eq!(original.deep_copy(), original);

        let ordered: BTreeSet<u8> = [3, 1, 2].into_iter().collect();
        assert_eq!(ordered.deep_copy().into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
