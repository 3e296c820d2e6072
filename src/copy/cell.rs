//! Interior-mutability cells.
//!
//! A cell is an aggregate with one field, the guarded value. The copy is a
//! new cell around a deep copy of that value, so `Rc<RefCell<T>>` and
//! `Arc<Mutex<T>>` graphs come out fully independent.

use std::cell::{Cell, RefCell};
use std::sync::{Mutex, PoisonError, RwLock};

use crate::{DeepCopy, ShapeKind};

impl<T: Copy> DeepCopy for Cell<T> {
    const KIND: ShapeKind = ShapeKind::Struct;

    fn deep_copy(&self) -> Self {
        Cell::new(self.get())
    }
}

/// # Panics
///
/// Panics if the value is currently mutably borrowed. There is no value to
/// read in that state, the same condition under which `RefCell::clone`
/// panics.
impl<T: DeepCopy> DeepCopy for RefCell<T> {
    const KIND: ShapeKind = ShapeKind::Struct;

    fn deep_copy(&self) -> Self {
        match self.try_borrow() {
            Ok(value) => RefCell::new((*value).deep_copy()),
            Err(_) => panic!(
                "deep copy of a mutably borrowed {}",
                std::any::type_name::<Self>()
            ),
        }
    }
}

// A poisoned lock still holds a value; copy it as it is.

impl<T: DeepCopy> DeepCopy for Mutex<T> {
    const KIND: ShapeKind = ShapeKind::Struct;

    fn deep_copy(&self) -> Self {
        let guard = self.lock().unwrap_or_else(PoisonError::into_inner);
        Mutex::new((*guard).deep_copy())
    }
}

impl<T: DeepCopy> DeepCopy for RwLock<T> {
    const KIND: ShapeKind = ShapeKind::Struct;

    fn deep_copy(&self) -> Self {
        let guard = self.read().unwrap_or_else(PoisonError::into_inner);
        RwLock::new((*guard).deep_copy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn refcell_contents_are_deep() {
        let original = RefCell::new(vec![Box::new(1)]);
        let copy = original.deep_copy();
        *copy.borrow_mut()[0] = 2;
        assert_eq!(*original.borrow()[0], 1);
    }

    #[test]
    #[should_panic(expected = "deep copy of a mutably borrowed")]
    fn mutably_borrowed_refcell_panics() {
        let original = RefCell::new(vec![1u8]);
        let _writer = original.borrow_mut();
        let _ = original.deep_copy();
    }

    #[test]
    fn shared_borrow_does_not_block_the_copy() {
        let original = RefCell::new(String::from("read"));
        let _reader = original.borrow();
        assert_eq!(*original.deep_copy().borrow(), "read");
    }

    #[test]
    fn cell_copies_the_value() {
        let original = Cell::new(3u8);
        let copy = original.deep_copy();
        copy.set(4);
        assert_eq!(original.get(), 3);
    }

    #[test]
    fn poisoned_mutex_is_still_copied() {
        let original = Arc::new(Mutex::new(String::from("kept")));
        let poisoner = original.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();
        assert!(original.is_poisoned());

        let copy = original.deep_copy();
        assert!(!copy.is_poisoned());
        assert_eq!(*copy.lock().unwrap(), "kept");
    }

    #[test]
    fn rwlock_contents_are_deep() {
        let original = RwLock::new(vec![String::from("a")]);
        let copy = original.deep_copy();
        copy.write().unwrap().push(String::from("b"));
        assert_eq!(original.read().unwrap().len(), 1);
    }
}
