//! The copy core.
//!
//! [`DeepCopy`] is the per-type capability: a shape tag plus a copier.
//! Each submodule implements it for one shape, and every copier recurses by
//! calling [`DeepCopy::deep_copy`] on the values it contains.

// Shape copiers
mod array;
mod cell;
mod list;
mod map;
mod pointer;
mod record;
mod scalar;

use crate::shape::ShapeKind;
use crate::value::Reprint;

/// A type that can produce a storage-independent copy of itself.
///
/// The copy is equal to the original, and no mutable storage reachable from
/// one is reachable from the other. Shared handles (`Rc`, `Arc`) are
/// duplicated rather than aliased, so two handles to one cell in the
/// original become two cells in the copy.
///
/// There is no cycle detection. Copying a value that reaches one of its own
/// ancestors (for example through `Rc<RefCell<_>>`) never terminates.
///
/// # Panics
///
/// Copying reads through every cell it reaches. It panics when it meets a
/// `RefCell` that is mutably borrowed at that moment. Locks are different:
/// a poisoned `Mutex` or `RwLock` is copied as it is, and a lock already held
/// by the calling thread deadlocks or panics, as `lock` does.
///
/// Records get an impl from [`deep_copy_struct!`](crate::deep_copy_struct),
/// enums from [`deep_copy_enum!`](crate::deep_copy_enum), and plain `Clone`
/// types from [`deep_copy_scalar!`](crate::deep_copy_scalar).
pub trait DeepCopy: Sized {
    /// Runtime shape tag of this type.
    const KIND: ShapeKind;

    /// Copy `self` and everything it owns or points to.
    fn deep_copy(&self) -> Self;

    /// Whether this is an absent pointer (`None::<Box<_>>`).
    #[doc(hidden)]
    fn is_null_pointer(&self) -> bool {
        false
    }

    /// Copy of the referent, for pointer shapes that are not null.
    #[doc(hidden)]
    fn copy_pointee(&self) -> Option<Box<dyn Reprint>> {
        None
    }

    /// Write `value` into the referent. Hands the value back when this is
    /// not a pointer, is null, or the referent has a different type.
    #[doc(hidden)]
    fn store_pointee(&mut self, value: Box<dyn Reprint>) -> Result<(), Box<dyn Reprint>> {
        Err(value)
    }
}

/// Deep copy a value.
///
/// This is the dispatcher entry point: the impl of [`DeepCopy`] selected
/// for `T` is the copier for its shape.
pub fn deep_copy<T: DeepCopy>(value: &T) -> T {
    tracing::trace!(
        kind = %T::KIND,
        type_name = std::any::type_name::<T>(),
        "deep copy"
    );
    value.deep_copy()
}
