//! Indirections: a fresh cell holding a copy of the referent.
//!
//! `Option<P>` is the nullable form of a pointer `P`. `None` copies to
//! `None` without allocating.

use std::rc::Rc;
use std::sync::Arc;

use crate::value::Reprint;
use crate::{DeepCopy, ShapeKind};

impl<T: DeepCopy + 'static> DeepCopy for Box<T> {
    const KIND: ShapeKind = ShapeKind::Pointer;

    fn deep_copy(&self) -> Self {
        Box::new((**self).deep_copy())
    }

    fn copy_pointee(&self) -> Option<Box<dyn Reprint>> {
        let pointee: Box<dyn Reprint> = Box::new((**self).deep_copy());
        Some(pointee)
    }

    fn store_pointee(&mut self, value: Box<dyn Reprint>) -> Result<(), Box<dyn Reprint>> {
        let value = value.downcast::<T>()?;
        **self = *value;
        Ok(())
    }
}

// Rc and Arc: storing rebinds this handle to a new cell. Other handles to
// the old cell keep seeing the old value.

impl<T: DeepCopy + 'static> DeepCopy for Rc<T> {
    const KIND: ShapeKind = ShapeKind::Pointer;

    fn deep_copy(&self) -> Self {
        Rc::new((**self).deep_copy())
    }

    fn copy_pointee(&self) -> Option<Box<dyn Reprint>> {
        let pointee: Box<dyn Reprint> = Box::new((**self).deep_copy());
        Some(pointee)
    }

    fn store_pointee(&mut self, value: Box<dyn Reprint>) -> Result<(), Box<dyn Reprint>> {
        let value = value.downcast::<T>()?;
        *self = Rc::new(*value);
        Ok(())
    }
}

impl<T: DeepCopy + 'static> DeepCopy for Arc<T> {
    const KIND: ShapeKind = ShapeKind::Pointer;

    fn deep_copy(&self) -> Self {
        Arc::new((**self).deep_copy())
    }

    fn copy_pointee(&self) -> Option<Box<dyn Reprint>> {
        let pointee: Box<dyn Reprint> = Box::new((**self).deep_copy());
        Some(pointee)
    }

    fn store_pointee(&mut self, value: Box<dyn Reprint>) -> Result<(), Box<dyn Reprint>> {
        let value = value.downcast::<T>()?;
        *self = Arc::new(*value);
        Ok(())
    }
}

impl<T: DeepCopy> DeepCopy for Option<T> {
    const KIND: ShapeKind = T::KIND;

    fn deep_copy(&self) -> Self {
        self.as_ref().map(T::deep_copy)
    }

    fn is_null_pointer(&self) -> bool {
        self.as_ref().is_none_or(T::is_null_pointer)
    }

    fn copy_pointee(&self) -> Option<Box<dyn Reprint>> {
        self.as_ref().and_then(T::copy_pointee)
    }

    fn store_pointee(&mut self, value: Box<dyn Reprint>) -> Result<(), Box<dyn Reprint>> {
        match self {
            Some(inner) => inner.store_pointee(value),
            None => Err(value),
        }
    }
}
