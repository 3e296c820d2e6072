//! `Reprint`: a type-erased value that can be deep copied.
//!
//! `&dyn Reprint` plays the role of a generic value whose concrete type is
//! only known at runtime. Every `DeepCopy + 'static` type is one.
//!
//! The trait's own methods carry `reprint_` names so that importing it does
//! not add `kind` or `store` to every `Vec` and `String` in scope. The short
//! accessors live on `dyn Reprint` itself.

use std::any::Any;
use std::fmt;

use crate::{DeepCopy, ShapeKind};

/// Object-safe view of a [`DeepCopy`] value.
pub trait Reprint: Any + 'static {
    /// Deep copy, boxed.
    fn reprint(&self) -> Box<dyn Reprint>;

    /// Deep copy of the referent, when this is a non-null pointer.
    fn reprint_pointee(&self) -> Option<Box<dyn Reprint>>;

    #[doc(hidden)]
    fn reprint_kind(&self) -> ShapeKind;

    #[doc(hidden)]
    fn reprint_type_name(&self) -> &'static str;

    #[doc(hidden)]
    fn reprint_is_null(&self) -> bool;

    #[doc(hidden)]
    fn reprint_store(&mut self, value: Box<dyn Reprint>) -> Result<(), Box<dyn Reprint>>;

    #[doc(hidden)]
    fn reprint_any(&self) -> &dyn Any;

    #[doc(hidden)]
    fn reprint_any_mut(&mut self) -> &mut dyn Any;

    #[doc(hidden)]
    fn reprint_into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: DeepCopy + 'static> Reprint for T {
    fn reprint(&self) -> Box<dyn Reprint> {
        Box::new(self.deep_copy())
    }

    fn reprint_pointee(&self) -> Option<Box<dyn Reprint>> {
        self.copy_pointee()
    }

    fn reprint_kind(&self) -> ShapeKind {
        T::KIND
    }

    fn reprint_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn reprint_is_null(&self) -> bool {
        T::KIND == ShapeKind::Pointer && self.is_null_pointer()
    }

    fn reprint_store(&mut self, value: Box<dyn Reprint>) -> Result<(), Box<dyn Reprint>> {
        self.store_pointee(value)
    }

    fn reprint_any(&self) -> &dyn Any {
        self
    }

    fn reprint_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn reprint_into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl dyn Reprint {
    /// Runtime shape tag of the concrete type.
    pub fn kind(&self) -> ShapeKind {
        self.reprint_kind()
    }

    /// Name of the concrete type.
    pub fn type_name(&self) -> &'static str {
        self.reprint_type_name()
    }

    /// Whether this is an absent pointer.
    pub fn is_null(&self) -> bool {
        self.reprint_is_null()
    }

    /// Write `value` into the referent. Hands it back if it does not fit.
    pub fn store(&mut self, value: Box<dyn Reprint>) -> Result<(), Box<dyn Reprint>> {
        self.reprint_store(value)
    }

    /// Whether the concrete type is `T`.
    pub fn is<T: Reprint>(&self) -> bool {
        self.reprint_any().is::<T>()
    }

    pub fn downcast_ref<T: Reprint>(&self) -> Option<&T> {
        self.reprint_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Reprint>(&mut self) -> Option<&mut T> {
        self.reprint_any_mut().downcast_mut::<T>()
    }

    /// Recover the concrete box, or hand the value back unchanged.
    pub fn downcast<T: Reprint>(self: Box<Self>) -> Result<Box<T>, Box<Self>> {
        if !self.is::<T>() {
            return Err(self);
        }
        match self.reprint_into_any().downcast::<T>() {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("concrete type checked before the cast"),
        }
    }
}

impl fmt::Debug for dyn Reprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reprint({}, {})", self.type_name(), self.kind())
    }
}
