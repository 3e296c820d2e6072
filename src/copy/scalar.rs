//! Scalar fallback: types without internal references, copied by value.

use std::ffi::OsString;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use crate::{DeepCopy, ShapeKind};

/// Implement [`DeepCopy`] as a plain `Clone` for types that hold no shared
/// mutable storage.
///
/// A `Clone` copy shares whatever `Rc`, `Arc` or cell the value holds, so
/// types with such fields belong to [`deep_copy_struct!`](crate::deep_copy_struct)
/// or [`deep_copy_enum!`](crate::deep_copy_enum) instead.
///
/// ```
/// #[derive(Clone, Debug, PartialEq)]
/// struct Rgb(u8, u8, u8);
/// reprint::deep_copy_scalar!(Rgb);
///
/// let copy = reprint::deep_copy(&Rgb(0, 128, 128));
/// assert_eq!(copy, Rgb(0, 128, 128));
/// ```
#[macro_export]
macro_rules! deep_copy_scalar {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::DeepCopy for $ty {
                const KIND: $crate::ShapeKind = $crate::ShapeKind::Scalar;

                #[inline]
                fn deep_copy(&self) -> Self {
                    ::core::clone::Clone::clone(self)
                }
            }
        )+
    };
}

deep_copy_scalar! {
    bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    (),
    String, &'static str, PathBuf, OsString, Duration,
}

impl<T: ?Sized> DeepCopy for PhantomData<T> {
    const KIND: ShapeKind = ShapeKind::Scalar;

    fn deep_copy(&self) -> Self {
        PhantomData
    }
}

// Callables: the copy points at the same code. Function pointers carry no
// state. Shared closures are `Fn`, so captured state is only read through
// them, and the copy takes another handle to the same closure.
macro_rules! callable {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> DeepCopy for fn($($arg),*) -> R {
            const KIND: ShapeKind = ShapeKind::Scalar;

            #[inline]
            fn deep_copy(&self) -> Self {
                *self
            }
        }

        impl<R, $($arg),*> DeepCopy for Rc<dyn Fn($($arg),*) -> R> {
            const KIND: ShapeKind = ShapeKind::Scalar;

            #[inline]
            fn deep_copy(&self) -> Self {
                Rc::clone(self)
            }
        }

        impl<R, $($arg),*> DeepCopy for Arc<dyn Fn($($arg),*) -> R> {
            const KIND: ShapeKind = ShapeKind::Scalar;

            #[inline]
            fn deep_copy(&self) -> Self {
                Arc::clone(self)
            }
        }

        impl<R, $($arg),*> DeepCopy for Arc<dyn Fn($($arg),*) -> R + Send + Sync> {
            const KIND: ShapeKind = ShapeKind::Scalar;

            #[inline]
            fn deep_copy(&self) -> Self {
                Arc::clone(self)
            }
        }
    };
}

callable!();
callable!(A);
callable!(A, B);
callable!(A, B, C);
callable!(A, B, C, D);
