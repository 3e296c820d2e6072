//! Aggregates: structs, enums, tuples and `Result`.
//!
//! A record is rebuilt field by field. For user structs the impl comes from
//! [`deep_copy_struct!`](crate::deep_copy_struct), invoked next to the type
//! so private fields are in scope. User enums get theirs from
//! [`deep_copy_enum!`](crate::deep_copy_enum): the active variant is rebuilt
//! with every payload field copied.

use crate::{DeepCopy, ShapeKind};

/// Implement [`DeepCopy`] for a struct by copying every field.
///
/// The copy is built as a struct literal, so leaving a field out of the
/// list is a compile error. Invoke it in the module that defines the struct
/// to reach private fields.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// #[derive(Debug, PartialEq)]
/// pub struct Account {
///     pub name: String,
///     balance: Rc<RefCell<i64>>,
/// }
/// reprint::deep_copy_struct!(Account { name, balance });
///
/// #[derive(Debug, PartialEq)]
/// pub struct Pair<T>(T, T);
/// reprint::deep_copy_struct!(Pair<T>(0, 1));
///
/// let original = Account { name: "a".into(), balance: Rc::new(RefCell::new(10)) };
/// let copy = reprint::deep_copy(&original);
/// *copy.balance.borrow_mut() += 5;
/// assert_eq!(*original.balance.borrow(), 10);
///
/// let pair = reprint::deep_copy(&Pair(vec![1], vec![2]));
/// assert_eq!(pair, Pair(vec![1], vec![2]));
/// ```
///
/// Type parameters are bounded by `DeepCopy + 'static`.
#[macro_export]
macro_rules! deep_copy_struct {
    ($name:ident $(< $($param:ident),+ >)? { $($field:ident),* $(,)? }) => {
        impl $(< $($param: $crate::DeepCopy + 'static),+ >)? $crate::DeepCopy
            for $name $(< $($param),+ >)?
        {
            const KIND: $crate::ShapeKind = $crate::ShapeKind::Struct;

            fn deep_copy(&self) -> Self {
                Self {
                    $($field: $crate::DeepCopy::deep_copy(&self.$field),)*
                }
            }
        }
    };
    ($name:ident $(< $($param:ident),+ >)? ( $($index:tt),* $(,)? )) => {
        impl $(< $($param: $crate::DeepCopy + 'static),+ >)? $crate::DeepCopy
            for $name $(< $($param),+ >)?
        {
            const KIND: $crate::ShapeKind = $crate::ShapeKind::Struct;

            fn deep_copy(&self) -> Self {
                Self($($crate::DeepCopy::deep_copy(&self.$index),)*)
            }
        }
    };
    ($name:ident $(< $($param:ident),+ >)?) => {
        impl $(< $($param: $crate::DeepCopy + 'static),+ >)? $crate::DeepCopy
            for $name $(< $($param),+ >)?
        {
            const KIND: $crate::ShapeKind = $crate::ShapeKind::Struct;

            fn deep_copy(&self) -> Self {
                Self
            }
        }
    };
}

/// Implement [`DeepCopy`] for an enum by rebuilding the active variant.
///
/// List every variant in its own form: unit (`Idle`), tuple with a name per
/// payload field (`Moved(dx, dy)`), or named (`Renamed { from, to }`). The
/// names in a tuple variant only bind the payload, so any distinct names
/// do. A variant missing from the list is a non-exhaustive match error.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// #[derive(Debug, PartialEq)]
/// enum Slot {
///     Empty,
///     Shared(Rc<RefCell<i32>>),
///     Pair { left: Box<i32>, right: Box<i32> },
/// }
/// reprint::deep_copy_enum!(Slot {
///     Empty,
///     Shared(cell),
///     Pair { left, right },
/// });
///
/// let original = Slot::Shared(Rc::new(RefCell::new(1)));
/// let copy = reprint::deep_copy(&original);
/// if let Slot::Shared(cell) = &copy {
///     *cell.borrow_mut() = 2;
/// }
/// assert_eq!(original, Slot::Shared(Rc::new(RefCell::new(1))));
/// # let _ = Slot::Empty;
/// # let _ = Slot::Pair { left: Box::new(0), right: Box::new(0) };
/// ```
///
/// Type parameters are bounded by `DeepCopy + 'static`.
#[macro_export]
macro_rules! deep_copy_enum {
    (@arms $value:ident [$($arms:tt)*]) => {
        match $value {
            $($arms)*
        }
    };
    (@arms $value:ident [$($arms:tt)*] $variant:ident ( $($field:ident),* $(,)? ) $(, $($rest:tt)*)?) => {
        $crate::deep_copy_enum!(@arms $value [
            $($arms)*
            Self::$variant($($field),*) => Self::$variant($($crate::DeepCopy::deep_copy($field)),*),
        ] $($($rest)*)?)
    };
    (@arms $value:ident [$($arms:tt)*] $variant:ident { $($field:ident),* $(,)? } $(, $($rest:tt)*)?) => {
        $crate::deep_copy_enum!(@arms $value [
            $($arms)*
            Self::$variant { $($field),* } => Self::$variant {
                $($field: $crate::DeepCopy::deep_copy($field)),*
            },
        ] $($($rest)*)?)
    };
    (@arms $value:ident [$($arms:tt)*] $variant:ident $(, $($rest:tt)*)?) => {
        $crate::deep_copy_enum!(@arms $value [
            $($arms)*
            Self::$variant => Self::$variant,
        ] $($($rest)*)?)
    };
    ($name:ident $(< $($param:ident),+ >)? { $($variants:tt)* }) => {
        impl $(< $($param: $crate::DeepCopy + 'static),+ >)? $crate::DeepCopy
            for $name $(< $($param),+ >)?
        {
            const KIND: $crate::ShapeKind = $crate::ShapeKind::Struct;

            fn deep_copy(&self) -> Self {
                let value = self;
                $crate::deep_copy_enum!(@arms value [] $($variants)*)
            }
        }
    };
}

macro_rules! tuple {
    ($($name:ident . $index:tt),+) => {
        impl<$($name: DeepCopy),+> DeepCopy for ($($name,)+) {
            const KIND: ShapeKind = ShapeKind::Struct;

            fn deep_copy(&self) -> Self {
                ($(self.$index.deep_copy(),)+)
            }
        }
    };
}

tuple!(A.0);
tuple!(A.0, B.1);
tuple!(A.0, B.1, C.2);
tuple!(A.0, B.1, C.2, D.3);
tuple!(A.0, B.1, C.2, D.3, E.4);
tuple!(A.0, B.1, C.2, D.3, E.4, F.5);
tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6);
tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);

impl<T: DeepCopy, E: DeepCopy> DeepCopy for Result<T, E> {
    const KIND: ShapeKind = ShapeKind::Struct;

    fn deep_copy(&self) -> Self {
        match self {
            Ok(value) => Ok(value.deep_copy()),
            Err(error) => Err(error.deep_copy()),
        }
    }
}
