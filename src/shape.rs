//! Runtime shape tags.
//!
//! A [`ShapeKind`] names the structural category of a type, and therefore
//! the copy strategy that applies to it. Every [`DeepCopy`] impl declares its
//! tag statically; [`ShapeKind::of`] derives the same tag from facet's
//! runtime type description so the two can be checked against each other.

use std::fmt;

use facet_core::{Def, Facet, SequenceType, Shape, Type, UserType};

use crate::DeepCopy;

/// Structural category of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// No internal references worth following: numbers, text, callables and
    /// anything not listed below. Copied by value.
    Scalar,
    /// Fixed-length sequence (`[T; N]`).
    Array,
    /// Ordered dynamic sequence (`Vec<T>`, `VecDeque<T>`).
    List,
    /// Associative mapping (maps and sets).
    Map,
    /// Aggregate of fields (structs, enums, tuples, cells).
    Struct,
    /// Indirection to a single heap cell (`Box`, `Rc`, `Arc`).
    Pointer,
    /// Communication channel; only its shape is copied.
    Channel,
}

impl ShapeKind {
    /// Classify a facet shape.
    ///
    /// `Option<T>` takes the tag of `T`: it is the absent state of whatever
    /// it wraps. Channels have no facet definition and never come out of
    /// this function.
    pub fn of(shape: &'static Shape) -> Self {
        // Def first: Option/List/Map carry a Def but are also user types at
        // the ty level.
        match &shape.def {
            Def::List(_) => ShapeKind::List,
            Def::Map(_) | Def::Set(_) => ShapeKind::Map,
            Def::Pointer(_) => ShapeKind::Pointer,
            Def::Option(option_def) => ShapeKind::of(option_def.t),
            _ => match &shape.ty {
                Type::User(UserType::Struct(_) | UserType::Enum(_)) => ShapeKind::Struct,
                Type::Sequence(SequenceType::Array(_)) => ShapeKind::Array,
                _ => ShapeKind::Scalar,
            },
        }
    }

    /// Classify a type through its facet shape.
    pub fn of_type<T: Facet<'static>>() -> Self {
        Self::of(T::SHAPE)
    }

    /// Whether values of this shape can be absent (`None`) rather than empty.
    pub fn is_nullable(self) -> bool {
        matches!(self, ShapeKind::List | ShapeKind::Map | ShapeKind::Pointer)
    }

    /// Lowercase name, as used in log fields and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Scalar => "scalar",
            ShapeKind::Array => "array",
            ShapeKind::List => "list",
            ShapeKind::Map => "map",
            ShapeKind::Struct => "struct",
            ShapeKind::Pointer => "pointer",
            ShapeKind::Channel => "channel",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check that a type's declared [`DeepCopy::KIND`] matches its facet shape.
///
/// Useful as a test for hand-written impls: a struct copied with
/// `deep_copy_struct!` should classify as [`ShapeKind::Struct`] under facet
/// too.
pub fn kind_agrees<T>() -> bool
where
    T: DeepCopy + Facet<'static>,
{
    T::KIND == ShapeKind::of(T::SHAPE)
}
