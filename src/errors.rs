//! Error types for copying into a caller-supplied destination.

use std::fmt;

/// An error reported by [`copy_into`](crate::copy_into).
///
/// Copying itself never fails; only the destination can be unusable.
pub struct ReprintError {
    /// Type name of the destination, when there was one.
    pub destination: Option<&'static str>,
    pub kind: ReprintErrorKind,
}

impl ReprintError {
    /// Create a new error for the given destination type.
    pub fn new(destination: &'static str, kind: ReprintErrorKind) -> Self {
        Self {
            destination: Some(destination),
            kind,
        }
    }

    /// Create an error for a missing destination.
    pub fn nil_destination() -> Self {
        Self {
            destination: None,
            kind: ReprintErrorKind::NilDestination,
        }
    }
}

impl fmt::Display for ReprintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "copy_into: {}", self.kind)
    }
}

impl fmt::Debug for ReprintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.destination {
            Some(destination) => write!(f, "{} (destination {})", self.kind, destination),
            None => fmt::Display::fmt(&self.kind, f),
        }
    }
}

impl std::error::Error for ReprintError {}

/// The kind of destination error.
pub enum ReprintErrorKind {
    /// Destination is absent, or a null pointer.
    NilDestination,
    /// Destination is not a pointer, so there is no storage to write into.
    DestinationNotAPointer { type_name: &'static str },
    /// The copied value does not fit the destination's referent type.
    TypeMismatch {
        destination: &'static str,
        source: &'static str,
    },
}

impl fmt::Display for ReprintErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReprintErrorKind::NilDestination => {
                write!(f, "copy target is nil, it should be a valid pointer")
            }
            ReprintErrorKind::DestinationNotAPointer { type_name } => {
                write!(f, "copy target type {} and not a pointer", type_name)
            }
            ReprintErrorKind::TypeMismatch {
                destination,
                source,
            } => {
                write!(
                    f,
                    "copy target {} cannot hold a value of type {}",
                    destination, source
                )
            }
        }
    }
}

impl fmt::Debug for ReprintErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
