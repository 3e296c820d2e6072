//! Entry points that adapt the copy core to type-erased values.

use tracing::{debug, trace};

use crate::errors::{ReprintError, ReprintErrorKind};
use crate::{DeepCopy, Reprint, ShapeKind};

/// Deep copy a type-erased value.
///
/// `None` means "no value" and is returned as is, without touching the
/// copy core.
pub fn copy_value(original: Option<&dyn Reprint>) -> Option<Box<dyn Reprint>> {
    let original = original?;
    trace!(
        kind = %original.kind(),
        type_name = original.type_name(),
        "copy value"
    );
    Some(original.reprint())
}

/// Deep copy `original` into the storage `copy` points to.
///
/// The destination must be a non-null pointer (`Box`, `Rc`, `Arc`, or a
/// `Some` of one) whose referent has the type of the copied value. When
/// `original` is itself a pointer, its referent is copied, so copying a
/// `Box<T>` into a `Box<T>` writes a `T`.
///
/// Nothing is written when `original` is `None` or a null pointer; both
/// report success and leave the destination as it was.
pub fn copy_into(
    original: Option<&dyn Reprint>,
    copy: Option<&mut dyn Reprint>,
) -> Result<(), ReprintError> {
    let Some(original) = original else {
        return Ok(());
    };
    let Some(copy) = copy else {
        debug!("copy target is absent");
        return Err(ReprintError::nil_destination());
    };

    let destination = copy.type_name();
    if copy.kind() != ShapeKind::Pointer {
        debug!(destination, kind = %copy.kind(), "copy target is not a pointer");
        return Err(ReprintError::new(
            destination,
            ReprintErrorKind::DestinationNotAPointer {
                type_name: destination,
            },
        ));
    }
    if copy.is_null() {
        debug!(destination, "copy target is a null pointer");
        return Err(ReprintError::new(
            destination,
            ReprintErrorKind::NilDestination,
        ));
    }

    let value = if original.kind() == ShapeKind::Pointer {
        match original.reprint_pointee() {
            Some(pointee) => pointee,
            None => {
                // The destination is left as it was, not cleared.
                debug!(
                    source = original.type_name(),
                    "copy source is a null pointer, nothing written"
                );
                return Ok(());
            }
        }
    } else {
        original.reprint()
    };

    trace!(
        kind = %value.kind(),
        source = value.type_name(),
        destination,
        "copy into"
    );
    copy.store(value).map_err(|rejected| {
        debug!(destination, source = rejected.type_name(), "copy does not fit target");
        ReprintError::new(
            destination,
            ReprintErrorKind::TypeMismatch {
                destination,
                source: rejected.type_name(),
            },
        )
    })
}

/// Deep copy `original` over `copy`.
pub fn deep_copy_into<T: DeepCopy>(original: &T, copy: &mut T) {
    *copy = crate::deep_copy(original);
}
