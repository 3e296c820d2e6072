//! # reprint
//!
//! Deep copies of arbitrary values, driven by their runtime shape.
//!
//! Every type that can be copied carries a [`ShapeKind`] tag and a copier
//! through the [`DeepCopy`] trait. The copy is rebuilt level by level, so no
//! storage reachable through `Box`, `Rc`, `Arc`, collections or cells is
//! shared between the original and the copy.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let shared = Rc::new(RefCell::new(1));
//! let original = vec![shared.clone(), shared];
//!
//! let copy = reprint::deep_copy(&original);
//! *copy[0].borrow_mut() = 2;
//!
//! assert_eq!(*original[0].borrow(), 1);
//! assert_eq!(*copy[1].borrow(), 1);
//! ```
//!
//! Two things are deliberately not preserved:
//!
//! - **Aliasing.** Two handles to the same `Rc` become two independent cells.
//! - **Cycles.** There is no cycle detection; a value that reaches one of its
//!   own ancestors recurses until the stack is exhausted.

// --- shape ---
mod shape;
pub use shape::{ShapeKind, kind_agrees};

// --- errors ---
mod errors;
pub use errors::{ReprintError, ReprintErrorKind};

// --- copy ---
mod copy;
pub use copy::{DeepCopy, deep_copy};

// --- channel ---
#[cfg(feature = "channel")]
mod channel;
#[cfg(feature = "channel")]
pub use channel::{Channel, ChannelSender};

// --- value ---
mod value;
pub use value::Reprint;

// --- entry ---
mod entry;
pub use entry::{copy_into, copy_value, deep_copy_into};
