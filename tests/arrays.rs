use std::cell::RefCell;
use std::rc::Rc;

use reprint::{DeepCopy, ShapeKind, deep_copy};

#[test]
fn array_of_scalars() {
    let original = [1u32, 2, 3];
    assert_eq!(deep_copy(&original), [1, 2, 3]);
}

#[test]
fn array_of_strings_gets_new_buffers() {
    let original = [String::from("a"), String::from("b")];
    let copy = deep_copy(&original);
    assert_eq!(copy, original);
    assert_ne!(copy[0].as_ptr(), original[0].as_ptr());
}

#[test]
fn zero_length_array() {
    let original: [Vec<u8>; 0] = [];
    let copy = deep_copy(&original);
    assert_eq!(copy, original);
    assert_eq!(<[Vec<u8>; 0] as DeepCopy>::KIND, ShapeKind::Array);
}

#[test]
fn array_of_pointers_is_independent() {
    let original = [Rc::new(RefCell::new(0)), Rc::new(RefCell::new(1))];
    let copy = deep_copy(&original);
    *copy[0].borrow_mut() = 10;
    assert_eq!(*original[0].borrow(), 0);
    assert!(!Rc::ptr_eq(&copy[1], &original[1]));
}

#[test]
fn nested_arrays() {
    let original = [[Box::new(1), Box::new(2)], [Box::new(3), Box::new(4)]];
    let mut copy = deep_copy(&original);
    *copy[1][0] = 30;
    assert_eq!(*original[1][0], 3);
    assert_eq!(*copy[1][1], 4);
}
