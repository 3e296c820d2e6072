use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use reprint::{DeepCopy, ShapeKind, deep_copy};

type Ptr<T> = Rc<RefCell<T>>;

fn ptr<T>(value: T) -> Ptr<T> {
    Rc::new(RefCell::new(value))
}

#[derive(Debug, PartialEq)]
enum Slot {
    Empty,
    Held(Ptr<i32>),
    Pair { left: Ptr<i32>, right: Box<i32> },
}

reprint::deep_copy_enum!(Slot {
    Empty,
    Held(cell),
    Pair { left, right },
});

#[derive(Debug, PartialEq)]
enum Tree<T> {
    Leaf(T),
    Node(Box<Tree<T>>, Box<Tree<T>>),
}

reprint::deep_copy_enum!(Tree<T> { Leaf(value), Node(left, right) });

mod state {
    use super::Ptr;

    #[derive(Debug, PartialEq)]
    pub enum Connection {
        Idle,
        Open { retries: Ptr<u32>, peer: String },
    }

    reprint::deep_copy_enum!(Connection {
        Idle,
        Open { retries, peer },
    });
}

#[test]
fn tuple_payload_is_not_aliased() {
    let cell = ptr(1);
    let original = Slot::Held(cell.clone());

    let copy = deep_copy(&original);
    let Slot::Held(copied) = &copy else {
        panic!("variant changed: {copy:?}");
    };
    *copied.borrow_mut() = 2;

    assert!(!Rc::ptr_eq(copied, &cell));
    assert_eq!(*cell.borrow(), 1);
    assert_eq!(original, Slot::Held(ptr(1)));
}

#[test]
fn named_payload_is_not_aliased() {
    let original = Slot::Pair {
        left: ptr(5),
        right: Box::new(6),
    };

    let mut copy = deep_copy(&original);
    if let Slot::Pair { left, right } = &mut copy {
        *left.borrow_mut() += 1;
        **right += 1;
    }

    assert_eq!(
        original,
        Slot::Pair {
            left: ptr(5),
            right: Box::new(6)
        }
    );
    assert_eq!(
        copy,
        Slot::Pair {
            left: ptr(6),
            right: Box::new(7)
        }
    );
}

#[test]
fn unit_variant() {
    assert_eq!(deep_copy(&Slot::Empty), Slot::Empty);
    assert_eq!(<Slot as DeepCopy>::KIND, ShapeKind::Struct);
}

#[test]
fn recursive_generic_enum() {
    let shared = ptr(vec![1]);
    let original = Tree::Node(
        Box::new(Tree::Leaf(shared.clone())),
        Box::new(Tree::Node(
            Box::new(Tree::Leaf(shared.clone())),
            Box::new(Tree::Leaf(shared.clone())),
        )),
    );

    let copy = deep_copy(&original);
    assert_eq!(copy, original);

    if let Tree::Node(left, _) = &copy {
        if let Tree::Leaf(cell) = left.as_ref() {
            cell.borrow_mut().push(2);
        }
    }
    assert_eq!(*shared.borrow(), vec![1]);
}

#[test]
fn enum_inside_collections() {
    let mut original = HashMap::new();
    original.insert("a", Slot::Held(ptr(10)));
    original.insert("b", Slot::Empty);

    let copy = deep_copy(&original);
    if let Slot::Held(cell) = &copy["a"] {
        *cell.borrow_mut() = 0;
    }

    assert_eq!(original["a"], Slot::Held(ptr(10)));
    assert_eq!(copy["b"], Slot::Empty);
}

#[test]
fn enum_declared_in_another_module() {
    let original = state::Connection::Open {
        retries: ptr(0),
        peer: String::from("10.0.0.1"),
    };

    let copy = deep_copy(&original);
    if let state::Connection::Open { retries, .. } = &copy {
        *retries.borrow_mut() = 3;
    }

    assert!(matches!(
        &original,
        state::Connection::Open { retries, .. } if *retries.borrow() == 0
    ));
    assert_eq!(deep_copy(&state::Connection::Idle), state::Connection::Idle);
}
