mod common;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use common::*;
use gdbind_runtime::*;
use gdbind_test_engine::Value;

#[test]
fn callable_round_trip_through_the_engine() {
    setup();
    let callable = Callable::from_fn(|args| {
        let a: i64 = args.arg(0);
        let b: i64 = args.arg(1);
        Variant::from(a * b)
    });
    let out = callable.call(&[Variant::from(6i64), Variant::from(7i64)]).expect("call succeeds");
    assert_eq!(out.to::<i64>(), 42);
}

#[test]
fn connected_closure_sees_emissions() {
    setup();
    let res = Resource::new();
    let hits = Rc::new(Cell::new(0));
    let seen = hits.clone();
    let code = signal::connect_fn(res.handle(), "changed", move |_| {
        seen.set(seen.get() + 1);
        Variant::nil()
    });
    assert_eq!(code, 0);
    assert_eq!(gdbind_test_engine::connection_count(res.handle(), "changed"), 1);
    res.emit_changed();
    res.emit_changed();
    assert_eq!(hits.get(), 2);
}

#[test]
fn emission_arguments_arrive_in_order() {
    setup();
    let node = Node::new();
    let got = Rc::new(RefCell::new(Vec::new()));
    let sink = got.clone();
    signal::connect_fn(node.handle(), "child_entered_tree", move |args| {
        sink.borrow_mut().push((args.len(), args.object::<Node>(0).map(|n| n.handle())));
        Variant::nil()
    });
    let child = Node::new();
    node.add_child(&child);
    assert_eq!(*got.borrow(), vec![(1, Some(child.handle()))]);

    let raw = Rc::new(RefCell::new(Vec::new()));
    let sink = raw.clone();
    signal::connect_fn(node.handle(), "renamed", move |args| {
        sink.borrow_mut().extend((0..args.len()).map(|i| args.arg::<i64>(i)));
        Variant::nil()
    });
    gdbind_test_engine::emit_signal(node.handle(), "renamed", vec![Value::Int(3), Value::Int(-1)]);
    assert_eq!(*raw.borrow(), vec![3, -1]);
    gdbind_test_engine::free_object(node.handle());
}

#[test]
fn one_shot_connections_fire_once() {
    setup();
    let res = Resource::new();
    let hits = Rc::new(Cell::new(0));
    let seen = hits.clone();
    let callable = Callable::from_fn(move |_| {
        seen.set(seen.get() + 1);
        Variant::nil()
    });
    assert_eq!(signal::connect(res.handle(), "changed", &callable, signal::flags::ONE_SHOT), 0);
    res.emit_changed();
    res.emit_changed();
    assert_eq!(hits.get(), 1);
    assert_eq!(gdbind_test_engine::connection_count(res.handle(), "changed"), 0);
}

#[test]
fn engine_errors_are_returned_verbatim() {
    setup();
    let res = Resource::new();
    let callable = Callable::from_fn(|_| Variant::nil());
    assert_eq!(signal::connect(res.handle(), "no_such_signal", &callable, 0), 31);
    assert_eq!(signal::connect(res.handle(), "changed", &callable, 0), 0);
    // Same callable twice on one signal.
    assert_eq!(signal::connect(res.handle(), "changed", &callable, 0), 31);
    assert_eq!(check_engine(31), Err(BindError::Engine(31)));
}

#[test]
fn nil_and_freed_objects_get_the_engine_code() {
    setup();
    let callable = Callable::from_fn(|_| Variant::nil());
    assert_eq!(signal::connect(ObjectPtr::NULL, "changed", &callable, 0), 31);
    let node = Node::new();
    let handle = node.handle();
    gdbind_test_engine::free_object(handle);
    assert_eq!(signal::connect(handle, "ready", &callable, 0), 31);
    assert_eq!(signal::connect_fn(ObjectPtr::NULL, "ready", |_| Variant::nil()), 31);
}

#[test]
fn freeing_the_emitter_releases_the_closure() {
    setup();
    struct Flag(Rc<Cell<bool>>);
    impl Drop for Flag {
        fn drop(&mut self) {
            self.0.set(false);
        }
    }
    let alive = Rc::new(Cell::new(true));
    let flag = Flag(alive.clone());
    let node = Node::new();
    signal::connect_fn(node.handle(), "ready", move |_| {
        let _ = &flag;
        Variant::nil()
    });
    assert!(alive.get());
    gdbind_test_engine::free_object(node.handle());
    assert!(!alive.get());
}

#[test]
fn panicking_closure_reports_a_call_error() {
    setup();
    let callable = Callable::from_fn(|_| panic!("closure failed"));
    let err = callable.call(&[]).expect_err("panic surfaces as a call error");
    assert!(!err.is_ok());
    // Other callables are unaffected.
    let ok = Callable::from_fn(|_| Variant::from(1i64));
    assert_eq!(ok.call(&[]).map(|v| v.to::<i64>()), Ok(1));
}
