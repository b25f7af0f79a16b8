mod common;

use common::*;
use gdbind_runtime::*;

#[test]
fn lookup_checks_the_hash() {
    setup();
    assert!(!bind::lookup("Node", "get_child_count", 266894019).is_nil());
    assert!(bind::lookup("Node", "get_child_count", 1).is_nil());
    assert!(bind::lookup("Node", "no_such_method", 266894019).is_nil());
    // Binds are keyed by the declaring class.
    assert!(bind::lookup("Node3D", "get_child_count", 266894019).is_nil());
}

#[test]
fn lookup_is_stable() {
    setup();
    let a = bind::lookup("Resource", "duplicate", 2118353938);
    let b = bind::lookup("Resource", "duplicate", 2118353938);
    assert_eq!(a, b);
    assert_eq!(binds().duplicate, a);
}

#[test]
fn resolver_reports_every_miss() {
    setup();
    let mut r = BindResolver::new();
    r.resolve("Object", "get_class", 1167940824);
    r.resolve("Object", "renamed_in_a_later_engine", 1);
    r.resolve("TileMap", "set_cell", 0);
    assert_eq!(r.resolved(), 1);
    assert_eq!(
        r.finish(),
        Err(BindError::MissingMethodBinds(vec![
            ("Object".to_owned(), "renamed_in_a_later_engine".to_owned()),
            ("TileMap".to_owned(), "set_cell".to_owned()),
        ]))
    );
}

#[test]
fn init_is_idempotent_per_table() {
    setup();
    assert!(is_api_initialized());
    assert_eq!(init_api(gdbind_test_engine::interface()), Ok(()));
    assert_eq!(init_api(std::ptr::null()), Err(BindError::NullInterface));

    let mut other = unsafe { std::ptr::read(gdbind_test_engine::interface()) };
    assert_eq!(init_api(&other), Err(BindError::AlreadyInitialized));
    other.version += 1;
    assert!(matches!(init_api(&other), Err(BindError::AbiMismatch { .. })));
}

#[test]
fn engine_logger_forwards_records() {
    setup();
    install_logger(log::LevelFilter::Info);
    log::warn!("bind test marker {}", 41 + 1);
    assert!(gdbind_test_engine::logged_contains("[gdbind] bind test marker 42"));
}
