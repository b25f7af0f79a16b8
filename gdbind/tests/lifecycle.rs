use gdbind::prelude::*;
use gdbind::runtime::{callable_registry, class_registry, pointer_registry};

gdbind::entry!(gdbind::InitOptions { log_level: log::LevelFilter::Debug });

#[gdclass(base = Resource)]
#[derive(Default)]
struct Probe {
    setups: u32,
}

#[gdclass_impl]
impl Probe {
    #[gdvirtual]
    fn _setup_local_to_scene(&mut self) {
        self.setups += 1;
    }
}

#[test]
fn engine_shutdown_releases_host_state() {
    assert!(unsafe { gdbind_test_engine::load_host(__gdbind_entry::gdbind_init) });
    assert!(gdbind_test_engine::logged_contains("registered 1 host classes"));
    assert!(class_registry::is_registered("Probe"));

    let probe = Subclass::<Probe>::new().expect("construct Probe");
    let h = probe.handle();
    gdbind_test_engine::call_virtual(h, "_setup_local_to_scene", Vec::new());
    assert_eq!(probe.bind().setups, 1);
    drop(probe);
    assert!(!gdbind_test_engine::is_alive(h));

    let id = callable_registry::register(|_| Variant::nil());
    let res = Resource::new();
    let rh = res.handle();
    assert!(pointer_registry::find(rh).is_some());

    gdbind_test_engine::shutdown();
    assert!(gdbind_test_engine::logged_contains("shutdown complete"));
    assert!(!class_registry::is_registered("Probe"));
    assert!(!callable_registry::is_registered(id));
    // Carriers outliving shutdown are stale and drop without touching the engine.
    assert!(pointer_registry::find(rh).is_none());
    assert!(matches!(Subclass::<Probe>::new(), Err(BindError::ConstructionFailed(_))));
    drop(res);
}
