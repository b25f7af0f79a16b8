use std::cell::Cell;
use std::rc::Rc;
use std::sync::{Mutex, Once};

use gdbind::prelude::*;
use gdbind::runtime::class_registry;
use gdbind_test_engine::Value;

gdbind::entry!();

static LAST_REPLACE: Mutex<Option<bool>> = Mutex::new(None);

#[gdclass(base = CodeEdit)]
#[derive(Default)]
struct ScriptEditor {
    confirmations: u32,
    backspaces: Vec<i32>,
}

#[gdclass_impl]
impl ScriptEditor {
    #[gdvirtual]
    fn _confirm_code_completion(&mut self, replace: bool) {
        self.confirmations += 1;
        *LAST_REPLACE.lock().unwrap() = Some(replace);
    }

    #[gdvirtual]
    fn _backspace(&mut self, caret_index: i32) {
        self.backspaces.push(caret_index);
    }
}

#[gdclass(base = Control)]
#[derive(Default)]
struct Fragile;

#[gdclass_impl]
impl Fragile {
    #[gdvirtual]
    fn _has_point(&self, _point: Vector2) -> bool {
        panic!("hit test failed")
    }

    #[gdvirtual]
    fn _get_minimum_size(&self) -> Vector2 {
        Vector2::new(40.0, 20.0)
    }
}

fn setup() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let loaded = unsafe { gdbind_test_engine::load_host(__gdbind_entry::gdbind_init) };
        assert!(loaded, "host entry point declined");
    });
}

#[test]
fn entry_point_registers_everything() {
    setup();
    assert!(gdbind::runtime::is_api_initialized());
    assert!(class_registry::is_subclass("ScriptEditor", "TextEdit"));
    assert!(class_registry::is_subclass("Fragile", "Control"));
    assert!(gdbind_test_engine::logged_contains("gdbind initialized (features: core"));
    // A second init against the same table changes nothing.
    assert!(!gdbind::init(gdbind_test_engine::interface()).is_null());
}

#[test]
fn code_edit_override_sees_the_replace_flag() {
    setup();
    let editor = Subclass::<ScriptEditor>::new().expect("construct ScriptEditor");
    editor.confirm_code_completion(true);
    assert_eq!(*LAST_REPLACE.lock().unwrap(), Some(true));
    assert_eq!(editor.bind().confirmations, 1);
    assert!(editor.free());
}

#[test]
fn overrides_fall_through_the_chain() {
    setup();
    let editor = Subclass::<ScriptEditor>::new().expect("construct ScriptEditor");
    editor.set_text("abc");
    // Declared on TextEdit, overridden here: the engine default is replaced.
    editor.backspace(-1);
    assert_eq!(editor.bind().backspaces, vec![-1]);
    assert_eq!(editor.text(), "abc");

    // Not overridden anywhere: the engine's own behavior runs.
    let requested = Rc::new(Cell::new(0));
    let seen = requested.clone();
    editor.on_code_completion_requested(move || seen.set(seen.get() + 1));
    editor.request_code_completion(true);
    assert_eq!(requested.get(), 1);

    let plain = CodeEdit::new();
    plain.set_text("abc");
    plain.backspace(-1);
    assert_eq!(plain.text(), "ab");
    assert!(editor.free());
    assert!(plain.free());
}

#[test]
fn panicking_override_returns_the_default() {
    setup();
    let fragile = Subclass::<Fragile>::new().expect("construct Fragile");
    let h = fragile.handle();
    let hit = gdbind_test_engine::call_virtual(h, "_has_point", vec![Value::Vector2([1.0, 1.0])]);
    assert_eq!(hit, Some(Value::Bool(false)));
    assert!(gdbind_test_engine::logged_contains("host panic: hit test failed"));

    // The instance keeps working afterwards.
    assert_eq!(fragile.get_combined_minimum_size(), Vector2::new(40.0, 20.0));
    fragile.set_custom_minimum_size(Vector2::new(50.0, 10.0));
    assert_eq!(fragile.get_combined_minimum_size(), Vector2::new(50.0, 20.0));
    assert!(fragile.free());
}

#[test]
fn host_instances_cast_back_from_the_engine() {
    setup();
    let editor = Subclass::<ScriptEditor>::new().expect("construct ScriptEditor");
    let object: &Object = editor.upcast();
    let text_edit = try_cast::<TextEdit>(object).expect("ScriptEditor is a TextEdit");
    assert!(try_cast::<Node3D>(object).is_none());
    let as_code_edit = try_cast::<CodeEdit>(&text_edit).expect("and a CodeEdit");
    let typed = Subclass::<ScriptEditor>::from_base(as_code_edit).expect("host instance");
    assert_eq!(typed.handle(), editor.handle());
    assert!(Subclass::<Fragile>::new().is_ok_and(|f| f.free()));
    assert!(editor.free());
}
