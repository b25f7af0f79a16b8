use std::path::{Path, PathBuf};

use gdbind_codegen::config::GdbindConfig;
use gdbind_codegen::context::CodegenContext;
use gdbind_codegen::error::CodegenError;
use gdbind_codegen::rust_gen;
use gdbind_codegen::schema::ApiFile;
use gdbind_codegen::verify::duplicate_fns;
use pretty_assertions::assert_eq;

const API: &str = r#"{
  "header": {"version_major": 4, "version_minor": 2, "version_patch": 0,
             "version_full_name": "Test Engine v4.2.0"},
  "global_enums": [
    {"name": "Error", "values": [{"name": "OK", "value": 0}, {"name": "FAILED", "value": 1}]}
  ],
  "singletons": [{"name": "Geometry2D", "type": "Geometry2D"}],
  "classes": [
    {"name": "Object", "is_instantiable": true,
     "methods": [
       {"name": "get_class", "is_const": true, "hash": 201670096,
        "return_value": {"type": "String"}},
       {"name": "get_instance_id", "hash": 3905245786,
        "return_value": {"type": "int", "meta": "uint64"}},
       {"name": "emit_signal", "is_vararg": true, "hash": 4047867050,
        "return_value": {"type": "enum::Error"}},
       {"name": "get_rect", "hash": 1, "return_value": {"type": "Rect2"}}
     ],
     "signals": [{"name": "script_changed"}]},
    {"name": "RefCounted", "inherits": "Object", "is_refcounted": true, "is_instantiable": true,
     "methods": [{"name": "get_reference_count", "hash": 3905245786,
                  "return_value": {"type": "int", "meta": "int32"}}]},
    {"name": "Resource", "inherits": "RefCounted", "is_refcounted": true, "is_instantiable": true,
     "methods": [
       {"name": "set_name", "hash": 83702148, "arguments": [{"name": "name", "type": "String"}]},
       {"name": "get_name", "is_const": true, "hash": 201670096,
        "return_value": {"type": "String"}},
       {"name": "duplicate", "is_const": true, "hash": 482801347,
        "return_value": {"type": "Resource", "ownership": "transferred"},
        "arguments": [{"name": "subresources", "type": "bool", "default_value": "false"}]},
       {"name": "_setup_local_to_scene", "is_virtual": true, "hash": 0}
     ],
     "signals": [{"name": "changed"}],
     "properties": [{"type": "String", "name": "resource_name",
                     "setter": "set_name", "getter": "get_name"}]},
    {"name": "Node", "inherits": "Object", "is_instantiable": true,
     "enums": [{"name": "ProcessMode", "values": [
       {"name": "PROCESS_MODE_INHERIT", "value": 0},
       {"name": "PROCESS_MODE_ALWAYS", "value": 3}]}],
     "methods": [
       {"name": "add_child", "hash": 3863233950, "arguments": [
         {"name": "node", "type": "Node"},
         {"name": "force_readable_name", "type": "bool", "default_value": "false"}]},
       {"name": "get_child", "is_const": true, "hash": 541253412,
        "return_value": {"type": "Node", "ownership": "borrowed"},
        "arguments": [{"name": "idx", "type": "int", "meta": "int32"}]},
       {"name": "set_process_mode", "hash": 1841290486,
        "arguments": [{"name": "mode", "type": "enum::Node.ProcessMode"}]},
       {"name": "get_process_mode", "hash": 739966102,
        "return_value": {"type": "enum::Node.ProcessMode"}},
       {"name": "get_window", "hash": 1757182445, "return_value": {"type": "Window"}},
       {"name": "get_node_count", "is_static": true, "hash": 3905245786,
        "return_value": {"type": "int"}},
       {"name": "_ready", "is_virtual": true, "hash": 0}
     ],
     "signals": [{"name": "child_entered_tree", "arguments": [{"name": "node", "type": "Node"}]}],
     "properties": [{"type": "int", "name": "process_mode",
                     "setter": "set_process_mode", "getter": "get_process_mode"}]},
    {"name": "Window", "inherits": "Node", "is_instantiable": true},
    {"name": "AudioEffect", "inherits": "Resource", "is_refcounted": true},
    {"name": "AudioEffectChorus", "inherits": "AudioEffect",
     "is_refcounted": true, "is_instantiable": true,
     "methods": [
       {"name": "set_voice_delay_ms", "hash": 400354002, "arguments": [
         {"name": "voice_idx", "type": "int", "meta": "int32"},
         {"name": "delay_ms", "type": "float", "meta": "float"}]},
       {"name": "get_voice_delay_ms", "is_const": true, "hash": 2339986948,
        "return_value": {"type": "float", "meta": "float"},
        "arguments": [{"name": "voice_idx", "type": "int", "meta": "int32"}]}
     ]},
    {"name": "Geometry2D", "inherits": "Object",
     "methods": [
       {"name": "triangulate_polygon", "hash": 1389921771,
        "return_value": {"type": "PackedInt32Array"},
        "arguments": [{"name": "polygon", "type": "PackedVector2Array"}]}
     ]}
  ]
}"#;

const CONFIG: &str = r#"
[codegen]
api = "api/extension_api.json"
out = "src"

[codegen.features]
audio = []
geometry = []
gui = []

[codegen.modules]
AudioEffect = "audio"
AudioEffectChorus = "audio"
Geometry2D = "geometry"
Window = "gui"
"#;

fn context() -> CodegenContext {
    let api: ApiFile = serde_json::from_str(API).unwrap();
    let config: GdbindConfig = toml::from_str(CONFIG).unwrap();
    CodegenContext::new(api, &config.codegen).unwrap()
}

fn file(rel: &str) -> String {
    let files = rust_gen::generate(&context());
    files.get(Path::new(rel)).cloned().unwrap_or_else(|| panic!("{rel} not generated"))
}

/// The item starting at `start` up to its closing line at `indent`.
fn item(code: &str, start: &str, indent: &str) -> String {
    let from = code.find(start).unwrap_or_else(|| panic!("`{start}` not found"));
    let close = format!("\n{indent}}}\n");
    let len = code[from..].find(&close).expect("item closes") + close.len();
    code[from..from + len].to_owned()
}

#[test]
fn file_set_follows_modules() {
    let files = rust_gen::generate(&context());
    let paths: Vec<PathBuf> = files.keys().cloned().collect();
    let expected: Vec<PathBuf> = [
        "audio/audio_effect.rs",
        "audio/audio_effect_chorus.rs",
        "audio/mod.rs",
        "bind_table.rs",
        "core/node.rs",
        "core/object.rs",
        "core/mod.rs",
        "core/ref_counted.rs",
        "core/resource.rs",
        "geometry/geometry_2d.rs",
        "geometry/mod.rs",
        "global_enums.rs",
        "gui/mod.rs",
        "gui/window.rs",
        "lib.rs",
        "virtuals.rs",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();
    let mut sorted = expected;
    sorted.sort();
    assert_eq!(paths, sorted);
}

#[test]
fn narrow_numerics_widen_on_the_wire() {
    let code = file("audio/audio_effect_chorus.rs");
    assert_eq!(
        item(
            &code,
            "    pub fn set_voice_delay_ms(&self, voice_idx: i32, \
             delay_ms: f32) {\n        let mut",
            "    "
        ),
        "    pub fn set_voice_delay_ms(&self, voice_idx: i32, delay_ms: f32) {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(voice_idx)).arg(&f64::from(delay_ms));
        unsafe { frame.call(binds().audio_effect_chorus.set_voice_delay_ms, self.0.handle()) }
    }
"
    );
    assert_eq!(
        item(
            &code,
            "    pub fn get_voice_delay_ms(&self, voice_idx: i32) -> f32 {\n        let mut",
            "    "
        ),
        "    pub fn get_voice_delay_ms(&self, voice_idx: i32) -> f32 {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(voice_idx));
        let ret: f64 = unsafe { frame.call_ret(binds().audio_effect_chorus.get_voice_delay_ms, \
        self.0.handle()) };
        ret as f32
    }
"
    );
}

#[test]
fn properties_use_host_types_on_the_instance() {
    let code = file("core/resource.rs");
    let instance = item(&code, "impl Resource {", "");
    assert!(instance.contains(
        "    /// Property `resource_name`.
    pub fn resource_name(&self) -> String {
        self.advanced().get_name().to_string()
    }
"
    ));
    assert!(instance.contains(
        "    pub fn set_resource_name(&self, value: &str) {
        self.advanced().set_name(&GString::from(value))
    }
"
    ));
    // Accessors are reached through the property names only.
    assert!(!instance.contains("pub fn get_name"));
    assert!(!instance.contains("pub fn set_name"));

    let advanced = item(&code, "impl Advanced {", "");
    assert!(advanced.contains("    pub fn set_name(&self, name: &GString) {"));
    assert!(advanced.contains(
        "    pub fn get_name(&self) -> GString {\n        \
         unsafe { CallFrame::new().call_ret(binds().resource.get_name, self.0.handle()) }\n"
    ));
}

#[test]
fn object_returns_follow_declared_ownership() {
    let resource = file("core/resource.rs");
    assert_eq!(
        item(
            &resource,
            "    pub fn duplicate(&self, subresources: bool) \
             -> Option<Resource> {\n        let mut",
            "    "
        ),
        "    pub fn duplicate(&self, subresources: bool) -> Option<Resource> {
        let mut frame = CallFrame::new();
        frame.arg(&subresources);
        let ret: ObjectPtr = unsafe { frame.call_ret(binds().resource.duplicate, self.0.handle()) };
        unsafe { adopt::<Resource>(ret, Ownership::Transferred) }
    }
"
    );
    let node = file("core/node.rs");
    assert!(node.contains("unsafe { adopt::<Node>(ret, Ownership::Borrowed) }"));
    assert!(node.contains(
        "    pub fn add_child(&self, node: &impl Inherits<Node>, \
         force_readable_name: bool) {\n        \
         self.advanced().add_child(Some(upcast_ref(node)), force_readable_name)\n"
    ));
    assert!(node.contains(
        "frame.arg(&node.map_or(ObjectPtr::NULL, |o| o.handle())).arg(&force_readable_name);"
    ));
}

#[test]
fn refcount_policy_picks_the_handle() {
    let resource = file("core/resource.rs");
    assert!(resource.contains(
        "#[derive(Clone, PartialEq, Eq, Debug, Default)]\n\
         pub struct Resource(RefHandle);"
    ));
    assert!(resource.contains("const REF_COUNTED: bool = true;"));
    assert!(resource.contains("Resource(unsafe { RefHandle::adopt(ptr) })"));
    assert!(resource.contains(
        "unsafe impl Inherits<RefCounted> for Resource {}\n\
         unsafe impl Inherits<Object> for Resource {}"
    ));
    assert!(resource
        .contains("const VIRTUALS: &'static [&'static str] = &[\"_setup_local_to_scene\"];"));
    assert!(resource.contains(
        "ClassRegistration { name: \"Resource\", parent: Some(\"RefCounted\"), \
         ref_counted: true, construct: wrap_handle }"
    ));

    let node = file("core/node.rs");
    assert!(node.contains(
        "#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]\n\
         pub struct Node(ObjectRef);"
    ));
    assert!(node.contains(
        "fn virtual_owner(name: &str) -> Option<&'static str> {\n\
         \x20       find_virtual::<Self>(name)\n"
    ));

    let object = file("core/object.rs");
    assert!(object
        .contains("if Self::VIRTUALS.contains(&name) { Some(Self::CLASS_NAME) } else { None }"));
    assert!(!object.contains("impl HasBase"));
}

#[test]
fn unreachable_modules_gate_members() {
    let node = file("core/node.rs");
    assert!(node.contains("#[cfg(feature = \"gui\")]\nuse crate::Window;\n"));
    assert!(node.contains(
        "    #[cfg(feature = \"gui\")]\n\
         \x20   pub fn get_window(&self) -> Option<Window> {"
    ));

    let table = file("bind_table.rs");
    assert!(table.contains(
        "#[cfg(feature = \"audio\")]\n\
         \x20   pub audio_effect_chorus: AudioEffectChorusBinds,"
    ));
    assert!(table.contains("    #[cfg(feature = \"gui\")]\n    pub get_window: MethodBind,"));
    assert!(table.contains(
        "            set_voice_delay_ms: r.resolve(\"AudioEffectChorus\", \
         \"set_voice_delay_ms\", 400354002),"
    ));

    let lib = file("lib.rs");
    assert!(lib.contains(
        "#[rustfmt::skip]\npub mod core;\npub use self::core::*;\n\
         #[cfg(feature = \"audio\")]\n#[rustfmt::skip]\npub mod audio;\n\
         #[cfg(feature = \"audio\")]\npub use self::audio::*;"
    ));
}

#[test]
fn unsupported_methods_are_skipped() {
    let object = file("core/object.rs");
    assert!(!object.contains("emit_signal"));
    assert!(!object.contains("get_rect"));
    assert!(object.contains("pub fn get_instance_id(&self) -> i64"));
    let node = file("core/node.rs");
    assert!(!node.contains("get_node_count"));
    // Virtuals are listed, never forwarded.
    assert!(node.contains("&[\"_ready\"]"));
    assert!(!node.contains("pub fn _ready"));
}

#[test]
fn overridables_carry_their_signature_down_the_chain() {
    let markers = file("virtuals.rs");
    assert!(markers.contains(
        "#![allow(non_camel_case_types)]\n\npub struct _ready;\npub struct _setup_local_to_scene;\n"
    ));

    let node = file("core/node.rs");
    assert!(node.contains(
        "impl Overridable<crate::virtuals::_ready> for Node {\n    type Signature = fn();\n}\n"
    ));
    // Inherited overridables keep the declaring class's signature.
    let window = file("gui/window.rs");
    assert!(window.contains("impl Overridable<crate::virtuals::_ready> for Window {"));
    let resource = file("core/resource.rs");
    assert!(resource
        .contains("impl Overridable<crate::virtuals::_setup_local_to_scene> for Resource {"));
    assert!(!resource.contains("virtuals::_ready"));
}

#[test]
fn empty_bind_structs_stay_on_one_line() {
    let table = file("bind_table.rs");
    assert!(table.contains("pub struct WindowBinds {}\n"));
    assert!(table.contains("        window: WindowBinds {},\n"));
}

#[test]
fn enums_and_signals() {
    let node = file("core/node.rs");
    assert!(node.contains("pub const ALWAYS: ProcessMode = ProcessMode(3);"));
    assert!(node.contains("const NAME: &'static str = \"Node.ProcessMode\";"));
    assert!(node.contains("    pub fn process_mode(&self) -> crate::core::node::ProcessMode {"));
    assert_eq!(
        item(&node, "    /// Connect `f` to the `child_entered_tree` signal.", "    "),
        "    /// Connect `f` to the `child_entered_tree` signal.
    pub fn on_child_entered_tree(&self, mut f: impl FnMut(Option<Node>) + 'static) \
    -> crate::global_enums::Error {
        let code = signal::connect_fn(self.handle(), \"child_entered_tree\", move |args| {
            f(args.object::<Node>(0));
            Variant::nil()
        });
        crate::global_enums::Error::from_ord(code)
    }
"
    );
    assert!(file("core/resource.rs").contains("move |_| {\n            f();"));
    assert!(file("global_enums.rs").contains("pub const FAILED: Error = Error(1);"));
}

#[test]
fn singletons_get_a_static() {
    let code = file("geometry/geometry_2d.rs");
    assert!(code.contains(
        "pub static GEOMETRY_2D: Singleton<Geometry2D> = Singleton::new(\"Geometry2D\");"
    ));
    assert!(code.contains("pub fn singleton() -> Self {\n        GEOMETRY_2D.get()\n"));
    assert!(!code.contains("pub fn new()"));
    assert!(code.contains("pub fn triangulate_polygon(&self, polygon: &[Vector2]) -> Vec<i32> {"));
    assert!(file("geometry/mod.rs").contains("pub use geometry_2d::{Geometry2D, GEOMETRY_2D};"));
}

#[test]
fn generated_impls_define_each_name_once() {
    for (path, code) in rust_gen::generate(&context()) {
        assert_eq!(duplicate_fns(&code), Vec::new(), "{}", path.display());
    }
}

#[test]
fn features_must_reach_their_bases() {
    let api: ApiFile = serde_json::from_str(API).unwrap();
    let src = CONFIG.replace("Window = \"gui\"", "Window = \"gui\"\nNode = \"audio\"");
    let config: GdbindConfig = toml::from_str(&src).unwrap();
    let err = CodegenContext::new(api, &config.codegen);
    assert!(matches!(err, Err(CodegenError::BaseNotReachable { .. })));
}

#[test]
fn run_generate_writes_and_verifies() {
    let root = std::env::temp_dir().join(format!("gdbind-codegen-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&root);
    std::fs::create_dir_all(root.join("api")).unwrap();
    std::fs::create_dir_all(root.join("src/manual")).unwrap();
    std::fs::write(root.join("api/extension_api.json"), API).unwrap();
    std::fs::write(root.join("src/manual/mod.rs"), "").unwrap();
    std::fs::write(root.join("gdbind.toml"), CONFIG).unwrap();

    let summary = gdbind_codegen::run_generate(&root.join("gdbind.toml")).unwrap();
    assert_eq!(summary.classes, 8);
    assert_eq!(summary.modules, 4);
    assert!(root.join("src/audio/audio_effect_chorus.rs").exists());
    assert!(std::fs::read_to_string(root.join("src/lib.rs")).unwrap().contains("pub mod manual;"));

    // Without the hand-written module the tree is incomplete.
    std::fs::remove_dir_all(root.join("src/manual")).unwrap();
    let err = gdbind_codegen::run_generate(&root.join("gdbind.toml")).unwrap_err();
    assert!(matches!(err, CodegenError::Verification(ref e) if e.len() == 1));
    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn checked_in_classes_match_the_manifest() {
    let classes = Path::new(env!("CARGO_MANIFEST_DIR")).join("../gdbind-classes");
    let read = |path: PathBuf| std::fs::read_to_string(path).unwrap();
    let config: GdbindConfig = toml::from_str(&read(classes.join("gdbind.toml"))).unwrap();
    let api: ApiFile = serde_json::from_str(&read(classes.join(&config.codegen.api))).unwrap();
    let ctx = CodegenContext::new(api, &config.codegen).unwrap();
    let out = classes.join(&config.codegen.out);
    for (rel, code) in rust_gen::generate(&ctx) {
        let checked_in = std::fs::read_to_string(out.join(&rel))
            .unwrap_or_else(|_| panic!("{} missing", rel.display()));
        assert_eq!(checked_in, code, "{} is stale; rerun `gdbind generate`", rel.display());
    }
}
