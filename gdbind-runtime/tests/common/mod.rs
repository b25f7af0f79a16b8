// Shared setup for the runtime integration tests: the in-process engine and
// a handful of hand-written façades shaped like the generated ones.

#![allow(dead_code)]

use std::ops::Deref;
use std::sync::{Once, OnceLock};

use gdbind_ffi::HostCallbacks;
use gdbind_runtime::*;

unsafe extern "C" fn on_object_freed(obj: ObjectPtr) {
    pointer_registry::invalidate(obj);
}

unsafe extern "C" fn on_shutdown() {
    pointer_registry::clear();
}

/// Initialize the runtime against the test engine once per test binary.
pub fn setup() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        init_api(gdbind_test_engine::interface()).expect("init against the test engine");
        gdbind_test_engine::set_host_callbacks(&HostCallbacks { on_shutdown, on_object_freed });
    });
}

/// Generated façade shape, minus the parts these tests don't need.
macro_rules! facade {
    (
        $name:ident: $handle:ident,
        refcounted = $rc:literal,
        base = [$($base:ident),*],
        virtuals = [$($v:literal),*]
    ) => {
        #[repr(transparent)]
        #[derive(Clone, PartialEq, Eq, Debug, Default)]
        pub struct $name($handle);

        impl EngineClass for $name {
            const CLASS_NAME: &'static str = stringify!($name);
            const REF_COUNTED: bool = $rc;
            const VIRTUALS: &'static [&'static str] = &[$($v),*];

            unsafe fn from_handle(ptr: ObjectPtr) -> Self {
                $name(facade!(@wrap $handle, ptr))
            }

            fn handle(&self) -> ObjectPtr {
                self.0.ptr()
            }

            fn virtual_owner(name: &str) -> Option<&'static str> {
                facade!(@owner $name, name, [$($base),*])
            }
        }

        $(unsafe impl Inherits<$base> for $name {})*
    };
    (@wrap RefHandle, $ptr:ident) => { unsafe { RefHandle::adopt($ptr) } };
    (@wrap ObjectRef, $ptr:ident) => { ObjectRef::from_ptr($ptr) };
    (@owner $name:ident, $n:ident, []) => {
        <$name as EngineClass>::VIRTUALS
            .contains(&$n)
            .then_some(<$name as EngineClass>::CLASS_NAME)
    };
    (@owner $name:ident, $n:ident, [$first:ident $(, $rest:ident)*]) => {
        find_virtual::<$name>($n)
    };
}

macro_rules! has_base {
    ($name:ident => $base:ident) => {
        impl HasBase for $name {
            type Base = $base;
        }

        impl Deref for $name {
            type Target = $base;

            fn deref(&self) -> &$base {
                upcast_ref(self)
            }
        }
    };
}

facade!(Object: ObjectRef, refcounted = false, base = [], virtuals = []);
facade!(RefCounted: RefHandle, refcounted = true, base = [Object], virtuals = []);
facade!(
    Resource: RefHandle,
    refcounted = true,
    base = [RefCounted, Object],
    virtuals = ["_setup_local_to_scene"]
);
facade!(
    NavigationMesh: RefHandle,
    refcounted = true,
    base = [Resource, RefCounted, Object],
    virtuals = []
);
facade!(
    Node: ObjectRef,
    refcounted = false,
    base = [Object],
    virtuals = ["_ready", "_process", "_physics_process", "_enter_tree", "_exit_tree"]
);
facade!(Node3D: ObjectRef, refcounted = false, base = [Node, Object], virtuals = []);
facade!(Geometry2D: ObjectRef, refcounted = false, base = [Object], virtuals = []);

has_base!(RefCounted => Object);
has_base!(Resource => RefCounted);
has_base!(NavigationMesh => Resource);
has_base!(Node => Object);
has_base!(Node3D => Node);
has_base!(Geometry2D => Object);

impl Copy for Object {}
impl Copy for Node {}
impl Copy for Node3D {}
impl Copy for Geometry2D {}

// ---------------------------------------------------------------------------
// Bind table
// ---------------------------------------------------------------------------

pub struct Binds {
    pub get_class: MethodBind,
    pub get_instance_id: MethodBind,
    pub has_signal: MethodBind,
    pub get_reference_count: MethodBind,
    pub set_name: MethodBind,
    pub get_name: MethodBind,
    pub duplicate: MethodBind,
    pub emit_changed: MethodBind,
    pub add_polygon: MethodBind,
    pub get_polygon: MethodBind,
    pub get_polygon_count: MethodBind,
    pub set_vertices: MethodBind,
    pub get_vertices: MethodBind,
    pub node_set_name: MethodBind,
    pub node_get_name: MethodBind,
    pub add_child: MethodBind,
    pub get_child_count: MethodBind,
    pub get_child: MethodBind,
    pub get_path: MethodBind,
    pub set_position: MethodBind,
    pub get_position: MethodBind,
    pub triangulate_polygon: MethodBind,
    pub get_closest_point_to_segment: MethodBind,
}

pub fn binds() -> &'static Binds {
    static BINDS: OnceLock<Binds> = OnceLock::new();
    BINDS.get_or_init(|| {
        setup();
        let mut r = BindResolver::new();
        let binds = Binds {
            get_class: r.resolve("Object", "get_class", 1167940824),
            get_instance_id: r.resolve("Object", "get_instance_id", 226389741),
            has_signal: r.resolve("Object", "has_signal", 985568283),
            get_reference_count: r.resolve("RefCounted", "get_reference_count", 818732690),
            set_name: r.resolve("Resource", "set_name", 739488590),
            get_name: r.resolve("Resource", "get_name", 1424133279),
            duplicate: r.resolve("Resource", "duplicate", 2118353938),
            emit_changed: r.resolve("Resource", "emit_changed", 395031546),
            add_polygon: r.resolve("NavigationMesh", "add_polygon", 335156160),
            get_polygon: r.resolve("NavigationMesh", "get_polygon", 944632012),
            get_polygon_count: r.resolve("NavigationMesh", "get_polygon_count", 63703332),
            set_vertices: r.resolve("NavigationMesh", "set_vertices", 790133996),
            get_vertices: r.resolve("NavigationMesh", "get_vertices", 537307759),
            node_set_name: r.resolve("Node", "set_name", 569317561),
            node_get_name: r.resolve("Node", "get_name", 1495148392),
            add_child: r.resolve("Node", "add_child", 1347469557),
            get_child_count: r.resolve("Node", "get_child_count", 266894019),
            get_child: r.resolve("Node", "get_child", 138290479),
            get_path: r.resolve("Node", "get_path", 208261729),
            set_position: r.resolve("Node3D", "set_position", 511406617),
            get_position: r.resolve("Node3D", "get_position", 291873946),
            triangulate_polygon: r.resolve("Geometry2D", "triangulate_polygon", 621178927),
            get_closest_point_to_segment: r.resolve(
                "Geometry2D",
                "get_closest_point_to_segment",
                1062773526,
            ),
        };
        r.finish().expect("every test bind resolves");
        binds
    })
}

// ---------------------------------------------------------------------------
// Forwarders
// ---------------------------------------------------------------------------

impl Object {
    pub fn get_class(&self) -> GString {
        unsafe { CallFrame::new().call_ret(binds().get_class, self.handle()) }
    }

    pub fn get_instance_id(&self) -> i64 {
        unsafe { CallFrame::new().call_ret(binds().get_instance_id, self.handle()) }
    }

    pub fn has_signal(&self, signal: &StringName) -> bool {
        let mut frame = CallFrame::new();
        frame.arg(signal);
        unsafe { frame.call_ret(binds().has_signal, self.handle()) }
    }
}

impl RefCounted {
    pub fn get_reference_count(&self) -> i64 {
        unsafe { CallFrame::new().call_ret(binds().get_reference_count, self.handle()) }
    }
}

impl Resource {
    pub fn new() -> Self {
        construct::<Self>()
    }

    pub fn set_name(&self, name: &GString) {
        let mut frame = CallFrame::new();
        frame.arg(name);
        unsafe { frame.call(binds().set_name, self.handle()) }
    }

    pub fn get_name(&self) -> GString {
        unsafe { CallFrame::new().call_ret(binds().get_name, self.handle()) }
    }

    pub fn duplicate(&self, subresources: bool) -> Option<Resource> {
        let mut frame = CallFrame::new();
        frame.arg(&subresources);
        let ptr: ObjectPtr = unsafe { frame.call_ret(binds().duplicate, self.handle()) };
        unsafe { adopt::<Resource>(ptr, Ownership::Transferred) }
    }

    pub fn emit_changed(&self) {
        unsafe { CallFrame::new().call(binds().emit_changed, self.handle()) }
    }
}

impl NavigationMesh {
    pub fn new() -> Self {
        construct::<Self>()
    }

    pub fn add_polygon(&self, polygon: &PackedInt32Array) {
        let mut frame = CallFrame::new();
        frame.arg(polygon);
        unsafe { frame.call(binds().add_polygon, self.handle()) }
    }

    pub fn get_polygon(&self, idx: i32) -> PackedInt32Array {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(idx));
        unsafe { frame.call_ret(binds().get_polygon, self.handle()) }
    }

    pub fn get_polygon_count(&self) -> i64 {
        unsafe { CallFrame::new().call_ret(binds().get_polygon_count, self.handle()) }
    }

    pub fn set_vertices(&self, vertices: &PackedVector3Array) {
        let mut frame = CallFrame::new();
        frame.arg(vertices);
        unsafe { frame.call(binds().set_vertices, self.handle()) }
    }

    pub fn get_vertices(&self) -> PackedVector3Array {
        unsafe { CallFrame::new().call_ret(binds().get_vertices, self.handle()) }
    }
}

impl Node {
    pub fn new() -> Self {
        construct::<Self>()
    }

    pub fn set_name(&self, name: &StringName) {
        let mut frame = CallFrame::new();
        frame.arg(name);
        unsafe { frame.call(binds().node_set_name, self.handle()) }
    }

    pub fn get_name(&self) -> StringName {
        unsafe { CallFrame::new().call_ret(binds().node_get_name, self.handle()) }
    }

    pub fn add_child(&self, node: &Node) {
        let mut frame = CallFrame::new();
        frame.arg(&node.handle()).arg(&false);
        unsafe { frame.call(binds().add_child, self.handle()) }
    }

    pub fn get_child_count(&self) -> i64 {
        let mut frame = CallFrame::new();
        frame.arg(&false);
        unsafe { frame.call_ret(binds().get_child_count, self.handle()) }
    }

    pub fn get_child(&self, idx: i32) -> Option<Node> {
        let mut frame = CallFrame::new();
        frame.arg(&i64::from(idx)).arg(&false);
        let ptr: ObjectPtr = unsafe { frame.call_ret(binds().get_child, self.handle()) };
        unsafe { adopt::<Node>(ptr, Ownership::Borrowed) }
    }

    pub fn get_path(&self) -> NodePath {
        unsafe { CallFrame::new().call_ret(binds().get_path, self.handle()) }
    }
}

impl Node3D {
    pub fn new() -> Self {
        construct::<Self>()
    }

    pub fn set_position(&self, position: Vector3) {
        let mut frame = CallFrame::new();
        frame.arg(&position);
        unsafe { frame.call(binds().set_position, self.handle()) }
    }

    pub fn get_position(&self) -> Vector3 {
        unsafe { CallFrame::new().call_ret(binds().get_position, self.handle()) }
    }
}

pub static GEOMETRY_2D: Singleton<Geometry2D> = Singleton::new("Geometry2D");

impl Geometry2D {
    pub fn singleton() -> Geometry2D {
        setup();
        GEOMETRY_2D.get()
    }

    pub fn triangulate_polygon(&self, polygon: &PackedVector2Array) -> PackedInt32Array {
        let mut frame = CallFrame::new();
        frame.arg(polygon);
        unsafe { frame.call_ret(binds().triangulate_polygon, self.handle()) }
    }

    pub fn get_closest_point_to_segment(
        &self,
        point: Vector2,
        s1: Vector2,
        s2: Vector2,
    ) -> Vector2 {
        let mut frame = CallFrame::new();
        frame.arg(&point).arg(&s1).arg(&s2);
        unsafe { frame.call_ret(binds().get_closest_point_to_segment, self.handle()) }
    }
}

/// Register the façades above with the class registry (what the generated
/// crate does through inventory).
pub fn register_test_classes() {
    setup();
    fn thunk<T: EngineClass + Default>(ptr: ObjectPtr) -> Box<dyn std::any::Any> {
        Box::new(unsafe { adopt::<T>(ptr, Ownership::Acquire) }.unwrap_or_default())
    }
    fn reg<T: EngineClass + Default>(parent: Option<&'static str>) -> ClassRegistration {
        ClassRegistration {
            name: T::CLASS_NAME,
            parent,
            ref_counted: T::REF_COUNTED,
            construct: thunk::<T>,
        }
    }
    let regs = [
        reg::<Object>(None),
        reg::<RefCounted>(Some("Object")),
        reg::<Resource>(Some("RefCounted")),
        reg::<NavigationMesh>(Some("Resource")),
        reg::<Node>(Some("Object")),
        reg::<Node3D>(Some("Node")),
        reg::<Geometry2D>(Some("Object")),
    ];
    for reg in &regs {
        class_registry::register(reg);
    }
}
